//! Login attempt limiting.
//!
//! [`LoginAttemptLimiter`] allows [`MAX_ATTEMPTS`] attempts per client key within a
//! [`WINDOW`]. A window that has been idle for longer than [`WINDOW`] starts over. Counters
//! live in an injected [`AttemptStore`] so a shared store can replace the in-memory one.
//! Callers pass `now` explicitly.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

pub const MAX_ATTEMPTS: u32 = 5;
pub const WINDOW: Duration = Duration::from_secs(15 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptRecord {
    pub count: u32,
    pub last_attempt: Instant,
}

impl AttemptRecord {
    fn is_expired(&self, now: Instant, window: Duration) -> bool {
        now.saturating_duration_since(self.last_attempt) > window
    }
}

/// Record to store after an attempt at `now`, or `None` when the attempt is blocked.
///
/// Blocked attempts leave the stored record untouched, so the window is measured from the
/// last allowed attempt.
pub fn next_record(
    existing: Option<AttemptRecord>,
    now: Instant,
    window: Duration,
    max_attempts: u32,
) -> Option<AttemptRecord> {
    match existing {
        Some(r) if !r.is_expired(now, window) => (r.count < max_attempts).then_some(AttemptRecord {
            count: r.count + 1,
            last_attempt: now,
        }),
        _ => Some(AttemptRecord {
            count: 1,
            last_attempt: now,
        }),
    }
}

/// Storage for per-key attempt counters.
///
/// `record_attempt` must read and update a key as one atomic step; concurrent attempts on
/// the same key must never both observe the same count.
pub trait AttemptStore: Send + Sync {
    fn record_attempt(&self, key: &str, now: Instant, window: Duration, max_attempts: u32) -> bool;
    fn remove(&self, key: &str);
}

/// Process-local store. Expired keys are pruned on every attempt.
#[derive(Debug, Default)]
pub struct InMemoryAttemptStore {
    records: Mutex<HashMap<String, AttemptRecord>>,
}

impl InMemoryAttemptStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, AttemptRecord>> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Number of keys currently tracked.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AttemptStore for InMemoryAttemptStore {
    fn record_attempt(&self, key: &str, now: Instant, window: Duration, max_attempts: u32) -> bool {
        let mut records = self.lock();
        records.retain(|_, r| !r.is_expired(now, window));
        match next_record(records.get(key).copied(), now, window, max_attempts) {
            Some(record) => {
                records.insert(key.to_string(), record);
                true
            }
            None => false,
        }
    }

    fn remove(&self, key: &str) {
        self.lock().remove(key);
    }
}

pub struct LoginAttemptLimiter<S: AttemptStore> {
    store: S,
    max_attempts: u32,
    window: Duration,
}

impl<S: AttemptStore> LoginAttemptLimiter<S> {
    pub fn new(store: S) -> Self {
        LoginAttemptLimiter {
            store,
            max_attempts: MAX_ATTEMPTS,
            window: WINDOW,
        }
    }

    pub fn with_limits(store: S, max_attempts: u32, window: Duration) -> Self {
        LoginAttemptLimiter {
            store,
            max_attempts,
            window,
        }
    }

    /// Records an attempt for `key` and returns whether it is allowed.
    pub fn check(&self, key: &str, now: Instant) -> bool {
        let allowed = self
            .store
            .record_attempt(key, now, self.window, self.max_attempts);
        if !allowed {
            tracing::warn!(key, max_attempts = self.max_attempts, "Login attempts exhausted");
        }
        allowed
    }

    /// Clears the counter, typically after a successful login.
    pub fn reset(&self, key: &str) {
        self.store.remove(key);
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
