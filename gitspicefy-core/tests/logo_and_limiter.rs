use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Barrier;
use std::time::{Duration, Instant};

use gitspicefy_core::logo::{choose_design, generate_logo_for_project, LogoStyle};
use gitspicefy_core::rate_limit::{InMemoryAttemptStore, LoginAttemptLimiter, MAX_ATTEMPTS, WINDOW};

#[test]
fn test_logo_is_deterministic() {
    let a = generate_logo_for_project("photo-gallery", Some("React Application"), Some("share pictures"));
    let b = generate_logo_for_project("photo-gallery", Some("React Application"), Some("share pictures"));
    assert_eq!(a, b);
    assert!(a.starts_with("<svg width=\"200\" height=\"80\""));
    assert!(a.trim_end().ends_with("</svg>"));
}

#[test]
fn test_logo_design_follows_project_type() {
    let vue = choose_design("storefront", Some("Vue.js Application"), None);
    assert_eq!(vue.style, LogoStyle::Gradient);
    assert_eq!(vue.primary, "#4FC08D");

    let go = choose_design("proxy", Some("Go Application"), None);
    assert_eq!(go.style, LogoStyle::Minimal);

    let python_art = choose_design("sketch", Some("Python Application"), Some("creative art studio"));
    assert_eq!(python_art.style, LogoStyle::Creative);
    assert_eq!(python_art.primary, "#3776AB");
}

#[test]
fn test_logo_falls_back_to_initials() {
    let svg = generate_logo_for_project("zebra stripes", None, None);
    assert!(svg.contains(">ZS</text>"));
}

#[test]
fn test_limiter_blocks_after_five_attempts() {
    let limiter = LoginAttemptLimiter::new(InMemoryAttemptStore::new());
    let start = Instant::now();

    for i in 0..MAX_ATTEMPTS {
        assert!(limiter.check("10.0.0.1", start + Duration::from_secs(u64::from(i))));
    }
    assert!(!limiter.check("10.0.0.1", start + Duration::from_secs(10)));
    assert!(limiter.check("10.0.0.2", start + Duration::from_secs(10)));
}

#[test]
fn test_limiter_window_resets_after_inactivity() {
    let limiter = LoginAttemptLimiter::new(InMemoryAttemptStore::new());
    let start = Instant::now();
    for _ in 0..MAX_ATTEMPTS {
        limiter.check("admin", start);
    }
    assert!(!limiter.check("admin", start + WINDOW));
    assert!(limiter.check("admin", start + WINDOW + Duration::from_secs(1)));
}

#[test]
fn test_limiter_reset_clears_counter() {
    let limiter = LoginAttemptLimiter::with_limits(InMemoryAttemptStore::new(), 1, WINDOW);
    let now = Instant::now();
    assert!(limiter.check("k", now));
    assert!(!limiter.check("k", now));
    limiter.reset("k");
    assert!(limiter.check("k", now));
}

#[test]
fn test_limiter_allows_exactly_max_attempts_under_contention() {
    let limiter = LoginAttemptLimiter::new(InMemoryAttemptStore::new());
    let now = Instant::now();
    let allowed = AtomicU32::new(0);

    std::thread::scope(|scope| {
        for _ in 0..32 {
            scope.spawn(|| {
                if limiter.check("203.0.113.7", now) {
                    allowed.fetch_add(1, Ordering::SeqCst);
                }
            });
        }
    });

    assert_eq!(allowed.load(Ordering::SeqCst), MAX_ATTEMPTS);
}

#[test]
fn test_limiter_last_remaining_attempt_goes_to_one_caller() {
    let limiter = LoginAttemptLimiter::new(InMemoryAttemptStore::new());
    let now = Instant::now();
    for _ in 0..MAX_ATTEMPTS - 1 {
        assert!(limiter.check("admin", now));
    }
    let barrier = Barrier::new(2);
    let allowed = AtomicU32::new(0);

    std::thread::scope(|scope| {
        for _ in 0..2 {
            scope.spawn(|| {
                barrier.wait();
                if limiter.check("admin", now) {
                    allowed.fetch_add(1, Ordering::SeqCst);
                }
            });
        }
    });

    assert_eq!(allowed.load(Ordering::SeqCst), 1);
}

#[test]
fn test_store_prunes_expired_keys() {
    let limiter = LoginAttemptLimiter::new(InMemoryAttemptStore::new());
    let start = Instant::now();
    for i in 0..100 {
        limiter.check(&format!("10.0.0.{i}"), start);
    }
    assert_eq!(limiter.store().len(), 100);

    limiter.check("10.0.1.1", start + WINDOW + Duration::from_secs(1));
    assert_eq!(limiter.store().len(), 1);
}
