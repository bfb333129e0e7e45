//! Deterministic inline SVG logos.
//!
//! A project's name and description are matched against a fixed theme table to pick a
//! palette and one of five templates. Project-type and name-word overrides take priority
//! over the detected theme. The same inputs always yield the same SVG string.

use std::fmt;

pub const LOGO_WIDTH: u32 = 200;
pub const LOGO_HEIGHT: u32 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoStyle {
    Modern,
    Minimal,
    Gradient,
    Tech,
    Creative,
}

impl fmt::Display for LogoStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogoStyle::Modern => "modern",
            LogoStyle::Minimal => "minimal",
            LogoStyle::Gradient => "gradient",
            LogoStyle::Tech => "tech",
            LogoStyle::Creative => "creative",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoDesign {
    pub style: LogoStyle,
    pub primary: &'static str,
    pub secondary: &'static str,
}

const fn design(style: LogoStyle, primary: &'static str, secondary: &'static str) -> LogoDesign {
    LogoDesign {
        style,
        primary,
        secondary,
    }
}

/// Theme table in priority order: on equal match counts the earlier theme is kept.
const THEMES: &[(&str, &[&str], LogoDesign)] = &[
    (
        "tech",
        &["api", "code", "dev", "tech", "software", "app", "web", "digital", "cyber", "data", "ai", "ml", "bot"],
        design(LogoStyle::Tech, "#4F46E5", "#7C3AED"),
    ),
    (
        "creative",
        &["design", "art", "creative", "studio", "media", "graphics", "visual", "ui", "ux", "brand"],
        design(LogoStyle::Creative, "#FF6B6B", "#4ECDC4"),
    ),
    (
        "business",
        &["business", "enterprise", "corporate", "finance", "commerce", "trade", "market", "sales"],
        design(LogoStyle::Minimal, "#2C3E50", "#3498DB"),
    ),
    (
        "gaming",
        &["game", "gaming", "play", "arcade", "quest", "adventure", "rpg", "strategy"],
        design(LogoStyle::Gradient, "#9B59B6", "#E74C3C"),
    ),
    (
        "social",
        &["social", "chat", "community", "network", "connect", "share", "friend", "message"],
        design(LogoStyle::Creative, "#3B82F6", "#10B981"),
    ),
    (
        "education",
        &["learn", "education", "school", "course", "tutorial", "study", "knowledge", "teach"],
        design(LogoStyle::Modern, "#F59E0B", "#EF4444"),
    ),
    (
        "health",
        &["health", "medical", "fitness", "wellness", "care", "doctor", "hospital", "medicine"],
        design(LogoStyle::Minimal, "#10B981", "#06B6D4"),
    ),
    (
        "finance",
        &["finance", "bank", "money", "payment", "wallet", "crypto", "coin", "invest"],
        design(LogoStyle::Tech, "#059669", "#1F2937"),
    ),
    (
        "ecommerce",
        &["shop", "store", "cart", "buy", "sell", "market", "commerce", "retail"],
        design(LogoStyle::Gradient, "#F59E0B", "#EF4444"),
    ),
    (
        "productivity",
        &["task", "todo", "manage", "organize", "plan", "schedule", "productivity", "work"],
        design(LogoStyle::Modern, "#6366F1", "#8B5CF6"),
    ),
];

/// Exact name words that force a design regardless of theme or project type.
const NAME_OVERRIDES: &[(&[&str], LogoDesign)] = &[
    (&["chat", "message", "talk"], design(LogoStyle::Creative, "#10B981", "#3B82F6")),
    (&["dashboard", "admin", "panel"], design(LogoStyle::Minimal, "#1F2937", "#6B7280")),
    (&["blog", "news", "article"], design(LogoStyle::Modern, "#F59E0B", "#EF4444")),
    (&["music", "audio", "sound"], design(LogoStyle::Gradient, "#8B5CF6", "#EC4899")),
    (&["photo", "image", "gallery"], design(LogoStyle::Creative, "#06B6D4", "#8B5CF6")),
];

const ICONS: &[(&[&str], &str)] = &[
    (
        &["chat", "message", "talk"],
        r#"<path d="M8 12l-4-4 4-4m8 8l4-4-4-4" stroke="white" stroke-width="2" fill="none"/><circle cx="15" cy="8" r="2" fill="white"/>"#,
    ),
    (
        &["dashboard", "admin", "panel"],
        r#"<rect x="2" y="2" width="6" height="6" fill="white" rx="1"/><rect x="10" y="2" width="6" height="6" fill="white" rx="1"/><rect x="2" y="10" width="6" height="6" fill="white" rx="1"/><rect x="10" y="10" width="6" height="6" fill="white" rx="1"/>"#,
    ),
    (
        &["blog", "news", "article"],
        r##"<rect x="3" y="2" width="12" height="16" fill="white" rx="2"/><line x1="6" y1="6" x2="12" y2="6" stroke="#333" stroke-width="1"/><line x1="6" y1="9" x2="14" y2="9" stroke="#333" stroke-width="1"/><line x1="6" y1="12" x2="11" y2="12" stroke="#333" stroke-width="1"/>"##,
    ),
    (
        &["music", "audio", "sound"],
        r##"<circle cx="9" cy="9" r="7" fill="white"/><circle cx="9" cy="9" r="3" fill="#333"/><path d="M15 6.5v8a2.5 2.5 0 0 1-2.5 2.5" stroke="#333" stroke-width="1.5" fill="none"/>"##,
    ),
    (
        &["photo", "image", "gallery"],
        r##"<rect x="2" y="3" width="14" height="12" fill="white" rx="2"/><circle cx="8.5" cy="8.5" r="2.5" fill="#333"/><path d="M14.5 14L12 11.5 8.5 15 6 12.5 2.5 16" stroke="#333" stroke-width="1" fill="none"/>"##,
    ),
    (
        &["shop", "store", "cart", "buy"],
        r##"<path d="M6 2L3 6v14a2 2 0 0 0 2 2h10a2 2 0 0 0 2-2V6l-3-4z" fill="white"/><line x1="3" y1="6" x2="17" y2="6" stroke="#333" stroke-width="1"/><path d="M8 10v4" stroke="#333" stroke-width="1"/><path d="M12 10v4" stroke="#333" stroke-width="1"/>"##,
    ),
    (
        &["task", "todo", "manage"],
        r##"<rect x="3" y="2" width="12" height="16" fill="white" rx="2"/><path d="M7 10l2 2 4-4" stroke="#333" stroke-width="1.5" fill="none"/><line x1="6" y1="6" x2="12" y2="6" stroke="#333" stroke-width="1"/><line x1="6" y1="14" x2="10" y2="14" stroke="#333" stroke-width="1"/>"##,
    ),
    (
        &["api", "code", "dev"],
        r#"<path d="M16 18l6-6-6-6" stroke="white" stroke-width="2" fill="none"/><path d="M8 6l-6 6 6 6" stroke="white" stroke-width="2" fill="none"/>"#,
    ),
    (
        &["game", "play", "arcade"],
        r##"<rect x="2" y="6" width="16" height="8" fill="white" rx="3"/><circle cx="6" cy="10" r="1.5" fill="#333"/><circle cx="14" cy="8" r="1" fill="#333"/><circle cx="16" cy="10" r="1" fill="#333"/>"##,
    ),
];

fn split_words(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|w| !w.is_empty())
}

/// Uppercased first letters of the first two words of `name`.
pub fn initials(name: &str) -> String {
    split_words(name)
        .take(2)
        .filter_map(|w| w.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Shifts every RGB channel of a `#rrggbb` color by `amount`, clamped to 0..=255.
/// Unparseable input is returned unchanged.
pub fn adjust_color(color: &str, amount: i32) -> String {
    let hex = color.trim_start_matches('#');
    let Ok(num) = u32::from_str_radix(hex, 16) else {
        return color.to_string();
    };
    let shift = |channel: u32| (channel as i32 + amount).clamp(0, 255) as u32;
    let r = shift((num >> 16) & 0xFF);
    let g = shift((num >> 8) & 0xFF);
    let b = shift(num & 0xFF);
    format!("#{:06x}", (r << 16) | (g << 8) | b)
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn project_icon(name: &str) -> Option<&'static str> {
    let lower = name.to_lowercase();
    ICONS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, icon)| *icon)
}

/// Theme with the most keyword hits among `words`; "tech" when nothing matches.
pub fn detect_theme(words: &[String]) -> &'static str {
    let mut best = THEMES[0].0;
    let mut best_matches = 0;
    for (theme, keywords, _) in THEMES {
        let matches = keywords
            .iter()
            .filter(|k| words.iter().any(|w| w.contains(**k)))
            .count();
        if matches > best_matches {
            best_matches = matches;
            best = *theme;
        }
    }
    best
}

/// Chooses style and palette for a project.
pub fn choose_design(name: &str, project_type: Option<&str>, description: Option<&str>) -> LogoDesign {
    let name_words: Vec<String> = split_words(&name.to_lowercase()).map(str::to_string).collect();
    let mut words = name_words.clone();
    if let Some(desc) = description {
        words.extend(desc.to_lowercase().split_whitespace().map(str::to_string));
    }
    let theme = detect_theme(&words);
    let theme_design = THEMES
        .iter()
        .find(|(t, _, _)| *t == theme)
        .map(|(_, _, d)| *d)
        .unwrap_or(THEMES[0].2);

    let ty = project_type.unwrap_or_default();
    let by_type = if ty.contains("React") || ty.contains("Next.js") {
        design(LogoStyle::Tech, "#61DAFB", "#21232A")
    } else if ty.contains("Vue") {
        design(LogoStyle::Gradient, "#4FC08D", "#34495E")
    } else if ty.contains("Python") {
        let style = if theme == "creative" {
            LogoStyle::Creative
        } else {
            LogoStyle::Tech
        };
        design(style, "#3776AB", "#FFD43B")
    } else if ty.contains("Rust") {
        design(LogoStyle::Tech, "#CE422B", "#000000")
    } else if ty.contains("Go") {
        design(LogoStyle::Minimal, "#00ADD8", "#FFFFFF")
    } else {
        theme_design
    };

    NAME_OVERRIDES
        .iter()
        .find(|(keywords, _)| name_words.iter().any(|w| keywords.contains(&w.as_str())))
        .map(|(_, d)| *d)
        .unwrap_or(by_type)
}

/// Renders the SVG for `name` with an explicit design.
pub fn render_logo(name: &str, logo: LogoDesign) -> String {
    let initials = escape_xml(&initials(name));
    let title = escape_xml(name);
    let (w, h) = (LOGO_WIDTH, LOGO_HEIGHT);
    let color = logo.primary;
    let secondary = logo.secondary;
    let header = format!(
        r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg">"#
    );

    let body = match logo.style {
        LogoStyle::Modern => {
            let mark = match project_icon(name) {
                Some(icon) => format!(r#"<g transform="translate(25, 25)">{icon}</g>"#),
                None => format!(
                    r#"<text x="40" y="48" font-family="Arial, sans-serif" font-size="20" font-weight="bold" text-anchor="middle" fill="white">{initials}</text>"#
                ),
            };
            format!(
                r##"  <defs>
    <linearGradient id="modernGrad" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:{color};stop-opacity:1" />
      <stop offset="100%" style="stop-color:{dark};stop-opacity:1" />
    </linearGradient>
    <filter id="shadow" x="-20%" y="-20%" width="140%" height="140%">
      <feDropShadow dx="2" dy="2" stdDeviation="3" flood-color="{color}" flood-opacity="0.3"/>
    </filter>
  </defs>
  <circle cx="40" cy="40" r="30" fill="url(#modernGrad)" filter="url(#shadow)"/>
  {mark}
  <text x="85" y="35" font-family="Arial, sans-serif" font-size="16" font-weight="600" fill="{color}">{title}</text>
  <text x="85" y="50" font-family="Arial, sans-serif" font-size="10" fill="#666">Modern Solution</text>"##,
                dark = adjust_color(color, -20),
            )
        }
        LogoStyle::Minimal => format!(
            r#"  <rect x="5" y="20" width="50" height="40" rx="8" fill="none" stroke="{color}" stroke-width="2"/>
  <text x="30" y="45" font-family="Arial, sans-serif" font-size="18" font-weight="300" text-anchor="middle" fill="{color}">{initials}</text>
  <text x="70" y="45" font-family="Arial, sans-serif" font-size="18" font-weight="300" fill="{color}">{title}</text>"#
        ),
        LogoStyle::Gradient => format!(
            r##"  <defs>
    <linearGradient id="gradientBg" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:{color};stop-opacity:1" />
      <stop offset="50%" style="stop-color:{secondary};stop-opacity:1" />
      <stop offset="100%" style="stop-color:{light};stop-opacity:1" />
    </linearGradient>
    <linearGradient id="textGrad" x1="0%" y1="0%" x2="100%" y2="0%">
      <stop offset="0%" style="stop-color:{color};stop-opacity:1" />
      <stop offset="100%" style="stop-color:{secondary};stop-opacity:1" />
    </linearGradient>
  </defs>
  <path d="M10 20 L60 10 L70 50 L20 60 Z" fill="url(#gradientBg)" opacity="0.9"/>
  <text x="40" y="40" font-family="Arial, sans-serif" font-size="16" font-weight="bold" text-anchor="middle" fill="white">{initials}</text>
  <text x="85" y="40" font-family="Arial, sans-serif" font-size="20" font-weight="bold" fill="url(#textGrad)">{title}</text>"##,
            light = adjust_color(color, 30),
        ),
        LogoStyle::Tech => {
            let mark = match project_icon(name) {
                Some(icon) => format!(
                    r#"<g transform="translate(28, 23)">{}</g>"#,
                    icon.replace("#333", color)
                ),
                None => format!(
                    r#"<text x="40" y="39" font-family="Courier, monospace" font-size="10" font-weight="bold" text-anchor="middle" fill="white">{initials}</text>"#
                ),
            };
            format!(
                r##"  <defs>
    <pattern id="grid" width="10" height="10" patternUnits="userSpaceOnUse">
      <path d="M 10 0 L 0 0 0 10" fill="none" stroke="{color}" stroke-width="0.5" opacity="0.3"/>
    </pattern>
  </defs>
  <rect width="{w}" height="{h}" fill="url(#grid)"/>
  <polygon points="30,15 50,15 60,35 50,55 30,55 20,35" fill="{color}" opacity="0.1" stroke="{color}" stroke-width="2"/>
  <circle cx="40" cy="35" r="12" fill="{color}"/>
  {mark}
  <text x="75" y="30" font-family="Courier, monospace" font-size="14" font-weight="bold" fill="{color}">{title}</text>
  <text x="75" y="45" font-family="Courier, monospace" font-size="8" fill="#666">&lt;/&gt; TECH</text>"##
            )
        }
        LogoStyle::Creative => format!(
            r##"  <defs>
    <radialGradient id="creativeGrad" cx="50%" cy="50%" r="50%">
      <stop offset="0%" style="stop-color:{color};stop-opacity:0.8" />
      <stop offset="70%" style="stop-color:{secondary};stop-opacity:0.6" />
      <stop offset="100%" style="stop-color:{lighter};stop-opacity:0.4" />
    </radialGradient>
  </defs>
  <circle cx="25" cy="25" r="15" fill="{color}" opacity="0.7"/>
  <circle cx="45" cy="35" r="12" fill="{secondary}" opacity="0.6"/>
  <circle cx="35" cy="50" r="10" fill="{light}" opacity="0.5"/>
  <circle cx="35" cy="35" r="18" fill="url(#creativeGrad)"/>
  <text x="35" y="42" font-family="Arial, sans-serif" font-size="14" font-weight="bold" text-anchor="middle" fill="white">{initials}</text>
  <text x="70" y="30" font-family="Arial, sans-serif" font-size="16" font-weight="600" fill="{color}">{title}</text>
  <text x="70" y="45" font-family="Arial, sans-serif" font-size="10" fill="{secondary}">Creative Solutions</text>"##,
            lighter = adjust_color(color, 40),
            light = adjust_color(color, 30),
        ),
    };

    format!("{header}\n{body}\n</svg>")
}

/// Picks a design for the project and renders it.
pub fn generate_logo_for_project(
    name: &str,
    project_type: Option<&str>,
    description: Option<&str>,
) -> String {
    let logo = choose_design(name, project_type, description);
    tracing::debug!(name, style = %logo.style, primary = logo.primary, "Generated logo");
    render_logo(name, logo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_from_first_two_words() {
        assert_eq!(initials("git-spicefy app"), "GS");
        assert_eq!(initials("my_cool_tool"), "MC");
        assert_eq!(initials("solo"), "S");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn adjust_color_clamps() {
        assert_eq!(adjust_color("#FFFFFF", 40), "#ffffff");
        assert_eq!(adjust_color("#000000", -20), "#000000");
        assert_eq!(adjust_color("#102030", 16), "#203040");
        assert_eq!(adjust_color("nope", 10), "nope");
    }

    #[test]
    fn theme_ties_keep_earlier_entry() {
        let words = vec!["game".to_string(), "shop".to_string()];
        assert_eq!(detect_theme(&words), "gaming");
        assert_eq!(detect_theme(&[]), "tech");
    }

    #[test]
    fn overrides_take_priority() {
        let d = choose_design("chat-app", Some("React Application"), None);
        assert_eq!(d.style, LogoStyle::Creative);
        assert_eq!(d.primary, "#10B981");

        let d = choose_design("ferris", Some("Rust Application"), None);
        assert_eq!(d.style, LogoStyle::Tech);
        assert_eq!(d.primary, "#CE422B");

        let d = choose_design("quest", None, Some("an arcade adventure"));
        assert_eq!(d.style, LogoStyle::Gradient);
    }

    #[test]
    fn name_is_escaped() {
        let svg = generate_logo_for_project("a<b>&c", None, None);
        assert!(svg.contains("a&lt;b&gt;&amp;c"));
        assert!(!svg.contains("a<b>"));
    }
}
