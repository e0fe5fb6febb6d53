//! Built-in themes and color resolution.

use crate::options::RenderOptions;

pub struct Theme {
    pub name: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub text: &'static str,
    pub bg: &'static str,
    pub border: Option<&'static str>,
    pub ring: Option<&'static str>,
}

const fn theme(
    name: &'static str,
    title: &'static str,
    icon: &'static str,
    text: &'static str,
    bg: &'static str,
) -> Theme {
    Theme {
        name,
        title,
        icon,
        text,
        bg,
        border: None,
        ring: None,
    }
}

const DEFAULT_BORDER: &str = "e4e2e2";

pub const THEMES: &[Theme] = &[
    theme("default", "2f80ed", "4c71f2", "434d58", "fffefe"),
    theme("transparent", "006aff", "0579c3", "417e87", "ffffff00"),
    theme("dark", "fff", "79ff97", "9f9f9f", "151515"),
    theme("radical", "fe428e", "f8d847", "a9fef7", "141321"),
    theme("merko", "abd200", "b7d364", "68b587", "0a0f0b"),
    theme("gruvbox", "fabd2f", "fe8019", "8ec07c", "282828"),
    theme("tokyonight", "70a5fd", "bf91f3", "38bdae", "1a1b27"),
    theme("onedark", "e4bf7a", "8eb573", "df6d74", "282c34"),
    Theme {
        name: "github_dark",
        title: "58a6ff",
        icon: "1f6feb",
        text: "c9d1d9",
        bg: "0d1117",
        border: Some("30363d"),
        ring: Some("3fb950"),
    },
];

pub fn find_theme(name: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|t| t.name == name)
}

#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    Solid(String),
    /// Linear gradient rotated by `angle` degrees through evenly spaced stops.
    Gradient { angle: String, stops: Vec<String> },
}

impl Background {
    pub fn fill(&self) -> String {
        match self {
            Self::Solid(color) => color.clone(),
            Self::Gradient { .. } => "url(#gradient)".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardColors {
    pub title: String,
    pub icon: String,
    pub text: String,
    pub bg: Background,
    pub border: String,
    pub ring: String,
}

/// Accepts 3, 4, 6 or 8 hex digits without a leading `#`.
pub fn is_valid_hex_color(s: &str) -> bool {
    matches!(s.len(), 3 | 4 | 6 | 8) && s.chars().all(|c| c.is_ascii_hexdigit())
}

fn pick_color(label: &str, requested: Option<&str>, fallback: &str) -> String {
    match requested {
        Some(hex) if is_valid_hex_color(hex) => format!("#{hex}"),
        Some(bad) => {
            log::warn!("ignoring invalid {label} color '{bad}'");
            format!("#{fallback}")
        }
        None => format!("#{fallback}"),
    }
}

fn parse_background(requested: Option<&str>, fallback: &str) -> Background {
    let Some(raw) = requested else {
        return Background::Solid(format!("#{fallback}"));
    };

    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    if parts.len() > 1 {
        let (angle, stops) = (parts[0], &parts[1..]);
        if angle.parse::<f64>().is_ok() && stops.iter().all(|c| is_valid_hex_color(c)) {
            return Background::Gradient {
                angle: angle.to_string(),
                stops: stops.iter().map(|c| format!("#{c}")).collect(),
            };
        }
    }

    Background::Solid(pick_color("background", Some(raw), fallback))
}

/// Resolves the final palette from the theme name and per-color overrides.
///
/// Unknown themes fall back to `default`; the ring follows the title color
/// unless the theme or the options say otherwise.
pub fn resolve_colors(options: &RenderOptions) -> CardColors {
    let default_theme = &THEMES[0];
    let theme = match options.theme.as_deref() {
        Some(name) => find_theme(name).unwrap_or_else(|| {
            log::warn!("unknown theme '{name}', using default");
            default_theme
        }),
        None => default_theme,
    };

    let title = pick_color("title", options.title_color.as_deref(), theme.title);
    let ring = match (options.ring_color.as_deref(), theme.ring) {
        (Some(requested), ring) => pick_color("ring", Some(requested), ring.unwrap_or(theme.title)),
        (None, Some(ring)) => format!("#{ring}"),
        (None, None) => title.clone(),
    };

    CardColors {
        icon: pick_color("icon", options.icon_color.as_deref(), theme.icon),
        text: pick_color("text", options.text_color.as_deref(), theme.text),
        bg: parse_background(options.bg_color.as_deref(), theme.bg),
        border: pick_color(
            "border",
            options.border_color.as_deref(),
            theme.border.unwrap_or(DEFAULT_BORDER),
        ),
        title,
        ring,
    }
}

#[cfg(test)]
#[path = "theme_tests.rs"]
mod tests;
