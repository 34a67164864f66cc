//! Light/dark background detection.
//!
//! Terminals that export `COLORFGBG` (rxvt, Konsole, many others) report the
//! background as a palette index in the last field. Everything else is
//! treated as dark.

use crate::types::Theme;

/// Environment variable carrying `fg;bg` (or `fg;default;bg`) palette indexes.
pub const COLORFGBG: &str = "COLORFGBG";

/// Detect the terminal theme from the environment.
pub fn detect_theme() -> Theme {
    std::env::var(COLORFGBG)
        .ok()
        .and_then(|v| theme_from_colorfgbg(&v))
        .unwrap_or_default()
}

/// Parse a `COLORFGBG` value. Background 7 and 9..=15 are light colors.
pub fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(match bg {
        7 | 9..=15 => Theme::Light,
        _ => Theme::Dark,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dark_backgrounds() {
        assert_eq!(theme_from_colorfgbg("15;0"), Some(Theme::Dark));
        assert_eq!(theme_from_colorfgbg("7;8"), Some(Theme::Dark));
        assert_eq!(theme_from_colorfgbg("15;default;0"), Some(Theme::Dark));
    }

    #[test]
    fn parses_light_backgrounds() {
        assert_eq!(theme_from_colorfgbg("0;15"), Some(Theme::Light));
        assert_eq!(theme_from_colorfgbg("0;7"), Some(Theme::Light));
        assert_eq!(theme_from_colorfgbg("0;default;11"), Some(Theme::Light));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(theme_from_colorfgbg(""), None);
        assert_eq!(theme_from_colorfgbg("0;default"), None);
        assert_eq!(theme_from_colorfgbg("fg;bg"), None);
    }
}
