//! Theme system for Rickdex: dark and light palettes and the ambient
//! default used when no preference has been stored yet.

/// Path resolution for config directories.
mod paths;

pub use paths::{config_dir, lists_dir, logs_dir};

use ratatui::style::Color;

/// Color palette consumed by the UI layer.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Background color.
    pub base: Color,
    /// Pane borders and separators.
    pub surface: Color,
    /// Primary text.
    pub text: Color,
    /// Dimmed text (labels, hints).
    pub subtext: Color,
    /// Highlights and the selection bar.
    pub accent: Color,
    /// Positive accents (alive status).
    pub green: Color,
    /// Negative accents (dead status, errors).
    pub red: Color,
    /// Neutral accents (unknown status, empty results).
    pub yellow: Color,
}

/// Dark palette.
const DARK: Theme = Theme {
    base: Color::Rgb(30, 30, 46),
    surface: Color::Rgb(88, 91, 112),
    text: Color::Rgb(205, 214, 244),
    subtext: Color::Rgb(147, 153, 178),
    accent: Color::Rgb(180, 190, 254),
    green: Color::Rgb(166, 227, 161),
    red: Color::Rgb(243, 139, 168),
    yellow: Color::Rgb(249, 226, 175),
};

/// Light palette.
const LIGHT: Theme = Theme {
    base: Color::Rgb(239, 241, 245),
    surface: Color::Rgb(156, 160, 176),
    text: Color::Rgb(76, 79, 105),
    subtext: Color::Rgb(108, 111, 133),
    accent: Color::Rgb(114, 135, 253),
    green: Color::Rgb(64, 160, 43),
    red: Color::Rgb(210, 15, 57),
    yellow: Color::Rgb(223, 142, 29),
};

/// Palette for the given theme flag.
#[must_use]
pub const fn theme(dark: bool) -> Theme {
    if dark { DARK } else { LIGHT }
}

/// What: Decide whether the ambient terminal prefers a dark background.
///
/// Inputs:
/// - None (reads the `COLORFGBG` environment hint).
///
/// Output:
/// - `true` when the terminal background is dark or unknown.
///
/// Details:
/// - `COLORFGBG` carries `<fg>;<bg>` ANSI indices set by several terminal
///   emulators; backgrounds 0-6 and 8 are the dark half of the palette.
/// - Unknown or malformed values default to dark, the safer choice for a
///   TUI rendered over an unknown background.
#[must_use]
pub fn ambient_prefers_dark() -> bool {
    std::env::var("COLORFGBG").map_or(true, |v| colorfgbg_prefers_dark(&v))
}

/// Parse a `COLORFGBG` value; see [`ambient_prefers_dark`].
fn colorfgbg_prefers_dark(raw: &str) -> bool {
    let Some(bg) = raw.rsplit(';').next() else {
        return true;
    };
    bg.trim().parse::<u8>().map_or(true, |n| matches!(n, 0..=6 | 8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: COLORFGBG parsing maps dark and light backgrounds correctly
    ///
    /// - Input: Common fg;bg pairs and malformed values
    /// - Output: Dark for bg 0-6/8 and for anything unparseable; light for
    ///   bg 7 and 9-15
    fn colorfgbg_parsing() {
        assert!(colorfgbg_prefers_dark("15;0"));
        assert!(colorfgbg_prefers_dark("12;8"));
        assert!(!colorfgbg_prefers_dark("0;15"));
        assert!(!colorfgbg_prefers_dark("0;7"));
        assert!(colorfgbg_prefers_dark("garbage"));
        assert!(colorfgbg_prefers_dark(""));
    }

    #[test]
    /// What: The two palettes are distinct where it matters
    ///
    /// - Input: Both palettes
    /// - Output: Different base and text colors
    fn palettes_differ() {
        let dark = theme(true);
        let light = theme(false);
        assert_ne!(dark.base, light.base);
        assert_ne!(dark.text, light.text);
    }
}
