//! TUI palette.
//!
//! Every entry accepts a named terminal color or a `#RGB` / `#RRGGBB` hex
//! value; see [`parse_color`].

use ratatui::style::Color;
use serde::{de, Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    // Pane chrome
    #[serde(deserialize_with = "color")]
    pub active_border: Color,
    #[serde(deserialize_with = "color")]
    pub inactive_border: Color,
    #[serde(deserialize_with = "color")]
    pub selection_bg_active: Color,
    #[serde(deserialize_with = "color")]
    pub selection_fg_active: Color,
    #[serde(deserialize_with = "color")]
    pub selection_bg_inactive: Color,
    #[serde(deserialize_with = "color")]
    pub selection_fg_inactive: Color,

    // Feed and summary content
    /// Category whose article request failed.
    #[serde(deserialize_with = "color")]
    pub failed_category: Color,
    #[serde(deserialize_with = "color")]
    pub published_date: Color,
    #[serde(deserialize_with = "color")]
    pub summary_error: Color,

    // Learning mode
    #[serde(deserialize_with = "color")]
    pub word_cursor_bg: Color,
    #[serde(deserialize_with = "color")]
    pub word_cursor_fg: Color,
    #[serde(deserialize_with = "color")]
    pub meaning_border: Color,

    #[serde(deserialize_with = "color")]
    pub status_fg: Color,
    #[serde(deserialize_with = "color")]
    pub status_bg: Color,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            active_border: Color::Cyan,
            inactive_border: Color::DarkGray,
            selection_bg_active: Color::Cyan,
            selection_fg_active: Color::Black,
            selection_bg_inactive: Color::DarkGray,
            selection_fg_inactive: Color::White,
            failed_category: Color::LightRed,
            published_date: Color::Gray,
            summary_error: Color::Red,
            word_cursor_bg: Color::Yellow,
            word_cursor_fg: Color::Black,
            meaning_border: Color::Yellow,
            status_fg: Color::White,
            status_bg: Color::DarkGray,
        }
    }
}

const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::Black),
    ("red", Color::Red),
    ("green", Color::Green),
    ("yellow", Color::Yellow),
    ("blue", Color::Blue),
    ("magenta", Color::Magenta),
    ("cyan", Color::Cyan),
    ("gray", Color::Gray),
    ("grey", Color::Gray),
    ("darkgray", Color::DarkGray),
    ("darkgrey", Color::DarkGray),
    ("lightred", Color::LightRed),
    ("lightgreen", Color::LightGreen),
    ("lightyellow", Color::LightYellow),
    ("lightblue", Color::LightBlue),
    ("lightmagenta", Color::LightMagenta),
    ("lightcyan", Color::LightCyan),
    ("white", Color::White),
    ("reset", Color::Reset),
];

fn color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_color(&value).map_err(de::Error::custom)
}

/// Parse a color name (case-insensitive) or a `#RGB` / `#RRGGBB` hex value.
pub fn parse_color(value: &str) -> Result<Color, String> {
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| format!("Invalid hex color: {}", value));
    }

    NAMED_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(value))
        .map(|&(_, color)| color)
        .ok_or_else(|| format!("Unknown color: {}", value))
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<Vec<u8>>>()?;

    match digits[..] {
        [r, g, b] => Some(Color::Rgb(r * 17, g * 17, b * 17)),
        [r1, r0, g1, g0, b1, b0] => Some(Color::Rgb(r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0)),
        _ => None,
    }
}
