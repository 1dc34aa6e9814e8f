use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    /// Checked boxes and done titles
    pub done: Color,
    /// Remove prompt border
    pub danger: Color,
    pub selection_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0xEB, 0xEB, 0xEB),
            text: Color::Rgb(0x71, 0x80, 0x93),
            text_bright: Color::Rgb(0x27, 0x2D, 0x3A),
            highlight: Color::Rgb(0x88, 0x57, 0xE6),
            dim: Color::Rgb(0xB2, 0xB2, 0xB2),
            done: Color::Rgb(0x1D, 0xB8, 0x63),
            danger: Color::Rgb(0xFF, 0x76, 0x75),
            selection_bg: Color::Rgb(0xDD, 0xD6, 0xF3),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                log::warn!("ignoring invalid color for '{}': {}", key, value);
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "done" => theme.done = color,
                "danger" => theme.danger = color,
                "selection_bg" => theme.selection_bg = color,
                _ => log::warn!("unknown theme color '{}'", key),
            }
        }

        theme
    }
}
