use ratatui::style::Color;

use crate::model::config::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub green: Color,
    pub red: Color,
    pub selection_bg: Color,
    pub selection_border: Color,
    pub search_match_bg: Color,
    pub search_match_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0B, 0x12, 0x21),
            text: Color::Rgb(0x9F, 0xB3, 0xC8),
            text_bright: Color::Rgb(0xF0, 0xF4, 0xF8),
            highlight: Color::Rgb(0xFF, 0x8E, 0x3C),
            dim: Color::Rgb(0x5C, 0x6B, 0x7A),
            green: Color::Rgb(0x3D, 0xDC, 0x84),
            red: Color::Rgb(0xFF, 0x5C, 0x5C),
            selection_bg: Color::Rgb(0x1C, 0x2A, 0x3F),
            selection_border: Color::Rgb(0xFF, 0x8E, 0x3C),
            search_match_bg: Color::Rgb(0xFF, 0xD1, 0x66),
            search_match_fg: Color::Rgb(0x0B, 0x12, 0x21),
        }
    }
}

/// Parse a hex color string like "#FF8E3C" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from config UI settings, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "green" => theme.green = color,
                    "red" => theme.red = color,
                    "selection_bg" => theme.selection_bg = color,
                    "selection_border" => theme.selection_border = color,
                    "search_match_bg" => theme.search_match_bg = color,
                    "search_match_fg" => theme.search_match_fg = color,
                    _ => {}
                }
            }
        }

        theme
    }

    /// Color for a task row's checkbox and label.
    pub fn task_color(&self, checked: bool, locked: bool) -> Color {
        if locked {
            self.dim
        } else if checked {
            self.green
        } else {
            self.text
        }
    }

    /// Color for a phase title.
    pub fn phase_color(&self, completed: bool) -> Color {
        if completed { self.green } else { self.text_bright }
    }
}
