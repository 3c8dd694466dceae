use pagemenu_core::{ItemMode, LayoutOptions};
use ratatui::style::Color;
use tracing::warn;

/// Runtime colors, resolved from the menu options
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // Strip
    pub menu_bg: Color,
    pub menu_selected_bg: Color,
    pub item_bg: Color,
    pub item_selected_bg: Color,
    pub text: Color,
    pub selected_text: Color,
    pub border: Color,
    pub selected_border: Color,
    pub separator: Color,

    // Pager and status bar
    pub page_bg: Color,
    pub page_fg: Color,
    pub page_border: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub hint: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_options(&LayoutOptions::default())
    }
}

impl Theme {
    pub fn from_options(options: &LayoutOptions) -> Self {
        let text = color_or(&options.text_color, Color::Rgb(0xa8, 0x99, 0x84));
        let selected_text = color_or(&options.selected_text_color, Color::Rgb(0xd4, 0xbe, 0x98));
        let (border, selected_border) = match &options.item_mode {
            ItemMode::RoundRect {
                border_color,
                selected_border_color,
                ..
            } => (
                border_color.as_deref().map_or(text, |c| color_or(c, text)),
                selected_border_color
                    .as_deref()
                    .map_or(selected_text, |c| color_or(c, selected_text)),
            ),
            ItemMode::Plain => (text, selected_text),
        };

        Self {
            menu_bg: color_or(&options.background_color, Color::Rgb(0x28, 0x28, 0x28)),
            menu_selected_bg: color_or(
                &options.selected_background_color,
                Color::Rgb(0x32, 0x30, 0x2f),
            ),
            item_bg: color_or(&options.item_background_color, Color::Rgb(0x28, 0x28, 0x28)),
            item_selected_bg: color_or(
                &options.item_selected_background_color,
                Color::Rgb(0x45, 0x40, 0x3d),
            ),
            text,
            selected_text,
            border,
            selected_border,
            separator: color_or(&options.separator.color, Color::Rgb(0x7c, 0x6f, 0x64)),
            page_bg: Color::Rgb(0x1d, 0x20, 0x21),
            page_fg: Color::Rgb(0xd4, 0xbe, 0x98),
            page_border: Color::Rgb(0x7c, 0x6f, 0x64),
            status_bg: Color::Rgb(0x45, 0x40, 0x3d),
            status_fg: Color::Rgb(0xd4, 0xbe, 0x98),
            hint: Color::Rgb(0xa8, 0x99, 0x84),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
        }
    }

    /// Apply a strip background change; invalid colors are logged and ignored
    pub fn set_menu_background(&mut self, color: &str) {
        match parse_hex_color(color) {
            Some(parsed) => self.menu_bg = parsed,
            None => warn!("Invalid background color '{}', keeping current", color),
        }
    }
}

fn color_or(value: &str, fallback: Color) -> Color {
    parse_hex_color(value).unwrap_or_else(|| {
        warn!("Invalid color '{}', using default", value);
        fallback
    })
}

/// Parse "#rrggbb" or "rrggbb" into an RGB color
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
