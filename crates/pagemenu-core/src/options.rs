//! Layout options supplied with every setup/rebuild
//!
//! All presentation values (colors) are opaque hex strings; the core only
//! carries them through to the host.

use serde::{Deserialize, Serialize};

/// Where the menu strip sits relative to the content pager
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuPosition {
    #[default]
    Top,
    Bottom,
}

/// How the menu strip reacts to taps and swipes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollingPolicy {
    /// Strip scrolls freely, taps jump directly
    #[default]
    FreeScroll,
    /// Snap one item at a time
    PagingEnabled,
}

/// Sizing rule for menu items
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DisplayMode {
    /// Item width follows the measured title width
    FlexibleItemWidth {
        #[serde(default)]
        center_selected_item: bool,
        #[serde(default)]
        scrolling: ScrollingPolicy,
    },
    /// Every item has the same fixed width, margins included
    FixedItemWidth {
        width: f64,
        #[serde(default)]
        center_selected_item: bool,
        #[serde(default)]
        scrolling: ScrollingPolicy,
    },
    /// Items share the strip width equally and the strip never scrolls
    SegmentedControl,
}

impl Default for DisplayMode {
    fn default() -> Self {
        DisplayMode::FlexibleItemWidth {
            center_selected_item: false,
            scrolling: ScrollingPolicy::FreeScroll,
        }
    }
}

/// Visual treatment of a single menu item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemMode {
    #[default]
    Plain,
    /// Rounded box around the label, inset between the label and the slot
    RoundRect {
        #[serde(default)]
        radius: f64,
        #[serde(default)]
        horizontal_scale: f64,
        #[serde(default)]
        vertical_scale: f64,
        #[serde(default)]
        border_width: f64,
        #[serde(default)]
        border_color: Option<String>,
        #[serde(default)]
        selected_border_color: Option<String>,
    },
}

impl ItemMode {
    /// Horizontal and vertical inset factors; zero unless round-rect
    pub fn scale(&self) -> (f64, f64) {
        match self {
            ItemMode::RoundRect {
                horizontal_scale,
                vertical_scale,
                ..
            } => (*horizontal_scale, *vertical_scale),
            ItemMode::Plain => (0.0, 0.0),
        }
    }
}

/// Line drawn between the strip and the pager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeparatorOptions {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_separator_color")]
    pub color: String,
    #[serde(default = "default_separator_size")]
    pub size: f64,
}

impl Default for SeparatorOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            color: default_separator_color(),
            size: default_separator_size(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutOptions {
    /// Strip height
    #[serde(default = "default_menu_height")]
    pub menu_height: f64,
    #[serde(default = "default_background_color")]
    pub background_color: String,
    #[serde(default = "default_selected_background_color")]
    pub selected_background_color: String,
    #[serde(default = "default_item_background_color")]
    pub item_background_color: String,
    #[serde(default = "default_item_selected_background_color")]
    pub item_selected_background_color: String,
    #[serde(default = "default_text_color")]
    pub text_color: String,
    #[serde(default = "default_selected_text_color")]
    pub selected_text_color: String,
    #[serde(default)]
    pub menu_position: MenuPosition,
    /// Horizontal space on each side of an item
    #[serde(default = "default_item_margin")]
    pub item_margin: f64,
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub default_page: usize,
    #[serde(default = "default_minimum_item_count")]
    pub minimum_supported_item_count: usize,
    #[serde(default)]
    pub display_mode: DisplayMode,
    #[serde(default)]
    pub item_mode: ItemMode,
    #[serde(default)]
    pub separator: SeparatorOptions,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            menu_height: default_menu_height(),
            background_color: default_background_color(),
            selected_background_color: default_selected_background_color(),
            item_background_color: default_item_background_color(),
            item_selected_background_color: default_item_selected_background_color(),
            text_color: default_text_color(),
            selected_text_color: default_selected_text_color(),
            menu_position: MenuPosition::default(),
            item_margin: default_item_margin(),
            animation_duration_ms: default_animation_duration(),
            default_page: 0,
            minimum_supported_item_count: default_minimum_item_count(),
            display_mode: DisplayMode::default(),
            item_mode: ItemMode::default(),
            separator: SeparatorOptions::default(),
        }
    }
}

fn default_menu_height() -> f64 {
    3.0
}

fn default_item_margin() -> f64 {
    1.0
}

fn default_animation_duration() -> u64 {
    300
}

fn default_minimum_item_count() -> usize {
    2
}

fn default_background_color() -> String {
    "#282828".to_string()
}

fn default_selected_background_color() -> String {
    "#45403d".to_string()
}

fn default_item_background_color() -> String {
    "#282828".to_string()
}

fn default_item_selected_background_color() -> String {
    "#45403d".to_string()
}

fn default_text_color() -> String {
    "#a89984".to_string()
}

fn default_selected_text_color() -> String {
    "#d4be98".to_string()
}

fn default_separator_color() -> String {
    "#7c6f64".to_string()
}

fn default_separator_size() -> f64 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = LayoutOptions::default();
        assert_eq!(options.minimum_supported_item_count, 2);
        assert_eq!(options.default_page, 0);
        assert_eq!(options.menu_position, MenuPosition::Top);
        assert!(!options.separator.enabled);
        assert_eq!(options.item_mode.scale(), (0.0, 0.0));
    }

    #[test]
    fn test_display_mode_from_toml() {
        let options: LayoutOptions = toml::from_str(
            r#"
            menu_height = 5.0
            menu_position = "bottom"

            [display_mode]
            type = "fixed_item_width"
            width = 12.0
            scrolling = "paging_enabled"

            [item_mode]
            type = "round_rect"
            radius = 1.0
            horizontal_scale = 0.5
            vertical_scale = 0.25
            "#,
        )
        .unwrap();

        assert_eq!(options.menu_height, 5.0);
        assert_eq!(options.menu_position, MenuPosition::Bottom);
        assert_eq!(
            options.display_mode,
            DisplayMode::FixedItemWidth {
                width: 12.0,
                center_selected_item: false,
                scrolling: ScrollingPolicy::PagingEnabled,
            }
        );
        assert_eq!(options.item_mode.scale(), (0.5, 0.25));
    }

    #[test]
    fn test_segmented_from_json() {
        let mode: DisplayMode =
            serde_json::from_str(r#"{ "type": "segmented_control" }"#).unwrap();
        assert_eq!(mode, DisplayMode::SegmentedControl);
    }
}
