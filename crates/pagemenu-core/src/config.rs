use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::coordinator::PageHandle;
use crate::options::LayoutOptions;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub menu: LayoutOptions,
    #[serde(default)]
    pub keymap: KeymapConfig,
    /// Demo pages shown by the terminal host
    #[serde(default = "default_pages")]
    pub pages: Vec<PageConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            ui: UiConfig::default(),
            menu: LayoutOptions::default(),
            keymap: KeymapConfig::default(),
            pages: default_pages(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (logs live here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Show the status bar below the pager
    #[serde(default = "default_true")]
    pub show_status_bar: bool,
    /// Offset animation settings
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            show_status_bar: default_true(),
            scroll: ScrollConfig::default(),
        }
    }
}

/// Easing curve for offset animations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump to the end value
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate strip and content moves
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    #[serde(default)]
    pub easing: EasingType,
    /// Cells moved per drag step in the terminal host
    #[serde(default = "default_drag_step")]
    pub drag_step: u16,
    /// Frames per second while an animation runs
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            easing: EasingType::default(),
            drag_step: default_drag_step(),
            animation_fps: default_animation_fps(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "l", "]" (Ctrl+l), "<S-Tab>" (Shift+Tab), "<CR>" (Enter), "<Esc>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,

    // Navigation
    /// Swipe the strip toward the next page
    #[serde(default = "default_key_swipe_next")]
    pub swipe_next: String,
    /// Swipe the strip toward the previous page
    #[serde(default = "default_key_swipe_prev")]
    pub swipe_prev: String,
    /// Tap the next menu item
    #[serde(default = "default_key_tap_next")]
    pub tap_next: String,
    /// Tap the previous menu item
    #[serde(default = "default_key_tap_prev")]
    pub tap_prev: String,
    /// Jump to the first page
    #[serde(default = "default_key_first_page")]
    pub first_page: String,
    /// Jump to the last page
    #[serde(default = "default_key_last_page")]
    pub last_page: String,

    // Content dragging
    /// Drag the content toward the next page
    #[serde(default = "default_key_drag_next")]
    pub drag_next: String,
    /// Drag the content toward the previous page
    #[serde(default = "default_key_drag_prev")]
    pub drag_prev: String,
    /// Release the drag
    #[serde(default = "default_key_release")]
    pub release: String,

    // Strip
    /// Scroll the strip left
    #[serde(default = "default_key_strip_left")]
    pub strip_left: String,
    /// Scroll the strip right
    #[serde(default = "default_key_strip_right")]
    pub strip_right: String,

    /// Cycle the strip background color
    #[serde(default = "default_key_cycle_background")]
    pub cycle_background: String,
    /// Toggle the event log
    #[serde(default = "default_key_toggle_log")]
    pub toggle_log: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            swipe_next: default_key_swipe_next(),
            swipe_prev: default_key_swipe_prev(),
            tap_next: default_key_tap_next(),
            tap_prev: default_key_tap_prev(),
            first_page: default_key_first_page(),
            last_page: default_key_last_page(),
            drag_next: default_key_drag_next(),
            drag_prev: default_key_drag_prev(),
            release: default_key_release(),
            strip_left: default_key_strip_left(),
            strip_right: default_key_strip_right(),
            cycle_background: default_key_cycle_background(),
            toggle_log: default_key_toggle_log(),
        }
    }
}

/// One demo page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl PageConfig {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

impl PageHandle for PageConfig {
    fn title(&self) -> Option<&str> {
        Some(self.title.as_str())
    }
}

// Default keymap values (Vim-style notation)
fn default_key_quit() -> String { "q".to_string() }
fn default_key_swipe_next() -> String { "l".to_string() }
fn default_key_swipe_prev() -> String { "h".to_string() }
fn default_key_tap_next() -> String { "<Tab>".to_string() }
fn default_key_tap_prev() -> String { "<S-Tab>".to_string() }
fn default_key_first_page() -> String { "gg".to_string() }
fn default_key_last_page() -> String { "G".to_string() }
fn default_key_drag_next() -> String { "L".to_string() }
fn default_key_drag_prev() -> String { "H".to_string() }
fn default_key_release() -> String { "<Space>".to_string() }
fn default_key_strip_left() -> String { "[".to_string() }
fn default_key_strip_right() -> String { "]".to_string() }
fn default_key_cycle_background() -> String { "b".to_string() }
fn default_key_toggle_log() -> String { "e".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pagemenu")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_drag_step() -> u16 {
    4
}

fn default_animation_fps() -> u32 {
    60
}

fn default_pages() -> Vec<PageConfig> {
    vec![
        PageConfig::new("Users", "People you follow and people following you."),
        PageConfig::new("Repositories", "Projects you own or contribute to."),
        PageConfig::new("Gists", "Snippets and notes."),
        PageConfig::new("Organizations", "Teams you belong to."),
    ]
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, defaults when it does not exist
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &std::path::Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/pagemenu/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("pagemenu")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Log file written by the terminal host
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("pagemenu.log")
    }

    /// Page titles in configured order
    pub fn page_titles(&self) -> Vec<String> {
        self.pages.iter().map(|page| page.title.clone()).collect()
    }
}
