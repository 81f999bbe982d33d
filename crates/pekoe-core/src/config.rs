use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::reveal::RootMargin;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            scroll: ScrollConfig::default(),
            reveal: RevealConfig::default(),
            ui: UiConfig::default(),
            keymap: KeymapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Default page file; the built-in sample page is used when unset
    #[serde(default)]
    pub page_file: Option<PathBuf>,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            page_file: None,
            log_level: default_log_level(),
        }
    }
}

/// Easing curve for scroll animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// No interpolation, jump at the end
    None,
    Linear,
    /// Piecewise cubic ease-in-out, the default navigation curve
    CubicInOut,
    CubicOut,
    QuinticOut,
    ExponentialOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Enable smooth scrolling (disable for animation-free jumps)
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Anchor navigation duration in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Easing function for scroll animations
    #[serde(default = "default_easing")]
    pub easing: EasingType,
    /// Rows kept clear above an anchor target for the sticky header
    #[serde(default = "default_header_clearance")]
    pub header_clearance: f64,
    /// Rows moved per plain scroll keypress (non-smooth mode)
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
    /// Target FPS while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u16,
    /// Scroll offset past which the "back to top" affordance activates
    #[serde(default = "default_top_button_threshold")]
    pub top_button_threshold: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: default_easing(),
            header_clearance: default_header_clearance(),
            scroll_lines: default_scroll_lines(),
            animation_fps: default_animation_fps(),
            top_button_threshold: default_top_button_threshold(),
        }
    }
}

/// One reveal trigger geometry: how much of a block must be visible,
/// and how the viewport box is shrunk or grown before measuring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatcherConfig {
    /// Fraction of the block area that must be visible, 0.0-1.0
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Signed viewport margin: rows ("-8") or viewport percentage ("-10%")
    #[serde(default)]
    pub root_margin: RootMargin,
    /// Class added to a block when it reveals
    #[serde(default = "default_reveal_class")]
    pub class: String,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            root_margin: RootMargin::default(),
            class: default_reveal_class(),
        }
    }
}

/// Per-role trigger geometries for the reveal engine.
///
/// Section titles reveal deeper into view than plain content; story
/// blocks use a percentage margin so the trigger box scales with the
/// viewport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealConfig {
    #[serde(default)]
    pub content: WatcherConfig,
    #[serde(default = "default_title_watcher")]
    pub title: WatcherConfig,
    #[serde(default = "default_story_watcher")]
    pub story: WatcherConfig,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            content: WatcherConfig::default(),
            title: default_title_watcher(),
            story: default_story_watcher(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds while idle
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Show the sticky navigation bar
    #[serde(default = "default_true")]
    pub show_nav_bar: bool,
    /// Show the status bar
    #[serde(default = "default_true")]
    pub show_status_bar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            show_nav_bar: default_true(),
            show_status_bar: default_true(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-d>" (Ctrl+d), "<CR>" (Enter), "<Esc>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Scroll down one line
    #[serde(default = "default_key_scroll_down")]
    pub scroll_down: String,
    /// Scroll up one line
    #[serde(default = "default_key_scroll_up")]
    pub scroll_up: String,
    /// Scroll half page down
    #[serde(default = "default_key_scroll_half_down")]
    pub scroll_half_down: String,
    /// Scroll half page up
    #[serde(default = "default_key_scroll_half_up")]
    pub scroll_half_up: String,
    /// Scroll full page down
    #[serde(default = "default_key_scroll_page_down")]
    pub scroll_page_down: String,
    /// Scroll full page up
    #[serde(default = "default_key_scroll_page_up")]
    pub scroll_page_up: String,
    /// Jump to top (first row)
    #[serde(default = "default_key_jump_to_top")]
    pub jump_to_top: String,
    /// Jump to bottom (last row)
    #[serde(default = "default_key_jump_to_bottom")]
    pub jump_to_bottom: String,
    /// Animate to the next section anchor
    #[serde(default = "default_key_next_section")]
    pub next_section: String,
    /// Animate to the previous section anchor
    #[serde(default = "default_key_prev_section")]
    pub prev_section: String,
    /// Animate back to the top of the page
    #[serde(default = "default_key_scroll_to_top")]
    pub scroll_to_top: String,
    /// Open/close the section menu overlay
    #[serde(default = "default_key_toggle_menu")]
    pub toggle_menu: String,
    /// Expand/collapse the hours accordion
    #[serde(default = "default_key_toggle_hours")]
    pub toggle_hours: String,
    /// Show the help overlay
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            scroll_down: default_key_scroll_down(),
            scroll_up: default_key_scroll_up(),
            scroll_half_down: default_key_scroll_half_down(),
            scroll_half_up: default_key_scroll_half_up(),
            scroll_page_down: default_key_scroll_page_down(),
            scroll_page_up: default_key_scroll_page_up(),
            jump_to_top: default_key_jump_to_top(),
            jump_to_bottom: default_key_jump_to_bottom(),
            next_section: default_key_next_section(),
            prev_section: default_key_prev_section(),
            scroll_to_top: default_key_scroll_to_top(),
            toggle_menu: default_key_toggle_menu(),
            toggle_hours: default_key_toggle_hours(),
            help: default_key_help(),
        }
    }
}

// Default keymap values (Vim-style notation)
fn default_key_quit() -> String { "q".to_string() }
fn default_key_scroll_down() -> String { "j".to_string() }
fn default_key_scroll_up() -> String { "k".to_string() }
fn default_key_scroll_half_down() -> String { "<C-d>".to_string() }
fn default_key_scroll_half_up() -> String { "<C-u>".to_string() }
fn default_key_scroll_page_down() -> String { "<C-f>".to_string() }
fn default_key_scroll_page_up() -> String { "<C-b>".to_string() }
fn default_key_jump_to_top() -> String { "gg".to_string() }
fn default_key_jump_to_bottom() -> String { "G".to_string() }
fn default_key_next_section() -> String { "<Tab>".to_string() }
fn default_key_prev_section() -> String { "<S-Tab>".to_string() }
fn default_key_scroll_to_top() -> String { "t".to_string() }
fn default_key_toggle_menu() -> String { "m".to_string() }
fn default_key_toggle_hours() -> String { "o".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    250
}

fn default_animation_duration() -> u64 {
    1200
}

fn default_easing() -> EasingType {
    EasingType::CubicInOut
}

fn default_header_clearance() -> f64 {
    100.0
}

fn default_scroll_lines() -> u16 {
    1
}

fn default_animation_fps() -> u16 {
    60
}

fn default_top_button_threshold() -> f64 {
    300.0
}

fn default_threshold() -> f64 {
    0.1
}

fn default_reveal_class() -> String {
    "active".to_string()
}

fn default_title_watcher() -> WatcherConfig {
    WatcherConfig {
        threshold: 0.25,
        root_margin: RootMargin::Rows(-8.0),
        class: "active".to_string(),
    }
}

fn default_story_watcher() -> WatcherConfig {
    WatcherConfig {
        threshold: 0.15,
        root_margin: RootMargin::Percent(-10.0),
        class: "visible".to_string(),
    }
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
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/pekoe/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("pekoe")
            .join("config.toml")
    }

    /// Get the page file path (with tilde expansion), if configured
    pub fn page_file(&self) -> Option<PathBuf> {
        self.general.page_file.as_deref().map(expand_tilde)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.scroll.smooth_enabled);
        assert_eq!(config.scroll.animation_duration_ms, 1200);
        assert_eq!(config.scroll.easing, EasingType::CubicInOut);
        assert!((config.scroll.header_clearance - 100.0).abs() < f64::EPSILON);
        assert!((config.scroll.top_button_threshold - 300.0).abs() < f64::EPSILON);
        assert!((config.reveal.content.threshold - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.reveal.story.class, "visible");
    }

    #[test]
    fn test_reveal_geometry_table_differs_per_role() {
        let config = RevealConfig::default();
        assert!(config.title.threshold > config.content.threshold);
        assert_eq!(config.title.root_margin, RootMargin::Rows(-8.0));
        assert_eq!(config.story.root_margin, RootMargin::Percent(-10.0));
    }

    #[test]
    fn test_ui_defaults_from_empty_toml() {
        let parsed: UiConfig = toml::from_str("").unwrap();
        assert_eq!(parsed.tick_rate_ms, 250);
        assert!(parsed.show_nav_bar);
        assert!(parsed.show_status_bar);
        assert_eq!(UiConfig::default().tick_rate_ms, parsed.tick_rate_ms);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.scroll.animation_duration_ms, 1200);
        assert_eq!(parsed.reveal.title.root_margin, RootMargin::Rows(-8.0));
    }

    #[test]
    fn test_root_margin_from_strings() {
        let parsed: WatcherConfig =
            toml::from_str(r#"threshold = 0.2
root_margin = "-10%""#)
                .unwrap();
        assert_eq!(parsed.root_margin, RootMargin::Percent(-10.0));

        let parsed: WatcherConfig = toml::from_str(r#"root_margin = "-8""#).unwrap();
        assert_eq!(parsed.root_margin, RootMargin::Rows(-8.0));
    }
}
