//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub newsletter: NewsletterConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Replace the API base URL, ignoring blank values.
    pub fn apply_api_override(&mut self, url: &str) {
        let url = url.trim();
        if !url.is_empty() {
            self.api.base_url = url.to_string();
        }
    }
}

/// Directory API deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Viewport width (in pixels) at which the grid replaces the carousel.
    #[serde(default = "default_breakpoint_px")]
    pub breakpoint_px: u32,
    /// Approximate pixel width of one terminal cell.
    #[serde(default = "default_cell_width_px")]
    pub cell_width_px: u32,
    /// Most tool cards shown at once.
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: default_breakpoint_px(),
            cell_width_px: default_cell_width_px(),
            max_visible: default_max_visible(),
        }
    }
}

/// Floating newsletter banner settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterConfig {
    /// Distance (in rows) from the end of the page at which the banner hides.
    #[serde(default = "default_banner_threshold")]
    pub banner_threshold_rows: u16,
}

impl Default for NewsletterConfig {
    fn default() -> Self {
        Self {
            banner_threshold_rows: default_banner_threshold(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5002".to_string()
}
fn default_breakpoint_px() -> u32 {
    768
}
fn default_cell_width_px() -> u32 {
    8
}
fn default_max_visible() -> usize {
    8
}
fn default_banner_threshold() -> u16 {
    2
}
fn default_log_dir() -> String {
    "~/.local/share/toolcurator/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5002");
        assert_eq!(config.ui.breakpoint_px, 768);
        assert_eq!(config.ui.cell_width_px, 8);
        assert_eq!(config.ui.max_visible, 8);
        assert_eq!(config.newsletter.banner_threshold_rows, 2);
        assert!(!config.logging.enabled);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            breakpoint_px = 1024

            [logging]
            enabled = true
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.breakpoint_px, 1024);
        assert_eq!(config.ui.max_visible, 8);
        assert!(config.logging.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn api_override_ignores_blank_values() {
        let mut config = AppConfig::default();
        config.apply_api_override("   ");
        assert_eq!(config.api.base_url, "http://localhost:5002");
        config.apply_api_override(" https://api.example.com ");
        assert_eq!(config.api.base_url, "https://api.example.com");
    }

    #[test]
    fn round_trips_through_toml() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("base_url = \"http://localhost:5002\""));
    }
}
