pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::{ApiConfig, AppConfig, LoggingConfig, NewsletterConfig, UiConfig};

/// Environment variable that overrides `api.base_url`.
pub const API_URL_ENV: &str = "TOOLCURATOR_API_URL";

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("toolcurator")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    let mut config = read_config(&config_path())?;
    if let Ok(url) = std::env::var(API_URL_ENV) {
        config.apply_api_override(&url);
    }
    Ok(config)
}

fn read_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("toolcurator-does-not-exist.toml");
        let config = read_config(&path).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5002");
    }

    #[test]
    fn reads_file_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "toolcurator-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "[api]\nbase_url = \"https://tools.example.com\"\n").unwrap();
        let config = read_config(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(config.api.base_url, "https://tools.example.com");
        assert_eq!(config.ui.max_visible, 8);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = std::env::temp_dir().join(format!(
            "toolcurator-bad-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "[api\nbase_url = ").unwrap();
        let result = read_config(&path);
        let _ = std::fs::remove_file(&path);
        assert!(result.is_err());
    }
}
