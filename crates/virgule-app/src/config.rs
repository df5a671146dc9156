// File: src/config.rs
// Purpose: App shell configuration from virgule.toml and the environment

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSection,

    #[serde(default)]
    pub log: LogSection,
}

/// Shell settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSection {
    /// Base URL the shell is served under (default: "/")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Document title shown by the shell layout
    #[serde(default = "default_title")]
    pub title: String,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSection {
    /// Tracing filter directive (default: "info")
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config.apply_env())
    }

    /// Load `virgule.toml` from the current directory, falling back to
    /// defaults when the file doesn't exist
    pub fn load_default() -> Result<Self> {
        let path = Path::new("virgule.toml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default().apply_env())
        }
    }

    /// Environment overrides supplied by the hosting build environment
    fn apply_env(mut self) -> Self {
        if let Ok(base_url) = std::env::var("VIRGULE_BASE_URL") {
            self.app.base_url = base_url;
        }
        if let Ok(filter) = std::env::var("VIRGULE_LOG") {
            self.log.filter = filter;
        }
        self
    }
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            title: default_title(),
        }
    }
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_base_url() -> String {
    "/".to_string()
}

fn default_title() -> String {
    "Virgule".to_string()
}

fn default_filter() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_fill_missing_sections() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.app.base_url, "/");
        assert_eq!(config.app.title, "Virgule");
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn malformed_config_file_is_an_error() {
        let path = std::env::temp_dir().join("virgule-config-malformed-test.toml");
        fs::write(&path, "[app\nbase_url = ").unwrap();

        let result = AppConfig::load(&path);
        fs::remove_file(&path).ok();

        assert!(result.is_err());
    }

    #[test]
    fn partial_sections_keep_field_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [app]
            base_url = "/shell"
            "#,
        )
        .unwrap();

        assert_eq!(config.app.base_url, "/shell");
        assert_eq!(config.app.title, "Virgule");
    }
}
