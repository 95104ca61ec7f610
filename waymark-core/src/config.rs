//! Router configuration
//!
//! Configuration values are resolved in the following order (highest
//! priority wins):
//!
//! 1. **Environment Variables** - Override file config
//! 2. **Config File** (waymark.toml) - Override defaults
//! 3. **Defaults** - Lowest priority

use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default configuration file consulted by [`RouterConfig::load`].
pub const DEFAULT_CONFIG_FILE: &str = "waymark.toml";

/// Router configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Capability required by private routes with no explicit
    /// `capabilities` option.
    /// Env: WM_DEFAULT_CAPABILITY
    /// Default: "manage_options"
    pub default_capability: String,

    /// Class always present in the computed body-class list.
    /// Env: WM_BASE_BODY_CLASS
    /// Default: "custom-route-page"
    pub base_body_class: String,

    /// Host marker class stripped from the body-class list when a route
    /// matches (typically the host's not-found marker).
    /// Env: WM_STRIP_CLASS
    /// Default: "error404"
    pub strip_class: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            default_capability: "manage_options".to_string(),
            base_body_class: "custom-route-page".to_string(),
            strip_class: "error404".to_string(),
        }
    }
}

impl RouterConfig {
    /// Load with full supersedence: defaults, then `waymark.toml` if
    /// present, then environment variables.
    pub fn load() -> Result<Self> {
        let mut config = if Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(DEFAULT_CONFIG_FILE)?
        } else {
            Self::default()
        };
        config.apply_env();
        Ok(config)
    }

    /// Load from a specific TOML file. Missing keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Apply `WM_*` environment variable overrides.
    pub fn apply_env(&mut self) {
        if let Ok(value) = env::var("WM_DEFAULT_CAPABILITY") {
            if !value.is_empty() {
                self.default_capability = value;
            }
        }
        if let Ok(value) = env::var("WM_BASE_BODY_CLASS") {
            if !value.is_empty() {
                self.base_body_class = value;
            }
        }
        if let Ok(value) = env::var("WM_STRIP_CLASS") {
            if !value.is_empty() {
                self.strip_class = value;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = RouterConfig::default();
        assert_eq!(config.default_capability, "manage_options");
        assert_eq!(config.base_body_class, "custom-route-page");
        assert_eq!(config.strip_class, "error404");
    }

    #[test]
    fn test_from_file_partial_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_capability = \"edit_pages\"").unwrap();

        let config = RouterConfig::from_file(file.path()).unwrap();
        assert_eq!(config.default_capability, "edit_pages");
        // Unspecified keys keep their defaults
        assert_eq!(config.base_body_class, "custom-route-page");
    }

    #[test]
    fn test_from_file_missing() {
        assert!(RouterConfig::from_file("/nonexistent/waymark.toml").is_err());
    }

    #[test]
    fn test_apply_env() {
        env::set_var("WM_STRIP_CLASS", "not-found");
        let mut config = RouterConfig::default();
        config.apply_env();
        env::remove_var("WM_STRIP_CLASS");

        assert_eq!(config.strip_class, "not-found");
        assert_eq!(config.default_capability, "manage_options");
    }
}
