//! # Runtime Configuration Module
//!
//! Configuration for the routing core, loaded once at bootstrap from environment
//! variables or a YAML file.
//!
//! ## Environment Variables
//!
//! ### `ROUTEMAP_BASE_URL`
//!
//! Absolute base URL prepended to generated absolute links.
//!
//! Default: `http://localhost`
//!
//! ### `ROUTEMAP_BASE_PATH`
//!
//! Prefix mounted in front of every route, for both matching and generation
//! (e.g. `/api/v1`).
//!
//! Default: empty
//!
//! ### `ROUTEMAP_CACHE_PATTERNS`
//!
//! Reuse compiled patterns across requests. Accepts `true/false`, `1/0`, `yes/no`,
//! `on/off`.
//!
//! Default: `true`
//!
//! ## YAML File
//!
//! ```yaml
//! base_url: https://shop.example.com
//! base_path: /api/v1
//! cache_patterns: true
//! ```
//!
//! Every key is optional; missing keys take the defaults above.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::path::Path;

use crate::builder::DEFAULT_BASE_URL;

/// Routing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouterConfig {
    /// Absolute base URL for generated links
    pub base_url: String,
    /// Prefix for every route, empty for none
    pub base_path: String,
    /// Cache compiled patterns by template
    pub cache_patterns: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            base_path: String::new(),
            cache_patterns: true,
        }
    }
}

impl RouterConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            base_url: lookup("ROUTEMAP_BASE_URL").unwrap_or(defaults.base_url),
            base_path: lookup("ROUTEMAP_BASE_PATH").unwrap_or(defaults.base_path),
            cache_patterns: lookup("ROUTEMAP_CACHE_PATTERNS")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.cache_patterns),
        }
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document deserializes as null, not as an empty mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).context("Failed to parse router configuration")
    }

    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = RouterConfig::default();
        assert_eq!(config.base_url, "http://localhost");
        assert_eq!(config.base_path, "");
        assert!(config.cache_patterns);
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("ROUTEMAP_BASE_URL", "https://example.com"),
            ("ROUTEMAP_BASE_PATH", "/api"),
            ("ROUTEMAP_CACHE_PATTERNS", "off"),
        ]
        .into_iter()
        .collect();
        let config = RouterConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.base_url, "https://example.com");
        assert_eq!(config.base_path, "/api");
        assert!(!config.cache_patterns);
    }

    #[test]
    fn test_unparseable_bool_falls_back_to_default() {
        let config = RouterConfig::from_lookup(|k| {
            (k == "ROUTEMAP_CACHE_PATTERNS").then(|| "maybe".to_string())
        });
        assert!(config.cache_patterns);
    }

    #[test]
    fn test_yaml_partial() {
        let config = RouterConfig::from_yaml_str("base_path: /v2\n").unwrap();
        assert_eq!(config.base_path, "/v2");
        assert_eq!(config.base_url, "http://localhost");
    }

    #[test]
    fn test_yaml_empty() {
        assert_eq!(RouterConfig::from_yaml_str("").unwrap(), RouterConfig::default());
    }

    #[test]
    fn test_yaml_unknown_key_rejected() {
        assert!(RouterConfig::from_yaml_str("base_uri: https://x\n").is_err());
    }
}
