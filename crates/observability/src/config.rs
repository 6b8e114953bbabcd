//! Configuration for logging

use chatter_constant::{app, defaults};
use serde::{Deserialize, Serialize};

/// Observability configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Service name attached to every log line
    pub service_name: String,

    /// Service version (optional)
    pub service_version: Option<String>,

    /// Enable console output
    pub enable_console: bool,

    /// Colour console output
    pub ansi: bool,

    /// Log level filter (e.g., "info", "chatter_compose=debug")
    /// Defaults to "info" if not set
    pub log_level: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: app::SERVICE_NAME.to_string(),
            service_version: None,
            enable_console: true,
            ansi: true,
            log_level: None,
        }
    }
}

impl ObservabilityConfig {
    /// Create a new configuration with service name
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Set service version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.service_version = Some(version.into());
        self
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Build from environment variables
    ///
    /// Reads:
    /// - `SERVICE_NAME` → service_name
    /// - `CHATTER_LOG` or `RUST_LOG` → log_level
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let service_name = lookup("SERVICE_NAME").unwrap_or_else(|| app::SERVICE_NAME.to_string());
        let log_level = lookup(defaults::ENV_LOG).or_else(|| lookup("RUST_LOG"));

        Self {
            service_name,
            service_version: Some(app::VERSION.to_string()),
            log_level,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_builder() {
        let config = ObservabilityConfig::new("svc")
            .with_version("1.2.3")
            .with_console(false)
            .with_ansi(false)
            .with_log_level("debug");

        assert_eq!(config.service_name, "svc");
        assert_eq!(config.service_version.as_deref(), Some("1.2.3"));
        assert!(!config.enable_console);
        assert!(!config.ansi);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_from_lookup_prefers_chatter_log() {
        let vars: HashMap<&str, &str> =
            HashMap::from([("CHATTER_LOG", "trace"), ("RUST_LOG", "warn")]);
        let config = ObservabilityConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.log_level.as_deref(), Some("trace"));
        assert_eq!(config.service_name, app::SERVICE_NAME);
    }

    #[test]
    fn test_from_lookup_falls_back_to_rust_log() {
        let config = ObservabilityConfig::from_lookup(|k| (k == "RUST_LOG").then(|| "warn".to_string()));
        assert_eq!(config.log_level.as_deref(), Some("warn"));
    }

    #[test]
    fn test_from_lookup_empty() {
        let config = ObservabilityConfig::from_lookup(|_| None);
        assert_eq!(config.log_level, None);
        assert!(config.enable_console);
    }
}
