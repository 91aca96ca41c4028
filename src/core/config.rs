//! Configuration management

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::info;

use crate::core::errors::{Result, TranslatorError};

/// Service root used when no base URL is configured
pub const DEFAULT_BASE_URL: &str = "https://api.cognitive.microsofttranslator.com";

/// Shared writer receiving the human-readable debug trace
pub type DebugSink = Arc<Mutex<dyn Write + Send>>;

/// Configuration for the translation client
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub base_url: String,
    pub subscription_key: String,
    pub region: String,
    #[serde(skip)]
    pub debug: Option<DebugSink>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("subscription_key", &"<redacted>")
            .field("region", &self.region)
            .field("debug", &self.debug.is_some())
            .finish()
    }
}

impl ClientConfig {
    pub fn new(subscription_key: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            base_url: String::new(),
            subscription_key: subscription_key.into(),
            region: region.into(),
            debug: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_debug<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.debug = Some(Arc::new(Mutex::new(writer)));
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let subscription_key = std::env::var("MSTRANSLATOR_KEY").map_err(|_| {
            TranslatorError::ConfigError {
                message: "MSTRANSLATOR_KEY environment variable is required".to_string(),
            }
        })?;

        let region = std::env::var("MSTRANSLATOR_REGION").map_err(|_| {
            TranslatorError::ConfigError {
                message: "MSTRANSLATOR_REGION environment variable is required".to_string(),
            }
        })?;

        let base_url = std::env::var("MSTRANSLATOR_URL").unwrap_or_default();

        Ok(Self::new(subscription_key, region).with_base_url(base_url))
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&content)?;
        info!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Base URL with the service default substituted for an empty value
    pub fn resolved_base_url(&self) -> &str {
        if self.base_url.is_empty() {
            DEFAULT_BASE_URL
        } else {
            &self.base_url
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_base_url_resolves_to_default() {
        let config = ClientConfig::new("key", "westeurope");
        assert_eq!(config.resolved_base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_explicit_base_url_kept_verbatim() {
        let config = ClientConfig::new("key", "westeurope").with_base_url("http://localhost:8080/api/");
        assert_eq!(config.resolved_base_url(), "http://localhost:8080/api/");
    }

    #[test]
    fn test_debug_output_hides_key() {
        let config = ClientConfig::new("secret-key", "westeurope");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("secret-key"));
        assert!(printed.contains("westeurope"));
    }

    #[test]
    fn test_file_roundtrip_skips_debug_sink() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translator.json");

        let config = ClientConfig::new("key", "eastus")
            .with_base_url("http://localhost:9000")
            .with_debug(Vec::new());
        config.to_file(&path).unwrap();

        let loaded = ClientConfig::from_file(&path).unwrap();
        assert_eq!(loaded.subscription_key, "key");
        assert_eq!(loaded.region, "eastus");
        assert_eq!(loaded.base_url, "http://localhost:9000");
        assert!(loaded.debug.is_none());
    }

    #[test]
    fn test_from_file_without_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translator.json");
        std::fs::write(&path, r#"{"subscription_key":"k","region":"r"}"#).unwrap();

        let loaded = ClientConfig::from_file(&path).unwrap();
        assert_eq!(loaded.resolved_base_url(), DEFAULT_BASE_URL);
    }
}
