use config::{Config, ConfigError, Environment, File};
use parking_lot::RwLock;
use serde::Deserialize;
use std::env;
use std::sync::Arc;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub backend: BackendSettings,
    pub http: HttpSettings,
    pub logging: LoggingSettings,
}

/// Location of the scheduler backend API
#[derive(Debug, Deserialize, Clone, Default)]
pub struct BackendSettings {
    /// Base URL prefix under which all backend endpoints are rooted.
    ///
    /// Not validated here: a malformed or empty base is passed through to
    /// the transport, which reports it when a request is actually issued.
    pub default_base: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpSettings {
    pub request_timeout_ms: u64,
    pub max_response_bytes: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub format: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            // Start with default values
            .set_default("backend.default_base", "http://localhost:9999")?
            .set_default("http.request_timeout_ms", 30_000)?
            .set_default("http.max_response_bytes", 10 * 1024 * 1024)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "json")?
            // Add configuration file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{environment}")).required(false))
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with prefix
            .add_source(Environment::with_prefix("GANGWAY").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            request_timeout_ms: 30_000,
            max_response_bytes: 10 * 1024 * 1024,
        }
    }
}

/// Backend settings shared across components, writable until first use.
///
/// Processes that wire factories before configuration finishes loading hold
/// one of these; resource factories read the base URL through it at call
/// time, so a base set after wiring but before the first call is honored.
#[derive(Clone, Debug, Default)]
pub struct SharedSettings {
    inner: Arc<RwLock<BackendSettings>>,
}

impl SharedSettings {
    pub fn new(backend: BackendSettings) -> Self {
        Self {
            inner: Arc::new(RwLock::new(backend)),
        }
    }

    pub fn set_default_base(&self, base: impl Into<String>) {
        self.inner.write().default_base = base.into();
    }

    pub fn default_base(&self) -> String {
        self.inner.read().default_base.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_can_be_loaded() {
        let settings = Settings::new();
        assert!(settings.is_ok());
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::new().unwrap();
        assert!(settings.http.request_timeout_ms > 0);
        assert!(settings.http.max_response_bytes > 0);
        assert!(!settings.backend.default_base.is_empty());
    }

    #[test]
    fn test_shared_settings_reflect_later_writes() {
        let shared = SharedSettings::default();
        assert_eq!(shared.default_base(), "");

        shared.set_default_base("https://api.example.com");
        assert_eq!(shared.default_base(), "https://api.example.com");
    }

    #[test]
    fn test_shared_settings_clones_see_same_value() {
        let shared = SharedSettings::new(BackendSettings {
            default_base: "http://one".to_string(),
        });
        let other = shared.clone();
        shared.set_default_base("http://two");
        assert_eq!(other.default_base(), "http://two");
    }
}
