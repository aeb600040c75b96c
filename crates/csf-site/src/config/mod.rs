use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Distinguishes runtime behavior for different stages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

pub const DEFAULT_BASE_URL: &str = "https://csf.edu.au";

/// Top-level configuration for the site.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub site: SiteConfig,
    pub announcements: AnnouncementStoreConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let ansi = env::var("APP_LOG_ANSI")
            .map(|value| matches!(value.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let site = SiteConfig::new(
            env::var("SITE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        )?;

        let announcements = AnnouncementStoreConfig {
            url: env::var("ANNOUNCEMENTS_STORE_URL").ok(),
            api_key: env::var("ANNOUNCEMENTS_STORE_KEY").ok(),
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level, ansi },
            site,
            announcements,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub ansi: bool,
}

/// Public origin used for absolute links such as sitemap entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    base_url: String,
}

impl SiteConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        let has_scheme = trimmed.starts_with("https://") || trimmed.starts_with("http://");
        let has_host = trimmed
            .split_once("://")
            .map(|(_, rest)| !rest.is_empty())
            .unwrap_or(false);

        if !has_scheme || !has_host {
            return Err(ConfigError::InvalidBaseUrl { value: raw });
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Origin without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Connection details for the external announcements store. Both values
/// are optional; the feature is off unless both are present.
#[derive(Debug, Clone, Default)]
pub struct AnnouncementStoreConfig {
    pub url: Option<String>,
    pub api_key: Option<String>,
}

/// Validated store endpoint and key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreCredentials {
    pub url: String,
    pub api_key: String,
}

impl AnnouncementStoreConfig {
    pub fn credentials(&self) -> Option<StoreCredentials> {
        let url = non_blank(self.url.as_deref())?;
        let api_key = non_blank(self.api_key.as_deref())?;
        Some(StoreCredentials {
            url: url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidBaseUrl { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidBaseUrl { value } => {
                write!(f, "SITE_BASE_URL must be an absolute http(s) URL, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidBaseUrl { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for key in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "APP_LOG_ANSI",
            "SITE_BASE_URL",
            "ANNOUNCEMENTS_STORE_URL",
            "ANNOUNCEMENTS_STORE_KEY",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(!config.telemetry.ansi);
        assert_eq!(config.site.base_url(), DEFAULT_BASE_URL);
        assert!(config.announcements.credentials().is_none());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
    }

    #[test]
    fn rejects_non_numeric_port() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_PORT", "eighty");
        let err = AppConfig::load().expect_err("port must be numeric");
        assert!(matches!(err, ConfigError::InvalidPort));
        reset_env();
    }

    #[test]
    fn reads_store_settings_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ANNOUNCEMENTS_STORE_URL", "https://store.example.test/");
        env::set_var("ANNOUNCEMENTS_STORE_KEY", "anon-key");
        env::set_var("SITE_BASE_URL", "https://staging.csf.edu.au/");
        let config = AppConfig::load().expect("config loads");

        let credentials = config
            .announcements
            .credentials()
            .expect("both values present");
        assert_eq!(credentials.url, "https://store.example.test");
        assert_eq!(credentials.api_key, "anon-key");
        assert_eq!(config.site.base_url(), "https://staging.csf.edu.au");
        reset_env();
    }

    #[test]
    fn blank_store_values_disable_credentials() {
        let only_url = AnnouncementStoreConfig {
            url: Some("https://store.example.test".into()),
            api_key: None,
        };
        let blank_key = AnnouncementStoreConfig {
            url: Some("https://store.example.test".into()),
            api_key: Some("   ".into()),
        };
        let blank_url = AnnouncementStoreConfig {
            url: Some(String::new()),
            api_key: Some("anon-key".into()),
        };

        assert!(only_url.credentials().is_none());
        assert!(blank_key.credentials().is_none());
        assert!(blank_url.credentials().is_none());
    }

    #[test]
    fn base_url_requires_scheme_and_host() {
        assert!(SiteConfig::new("csf.edu.au").is_err());
        assert!(SiteConfig::new("https://").is_err());
        assert!(SiteConfig::new("ftp://csf.edu.au").is_err());
        assert_eq!(
            SiteConfig::new("http://localhost:3000/")
                .expect("valid url")
                .base_url(),
            "http://localhost:3000"
        );
    }
}
