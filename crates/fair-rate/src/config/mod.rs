use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Distinguishes runtime behavior for different stages of the service.
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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub rates: RateConfig,
    pub analytics: AnalyticsConfig,
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

        let hours_per_month = positive_number("APP_HOURS_PER_MONTH", 160.0)?;
        let default_client_hours = positive_number("APP_DEFAULT_CLIENT_HOURS", 8.0)?;
        let market_rates_csv = non_empty("APP_MARKET_RATES_CSV").map(PathBuf::from);

        let webhook_url = non_empty("APP_ANALYTICS_WEBHOOK_URL");
        if let Some(url) = &webhook_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidWebhookUrl { value: url.clone() });
            }
        }
        let timeout_secs = env::var("APP_ANALYTICS_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or(ConfigError::InvalidTimeout)?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                ansi: environment == AppEnvironment::Development,
            },
            rates: RateConfig {
                hours_per_month,
                default_client_hours,
                market_rates_csv,
            },
            analytics: AnalyticsConfig {
                webhook_url,
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}

fn non_empty(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn positive_number(key: &'static str, default: f64) -> Result<f64, ConfigError> {
    let Some(raw) = non_empty(key) else {
        return Ok(default);
    };

    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
        .ok_or(ConfigError::InvalidNumber { key, value: raw })
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

/// Reference month and client baseline used by the calculators.
#[derive(Debug, Clone)]
pub struct RateConfig {
    pub hours_per_month: f64,
    pub default_client_hours: f64,
    /// Optional `country,sector,rate` file replacing the built-in market table.
    pub market_rates_csv: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct AnalyticsConfig {
    pub webhook_url: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNumber { key: &'static str, value: String },
    InvalidWebhookUrl { value: String },
    InvalidTimeout,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} must be a positive number, got '{value}'")
            }
            ConfigError::InvalidWebhookUrl { value } => {
                write!(f, "APP_ANALYTICS_WEBHOOK_URL must be an http(s) URL, got '{value}'")
            }
            ConfigError::InvalidTimeout => {
                write!(f, "APP_ANALYTICS_TIMEOUT_SECS must be a positive integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidNumber { .. }
            | ConfigError::InvalidWebhookUrl { .. }
            | ConfigError::InvalidTimeout => None,
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
            "APP_HOURS_PER_MONTH",
            "APP_DEFAULT_CLIENT_HOURS",
            "APP_MARKET_RATES_CSV",
            "APP_ANALYTICS_WEBHOOK_URL",
            "APP_ANALYTICS_TIMEOUT_SECS",
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
        assert_eq!(config.rates.hours_per_month, 160.0);
        assert_eq!(config.rates.default_client_hours, 8.0);
        assert!(config.rates.market_rates_csv.is_none());
        assert!(config.analytics.webhook_url.is_none());
        assert_eq!(config.analytics.timeout, Duration::from_secs(10));
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn rejects_non_positive_reference_hours() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOURS_PER_MONTH", "0");
        let error = AppConfig::load().expect_err("zero hours rejected");
        assert!(matches!(
            error,
            ConfigError::InvalidNumber { key: "APP_HOURS_PER_MONTH", .. }
        ));
        reset_env();
    }

    #[test]
    fn reads_rate_and_analytics_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "production");
        env::set_var("APP_HOURS_PER_MONTH", "168");
        env::set_var("APP_MARKET_RATES_CSV", "data/rates.csv");
        env::set_var("APP_ANALYTICS_WEBHOOK_URL", "https://hooks.example.com/rates");
        env::set_var("APP_ANALYTICS_TIMEOUT_SECS", "3");

        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        assert!(!config.telemetry.ansi);
        assert_eq!(config.rates.hours_per_month, 168.0);
        assert_eq!(
            config.rates.market_rates_csv,
            Some(PathBuf::from("data/rates.csv"))
        );
        assert_eq!(
            config.analytics.webhook_url.as_deref(),
            Some("https://hooks.example.com/rates")
        );
        assert_eq!(config.analytics.timeout, Duration::from_secs(3));
        reset_env();
    }

    #[test]
    fn rejects_webhook_without_scheme() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ANALYTICS_WEBHOOK_URL", "hooks.example.com");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidWebhookUrl { .. })
        ));
        reset_env();
    }
}
