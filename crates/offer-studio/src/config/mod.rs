use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::offers::report::{DEFAULT_REPORT_WIDTH, MIN_REPORT_WIDTH};
use crate::offers::{PricingStrategy, DEFAULT_BONUS_COUNT};
use crate::targeting::DEFAULT_MARKET_POPULATION;

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
    pub studio: StudioConfig,
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

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            studio: StudioConfig::from_env()?,
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
}

/// Defaults applied to offer and targeting requests that leave them out.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub default_strategy: PricingStrategy,
    pub default_bonus_count: usize,
    pub report_width: usize,
    pub market_population: u64,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            default_strategy: PricingStrategy::default(),
            default_bonus_count: DEFAULT_BONUS_COUNT,
            report_width: DEFAULT_REPORT_WIDTH,
            market_population: DEFAULT_MARKET_POPULATION,
        }
    }
}

impl StudioConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let default_strategy = match env::var("OFFER_DEFAULT_STRATEGY") {
            Ok(raw) => PricingStrategy::parse(&raw)
                .ok_or(ConfigError::InvalidStrategy { value: raw })?,
            Err(_) => defaults.default_strategy,
        };

        let default_bonus_count = parse_var("OFFER_DEFAULT_BONUSES", defaults.default_bonus_count)?;

        let report_width = parse_var("OFFER_REPORT_WIDTH", defaults.report_width)?;
        if report_width < MIN_REPORT_WIDTH {
            return Err(ConfigError::InvalidNumber {
                key: "OFFER_REPORT_WIDTH",
                value: report_width.to_string(),
            });
        }

        let market_population =
            parse_var("TARGETING_MARKET_POPULATION", defaults.market_population)?;

        Ok(Self {
            default_strategy,
            default_bonus_count,
            report_width,
            market_population,
        })
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => {
            let parsed = raw.trim().parse::<T>();
            parsed.map_err(|_| ConfigError::InvalidNumber { key, value: raw })
        }
        Err(_) => Ok(default),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidStrategy { value: String },
    InvalidNumber { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { source } => {
                write!(f, "APP_HOST must be an IP address or localhost ({source})")
            }
            ConfigError::InvalidStrategy { value } => {
                write!(f, "OFFER_DEFAULT_STRATEGY '{value}' is not a known pricing strategy")
            }
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} has an invalid value '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidStrategy { .. }
            | ConfigError::InvalidNumber { .. } => None,
        }
    }
}
