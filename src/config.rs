/*
 * Responsibility
 * - 環境変数や設定の読み込み (PORT, APP_ENV, timeout / body limit)
 * - 設定値のバリデーション (不正なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()))
    }

    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    // HTTP layer knobs (middleware::http)
    pub request_timeout: Duration,
    pub request_body_limit_bytes: usize,
}

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_REQUEST_BODY_LIMIT_BYTES: usize = 1024 * 1024;

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = parse_or("PORT", std::env::var("PORT").ok().as_deref(), DEFAULT_PORT)?;

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        let request_timeout_seconds = parse_or(
            "REQUEST_TIMEOUT_SECONDS",
            std::env::var("REQUEST_TIMEOUT_SECONDS").ok().as_deref(),
            DEFAULT_REQUEST_TIMEOUT_SECONDS,
        )?;
        if request_timeout_seconds == 0 {
            return Err(ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS"));
        }

        let request_body_limit_bytes = parse_or(
            "REQUEST_BODY_LIMIT_BYTES",
            std::env::var("REQUEST_BODY_LIMIT_BYTES").ok().as_deref(),
            DEFAULT_REQUEST_BODY_LIMIT_BYTES,
        )?;

        Ok(Self {
            addr,
            app_env,
            request_timeout: Duration::from_secs(request_timeout_seconds),
            request_body_limit_bytes,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            app_env: AppEnv::Development,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECONDS),
            request_body_limit_bytes: DEFAULT_REQUEST_BODY_LIMIT_BYTES,
        }
    }
}

/// Unset or blank -> default; set but unparsable -> `ConfigError::Invalid(key)`.
fn parse_or<T: FromStr>(key: &'static str, raw: Option<&str>, default: T) -> Result<T, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(v) => v.parse().map_err(|_| ConfigError::Invalid(key)),
    }
}
