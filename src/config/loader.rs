//! Build `Settings` from the process environment (after loading `.env`).

use crate::config::types::{DatabaseConfig, ServerConfig, Settings};
use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

impl Settings {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Missing keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let db_defaults = DatabaseConfig::default();
        let server_defaults = ServerConfig::default();

        let database = DatabaseConfig {
            url: get("DATABASE_URL"),
            host: get("DBHOST").unwrap_or(db_defaults.host),
            port: parse_or("DBPORT", get("DBPORT"), db_defaults.port)?,
            name: get("DBNAME").unwrap_or(db_defaults.name),
            user: get("DBUSER").unwrap_or(db_defaults.user),
            password: get("DBPASS").unwrap_or(db_defaults.password),
            max_open: parse_or("MAX_OPEN_CONNS", get("MAX_OPEN_CONNS"), db_defaults.max_open)?,
            max_idle: parse_or("MAX_IDLE_CONNS", get("MAX_IDLE_CONNS"), db_defaults.max_idle)?,
            max_lifetime: duration_or(
                "CONN_MAX_LIFETIME",
                get("CONN_MAX_LIFETIME"),
                db_defaults.max_lifetime,
            )?,
            connect_timeout: duration_or(
                "CONNECT_TIMEOUT",
                get("CONNECT_TIMEOUT"),
                db_defaults.connect_timeout,
            )?,
        };
        if database.max_open == 0 {
            return Err(ConfigError::Invalid {
                key: "MAX_OPEN_CONNS",
                value: "0".into(),
                reason: "pool needs at least one connection".into(),
            });
        }

        let server = ServerConfig {
            bind_addr: parse_or("BIND_ADDR", get("BIND_ADDR"), server_defaults.bind_addr)?,
            body_limit_bytes: parse_or(
                "BODY_LIMIT_BYTES",
                get("BODY_LIMIT_BYTES"),
                server_defaults.body_limit_bytes,
            )?,
            dev_stage: get("STAGE_STATUS").is_some_and(|s| s.eq_ignore_ascii_case("dev")),
        };

        Ok(Settings {
            server,
            database,
            verbose_errors: parse_or("VERBOSE_ERRORS", get("VERBOSE_ERRORS"), false)?,
        })
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}

fn duration_or(
    key: &'static str,
    raw: Option<String>,
    default: Duration,
) -> Result<Duration, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => parse_duration(&value).ok_or_else(|| ConfigError::Invalid {
            key,
            value,
            reason: "expected a number of seconds or a value like 30s, 30m, 1h".into(),
        }),
    }
}

/// Parse `90`, `90s`, `30m` or `2h`.
pub fn parse_duration(raw: &str) -> Option<Duration> {
    let raw = raw.trim();
    let (digits, unit) = match raw.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        Some((i, _)) => raw.split_at(i),
        None => (raw, "s"),
    };
    let n: u64 = digits.parse().ok()?;
    let secs = match unit {
        "s" => n,
        "m" => n.checked_mul(60)?,
        "h" => n.checked_mul(3600)?,
        _ => return None,
    };
    Some(Duration::from_secs(secs))
}
