//! Configuration structs. Defaults match a local development database.

use std::net::SocketAddr;
use std::time::Duration;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    /// Echo raw store errors to clients. Off unless explicitly enabled.
    pub verbose_errors: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub body_limit_bytes: usize,
    /// `STAGE_STATUS=dev` skips graceful shutdown.
    pub dev_stage: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            body_limit_bytes: 64 * 1024,
            dev_stage: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Full connection URL; when set it takes precedence over the discrete fields.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
    pub max_open: u32,
    pub max_idle: u32,
    pub max_lifetime: Duration,
    pub connect_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            url: None,
            host: "localhost".into(),
            port: 5432,
            name: "dbname".into(),
            user: "dbuser".into(),
            password: "dbpass".into(),
            max_open: 30,
            max_idle: 6,
            max_lifetime: Duration::from_secs(30 * 60),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

impl DatabaseConfig {
    /// Idle connections kept warm, never more than the pool may open.
    pub fn min_connections(&self) -> u32 {
        self.max_idle.min(self.max_open)
    }
}
