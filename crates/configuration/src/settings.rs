use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub application: Application,
    pub server: Server,
    pub database: Database,
    pub logging: Logging,
}

/// The kind of deployment the process is running in.
///
/// Production gets terse request logs; everything else logs request headers too.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Environment {
    #[default]
    Development,
    Production,
    Test,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Application {
    pub environment: Environment,
}

/// Contains parameters for the HTTP listener.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Server {
    pub host: String,
    pub port: u16,
    /// Maximum accepted request body size for resource routers.
    pub body_limit_bytes: usize,
    /// Origins allowed by CORS. Empty means any origin.
    pub cors_allowed_origins: Vec<String>,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            body_limit_bytes: 1024 * 1024,
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl Server {
    /// The `host:port` string handed to the TCP listener.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Contains parameters for the PostgreSQL connection pool.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Database {
    /// Falls back to the `DATABASE_URL` environment variable when unset.
    pub url: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 10,
            acquire_timeout_secs: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Logging {
    /// An `EnvFilter` directive. `RUST_LOG` takes precedence when set.
    pub filter: String,
    /// When set, logs go to a daily-rolling file in this directory instead of stdout.
    pub directory: Option<PathBuf>,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            directory: None,
        }
    }
}
