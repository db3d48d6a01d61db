use anyhow::{anyhow, Result};
use config::{Config, Environment, File};
use gradebook_db::PoolSettings;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Service settings, layered from defaults, an optional `gradebook.toml`
/// and `GRADEBOOK_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub log_json: bool,
}

impl Settings {
    /// Load settings; an explicit `path` must exist, the default file may not
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name("gradebook").required(false),
        };

        let mut settings: Settings = Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 5150_i64)?
            .set_default("max_connections", 5_i64)?
            .set_default("acquire_timeout_secs", 5_i64)?
            .set_default("request_timeout_secs", 30_i64)?
            .set_default("log_json", false)?
            .add_source(file)
            .add_source(Environment::with_prefix("GRADEBOOK").try_parsing(true))
            .build()?
            .try_deserialize()?;

        if settings.database_url.is_none() {
            settings.database_url = std::env::var("DATABASE_URL").ok();
        }

        Ok(settings)
    }

    pub fn database_url(&self) -> Result<&str> {
        self.database_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or_else(|| anyhow!("DATABASE_URL or GRADEBOOK_DATABASE_URL must be set"))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.max_connections,
            acquire_timeout: Duration::from_secs(self.acquire_timeout_secs),
        }
    }
}
