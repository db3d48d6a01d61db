pub mod error;
pub mod postgres;
pub mod queries;
pub mod sqlite;

use std::sync::Arc;
use std::time::Duration;

use gradebook_core::GradeStore;

// Re-exports
pub use error::{Error, Result};
pub use postgres::PgGradeStore;
pub use sqlite::SqliteGradeStore;

/// Pool sizing shared by every backend.
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 5,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// Build the store matching the URL scheme.
///
/// Pools connect lazily, so an unreachable database is reported by the first
/// query rather than here.
pub fn connect(database_url: &str, settings: &PoolSettings) -> Result<Arc<dyn GradeStore>> {
    let scheme = database_url.split(':').next().unwrap_or_default();

    match scheme {
        "postgres" | "postgresql" => Ok(Arc::new(PgGradeStore::connect_lazy(database_url, settings)?)),
        "sqlite" => Ok(Arc::new(SqliteGradeStore::connect_lazy(database_url, settings)?)),
        _ => Err(Error::UnsupportedUrl(scheme.to_string())),
    }
}
