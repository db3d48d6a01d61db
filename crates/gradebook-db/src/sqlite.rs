use crate::{
    queries::{AverageRow, COURSE_AVERAGES, STUDENT_AVERAGES},
    Error, PoolSettings, Result,
};
use async_trait::async_trait;
use gradebook_core::{GradeStore, GroupAverage};
use sqlx::{sqlite::SqlitePoolOptions, Pool, Sqlite};

/// Grade store backed by a SQLite database file.
///
/// Handy for local runs and for exercising the real SQL in tests.
#[derive(Clone)]
pub struct SqliteGradeStore {
    pool: Pool<Sqlite>,
}

impl SqliteGradeStore {
    pub fn connect_lazy(database_url: &str, settings: &PoolSettings) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.acquire_timeout)
            .connect_lazy(database_url)?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    async fn fetch_averages(&self, context: &str, sql: &str) -> Result<Vec<GroupAverage>> {
        let rows = sqlx::query_as::<_, AverageRow>(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Error::from_query(context, e))?;

        tracing::debug!(query = context, rows = rows.len(), "Aggregate query finished");

        Ok(rows.into_iter().map(GroupAverage::from).collect())
    }
}

#[async_trait]
impl GradeStore for SqliteGradeStore {
    async fn student_averages(&self) -> gradebook_core::Result<Vec<GroupAverage>> {
        Ok(self.fetch_averages("student averages", STUDENT_AVERAGES).await?)
    }

    async fn course_averages(&self) -> gradebook_core::Result<Vec<GroupAverage>> {
        Ok(self.fetch_averages("course averages", COURSE_AVERAGES).await?)
    }
}
