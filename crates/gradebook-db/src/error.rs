use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Unsupported database URL scheme: {0}")]
    UnsupportedUrl(String),

    #[error("SQLx error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Split driver failures into "could not reach the store" and "the query failed".
    pub fn from_query(context: &str, err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => Error::Connection(format!("{}: {}", context, err)),
            other => Error::Query(format!("{}: {}", context, other)),
        }
    }
}

impl From<Error> for gradebook_core::Error {
    fn from(err: Error) -> Self {
        gradebook_core::Error::DataAccess(anyhow::Error::new(err))
    }
}
