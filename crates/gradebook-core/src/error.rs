use thiserror::Error;

/// The only failure callers of the aggregation layer ever see.
///
/// Connection errors, query errors and report serialization errors all land
/// here; the wrapped cause is kept for logging but is never shown to clients.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Data access failure: {0:#}")]
    DataAccess(#[from] anyhow::Error),
}

impl Error {
    pub fn data_access(message: impl std::fmt::Display) -> Self {
        Error::DataAccess(anyhow::anyhow!("{}", message))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
