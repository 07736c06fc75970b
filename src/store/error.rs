use thiserror::Error;

/// Result type for store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when talking to the store
#[derive(Debug, Error)]
pub enum Error {
    /// Database unreachable or authentication failure
    #[error("connection error: {0}")]
    Connection(String),

    /// Connection pool issues
    #[error("pool error: {0}")]
    Pool(String),

    /// SQL errors and constraint violations
    #[error("database error: {0}")]
    Database(String),

    /// A stored value that does not fit the data model
    #[error("invalid stored value: {0}")]
    Corrupt(String),

    /// Invalid input data
    #[error("validation error: {0}")]
    Validation(String),
}

impl From<tokio_postgres::Error> for Error {
    fn from(err: tokio_postgres::Error) -> Self {
        if let Some(db_error) = err.as_db_error() {
            return Error::Database(format!(
                "{}: {}",
                db_error.code().code(),
                db_error.message()
            ));
        }
        Error::Database(err.to_string())
    }
}

impl From<deadpool_postgres::PoolError> for Error {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        Error::Pool(err.to_string())
    }
}

impl From<deadpool_postgres::BuildError> for Error {
    fn from(err: deadpool_postgres::BuildError) -> Self {
        Error::Connection(err.to_string())
    }
}
