/// Result type for message store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for message store operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Connection error - database unreachable or pool construction failure
    #[error("Connection error: {0}")]
    Connection(String),

    /// Invalid configuration - malformed connection string
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Pool error - connection pool issues
    #[error("Pool error: {0}")]
    Pool(#[from] deadpool_postgres::PoolError),

    /// Database error - SQL errors, constraint violations
    #[error("Database error: {0}")]
    Database(#[from] tokio_postgres::Error),
}

/// Convert deadpool build errors to store errors
impl From<deadpool_postgres::BuildError> for Error {
    fn from(err: deadpool_postgres::BuildError) -> Self {
        Error::Connection(err.to_string())
    }
}
