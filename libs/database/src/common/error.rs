/// Unified database error type for connector operations
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Driver-level MongoDB error
    #[cfg(feature = "mongodb")]
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// Connection could not be established or verified
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Configuration error (bad host, port or credentials layout)
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DatabaseError {
    /// Whether retrying the same operation can succeed.
    ///
    /// Configuration problems never fix themselves; everything else may be a
    /// store that is still starting up.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, DatabaseError::ConfigError(_))
    }
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
