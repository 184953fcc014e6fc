//! Database error type shared across the application

use sqlx::Error as SqlxError;
use thiserror::Error;

/// Failure while reaching or using the backing store
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Could not establish a connection to the store
    #[error("database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// The store rejected or failed a query
    #[error("database query error: {0}")]
    Query(#[source] SqlxError),

    /// A schema migration failed to apply
    #[error("database migration error: {0}")]
    Migration(String),

    /// The supplied configuration could not be used
    #[error("database configuration error: {0}")]
    Configuration(String),
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;
