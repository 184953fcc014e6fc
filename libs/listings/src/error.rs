//! Error types for the listings data layer

use common::error::DatabaseError;
use thiserror::Error;

/// Validation failure raised by an entity mutator
///
/// The variant is the error kind; the message names the field and the check
/// it failed. Construction propagates the first failing mutator's error
/// unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The value has the wrong shape or failed the sanitize check
    #[error("{0}")]
    InvalidArgument(String),

    /// The value falls outside the bounds documented for its column
    #[error("{0}")]
    OutOfRange(String),

    /// An id slot held something that is not a valid integer
    #[error("{0}")]
    UnexpectedValue(String),
}

/// Failure of a persistence operation
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Insert was called on an entity the store already assigned an id
    #[error("not a new {0}")]
    AlreadyPersisted(&'static str),

    /// Delete or update was called on an entity that was never inserted
    #[error("unable to {0} a {1} that has not been persisted")]
    NotPersisted(&'static str, &'static str),

    /// The underlying store reported a failure
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// Type alias for mutator and constructor results
pub type FieldResult<T> = Result<T, FieldError>;

/// Type alias for persistence operation results
pub type PersistenceResult<T> = Result<T, PersistenceError>;
