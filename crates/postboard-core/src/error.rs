//! Persistence-level error types.

use thiserror::Error;

/// Repository-level errors.
///
/// `NotFound` is the only variant that reports an explicit absence; every other
/// variant is an operational failure.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}
