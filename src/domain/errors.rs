//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Unknown or out-of-range domain code (caller bug)
    InvalidArgument(String),
    /// Constraint violation or persistence failure
    Database(String),
    /// Existence check failed in the service layer
    NotFound(String),
}

impl DomainError {
    pub fn not_found(entity: &str, id: impl fmt::Display) -> Self {
        DomainError::NotFound(format!("{} not found, id: {}", entity, id))
    }

    pub fn missing_field(entity: &str, field: &str) -> Self {
        DomainError::Database(format!("{}.{} must not be null", entity, field))
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            DomainError::Database(msg) => write!(f, "Database error: {}", msg),
            DomainError::NotFound(msg) => write!(f, "Resource not found: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}
