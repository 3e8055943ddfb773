//! Error types for the domain layer
//!
//! Record building never fails. The only fallible domain operation is
//! reading an identifier back from its string form.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid ID format
    #[error("Invalid ID format: {0}")]
    InvalidId(String),
}

impl DomainError {
    /// Create an invalid ID error
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_id_message_includes_input() {
        let err = DomainError::invalid_id("'elf1' has no 8-digit index");
        assert_eq!(err.to_string(), "Invalid ID format: 'elf1' has no 8-digit index");
    }
}
