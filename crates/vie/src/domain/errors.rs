//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: i64) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    /// True for the "record absent" kind
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = DomainError::not_found("Vie", 42);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Entity not found: Vie with id 42");
    }

    #[test]
    fn test_repository_is_not_not_found() {
        let err = DomainError::Repository("connection reset".to_string());
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Repository error: connection reset");
    }
}
