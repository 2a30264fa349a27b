//! Custom error types for corral
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::AnimalId;

/// The main error type for corral operations
#[derive(Error, Debug)]
pub enum CorralError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Business-rule violation: the animal exists but is already rented out.
    /// Distinct from NotFound so callers can tell a bad id apart from a
    /// double booking.
    #[error("Animal {id} is not available for rental")]
    AnimalNotAvailable { id: AnimalId },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CorralError {
    /// Create a "not found" error for animals
    pub fn animal_not_found(identifier: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "Animal",
            identifier: identifier.to_string(),
        }
    }

    /// Create a "not found" error for customers
    pub fn customer_not_found(identifier: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "Customer",
            identifier: identifier.to_string(),
        }
    }

    /// Create a "not found" error for rentals
    pub fn rental_not_found(identifier: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "Rental",
            identifier: identifier.to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for CorralError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CorralError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for corral operations
pub type CorralResult<T> = Result<T, CorralError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CorralError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = CorralError::animal_not_found(7);
        assert_eq!(err.to_string(), "Animal not found: 7");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_not_available_is_not_a_not_found() {
        let err = CorralError::AnimalNotAvailable {
            id: AnimalId::from(3),
        };
        assert_eq!(err.to_string(), "Animal 3 is not available for rental");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let corral_err: CorralError = io_err.into();
        assert!(matches!(corral_err, CorralError::Io(_)));
    }
}
