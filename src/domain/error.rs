//! Error types for the movie catalog.
//!
//! This module defines the centralized error type [`CatalogError`] and a type alias
//! [`Result`] used throughout the crate. Every error is terminal to the action that
//! raised it only; the session loop always continues with the next command.

use crate::domain::movie::MovieId;
use thiserror::Error;

/// The main error type for catalog operations.
///
/// # Examples
///
/// ```
/// use movie_catalog::CatalogError;
///
/// fn reject_title() -> Result<(), CatalogError> {
///     Err(CatalogError::Validation {
///         field: "title",
///         reason: "must not be empty".to_string(),
///     })
/// }
///
/// assert!(reject_title().is_err());
/// ```
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A field value is outside its allowed domain.
    ///
    /// Raised by record construction for empty text fields and out-of-range
    /// integers. Never reaches the collection store.
    #[error("Invalid {field}: {reason}")]
    Validation {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable description of the violated constraint.
        reason: String,
    },

    /// No record with the given id exists in the collection.
    ///
    /// Typically caused by a stale selection. Reported as a no-op.
    #[error("Movie not found: {0}")]
    NotFound(MovieId),

    /// Reading or writing the data file failed at the format level.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or console I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is unreadable or malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// Returns `true` when the error means the console input stream has ended.
    ///
    /// The binary uses this to leave the session loop instead of re-prompting forever.
    #[must_use]
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
    }
}

/// A specialized `Result` type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_names_the_field() {
        let err = CatalogError::Validation {
            field: "duration_minutes",
            reason: "must be between 3 and 873, got 2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid duration_minutes: must be between 3 and 873, got 2"
        );
    }

    #[test]
    fn end_of_input_is_detected_only_for_eof() {
        let eof = CatalogError::Io(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "stdin closed",
        ));
        let other = CatalogError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "nope",
        ));
        assert!(eof.is_end_of_input());
        assert!(!other.is_end_of_input());
        assert!(!CatalogError::Storage("bad".into()).is_end_of_input());
    }
}
