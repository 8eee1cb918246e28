//! Error types for pairbench
//!
//! This module defines all error types used throughout the workspace.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Lookups never produce errors: an absent pair is a miss, reported as `None`.

use std::io;
use thiserror::Error;

/// Result type alias for pairbench operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for catalog construction, key encoding and configuration
#[derive(Debug, Error)]
pub enum Error {
    /// The same display name appeared twice while building a catalog
    #[error("Duplicate type identifier: {0}")]
    DuplicateIdentifier(String),

    /// An operation needed at least one catalog entry
    #[error("Catalog is empty")]
    EmptyCatalog,

    /// A fallible key encoder could not produce a key for the pair
    #[error("Cannot encode key for hashes ({left}, {right})")]
    KeyEncoding {
        /// Hash of the first identifier
        left: i32,
        /// Hash of the second identifier
        right: i32,
    },

    /// Configuration could not be parsed or failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error (config file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_duplicate() {
        let err = Error::DuplicateIdentifier("System.Int32".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Duplicate type identifier"));
        assert!(msg.contains("System.Int32"));
    }

    #[test]
    fn test_error_display_key_encoding() {
        let err = Error::KeyEncoding {
            left: -7,
            right: 42,
        };
        let msg = err.to_string();
        assert!(msg.contains("-7"));
        assert!(msg.contains("42"));
    }

    #[test]
    fn test_error_display_invalid_config() {
        let err = Error::InvalidConfig("no strategies".to_string());
        assert!(err.to_string().contains("Invalid configuration"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_pattern_matching() {
        let err = Error::KeyEncoding { left: 1, right: 2 };
        match err {
            Error::KeyEncoding { left, right } => {
                assert_eq!(left, 1);
                assert_eq!(right, 2);
            }
            _ => panic!("Wrong error variant"),
        }
    }
}
