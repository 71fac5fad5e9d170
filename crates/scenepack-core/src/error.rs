//! Unified error handling for scenepack
//!
//! This module provides a single error type covering every failure mode of
//! the export pipeline: I/O, codec availability, serialization, and decoding.

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for all scenepack operations
#[derive(Error, Debug)]
pub enum Error {
    // ==================== I/O Errors ====================

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    // ==================== Codec Errors ====================

    /// An optional codec was requested but is not compiled in
    #[error("Missing codec dependency: {codec}")]
    MissingDependency {
        codec: String,
    },

    /// The document could not be encoded by the selected codec
    #[error("Serialization failed: {message}")]
    Serialization {
        message: String,
    },

    /// File content does not parse under the expected codec grammar
    #[error("Decode failed: {message}")]
    Decode {
        message: String,
    },

    // ==================== Data Errors ====================

    /// Invalid data structure
    #[error("Invalid data: {message}")]
    InvalidData {
        message: String,
    },

    // ==================== General Errors ====================

    /// Custom error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

/// Result type using the unified Error
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error with additional context
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Error::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Create a missing-dependency error for a codec
    pub fn missing_dependency(codec: impl Into<String>) -> Self {
        Error::MissingDependency {
            codec: codec.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Error::Serialization {
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Error::Decode {
            message: message.into(),
        }
    }

    /// Create an invalid data error
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Error::InvalidData {
            message: message.into(),
        }
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::FileNotFound(_) => true,
            Error::Io(err) => err.kind() == std::io::ErrorKind::NotFound,
            Error::WithContext { source, .. } => source.is_not_found(),
            _ => false,
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_with_context() {
        let err = Error::FileNotFound(PathBuf::from("/test"));
        let contextualized = err.with_context("while copying textures");

        assert!(contextualized.to_string().contains("while copying textures"));
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::FileNotFound(PathBuf::from("/test")).is_not_found());

        let io = Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(io.is_not_found());

        assert!(!Error::missing_dependency("msgpack").is_not_found());
    }

    #[test]
    fn test_context_preserved_through_not_found() {
        let result: Result<()> = Err(Error::FileNotFound(PathBuf::from("/test")));
        let with_context = result.context("loading artifact");

        let err = with_context.unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("loading artifact"));
    }

    #[test]
    fn test_missing_dependency_display() {
        let err = Error::missing_dependency("msgpack");
        assert_eq!(err.to_string(), "Missing codec dependency: msgpack");
    }
}
