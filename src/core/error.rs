//! Error types and error handling for the café finder.
//!
//! This module defines the error types used throughout the
//! application. The HTTP mapping of these errors lives in the
//! `http` adapter.

use thiserror::Error;

/// Result type alias for café finder operations
pub type Result<T> = std::result::Result<T, CafeError>;

/// Main error type for the café finder
///
/// The two client-input kinds render with fixed, lower-case messages
/// because those strings are the response body.
#[derive(Error, Debug)]
pub enum CafeError {
    #[error("unknown city")]
    UnknownCity(Option<String>),

    #[error("incorrect count")]
    InvalidCount(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Catalog error: {0}")]
    CatalogError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl CafeError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            CafeError::UnknownCity(_) | CafeError::InvalidCount(_)
        )
    }
}
