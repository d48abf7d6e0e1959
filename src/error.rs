// src/error.rs

//! Unified error handling for the word-of-the-day service.

use std::fmt;

use thiserror::Error;

/// Result type alias for service operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Outbound HTTP request failed (connect, timeout, non-2xx status)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream response did not have the expected structure
    #[error("Unexpected response from {context}: {message}")]
    Shape { context: String, message: String },

    /// Dictionary has no entry for the word
    #[error("No dictionary entry for '{0}'")]
    NotFound(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a response shape error with context.
    pub fn shape(context: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Shape {
            context: context.into(),
            message: message.to_string(),
        }
    }

    /// Create a not-found error for a dictionary word.
    pub fn not_found(word: impl Into<String>) -> Self {
        Self::NotFound(word.into())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
