//! Catalog client error types

use thiserror::Error;

use crate::models::FieldError;

/// Catalog backend client errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] soundshelf_shared_config::ConfigError),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("failed to parse catalog response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reading a local file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend answered with an unexpected status and no usable error body
    #[error("catalog backend returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Backend rejected the request with per-field validation errors
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// CSRF cookie could not be acquired
    #[error("CSRF token refresh failed: {0}")]
    Csrf(String),

    /// Request timeout
    #[error("request to catalog backend timed out")]
    Timeout,
}

impl CatalogError {
    /// Field errors carried by a validation failure, if any
    pub fn field_errors(&self) -> Option<&[FieldError]> {
        match self {
            CatalogError::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    pub(crate) fn from_send(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            CatalogError::Timeout
        } else {
            CatalogError::Http(e)
        }
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
