// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for netchain
//!
//! Chain failures (bounds violation, missing response) get their own
//! variants so callers can tell them apart from errors raised by an
//! interceptor or by the transport.

use thiserror::Error;

/// Result type alias for netchain operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for netchain
#[derive(Error, Debug)]
pub enum Error {
    /// `proceed` was called on a chain whose cursor is outside the interceptor list
    #[error("Chain index {index} out of bounds for {len} interceptor(s)")]
    ChainIndexOutOfBounds { index: isize, len: usize },

    /// An interceptor finished without producing a response
    #[error("Interceptor {interceptor} returned no response")]
    MissingResponse { interceptor: String },

    /// HTTP transport failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Header name or value rejected by the transport
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Response status did not match what a validator expected
    #[error("Unexpected status {status}, expected {expected}")]
    UnexpectedStatus { status: u16, expected: u16 },

    /// Response arrived without a payload
    #[error("Empty response body (status {status})")]
    EmptyBody { status: u16 },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error raised by a user interceptor
    #[error(transparent)]
    Custom(Box<dyn std::error::Error + Send + Sync>),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a missing response error for the named interceptor
    pub fn missing_response(interceptor: impl Into<String>) -> Self {
        Error::MissingResponse {
            interceptor: interceptor.into(),
        }
    }

    /// Create an invalid header error
    pub fn invalid_header(name: impl Into<String>, reason: impl ToString) -> Self {
        Error::InvalidHeader {
            name: name.into(),
            reason: reason.to_string(),
        }
    }

    /// Wrap an arbitrary error raised inside an interceptor
    pub fn custom<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Custom(Box::new(err))
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a chain bounds violation
    pub fn is_bounds_violation(&self) -> bool {
        matches!(self, Error::ChainIndexOutOfBounds { .. })
    }

    /// Check if an interceptor broke the response contract
    pub fn is_missing_response(&self) -> bool {
        matches!(self, Error::MissingResponse { .. })
    }

    /// Check if the transport itself failed
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_))
    }

    /// Get HTTP status code if available
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::UnexpectedStatus { status, .. } => Some(*status),
            Error::EmptyBody { status } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}
