// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for the mustekala transfer client
//!
//! Only transport-level failures and caller mistakes are errors. HTTP-level
//! status codes are never raised here; a 404 comes back as an
//! [`Outcome`](crate::http::Outcome), not an `Err`.

use thiserror::Error;

/// Result type alias for mustekala operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the transfer client
#[derive(Error, Debug)]
pub enum Error {
    /// Requested method is outside the allowed verb set
    #[error("method '{0}' is not allowed")]
    InvalidMethod(String),

    /// The transfer engine failed below HTTP semantics (DNS, connect, timeout)
    #[error("transfer failed: {0}")]
    Transfer(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Check if the engine reported a timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transfer(e) if e.is_timeout())
    }

    /// Check if the engine failed during the connect phase
    pub fn is_connect(&self) -> bool {
        matches!(self, Error::Transfer(e) if e.is_connect())
    }

    /// Check if this is a transport-level failure
    pub fn is_transfer(&self) -> bool {
        matches!(self, Error::Transfer(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_method_display() {
        let err = Error::InvalidMethod("TRACE".to_string());
        assert_eq!(err.to_string(), "method 'TRACE' is not allowed");
        assert!(!err.is_transfer());
    }

    #[test]
    fn test_config_predicates() {
        let err = Error::Config("bad proxy".to_string());
        assert!(!err.is_timeout());
        assert!(!err.is_connect());
    }
}
