//! Errors for jwtmint

use thiserror::Error;

/// jwtmint Errors
///
/// Decoding problems surface as [`Error::InvalidBase64`] or
/// [`Error::InvalidJson`]; signing problems as
/// [`Error::UnsupportedAlgorithm`]. [`TokenEngine::is_valid`](crate::TokenEngine::is_valid)
/// never returns any of these: it collapses every failure into `false`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    // ============================================================================
    // Argument Errors
    // ============================================================================
    #[error("Expected {what} to serialize to a JSON object, got {found}")]
    NotAnObject { what: &'static str, found: &'static str },

    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Invalid JWT format: expected three parts separated by '.'")]
    InvalidFormat,

    #[error("Base64URL decoding failed: {0}")]
    InvalidBase64(String),

    #[error("JSON parsing failed: {0}")]
    InvalidJson(String),

    #[error("JSON serialization failed: {0}")]
    Serialization(String),

    // ============================================================================
    // Algorithm Errors
    // ============================================================================
    #[error("Algorithm '{0}' is not supported")]
    UnsupportedAlgorithm(String),

    // ============================================================================
    // Key Errors
    // ============================================================================
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    // ============================================================================
    // Signature Errors
    // ============================================================================
    #[error("Signature verification failed")]
    SignatureInvalid,
}

impl Error {
    /// Whether the error came from reading a malformed segment
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Error::InvalidBase64(_) | Error::InvalidJson(_))
    }
}

/// Result type alias for jwtmint operations
pub type Result<T> = std::result::Result<T, Error>;
