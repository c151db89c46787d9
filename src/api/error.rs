//! API error types for the TradeKing REST API client.

use thiserror::Error;

use crate::transport::TransportError;

/// API-specific error type for the TradeKing REST API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// One of the four required authentication fields is missing or empty
    #[error("invalid credentials: consumer key/secret and OAuth token/secret are required")]
    InvalidCredentials,

    /// A required argument was not supplied
    #[error("you must pass a value for {0}")]
    MissingRequiredField(&'static str),

    /// A single-value field was supplied but empty
    #[error("you must pass a value for {0}")]
    EmptyValue(&'static str),

    /// A list field was supplied with zero elements
    #[error("you must pass at least one element for {0}")]
    EmptyCollection(&'static str),

    /// A value outside a fixed vocabulary was supplied
    #[error("invalid {field} supplied: {value}")]
    InvalidEnumValue {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: String,
    },

    /// Error propagated from the signed transport
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The transport succeeded but the body was not well-formed for the
    /// configured response format
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
