/*
[INPUT]:  Error sources (HTTP transport, JSON decoding, model mapping, exchange rejections)
[OUTPUT]: Structured error types for the whole crate
[POS]:    Error handling layer - unified error types
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the Bitstamp adapter
#[derive(Error, Debug)]
pub enum BitstampError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body is not valid JSON, or not a JSON object/array
    #[error("Failed to decode response body: {message}")]
    Decode { message: String },

    /// Response shape does not match the expected model
    #[error("Failed to map response to model: {message}")]
    Mapping { message: String },

    /// Unsupported pair symbol, time window or other bad input.
    /// Raised before any network call.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The exchange's JSON body encodes an error (duplicate nonce,
    /// bad signature, insufficient balance), regardless of HTTP status
    #[error("Exchange rejected the request: {reason}")]
    RemoteRejection { code: Option<String>, reason: String },

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl BitstampError {
    /// Check if the error is retryable by a wrapping layer
    pub fn is_retryable(&self) -> bool {
        matches!(self, BitstampError::Http(_))
    }

    /// Check if the exchange itself rejected the request
    pub fn is_remote_rejection(&self) -> bool {
        matches!(self, BitstampError::RemoteRejection { .. })
    }

    /// Create an invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        BitstampError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        BitstampError::Decode {
            message: message.into(),
        }
    }

    /// Create a mapping error
    pub fn mapping(message: impl Into<String>) -> Self {
        BitstampError::Mapping {
            message: message.into(),
        }
    }
}

/// Result type alias for Bitstamp operations
pub type Result<T> = std::result::Result<T, BitstampError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_retryable() {
        let decode_err = BitstampError::decode("unexpected end of input");
        assert!(!decode_err.is_retryable());

        let rejection = BitstampError::RemoteRejection {
            code: Some("API0017".to_string()),
            reason: "Invalid nonce".to_string(),
        };
        assert!(!rejection.is_retryable());
        assert!(rejection.is_remote_rejection());
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = BitstampError::invalid_argument("unknown currency pair: notapair");
        assert_eq!(
            err.to_string(),
            "Invalid argument: unknown currency pair: notapair"
        );
    }
}
