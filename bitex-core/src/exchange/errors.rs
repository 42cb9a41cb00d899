// =================================================================
// exchange/errors.rs - Error Types
// =================================================================

use bitex_common::PairError;
use thiserror::Error;

/// Error types for exchange operations
#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("Pair {pair} is not supported by {exchange}")]
    UnsupportedPair { exchange: String, pair: String },

    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("Invalid pair: {0}")]
    InvalidPair(#[from] PairError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Exchange API error: {0}")]
    Api(String),

    #[error("Data parsing error: {0}")]
    ParseError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExchangeError {
    /// Shorthand for the not-implemented contract gap
    pub fn not_implemented(what: impl Into<String>) -> Self {
        ExchangeError::NotImplemented(what.into())
    }
}

// Convert from common error types
impl From<serde_json::Error> for ExchangeError {
    fn from(err: serde_json::Error) -> Self {
        ExchangeError::ParseError(err.to_string())
    }
}

impl From<tokio::time::error::Elapsed> for ExchangeError {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        ExchangeError::Timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_pair_message() {
        let err = ExchangeError::UnsupportedPair {
            exchange: "kraken".to_string(),
            pair: "XXXYYY".to_string(),
        };
        assert_eq!(err.to_string(), "Pair XXXYYY is not supported by kraken");
    }

    #[test]
    fn test_conversions() {
        let err: ExchangeError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, ExchangeError::ParseError(_)));

        let err: ExchangeError = PairError::Empty.into();
        assert!(matches!(err, ExchangeError::InvalidPair(PairError::Empty)));
    }
}
