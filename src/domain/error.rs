//! Error types for wallet and RPC operations.
//!
//! This module defines the custom error types used throughout the Ethereum
//! client operations, providing structured error handling with helpful messages.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Custom error type for wallet client operations.
///
/// This enum provides specific error variants for different failure modes
/// encountered when interacting with an Ethereum JSON-RPC endpoint.
#[derive(Debug, Error)]
pub enum WalletError {
    /// Network-related errors from HTTP requests.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON-RPC level errors returned by the node.
    #[error("RPC error {code}: {message}")]
    Rpc {
        /// JSON-RPC error code.
        code: i64,
        /// Human-readable error message from the node.
        message: String,
    },

    /// JSON parsing or data structure errors.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// HTTP client initialization failure (e.g. TLS backend unavailable).
    #[error("Client init error: {0}")]
    ClientInit(String),

    /// Invalid user input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl WalletError {
    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new RPC error from a node-reported code and message.
    #[must_use]
    pub fn rpc(code: i64, message: impl Into<String>) -> Self {
        Self::Rpc {
            code,
            message: message.into(),
        }
    }

    /// Create a new client initialization error.
    #[must_use]
    pub fn client_init(message: impl Into<String>) -> Self {
        Self::ClientInit(message.into())
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Convert to a `color_eyre::Report` for API compatibility.
    #[must_use = "this converts the error into a Report for display"]
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_error_display() {
        let parse_err = WalletError::parse("truncated response");
        assert_eq!(format!("{}", parse_err), "Parse error: truncated response");

        let rpc_err = WalletError::rpc(-32000, "execution reverted");
        assert_eq!(format!("{}", rpc_err), "RPC error -32000: execution reverted");

        let invalid_err = WalletError::invalid_input("bad address");
        assert_eq!(format!("{}", invalid_err), "Invalid input: bad address");
    }

    #[test]
    fn test_parse_error_creation() {
        let err = WalletError::parse("invalid JSON");
        match err {
            WalletError::Parse { message } => assert_eq!(message, "invalid JSON"),
            _ => panic!("Expected Parse variant"),
        }
    }

    #[test]
    fn test_rpc_error_creation() {
        let err = WalletError::rpc(-32601, "method not found");
        match err {
            WalletError::Rpc { code, message } => {
                assert_eq!(code, -32601);
                assert_eq!(message, "method not found");
            }
            _ => panic!("Expected Rpc variant"),
        }
    }

    #[test]
    fn test_into_report_preserves_message() {
        let report = WalletError::invalid_input("empty query").into_report();
        assert!(report.to_string().contains("empty query"));
    }
}
