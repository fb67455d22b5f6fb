//! Ethereum JSON-RPC client.
//!
//! This module provides the [`EthClient`] used for all node communication:
//! chain-id health checks, native balance lookups and ERC-20 balance calls.
//!
//! # Example
//!
//! ```ignore
//! use crate::client::EthClient;
//! use crate::domain::NetworkConfig;
//!
//! let client = EthClient::from_config(&NetworkConfig::default())?;
//! client.get_network_status().await?;
//! ```

use std::time::Duration;

use reqwest::Client;
use serde_json::{Value, json};

use crate::domain::{NetworkConfig, WalletError};

mod balances;

pub use balances::TokenBalanceSource;

// ============================================================================
// Ethereum RPC Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct EthClient {
    /// The JSON-RPC endpoint URL.
    pub(crate) rpc_url: String,
    /// Expected chain ID, when known. Verified by the health check.
    expected_chain_id: Option<u64>,
    /// HTTP client for requests.
    pub(crate) client: Client,
}

impl EthClient {
    /// Creates a client for a built-in or custom network.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::ClientInit` if the HTTP client fails to
    /// initialize (e.g. TLS backend unavailable).
    pub fn from_config(config: &NetworkConfig) -> Result<Self, WalletError> {
        let client = Self::build_http_client()?;

        Ok(Self {
            rpc_url: config.rpc_url().to_string(),
            expected_chain_id: config.chain_id(),
            client,
        })
    }

    /// Build the HTTP client with connection pooling.
    fn build_http_client() -> Result<Client, WalletError> {
        Client::builder()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(30))
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| WalletError::client_init(e.to_string()))
    }

    #[must_use]
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    /// Performs a JSON-RPC call and returns the `result` value.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::Network` on transport failures,
    /// `WalletError::Rpc` when the node reports an error object, and
    /// `WalletError::Parse` when the response shape is unexpected.
    pub(crate) async fn rpc_call(&self, method: &str, params: Value) -> Result<Value, WalletError> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        let response = self
            .client
            .post(&self.rpc_url)
            .header("accept", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(WalletError::parse(format!(
                "RPC endpoint returned HTTP {status}: {text}"
            )));
        }

        let payload: Value = response.json().await?;

        if let Some(error) = payload.get("error") {
            let code = error["code"].as_i64().unwrap_or(0);
            let message = error["message"].as_str().unwrap_or("unknown").to_string();
            return Err(WalletError::rpc(code, message));
        }

        payload
            .get("result")
            .cloned()
            .ok_or_else(|| WalletError::parse("response has neither result nor error"))
    }

    /// Check the node is reachable and serving the expected chain.
    ///
    /// # Errors
    ///
    /// Returns a display-ready message if the node is unreachable or reports
    /// a different chain ID than the configured network.
    pub async fn get_network_status(&self) -> Result<(), String> {
        let result = self
            .rpc_call("eth_chainId", json!([]))
            .await
            .map_err(|e| format!("Unable to reach node at {}. Error: {}", self.rpc_url, e))?;

        let reported = result
            .as_str()
            .and_then(|s| u64::from_str_radix(s.trim_start_matches("0x"), 16).ok())
            .ok_or_else(|| format!("Node at {} returned a malformed chain id", self.rpc_url))?;

        if let Some(expected) = self.expected_chain_id
            && reported != expected
        {
            return Err(format!(
                "Node at {} serves chain {reported}, expected {expected}",
                self.rpc_url
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Network;

    #[test]
    fn test_from_config_builtin() {
        let client = EthClient::from_config(&NetworkConfig::BuiltIn(Network::Sepolia)).unwrap();
        assert!(client.rpc_url().contains("sepolia"));
        assert_eq!(client.expected_chain_id, Some(11_155_111));
    }

    #[test]
    fn test_from_config_custom_without_chain_id() {
        let custom = crate::domain::CustomNetwork::new("Fork", "http://localhost:8545");
        let client = EthClient::from_config(&NetworkConfig::Custom(custom)).unwrap();
        assert_eq!(client.rpc_url(), "http://localhost:8545");
        assert_eq!(client.expected_chain_id, None);
    }
}
