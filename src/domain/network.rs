//! Network configuration for Ethereum networks.
//!
//! This module defines the supported Ethereum networks and their
//! associated configuration such as RPC endpoints and block explorers.
//!
//! Token detection is only enabled on [`Network::MainNet`]; test networks
//! and custom endpoints never trigger balance scans.

use serde::{Deserialize, Serialize};

// ============================================================================
// Network Configuration
// ============================================================================

/// Built-in Ethereum network variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Network {
    /// Ethereum mainnet - the production network.
    #[default]
    MainNet,
    /// Sepolia - the proof-of-stake test network.
    Sepolia,
    /// LocalNet - a local development node (anvil/hardhat).
    LocalNet,
}

impl Network {
    /// Returns the human-readable name of the network.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::MainNet => "MainNet",
            Self::Sepolia => "Sepolia",
            Self::LocalNet => "LocalNet",
        }
    }

    /// Returns the JSON-RPC URL for this network.
    #[must_use]
    pub const fn rpc_url(&self) -> &str {
        match self {
            Self::MainNet => "https://cloudflare-eth.com",
            Self::Sepolia => "https://rpc.sepolia.org",
            Self::LocalNet => "http://localhost:8545",
        }
    }

    /// Returns the chain ID for this network.
    #[must_use]
    pub const fn chain_id(&self) -> u64 {
        match self {
            Self::MainNet => 1,
            Self::Sepolia => 11_155_111,
            Self::LocalNet => 31_337,
        }
    }

    /// Returns the block explorer base URL, if one exists.
    #[must_use]
    pub const fn explorer_url(&self) -> Option<&str> {
        match self {
            Self::MainNet => Some("https://etherscan.io"),
            Self::Sepolia => Some("https://sepolia.etherscan.io"),
            Self::LocalNet => None,
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Custom Networks
// ============================================================================

/// A user-defined network endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomNetwork {
    /// Display name for the network.
    pub name: String,
    /// JSON-RPC URL.
    pub rpc_url: String,
    /// Expected chain ID, if known. Used for the health check when present.
    #[serde(default)]
    pub chain_id: Option<u64>,
    /// Block explorer base URL, if any.
    #[serde(default)]
    pub explorer_url: Option<String>,
}

impl CustomNetwork {
    /// Create a new custom network with the given name and RPC URL.
    #[must_use]
    pub fn new(name: impl Into<String>, rpc_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rpc_url: rpc_url.into(),
            chain_id: None,
            explorer_url: None,
        }
    }

    /// Set the expected chain ID.
    #[must_use]
    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = Some(chain_id);
        self
    }

    /// Set the block explorer base URL.
    #[must_use]
    pub fn with_explorer(mut self, url: impl Into<String>) -> Self {
        self.explorer_url = Some(url.into());
        self
    }
}

// ============================================================================
// NetworkConfig
// ============================================================================

/// Either a built-in network or a user-defined custom endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NetworkConfig {
    /// One of the built-in networks.
    BuiltIn(Network),
    /// A custom user-defined network.
    Custom(CustomNetwork),
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::BuiltIn(Network::MainNet)
    }
}

impl NetworkConfig {
    /// Returns the display name of the network.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::BuiltIn(network) => network.as_str(),
            Self::Custom(custom) => &custom.name,
        }
    }

    /// Returns the JSON-RPC URL for the network.
    #[must_use]
    pub fn rpc_url(&self) -> &str {
        match self {
            Self::BuiltIn(network) => network.rpc_url(),
            Self::Custom(custom) => &custom.rpc_url,
        }
    }

    /// Returns the expected chain ID, if known.
    #[must_use]
    pub fn chain_id(&self) -> Option<u64> {
        match self {
            Self::BuiltIn(network) => Some(network.chain_id()),
            Self::Custom(custom) => custom.chain_id,
        }
    }

    /// Returns the block explorer base URL, if any.
    #[must_use]
    pub fn explorer_url(&self) -> Option<&str> {
        match self {
            Self::BuiltIn(network) => network.explorer_url(),
            Self::Custom(custom) => custom.explorer_url.as_deref(),
        }
    }

    /// Whether automatic token detection runs on this network.
    ///
    /// MainNet is the fixed sentinel: balance scans are skipped everywhere
    /// else, including custom endpoints that happen to proxy mainnet.
    #[must_use]
    pub fn detection_enabled(&self) -> bool {
        matches!(self, Self::BuiltIn(Network::MainNet))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn test_network_as_str() {
        assert_eq!(Network::MainNet.as_str(), "MainNet");
        assert_eq!(Network::Sepolia.as_str(), "Sepolia");
        assert_eq!(Network::LocalNet.as_str(), "LocalNet");
    }

    #[test]
    fn test_network_urls() {
        assert!(Network::Sepolia.rpc_url().contains("sepolia"));
        assert!(Network::LocalNet.rpc_url().contains("localhost"));
    }

    #[test]
    fn test_chain_ids() {
        assert_eq!(Network::MainNet.chain_id(), 1);
        assert_eq!(Network::Sepolia.chain_id(), 11_155_111);
        assert_eq!(Network::LocalNet.chain_id(), 31_337);
    }

    #[test]
    fn test_explorer_url() {
        assert!(Network::MainNet.explorer_url().is_some());
        assert!(Network::Sepolia.explorer_url().is_some());
        assert!(Network::LocalNet.explorer_url().is_none());
    }

    #[test]
    fn test_network_default() {
        assert_eq!(Network::default(), Network::MainNet);
        assert_eq!(
            NetworkConfig::default(),
            NetworkConfig::BuiltIn(Network::MainNet)
        );
    }

    #[rstest]
    #[case::mainnet(Network::MainNet, true)]
    #[case::sepolia(Network::Sepolia, false)]
    #[case::localnet(Network::LocalNet, false)]
    fn test_detection_enabled_builtin(#[case] network: Network, #[case] expected: bool) {
        assert_eq!(
            NetworkConfig::BuiltIn(network).detection_enabled(),
            expected
        );
    }

    #[test]
    fn test_detection_disabled_for_custom() {
        // Even a custom endpoint with chain id 1 is not the sentinel network.
        let custom = CustomNetwork::new("MyMainnet", "http://localhost:8545").with_chain_id(1);
        assert!(!NetworkConfig::Custom(custom).detection_enabled());
    }

    #[test]
    fn test_custom_network_builder() {
        let custom = CustomNetwork::new("Fork", "http://localhost:8545")
            .with_chain_id(1)
            .with_explorer("https://example.org");
        assert_eq!(custom.name, "Fork");
        assert_eq!(custom.chain_id, Some(1));
        assert_eq!(custom.explorer_url.as_deref(), Some("https://example.org"));
    }

    #[test]
    fn test_network_serialization() {
        let network = NetworkConfig::BuiltIn(Network::Sepolia);
        let serialized = serde_json::to_string(&network).unwrap();
        let deserialized: NetworkConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(network, deserialized);
    }

    #[test]
    fn test_custom_network_serialization() {
        let config = NetworkConfig::Custom(CustomNetwork::new("Fork", "http://localhost:8545"));
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: NetworkConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
