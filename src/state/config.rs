//! Application configuration with persistence.
//!
//! This module provides the [`AppConfig`] structure for managing application
//! settings with automatic load/save to disk.
//!
//! # Configuration File Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/tokenwatch/config.json`
//! - macOS: `~/Library/Application Support/tokenwatch/config.json`
//! - Windows: `%APPDATA%/tokenwatch/config.json`

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::domain::{CustomNetwork, Network, NetworkConfig, address};

// ============================================================================
// Constants
// ============================================================================

/// Application name used for the configuration directory.
const APP_NAME: &str = "tokenwatch";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Default detection interval in seconds (three minutes).
pub const DEFAULT_DETECT_INTERVAL_SECS: u64 = 180;

fn default_detect_interval() -> u64 {
    DEFAULT_DETECT_INTERVAL_SECS
}

fn default_show_live() -> bool {
    true
}

// ============================================================================
// AppConfig
// ============================================================================

/// Persisted application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// The currently selected network.
    #[serde(default)]
    pub network: NetworkConfig,
    /// List of user-defined custom networks.
    #[serde(default)]
    pub custom_networks: Vec<CustomNetwork>,
    /// Watched account addresses, lower-cased.
    #[serde(default)]
    pub accounts: Vec<String>,
    /// Index of the selected account in `accounts`.
    #[serde(default)]
    pub selected_account: usize,
    /// Whether live updates are enabled.
    #[serde(default = "default_show_live")]
    pub show_live: bool,
    /// Whether generated avatars default to blockies instead of jazzicons.
    #[serde(default)]
    pub use_blockies: bool,
    /// Seconds between timer-driven detection passes.
    #[serde(default = "default_detect_interval")]
    pub detect_interval_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            network: NetworkConfig::BuiltIn(Network::MainNet),
            custom_networks: Vec::new(),
            accounts: Vec::new(),
            selected_account: 0,
            show_live: true,
            use_blockies: false,
            detect_interval_secs: DEFAULT_DETECT_INTERVAL_SECS,
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration from disk, falling back to defaults.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined, the file cannot be
    /// read, or the JSON cannot be parsed.
    pub fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        let content = fs::read_to_string(&path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Saves the configuration to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined or the file cannot
    /// be written.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Adds a watched account, normalizing and deduplicating by address.
    ///
    /// Returns `true` if the account was added, `false` if it was already
    /// present (in which case it is selected instead).
    ///
    /// # Errors
    ///
    /// Returns an error if the address is malformed.
    pub fn add_account(&mut self, addr: &str) -> Result<bool> {
        address::validate_address(addr).map_err(crate::domain::WalletError::into_report)?;
        let normalized = address::normalize(addr);

        if let Some(pos) = self.accounts.iter().position(|a| *a == normalized) {
            self.selected_account = pos;
            return Ok(false);
        }

        self.accounts.push(normalized);
        self.selected_account = self.accounts.len() - 1;
        Ok(true)
    }

    /// The detection interval as a `Duration`.
    #[must_use]
    pub fn detect_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.detect_interval_secs.max(1))
    }

    /// Adds a custom network.
    ///
    /// # Errors
    ///
    /// Returns an error if a network with the same name exists.
    #[allow(dead_code)] // Part of config API
    pub fn add_custom_network(&mut self, network: CustomNetwork) -> Result<()> {
        if self.custom_networks.iter().any(|n| n.name == network.name) {
            return Err(color_eyre::eyre::eyre!(
                "Network '{}' already exists",
                network.name
            ));
        }
        self.custom_networks.push(network);
        Ok(())
    }

    /// Returns all available networks (built-in + custom).
    #[must_use]
    pub fn get_all_networks(&self) -> Vec<NetworkConfig> {
        let mut networks = vec![
            NetworkConfig::BuiltIn(Network::MainNet),
            NetworkConfig::BuiltIn(Network::Sepolia),
            NetworkConfig::BuiltIn(Network::LocalNet),
        ];
        networks.extend(
            self.custom_networks
                .iter()
                .cloned()
                .map(NetworkConfig::Custom),
        );
        networks
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    const ADDR_A: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
    const ADDR_B: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.network, NetworkConfig::BuiltIn(Network::MainNet));
        assert!(config.custom_networks.is_empty());
        assert!(config.accounts.is_empty());
        assert!(config.show_live);
        assert!(!config.use_blockies);
        assert_eq!(config.detect_interval_secs, 180);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut config = AppConfig::default();
        config.network = NetworkConfig::BuiltIn(Network::Sepolia);
        config.accounts.push(ADDR_A.to_ascii_lowercase());
        config.use_blockies = true;

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let old_json = r#"{"show_live":false}"#;
        let config: AppConfig = serde_json::from_str(old_json).unwrap();
        assert!(!config.show_live);
        assert!(config.accounts.is_empty());
        assert_eq!(config.detect_interval_secs, 180);
    }

    #[test]
    fn test_add_account_normalizes_and_selects() {
        let mut config = AppConfig::default();
        let added = config.add_account(ADDR_A).unwrap();
        assert!(added);
        assert_eq!(config.accounts, vec![ADDR_A.to_ascii_lowercase()]);
        assert_eq!(config.selected_account, 0);
    }

    #[test]
    fn test_add_account_dedupes_case_insensitively() {
        let mut config = AppConfig::default();
        config.add_account(ADDR_A).unwrap();
        config.add_account(ADDR_B).unwrap();
        assert_eq!(config.selected_account, 1);

        // Re-adding the first account in different case selects it instead.
        let added = config.add_account(&ADDR_A.to_ascii_uppercase().replace("0X", "0x")).unwrap();
        assert!(!added);
        assert_eq!(config.accounts.len(), 2);
        assert_eq!(config.selected_account, 0);
    }

    #[test]
    fn test_add_account_rejects_malformed() {
        let mut config = AppConfig::default();
        assert!(config.add_account("not-an-address").is_err());
        assert!(config.accounts.is_empty());
    }

    #[test]
    fn test_detect_interval_floor() {
        let mut config = AppConfig::default();
        config.detect_interval_secs = 0;
        assert_eq!(config.detect_interval(), std::time::Duration::from_secs(1));
    }

    #[test]
    fn test_add_custom_network_duplicate_name() {
        let mut config = AppConfig::default();
        config
            .add_custom_network(CustomNetwork::new("Fork", "http://localhost:8545"))
            .unwrap();
        let result = config.add_custom_network(CustomNetwork::new("Fork", "http://other:8545"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("already exists"));
    }

    #[test]
    fn test_get_all_networks() {
        let mut config = AppConfig::default();
        config
            .add_custom_network(CustomNetwork::new("Fork", "http://localhost:8545"))
            .unwrap();

        let networks = config.get_all_networks();
        assert_eq!(networks.len(), 4);
        assert_eq!(networks[0], NetworkConfig::BuiltIn(Network::MainNet));
        match &networks[3] {
            NetworkConfig::Custom(n) => assert_eq!(n.name, "Fork"),
            other => panic!("expected custom network, got {other:?}"),
        }
    }

    #[rstest]
    #[case::mainnet(Network::MainNet)]
    #[case::sepolia(Network::Sepolia)]
    #[case::localnet(Network::LocalNet)]
    fn test_all_networks_serialize(#[case] network: Network) {
        let config = AppConfig {
            network: NetworkConfig::BuiltIn(network),
            ..AppConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.network, deserialized.network);
    }
}
