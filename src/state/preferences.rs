//! The preferences store for tracked tokens.
//!
//! Detected tokens are registered here. The store deduplicates by
//! lower-cased contract address, so registering the same token twice is a
//! no-op; callers never have to check membership first. Contents persist to
//! `tokens.json` next to the app configuration.

use chrono::Utc;
use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::domain::{DetectedToken, TrackedToken, address};

/// Tracked-token file name, stored in the config directory.
const TOKENS_FILE: &str = "tokens.json";

// ============================================================================
// Preferences
// ============================================================================

/// Persisted token preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preferences {
    /// Registered tokens, keyed by lower-cased address.
    #[serde(default)]
    tokens: Vec<TrackedToken>,
}

impl Preferences {
    /// Returns the path to the tracked-token file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn store_path() -> Result<PathBuf> {
        let mut path = super::AppConfig::config_path()?;
        path.set_file_name(TOKENS_FILE);
        Ok(path)
    }

    /// Loads preferences from disk, falling back to an empty store.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(prefs) => prefs,
            Err(err) => {
                tracing::warn!("token preferences load failed, starting empty: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load preferences from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn try_load() -> Result<Self> {
        let path = Self::store_path()?;
        let content = fs::read_to_string(&path)?;
        let prefs: Self = serde_json::from_str(&content)?;
        Ok(prefs)
    }

    /// Saves preferences to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let path = Self::store_path()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// All tracked tokens, in registration order.
    #[must_use]
    pub fn tokens(&self) -> &[TrackedToken] {
        &self.tokens
    }

    /// Whether a token is already tracked, in any address case.
    #[must_use]
    pub fn has_token(&self, addr: &str) -> bool {
        let normalized = address::normalize(addr);
        self.tokens.iter().any(|t| t.address == normalized)
    }

    /// Registers a token. Idempotent upsert keyed by lower-cased address.
    ///
    /// Returns `true` if the token was newly added.
    pub fn add_token(&mut self, addr: &str, symbol: &str, decimals: u8) -> bool {
        let normalized = address::normalize(addr);
        if self.tokens.iter().any(|t| t.address == normalized) {
            return false;
        }
        self.tokens.push(TrackedToken {
            address: normalized,
            symbol: symbol.to_string(),
            decimals,
            added_at: Utc::now(),
        });
        true
    }

    /// Registers every detection result, returning how many were new.
    pub fn register_detected(&mut self, detected: &[DetectedToken]) -> usize {
        detected
            .iter()
            .filter(|token| self.add_token(&token.address, &token.symbol, token.decimals))
            .count()
    }

    /// Removes a token by address. Returns `true` if something was removed.
    pub fn remove_token(&mut self, addr: &str) -> bool {
        let normalized = address::normalize(addr);
        let before = self.tokens.len();
        self.tokens.retain(|t| t.address != normalized);
        self.tokens.len() != before
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TokenCandidate;

    const DAI: &str = "0x6B175474E89094C44Da98b954EedeAC495271d0F";
    const DAI_LOWER: &str = "0x6b175474e89094c44da98b954eedeac495271d0f";

    #[test]
    fn test_add_token_lowercases_address() {
        let mut prefs = Preferences::default();
        assert!(prefs.add_token(DAI, "DAI", 18));
        assert_eq!(prefs.tokens().len(), 1);
        assert_eq!(prefs.tokens()[0].address, DAI_LOWER);
        assert_eq!(prefs.tokens()[0].symbol, "DAI");
        assert_eq!(prefs.tokens()[0].decimals, 18);
    }

    #[test]
    fn test_add_token_is_idempotent() {
        let mut prefs = Preferences::default();
        assert!(prefs.add_token(DAI, "DAI", 18));
        // Same address in different case is the same token.
        assert!(!prefs.add_token(DAI_LOWER, "DAI", 18));
        assert!(!prefs.add_token(DAI, "DAI", 18));
        assert_eq!(prefs.tokens().len(), 1);
    }

    #[test]
    fn test_has_token_any_case() {
        let mut prefs = Preferences::default();
        prefs.add_token(DAI_LOWER, "DAI", 18);
        assert!(prefs.has_token(DAI));
        assert!(prefs.has_token(DAI_LOWER));
        assert!(!prefs.has_token("0x0000000000000000000000000000000000000000"));
    }

    #[test]
    fn test_register_detected_counts_new_only() {
        let candidate = TokenCandidate {
            address: DAI.to_string(),
            symbol: "DAI".to_string(),
            name: "Dai Stablecoin".to_string(),
            decimals: 18,
            logo: None,
        };
        let detected = vec![DetectedToken::from_candidate(&candidate, 5)];

        let mut prefs = Preferences::default();
        assert_eq!(prefs.register_detected(&detected), 1);
        // A second pass over the same detection adds nothing.
        assert_eq!(prefs.register_detected(&detected), 0);
        assert_eq!(prefs.tokens().len(), 1);
    }

    #[test]
    fn test_remove_token() {
        let mut prefs = Preferences::default();
        prefs.add_token(DAI, "DAI", 18);
        assert!(prefs.remove_token(DAI));
        assert!(!prefs.remove_token(DAI));
        assert!(prefs.tokens().is_empty());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut prefs = Preferences::default();
        prefs.add_token(DAI, "DAI", 18);
        let json = serde_json::to_string(&prefs).unwrap();
        let back: Preferences = serde_json::from_str(&json).unwrap();
        assert_eq!(prefs, back);
    }
}
