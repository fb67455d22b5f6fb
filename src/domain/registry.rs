//! Embedded candidate-token registry.
//!
//! The registry is the static contract-metadata map the detector scans
//! against. It ships with the binary (`assets/erc20-registry.json`) and is
//! parsed once on first access.

use std::sync::OnceLock;

use super::{TokenCandidate, address};

/// Raw registry JSON embedded at build time.
const REGISTRY_JSON: &str = include_str!("../../assets/erc20-registry.json");

static REGISTRY: OnceLock<TokenRegistry> = OnceLock::new();

// ============================================================================
// TokenRegistry
// ============================================================================

/// Read-only lookup over the candidate token list.
#[derive(Debug, Clone)]
pub struct TokenRegistry {
    candidates: Vec<TokenCandidate>,
}

impl TokenRegistry {
    /// Returns the embedded registry, parsing it on first use.
    ///
    /// The embedded JSON is validated by tests; a malformed registry is a
    /// packaging bug, so parsing falls back to an empty list rather than
    /// aborting the UI.
    #[must_use]
    pub fn embedded() -> &'static Self {
        REGISTRY.get_or_init(|| match serde_json::from_str(REGISTRY_JSON) {
            Ok(candidates) => Self { candidates },
            Err(err) => {
                tracing::error!("embedded token registry failed to parse: {err}");
                Self {
                    candidates: Vec::new(),
                }
            }
        })
    }

    /// Builds a registry from an explicit candidate list (used by tests).
    #[must_use]
    pub fn from_candidates(candidates: Vec<TokenCandidate>) -> Self {
        Self { candidates }
    }

    /// All candidate tokens.
    #[must_use]
    pub fn candidates(&self) -> &[TokenCandidate] {
        &self.candidates
    }

    /// Looks up a candidate by address, in any case.
    #[must_use]
    pub fn get(&self, addr: &str) -> Option<&TokenCandidate> {
        let normalized = address::normalize(addr);
        self.candidates
            .iter()
            .find(|c| address::normalize(&c.address) == normalized)
    }

    /// Returns the logo glyph for a contract address, if the registry has one.
    #[must_use]
    pub fn logo(&self, addr: &str) -> Option<&str> {
        self.get(addr).and_then(|c| c.logo.as_deref())
    }

    /// Whether the registry carries a logo entry for this address.
    #[must_use]
    pub fn has_logo(&self, addr: &str) -> bool {
        self.logo(addr).is_some()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::address::{is_valid_address, to_checksum};

    #[test]
    fn test_embedded_registry_parses() {
        let registry = TokenRegistry::embedded();
        assert!(
            registry.candidates().len() >= 10,
            "registry unexpectedly small"
        );
    }

    #[test]
    fn test_embedded_addresses_are_valid_and_checksummed() {
        for candidate in TokenRegistry::embedded().candidates() {
            assert!(
                is_valid_address(&candidate.address),
                "bad address for {}",
                candidate.symbol
            );
            assert_eq!(
                to_checksum(&candidate.address),
                candidate.address,
                "address for {} is not in checksum form",
                candidate.symbol
            );
            assert!(!candidate.symbol.is_empty());
        }
    }

    #[test]
    fn test_embedded_addresses_are_unique() {
        let registry = TokenRegistry::embedded();
        let mut seen = std::collections::HashSet::new();
        for candidate in registry.candidates() {
            assert!(
                seen.insert(address::normalize(&candidate.address)),
                "duplicate registry entry: {}",
                candidate.symbol
            );
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = TokenRegistry::embedded();
        let dai_lower = "0x6b175474e89094c44da98b954eedeac495271d0f";
        let dai_checksum = "0x6B175474E89094C44Da98b954EedeAC495271d0F";

        assert_eq!(registry.get(dai_lower).unwrap().symbol, "DAI");
        assert_eq!(registry.get(dai_checksum).unwrap().symbol, "DAI");
    }

    #[test]
    fn test_logo_lookup() {
        let registry = TokenRegistry::embedded();
        // DAI carries a logo glyph, MKR does not.
        assert!(registry.has_logo("0x6b175474e89094c44da98b954eedeac495271d0f"));
        assert!(!registry.has_logo("0x9f8f72aa9304c8b593d555f12ef6589cc3a579a2"));
        assert!(!registry.has_logo("0x0000000000000000000000000000000000000000"));
    }
}
