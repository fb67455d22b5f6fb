//! Token entities.
//!
//! [`TokenCandidate`] entries come from the embedded contract registry and are
//! read-only. A [`DetectedToken`] is produced by a detection pass when a
//! candidate shows a positive balance; a [`TrackedToken`] is what the
//! preferences store persists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::address;

// ============================================================================
// Candidate Tokens
// ============================================================================

/// A candidate ERC-20 token from the static contract registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCandidate {
    /// Contract address in EIP-55 checksum form.
    pub address: String,
    /// Ticker symbol (e.g. "DAI").
    pub symbol: String,
    /// Full token name.
    pub name: String,
    /// Number of decimals.
    pub decimals: u8,
    /// Optional logo glyph for terminal display.
    #[serde(default)]
    pub logo: Option<String>,
}

// ============================================================================
// Detected / Tracked Tokens
// ============================================================================

/// A token discovered by a detection pass.
///
/// The address is always lower-cased; the preferences store uses it as the
/// deduplication key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedToken {
    /// Contract address, lower-cased.
    pub address: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Number of decimals.
    pub decimals: u8,
    /// Raw balance observed at detection time.
    pub balance: u128,
}

impl DetectedToken {
    /// Builds a detected token from a candidate and an observed balance.
    #[must_use]
    pub fn from_candidate(candidate: &TokenCandidate, balance: u128) -> Self {
        Self {
            address: address::normalize(&candidate.address),
            symbol: candidate.symbol.clone(),
            decimals: candidate.decimals,
            balance,
        }
    }
}

/// A token persisted in the preferences store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedToken {
    /// Contract address, lower-cased.
    pub address: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Number of decimals.
    pub decimals: u8,
    /// When the token was first registered.
    pub added_at: DateTime<Utc>,
}

// ============================================================================
// Amount Formatting
// ============================================================================

/// Formats a raw token amount using the token's decimals.
///
/// Keeps up to four fractional digits, trimming trailing zeros.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_units(1_500_000, 6), "1.5");
/// assert_eq!(format_units(42, 0), "42");
/// ```
#[must_use]
pub fn format_units(raw: u128, decimals: u8) -> String {
    if decimals == 0 {
        return raw.to_string();
    }

    let divisor = 10_u128.saturating_pow(u32::from(decimals));
    let whole = raw / divisor;
    let frac = raw % divisor;

    if frac == 0 {
        return whole.to_string();
    }

    let frac_str = format!("{frac:0width$}", width = decimals as usize);
    let shown: String = frac_str.chars().take(4).collect();
    let trimmed = shown.trim_end_matches('0');

    if trimmed.is_empty() {
        whole.to_string()
    } else {
        format!("{whole}.{trimmed}")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn dai() -> TokenCandidate {
        TokenCandidate {
            address: "0x6B175474E89094C44Da98b954EedeAC495271d0F".to_string(),
            symbol: "DAI".to_string(),
            name: "Dai Stablecoin".to_string(),
            decimals: 18,
            logo: Some("◈".to_string()),
        }
    }

    #[test]
    fn test_detected_token_lowercases_address() {
        let detected = DetectedToken::from_candidate(&dai(), 1);
        assert_eq!(
            detected.address,
            "0x6b175474e89094c44da98b954eedeac495271d0f"
        );
        assert_eq!(detected.symbol, "DAI");
        assert_eq!(detected.decimals, 18);
        assert_eq!(detected.balance, 1);
    }

    #[rstest]
    #[case(0, 18, "0")]
    #[case(42, 0, "42")]
    #[case(1_500_000, 6, "1.5")]
    #[case(1_000_000, 6, "1")]
    #[case(1_234_567, 6, "1.2345")]
    #[case(1_000_000_000_000_000_000, 18, "1")]
    #[case(2_500_000_000_000_000_000, 18, "2.5")]
    fn test_format_units(#[case] raw: u128, #[case] decimals: u8, #[case] expected: &str) {
        assert_eq!(format_units(raw, decimals), expected);
    }

    #[test]
    fn test_format_units_tiny_fraction_collapses_to_whole() {
        // 1 wei at 18 decimals is below the 4-digit display precision.
        assert_eq!(format_units(1, 18), "0");
    }

    #[test]
    fn test_candidate_serialization() {
        let candidate = dai();
        let json = serde_json::to_string(&candidate).unwrap();
        let back: TokenCandidate = serde_json::from_str(&json).unwrap();
        assert_eq!(candidate, back);
    }

    #[test]
    fn test_candidate_logo_defaults_to_none() {
        let json = r#"{"address":"0x0","symbol":"X","name":"X Token","decimals":18}"#;
        let candidate: TokenCandidate = serde_json::from_str(json).unwrap();
        assert!(candidate.logo.is_none());
    }
}
