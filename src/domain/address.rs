//! Ethereum address helpers.
//!
//! Validation, normalization and EIP-55 checksum encoding. The checksum form
//! is used for display and for contract-registry lookups; the lower-cased
//! form is the canonical storage key everywhere else.

use data_encoding::HEXLOWER;
use sha3::{Digest, Keccak256};

use super::WalletError;

// ============================================================================
// Validation
// ============================================================================

/// Returns `true` if the string is a well-formed `0x`-prefixed address.
#[must_use]
pub fn is_valid_address(address: &str) -> bool {
    let Some(hex) = address.strip_prefix("0x") else {
        return false;
    };
    hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// Validates an address, returning an error suitable for user display.
///
/// # Errors
///
/// Returns `WalletError::InvalidInput` if the address is malformed.
pub fn validate_address(address: &str) -> Result<(), WalletError> {
    if is_valid_address(address) {
        Ok(())
    } else {
        Err(WalletError::invalid_input(format!(
            "'{address}' is not a valid Ethereum address (expected 0x followed by 40 hex characters)"
        )))
    }
}

// ============================================================================
// Normalization
// ============================================================================

/// Lower-cases an address into its canonical storage form.
///
/// Detected tokens and preference entries are always keyed by this form.
#[must_use]
pub fn normalize(address: &str) -> String {
    address.to_ascii_lowercase()
}

/// Encodes an address in EIP-55 mixed-case checksum form.
///
/// The input may be in any case; malformed input is returned lower-cased
/// unchanged so callers can treat this as a total function for display.
#[must_use]
pub fn to_checksum(address: &str) -> String {
    let lower = normalize(address);
    let Some(hex) = lower.strip_prefix("0x") else {
        return lower;
    };
    if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return lower;
    }

    let digest = Keccak256::digest(hex.as_bytes());
    let digest_hex = HEXLOWER.encode(&digest);

    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (ch, hash_ch) in hex.chars().zip(digest_hex.chars()) {
        // Letters are upper-cased when the matching hash nibble is >= 8.
        let nibble = hash_ch.to_digit(16).unwrap_or(0);
        if ch.is_ascii_alphabetic() && nibble >= 8 {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn test_is_valid_address() {
        assert!(is_valid_address(
            "0x6b175474e89094c44da98b954eedeac495271d0f"
        ));
        assert!(is_valid_address(
            "0x6B175474E89094C44Da98b954EedeAC495271d0F"
        ));
        assert!(!is_valid_address("6b175474e89094c44da98b954eedeac495271d0f"));
        assert!(!is_valid_address("0x6b17"));
        assert!(!is_valid_address(
            "0xZZ175474e89094c44da98b954eedeac495271d0f"
        ));
        assert!(!is_valid_address(""));
    }

    #[test]
    fn test_validate_address_error_message() {
        let err = validate_address("nope").unwrap_err();
        assert!(err.to_string().contains("not a valid Ethereum address"));
    }

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(
            normalize("0x6B175474E89094C44Da98b954EedeAC495271d0F"),
            "0x6b175474e89094c44da98b954eedeac495271d0f"
        );
    }

    // Reference vectors from the EIP-55 specification.
    #[rstest]
    #[case("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed", "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed")]
    #[case("0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359", "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359")]
    #[case("0xdbf03b407c01e7cd3cbea99509d93f8dddc8c6fb", "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB")]
    #[case("0xd1220a0cf47c7b9be7a2e6ba89f429762e7b9adb", "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb")]
    fn test_checksum_reference_vectors(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_checksum(input), expected);
    }

    #[test]
    fn test_checksum_is_case_insensitive_over_input() {
        let upper = "0x5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED";
        let lower = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed";
        assert_eq!(to_checksum(upper), to_checksum(lower));
    }

    #[test]
    fn test_checksum_passes_malformed_through() {
        assert_eq!(to_checksum("not-an-address"), "not-an-address");
        assert_eq!(to_checksum("0x1234"), "0x1234");
    }
}
