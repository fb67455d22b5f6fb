//! Helper functions for formatting and displaying wallet data.
//!
//! This module contains utility functions used across various widgets for:
//! - Address truncation and formatting
//! - Amount formatting (ETH and token units)

// ============================================================================
// Re-exports
// ============================================================================

pub use crate::domain::format_units;

// ============================================================================
// Address Formatting
// ============================================================================

/// Truncate an address to fit in the given width.
///
/// If the address is longer than `max_len`, it will be truncated with an
/// ellipsis in the middle (e.g., "0x6B17...1d0F").
#[must_use]
pub fn truncate_address(addr: &str, max_len: usize) -> String {
    if addr.len() <= max_len {
        return addr.to_string();
    }

    if max_len < 7 {
        // Need at least "a...a" (5 chars) + some buffer
        return addr.chars().take(max_len).collect();
    }

    // Reserve 3 chars for "..."
    let available = max_len - 3;
    let prefix_len = available.div_ceil(2);
    let suffix_len = available / 2;

    let prefix: String = addr.chars().take(prefix_len).collect();
    let suffix: String = addr.chars().skip(addr.len() - suffix_len).collect();

    format!("{prefix}...{suffix}")
}

// ============================================================================
// Amount Formatting
// ============================================================================

/// Format a wei amount as ETH.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_eth_amount(1_000_000_000_000_000_000), "1 ETH");
/// ```
#[must_use]
pub fn format_eth_amount(wei: u128) -> String {
    format!("{} ETH", format_units(wei, 18))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_address_short_passthrough() {
        assert_eq!(truncate_address("0x1234", 20), "0x1234");
    }

    #[test]
    fn test_truncate_address_middle_ellipsis() {
        let addr = "0x6B175474E89094C44Da98b954EedeAC495271d0F";
        let truncated = truncate_address(addr, 16);
        assert_eq!(truncated.len(), 16);
        assert!(truncated.starts_with("0x6B17"));
        assert!(truncated.ends_with("271d0F"));
        assert!(truncated.contains("..."));
    }

    #[test]
    fn test_truncate_address_tiny_width() {
        let addr = "0x6B175474E89094C44Da98b954EedeAC495271d0F";
        assert_eq!(truncate_address(addr, 4), "0x6B");
    }

    #[test]
    fn test_format_eth_amount() {
        assert_eq!(format_eth_amount(1_000_000_000_000_000_000), "1 ETH");
        assert_eq!(format_eth_amount(2_500_000_000_000_000_000), "2.5 ETH");
        assert_eq!(format_eth_amount(0), "0 ETH");
    }
}
