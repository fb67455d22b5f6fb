//! Balance fetching methods for EthClient.
//!
//! Native balances come from `eth_getBalance`; ERC-20 balances from an
//! `eth_call` of `balanceOf(address)`. The [`TokenBalanceSource`] trait is
//! the seam the detection engine depends on, so tests can substitute
//! in-memory doubles for the node.

use serde_json::json;

use super::EthClient;
use crate::domain::WalletError;

/// Function selector for `balanceOf(address)`.
const BALANCE_OF_SELECTOR: &str = "0x70a08231";

// ============================================================================
// TokenBalanceSource
// ============================================================================

/// Opaque source of ERC-20 balances.
///
/// The detection engine only needs this one operation; everything about how
/// balances are resolved (node, API, test double) stays behind this trait.
pub trait TokenBalanceSource {
    /// Raw balance of `holder` for the given `token` contract.
    fn token_balance(
        &self,
        token: &str,
        holder: &str,
    ) -> impl Future<Output = Result<u128, WalletError>> + Send;
}

// ============================================================================
// Quantity Parsing
// ============================================================================

/// Parses a `0x`-prefixed hex quantity into a `u128`.
///
/// Values wider than 128 bits saturate to `u128::MAX`; the detector only
/// distinguishes zero from positive, so saturation is safe.
///
/// # Errors
///
/// Returns `WalletError::Parse` for non-hex input.
pub(crate) fn parse_quantity(raw: &str) -> Result<u128, WalletError> {
    let hex = raw.trim_start_matches("0x");
    if hex.is_empty() {
        return Ok(0);
    }
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(WalletError::parse(format!("malformed hex quantity: {raw}")));
    }

    let significant = hex.trim_start_matches('0');
    if significant.len() > 32 {
        return Ok(u128::MAX);
    }
    if significant.is_empty() {
        return Ok(0);
    }

    u128::from_str_radix(significant, 16)
        .map_err(|e| WalletError::parse(format!("hex quantity out of range: {e}")))
}

/// Builds the `balanceOf` calldata for a holder address.
fn balance_of_calldata(holder: &str) -> String {
    let hex = holder.trim_start_matches("0x").to_ascii_lowercase();
    // ABI encoding: 4-byte selector + address left-padded to 32 bytes.
    format!("{BALANCE_OF_SELECTOR}{:0>64}", hex)
}

// ============================================================================
// Balance Methods
// ============================================================================

impl EthClient {
    /// Native ETH balance of an address, in wei.
    ///
    /// # Errors
    ///
    /// Returns an error if the RPC call fails or the response is malformed.
    pub async fn eth_balance(&self, address: &str) -> Result<u128, WalletError> {
        let result = self
            .rpc_call("eth_getBalance", json!([address, "latest"]))
            .await?;
        let raw = result
            .as_str()
            .ok_or_else(|| WalletError::parse("eth_getBalance returned a non-string result"))?;
        parse_quantity(raw)
    }

    /// Raw ERC-20 balance of `holder` for the `token` contract.
    ///
    /// # Errors
    ///
    /// Returns an error if the RPC call fails or the response is malformed.
    pub async fn erc20_balance(&self, token: &str, holder: &str) -> Result<u128, WalletError> {
        let call = json!([
            {
                "to": token,
                "data": balance_of_calldata(holder),
            },
            "latest"
        ]);

        let result = self.rpc_call("eth_call", call).await?;
        let raw = result
            .as_str()
            .ok_or_else(|| WalletError::parse("eth_call returned a non-string result"))?;
        parse_quantity(raw)
    }
}

impl TokenBalanceSource for EthClient {
    async fn token_balance(&self, token: &str, holder: &str) -> Result<u128, WalletError> {
        self.erc20_balance(token, holder).await
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("0x0", 0)]
    #[case("0x", 0)]
    #[case("0x1", 1)]
    #[case("0xde0b6b3a7640000", 1_000_000_000_000_000_000)]
    #[case(
        "0x0000000000000000000000000000000000000000000000000de0b6b3a7640000",
        1_000_000_000_000_000_000
    )]
    #[case(
        "0x00000000000000000000000000000000ffffffffffffffffffffffffffffffff",
        u128::MAX
    )]
    fn test_parse_quantity(#[case] raw: &str, #[case] expected: u128) {
        assert_eq!(parse_quantity(raw).unwrap(), expected);
    }

    #[test]
    fn test_parse_quantity_saturates_past_128_bits() {
        let wide = "0x0100000000000000000000000000000000000000000000000000000000000000";
        assert_eq!(parse_quantity(wide).unwrap(), u128::MAX);
    }

    #[test]
    fn test_parse_quantity_rejects_garbage() {
        assert!(parse_quantity("0xnothex").is_err());
    }

    #[test]
    fn test_balance_of_calldata_shape() {
        let data = balance_of_calldata("0x6B175474E89094C44Da98b954EedeAC495271d0F");
        // 0x + 8 selector chars + 64 argument chars.
        assert_eq!(data.len(), 2 + 8 + 64);
        assert!(data.starts_with("0x70a08231"));
        assert!(data.ends_with("6b175474e89094c44da98b954eedeac495271d0f"));
        // Left padding is zeros.
        assert!(data[10..34].chars().all(|c| c == '0'));
    }
}
