//! Main content panels.
//!
//! - `account` - selected account overview with avatar and ETH balance
//! - `tokens` - tracked token list

pub mod account;
pub mod tokens;
