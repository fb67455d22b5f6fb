//! Domain types for tokenwatch.
//!
//! Networks, addresses, tokens, the embedded contract registry and the
//! shared error type.

pub mod address;
mod error;
mod network;
mod registry;
mod token;

pub use error::WalletError;
pub use network::{CustomNetwork, Network, NetworkConfig};
pub use registry::TokenRegistry;
pub use token::{DetectedToken, TokenCandidate, TrackedToken, format_units};
