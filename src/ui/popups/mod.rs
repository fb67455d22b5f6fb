//! Modal popup rendering.

pub mod confirm;
pub mod help;
pub mod message;
pub mod network;
