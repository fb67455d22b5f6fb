//! Reusable widgets for the terminal UI.
//!
//! - `avatar` - address and token avatars (images, jazzicons, blockies)
//! - `blockies` - blockie identicon generation
//! - `jazzicon` - jazzicon identicon generation
//! - `helpers` - formatting utilities shared across widgets

pub mod avatar;
pub mod blockies;
pub mod helpers;
pub mod jazzicon;

pub use avatar::Avatar;
