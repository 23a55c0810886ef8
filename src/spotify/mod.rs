//! Spotify desktop app control over the osascript bridge.
//!
//! - `controller.rs` - typed query and command methods
//! - `types.rs` - player state enum and track snapshot

mod controller;
mod types;

pub use controller::SpotifyController;
pub use types::{PlayerState, TrackInfo};
