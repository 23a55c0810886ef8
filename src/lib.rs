//! Query and control a running Spotify desktop app through `osascript`.
//!
//! Every operation spawns one interpreter process, blocks until it exits and
//! parses its single line of output. Failures never raise; they read as
//! `None`.
//!
//! ```no_run
//! use spotify_osa::{PlayerState, SpotifyController};
//!
//! let spotify = SpotifyController::new();
//! if spotify.player_state() == Some(PlayerState::Playing) {
//!   spotify.pause();
//! }
//! spotify.set_volume(40);
//! ```

mod config;
pub mod osa;
mod spotify;

pub use config::{ConfigError, ControllerConfig, DEFAULT_APPLICATION};
pub use osa::{Osascript, ScriptError, ScriptRunner};
pub use spotify::{PlayerState, SpotifyController, TrackInfo};
