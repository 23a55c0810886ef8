//! Spotify scripting dictionary types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::osa::ScriptError;

/// Playback state reported by `player state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerState {
  Paused,
  Playing,
  Stopped,
}

impl PlayerState {
  /// The token Spotify prints for this state.
  pub fn as_str(self) -> &'static str {
    match self {
      PlayerState::Paused => "paused",
      PlayerState::Playing => "playing",
      PlayerState::Stopped => "stopped",
    }
  }
}

impl FromStr for PlayerState {
  type Err = ScriptError;

  /// Matches the exact lowercase token only.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "paused" => Ok(PlayerState::Paused),
      "playing" => Ok(PlayerState::Playing),
      "stopped" => Ok(PlayerState::Stopped),
      _ => Err(ScriptError::parse("player state", s)),
    }
  }
}

impl fmt::Display for PlayerState {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Snapshot of the current track's attributes.
///
/// Each field is queried separately, so a field is `None` when its own query
/// failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackInfo {
  pub url: Option<String>,
  pub id: Option<String>,
  pub name: Option<String>,
  pub artist: Option<String>,
  pub album: Option<String>,
  pub album_artist: Option<String>,
  pub artwork_url: Option<String>,
  pub track_number: Option<i64>,
  pub disc_number: Option<i64>,
  /// Length in seconds.
  pub duration: Option<i64>,
  pub play_count: Option<i64>,
  /// 0-100.
  pub popularity: Option<i64>,
  pub starred: Option<bool>,
}
