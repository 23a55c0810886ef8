//! High-level Spotify controller with query and command methods.

use crate::config::{ConfigError, ControllerConfig};
use crate::osa::{parse_flag, parse_float_lenient, parse_int, Osascript, ScriptRunner, Statement};

use super::types::{PlayerState, TrackInfo};

/// Queries and controls a running Spotify app.
///
/// Holds no player state: every call is one blocking interpreter round trip,
/// and any failure reads as `None`.
#[derive(Debug, Clone)]
pub struct SpotifyController<R = Osascript> {
  application: String,
  runner: R,
}

impl SpotifyController<Osascript> {
  /// Controller for "Spotify" using the detected osascript.
  pub fn new() -> Self {
    Self::with_runner(Osascript::detect())
  }

  /// Build a controller from validated configuration.
  pub fn from_config(config: &ControllerConfig) -> Result<Self, ConfigError> {
    config.validate()?;
    Ok(Self::with_application(
      config.application.clone(),
      Osascript::new(config.interpreter()),
    ))
  }
}

impl Default for SpotifyController<Osascript> {
  fn default() -> Self {
    Self::new()
  }
}

impl<R: ScriptRunner> SpotifyController<R> {
  /// Controller for "Spotify" using a custom runner.
  pub fn with_runner(runner: R) -> Self {
    Self::with_application(crate::config::DEFAULT_APPLICATION.to_string(), runner)
  }

  /// Target another application name, e.g. a renamed Spotify build.
  ///
  /// The name is quoted in every statement, whatever characters it holds.
  pub fn with_application(application: String, runner: R) -> Self {
    Self { application, runner }
  }

  pub fn application(&self) -> &str {
    &self.application
  }

  pub fn runner(&self) -> &R {
    &self.runner
  }

  fn send(&self, statement: Statement) -> Option<String> {
    self.runner.execute(&statement.render())
  }

  /// Run a raw verb against the application, e.g. `"player state"`.
  pub fn execute(&self, verb: &str) -> Option<String> {
    self.send(Statement::new(&self.application, verb))
  }

  fn command(&self, statement: Statement) {
    let _ = self.send(statement);
  }

  fn flag(&self, verb: &str) -> Option<bool> {
    self.execute(verb).map(|raw| parse_flag(&raw))
  }

  fn int(&self, verb: &str) -> Option<i64> {
    self.execute(verb).and_then(|raw| parse_int(&raw).ok())
  }

  // ==========================================================================
  // Composite commands
  // ==========================================================================

  /// Turn repeat on or off. Does nothing if the current state is unknown.
  pub fn set_repeating(&self, repeating: bool) {
    self.set_toggled("repeating", self.is_repeating(), repeating);
  }

  /// Turn shuffle on or off. Does nothing if the current state is unknown.
  pub fn set_shuffling(&self, shuffling: bool) {
    self.set_toggled("shuffling", self.is_shuffling(), shuffling);
  }

  // Spotify only exposes a toggle, so it must only be sent when the read state
  // differs from the desired one.
  fn set_toggled(&self, property: &str, current: Option<bool>, desired: bool) {
    match current {
      Some(current) if current != desired => {
        self.command(Statement::toggle(&self.application, property));
      }
      Some(_) => {}
      None => log::debug!("{} state unknown, not toggling", property),
    }
  }

  // ==========================================================================
  // Application info
  // ==========================================================================

  /// Is repeating on or off?
  pub fn is_repeating(&self) -> Option<bool> {
    self.flag("repeating")
  }

  /// Is shuffling on or off?
  pub fn is_shuffling(&self) -> Option<bool> {
    self.flag("shuffling")
  }

  /// Output volume (0-100).
  pub fn volume(&self) -> Option<i64> {
    self.int("sound volume")
  }

  /// Position within the current track in seconds.
  ///
  /// Malformed output reads as 0.0 rather than `None`.
  pub fn player_position(&self) -> Option<f64> {
    self.execute("player position").map(|raw| parse_float_lenient(&raw))
  }

  /// Is Spotify stopped, paused, or playing?
  pub fn player_state(&self) -> Option<PlayerState> {
    self.execute("player state").and_then(|raw| raw.parse().ok())
  }

  pub fn version(&self) -> Option<String> {
    self.execute("version")
  }

  pub fn is_frontmost(&self) -> Option<bool> {
    self.flag("frontmost")
  }

  // ==========================================================================
  // Track info
  // ==========================================================================

  /// Query an attribute of the current track, e.g. `"name"`.
  pub fn query_current_track(&self, field: &str) -> Option<String> {
    self.send(Statement::track_field(&self.application, field))
  }

  fn track_int(&self, field: &str) -> Option<i64> {
    self.query_current_track(field).and_then(|raw| parse_int(&raw).ok())
  }

  /// Spotify URL of the track.
  pub fn current_track_url(&self) -> Option<String> {
    self.query_current_track("spotify url")
  }

  /// ID of the track. Spotify reports the same value as the URL.
  pub fn current_track_id(&self) -> Option<String> {
    self.query_current_track("id")
  }

  pub fn current_track_name(&self) -> Option<String> {
    self.query_current_track("name")
  }

  pub fn current_track_artist(&self) -> Option<String> {
    self.query_current_track("artist")
  }

  pub fn current_track_album(&self) -> Option<String> {
    self.query_current_track("album")
  }

  pub fn current_track_album_artist(&self) -> Option<String> {
    self.query_current_track("album artist")
  }

  /// URL of the album artwork image.
  pub fn current_track_artwork_url(&self) -> Option<String> {
    self.query_current_track("artwork url")
  }

  pub fn current_track_number(&self) -> Option<i64> {
    self.track_int("track number")
  }

  pub fn current_track_disc_number(&self) -> Option<i64> {
    self.track_int("disc number")
  }

  /// Length of the track in seconds.
  pub fn current_track_duration(&self) -> Option<i64> {
    self.track_int("duration")
  }

  /// Number of times the current user has played the track.
  pub fn current_track_play_count(&self) -> Option<i64> {
    self.track_int("played count")
  }

  /// Popularity, 0-100.
  pub fn current_track_popularity(&self) -> Option<i64> {
    self.track_int("popularity")
  }

  pub fn current_track_is_starred(&self) -> Option<bool> {
    self.query_current_track("starred").map(|raw| parse_flag(&raw))
  }

  /// Query every track attribute, one round trip each.
  pub fn current_track(&self) -> TrackInfo {
    TrackInfo {
      url: self.current_track_url(),
      id: self.current_track_id(),
      name: self.current_track_name(),
      artist: self.current_track_artist(),
      album: self.current_track_album(),
      album_artist: self.current_track_album_artist(),
      artwork_url: self.current_track_artwork_url(),
      track_number: self.current_track_number(),
      disc_number: self.current_track_disc_number(),
      duration: self.current_track_duration(),
      play_count: self.current_track_play_count(),
      popularity: self.current_track_popularity(),
      starred: self.current_track_is_starred(),
    }
  }

  // ==========================================================================
  // Playback commands
  // ==========================================================================

  pub fn pause(&self) {
    self.command(Statement::new(&self.application, "pause"));
  }

  /// Resume playback.
  pub fn play(&self) {
    self.command(Statement::new(&self.application, "play"));
  }

  /// Toggle between playing and paused.
  pub fn play_pause(&self) {
    self.command(Statement::new(&self.application, "playpause"));
  }

  /// Play the given Spotify URI or URL.
  pub fn play_track(&self, url: &str) {
    log::info!("Playing track: {}", url);
    self.command(Statement::play_track(&self.application, url));
  }

  pub fn next_track(&self) {
    self.command(Statement::new(&self.application, "next track"));
  }

  pub fn previous_track(&self) {
    self.command(Statement::new(&self.application, "previous track"));
  }

  /// Set output volume. Values outside 0-100 are clamped.
  pub fn set_volume(&self, volume: i64) {
    self.command(Statement::set_volume(&self.application, volume));
  }

  /// Seek to an absolute position in seconds.
  pub fn set_player_position(&self, seconds: f64) {
    self.command(Statement::set_player_position(&self.application, seconds));
  }

  // ==========================================================================
  // Standard app commands
  // ==========================================================================

  pub fn quit(&self) {
    log::info!("Quitting {}", self.application);
    self.command(Statement::new(&self.application, "quit"));
  }
}
