//! AppleScript statement construction.

/// A one-line statement addressed to a single application.
///
/// Renders as `tell application "<app>" to <verb>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
  application: String,
  verb: String,
}

impl Statement {
  /// Create a statement for `application` running `verb`.
  pub fn new(application: &str, verb: impl Into<String>) -> Self {
    Self {
      application: application.to_string(),
      verb: verb.into(),
    }
  }

  /// Query an attribute of the current track.
  pub fn track_field(application: &str, field: &str) -> Self {
    Self::new(application, format!("{} of current track", field))
  }

  /// Play a track by Spotify URI or URL.
  pub fn play_track(application: &str, url: &str) -> Self {
    Self::new(application, format!("play track {}", quote(url)))
  }

  /// Set the output volume, clamped to 0-100.
  pub fn set_volume(application: &str, volume: i64) -> Self {
    Self::new(application, format!("set sound volume to {}", volume.clamp(0, 100)))
  }

  /// Seek to a position in seconds. Negative positions seek to the start.
  pub fn set_player_position(application: &str, seconds: f64) -> Self {
    Self::new(application, format!("set player position to {}", seconds.max(0.0)))
  }

  /// Flip a boolean player property, e.g. `repeating`.
  pub fn toggle(application: &str, property: &str) -> Self {
    Self::new(application, format!("set {0} to not {0}", property))
  }

  /// The verb, without the application prefix.
  pub fn verb(&self) -> &str {
    &self.verb
  }

  /// Full statement text passed to the interpreter.
  pub fn render(&self) -> String {
    self.to_string()
  }
}

impl std::fmt::Display for Statement {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} {}", prefix(&self.application), self.verb)
  }
}

/// Application targeting prefix, e.g. `tell application "Spotify" to`.
///
/// The name is quoted like any other literal, so it cannot extend the verb.
pub fn prefix(application: &str) -> String {
  format!("tell application {} to", quote(application))
}

/// Wrap `value` in an AppleScript string literal.
pub fn quote(value: &str) -> String {
  let mut out = String::with_capacity(value.len() + 2);
  out.push('"');
  for c in value.chars() {
    if c == '"' || c == '\\' {
      out.push('\\');
    }
    out.push(c);
  }
  out.push('"');
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_render_prefixes_verb() {
    let stmt = Statement::new("Spotify", "pause");
    assert_eq!(stmt.render(), "tell application \"Spotify\" to pause");
    assert_eq!(stmt.to_string(), stmt.render());
  }

  #[test]
  fn test_prefix_quotes_application_name() {
    assert_eq!(prefix("Spotify"), "tell application \"Spotify\" to");

    let stmt = Statement::new("Spotify\" to quit --", "pause");
    assert_eq!(stmt.verb(), "pause");
    assert_eq!(
      stmt.render(),
      r#"tell application "Spotify\" to quit --" to pause"#
    );
  }

  #[test]
  fn test_track_field() {
    let stmt = Statement::track_field("Spotify", "album artist");
    assert_eq!(stmt.verb(), "album artist of current track");
  }

  #[test]
  fn test_play_track_plain_uri() {
    let stmt = Statement::play_track("Spotify", "spotify:track:4uLU6hMCjMI75M1A2tKUQC");
    assert_eq!(stmt.verb(), "play track \"spotify:track:4uLU6hMCjMI75M1A2tKUQC\"");
  }

  #[test]
  fn test_play_track_escapes_quotes_and_backslashes() {
    let stmt = Statement::play_track("Spotify", r#"x" to quit --\"#);
    assert_eq!(stmt.verb(), r#"play track "x\" to quit --\\""#);
  }

  #[test]
  fn test_set_volume_clamps() {
    assert_eq!(Statement::set_volume("Spotify", 150), Statement::set_volume("Spotify", 100));
    assert_eq!(Statement::set_volume("Spotify", -5), Statement::set_volume("Spotify", 0));
    assert_eq!(Statement::set_volume("Spotify", 42).verb(), "set sound volume to 42");
  }

  #[test]
  fn test_set_player_position() {
    assert_eq!(
      Statement::set_player_position("Spotify", 12.5).verb(),
      "set player position to 12.5"
    );
    assert_eq!(
      Statement::set_player_position("Spotify", -3.0).verb(),
      "set player position to 0"
    );
  }

  #[test]
  fn test_toggle() {
    assert_eq!(
      Statement::toggle("Spotify", "shuffling").verb(),
      "set shuffling to not shuffling"
    );
  }
}
