//! osascript detection and invocation.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::error::ScriptError;

/// Where macOS ships the interpreter.
pub const DEFAULT_OSASCRIPT: &str = "/usr/bin/osascript";

/// Find the osascript executable.
///
/// Falls back to the default path even when it does not exist, so a missing
/// interpreter surfaces as a launch failure on first use.
pub fn find_osascript() -> PathBuf {
  let default = PathBuf::from(DEFAULT_OSASCRIPT);
  if default.exists() {
    return default;
  }

  if let Ok(path) = which::which("osascript") {
    return path;
  }

  log::warn!("osascript not found, using {}", DEFAULT_OSASCRIPT);
  default
}

/// Run one statement through the interpreter and return its trimmed stdout.
///
/// Blocks until the child exits. Stdout is drained to end of stream before
/// waiting, so output larger than the pipe buffer cannot deadlock the child.
pub fn run_statement(interpreter: &Path, statement: &str) -> Result<String, ScriptError> {
  log::debug!("Running {:?} -e {:?}", interpreter, statement);

  let mut child = Command::new(interpreter)
    .arg("-e")
    .arg(statement)
    .stdin(Stdio::null())
    .stdout(Stdio::piped())
    .stderr(Stdio::null())
    .spawn()?;

  let mut stdout = Vec::new();
  let read_result = match child.stdout.take() {
    Some(mut pipe) => pipe.read_to_end(&mut stdout).map(|_| ()),
    None => Ok(()),
  };

  // Reap the child even when the read failed.
  match child.wait() {
    Ok(status) => log::debug!("Interpreter exited with: {}", status),
    Err(e) => log::debug!("wait() failed: {}", e),
  }
  read_result.map_err(ScriptError::Read)?;

  decode_output(&stdout)
}

/// Decode raw interpreter output as ASCII and trim it.
pub fn decode_output(bytes: &[u8]) -> Result<String, ScriptError> {
  if !bytes.is_ascii() {
    return Err(ScriptError::NonAscii);
  }

  // ASCII is always valid UTF-8.
  let text = String::from_utf8_lossy(bytes);
  let trimmed = text.trim();
  if trimmed.is_empty() {
    return Err(ScriptError::EmptyOutput);
  }

  Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_decode_trims_whitespace_and_newlines() {
    let out = decode_output(b"  playing\n\r\n").unwrap();
    assert_eq!(out, "playing");
  }

  #[test]
  fn test_decode_rejects_empty() {
    assert!(matches!(decode_output(b""), Err(ScriptError::EmptyOutput)));
    assert!(matches!(decode_output(b" \n\t"), Err(ScriptError::EmptyOutput)));
  }

  #[test]
  fn test_decode_rejects_non_ascii() {
    let bytes = "Beyonc\u{e9}\n".as_bytes();
    assert!(matches!(decode_output(bytes), Err(ScriptError::NonAscii)));
  }

  #[test]
  fn test_read_error_display() {
    let err = ScriptError::Read(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
    assert_eq!(err.to_string(), "Failed to read interpreter output: closed");
  }

  #[test]
  fn test_missing_interpreter_is_launch_error() {
    let result = run_statement(Path::new("/nonexistent/osascript"), "version");
    assert!(matches!(result, Err(ScriptError::Launch(_))));
  }

  /// Write an executable that prints its argument count and second argument.
  #[cfg(unix)]
  fn arg_reporter(name: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = std::env::temp_dir().join(format!("spotify-osa-{}-{}.sh", name, std::process::id()));
    std::fs::write(&path, "#!/bin/sh\nprintf '%s|%s\\n' \"$#\" \"$2\"\n").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
  }

  #[cfg(unix)]
  #[test]
  fn test_statement_passed_as_single_argument() {
    let script = arg_reporter("single-arg");
    let statement = "tell application \"Spotify\" to name of current track";
    let out = run_statement(&script, statement);
    let _ = std::fs::remove_file(&script);
    assert_eq!(out.unwrap(), format!("2|{}", statement));
  }

  #[cfg(unix)]
  #[test]
  fn test_silent_interpreter_is_empty_output() {
    // sh treats the statement as a script path and fails on stderr only.
    let result = run_statement(Path::new("/bin/sh"), "no-such-script-file");
    assert!(matches!(result, Err(ScriptError::EmptyOutput)));
  }
}
