//! Statement runners.

use std::path::{Path, PathBuf};

use super::error::ScriptError;
use super::process::{find_osascript, run_statement};

/// Executes one complete statement and returns its trimmed output.
pub trait ScriptRunner {
  fn run(&self, statement: &str) -> Result<String, ScriptError>;

  /// Run a statement, collapsing every failure and blank output to `None`.
  fn execute(&self, statement: &str) -> Option<String> {
    let result = self.run(statement).and_then(|output| {
      let trimmed = output.trim();
      if trimmed.is_empty() {
        Err(ScriptError::EmptyOutput)
      } else {
        Ok(trimmed.to_string())
      }
    });

    match result {
      Ok(output) => Some(output),
      Err(e) => {
        log::debug!("{:?} produced no value: {}", statement, e);
        None
      }
    }
  }
}

/// Runs statements through the osascript binary.
#[derive(Debug, Clone)]
pub struct Osascript {
  interpreter: PathBuf,
}

impl Osascript {
  /// Use the interpreter at `interpreter`.
  pub fn new(interpreter: impl Into<PathBuf>) -> Self {
    Self {
      interpreter: interpreter.into(),
    }
  }

  /// Locate osascript on this machine.
  pub fn detect() -> Self {
    Self::new(find_osascript())
  }

  pub fn interpreter(&self) -> &Path {
    &self.interpreter
  }
}

impl Default for Osascript {
  fn default() -> Self {
    Self::detect()
  }
}

impl ScriptRunner for Osascript {
  fn run(&self, statement: &str) -> Result<String, ScriptError> {
    run_statement(&self.interpreter, statement)
  }
}
