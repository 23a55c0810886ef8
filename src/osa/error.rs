//! Script execution error types.

use thiserror::Error;

/// Reasons a single interpreter round trip produced no usable value.
///
/// The controller collapses every variant to an absent result; the variants
/// exist so the cause can be logged.
#[derive(Debug, Error)]
pub enum ScriptError {
  #[error("Failed to launch interpreter: {0}")]
  Launch(#[from] std::io::Error),

  #[error("Failed to read interpreter output: {0}")]
  Read(std::io::Error),

  #[error("Interpreter produced no output")]
  EmptyOutput,

  #[error("Interpreter output is not ASCII")]
  NonAscii,

  #[error("Expected {expected}, got {raw:?}")]
  Parse { expected: &'static str, raw: String },
}

impl ScriptError {
  pub(crate) fn parse(expected: &'static str, raw: &str) -> Self {
    ScriptError::Parse {
      expected,
      raw: raw.to_string(),
    }
  }
}
