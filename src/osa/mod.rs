//! osascript bridge - runs one-line AppleScript statements as child processes.
//!
//! Architecture:
//! - `process.rs` - interpreter detection, spawning and output decoding
//! - `runner.rs` - `ScriptRunner` trait and the osascript-backed runner
//! - `statement.rs` - `tell application ... to ...` statement construction
//! - `response.rs` - typed parsing of trimmed responses
//! - `error.rs` - failure causes for a single round trip

mod error;
mod process;
mod response;
mod runner;
mod statement;

pub use error::ScriptError;
pub use process::{decode_output, find_osascript, run_statement, DEFAULT_OSASCRIPT};
pub use response::{parse_flag, parse_float_lenient, parse_int};
pub use runner::{Osascript, ScriptRunner};
pub use statement::{prefix, quote, Statement};
