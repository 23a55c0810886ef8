//! Parsing of trimmed interpreter responses into typed values.

use super::error::ScriptError;

/// Parse a base-10 integer response.
pub fn parse_int(raw: &str) -> Result<i64, ScriptError> {
  raw.parse::<i64>().map_err(|_| ScriptError::parse("integer", raw))
}

/// AppleScript prints booleans as `true`/`false`; anything not containing
/// `true` reads as false.
pub fn parse_flag(raw: &str) -> bool {
  raw.contains("true")
}

/// Parse the longest leading decimal number in `raw`, or 0.0 if there is none.
///
/// Always uses `.` as the decimal separator regardless of locale.
pub fn parse_float_lenient(raw: &str) -> f64 {
  let s = raw.trim_start();
  let bytes = s.as_bytes();
  let mut end = 0;

  if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
    end += 1;
  }
  let int_start = end;
  while end < bytes.len() && bytes[end].is_ascii_digit() {
    end += 1;
  }
  let mut digits = end - int_start;

  if end < bytes.len() && bytes[end] == b'.' {
    let frac_start = end + 1;
    let mut frac_end = frac_start;
    while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
      frac_end += 1;
    }
    digits += frac_end - frac_start;
    end = frac_end;
  }

  if digits == 0 {
    return 0.0;
  }

  // Exponent only counts when followed by at least one digit.
  if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
    let mut exp_end = end + 1;
    if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
      exp_end += 1;
    }
    let exp_digits_start = exp_end;
    while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
      exp_end += 1;
    }
    if exp_end > exp_digits_start {
      end = exp_end;
    }
  }

  s[..end].parse::<f64>().unwrap_or(0.0)
}
