//! Line input and numeric field parsing
//!
//! Prompting and parsing are separate; the parsers are pure functions over
//! the raw line. Out-of-range values clamp, non-numeric input is refused.

use isle_inventory::{PRIORITY_MAX, PRIORITY_MIN};
use std::io::{self, BufRead, Write};

/// Print a prompt and read one line from stdin
///
/// The line terminator is stripped. Returns `None` on end of input or a
/// read error.
pub fn prompt(text: &str) -> Option<String> {
    print!("{text}");
    io::stdout().flush().ok()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line).ok()?;
    if read == 0 {
        return None;
    }

    Some(line.trim_end_matches(['\n', '\r']).to_string())
}

/// Parse a quantity field
///
/// Negative values clamp to zero; non-numeric input is rejected.
pub fn parse_quantity(raw: &str) -> Option<u32> {
    let value: i64 = raw.trim().parse().ok()?;
    Some(value.max(0) as u32)
}

/// Parse a priority field
///
/// Out-of-range values clamp into the valid band; non-numeric input is
/// rejected.
pub fn parse_priority(raw: &str) -> Option<u8> {
    let value: i64 = raw.trim().parse().ok()?;
    Some(value.clamp(PRIORITY_MIN as i64, PRIORITY_MAX as i64) as u8)
}
