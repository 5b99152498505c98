//! Turning a line of user input into a sample.

use std::str;

use log::trace;

use crate::error::{Result, StatsError};

/// Decodes one raw input line, dropping the trailing `\n` or `\r\n`.
pub fn decode_line(bytes: &[u8]) -> Result<&str> {
    let line = str::from_utf8(bytes)?;
    Ok(line.trim_end_matches(['\r', '\n']))
}

/// Returns true if `line` is the quit sentinel, ignoring surrounding whitespace
/// and the trailing newline.
pub fn is_quit(line: &str, sentinel: &str) -> bool {
    line.trim() == sentinel
}

/// Parses a comma and/or whitespace separated list of whole numbers.
///
/// Each token is read as a complete decimal number, so `"12,3"` gives
/// `[12, 3]`. Empty tokens are skipped and a blank line is an empty sample.
/// Negative numbers are rejected with [StatsError::NegativeValue].
pub fn parse_sample(line: &str) -> Result<Vec<i64>> {
    let sample = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_value)
        .collect::<Result<Vec<_>>>()?;

    trace!("parsed {} values from {:?}", sample.len(), line);
    Ok(sample)
}

fn parse_value(token: &str) -> Result<i64> {
    if let Some(rest) = token.strip_prefix('-') {
        if is_digits(rest) {
            return Err(StatsError::NegativeValue(token.to_string()));
        }
    }

    let digits = token.strip_prefix('+').unwrap_or(token);
    if !is_digits(digits) {
        return Err(StatsError::InvalidToken(token.to_string()));
    }

    digits
        .parse::<i64>()
        .map_err(|_| StatsError::ValueOutOfRange(token.to_string()))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
