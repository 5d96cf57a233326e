//! Value-list notation.
//!
//! A value list is a comma-separated sequence of integers, optionally
//! wrapped in a single pair of square brackets, with arbitrary whitespace
//! around each token: `1,3,5`, `[1, 3, 5]`, ` [ 2 ,1 ] `.

use std::num::IntErrorKind;

/// Errors that can occur while parsing a value list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid array format: no values given")]
    Empty,

    #[error("Invalid array format: '{token}' at position {position} is not an integer")]
    InvalidNumber { position: usize, token: String },
}

/// Parses a value list into integers.
///
/// Brackets are stripped only when both are present. Empty tokens, such as
/// the gap in `1,,2` or a trailing comma, are rejected. Integers too large
/// for `i64` clamp to `i64::MAX` or `i64::MIN`, leaving the range check to
/// validation.
pub fn parse_values(s: &str) -> Result<Vec<i64>, ParseError> {
    let mut body = s.trim();
    if let Some(inner) = body.strip_prefix('[').and_then(|b| b.strip_suffix(']')) {
        body = inner;
    }
    if body.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    body.split(',')
        .enumerate()
        .map(|(position, raw)| {
            let token = raw.trim();
            token.parse::<i64>().or_else(|e| match e.kind() {
                IntErrorKind::PosOverflow => Ok(i64::MAX),
                IntErrorKind::NegOverflow => Ok(i64::MIN),
                _ => Err(ParseError::InvalidNumber {
                    position,
                    token: token.to_string(),
                }),
            })
        })
        .collect()
}
