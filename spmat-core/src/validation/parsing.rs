//! Parsing utilities for the text matrix format
//!
//! This module provides pure parsing functions for single lines of the
//! `rows=`/`cols=` header and the `(row, col, value)` entry lines.

use crate::ParseError;
use core::str::FromStr;

/// Parse a dimension line of the form `key=<n>`
///
/// Whitespace around the key, the `=` and the number is ignored. Negative
/// or non-numeric values are rejected.
pub fn parse_dimension(line: &str, key: &'static str) -> Result<usize, ParseError> {
    let Some((name, value)) = line.split_once('=') else {
        return Err(ParseError::MissingKey(key));
    };

    if name.trim() != key {
        return Err(ParseError::MissingKey(key));
    }

    parse_usize(value.trim())
}

/// Parse an entry line of the form `(row, col, value)`
///
/// Indices are returned signed so that callers can report negative
/// positions as out of bounds rather than as syntax errors.
pub fn parse_triple<T: FromStr>(line: &str) -> Result<(i64, i64, T), ParseError> {
    let inner = line
        .trim()
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(ParseError::MissingParens)?;

    let mut fields = inner.split(',').map(str::trim);
    let (Some(row), Some(col), Some(value)) = (fields.next(), fields.next(), fields.next()) else {
        return Err(ParseError::WrongArity(inner.split(',').count()));
    };

    let extra = fields.count();
    if extra > 0 {
        return Err(ParseError::WrongArity(3 + extra));
    }

    let row = parse_i64(row)?;
    let col = parse_i64(col)?;
    let value = value.parse::<T>().map_err(|_| ParseError::InvalidNumber)?;

    Ok((row, col, value))
}

/// Parse a usize from a string with error handling
fn parse_usize(s: &str) -> Result<usize, ParseError> {
    if s.is_empty() {
        return Err(ParseError::InvalidNumber);
    }

    let mut result: usize = 0;

    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return Err(ParseError::InvalidNumber);
        }

        let digit = (byte - b'0') as usize;

        result = result
            .checked_mul(10)
            .and_then(|r| r.checked_add(digit))
            .ok_or(ParseError::InvalidNumber)?;
    }

    Ok(result)
}

/// Parse an optionally signed index
fn parse_i64(s: &str) -> Result<i64, ParseError> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let magnitude = parse_usize(digits)?;
    let magnitude = i64::try_from(magnitude).map_err(|_| ParseError::InvalidNumber)?;

    Ok(if negative { -magnitude } else { magnitude })
}
