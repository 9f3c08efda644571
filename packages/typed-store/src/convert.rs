//! Conversions between stored strings and integer/boolean values.

use statekeep_core_store::{Error, ValueKind};

/// Parse a stored or incoming string as an integer.
///
/// Surrounding whitespace is ignored. `target` names what is being read or
/// written and ends up in the `Validation` error.
pub fn parse_int(target: &str, value: &str) -> Result<i64, Error> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| validation(target, value, ValueKind::Integer))
}

/// Parse a string as a boolean: `true` or `false`, any case, surrounding
/// whitespace ignored.
pub fn parse_bool(target: &str, value: &str) -> Result<bool, Error> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(validation(target, value, ValueKind::Boolean))
    }
}

/// The stored form of a boolean.
pub fn format_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Normalize an incoming integer string to its stored form, logging a
/// warning when it is rejected.
pub(crate) fn normalize_int(target: &str, value: &str) -> Result<String, Error> {
    parse_int(target, value)
        .map(|parsed| parsed.to_string())
        .inspect_err(warn_rejected)
}

/// Normalize an incoming boolean string to its stored form, logging a
/// warning when it is rejected.
pub(crate) fn normalize_bool(target: &str, value: &str) -> Result<&'static str, Error> {
    parse_bool(target, value)
        .map(format_bool)
        .inspect_err(warn_rejected)
}

fn warn_rejected(error: &Error) {
    log::warn!("Unable to save data: {}", error);
}

fn validation(target: &str, value: &str, expected: ValueKind) -> Error {
    Error::Validation {
        target: target.to_string(),
        value: value.to_string(),
        expected,
    }
}
