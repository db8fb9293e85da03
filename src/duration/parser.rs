//! Duration text parsing
//!
//! Two grammars are accepted, tried in order:
//!
//! - colon form: `MM:SS` or `H:MM:SS`, trailing fields limited to 0-59
//! - unit form: `<integer><unit>` tokens such as `1h30m` or `1h, 5m 20s`,
//!   where the unit is one of `h`, `m`, `s` (any case) and defaults to seconds
//!
//! Unit tokens may come in any order and are summed.

use thiserror::Error;

/// Reasons a duration string is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("duration is empty")]
    Empty,

    #[error("duration must be greater than zero")]
    Zero,

    #[error("expected a number at '{0}'")]
    MissingDigits(String),

    #[error("unknown unit '{0}', expected h, m or s")]
    UnknownUnit(char),

    #[error("{field} field {value} is out of range 0-59")]
    FieldOutOfRange { field: &'static str, value: u64 },

    #[error("expected MM:SS or H:MM:SS")]
    MalformedColon,

    #[error("duration is too large")]
    Overflow,
}

/// Parse a duration string into a strictly positive number of seconds
pub fn parse_duration(input: &str) -> Result<u64, DurationError> {
    let input = input.trim_start();
    if input.is_empty() {
        return Err(DurationError::Empty);
    }

    let total = match parse_colon_form(input)? {
        Some(total) => total,
        None => parse_unit_form(input)?,
    };

    if total == 0 {
        return Err(DurationError::Zero);
    }
    Ok(total)
}

/// Returns `Ok(None)` when the input is not written in colon form at all.
/// A `:` can never appear in unit form, so a broken colon form is final.
fn parse_colon_form(input: &str) -> Result<Option<u64>, DurationError> {
    if !input.contains(':') {
        return Ok(None);
    }

    let fields = input
        .trim_end()
        .split(':')
        .map(parse_colon_field)
        .collect::<Result<Vec<_>, _>>()?;

    let total = match fields.as_slice() {
        [hours, minutes, seconds] => {
            check_sexagesimal("minutes", *minutes)?;
            check_sexagesimal("seconds", *seconds)?;
            hours
                .checked_mul(3600)
                .and_then(|h| h.checked_add(minutes * 60 + seconds))
        }
        [minutes, seconds] => {
            check_sexagesimal("seconds", *seconds)?;
            minutes
                .checked_mul(60)
                .and_then(|m| m.checked_add(*seconds))
        }
        _ => return Err(DurationError::MalformedColon),
    };

    total.map(Some).ok_or(DurationError::Overflow)
}

fn parse_colon_field(field: &str) -> Result<u64, DurationError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DurationError::MalformedColon);
    }
    field.parse().map_err(|_| DurationError::Overflow)
}

fn check_sexagesimal(field: &'static str, value: u64) -> Result<(), DurationError> {
    if value > 59 {
        return Err(DurationError::FieldOutOfRange { field, value });
    }
    Ok(())
}

fn parse_unit_form(input: &str) -> Result<u64, DurationError> {
    let mut chars = input.char_indices().peekable();
    let mut total: u64 = 0;

    loop {
        while chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
        let Some(&(start, _)) = chars.peek() else {
            break;
        };

        let mut value: u64 = 0;
        let mut have_digit = false;
        while let Some(digit) = chars.peek().and_then(|(_, c)| c.to_digit(10)) {
            chars.next();
            have_digit = true;
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(digit)))
                .ok_or(DurationError::Overflow)?;
        }
        if !have_digit {
            return Err(DurationError::MissingDigits(input[start..].to_string()));
        }

        let unit = chars
            .next_if(|(_, c)| c.is_ascii_alphabetic())
            .map(|(_, c)| c.to_ascii_lowercase())
            .unwrap_or('s');
        let scale = match unit {
            'h' => 3600,
            'm' => 60,
            's' => 1,
            other => return Err(DurationError::UnknownUnit(other)),
        };

        total = value
            .checked_mul(scale)
            .and_then(|v| total.checked_add(v))
            .ok_or(DurationError::Overflow)?;

        while chars
            .next_if(|(_, c)| c.is_whitespace() || *c == ',')
            .is_some()
        {}
    }

    Ok(total)
}
