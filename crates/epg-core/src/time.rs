//! Instant arithmetic and `HH:MM:SS` duration text.
//!
//! Durations throughout the crate are whole seconds (`i64`). Instant
//! arithmetic saturates at chrono's representable range instead of
//! panicking, so end times can always be computed.

use chrono::{DateTime, TimeDelta, Timelike, Utc};

use crate::error::CoreError;

/// Returns `instant + secs`, clamped to the representable range.
pub fn add_seconds(instant: DateTime<Utc>, secs: i64) -> DateTime<Utc> {
    TimeDelta::try_seconds(secs)
        .and_then(|delta| instant.checked_add_signed(delta))
        .unwrap_or(if secs >= 0 {
            DateTime::<Utc>::MAX_UTC
        } else {
            DateTime::<Utc>::MIN_UTC
        })
}

/// Drops sub-second precision. Schedule times are second-precision.
pub fn truncate_to_seconds(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.with_nanosecond(0).unwrap_or(instant)
}

/// Formats a duration in seconds as `HH:MM:SS`.
///
/// Hours are not wrapped at 24 and negative durations keep their sign:
/// `90061` is `"25:01:01"`, `-90` is `"-00:01:30"`.
pub fn format_duration(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let total = secs.unsigned_abs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{sign}{hours:02}:{minutes:02}:{seconds:02}")
}

/// Parses `HH:MM:SS`, `MM:SS` or `SS` into seconds.
///
/// Minutes and seconds must be below 60 when a larger unit is present.
pub fn parse_duration(input: &str) -> Result<i64, CoreError> {
    let invalid = || CoreError::InvalidDuration {
        input: input.to_string(),
    };

    let trimmed = input.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let parts: Vec<i64> = body
        .split(':')
        .map(|part| {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse::<i64>().map_err(|_| invalid())
        })
        .collect::<Result<_, _>>()?;

    let total = match parts.as_slice() {
        [s] => *s,
        [m, s] if *s < 60 => m
            .checked_mul(60)
            .and_then(|m| m.checked_add(*s))
            .ok_or_else(invalid)?,
        [h, m, s] if *m < 60 && *s < 60 => h
            .checked_mul(3600)
            .and_then(|h| h.checked_add(m * 60 + s))
            .ok_or_else(invalid)?,
        _ => return Err(invalid()),
    };

    Ok(if negative { -total } else { total })
}
