use sella_catalog::matching_flights;
use sella_shared::dates::MONTH_CODES;
use sella_shared::Flight;

use crate::result::{AvailabilityPayload, CommandError, CommandPayload};

const FORMAT_HINT: &str = "Format: 1[DD][MON][FROM][TO][AIRLINE]. Example: 115JUNDACBKK BG";

/// Collapse internal whitespace; agents type `1 15JUN DAC BKK BG` and the
/// terminal treats it as `115JUNDACBKKBG`.
fn strip_spaces(cmd: &str) -> String {
    cmd.chars().filter(|c| !c.is_whitespace()).collect()
}

fn letters(bytes: &[u8], start: usize, len: usize) -> Option<String> {
    let slice = bytes.get(start..start + len)?;
    if slice.iter().all(|b| b.is_ascii_uppercase()) {
        Some(slice.iter().map(|&b| b as char).collect())
    } else {
        None
    }
}

fn leading_digit_run(bytes: &[u8]) -> usize {
    bytes
        .get(1..)
        .map(|rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
        .unwrap_or(0)
}

fn day_value(bytes: &[u8], count: usize) -> (u32, String) {
    let digits = &bytes[1..1 + count];
    let value = digits.iter().fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));
    let text = digits.iter().map(|&b| b as char).collect();
    (value, text)
}

/// Field-by-field validation in the emulated terminal's message order.
pub fn validate(cmd: &str) -> Result<(), CommandError> {
    let cleaned = strip_spaces(cmd);
    let bytes = cleaned.as_bytes();

    if !cleaned.starts_with('1') {
        return Err(CommandError::format(
            "Invalid format: Availability check must start with '1'",
            FORMAT_HINT,
        ));
    }

    // 11-12 chars without a trailing airline, 13-15 with one
    if bytes.len() < 11 || bytes.len() > 15 {
        return Err(CommandError::format(
            "Invalid format: Command length invalid",
            "Format: 1[DD][MON][FROM][TO] or 1[DD][MON][FROM][TO][AIRLINE]. Example: 115JUNDACBKK or 115JUNDACBKK BG",
        ));
    }

    let digit_count = leading_digit_run(bytes);
    if digit_count == 0 {
        return Err(CommandError::format(
            "Invalid format: Date must be 1-2 digits after '1'",
            FORMAT_HINT,
        ));
    }

    let (day, day_text) = day_value(bytes, digit_count.min(2));
    if day < 1 || day > 31 {
        return Err(CommandError::format(
            format!("Invalid format: Date must be between 01-31, got {}", day_text),
            FORMAT_HINT,
        ));
    }

    // A third digit means no 1-2 digit split can leave letters in the month
    // window, so it reads as a malformed month.
    let month = if digit_count > 2 {
        None
    } else {
        letters(bytes, 1 + digit_count, 3)
    };
    let month = match month {
        Some(month) => month,
        None => {
            return Err(CommandError::format(
                "Invalid format: Month must be 3 uppercase letters (JAN, FEB, MAR, etc.)",
                FORMAT_HINT,
            ))
        }
    };

    if !MONTH_CODES.contains(&month.as_str()) {
        return Err(CommandError::format(
            format!(
                "Invalid format: Invalid month '{}'. Use: JAN, FEB, MAR, APR, MAY, JUN, JUL, AUG, SEP, OCT, NOV, DEC",
                month
            ),
            FORMAT_HINT,
        ));
    }

    if letters(bytes, 1 + digit_count + 3, 3).is_none() {
        return Err(CommandError::format(
            "Invalid format: FROM city must be 3 uppercase letters",
            FORMAT_HINT,
        ));
    }

    if letters(bytes, 1 + digit_count + 6, 3).is_none() {
        return Err(CommandError::format(
            "Invalid format: TO city must be 3 uppercase letters",
            FORMAT_HINT,
        ));
    }

    Ok(())
}

/// Parse and filter. Assumes `validate` has passed, so the only unchecked
/// piece left is the optional trailing airline code.
pub fn execute(cmd: &str, flights: &[Flight]) -> Result<CommandPayload, CommandError> {
    validate(cmd)?;

    let cleaned = strip_spaces(cmd);
    let bytes = cleaned.as_bytes();
    let digit_count = leading_digit_run(bytes).min(2);

    let (day, _) = day_value(bytes, digit_count);
    let month = letters(bytes, 1 + digit_count, 3).unwrap_or_default();
    let origin = letters(bytes, 1 + digit_count + 3, 3).unwrap_or_default();
    let destination = letters(bytes, 1 + digit_count + 6, 3).unwrap_or_default();

    let trailing = &bytes[1 + digit_count + 9..];
    let airline = match trailing.len() {
        0 => String::new(),
        2 | 3 if trailing.iter().all(|b| b.is_ascii_uppercase()) => {
            trailing.iter().map(|&b| b as char).collect()
        }
        _ => {
            return Err(CommandError::format(
                "Invalid format: Airline must be 2-3 uppercase letters",
                FORMAT_HINT,
            ))
        }
    };

    let date = format!("{:02}{}", day, month);
    let filtered = matching_flights(
        flights,
        &date,
        &origin,
        &destination,
        if airline.is_empty() { None } else { Some(&airline) },
    );

    Ok(CommandPayload::Availability(AvailabilityPayload {
        flights: filtered,
        date,
        route: format!("{}/{}", origin, destination),
        origin,
        destination,
        airline,
    }))
}
