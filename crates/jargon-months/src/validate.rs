//! Input normalization for abbreviations, month names and month numbers.
//!
//! The lookups downstream are keyed on exact strings, so these helpers only
//! fix up what callers most often get wrong (a lowercase first letter, a
//! missing leading zero) and reject inputs of the wrong length. They do
//! **not** lowercase the tail of a string: `"jAN"` normalizes to `"JAN"`,
//! which then misses the `"Jan"` key.

use jargon_core::fail;
use jargon_core::errors::Result;
use tracing::debug;

/// Uppercase the first character and leave the rest untouched.
///
/// An empty string is returned unchanged.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Check that `abbreviation` is exactly three characters long and
/// capitalize its first letter.
///
/// # Errors
/// `InvalidArgument` if the input is not three characters long.
///
/// # Example
/// ```
/// use jargon_months::validate::validate_abbreviation;
/// assert_eq!(validate_abbreviation("dec").unwrap(), "Dec");
/// assert!(validate_abbreviation("December").is_err());
/// ```
pub fn validate_abbreviation(abbreviation: &str) -> Result<String> {
    let len = abbreviation.chars().count();
    if len != 3 {
        debug!(input = abbreviation, len, "rejected month abbreviation");
        fail!(
            "the abbreviation {abbreviation:?} is {len} characters long and it needs to be 3 letters long"
        );
    }
    Ok(capitalize_first(abbreviation))
}

/// Check that `number` is one or two characters long and left-pad it with
/// `'0'` to two characters.
///
/// The result is uppercased, which only matters for non-digit input.
///
/// # Errors
/// `InvalidArgument` if the input is empty or longer than two characters.
pub fn validate_padded_month_number(number: &str) -> Result<String> {
    let len = number.chars().count();
    if !(1..=2).contains(&len) {
        debug!(input = number, len, "rejected month number");
        fail!(
            "the month number {number:?} is {len} characters long and it must be 1 or 2 characters long"
        );
    }
    let upper = number.to_uppercase();
    if len == 1 {
        Ok(format!("0{upper}"))
    } else {
        Ok(upper)
    }
}
