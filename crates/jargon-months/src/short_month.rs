//! Conversions from a three-letter month abbreviation (`"Jan"` … `"Dec"`).
//!
//! Every function runs the input through
//! [`validate_abbreviation`](crate::validate::validate_abbreviation) first.

use jargon_core::errors::Result;

use crate::lookup::{lookup, Table};
use crate::validate::validate_abbreviation;

static MONTH_NUMBERS: Table<&str, &str> = [
    ("Jan", "01"),
    ("Feb", "02"),
    ("Mar", "03"),
    ("Apr", "04"),
    ("May", "05"),
    ("Jun", "06"),
    ("Jul", "07"),
    ("Aug", "08"),
    ("Sep", "09"),
    ("Oct", "10"),
    ("Nov", "11"),
    ("Dec", "12"),
];

static MONTH_NAMES: Table<&str, &str> = [
    ("Jan", "January"),
    ("Feb", "February"),
    ("Mar", "March"),
    ("Apr", "April"),
    ("May", "May"),
    ("Jun", "June"),
    ("Jul", "July"),
    ("Aug", "August"),
    ("Sep", "September"),
    ("Oct", "October"),
    ("Nov", "November"),
    ("Dec", "December"),
];

static MONTH_CHARS: Table<&str, char> = [
    ("Jan", 'F'),
    ("Feb", 'G'),
    ("Mar", 'H'),
    ("Apr", 'J'),
    ("May", 'K'),
    ("Jun", 'M'),
    ("Jul", 'N'),
    ("Aug", 'Q'),
    ("Sep", 'U'),
    ("Oct", 'V'),
    ("Nov", 'X'),
    ("Dec", 'Z'),
];

const TABLE: &str = "short month";

/// Two-digit month number for an abbreviation, e.g. `"Dec"` → `"12"`.
///
/// # Errors
/// `InvalidArgument` if the input is not three characters long, `NotFound`
/// if the normalized abbreviation is not in the table.
pub fn month_number_from_short_month(abbreviation: &str) -> Result<&'static str> {
    let key = validate_abbreviation(abbreviation)?;
    lookup(&MONTH_NUMBERS, TABLE, key.as_str())
}

/// Full month name for an abbreviation, e.g. `"Dec"` → `"December"`.
///
/// # Errors
/// As for [`month_number_from_short_month`].
pub fn month_from_short_month(abbreviation: &str) -> Result<&'static str> {
    let key = validate_abbreviation(abbreviation)?;
    lookup(&MONTH_NAMES, TABLE, key.as_str())
}

/// Futures month character for an abbreviation, e.g. `"Dec"` → `'Z'`.
///
/// # Errors
/// As for [`month_number_from_short_month`].
pub fn month_char_from_short_month(abbreviation: &str) -> Result<char> {
    let key = validate_abbreviation(abbreviation)?;
    lookup(&MONTH_CHARS, TABLE, key.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn december() {
        assert_eq!(month_number_from_short_month("Dec"), Ok("12"));
        assert_eq!(month_from_short_month("Dec"), Ok("December"));
        assert_eq!(month_char_from_short_month("Dec"), Ok('Z'));
    }

    #[test]
    fn lowercase_first_letter_is_fixed() {
        assert_eq!(month_char_from_short_month("may"), Ok('K'));
    }

    #[test]
    fn uppercase_tail_misses() {
        let err = month_from_short_month("DEC").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn wrong_length_is_invalid() {
        assert!(month_number_from_short_month("Sept").unwrap_err().is_invalid_argument());
        assert!(month_char_from_short_month("").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn unknown_abbreviation() {
        assert!(month_number_from_short_month("Foo").unwrap_err().is_not_found());
    }
}
