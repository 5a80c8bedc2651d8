//! `Converters` — every month conversion behind one value.
//!
//! The free functions in the sibling modules are the primary interface.
//! `Converters` bundles them with the month-name calendar used by
//! [`month_from_date`](Converters::month_from_date), so the calendar is
//! chosen once when the value is built instead of being passed to each call.

use jargon_core::errors::Result;

use crate::calendar::{English, MonthNames};
use crate::date::{self, MonthOfYear};
use crate::{month_char, month_name, month_number, short_month};

/// Month conversions bound to a month-name calendar.
///
/// ```
/// use chrono::NaiveDate;
/// use jargon_months::Converters;
///
/// let c = Converters::new();
/// assert_eq!(c.month_from_month_char('z').unwrap(), "December");
/// let d = NaiveDate::from_ymd_opt(2014, 12, 5).unwrap();
/// assert_eq!(c.month_from_date(d), "December");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converters<N = English> {
    names: N,
}

impl Converters<English> {
    /// Converters rendering month names in English.
    pub fn new() -> Self {
        Self { names: English }
    }
}

impl<N: MonthNames> Converters<N> {
    /// Converters rendering month names with `names`.
    pub fn with_month_names(names: N) -> Self {
        Self { names }
    }

    /// The calendar used by [`month_from_date`](Self::month_from_date).
    pub fn month_names(&self) -> &N {
        &self.names
    }

    // ── Month characters ─────────────────────────────────────────────────────

    /// See [`month_char::short_month_from_month_char`].
    pub fn short_month_from_month_char(&self, month_char: char) -> Result<&'static str> {
        month_char::short_month_from_month_char(month_char)
    }

    /// See [`month_char::month_from_month_char`].
    pub fn month_from_month_char(&self, month_char: char) -> Result<&'static str> {
        month_char::month_from_month_char(month_char)
    }

    /// See [`month_char::month_number_from_month_char`].
    pub fn month_number_from_month_char(&self, month_char: char) -> Result<&'static str> {
        month_char::month_number_from_month_char(month_char)
    }

    // ── Abbreviations ────────────────────────────────────────────────────────

    /// See [`short_month::month_number_from_short_month`].
    pub fn month_number_from_short_month(&self, abbreviation: &str) -> Result<&'static str> {
        short_month::month_number_from_short_month(abbreviation)
    }

    /// See [`short_month::month_from_short_month`].
    pub fn month_from_short_month(&self, abbreviation: &str) -> Result<&'static str> {
        short_month::month_from_short_month(abbreviation)
    }

    /// See [`short_month::month_char_from_short_month`].
    pub fn month_char_from_short_month(&self, abbreviation: &str) -> Result<char> {
        short_month::month_char_from_short_month(abbreviation)
    }

    // ── Month names ──────────────────────────────────────────────────────────

    /// See [`month_name::month_char_from_month`].
    pub fn month_char_from_month(&self, month: &str) -> Result<char> {
        month_name::month_char_from_month(month)
    }

    /// See [`month_name::short_month_from_month`].
    pub fn short_month_from_month(&self, month: &str) -> Result<&'static str> {
        month_name::short_month_from_month(month)
    }

    /// See [`month_name::month_number_from_month`].
    pub fn month_number_from_month(&self, month: &str) -> Result<&'static str> {
        month_name::month_number_from_month(month)
    }

    // ── Month numbers ────────────────────────────────────────────────────────

    /// See [`month_number::month_from_month_number`].
    pub fn month_from_month_number(&self, number: &str) -> Result<&'static str> {
        month_number::month_from_month_number(number)
    }

    /// See [`month_number::month_char_from_month_number`].
    pub fn month_char_from_month_number(&self, number: &str) -> Result<char> {
        month_number::month_char_from_month_number(number)
    }

    /// See [`month_number::short_month_from_month_number`].
    pub fn short_month_from_month_number(&self, number: &str) -> Result<&'static str> {
        month_number::short_month_from_month_number(number)
    }

    // ── Dates ────────────────────────────────────────────────────────────────

    /// See [`date::month_char_from_date`].
    pub fn month_char_from_date(&self, d: impl MonthOfYear) -> char {
        date::month_char_from_date(d)
    }

    /// See [`date::month_number_from_date`].
    pub fn month_number_from_date(&self, d: impl MonthOfYear) -> String {
        date::month_number_from_date(d)
    }

    /// See [`date::short_month_from_date`].
    pub fn short_month_from_date(&self, d: impl MonthOfYear) -> &'static str {
        date::short_month_from_date(d)
    }

    /// Full name of the date's month, rendered by this value's calendar.
    pub fn month_from_date(&self, d: impl MonthOfYear) -> String {
        date::month_from_date(d, &self.names)
    }
}
