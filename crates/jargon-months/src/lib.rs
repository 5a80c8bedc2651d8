//! # jargon-months
//!
//! Conversions between the ways futures contracts name a month: the
//! single-letter month code (`'Z'`), the abbreviation (`"Dec"`), the full
//! name (`"December"`), the two-digit number (`"12"`) and a calendar date.
//!
//! Each conversion is a free function in the module named after its input
//! (`month_char`, `short_month`, `month_name`, `month_number`, `date`); all
//! of them are re-exported at the crate root and bundled by [`Converters`].
//!
//! The short-month tables map May to `"Mar"`, so `'K'`, `"May"`, `"5"` and
//! any date in May all abbreviate to `"Mar"`. [`Month::short_name`] is the
//! correct calendar abbreviation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Month-name calendars (`MonthNames`, `English`).
pub mod calendar;

/// The `Converters` bundle.
pub mod converters;

/// Date conversions and the `MonthOfYear` trait.
pub mod date;

/// `Month` — month of the year.
pub mod month;

/// Conversions from a futures month character.
pub mod month_char;

/// `MonthCode` — a validated futures month character.
pub mod month_code;

/// Conversions from a full month name.
pub mod month_name;

/// Conversions from a month number.
pub mod month_number;

/// Conversions from a three-letter abbreviation.
pub mod short_month;

/// Abbreviation and month-number validators.
pub mod validate;

mod lookup;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{English, MonthNames};
pub use converters::Converters;
pub use date::{
    month_char_from_date, month_from_date, month_from_date_default, month_number_from_date,
    short_month_from_date, MonthOfYear,
};
pub use month::Month;
pub use month_char::{
    month_from_month_char, month_number_from_month_char, short_month_from_month_char,
};
pub use month_code::MonthCode;
pub use month_name::{month_char_from_month, month_number_from_month, short_month_from_month};
pub use month_number::{
    month_char_from_month_number, month_from_month_number, short_month_from_month_number,
};
pub use short_month::{
    month_char_from_short_month, month_from_short_month, month_number_from_short_month,
};
pub use validate::{capitalize_first, validate_abbreviation, validate_padded_month_number};
