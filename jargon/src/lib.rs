//! # jargon
//!
//! Lookups between the pieces of financial contract naming: futures month
//! codes, month abbreviations, month names, month numbers, dates and
//! exchange codes.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `jargon-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! jargon = "0.1"
//! ```
//!
//! ```rust
//! use jargon::prelude::*;
//!
//! // "CLZ4" on NYMEX: crude oil, December.
//! assert_eq!(exchange_name_from_code("nymex").unwrap(), "CME");
//! assert_eq!(month_from_month_char('Z').unwrap(), "December");
//! assert_eq!(month_char_from_month_number("12").unwrap(), 'Z');
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type shared by every conversion.
pub use jargon_core as core;

/// Month codes, names, numbers and date conversions.
pub use jargon_months as months;

/// Exchange code normalization.
pub use jargon_exchanges as exchanges;

pub use jargon_core::{Error, Result};

/// Everything needed for day-to-day conversions in one import.
pub mod prelude {
    pub use jargon_core::{Error, Result};
    pub use jargon_exchanges::{exchange_name_from_code, Exchange};
    pub use jargon_months::{
        month_char_from_date, month_char_from_month, month_char_from_month_number,
        month_char_from_short_month, month_from_date, month_from_date_default,
        month_from_month_char, month_from_month_number, month_from_short_month,
        month_number_from_date, month_number_from_month, month_number_from_month_char,
        month_number_from_short_month, short_month_from_date, short_month_from_month,
        short_month_from_month_char, short_month_from_month_number, validate_abbreviation,
        validate_padded_month_number, Converters, English, Month, MonthCode, MonthNames,
        MonthOfYear,
    };
}
