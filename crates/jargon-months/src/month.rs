//! `Month` — month-of-year enum.

use std::str::FromStr;

use jargon_core::errors::{Error, Result};
use jargon_core::not_found;

/// Month of the year.
///
/// Variants are numbered 1–12 (January = 1, December = 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
    /// January (1).
    January = 1,
    /// February (2).
    February = 2,
    /// March (3).
    March = 3,
    /// April (4).
    April = 4,
    /// May (5).
    May = 5,
    /// June (6).
    June = 6,
    /// July (7).
    July = 7,
    /// August (8).
    August = 8,
    /// September (9).
    September = 9,
    /// October (10).
    October = 10,
    /// November (11).
    November = 11,
    /// December (12).
    December = 12,
}

impl Month {
    /// All twelve months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Construct from a number (1 = January … 12 = December).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1..=12 => Some(Self::ALL[usize::from(n) - 1]),
            _ => None,
        }
    }

    /// Construct from a 0-based index (0 = January … 11 = December).
    ///
    /// The index is taken modulo 12, which lets date types that hand out
    /// `month0()` map straight onto a variant.
    pub(crate) fn from_index0(i: u32) -> Self {
        Self::ALL[(i % 12) as usize]
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Return the three-letter abbreviation (`"Jan"`, `"Feb"`, …).
    pub fn short_name(&self) -> &'static str {
        match self {
            Month::January => "Jan",
            Month::February => "Feb",
            Month::March => "Mar",
            Month::April => "Apr",
            Month::May => "May",
            Month::June => "Jun",
            Month::July => "Jul",
            Month::August => "Aug",
            Month::September => "Sep",
            Month::October => "Oct",
            Month::November => "Nov",
            Month::December => "Dec",
        }
    }

    /// Return the full English name (`"January"`, `"February"`, …).
    pub fn long_name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Return the single-letter futures month code (`'F'` … `'Z'`).
    pub fn code(&self) -> char {
        match self {
            Month::January => 'F',
            Month::February => 'G',
            Month::March => 'H',
            Month::April => 'J',
            Month::May => 'K',
            Month::June => 'M',
            Month::July => 'N',
            Month::August => 'Q',
            Month::September => 'U',
            Month::October => 'V',
            Month::November => 'X',
            Month::December => 'Z',
        }
    }

    /// Create from a futures month code, case-insensitively.
    pub fn from_code(code: char) -> Option<Self> {
        let code = code.to_ascii_uppercase();
        Self::ALL.into_iter().find(|m| m.code() == code)
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.long_name())
    }
}

impl From<Month> for u8 {
    fn from(m: Month) -> u8 {
        m as u8
    }
}

impl TryFrom<u8> for Month {
    type Error = Error;

    fn try_from(n: u8) -> Result<Self> {
        Month::from_number(n).ok_or_else(|| not_found!("month number", n))
    }
}

/// Parses a full name, a three-letter abbreviation or a month number,
/// ignoring case: `"march"`, `"MAR"`, `"3"` and `"03"` all give `March`.
impl FromStr for Month {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if let Ok(n) = s.parse::<u8>() {
            return Month::try_from(n);
        }
        Month::ALL
            .into_iter()
            .find(|m| {
                s.eq_ignore_ascii_case(m.long_name()) || s.eq_ignore_ascii_case(m.short_name())
            })
            .ok_or_else(|| not_found!("month", s))
    }
}
