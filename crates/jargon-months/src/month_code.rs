//! `MonthCode` — a validated futures month character.

use jargon_core::errors::{Error, Result};
use jargon_core::fail;

use crate::month::Month;

/// One of the twelve futures month characters, stored uppercase.
///
/// ```
/// use jargon_months::{Month, MonthCode};
/// let z = MonthCode::new('z').unwrap();
/// assert_eq!(z.as_char(), 'Z');
/// assert_eq!(z.month(), Month::December);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthCode(Month);

impl MonthCode {
    /// Validate `c` (case-insensitively) as a futures month character.
    ///
    /// # Errors
    /// `InvalidArgument` if `c` is not one of `F G H J K M N Q U V X Z`.
    pub fn new(c: char) -> Result<Self> {
        match Month::from_code(c) {
            Some(m) => Ok(MonthCode(m)),
            None => fail!("{c:?} is not a futures month code"),
        }
    }

    /// The uppercase month character.
    pub fn as_char(&self) -> char {
        self.0.code()
    }

    /// The calendar month this code stands for.
    pub fn month(&self) -> Month {
        self.0
    }
}

impl From<Month> for MonthCode {
    fn from(m: Month) -> Self {
        MonthCode(m)
    }
}

impl From<MonthCode> for char {
    fn from(c: MonthCode) -> char {
        c.as_char()
    }
}

impl TryFrom<char> for MonthCode {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        MonthCode::new(c)
    }
}

impl std::fmt::Display for MonthCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
