//! Month-name calendars used to render a date's month as text.
//!
//! Only one calendar ships: [`English`]. Anything else is supplied by the
//! caller through the [`MonthNames`] trait.

use std::borrow::Cow;

use crate::month::Month;

/// Renders full month names.
pub trait MonthNames {
    /// The display name of `month`.
    fn month_name(&self, month: Month) -> Cow<'_, str>;
}

/// English (en-US) month names, `"January"` … `"December"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct English;

impl MonthNames for English {
    fn month_name(&self, month: Month) -> Cow<'_, str> {
        Cow::Borrowed(month.long_name())
    }
}

impl<T: MonthNames + ?Sized> MonthNames for &T {
    fn month_name(&self, month: Month) -> Cow<'_, str> {
        (**self).month_name(month)
    }
}

impl<T: MonthNames + ?Sized> MonthNames for Box<T> {
    fn month_name(&self, month: Month) -> Cow<'_, str> {
        (**self).month_name(month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl MonthNames for Upper {
        fn month_name(&self, month: Month) -> Cow<'_, str> {
            Cow::Owned(month.long_name().to_uppercase())
        }
    }

    #[test]
    fn english_names() {
        let names: Vec<_> = Month::ALL.iter().map(|&m| English.month_name(m)).collect();
        assert_eq!(names[0], "January");
        assert_eq!(names[4], "May");
        assert_eq!(names[11], "December");
    }

    #[test]
    fn boxed_custom_calendar() {
        let boxed: Box<dyn MonthNames> = Box::new(Upper);
        assert_eq!(boxed.month_name(Month::July), "JULY");
    }
}
