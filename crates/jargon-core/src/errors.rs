//! Error types for jargon-rs.
//!
//! Every conversion in the workspace either succeeds or fails with one of the
//! two variants of [`Error`]: the input was malformed, or it was well-formed
//! but absent from the lookup table it was checked against.  The `ensure!`,
//! `fail!` and `not_found!` macros defined here are the usual way of building
//! them.

use thiserror::Error;

/// The top-level error type used throughout jargon-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input has the wrong shape (length, emptiness, character set).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A well-formed key that is not present in its lookup table.
    #[error("{key:?} not found in {table} table")]
    NotFound {
        /// Name of the table that was searched (e.g. `"exchange code"`).
        table: &'static str,
        /// The key as it was looked up, after normalization.
        key: String,
    },
}

impl Error {
    /// Return `true` for [`Error::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// Return `true` for [`Error::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

/// Shorthand `Result` type used throughout jargon-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use jargon_core::{ensure, errors::Error};
/// fn three_letters(s: &str) -> jargon_core::errors::Result<&str> {
///     ensure!(s.len() == 3, "{s} is not 3 letters long");
///     Ok(s)
/// }
/// assert!(three_letters("Jan").is_ok());
/// assert!(matches!(three_letters("January"), Err(Error::InvalidArgument(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::InvalidArgument(...))` immediately.
///
/// # Example
/// ```
/// use jargon_core::{fail, errors::Error};
/// fn always_err() -> jargon_core::errors::Result<()> {
///     fail!("month names cannot be empty");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::InvalidArgument(format!($($msg)*)))
    };
}

/// Build an `Error::NotFound` for a key missing from the named table.
///
/// Evaluates to the error value; it does not return.
///
/// # Example
/// ```
/// use jargon_core::{not_found, errors::Error};
/// let err: Error = not_found!("exchange code", "LME");
/// assert_eq!(err.to_string(), "\"LME\" not found in exchange code table");
/// ```
#[macro_export]
macro_rules! not_found {
    ($table:expr, $key:expr) => {
        $crate::errors::Error::NotFound {
            table: $table,
            key: ::std::string::ToString::to_string(&$key),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(n: usize) -> Result<usize> {
        ensure!(n <= 2, "length {n} exceeds 2");
        Ok(n)
    }

    #[test]
    fn ensure_passes_and_fails() {
        assert_eq!(checked(2), Ok(2));
        assert_eq!(
            checked(3),
            Err(Error::InvalidArgument("length 3 exceeds 2".into()))
        );
    }

    #[test]
    fn not_found_display() {
        let e = not_found!("month name", 'x');
        assert_eq!(e.to_string(), "\"x\" not found in month name table");
        assert!(e.is_not_found());
        assert!(!e.is_invalid_argument());
    }

    #[test]
    fn invalid_argument_display() {
        let e = Error::InvalidArgument("bad".into());
        assert_eq!(e.to_string(), "invalid argument: bad");
        assert!(e.is_invalid_argument());
    }
}
