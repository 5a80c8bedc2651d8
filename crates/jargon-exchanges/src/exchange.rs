//! `Exchange` — canonical exchange identifiers and their aliases.
//!
//! Contract feeds name the same venue in several ways: legacy floors that
//! have since been merged (`CBOT`, `NYMEX`, `COMEX` into CME Group; `IPE`,
//! `NYBOT`, `WCE` into ICE) and short vendor codes (`CBT`, `NYM`, `CMX`).
//! All of them normalize to one of two canonical ids.

use std::str::FromStr;

use jargon_core::errors::{Error, Result};
use jargon_core::not_found;
use tracing::debug;

/// A canonical exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Exchange {
    /// CME Group (`"CME"`).
    Cme,
    /// Intercontinental Exchange (`"ICE"`).
    Ice,
}

static CME_ALIASES: [&str; 7] = ["CBOT", "CBT", "NYMEX", "NYM", "COMEX", "CMX", "CME"];
static ICE_ALIASES: [&str; 4] = ["IPE", "ICE", "NYBOT", "WCE"];

impl Exchange {
    /// Both canonical exchanges.
    pub fn all() -> [Self; 2] {
        [Exchange::Cme, Exchange::Ice]
    }

    /// The canonical identifier, `"CME"` or `"ICE"`.
    pub fn id(&self) -> &'static str {
        match self {
            Exchange::Cme => "CME",
            Exchange::Ice => "ICE",
        }
    }

    /// Every uppercase code that normalizes to this exchange, its own id
    /// included.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Exchange::Cme => &CME_ALIASES,
            Exchange::Ice => &ICE_ALIASES,
        }
    }

    /// Normalize an exchange code, ignoring case.
    ///
    /// Surrounding whitespace is not trimmed.
    ///
    /// # Errors
    /// `NotFound` if the code is not a known alias.
    pub fn from_code(code: &str) -> Result<Self> {
        let key = code.to_uppercase();
        Self::all()
            .into_iter()
            .find(|e| e.aliases().iter().any(|alias| *alias == key))
            .ok_or_else(|| {
                debug!(table = "exchange code", key = %key, "lookup miss");
                not_found!("exchange code", key)
            })
    }
}

impl std::fmt::Display for Exchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Exchange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Exchange::from_code(s)
    }
}

/// Canonical exchange id for an exchange code, e.g. `"cbot"` → `"CME"`.
///
/// # Errors
/// `NotFound` if the code is not a known alias.
///
/// # Example
/// ```
/// use jargon_exchanges::exchange_name_from_code;
/// assert_eq!(exchange_name_from_code("NYBOT").unwrap(), "ICE");
/// assert!(exchange_name_from_code("LME").unwrap_err().is_not_found());
/// ```
pub fn exchange_name_from_code(code: &str) -> Result<&'static str> {
    Exchange::from_code(code).map(|e| e.id())
}
