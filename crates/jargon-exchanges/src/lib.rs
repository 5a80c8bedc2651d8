//! # jargon-exchanges
//!
//! Normalization of exchange codes to a canonical exchange id.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `Exchange` and the alias table.
pub mod exchange;

pub use exchange::{exchange_name_from_code, Exchange};
