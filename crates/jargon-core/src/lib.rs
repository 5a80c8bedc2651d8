//! # jargon-core
//!
//! Error definitions shared across the jargon-rs workspace.
//!
//! The month and exchange crates build on the [`Error`] enum and the
//! `ensure!` / `fail!` / `not_found!` macros exported here, so callers only
//! ever have to match on one error type.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` / `not_found!` macros.
pub mod errors;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
