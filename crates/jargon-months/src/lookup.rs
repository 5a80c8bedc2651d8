//! Fixed key/value tables and the lookup shared by every conversion.

use std::fmt::Display;

use jargon_core::errors::Result;
use jargon_core::not_found;
use tracing::debug;

/// A fixed-size key/value table.
pub(crate) type Table<K, V> = [(K, V); 12];

/// Find `key` in `table`, failing with `NotFound` on a miss.
pub(crate) fn lookup<K, V>(table: &Table<K, V>, name: &'static str, key: K) -> Result<V>
where
    K: PartialEq + Display,
    V: Copy,
{
    match table.iter().find(|(k, _)| *k == key) {
        Some((_, v)) => Ok(*v),
        None => {
            debug!(table = name, %key, "lookup miss");
            Err(not_found!(name, key))
        }
    }
}
