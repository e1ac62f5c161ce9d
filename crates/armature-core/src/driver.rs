use crate::{stmt::Value, Error, Result};

/// The storage adapter selected for the active database driver.
///
/// Implemented by the SQL adapter layer; this core only consumes it. All
/// calls block until the storage round-trip completes — cancellation and
/// timeouts belong to the adapter.
pub trait Adapter: std::fmt::Debug {
    /// Returns the next value of the database sequence with the given
    /// storage name.
    fn next_sequence_value(&self, json: &str) -> Result<i64>;
}

/// A cursor over one relational-row query result.
///
/// Implemented by the storage layer. SQL NULL must scan to [`Value::Null`]
/// without raising.
pub trait Row {
    /// The column names of the result, in positional order.
    fn columns(&self) -> Result<Vec<String>>;

    /// Scans the row's values into `dest`, one slot per column.
    fn scan(&mut self, dest: &mut [Value]) -> Result<()>;

    /// The deferred cursor error, if any was encountered while iterating.
    fn err(&self) -> Option<Error>;
}
