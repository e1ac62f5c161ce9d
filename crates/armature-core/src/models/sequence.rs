use crate::{driver::Adapter, Result};
use heck::ToSnakeCase;

/// The metadata of a database sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    name: String,
    json: String,
}

impl Sequence {
    pub(crate) fn new(name: &str) -> Self {
        // Suffixed so manually created sequences cannot collide with the
        // sequences backing table primary keys.
        let json = format!("{}_manseq", name.to_snake_case());
        Self {
            name: name.to_string(),
            json,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The storage name of the underlying database sequence.
    pub fn json(&self) -> &str {
        &self.json
    }

    /// Returns the next value of this sequence.
    ///
    /// Every call round-trips to storage through the given adapter; callers
    /// needing low-latency identifier generation must batch at a higher
    /// layer.
    pub fn next_value(&self, adapter: &dyn Adapter) -> Result<i64> {
        adapter.next_sequence_value(&self.json)
    }
}
