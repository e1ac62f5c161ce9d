use std::fmt;

/// A handle on a set of records of a model.
///
/// This is the shape under which the record-set layer hands business-object
/// references to this core: the model name plus the ordered list of record
/// identifiers. Conversion encodes it per relation cardinality (scalar
/// identifier for to-one fields, identifier list for to-many fields).
#[derive(Clone, PartialEq, Eq)]
pub struct RecordRef {
    model: String,
    ids: Vec<i64>,
}

impl RecordRef {
    pub fn new(model: impl Into<String>, ids: Vec<i64>) -> Self {
        Self {
            model: model.into(),
            ids,
        }
    }

    /// The model the referenced records belong to.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// The referenced record identifiers, in order.
    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    pub fn first_id(&self) -> Option<i64> {
        self.ids.first().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl fmt::Debug for RecordRef {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}{:?}", self.model, self.ids)
    }
}
