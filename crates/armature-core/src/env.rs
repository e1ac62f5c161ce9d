use crate::{
    models::FieldMap,
    stmt::{Condition, RecordRef, Value},
    Result,
};

/// An argument passed through the method-dispatch layer.
#[derive(Debug, Clone)]
pub enum CallArg {
    Map(FieldMap),
    Cond(Condition),
    Value(Value),
}

/// The record-set and method-dispatch layer.
///
/// Implemented outside this core; [`crate::models::Model::create`] and
/// [`crate::models::Model::search`] are thin facades over `call`.
pub trait Environment {
    /// Dispatches `method` on the named model's record pool.
    fn call(&self, model: &str, method: &str, args: Vec<CallArg>) -> Result<RecordRef>;
}
