mod condition;
pub use condition::{Condition, ConditionField, Predicate};

mod op_binary;
pub use op_binary::BinaryOp;

mod record_ref;
pub use record_ref::RecordRef;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;
