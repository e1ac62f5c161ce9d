use super::{BinaryOp, Value};
use crate::models::EXPR_SEP;

/// A single comparison over a dotted field path.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub(crate) exprs: Vec<String>,
    pub(crate) op: BinaryOp,
    pub(crate) value: Value,
}

impl Predicate {
    /// The field path of the predicate, one segment per element.
    pub fn path(&self) -> &[String] {
        &self.exprs
    }

    pub fn op(&self) -> BinaryOp {
        self.op
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// A conjunction of predicates used to filter records of a model.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Condition {
    pub(crate) predicates: Vec<Predicate>,
}

impl Condition {
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Combines this condition with another; both sets of predicates must
    /// hold.
    pub fn and(mut self, other: Condition) -> Condition {
        self.predicates.extend(other.predicates);
        self
    }
}

/// A partially built condition: a field path waiting for its comparison.
#[derive(Debug, Clone)]
pub struct ConditionField {
    pub(crate) exprs: Vec<String>,
}

impl ConditionField {
    pub(crate) fn new(path: &str) -> Self {
        Self {
            exprs: path.split(EXPR_SEP).map(String::from).collect(),
        }
    }

    /// The path segments of this field, in order.
    pub fn exprs(&self) -> &[String] {
        &self.exprs
    }

    fn predicate(self, op: BinaryOp, value: Value) -> Condition {
        Condition {
            predicates: vec![Predicate {
                exprs: self.exprs,
                op,
                value,
            }],
        }
    }

    pub fn equals(self, value: impl Into<Value>) -> Condition {
        self.predicate(BinaryOp::Eq, value.into())
    }

    pub fn not_equals(self, value: impl Into<Value>) -> Condition {
        self.predicate(BinaryOp::Ne, value.into())
    }

    pub fn greater(self, value: impl Into<Value>) -> Condition {
        self.predicate(BinaryOp::Gt, value.into())
    }

    pub fn greater_or_equal(self, value: impl Into<Value>) -> Condition {
        self.predicate(BinaryOp::Ge, value.into())
    }

    pub fn lower(self, value: impl Into<Value>) -> Condition {
        self.predicate(BinaryOp::Lt, value.into())
    }

    pub fn lower_or_equal(self, value: impl Into<Value>) -> Condition {
        self.predicate(BinaryOp::Le, value.into())
    }

    pub fn like(self, value: impl Into<Value>) -> Condition {
        self.predicate(BinaryOp::Like, value.into())
    }

    pub fn in_list(self, values: impl IntoIterator<Item = impl Into<Value>>) -> Condition {
        let items = values.into_iter().map(Into::into).collect();
        self.predicate(BinaryOp::In, Value::List(items))
    }
}
