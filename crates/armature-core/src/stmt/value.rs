use super::{RecordRef, Type};
use crate::Result;
use chrono::{NaiveDate, NaiveDateTime};

/// A dynamically typed value crossing the storage boundary.
///
/// Rows come out of the storage layer as sequences of `Value`s; the
/// conversion step rewrites them into the representation declared by the
/// matching field descriptor.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 64-bit integer
    I64(i64),

    /// 64-bit floating point value
    F64(f64),

    /// String value
    String(String),

    /// Raw byte payload
    Bytes(Vec<u8>),

    /// Calendar date without a time component
    Date(NaiveDate),

    /// Date and time without a timezone
    DateTime(NaiveDateTime),

    /// A list of values of the same type
    List(Vec<Value>),

    /// A handle on a set of records of a related model
    Records(RecordRef),

    /// Null value. Doubles as the explicit "no value" marker for nullable
    /// to-one relation fields ("unrelated", as opposed to "related to
    /// record 0", which cannot exist).
    #[default]
    Null,
}

impl Value {
    /// Returns a `Value` representing null
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub const fn is_records(&self) -> bool {
        matches!(self, Self::Records(_))
    }

    pub fn list_from_vec(items: Vec<Self>) -> Self {
        Self::List(items)
    }

    pub fn to_bool(self) -> Result<bool> {
        match self {
            Self::Bool(v) => Ok(v),
            _ => Err(crate::Error::type_conversion(self, "bool")),
        }
    }

    pub fn to_i64(self) -> Result<i64> {
        match self {
            Self::I64(v) => Ok(v),
            _ => Err(crate::Error::type_conversion(self, "i64")),
        }
    }

    pub fn to_string(self) -> Result<String> {
        match self {
            Self::String(v) => Ok(v),
            _ => Err(crate::Error::type_conversion(self, "String")),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_records(&self) -> Option<&RecordRef> {
        match self {
            Self::Records(records) => Some(records),
            _ => None,
        }
    }

    /// Returns the runtime type descriptor this value is an instance of.
    pub fn infer_ty(&self) -> Type {
        match self {
            Self::Bool(_) => Type::Bool,
            Self::I64(_) => Type::I64,
            Self::F64(_) => Type::F64,
            Self::String(_) => Type::String,
            Self::Bytes(_) => Type::Bytes,
            Self::Date(_) => Type::Date,
            Self::DateTime(_) => Type::DateTime,
            Self::List(items) => match items.first() {
                Some(item) => Type::list(item.infer_ty()),
                None => Type::list(Type::Unknown),
            },
            Self::Records(_) => Type::Unknown,
            Self::Null => Type::Unknown,
        }
    }

    /// Returns true if the value is an instance of the given type.
    ///
    /// `Null` is an instance of nothing; null handling happens before any
    /// type check during conversion.
    pub fn is_a(&self, ty: &Type) -> bool {
        match self {
            Self::Bool(_) => ty.is_bool(),
            Self::I64(_) => matches!(ty, Type::I64),
            Self::F64(_) => matches!(ty, Type::F64),
            Self::String(_) => ty.is_string(),
            Self::Bytes(_) => matches!(ty, Type::Bytes),
            Self::Date(_) => matches!(ty, Type::Date),
            Self::DateTime(_) => matches!(ty, Type::DateTime),
            Self::List(items) => match ty {
                Type::List(item_ty) => match items.first() {
                    Some(item) => item.is_a(item_ty),
                    None => true,
                },
                _ => false,
            },
            Self::Records(_) => false,
            Self::Null => false,
        }
    }

    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl AsRef<Self> for Value {
    fn as_ref(&self) -> &Self {
        self
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<NaiveDate> for Value {
    fn from(src: NaiveDate) -> Self {
        Self::Date(src)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(src: NaiveDateTime) -> Self {
        Self::DateTime(src)
    }
}

impl From<RecordRef> for Value {
    fn from(src: RecordRef) -> Self {
        Self::Records(src)
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}
