use super::Value;
use chrono::DateTime;

/// A runtime type descriptor for the in-memory representation of a field.
///
/// The conversion step dispatches on this tag rather than on live type
/// introspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 64-bit integer
    I64,

    /// 64-bit floating point value
    F64,

    /// String type
    String,

    /// Raw byte payload
    Bytes,

    /// Calendar date without a time component
    Date,

    /// Date and time without a timezone
    DateTime,

    /// A list of a single type
    List(Box<Type>),

    /// A type that could not be inferred (e.g. a null or an empty list)
    Unknown,
}

impl Type {
    pub fn list(ty: impl Into<Self>) -> Self {
        Self::List(Box::new(ty.into()))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// The value substituted for SQL NULL on fields that do not keep an
    /// explicit "no value" marker.
    pub fn zero_value(&self) -> Value {
        match self {
            Self::Bool => Value::Bool(false),
            Self::I64 => Value::I64(0),
            Self::F64 => Value::F64(0.0),
            Self::String => Value::String(String::new()),
            Self::Bytes => Value::Bytes(Vec::new()),
            Self::Date => Value::Date(DateTime::UNIX_EPOCH.date_naive()),
            Self::DateTime => Value::DateTime(DateTime::UNIX_EPOCH.naive_utc()),
            Self::List(_) => Value::List(Vec::new()),
            Self::Unknown => Value::Null,
        }
    }

    /// Applies a representation-preserving conversion of `value` to this
    /// type, if one is defined. Values with no defined conversion are
    /// returned unchanged.
    pub fn coerce(&self, value: Value) -> Value {
        match (value, self) {
            (Value::I64(v), Self::F64) => Value::F64(v as f64),
            (Value::F64(v), Self::I64) => Value::I64(v as i64),
            (Value::Bytes(v), Self::String) => {
                Value::String(String::from_utf8_lossy(&v).into_owned())
            }
            (Value::String(v), Self::Bytes) => Value::Bytes(v.into_bytes()),
            (Value::Date(v), Self::DateTime) => Value::DateTime(v.and_time(chrono::NaiveTime::MIN)),
            (Value::DateTime(v), Self::Date) => Value::Date(v.date()),
            (Value::List(items), Self::List(item_ty)) => {
                Value::List(items.into_iter().map(|v| item_ty.coerce(v)).collect())
            }
            (value, _) => value,
        }
    }
}

impl From<&Self> for Type {
    fn from(value: &Self) -> Self {
        value.clone()
    }
}
