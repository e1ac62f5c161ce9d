use crate::stmt::{Type, Value};
use heck::ToSnakeCase;
use std::fmt;

/// A custom parse-from-storage routine attached to a field descriptor.
///
/// When present, it takes precedence over the plain representation
/// conversion during row decoding.
pub type DecodeFn = fn(Value) -> Value;

/// The enumerated kind of a field.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldType {
    Binary,
    Boolean,
    Char,
    Date,
    DateTime,
    Float,
    Integer,
    Many2Many,
    Many2One,
    One2Many,
    One2One,
    Rev2One,
    Selection,
    Text,
}

impl FieldType {
    /// Returns true for any relation kind.
    pub fn is_relation(self) -> bool {
        matches!(
            self,
            Self::Many2Many | Self::Many2One | Self::One2Many | Self::One2One | Self::Rev2One
        )
    }

    /// Returns true for relation kinds whose foreign key is stored in the
    /// model's own table.
    pub fn is_fk_relation(self) -> bool {
        matches!(self, Self::Many2One | Self::One2One)
    }

    /// Returns true for relation kinds pointing at a single record.
    pub fn is_to_one_relation(self) -> bool {
        matches!(self, Self::Many2One | Self::One2One | Self::Rev2One)
    }

    /// Returns true for relation kinds pointing at a set of records.
    pub fn is_to_many_relation(self) -> bool {
        matches!(self, Self::Many2Many | Self::One2Many)
    }
}

/// The static metadata of one business attribute of a model.
///
/// Created during the bootstrap phase and immutable afterwards.
#[derive(Clone)]
pub struct Field {
    pub(crate) name: String,
    pub(crate) json: String,
    pub(crate) field_type: FieldType,
    pub(crate) related_model: Option<String>,
    pub(crate) required: bool,
    pub(crate) no_copy: bool,
    pub(crate) ty: Type,
    pub(crate) decode: Option<DecodeFn>,
}

impl Field {
    fn new(name: &str, json: String, field_type: FieldType, ty: Type) -> Self {
        Self {
            name: name.to_string(),
            json,
            field_type,
            related_model: None,
            required: false,
            no_copy: false,
            ty,
            decode: None,
        }
    }

    fn scalar(name: &str, field_type: FieldType, ty: Type) -> Self {
        Self::new(name, name.to_snake_case(), field_type, ty)
    }

    fn to_one(name: &str, field_type: FieldType, related_model: &str) -> Self {
        let mut field = Self::new(
            name,
            format!("{}_id", name.to_snake_case()),
            field_type,
            Type::I64,
        );
        field.related_model = Some(related_model.to_string());
        field
    }

    fn to_many(name: &str, field_type: FieldType, related_model: &str) -> Self {
        let mut field = Self::new(
            name,
            format!("{}_ids", name.to_snake_case()),
            field_type,
            Type::list(Type::I64),
        );
        field.related_model = Some(related_model.to_string());
        field
    }

    pub fn binary(name: &str) -> Self {
        Self::scalar(name, FieldType::Binary, Type::Bytes)
    }

    pub fn boolean(name: &str) -> Self {
        Self::scalar(name, FieldType::Boolean, Type::Bool)
    }

    pub fn char(name: &str) -> Self {
        Self::scalar(name, FieldType::Char, Type::String)
    }

    pub fn date(name: &str) -> Self {
        Self::scalar(name, FieldType::Date, Type::Date)
    }

    pub fn datetime(name: &str) -> Self {
        Self::scalar(name, FieldType::DateTime, Type::DateTime)
    }

    pub fn float(name: &str) -> Self {
        Self::scalar(name, FieldType::Float, Type::F64)
    }

    pub fn integer(name: &str) -> Self {
        Self::scalar(name, FieldType::Integer, Type::I64)
    }

    pub fn selection(name: &str) -> Self {
        Self::scalar(name, FieldType::Selection, Type::String)
    }

    pub fn text(name: &str) -> Self {
        Self::scalar(name, FieldType::Text, Type::String)
    }

    pub fn many2one(name: &str, related_model: &str) -> Self {
        Self::to_one(name, FieldType::Many2One, related_model)
    }

    pub fn one2one(name: &str, related_model: &str) -> Self {
        Self::to_one(name, FieldType::One2One, related_model)
    }

    pub fn rev2one(name: &str, related_model: &str) -> Self {
        Self::to_one(name, FieldType::Rev2One, related_model)
    }

    pub fn one2many(name: &str, related_model: &str) -> Self {
        Self::to_many(name, FieldType::One2Many, related_model)
    }

    pub fn many2many(name: &str, related_model: &str) -> Self {
        Self::to_many(name, FieldType::Many2Many, related_model)
    }

    /// Overrides the derived json name.
    pub fn json(mut self, json: &str) -> Self {
        self.json = json.to_string();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn no_copy(mut self) -> Self {
        self.no_copy = true;
        self
    }

    /// Attaches a custom parse-from-storage routine.
    pub fn decode(mut self, decode: DecodeFn) -> Self {
        self.decode = Some(decode);
        self
    }

    /// Gets the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the json (storage/wire) name.
    pub fn json_name(&self) -> &str {
        &self.json
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// The target model name, if the field is relational.
    pub fn related_model(&self) -> Option<&str> {
        self.related_model.as_deref()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_no_copy(&self) -> bool {
        self.no_copy
    }

    /// The runtime type descriptor of the in-memory representation.
    pub fn ty(&self) -> &Type {
        &self.ty
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Field")
            .field("name", &self.name)
            .field("json", &self.json)
            .field("field_type", &self.field_type)
            .field("related_model", &self.related_model)
            .field("required", &self.required)
            .field("no_copy", &self.no_copy)
            .field("ty", &self.ty)
            .finish()
    }
}
