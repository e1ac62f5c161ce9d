use super::{
    AccessControlList, Field, FieldMap, FieldsCollection, Method, MethodsCollection, ModelOptions,
    RecordRuleRegistry, Registry, EXPR_SEP, SQL_SEP,
};
use crate::{
    driver::Row,
    env::{CallArg, Environment},
    stmt::{Condition, ConditionField, Predicate, RecordRef, Type, Value},
    Result,
};
use std::fmt;

/// Uniquely identifies a model within the registry.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct ModelId(pub usize);

impl ModelId {
    pub(crate) const fn placeholder() -> Self {
        Self(usize::MAX)
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.0)
    }
}

/// The definition of a business object (e.g. a partner, a sale order),
/// including its fields and methods.
#[derive(Debug, Clone)]
pub struct Model {
    pub(crate) id: ModelId,
    pub(crate) name: String,
    pub(crate) options: ModelOptions,
    pub(crate) acl: AccessControlList,
    pub(crate) rules: RecordRuleRegistry,
    pub(crate) table_name: String,
    pub(crate) fields: FieldsCollection,
    pub(crate) methods: MethodsCollection,
    pub(crate) mixins: Vec<String>,
}

impl Model {
    pub fn id(&self) -> ModelId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn options(&self) -> ModelOptions {
        self.options
    }

    /// The fields collection of this model.
    pub fn fields(&self) -> &FieldsCollection {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut FieldsCollection {
        &mut self.fields
    }

    /// The methods collection of this model.
    pub fn methods(&self) -> &MethodsCollection {
        &self.methods
    }

    pub fn methods_mut(&mut self) -> &mut MethodsCollection {
        &mut self.methods
    }

    pub fn acl(&self) -> &AccessControlList {
        &self.acl
    }

    pub fn acl_mut(&mut self) -> &mut AccessControlList {
        &mut self.acl
    }

    pub fn rules(&self) -> &RecordRuleRegistry {
        &self.rules
    }

    pub fn rules_mut(&mut self) -> &mut RecordRuleRegistry {
        &mut self.rules
    }

    /// The names of the mixins this model inherits from, in declaration
    /// order.
    pub fn mixins(&self) -> &[String] {
        &self.mixins
    }

    /// Extends this model with the given mixin's fields and methods.
    ///
    /// Mixin declarations have a lower priority than the model's own and are
    /// overridden by them when applicable. Resolution over the mixin chain
    /// happens lazily at lookup, so a mixin may still be extended after
    /// being inherited, any time before bootstrap.
    pub fn inherit(&mut self, mixin: impl Into<String>) {
        self.mixins.push(mixin.into());
    }

    /// Returns true if this is a mixin model.
    pub fn is_mixin(&self) -> bool {
        self.options.contains(ModelOptions::MIXIN)
    }

    /// Returns true if this is a manual model.
    pub fn is_manual(&self) -> bool {
        self.options.contains(ModelOptions::MANUAL)
    }

    /// Returns true if this is a system model.
    pub fn is_system(&self) -> bool {
        self.options.contains(ModelOptions::SYSTEM)
    }

    /// Returns true if this is a transient model.
    pub fn is_transient(&self) -> bool {
        self.options.contains(ModelOptions::TRANSIENT)
    }

    /// Returns true if this is a many-to-many link model.
    pub fn is_m2m_link(&self) -> bool {
        self.options.contains(ModelOptions::MANY2MANY_LINK)
    }

    /// Returns true if this model declares a `Parent` field, making it
    /// usable by hierarchy-aware behavior.
    pub fn has_parent_field(&self) -> bool {
        self.fields.get("Parent").is_some()
    }

    /// Resolves a field by name or json name against this model's own
    /// declarations first, then its mixins in declaration order; the first
    /// match wins.
    pub fn resolve_field<'a>(&'a self, registry: &'a Registry, name: &str) -> Option<&'a Field> {
        if let Some(field) = self.fields.get(name) {
            return Some(field);
        }
        self.mixins
            .iter()
            .find_map(|mixin| registry.must_get(mixin).resolve_field(registry, name))
    }

    /// Resolves a method by name, with the same precedence as
    /// [`Model::resolve_field`].
    pub fn resolve_method<'a>(&'a self, registry: &'a Registry, name: &str) -> Option<&'a Method> {
        if let Some(method) = self.methods.get(name) {
            return Some(method);
        }
        self.mixins
            .iter()
            .find_map(|mixin| registry.must_get(mixin).resolve_method(registry, name))
    }

    /// Returns the model reached by following `path` across relational
    /// fields.
    ///
    /// - If `skip_last` is true, the last segment of the path is not
    ///   followed, so the returned model is the one owning the final field.
    /// - If the first segment names a non-relational field, resolution stops
    ///   at this model whatever `skip_last` says: a non-relational field
    ///   cannot be traversed further, which is the terminal case rather than
    ///   an error.
    ///
    /// Paths can be formed from field names or json names.
    ///
    /// # Panics
    ///
    /// Panics if a segment does not name a declared field.
    #[track_caller]
    pub fn related_model<'a>(
        &'a self,
        registry: &'a Registry,
        path: &str,
        skip_last: bool,
    ) -> &'a Model {
        if path.is_empty() {
            return self;
        }
        let exprs: Vec<&str> = path.split(EXPR_SEP).collect();
        let field = match self.resolve_field(registry, exprs[0]) {
            Some(field) => field,
            None => panic!("unknown field `{}` on model `{}`", exprs[0], self.name),
        };
        let Some(target) = field.related_model.as_deref() else {
            return self;
        };
        if exprs.len() == 1 && skip_last {
            return self;
        }
        let related = registry.must_get(target);
        if exprs.len() > 1 {
            return related.related_model(registry, &exprs[1..].join(EXPR_SEP), skip_last);
        }
        related
    }

    /// Returns the field descriptor reached by following `path`. Paths can
    /// be formed from field names or json names.
    ///
    /// # Panics
    ///
    /// Panics if a segment does not name a declared field.
    #[track_caller]
    pub fn related_field<'a>(&'a self, registry: &'a Registry, path: &str) -> &'a Field {
        let exprs: Vec<&str> = path.split(EXPR_SEP).collect();
        let model = if exprs.len() > 1 {
            self.related_model(registry, path, true)
        } else {
            self
        };
        let last = exprs[exprs.len() - 1];
        match model.resolve_field(registry, last) {
            Some(field) => field,
            None => panic!("unknown field `{}` on model `{}`", last, model.name),
        }
    }

    /// Returns the json name of the given field name, which may be a dotted
    /// path from this model. Names that already are json names come back
    /// unchanged, so the operation is idempotent.
    ///
    /// # Panics
    ///
    /// Panics if the path is invalid.
    #[track_caller]
    pub fn jsonize_field_name(&self, registry: &Registry, field_name: &str) -> String {
        let parts: Vec<&str> = field_name.split(EXPR_SEP).collect();
        let mut model = self;
        let mut jsonized = Vec::with_capacity(parts.len());
        for (i, part) in parts.iter().enumerate() {
            let field = match model.resolve_field(registry, part) {
                Some(field) => field,
                None => panic!(
                    "unknown field `{}` on model `{}` in path `{}`",
                    part, model.name, field_name
                ),
            };
            jsonized.push(field.json.clone());
            if i + 1 < parts.len() {
                let target = match field.related_model.as_deref() {
                    Some(target) => target,
                    None => panic!(
                        "field `{}` on model `{}` is not relational in path `{}`",
                        part, model.name, field_name
                    ),
                };
                model = registry.must_get(target);
            }
        }
        jsonized.join(EXPR_SEP)
    }

    /// Returns the given field map with all its keys changed to their json
    /// names. Keys that already are json names are unchanged.
    #[track_caller]
    pub fn jsonize_field_map(&self, registry: &Registry, fmap: FieldMap) -> FieldMap {
        fmap.into_iter()
            .map(|(key, value)| (self.jsonize_field_name(registry, &key), value))
            .collect()
    }

    /// Decodes one row of a query result into `dest`.
    ///
    /// Unlike a plain column scan, the resulting values have the type
    /// declared by the matching field descriptor instead of the database
    /// type. On error, `dest` keeps whatever partial map was produced.
    pub fn scan_to_field_map(
        &self,
        registry: &Registry,
        row: &mut dyn Row,
        dest: &mut FieldMap,
    ) -> Result<()> {
        let columns = row.columns()?;

        // Scan into Null-initialized slots so SQL NULL lands as Value::Null
        // without aborting the scan.
        let mut db_values = vec![Value::Null; columns.len()];
        row.scan(&mut db_values)?;

        for (column, db_value) in columns.iter().zip(db_values) {
            // Joined-table columns arrive with the flat storage separator;
            // translate to the object-model path separator, exactly once.
            let col_name = column.replace(SQL_SEP, EXPR_SEP);
            dest.insert(col_name, db_value);
        }

        self.convert_values_to_field_type(registry, dest);
        tracing::trace!(model = %self.name, columns = dest.len(), "decoded row");

        match row.err() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Converts all values of the given field map to the type declared by
    /// their field descriptor.
    ///
    /// # Panics
    ///
    /// Panics on a relation value that matches neither the scalar-identifier
    /// nor the identifier-list shape; this is a bug in model definitions,
    /// never a runtime condition.
    #[track_caller]
    pub fn convert_values_to_field_type(&self, registry: &Registry, fmap: &mut FieldMap) {
        let keys: Vec<String> = fmap.keys().cloned().collect();
        for key in keys {
            let mut value = fmap.get(&key).cloned().unwrap_or_default();
            // Loosely-typed callers send `false` to mean "no value".
            if value == Value::Bool(false) {
                value = Value::Null;
            }
            let field = self.related_field(registry, &key);
            if value.is_a(&field.ty) {
                continue;
            }
            let converted = if value.is_null() {
                if field.field_type.is_fk_relation() && !field.required {
                    // Nullable to-one relation: keep the explicit "no value"
                    // marker. A zero identifier would mean "related to
                    // record 0", which cannot exist.
                    Value::Null
                } else {
                    field.ty.zero_value()
                }
            } else if let Some(decode) = field.decode {
                decode(value)
            } else {
                match value {
                    Value::Records(records) => {
                        convert_relation_field_value(&self.name, field, records)
                    }
                    value => field.ty.coerce(value),
                }
            };
            fmap.insert(key, converted);
        }
    }

    /// Starts a condition on this model.
    pub fn field(&self, name: &str) -> ConditionField {
        ConditionField::new(name)
    }

    /// Returns a condition that joins on the given field and filters the
    /// related records with `condition`: every predicate path of
    /// `condition` is prefixed with `field`. The input condition is left
    /// unmodified.
    pub fn filtered_on(&self, field: &str, condition: &Condition) -> Condition {
        let prefix: Vec<String> = field.split(EXPR_SEP).map(String::from).collect();
        let predicates = condition
            .predicates
            .iter()
            .map(|predicate| {
                let mut exprs = prefix.clone();
                exprs.extend(predicate.exprs.iter().cloned());
                Predicate {
                    exprs,
                    op: predicate.op,
                    value: predicate.value.clone(),
                }
            })
            .collect();
        Condition { predicates }
    }

    /// Moves every entry of `src` into `dest` and returns `dest`. Keys are
    /// canonicalized to json names; on collision the `src` value wins.
    ///
    /// # Panics
    ///
    /// Panics if a key of `src` does not name a declared field.
    #[track_caller]
    pub fn merge_field_maps(
        &self,
        registry: &Registry,
        mut dest: FieldMap,
        src: FieldMap,
    ) -> FieldMap {
        for (key, value) in src {
            let json_name = match self.resolve_field(registry, &key) {
                Some(field) => field.json.clone(),
                None => panic!("unknown field `{}` on model `{}`", key, self.name),
            };
            dest.insert(json_name, value);
        }
        dest
    }

    /// Creates a new record in this model with the given data.
    pub fn create(&self, env: &dyn Environment, data: FieldMap) -> Result<RecordRef> {
        env.call(&self.name, "Create", vec![CallArg::Map(data)])
    }

    /// Searches the database and returns the records matching the given
    /// condition.
    pub fn search(&self, env: &dyn Environment, condition: Condition) -> Result<RecordRef> {
        env.call(&self.name, "Search", vec![CallArg::Cond(condition)])
    }
}

/// Encodes a record-set handle per the declared relation cardinality: a
/// to-one field takes the first related identifier (or the "no value"
/// marker when the set is empty), a to-many field takes the full ordered
/// identifier list.
///
/// # Panics
///
/// Panics if the declared type is neither a scalar identifier nor an
/// identifier list.
#[track_caller]
fn convert_relation_field_value(model: &str, field: &Field, records: RecordRef) -> Value {
    match &field.ty {
        Type::I64 => match records.first_id() {
            Some(id) => Value::I64(id),
            None => Value::Null,
        },
        Type::List(item_ty) if **item_ty == Type::I64 => {
            Value::List(records.ids().iter().copied().map(Value::I64).collect())
        }
        _ => panic!(
            "inconsistent relation value {:?} for field `{}` on model `{}` declared as {:?}",
            records, field.name, model, field.ty
        ),
    }
}
