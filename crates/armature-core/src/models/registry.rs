use super::{
    AccessControlList, Field, FieldsCollection, MethodsCollection, Model, ModelId, ModelOptions,
    RecordRuleRegistry, Sequence,
};
use crate::{Error, Result};
use heck::ToSnakeCase;
use indexmap::IndexMap;
use std::collections::HashMap;

/// The directory of all model and sequence definitions.
///
/// The registry has a two-phase lifecycle: a single-threaded build phase
/// during which models, fields, methods and sequences are declared, closed
/// by an explicit [`Registry::bootstrap`] transition; afterwards the
/// registry is read-only and can be shared freely across threads (e.g.
/// behind an `Arc`).
#[derive(Debug)]
pub struct Registry {
    models: Vec<Model>,
    by_name: IndexMap<String, ModelId>,
    by_table_name: HashMap<String, ModelId>,
    sequences: IndexMap<String, Sequence>,
    bootstrapped: bool,
}

impl Registry {
    /// Creates a registry holding the three foundational mixins the model
    /// constructors build on: `CommonMixin`, `BaseMixin` (inheriting
    /// CommonMixin) and `ModelMixin` (inheriting BaseMixin).
    pub fn new() -> Self {
        let mut registry = Self {
            models: Vec::new(),
            by_name: IndexMap::new(),
            by_table_name: HashMap::new(),
            sequences: IndexMap::new(),
            bootstrapped: false,
        };
        registry
            .new_mixin_model("CommonMixin")
            .expect("fresh registry");
        registry
            .new_mixin_model("BaseMixin")
            .expect("fresh registry")
            .inherit("CommonMixin");
        registry
            .new_mixin_model("ModelMixin")
            .expect("fresh registry")
            .inherit("BaseMixin");
        registry
    }

    /// Looks up a model by name or by table name.
    pub fn get(&self, name_or_json: &str) -> Option<&Model> {
        let id = self
            .by_name
            .get(name_or_json)
            .or_else(|| self.by_table_name.get(name_or_json))?;
        Some(&self.models[id.0])
    }

    /// Looks up a model by name or by table name.
    ///
    /// # Panics
    ///
    /// Panics if the model does not exist. Used wherever the caller has
    /// already guaranteed existence by construction-time invariants.
    #[track_caller]
    pub fn must_get(&self, name_or_json: &str) -> &Model {
        match self.get(name_or_json) {
            Some(model) => model,
            None => panic!("unknown model `{name_or_json}`"),
        }
    }

    /// Gets a model by id.
    pub fn model(&self, id: ModelId) -> &Model {
        self.models.get(id.0).expect("invalid model ID")
    }

    /// Build-phase mutable access to a registered model, for declaring
    /// fields, methods, mixins, permissions and rules.
    pub fn model_mut(&mut self, name_or_json: &str) -> Result<&mut Model> {
        if self.bootstrapped {
            return Err(Error::invalid_definition(format!(
                "cannot modify model `{name_or_json}` after bootstrap"
            )));
        }
        let id = match self
            .by_name
            .get(name_or_json)
            .or_else(|| self.by_table_name.get(name_or_json))
        {
            Some(id) => *id,
            None => {
                return Err(Error::invalid_definition(format!(
                    "unknown model `{name_or_json}`"
                )))
            }
        };
        Ok(&mut self.models[id.0])
    }

    /// The registered models, in registration order.
    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.iter()
    }

    /// Looks up a sequence by name.
    pub fn get_sequence(&self, name: &str) -> Option<&Sequence> {
        self.sequences.get(name)
    }

    /// Looks up a sequence by name.
    ///
    /// # Panics
    ///
    /// Panics if the sequence does not exist.
    #[track_caller]
    pub fn must_get_sequence(&self, name: &str) -> &Sequence {
        match self.get_sequence(name) {
            Some(sequence) => sequence,
            None => panic!("unknown sequence `{name}`"),
        }
    }

    /// Creates and registers a new sequence.
    pub fn new_sequence(&mut self, name: &str) -> Result<&Sequence> {
        if self.bootstrapped {
            return Err(Error::invalid_definition(format!(
                "cannot create sequence `{name}` after bootstrap"
            )));
        }
        if self.sequences.contains_key(name) {
            return Err(Error::invalid_definition(format!(
                "sequence `{name}` is already registered"
            )));
        }
        let sequence = Sequence::new(name);
        tracing::debug!(sequence = name, json = sequence.json(), "registered sequence");
        Ok(self
            .sequences
            .entry(name.to_string())
            .or_insert(sequence))
    }

    /// Creates a new model with the given name.
    pub fn new_model(&mut self, name: &str) -> Result<&mut Model> {
        let model = self.create_model(name, ModelOptions::NONE)?;
        model.inherit("ModelMixin");
        Ok(model)
    }

    /// Creates a new mixin model with the given name.
    pub fn new_mixin_model(&mut self, name: &str) -> Result<&mut Model> {
        self.create_model(name, ModelOptions::MIXIN)
    }

    /// Creates a new transient model with the given name.
    pub fn new_transient_model(&mut self, name: &str) -> Result<&mut Model> {
        let model = self.create_model(name, ModelOptions::TRANSIENT)?;
        model.inherit("BaseMixin");
        Ok(model)
    }

    /// Creates a model whose table is not automatically generated in the
    /// database. This is particularly useful for SQL view models.
    pub fn new_manual_model(&mut self, name: &str) -> Result<&mut Model> {
        let model = self.create_model(name, ModelOptions::MANUAL)?;
        model.inherit("CommonMixin");
        Ok(model)
    }

    fn create_model(&mut self, name: &str, options: ModelOptions) -> Result<&mut Model> {
        let mut model = Model {
            id: ModelId::placeholder(),
            name: name.to_string(),
            options,
            acl: AccessControlList::new(),
            rules: RecordRuleRegistry::new(),
            table_name: name.to_snake_case(),
            fields: FieldsCollection::new(),
            methods: MethodsCollection::new(),
            mixins: Vec::new(),
        };
        let pk = Field::integer("ID").required().no_copy();
        model.fields.add(pk).expect("empty fields collection");
        self.add(model)
    }

    fn add(&mut self, mut model: Model) -> Result<&mut Model> {
        if self.bootstrapped {
            return Err(Error::invalid_definition(format!(
                "cannot register model `{}` after bootstrap",
                model.name
            )));
        }
        if self.get(&model.name).is_some() {
            return Err(Error::invalid_definition(format!(
                "model `{}` is already registered",
                model.name
            )));
        }
        if self.by_table_name.contains_key(&model.table_name) {
            return Err(Error::invalid_definition(format!(
                "table name `{}` of model `{}` is already in use",
                model.table_name, model.name
            )));
        }
        let id = ModelId(self.models.len());
        model.id = id;
        // Back-references: the collections report their owning model in
        // lookup failures and dispatch.
        model.fields.model = model.name.clone();
        model.methods.model = model.name.clone();
        tracing::debug!(model = %model.name, table = %model.table_name, "registered model");
        self.by_name.insert(model.name.clone(), id);
        self.by_table_name.insert(model.table_name.clone(), id);
        self.models.push(model);
        Ok(self.models.last_mut().expect("just pushed"))
    }

    /// Marks the end of the bootstrap phase. The registry is read-only
    /// afterwards; any further registration or modification fails.
    pub fn bootstrap(&mut self) -> Result<()> {
        if self.bootstrapped {
            return Err(Error::invalid_definition(
                "registry is already bootstrapped",
            ));
        }
        self.bootstrapped = true;
        tracing::debug!(
            models = self.models.len(),
            sequences = self.sequences.len(),
            "registry bootstrapped"
        );
        Ok(())
    }

    /// Returns true once [`Registry::bootstrap`] has run.
    pub fn is_bootstrapped(&self) -> bool {
        self.bootstrapped
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
