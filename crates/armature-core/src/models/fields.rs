use super::Field;
use crate::{Error, Result};
use std::collections::HashMap;

/// The ordered collection of field descriptors declared on one model.
///
/// Lookup accepts either the field name or its json name. Only the model's
/// own declarations live here; mixin fields are resolved lazily through
/// [`super::Model::resolve_field`].
#[derive(Debug, Default, Clone)]
pub struct FieldsCollection {
    /// Name of the owning model, set when the model is registered.
    pub(crate) model: String,
    by_name: HashMap<String, usize>,
    by_json: HashMap<String, usize>,
    list: Vec<Field>,
}

impl FieldsCollection {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Looks up a field by name or json name.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.by_name
            .get(name)
            .or_else(|| self.by_json.get(name))
            .map(|&index| &self.list[index])
    }

    /// Looks up a field by name or json name.
    ///
    /// # Panics
    ///
    /// Panics if the field is not declared; an undeclared field name is a
    /// bug in model definitions, not a runtime condition.
    #[track_caller]
    pub fn must_get(&self, name: &str) -> &Field {
        match self.get(name) {
            Some(field) => field,
            None => panic!("unknown field `{}` on model `{}`", name, self.model),
        }
    }

    /// Declares a field on the owning model.
    pub fn add(&mut self, field: Field) -> Result<()> {
        if self.by_name.contains_key(&field.name) || self.by_json.contains_key(&field.json) {
            return Err(Error::invalid_definition(format!(
                "field `{}` is already declared on model `{}`",
                field.name, self.model,
            )));
        }
        let index = self.list.len();
        self.by_name.insert(field.name.clone(), index);
        self.by_json.insert(field.json.clone(), index);
        self.list.push(field);
        Ok(())
    }

    /// The declared fields, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.list.iter()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}
