use indexmap::IndexMap;

/// A named behavior unit attached to a model.
///
/// Methods are opaque to this core: invocation goes through the external
/// method-dispatch layer, which resolves the name against the model and its
/// mixin chain.
#[derive(Debug, Clone)]
pub struct Method {
    name: String,
    doc: Option<String>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn doc_string(&self) -> Option<&str> {
        self.doc.as_deref()
    }
}

/// The named methods declared on one model, in declaration order.
///
/// Re-declaring a name overrides the previous declaration; mixin methods are
/// resolved lazily through [`super::Model::resolve_method`].
#[derive(Debug, Default, Clone)]
pub struct MethodsCollection {
    /// Name of the owning model, set when the model is registered.
    pub(crate) model: String,
    by_name: IndexMap<String, Method>,
}

impl MethodsCollection {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Method> {
        self.by_name.get(name)
    }

    /// Looks up a method by name.
    ///
    /// # Panics
    ///
    /// Panics if the method is not declared.
    #[track_caller]
    pub fn must_get(&self, name: &str) -> &Method {
        match self.get(name) {
            Some(method) => method,
            None => panic!("unknown method `{}` on model `{}`", name, self.model),
        }
    }

    /// Declares a method, overriding any previous declaration of the name.
    pub fn add(&mut self, method: Method) {
        self.by_name.insert(method.name.clone(), method);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Method> {
        self.by_name.values()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
