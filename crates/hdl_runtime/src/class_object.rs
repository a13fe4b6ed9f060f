//! Class objects and their builder.

use std::sync::Arc;

use hdl_ir::ModuleName;
use rustc_hash::FxHashMap;

use crate::{AttributeError, Constant, FunctionObject, Reflectable, Value};

/// A class (type object): a named, immutable table of members.
///
/// Built once with [`ClassObject::builder`] inside a module loader and never
/// modified afterwards, so lookups need no locking.
#[derive(Debug)]
pub struct ClassObject {
    name: Arc<str>,
    qualname: Arc<str>,
    module: Arc<str>,
    doc: Option<Arc<str>>,
    attrs: FxHashMap<Arc<str>, Value>,
}

impl ClassObject {
    /// Start building a top-level class `name` defined in `module`.
    pub fn builder(module: &ModuleName, name: &str) -> ClassBuilder {
        ClassBuilder {
            name: Arc::from(name),
            module: Arc::from(module.as_str()),
            doc: None,
            attrs: FxHashMap::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn qualname(&self) -> &str {
        &self.qualname
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    /// Fully qualified name, e.g. `collections.deque`.
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.module, self.qualname)
    }
}

impl Reflectable for ClassObject {
    fn type_name(&self) -> &str {
        "type"
    }

    fn get_attr(&self, name: &str) -> Result<Value, AttributeError> {
        if let Some(value) = self.attrs.get(name) {
            return Ok(value.clone());
        }
        match name {
            "__name__" => Ok(Value::Constant(Constant::Str(Arc::clone(&self.name)))),
            "__qualname__" => Ok(Value::Constant(Constant::Str(Arc::clone(&self.qualname)))),
            "__module__" => Ok(Value::Constant(Constant::Str(Arc::clone(&self.module)))),
            "__doc__" => Ok(self
                .doc
                .as_ref()
                .map_or(Value::Constant(Constant::None), |doc| {
                    Value::Constant(Constant::Str(Arc::clone(doc)))
                })),
            _ => Err(AttributeError::missing(
                format!("type object '{}'", self.name),
                name,
            )),
        }
    }

    fn dir(&self) -> Vec<Arc<str>> {
        let mut names: Vec<Arc<str>> = self.attrs.keys().cloned().collect();
        names.sort_unstable();
        names
    }
}

/// Builder for [`ClassObject`].
#[must_use]
pub struct ClassBuilder {
    name: Arc<str>,
    module: Arc<str>,
    doc: Option<Arc<str>>,
    attrs: FxHashMap<Arc<str>, Value>,
}

impl ClassBuilder {
    pub fn doc(mut self, doc: &str) -> Self {
        self.doc = Some(Arc::from(doc));
        self
    }

    /// Add a method; its qualified name is `Class.method`.
    pub fn method(mut self, name: &str) -> Self {
        let function = FunctionObject::method(&self.module, &self.name, name);
        self.attrs
            .insert(Arc::from(name), Value::Function(Arc::new(function)));
        self
    }

    pub fn constant(self, name: &str, value: Constant) -> Self {
        self.attr(name, Value::Constant(value))
    }

    pub fn attr(mut self, name: &str, value: Value) -> Self {
        self.attrs.insert(Arc::from(name), value);
        self
    }

    pub fn build(self) -> Arc<ClassObject> {
        Arc::new(ClassObject {
            qualname: Arc::clone(&self.name),
            name: self.name,
            module: self.module,
            doc: self.doc,
            attrs: self.attrs,
        })
    }
}
