//! `ModuleObject` - runtime representation of an imported module.

use std::sync::Arc;

use hdl_ir::ModuleName;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::{AttributeError, Constant, Reflectable, Value};

/// A module and its attribute table.
///
/// Attributes are behind a `RwLock` because a module is shared as soon as it
/// is created: its loader populates it while it is already reachable from
/// the registry's initializing set, and submodules are bound onto their
/// parent package after they finish loading.
#[derive(Debug)]
pub struct ModuleObject {
    name: ModuleName,
    doc: Option<Arc<str>>,
    attrs: RwLock<FxHashMap<Arc<str>, Value>>,
}

impl ModuleObject {
    pub fn new(name: ModuleName) -> Self {
        Self::with_doc(name, None)
    }

    pub fn with_doc(name: ModuleName, doc: Option<Arc<str>>) -> Self {
        ModuleObject {
            name,
            doc,
            attrs: RwLock::new(FxHashMap::default()),
        }
    }

    #[inline]
    pub fn name(&self) -> &ModuleName {
        &self.name
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// Get a stored attribute. Does not synthesize `__name__`/`__doc__`.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.attrs.read().get(name).cloned()
    }

    pub fn set_attr(&self, name: impl Into<Arc<str>>, value: Value) {
        self.attrs.write().insert(name.into(), value);
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.attrs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.read().is_empty()
    }
}

impl Reflectable for ModuleObject {
    fn type_name(&self) -> &str {
        "module"
    }

    fn get_attr(&self, name: &str) -> Result<Value, AttributeError> {
        if let Some(value) = self.get(name) {
            return Ok(value);
        }
        match name {
            "__name__" => Ok(Value::string(self.name.as_str())),
            "__doc__" => Ok(self
                .doc
                .as_ref()
                .map_or(Value::Constant(Constant::None), |doc| {
                    Value::Constant(Constant::Str(Arc::clone(doc)))
                })),
            _ => Err(AttributeError::missing(
                format!("module '{}'", self.name),
                name,
            )),
        }
    }

    fn dir(&self) -> Vec<Arc<str>> {
        let mut names: Vec<Arc<str>> = self.attrs.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }
}
