//! Function descriptors.

use std::sync::Arc;

use hdl_ir::ModuleName;

use crate::{AttributeError, Constant, Reflectable, Value};

/// A named function. Only its identity and naming metadata are modelled;
/// nothing in this workspace ever calls it.
#[derive(Debug)]
pub struct FunctionObject {
    name: Arc<str>,
    qualname: Arc<str>,
    module: Arc<str>,
}

impl FunctionObject {
    /// A module-level function.
    pub fn new(module: &ModuleName, name: &str) -> Self {
        let name: Arc<str> = Arc::from(name);
        FunctionObject {
            qualname: Arc::clone(&name),
            name,
            module: Arc::from(module.as_str()),
        }
    }

    pub(crate) fn method(module: &Arc<str>, class: &str, name: &str) -> Self {
        FunctionObject {
            name: Arc::from(name),
            qualname: Arc::from(format!("{class}.{name}")),
            module: Arc::clone(module),
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

    pub fn full_name(&self) -> String {
        format!("{}.{}", self.module, self.qualname)
    }
}

impl Reflectable for FunctionObject {
    fn type_name(&self) -> &str {
        "function"
    }

    fn get_attr(&self, name: &str) -> Result<Value, AttributeError> {
        let field = match name {
            "__name__" => &self.name,
            "__qualname__" => &self.qualname,
            "__module__" => &self.module,
            _ => return Err(AttributeError::missing("'function' object", name)),
        };
        Ok(Value::Constant(Constant::Str(Arc::clone(field))))
    }
}
