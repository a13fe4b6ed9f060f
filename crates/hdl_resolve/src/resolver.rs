//! Handle resolution.
//!
//! ```text
//! dereference("asyncio.tasks#Task.cancel")
//!   ├── Handle::parse          → module "asyncio.tasks", chain [Task, cancel]
//!   ├── import_module          → <module 'asyncio.tasks'>
//!   ├── get_attr("Task")       → <class 'asyncio.tasks.Task'>
//!   └── get_attr("cancel")     → <function 'asyncio.tasks.Task.cancel'>
//! ```
//!
//! Parsing completes before the importer is touched, so a malformed handle
//! never triggers an import. The chain is walked strictly left to right and
//! stops at the first failing segment.

use hdl_ir::Handle;
use hdl_runtime::{ImportError, ModuleImporter, ModuleRegistry, Reflectable, Value};

use crate::ResolveError;

/// Resolves handles against a module importer.
///
/// Holds nothing but the importer it was built with; every call is
/// independent. Shareable across threads when the importer is.
#[derive(Debug)]
pub struct HandleResolver<I = ModuleRegistry> {
    importer: I,
}

impl HandleResolver<ModuleRegistry> {
    /// A resolver over a fresh registry with the built-in modules installed.
    pub fn with_builtins() -> Result<Self, ImportError> {
        Ok(Self::new(ModuleRegistry::with_builtins()?))
    }
}

impl<I: ModuleImporter> HandleResolver<I> {
    pub fn new(importer: I) -> Self {
        HandleResolver { importer }
    }

    pub fn importer(&self) -> &I {
        &self.importer
    }

    /// Resolve a handle string to the object it names.
    ///
    /// `"m"` and `"m#"` yield module `m` itself; `"m#a.b"` yields attribute
    /// `b` of attribute `a` of module `m`.
    pub fn dereference(&self, handle: &str) -> Result<Value, ResolveError> {
        let parsed = Handle::parse(handle)?;
        self.resolve(&parsed)
    }

    /// Resolve an already parsed handle.
    pub fn resolve(&self, handle: &Handle<'_>) -> Result<Value, ResolveError> {
        let _span = tracing::debug_span!("resolve", handle = %handle).entered();

        let module_name = handle.module_name();
        let module = self
            .importer
            .import_module(&module_name)
            .map_err(|source| {
                tracing::debug!(error = %source, "module import failed");
                ResolveError::Module {
                    handle: handle.as_str().to_owned(),
                    module: module_name.to_string(),
                    source,
                }
            })?;

        let mut current = Value::Module(module);
        for (index, segment) in handle.attributes().enumerate() {
            tracing::trace!(index, segment, "attribute lookup");
            current = current.get_attr(segment).map_err(|source| {
                tracing::debug!(index, segment, error = %source, "attribute lookup failed");
                ResolveError::Attribute {
                    handle: handle.as_str().to_owned(),
                    segment: segment.to_owned(),
                    index,
                    source,
                }
            })?;
        }

        Ok(current)
    }
}
