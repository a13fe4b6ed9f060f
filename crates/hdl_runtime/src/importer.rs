//! The import collaborator.

use std::sync::Arc;

use hdl_ir::ModuleName;

use crate::{ImportError, ModuleObject};

/// Imports a module by its dotted name.
///
/// Implementations return the already-initialized module, loading it first
/// if needed. Importing the same name twice must return the same object
/// unless the first attempt failed.
pub trait ModuleImporter {
    fn import_module(&self, name: &ModuleName) -> Result<Arc<ModuleObject>, ImportError>;
}

impl<T: ModuleImporter + ?Sized> ModuleImporter for &T {
    fn import_module(&self, name: &ModuleName) -> Result<Arc<ModuleObject>, ImportError> {
        (**self).import_module(name)
    }
}

impl<T: ModuleImporter + ?Sized> ModuleImporter for Arc<T> {
    fn import_module(&self, name: &ModuleName) -> Result<Arc<ModuleObject>, ImportError> {
        (**self).import_module(name)
    }
}
