//! Module registry - the in-process import system.
//!
//! # Architecture
//!
//! ```text
//! ModuleRegistry
//!   ├── modules      loaded modules (RwLock<FxHashMap>), the fast path
//!   ├── loaders      registered module loaders, run on first import
//!   └── import_lock  reentrant lock + modules still initializing
//! ```
//!
//! Importing `a.b.c` imports `a`, then `a.b`, then runs the loader for
//! `a.b.c` and binds the result as attribute `c` of `a.b`, the way a
//! package import behaves.
//!
//! # Concurrency
//!
//! Loaded modules are read without taking the import lock. Loading happens
//! under a reentrant lock, so a loader may import other modules (including
//! its own submodules) on the same thread, while concurrent importers of the
//! same module wait and then receive the object the first one produced. A
//! module is published only after its loader succeeds; a failed import
//! leaves nothing behind and the next import runs the loader again.

use std::cell::RefCell;
use std::fmt;
use std::sync::Arc;

use hdl_ir::ModuleName;
use parking_lot::{ReentrantMutex, RwLock};
use rustc_hash::FxHashMap;

use crate::{ImportError, ModuleImporter, ModuleObject, Value};

/// Populates a freshly created module on first import.
///
/// Receives the registry so it can import other modules.
pub type ModuleLoader =
    Arc<dyn Fn(&ModuleRegistry, &ModuleObject) -> Result<(), ImportError> + Send + Sync>;

#[derive(Clone)]
struct Registration {
    doc: Option<Arc<str>>,
    loader: ModuleLoader,
}

/// A table of importable modules.
pub struct ModuleRegistry {
    modules: RwLock<FxHashMap<ModuleName, Arc<ModuleObject>>>,
    loaders: RwLock<FxHashMap<ModuleName, Registration>>,
    /// Modules whose loader is running, visible only to the thread holding
    /// the lock (i.e. to loaders importing each other).
    import_lock: ReentrantMutex<RefCell<FxHashMap<ModuleName, Arc<ModuleObject>>>>,
}

impl ModuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        ModuleRegistry {
            modules: RwLock::new(FxHashMap::default()),
            loaders: RwLock::new(FxHashMap::default()),
            import_lock: ReentrantMutex::new(RefCell::new(FxHashMap::default())),
        }
    }

    /// Create a registry with the built-in module catalogue installed.
    pub fn with_builtins() -> Result<Self, ImportError> {
        let registry = Self::new();
        crate::builtins::install(&registry)?;
        Ok(registry)
    }

    /// Register `loader` for module `name`.
    ///
    /// Replacing a loader does not affect a module that is already loaded.
    pub fn register<F>(&self, name: &str, loader: F) -> Result<(), ImportError>
    where
        F: Fn(&ModuleRegistry, &ModuleObject) -> Result<(), ImportError> + Send + Sync + 'static,
    {
        self.register_entry(name, None, Arc::new(loader))
    }

    /// Register `loader` for module `name`, with a docstring exposed as
    /// `__doc__`.
    pub fn register_with_doc<F>(&self, name: &str, doc: &str, loader: F) -> Result<(), ImportError>
    where
        F: Fn(&ModuleRegistry, &ModuleObject) -> Result<(), ImportError> + Send + Sync + 'static,
    {
        self.register_entry(name, Some(Arc::from(doc)), Arc::new(loader))
    }

    fn register_entry(
        &self,
        name: &str,
        doc: Option<Arc<str>>,
        loader: ModuleLoader,
    ) -> Result<(), ImportError> {
        let name = ModuleName::parse(name).ok_or_else(|| ImportError::invalid_name(name))?;
        tracing::trace!(module = %name, "registered module loader");
        self.loaders
            .write()
            .insert(name, Registration { doc, loader });
        Ok(())
    }

    /// Publish an already-built module, bypassing any loader.
    ///
    /// A dotted module is treated like an imported submodule: its parent is
    /// imported first and the module is bound onto it. Nothing is published
    /// if the parent cannot be imported.
    pub fn insert_module(&self, module: Arc<ModuleObject>) -> Result<(), ImportError> {
        let name = module.name().clone();
        if let Some(parent) = name.parent() {
            let parent = self.load(&parent)?;
            parent.set_attr(name.last_segment(), Value::Module(Arc::clone(&module)));
        }
        tracing::debug!(module = %name, "module inserted");
        self.modules.write().insert(name, module);
        Ok(())
    }

    /// Import by dotted name string.
    pub fn import(&self, name: &str) -> Result<Arc<ModuleObject>, ImportError> {
        let name = ModuleName::parse(name).ok_or_else(|| ImportError::invalid_name(name))?;
        self.load(&name)
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.modules.read().contains_key(name)
    }

    /// Names of loaded modules, sorted.
    pub fn loaded_names(&self) -> Vec<ModuleName> {
        let mut names: Vec<ModuleName> = self.modules.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Names of every importable module (registered or inserted), sorted.
    pub fn registered_names(&self) -> Vec<ModuleName> {
        let mut names: Vec<ModuleName> = self.loaders.read().keys().cloned().collect();
        names.extend(self.modules.read().keys().cloned());
        names.sort_unstable();
        names.dedup();
        names
    }

    fn cached(&self, name: &ModuleName) -> Option<Arc<ModuleObject>> {
        self.modules.read().get(name).cloned()
    }

    fn load(&self, name: &ModuleName) -> Result<Arc<ModuleObject>, ImportError> {
        if let Some(module) = self.cached(name) {
            return Ok(module);
        }

        let _span = tracing::debug_span!("import", module = %name).entered();
        let initializing = self.import_lock.lock();

        // Another thread may have finished loading while we waited.
        if let Some(module) = self.cached(name) {
            tracing::trace!("loaded by another importer");
            return Ok(module);
        }
        // A loader further up this thread's stack is still initializing it.
        if let Some(module) = initializing.borrow().get(name).cloned() {
            tracing::trace!("returning partially initialized module");
            return Ok(module);
        }

        let parent = match name.parent() {
            Some(parent) => Some(self.load(&parent)?),
            None => None,
        };
        // The parent's loader may have imported this module already.
        if let Some(module) = self.cached(name) {
            return Ok(module);
        }

        let Some(registration) = self.loaders.read().get(name).cloned() else {
            tracing::debug!("no loader registered");
            return Err(ImportError::not_found(name.as_str()));
        };

        let module = Arc::new(ModuleObject::with_doc(name.clone(), registration.doc));
        initializing
            .borrow_mut()
            .insert(name.clone(), Arc::clone(&module));
        let outcome = (registration.loader)(self, &module);
        initializing.borrow_mut().remove(name);

        if let Err(err) = outcome {
            tracing::debug!(error = %err, "module loader failed");
            return Err(err);
        }

        self.modules
            .write()
            .insert(name.clone(), Arc::clone(&module));
        if let Some(parent) = parent {
            parent.set_attr(name.last_segment(), Value::Module(Arc::clone(&module)));
        }
        tracing::debug!(attributes = module.len(), "module loaded");
        Ok(module)
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleImporter for ModuleRegistry {
    fn import_module(&self, name: &ModuleName) -> Result<Arc<ModuleObject>, ImportError> {
        self.load(name)
    }
}

impl fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field("loaded", &self.loaded_names())
            .field("registered", &self.loaders.read().len())
            .finish_non_exhaustive()
    }
}
