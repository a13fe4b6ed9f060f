//! HDL Runtime - Object model and module registry for the handle resolver.
//!
//! This crate provides:
//! - The [`Reflectable`] capability: "look up a member by name", the only
//!   operation performed on live objects
//! - Runtime objects: [`ModuleObject`], [`ClassObject`], [`FunctionObject`],
//!   [`Constant`], and host-defined objects, unified as [`Value`]
//! - The [`ModuleImporter`] collaborator trait
//! - [`ModuleRegistry`], a thread-safe importer with package semantics
//! - A built-in module catalogue ([`builtins`])
//!
//! # Architecture
//!
//! ```text
//! ModuleImporter::import_module("asyncio.tasks")
//!   └── ModuleRegistry
//!         ├── import parent "asyncio" (runs its loader once)
//!         ├── run loader for "asyncio.tasks" → ModuleObject
//!         └── bind as asyncio.tasks
//!                  ↓
//! Reflectable::get_attr(module, "Task") → Value::Class
//! ```

pub mod builtins;
mod class_object;
mod errors;
mod function_object;
mod importer;
mod module_object;
mod reflect;
mod registry;
mod value;

pub use class_object::{ClassBuilder, ClassObject};
pub use errors::{AttributeError, ImportError, ImportErrorKind};
pub use function_object::FunctionObject;
pub use importer::ModuleImporter;
pub use module_object::ModuleObject;
pub use reflect::Reflectable;
pub use registry::{ModuleLoader, ModuleRegistry};
pub use value::{Constant, Value, ValueKind};

pub use hdl_ir::ModuleName;
