//! HDL Resolve - turns handle strings into live objects.
//!
//! A handle names an object by module path plus an optional attribute
//! chain: `collections#deque`, `asyncio.tasks#Task`, `concurrent.futures`.
//! [`HandleResolver::dereference`] parses the handle, imports the module
//! through an injected [`ModuleImporter`](hdl_runtime::ModuleImporter), and
//! walks the chain with [`Reflectable::get_attr`](hdl_runtime::Reflectable).
//! It never evaluates expressions or calls anything it finds.
//!
//! # Errors
//!
//! | Kind | Variant |
//! |------|---------|
//! | malformed handle (`#x`, `m#a..b`, `""`) | [`ResolveError::Malformed`] |
//! | module import failed | [`ResolveError::Module`] |
//! | attribute segment missing | [`ResolveError::Attribute`] |

mod errors;
mod resolver;

pub use errors::{ResolveError, ResolveErrorKind};
pub use resolver::HandleResolver;

pub use hdl_ir::{Handle, HandleBuf, MalformedHandle, MalformedKind};
pub use hdl_runtime::{ModuleImporter, ModuleRegistry, Value};
