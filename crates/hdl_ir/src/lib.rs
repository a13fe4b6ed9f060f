//! HDL IR - Handle syntax for the handle resolver.
//!
//! A handle is a compact, human-readable reference to a loaded object:
//!
//! ```text
//! collections                 -> the `collections` module
//! collections#deque           -> `deque`, looked up on `collections`
//! foo.bar#baz.bork.qux        -> `qux` on `bork` on `baz` in module `foo.bar`
//! ```
//!
//! This crate contains only the pure, allocation-light parsing layer:
//! - [`Handle`]: a borrowed view that splits a handle into its module
//!   reference and attribute chain without copying
//! - [`HandleBuf`]: an owned, validated handle (serde-enabled with the
//!   `serde` feature, for handles stored in configuration data)
//! - [`ModuleName`]: a validated dotted module path
//! - [`MalformedHandle`]: the error for syntactically invalid handles
//!
//! # Design Philosophy
//!
//! - **Validate once**: a `Handle` that exists is well formed, so consumers
//!   iterate its segments without re-checking them
//! - **Slices, not buffers**: every accessor returns a sub-slice of the input
//! - **No lookups**: resolving a handle against live objects belongs to
//!   `hdl_resolve`; nothing here touches the module system

mod error;
mod handle;
mod module_name;

pub use error::{MalformedHandle, MalformedKind};
pub use handle::{AttrChain, Handle, HandleBuf, Segments, SEGMENT_DELIMITER, SEPARATOR};
pub use module_name::ModuleName;
