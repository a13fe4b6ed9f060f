//! The attribute lookup capability.

use std::fmt;
use std::sync::Arc;

use crate::{AttributeError, Value};

/// An object whose members can be looked up by name.
///
/// This is the only operation the resolver performs on live objects: it
/// never calls, indexes, or mutates them. Every built-in object kind
/// implements it, and host applications can expose their own objects by
/// implementing it and wrapping them in [`Value::Object`].
pub trait Reflectable: fmt::Debug + Send + Sync {
    /// Short type name used in messages (`module`, `type`, `function`, ...).
    fn type_name(&self) -> &str;

    /// Look up the member called `name`.
    fn get_attr(&self, name: &str) -> Result<Value, AttributeError>;

    /// Names of the members this object exposes, sorted.
    fn dir(&self) -> Vec<Arc<str>> {
        Vec::new()
    }
}
