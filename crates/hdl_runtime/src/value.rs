//! Runtime values reachable through a handle.
//!
//! `Value` is what a resolved handle produces. Heap objects (modules,
//! classes, functions, host objects) are shared through `Arc`, so cloning a
//! value is cheap and two values are equal only when they are the same
//! object. Constants compare by value.

use std::fmt;
use std::sync::Arc;

use crate::{AttributeError, ClassObject, FunctionObject, ModuleObject, Reflectable};

/// Immutable scalar data stored on modules and classes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Constant {
    None,
    Bool(bool),
    Int(i64),
    Str(Arc<str>),
}

impl Constant {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::None => "NoneType",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Str(_) => "str",
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "'{s}'"),
        }
    }
}

/// Coarse category of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Module,
    Class,
    Function,
    Constant,
    Object,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::Class => "class",
            Self::Function => "function",
            Self::Constant => "constant",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A live object.
#[derive(Clone, Debug)]
pub enum Value {
    Module(Arc<ModuleObject>),
    Class(Arc<ClassObject>),
    Function(Arc<FunctionObject>),
    Constant(Constant),
    /// A host-defined object exposing members through [`Reflectable`].
    Object(Arc<dyn Reflectable>),
}

impl Value {
    pub fn string(s: &str) -> Self {
        Value::Constant(Constant::Str(Arc::from(s)))
    }

    pub fn int(n: i64) -> Self {
        Value::Constant(Constant::Int(n))
    }

    pub fn bool(b: bool) -> Self {
        Value::Constant(Constant::Bool(b))
    }

    pub fn object<T: Reflectable + 'static>(object: T) -> Self {
        Value::Object(Arc::new(object))
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Module(_) => ValueKind::Module,
            Self::Class(_) => ValueKind::Class,
            Self::Function(_) => ValueKind::Function,
            Self::Constant(_) => ValueKind::Constant,
            Self::Object(_) => ValueKind::Object,
        }
    }

    /// Identity comparison for heap objects, value comparison for constants.
    pub fn is(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Module(a), Self::Module(b)) => Arc::ptr_eq(a, b),
            (Self::Class(a), Self::Class(b)) => Arc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => Arc::ptr_eq(a, b),
            (Self::Constant(a), Self::Constant(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b)),
            _ => false,
        }
    }

    pub fn as_module(&self) -> Option<&Arc<ModuleObject>> {
        match self {
            Self::Module(module) => Some(module),
            _ => None,
        }
    }

    pub fn as_class(&self) -> Option<&Arc<ClassObject>> {
        match self {
            Self::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Arc<FunctionObject>> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    pub fn as_constant(&self) -> Option<&Constant> {
        match self {
            Self::Constant(constant) => Some(constant),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.is(other)
    }
}

impl Reflectable for Value {
    fn type_name(&self) -> &str {
        match self {
            Self::Module(module) => module.type_name(),
            Self::Class(class) => class.type_name(),
            Self::Function(function) => function.type_name(),
            Self::Constant(constant) => constant.type_name(),
            Self::Object(object) => object.type_name(),
        }
    }

    fn get_attr(&self, name: &str) -> Result<Value, AttributeError> {
        match self {
            Self::Module(module) => module.get_attr(name),
            Self::Class(class) => class.get_attr(name),
            Self::Function(function) => function.get_attr(name),
            Self::Constant(constant) => Err(AttributeError::unsupported(constant.type_name())),
            Self::Object(object) => object.get_attr(name),
        }
    }

    fn dir(&self) -> Vec<Arc<str>> {
        match self {
            Self::Module(module) => module.dir(),
            Self::Class(class) => class.dir(),
            Self::Function(function) => function.dir(),
            Self::Constant(_) => Vec::new(),
            Self::Object(object) => object.dir(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Module(module) => write!(f, "<module '{}'>", module.name()),
            Self::Class(class) => write!(f, "<class '{}'>", class.full_name()),
            Self::Function(function) => write!(f, "<function '{}'>", function.full_name()),
            Self::Constant(constant) => write!(f, "{constant}"),
            Self::Object(object) => write!(f, "<{} object>", object.type_name()),
        }
    }
}
