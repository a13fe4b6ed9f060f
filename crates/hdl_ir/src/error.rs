//! Errors for syntactically invalid handles.

use std::fmt;

/// What is wrong with a malformed handle.
///
/// Segment indices are zero-based and count within their own part of the
/// handle (module segments before `#`, attribute segments after it).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MalformedKind {
    /// The handle is the empty string.
    Empty,
    /// Nothing precedes the `#` separator (e.g. `#deque`).
    EmptyModuleReference,
    /// The module reference has an empty segment (e.g. `foo..bar`, `.foo`).
    EmptyModuleSegment { index: usize },
    /// The attribute chain has an empty segment (e.g. `foo#bar..baz`).
    EmptyAttributeSegment { index: usize },
}

impl fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "handle is empty"),
            Self::EmptyModuleReference => write!(f, "module reference is empty"),
            Self::EmptyModuleSegment { index } => {
                write!(f, "module reference has an empty segment at index {index}")
            }
            Self::EmptyAttributeSegment { index } => {
                write!(f, "attribute chain has an empty segment at index {index}")
            }
        }
    }
}

/// A handle string that cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("malformed handle '{handle}': {kind}")]
pub struct MalformedHandle {
    /// The offending handle, verbatim.
    pub handle: String,
    pub kind: MalformedKind,
}

impl MalformedHandle {
    #[cold]
    pub fn new(handle: impl Into<String>, kind: MalformedKind) -> Self {
        MalformedHandle {
            handle: handle.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_handle_and_reason() {
        let err = MalformedHandle::new("foo#bar..baz", MalformedKind::EmptyAttributeSegment { index: 1 });
        assert_eq!(
            err.to_string(),
            "malformed handle 'foo#bar..baz': attribute chain has an empty segment at index 1"
        );
    }

    #[test]
    fn empty_module_reference_message() {
        let err = MalformedHandle::new("#x", MalformedKind::EmptyModuleReference);
        assert_eq!(err.to_string(), "malformed handle '#x': module reference is empty");
    }
}
