//! Error types for imports and attribute lookup.
//!
//! Both are plain data so they can be cloned into higher-level errors and
//! compared in tests. Factory functions are `#[cold]`; the happy path never
//! builds an error.

/// Structured category of an [`ImportError`], for matching without fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImportErrorKind {
    InvalidName,
    NotFound,
    Failed,
}

/// Failure to import a module.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    /// The requested name is not a valid dotted module path.
    #[error("invalid module name '{name}'")]
    InvalidName { name: String },

    /// No module is registered under `name`.
    ///
    /// For a dotted import this names the first missing package, so
    /// importing `no.such.module` reports `no`.
    #[error("no module named '{name}'")]
    NotFound { name: String },

    /// The module's loader ran and failed.
    #[error("error while importing '{name}': {reason}")]
    Failed { name: String, reason: String },
}

impl ImportError {
    #[cold]
    pub fn invalid_name(name: impl Into<String>) -> Self {
        ImportError::InvalidName { name: name.into() }
    }

    #[cold]
    pub fn not_found(name: impl Into<String>) -> Self {
        ImportError::NotFound { name: name.into() }
    }

    #[cold]
    pub fn failed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ImportError::Failed {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// The module name this error is about.
    pub fn name(&self) -> &str {
        match self {
            Self::InvalidName { name } | Self::NotFound { name } | Self::Failed { name, .. } => {
                name
            }
        }
    }

    pub fn kind(&self) -> ImportErrorKind {
        match self {
            Self::InvalidName { .. } => ImportErrorKind::InvalidName,
            Self::NotFound { .. } => ImportErrorKind::NotFound,
            Self::Failed { .. } => ImportErrorKind::Failed,
        }
    }
}

/// Failure to look up a named member on a value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AttributeError {
    /// The value supports lookup but has no member called `name`.
    #[error("{owner} has no attribute '{name}'")]
    Missing { owner: String, name: String },

    /// The value does not support attribute lookup at all.
    #[error("'{type_name}' object does not support attribute lookup")]
    Unsupported { type_name: String },
}

impl AttributeError {
    /// `owner` describes the value looked into, e.g. `module 'collections'`.
    #[cold]
    pub fn missing(owner: impl Into<String>, name: impl Into<String>) -> Self {
        AttributeError::Missing {
            owner: owner.into(),
            name: name.into(),
        }
    }

    #[cold]
    pub fn unsupported(type_name: impl Into<String>) -> Self {
        AttributeError::Unsupported {
            type_name: type_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_error_messages() {
        assert_eq!(
            ImportError::not_found("no").to_string(),
            "no module named 'no'"
        );
        assert_eq!(
            ImportError::failed("broken", "loader exploded").to_string(),
            "error while importing 'broken': loader exploded"
        );
        assert_eq!(
            ImportError::invalid_name("a..b").to_string(),
            "invalid module name 'a..b'"
        );
    }

    #[test]
    fn import_error_name_and_kind() {
        let err = ImportError::failed("ssl", "no certificates");
        assert_eq!(err.name(), "ssl");
        assert_eq!(err.kind(), ImportErrorKind::Failed);
        assert_eq!(ImportError::not_found("x").kind(), ImportErrorKind::NotFound);
    }

    #[test]
    fn attribute_error_messages() {
        assert_eq!(
            AttributeError::missing("module 'collections'", "NoSuchThing").to_string(),
            "module 'collections' has no attribute 'NoSuchThing'"
        );
        assert_eq!(
            AttributeError::unsupported("int").to_string(),
            "'int' object does not support attribute lookup"
        );
    }
}
