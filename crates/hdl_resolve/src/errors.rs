//! Resolution errors.

use hdl_ir::MalformedHandle;
use hdl_runtime::{AttributeError, ImportError};

/// Structured category of a [`ResolveError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolveErrorKind {
    MalformedHandle,
    ModuleResolution,
    AttributeResolution,
}

/// Why a handle could not be resolved.
///
/// Every variant is terminal: nothing is retried and no partial result is
/// produced. The underlying import or lookup error stays reachable through
/// [`std::error::Error::source`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The handle is not syntactically valid. Nothing was imported.
    #[error(transparent)]
    Malformed(#[from] MalformedHandle),

    /// Importing the module reference failed.
    #[error("cannot import module '{module}' for handle '{handle}': {source}")]
    Module {
        handle: String,
        module: String,
        #[source]
        source: ImportError,
    },

    /// Looking up attribute segment `index` failed. Later segments were not
    /// attempted.
    #[error("cannot resolve attribute '{segment}' (segment {index}) of handle '{handle}': {source}")]
    Attribute {
        handle: String,
        segment: String,
        index: usize,
        #[source]
        source: AttributeError,
    },
}

impl ResolveError {
    pub fn kind(&self) -> ResolveErrorKind {
        match self {
            Self::Malformed(_) => ResolveErrorKind::MalformedHandle,
            Self::Module { .. } => ResolveErrorKind::ModuleResolution,
            Self::Attribute { .. } => ResolveErrorKind::AttributeResolution,
        }
    }

    /// The handle that failed, verbatim.
    pub fn handle(&self) -> &str {
        match self {
            Self::Malformed(err) => &err.handle,
            Self::Module { handle, .. } | Self::Attribute { handle, .. } => handle,
        }
    }

    /// The underlying import error, for module resolution failures.
    pub fn import_error(&self) -> Option<&ImportError> {
        match self {
            Self::Module { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Index and name of the segment that failed, for attribute failures.
    pub fn failed_segment(&self) -> Option<(usize, &str)> {
        match self {
            Self::Attribute { index, segment, .. } => Some((*index, segment.as_str())),
            _ => None,
        }
    }
}
