use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use crate::SEGMENT_DELIMITER;

/// A validated, absolute dotted module path (e.g. `asyncio.tasks`).
///
/// Never empty and never contains an empty segment, so relative forms like
/// `.foo` cannot be represented. Hashes and compares like its string form,
/// which lets maps keyed by `ModuleName` be queried with a `&str`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModuleName(Arc<str>);

impl ModuleName {
    /// Parse a dotted module path.
    ///
    /// Returns `None` for empty names and names with empty segments
    /// (e.g. `.os` or `os..path`).
    pub fn parse(name: &str) -> Option<Self> {
        if name.is_empty() || name.split(SEGMENT_DELIMITER).any(str::is_empty) {
            return None;
        }
        Some(Self::from_validated(name))
    }

    pub(crate) fn from_validated(name: &str) -> Self {
        ModuleName(Arc::from(name))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.0.split(SEGMENT_DELIMITER)
    }

    /// Number of segments (`a.b.c` has depth 3).
    pub fn depth(&self) -> usize {
        self.0.matches(SEGMENT_DELIMITER).count() + 1
    }

    #[inline]
    pub fn is_top_level(&self) -> bool {
        !self.0.contains(SEGMENT_DELIMITER)
    }

    /// The enclosing package, or `None` for a top-level module.
    pub fn parent(&self) -> Option<ModuleName> {
        self.0
            .rsplit_once(SEGMENT_DELIMITER)
            .map(|(parent, _)| Self::from_validated(parent))
    }

    /// The final segment, i.e. the name the module is bound under in its
    /// parent package.
    pub fn last_segment(&self) -> &str {
        self.0
            .rsplit_once(SEGMENT_DELIMITER)
            .map_or(&*self.0, |(_, last)| last)
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ModuleName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ModuleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
