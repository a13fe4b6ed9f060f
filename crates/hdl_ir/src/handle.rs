//! Handle parsing.
//!
//! A handle has the shape `module.path` or `module.path#attr.chain`:
//!
//! ```text
//! "asyncio.tasks#Task.cancel"
//!  ^^^^^^^^^^^^^ ^^^^^^^^^^^
//!  module ref    attribute chain (split on '.')
//! ```
//!
//! Splitting happens once, on the first `#`. Everything after it is the
//! attribute chain; a later `#` is part of an attribute name and is not
//! interpreted. A lone trailing `#` (`"foo.bar#"`) is ignored and the handle
//! refers to the module itself.

use std::fmt;
use std::str::{FromStr, Split};

use smallvec::SmallVec;

use crate::{MalformedHandle, MalformedKind, ModuleName};

/// Separates the module reference from the attribute chain.
pub const SEPARATOR: char = '#';

/// Separates segments within the module reference and the attribute chain.
pub const SEGMENT_DELIMITER: char = '.';

/// Attribute segments collected inline; most chains are one or two deep.
pub type Segments<'a> = SmallVec<[&'a str; 4]>;

/// Byte offsets of the two parts of a validated handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct Layout {
    /// End of the module reference (exclusive).
    module_end: usize,
    /// Start of a non-empty attribute chain, if any.
    chain_start: Option<usize>,
}

impl Layout {
    fn of(raw: &str) -> Result<Self, MalformedKind> {
        if raw.is_empty() {
            return Err(MalformedKind::Empty);
        }

        let (module, chain_start) = match raw.find(SEPARATOR) {
            None => (raw, None),
            Some(0) => return Err(MalformedKind::EmptyModuleReference),
            Some(pos) => {
                let chain_start = pos + SEPARATOR.len_utf8();
                let chain = (chain_start < raw.len()).then_some(chain_start);
                (&raw[..pos], chain)
            }
        };

        if let Some(index) = module.split(SEGMENT_DELIMITER).position(str::is_empty) {
            return Err(MalformedKind::EmptyModuleSegment { index });
        }

        if let Some(start) = chain_start {
            if let Some(index) = raw[start..].split(SEGMENT_DELIMITER).position(str::is_empty) {
                return Err(MalformedKind::EmptyAttributeSegment { index });
            }
        }

        Ok(Layout {
            module_end: module.len(),
            chain_start,
        })
    }
}

/// A parsed, well-formed handle borrowing its input.
///
/// Construction validates the whole handle, so the module reference is never
/// empty and every attribute segment is non-empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Handle<'a> {
    raw: &'a str,
    layout: Layout,
}

impl<'a> Handle<'a> {
    /// Parse a handle string.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedHandle`] for an empty handle, an empty module
    /// reference (`#x`), or an empty segment on either side of `#`.
    pub fn parse(raw: &'a str) -> Result<Self, MalformedHandle> {
        let layout = Layout::of(raw).map_err(|kind| MalformedHandle::new(raw, kind))?;
        Ok(Handle { raw, layout })
    }

    /// The handle exactly as given.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// The dotted module path before `#`.
    #[inline]
    pub fn module_ref(&self) -> &'a str {
        &self.raw[..self.layout.module_end]
    }

    /// The module reference as an owned [`ModuleName`].
    pub fn module_name(&self) -> ModuleName {
        ModuleName::from_validated(self.module_ref())
    }

    /// The raw attribute chain after `#`, if non-empty.
    #[inline]
    pub fn chain_str(&self) -> Option<&'a str> {
        self.layout.chain_start.map(|start| &self.raw[start..])
    }

    /// Whether the handle names something inside the module rather than the
    /// module itself.
    #[inline]
    pub fn has_attributes(&self) -> bool {
        self.layout.chain_start.is_some()
    }

    /// Attribute segments in lookup order.
    pub fn attributes(&self) -> AttrChain<'a> {
        AttrChain::new(self.chain_str())
    }

    /// Number of attribute segments (zero for a module-only handle).
    pub fn attribute_count(&self) -> usize {
        self.attributes().len()
    }

    /// Attribute segments collected into a small inline vector.
    pub fn segments(&self) -> Segments<'a> {
        self.attributes().collect()
    }

    /// Copy into an owned [`HandleBuf`] without re-validating.
    pub fn to_buf(&self) -> HandleBuf {
        HandleBuf {
            raw: self.raw.into(),
            layout: self.layout,
        }
    }
}

impl fmt::Display for Handle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}

/// Iterator over the attribute segments of a handle.
#[derive(Clone, Debug)]
pub struct AttrChain<'a> {
    inner: Option<Split<'a, char>>,
    remaining: usize,
}

impl<'a> AttrChain<'a> {
    fn new(chain: Option<&'a str>) -> Self {
        let remaining = chain.map_or(0, |c| c.matches(SEGMENT_DELIMITER).count() + 1);
        AttrChain {
            inner: chain.map(|c| c.split(SEGMENT_DELIMITER)),
            remaining,
        }
    }
}

impl<'a> Iterator for AttrChain<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let segment = self.inner.as_mut()?.next()?;
        self.remaining = self.remaining.saturating_sub(1);
        Some(segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for AttrChain<'_> {}

/// An owned, validated handle.
///
/// With the `serde` feature, this serializes as a plain string and rejects
/// malformed handles during deserialization.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct HandleBuf {
    raw: Box<str>,
    layout: Layout,
}

impl HandleBuf {
    /// Validate and take ownership of a handle string.
    pub fn new(raw: impl Into<String>) -> Result<Self, MalformedHandle> {
        let raw = raw.into();
        match Layout::of(&raw) {
            Ok(layout) => Ok(HandleBuf {
                raw: raw.into_boxed_str(),
                layout,
            }),
            Err(kind) => Err(MalformedHandle::new(raw, kind)),
        }
    }

    /// Borrow as a [`Handle`].
    #[inline]
    pub fn as_handle(&self) -> Handle<'_> {
        Handle {
            raw: &self.raw,
            layout: self.layout,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for HandleBuf {
    type Err = MalformedHandle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HandleBuf::new(s)
    }
}

impl TryFrom<String> for HandleBuf {
    type Error = MalformedHandle;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        HandleBuf::new(value)
    }
}

impl TryFrom<&str> for HandleBuf {
    type Error = MalformedHandle;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        HandleBuf::new(value)
    }
}

impl From<HandleBuf> for String {
    fn from(value: HandleBuf) -> Self {
        value.raw.into_string()
    }
}

impl AsRef<str> for HandleBuf {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for HandleBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
