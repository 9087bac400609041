use std::collections::BTreeSet;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Common style tags. Any string is a valid tag; these are the ones the
/// built-in renderers know about.
pub const BOLD: &str = "BOLD";
pub const ITALIC: &str = "ITALIC";
pub const UNDERLINE: &str = "UNDERLINE";
pub const STRIKETHROUGH: &str = "STRIKETHROUGH";
pub const CODE: &str = "CODE";

/// Immutable set of inline style tags applied to one character.
///
/// Tags are kept sorted, so two styles holding the same tags compare equal
/// regardless of the order they were added in. Derived styles share nothing
/// with their source beyond the tag strings themselves.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InlineStyle(Arc<BTreeSet<Arc<str>>>);

impl InlineStyle {
    /// The style with no tags. All empty styles share one allocation.
    pub fn empty() -> Self {
        static EMPTY: OnceLock<InlineStyle> = OnceLock::new();
        EMPTY
            .get_or_init(|| InlineStyle(Arc::new(BTreeSet::new())))
            .clone()
    }

    pub fn has(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    #[must_use]
    pub fn add(&self, tag: &str) -> Self {
        if self.has(tag) {
            return self.clone();
        }
        let mut tags = (*self.0).clone();
        tags.insert(Arc::from(tag));
        Self(Arc::new(tags))
    }

    #[must_use]
    pub fn remove(&self, tag: &str) -> Self {
        if !self.has(tag) {
            return self.clone();
        }
        let mut tags = (*self.0).clone();
        tags.remove(tag);
        if tags.is_empty() {
            return Self::empty();
        }
        Self(Arc::new(tags))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|tag| &**tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pointer identity; a cheap pre-check before structural comparison.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for InlineStyle {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a> FromIterator<&'a str> for InlineStyle {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let tags: BTreeSet<Arc<str>> = iter.into_iter().map(Arc::from).collect();
        if tags.is_empty() {
            return Self::empty();
        }
        Self(Arc::new(tags))
    }
}

impl fmt::Debug for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
