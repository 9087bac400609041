use std::ops::Deref;
use std::sync::Arc;

use super::character_metadata::CharacterMetadata;

/// Per-character metadata of a block, one entry per `char` of its text.
///
/// The entries live behind an `Arc`, so cloning a list (and every block
/// update that leaves the list alone) shares storage instead of copying it.
/// Updates build a new list; existing holders never observe a change.
#[derive(Clone, PartialEq, Eq)]
pub struct CharacterList(Arc<[CharacterMetadata]>);

impl CharacterList {
    pub fn new() -> Self {
        Self(Arc::from(Vec::new()))
    }

    /// `len` copies of `metadata`.
    pub fn repeat(metadata: &CharacterMetadata, len: usize) -> Self {
        Self(std::iter::repeat_n(metadata.clone(), len).collect())
    }

    pub fn get(&self, offset: usize) -> Option<&CharacterMetadata> {
        self.0.get(offset)
    }

    pub fn as_slice(&self) -> &[CharacterMetadata] {
        &self.0
    }

    /// Copy of this list with the entry at `offset` replaced.
    ///
    /// An out-of-range offset returns a clone sharing the original storage.
    #[must_use]
    pub fn with_entry(&self, offset: usize, metadata: CharacterMetadata) -> Self {
        if offset >= self.0.len() {
            return self.clone();
        }
        let mut entries = self.0.to_vec();
        entries[offset] = metadata;
        Self(Arc::from(entries))
    }

    /// Copy of this list truncated or padded with empty metadata to `len`.
    #[must_use]
    pub fn resized(&self, len: usize) -> Self {
        if len == self.0.len() {
            return self.clone();
        }
        let mut entries = self.0.to_vec();
        entries.resize(len, CharacterMetadata::empty());
        Self(Arc::from(entries))
    }

    /// True when both lists share the same storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for CharacterList {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for CharacterList {
    type Target = [CharacterMetadata];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<CharacterMetadata> for CharacterList {
    fn from_iter<I: IntoIterator<Item = CharacterMetadata>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<CharacterMetadata>> for CharacterList {
    fn from(entries: Vec<CharacterMetadata>) -> Self {
        Self(Arc::from(entries))
    }
}

impl<'a> IntoIterator for &'a CharacterList {
    type Item = &'a CharacterMetadata;
    type IntoIter = std::slice::Iter<'a, CharacterMetadata>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::fmt::Debug for CharacterList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::inline_style::BOLD;

    #[test]
    fn repeat_fills_with_the_given_metadata() {
        let list = CharacterList::repeat(&CharacterMetadata::empty(), 3);
        assert_eq!(list.len(), 3);
        assert!(list.iter().all(|m| m.ptr_eq(&CharacterMetadata::empty())));
    }

    #[test]
    fn with_entry_copies_on_write() {
        let original = CharacterList::repeat(&CharacterMetadata::empty(), 3);
        let bold = CharacterMetadata::empty().apply_style(BOLD);
        let updated = original.with_entry(1, bold.clone());

        assert_eq!(updated.get(1), Some(&bold));
        assert_eq!(original.get(1), Some(&CharacterMetadata::empty()));
        assert!(!original.ptr_eq(&updated));
    }

    #[test]
    fn out_of_range_update_shares_storage() {
        let original = CharacterList::repeat(&CharacterMetadata::empty(), 2);
        let same = original.with_entry(5, CharacterMetadata::empty().apply_style(BOLD));
        assert!(original.ptr_eq(&same));
    }

    #[test]
    fn resized_pads_and_truncates() {
        let bold = CharacterMetadata::empty().apply_style(BOLD);
        let list = CharacterList::repeat(&bold, 2);

        let padded = list.resized(4);
        assert_eq!(padded.len(), 4);
        assert_eq!(padded.get(1), Some(&bold));
        assert_eq!(padded.get(3), Some(&CharacterMetadata::empty()));

        let truncated = list.resized(1);
        assert_eq!(truncated.len(), 1);
        assert!(list.resized(2).ptr_eq(&list));
    }

    #[test]
    fn clones_share_storage() {
        let list = CharacterList::repeat(&CharacterMetadata::empty(), 10);
        assert!(list.clone().ptr_eq(&list));
    }
}
