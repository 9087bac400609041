use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;

use super::inline_style::InlineStyle;
use super::keys::EntityKey;

#[derive(Clone, PartialEq, Eq, Hash)]
struct MetadataValue {
    style: InlineStyle,
    entity: Option<EntityKey>,
}

/// Style and entity annotation for a single character.
///
/// Values are interned: [`CharacterMetadata::create`] hands out one shared
/// instance per distinct (style, entity) pair, so comparing two pooled values
/// is a pointer check. Equality still falls back to comparing contents, which
/// keeps it correct for any value regardless of where it came from.
#[derive(Clone)]
pub struct CharacterMetadata(Arc<MetadataValue>);

type Pool = Mutex<HashMap<MetadataValue, CharacterMetadata>>;

fn pool() -> &'static Pool {
    static POOL: OnceLock<Pool> = OnceLock::new();
    POOL.get_or_init(|| Mutex::new(HashMap::new()))
}

impl CharacterMetadata {
    /// Returns the pooled metadata for this style and entity.
    pub fn create(style: InlineStyle, entity: Option<EntityKey>) -> Self {
        let value = MetadataValue { style, entity };
        let mut pool = pool().lock();
        if let Some(existing) = pool.get(&value) {
            return existing.clone();
        }
        log::trace!(
            "interning character metadata style={:?} entity={:?} (pool size {})",
            value.style,
            value.entity,
            pool.len() + 1
        );
        let metadata = CharacterMetadata(Arc::new(value.clone()));
        pool.insert(value, metadata.clone());
        metadata
    }

    /// The canonical metadata with no style and no entity.
    pub fn empty() -> Self {
        static EMPTY: OnceLock<CharacterMetadata> = OnceLock::new();
        EMPTY
            .get_or_init(|| CharacterMetadata::create(InlineStyle::empty(), None))
            .clone()
    }

    pub fn style(&self) -> &InlineStyle {
        &self.0.style
    }

    pub fn entity(&self) -> Option<&EntityKey> {
        self.0.entity.as_ref()
    }

    pub fn has_style(&self, tag: &str) -> bool {
        self.0.style.has(tag)
    }

    #[must_use]
    pub fn apply_style(&self, tag: &str) -> Self {
        Self::create(self.0.style.add(tag), self.0.entity.clone())
    }

    #[must_use]
    pub fn remove_style(&self, tag: &str) -> Self {
        Self::create(self.0.style.remove(tag), self.0.entity.clone())
    }

    #[must_use]
    pub fn apply_entity(&self, entity: Option<EntityKey>) -> Self {
        Self::create(self.0.style.clone(), entity)
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for CharacterMetadata {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for CharacterMetadata {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0 == other.0
    }
}

impl Eq for CharacterMetadata {}

impl fmt::Debug for CharacterMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharacterMetadata")
            .field("style", &self.0.style)
            .field("entity", &self.0.entity)
            .finish()
    }
}

/// Style-equality: same set of style tags, entity ignored.
pub fn have_equal_style(a: &CharacterMetadata, b: &CharacterMetadata) -> bool {
    a.ptr_eq(b) || a.style().ptr_eq(b.style()) || a.style() == b.style()
}

/// Entity-equality: same entity reference (or both without one), style ignored.
pub fn have_equal_entity(a: &CharacterMetadata, b: &CharacterMetadata) -> bool {
    a.ptr_eq(b) || a.entity() == b.entity()
}
