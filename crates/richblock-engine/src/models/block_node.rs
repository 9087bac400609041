use super::block_data::BlockData;
use super::block_type::BlockType;
use super::character_list::CharacterList;
use super::character_metadata::{CharacterMetadata, have_equal_entity, have_equal_style};
use super::inline_style::InlineStyle;
use super::keys::{BlockKey, EntityKey};
use crate::ranges::find_ranges;

/// Read contract shared by flat blocks and tree nodes.
///
/// Implementors only supply field access; positional lookups and range
/// queries are derived from the character list and behave identically for
/// every block flavour.
pub trait BlockNode {
    fn key(&self) -> &BlockKey;

    fn block_type(&self) -> &BlockType;

    fn text(&self) -> &str;

    fn character_list(&self) -> &CharacterList;

    /// Text length in `char`s.
    fn length(&self) -> usize;

    fn depth(&self) -> usize;

    fn data(&self) -> &BlockData;

    /// Style of the character at `offset`, or the empty style past the end.
    fn inline_style_at(&self, offset: usize) -> InlineStyle {
        self.character_list()
            .get(offset)
            .map(|metadata| metadata.style().clone())
            .unwrap_or_default()
    }

    /// Entity of the character at `offset`; `None` past the end.
    fn entity_at(&self, offset: usize) -> Option<&EntityKey> {
        self.character_list()
            .get(offset)
            .and_then(CharacterMetadata::entity)
    }

    /// Calls `callback(start, end)` for each run of identically styled
    /// characters whose first character passes `filter`.
    fn find_style_ranges<F, C>(&self, filter: F, callback: C)
    where
        F: FnMut(&CharacterMetadata) -> bool,
        C: FnMut(usize, usize),
    {
        find_ranges(
            self.character_list().as_slice(),
            have_equal_style,
            filter,
            callback,
        );
    }

    /// Calls `callback(start, end)` for each run of characters sharing an
    /// entity whose first character passes `filter`.
    fn find_entity_ranges<F, C>(&self, filter: F, callback: C)
    where
        F: FnMut(&CharacterMetadata) -> bool,
        C: FnMut(usize, usize),
    {
        find_ranges(
            self.character_list().as_slice(),
            have_equal_entity,
            filter,
            callback,
        );
    }
}
