use std::sync::Arc;

use super::block_data::BlockData;
use super::block_node::BlockNode;
use super::block_type::BlockType;
use super::character_list::CharacterList;
use super::character_metadata::CharacterMetadata;
use super::keys::BlockKey;
use super::policy::CharacterListPolicy;
use crate::error::BlockError;

/// Construction input for a block. Every field is optional; missing fields
/// take the block defaults and supplied ones replace them one by one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentBlockConfig {
    pub key: Option<BlockKey>,
    pub block_type: Option<BlockType>,
    pub text: Option<Arc<str>>,
    pub character_list: Option<CharacterList>,
    pub depth: Option<usize>,
    pub data: Option<BlockData>,
}

impl ContentBlockConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(mut self, key: impl Into<BlockKey>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn block_type(mut self, block_type: impl Into<BlockType>) -> Self {
        self.block_type = Some(block_type.into());
        self
    }

    pub fn text(mut self, text: impl Into<Arc<str>>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn character_list(mut self, character_list: impl Into<CharacterList>) -> Self {
        self.character_list = Some(character_list.into());
        self
    }

    pub fn depth(mut self, depth: usize) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn data(mut self, data: BlockData) -> Self {
        self.data = Some(data);
        self
    }
}

/// A block without tree links: the flat document model, where blocks are
/// only ordered and never nested.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentBlock {
    key: BlockKey,
    block_type: BlockType,
    text: Arc<str>,
    length: usize,
    character_list: CharacterList,
    depth: usize,
    data: BlockData,
}

impl ContentBlock {
    /// Builds a block, filling in defaults. Never fails.
    ///
    /// A character list whose length disagrees with the text is kept as
    /// given and reported through `log::warn!`.
    pub fn new(config: ContentBlockConfig) -> Self {
        let block = Self::with_defaults(config);
        block.warn_on_mismatch();
        block
    }

    /// Builds a block and resolves a text/character-list length mismatch
    /// according to `policy`.
    pub fn with_policy(
        config: ContentBlockConfig,
        policy: CharacterListPolicy,
    ) -> Result<Self, BlockError> {
        Self::with_defaults(config).enforce(policy)
    }

    fn with_defaults(config: ContentBlockConfig) -> Self {
        let text = config.text.unwrap_or_else(|| Arc::from(""));
        let length = text.chars().count();
        let character_list = config.character_list.unwrap_or_else(|| {
            if length == 0 {
                CharacterList::new()
            } else {
                CharacterList::repeat(&CharacterMetadata::empty(), length)
            }
        });

        Self {
            key: config.key.unwrap_or_default(),
            block_type: config.block_type.unwrap_or_default(),
            text,
            length,
            character_list,
            depth: config.depth.unwrap_or(0),
            data: config.data.unwrap_or_default(),
        }
    }

    pub(crate) fn enforce(mut self, policy: CharacterListPolicy) -> Result<Self, BlockError> {
        if self.is_consistent() {
            return Ok(self);
        }
        match policy {
            CharacterListPolicy::Trust => {
                self.warn_on_mismatch();
                Ok(self)
            }
            CharacterListPolicy::Reconcile => {
                log::debug!(
                    "resizing character list of block {:?} from {} to {}",
                    self.key,
                    self.character_list.len(),
                    self.length
                );
                self.character_list = self.character_list.resized(self.length);
                Ok(self)
            }
            CharacterListPolicy::Reject => Err(BlockError::CharacterListMismatch {
                key: self.key.clone(),
                text_len: self.length,
                character_len: self.character_list.len(),
            }),
        }
    }

    /// True when there is exactly one metadata entry per character.
    pub fn is_consistent(&self) -> bool {
        self.character_list.len() == self.length
    }

    fn warn_on_mismatch(&self) {
        if !self.is_consistent() {
            log::warn!(
                "block {:?} has {} character entries for {} characters of text",
                self.key,
                self.character_list.len(),
                self.length
            );
        }
    }

    /// Field set that rebuilds an equal block.
    pub fn to_config(&self) -> ContentBlockConfig {
        ContentBlockConfig {
            key: Some(self.key.clone()),
            block_type: Some(self.block_type.clone()),
            text: Some(self.text.clone()),
            character_list: Some(self.character_list.clone()),
            depth: Some(self.depth),
            data: Some(self.data.clone()),
        }
    }

    #[must_use]
    pub fn with_key(&self, key: impl Into<BlockKey>) -> Self {
        Self {
            key: key.into(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_type(&self, block_type: impl Into<BlockType>) -> Self {
        Self {
            block_type: block_type.into(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_depth(&self, depth: usize) -> Self {
        Self {
            depth,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_data(&self, data: BlockData) -> Self {
        Self {
            data,
            ..self.clone()
        }
    }

    /// Replaces the character list, keeping the text. No length check is
    /// made beyond the warning [`ContentBlock::new`] also emits.
    #[must_use]
    pub fn with_character_list(&self, character_list: CharacterList) -> Self {
        let block = Self {
            character_list,
            ..self.clone()
        };
        block.warn_on_mismatch();
        block
    }

    /// Replaces the text; the character list is reset to empty metadata of
    /// the new length.
    #[must_use]
    pub fn with_text(&self, text: impl Into<Arc<str>>) -> Self {
        let text = text.into();
        let length = text.chars().count();
        Self {
            character_list: CharacterList::repeat(&CharacterMetadata::empty(), length),
            text,
            length,
            ..self.clone()
        }
    }
}

impl Default for ContentBlock {
    fn default() -> Self {
        Self::new(ContentBlockConfig::default())
    }
}

impl BlockNode for ContentBlock {
    fn key(&self) -> &BlockKey {
        &self.key
    }

    fn block_type(&self) -> &BlockType {
        &self.block_type
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn character_list(&self) -> &CharacterList {
        &self.character_list
    }

    fn length(&self) -> usize {
        self.length
    }

    fn depth(&self) -> usize {
        self.depth
    }

    fn data(&self) -> &BlockData {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::inline_style::BOLD;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let block = ContentBlock::default();
        assert!(block.key().is_empty());
        assert_eq!(block.block_type(), &BlockType::Unstyled);
        assert_eq!(block.text(), "");
        assert_eq!(block.length(), 0);
        assert!(block.character_list().is_empty());
        assert_eq!(block.depth(), 0);
        assert!(block.data().is_empty());
    }

    #[test]
    fn text_alone_gets_empty_metadata() {
        let block = ContentBlock::new(ContentBlockConfig::new().text("héllo"));
        assert_eq!(block.length(), 5);
        assert_eq!(block.character_list().len(), 5);
        assert!(
            block
                .character_list()
                .iter()
                .all(|m| *m == CharacterMetadata::empty())
        );
    }

    #[test]
    fn with_text_resets_metadata() {
        let bold = CharacterMetadata::empty().apply_style(BOLD);
        let block = ContentBlock::new(
            ContentBlockConfig::new()
                .text("ab")
                .character_list(vec![bold.clone(), bold]),
        );

        let replaced = block.with_text("xyz");
        assert_eq!(replaced.length(), 3);
        assert!(replaced.inline_style_at(0).is_empty());
        assert!(block.inline_style_at(0).has(BOLD));
    }

    #[test]
    fn policies_on_mismatched_lengths() {
        let config = ContentBlockConfig::new()
            .key("k")
            .text("abc")
            .character_list(vec![CharacterMetadata::empty()]);

        let trusted = ContentBlock::with_policy(config.clone(), CharacterListPolicy::Trust).unwrap();
        assert_eq!(trusted.character_list().len(), 1);
        assert!(!trusted.is_consistent());

        let reconciled =
            ContentBlock::with_policy(config.clone(), CharacterListPolicy::Reconcile).unwrap();
        assert_eq!(reconciled.character_list().len(), 3);
        assert!(reconciled.is_consistent());

        let rejected = ContentBlock::with_policy(config, CharacterListPolicy::Reject);
        assert_eq!(
            rejected,
            Err(BlockError::CharacterListMismatch {
                key: BlockKey::from("k"),
                text_len: 3,
                character_len: 1,
            })
        );
    }

    #[test]
    fn consistent_blocks_pass_every_policy() {
        for policy in [
            CharacterListPolicy::Trust,
            CharacterListPolicy::Reconcile,
            CharacterListPolicy::Reject,
        ] {
            let block = ContentBlock::with_policy(ContentBlockConfig::new().text("ok"), policy);
            assert!(block.is_ok(), "{policy:?}");
        }
    }
}
