use std::sync::Arc;

use super::block_data::BlockData;
use super::block_node::BlockNode;
use super::block_type::BlockType;
use super::character_list::CharacterList;
use super::content_block::{ContentBlock, ContentBlockConfig};
use super::keys::BlockKey;
use super::policy::CharacterListPolicy;
use crate::error::BlockError;

/// Construction input for a [`ContentBlockNode`]: the flat block fields plus
/// tree links. Missing fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentBlockNodeConfig {
    pub block: ContentBlockConfig,
    pub parent: Option<BlockKey>,
    pub children: Option<Arc<[BlockKey]>>,
    pub prev_sibling: Option<BlockKey>,
    pub next_sibling: Option<BlockKey>,
}

impl ContentBlockNodeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(mut self, key: impl Into<BlockKey>) -> Self {
        self.block = self.block.key(key);
        self
    }

    pub fn block_type(mut self, block_type: impl Into<BlockType>) -> Self {
        self.block = self.block.block_type(block_type);
        self
    }

    pub fn text(mut self, text: impl Into<Arc<str>>) -> Self {
        self.block = self.block.text(text);
        self
    }

    pub fn character_list(mut self, character_list: impl Into<CharacterList>) -> Self {
        self.block = self.block.character_list(character_list);
        self
    }

    pub fn depth(mut self, depth: usize) -> Self {
        self.block = self.block.depth(depth);
        self
    }

    pub fn data(mut self, data: BlockData) -> Self {
        self.block = self.block.data(data);
        self
    }

    pub fn parent(mut self, parent: impl Into<BlockKey>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn children<I, K>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<BlockKey>,
    {
        self.children = Some(children.into_iter().map(Into::into).collect());
        self
    }

    pub fn prev_sibling(mut self, key: impl Into<BlockKey>) -> Self {
        self.prev_sibling = Some(key.into());
        self
    }

    pub fn next_sibling(mut self, key: impl Into<BlockKey>) -> Self {
        self.next_sibling = Some(key.into());
        self
    }
}

/// A block positioned in a block tree.
///
/// Tree links are keys only: the node never holds or resolves another node,
/// and keeping parent/child/sibling links consistent across a document is
/// the owning tree's responsibility. Nodes are immutable; the `with_*`
/// methods return a new node that shares the text, character list, data and
/// child keys of the original wherever they are unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentBlockNode {
    block: ContentBlock,
    parent: Option<BlockKey>,
    children: Arc<[BlockKey]>,
    prev_sibling: Option<BlockKey>,
    next_sibling: Option<BlockKey>,
}

impl ContentBlockNode {
    /// Builds a node, filling in defaults. Never fails; see
    /// [`ContentBlock::new`] for how inconsistent character lists are treated.
    pub fn new(config: ContentBlockNodeConfig) -> Self {
        let block = ContentBlock::new(config.block);
        Self::with_links(
            block,
            config.parent,
            config.children,
            config.prev_sibling,
            config.next_sibling,
        )
    }

    /// Builds a node, resolving a text/character-list mismatch per `policy`.
    pub fn with_policy(
        config: ContentBlockNodeConfig,
        policy: CharacterListPolicy,
    ) -> Result<Self, BlockError> {
        let block = ContentBlock::with_policy(config.block, policy)?;
        Ok(Self::with_links(
            block,
            config.parent,
            config.children,
            config.prev_sibling,
            config.next_sibling,
        ))
    }

    fn with_links(
        block: ContentBlock,
        parent: Option<BlockKey>,
        children: Option<Arc<[BlockKey]>>,
        prev_sibling: Option<BlockKey>,
        next_sibling: Option<BlockKey>,
    ) -> Self {
        Self {
            block,
            parent,
            children: children.unwrap_or_else(|| Arc::from(Vec::new())),
            prev_sibling,
            next_sibling,
        }
    }

    /// Lifts a flat block into the tree model with no links.
    pub fn from_flat(block: ContentBlock) -> Self {
        Self::with_links(block, None, None, None, None)
    }

    /// The block without its tree links.
    pub fn to_flat(&self) -> ContentBlock {
        self.block.clone()
    }

    /// Full field set; `ContentBlockNode::new(node.to_config())` rebuilds an
    /// equal node.
    pub fn to_config(&self) -> ContentBlockNodeConfig {
        ContentBlockNodeConfig {
            block: self.block.to_config(),
            parent: self.parent.clone(),
            children: Some(self.children.clone()),
            prev_sibling: self.prev_sibling.clone(),
            next_sibling: self.next_sibling.clone(),
        }
    }

    pub fn parent_key(&self) -> Option<&BlockKey> {
        self.parent.as_ref()
    }

    pub fn child_keys(&self) -> &[BlockKey] {
        &self.children
    }

    pub fn prev_sibling_key(&self) -> Option<&BlockKey> {
        self.prev_sibling.as_ref()
    }

    pub fn next_sibling_key(&self) -> Option<&BlockKey> {
        self.next_sibling.as_ref()
    }

    fn map_block(&self, f: impl FnOnce(&ContentBlock) -> ContentBlock) -> Self {
        Self {
            block: f(&self.block),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_key(&self, key: impl Into<BlockKey>) -> Self {
        self.map_block(|b| b.with_key(key))
    }

    #[must_use]
    pub fn with_type(&self, block_type: impl Into<BlockType>) -> Self {
        self.map_block(|b| b.with_type(block_type))
    }

    #[must_use]
    pub fn with_depth(&self, depth: usize) -> Self {
        self.map_block(|b| b.with_depth(depth))
    }

    #[must_use]
    pub fn with_data(&self, data: BlockData) -> Self {
        self.map_block(|b| b.with_data(data))
    }

    #[must_use]
    pub fn with_text(&self, text: impl Into<Arc<str>>) -> Self {
        self.map_block(|b| b.with_text(text))
    }

    #[must_use]
    pub fn with_character_list(&self, character_list: CharacterList) -> Self {
        self.map_block(|b| b.with_character_list(character_list))
    }

    #[must_use]
    pub fn with_parent(&self, parent: Option<BlockKey>) -> Self {
        Self {
            parent,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_children<I, K>(&self, children: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<BlockKey>,
    {
        Self {
            children: children.into_iter().map(Into::into).collect(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_prev_sibling(&self, key: Option<BlockKey>) -> Self {
        Self {
            prev_sibling: key,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_next_sibling(&self, key: Option<BlockKey>) -> Self {
        Self {
            next_sibling: key,
            ..self.clone()
        }
    }
}

impl Default for ContentBlockNode {
    fn default() -> Self {
        Self::new(ContentBlockNodeConfig::default())
    }
}

impl From<ContentBlock> for ContentBlockNode {
    fn from(block: ContentBlock) -> Self {
        Self::from_flat(block)
    }
}

impl BlockNode for ContentBlockNode {
    fn key(&self) -> &BlockKey {
        self.block.key()
    }

    fn block_type(&self) -> &BlockType {
        self.block.block_type()
    }

    fn text(&self) -> &str {
        self.block.text()
    }

    fn character_list(&self) -> &CharacterList {
        self.block.character_list()
    }

    fn length(&self) -> usize {
        self.block.length()
    }

    fn depth(&self) -> usize {
        self.block.depth()
    }

    fn data(&self) -> &BlockData {
        self.block.data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::character_metadata::CharacterMetadata;
    use crate::models::inline_style::{BOLD, ITALIC};
    use pretty_assertions::assert_eq;

    fn list_item(key: &str) -> ContentBlockNode {
        ContentBlockNode::new(
            ContentBlockNodeConfig::new()
                .key(key)
                .block_type(BlockType::UnorderedListItem)
                .text("item")
                .parent("list")
                .prev_sibling("a")
                .next_sibling("c"),
        )
    }

    #[test]
    fn defaults() {
        let node = ContentBlockNode::default();
        assert!(node.key().is_empty());
        assert_eq!(node.block_type(), &BlockType::Unstyled);
        assert_eq!(node.text(), "");
        assert_eq!(node.length(), 0);
        assert!(node.character_list().is_empty());
        assert_eq!(node.depth(), 0);
        assert!(node.data().is_empty());
        assert_eq!(node.parent_key(), None);
        assert!(node.child_keys().is_empty());
        assert_eq!(node.prev_sibling_key(), None);
        assert_eq!(node.next_sibling_key(), None);
    }

    #[test]
    fn links_are_plain_keys() {
        let list = ContentBlockNode::new(
            ContentBlockNodeConfig::new()
                .key("list")
                .children(["a", "b", "c"]),
        );
        let b = list_item("b");

        assert_eq!(
            list.child_keys(),
            &[BlockKey::from("a"), BlockKey::from("b"), BlockKey::from("c")]
        );
        assert_eq!(b.parent_key(), Some(list.key()));
        assert_eq!(b.prev_sibling_key().map(BlockKey::as_str), Some("a"));
        assert_eq!(b.next_sibling_key().map(BlockKey::as_str), Some("c"));
    }

    #[test]
    fn derived_nodes_share_unchanged_fields() {
        let bold = CharacterMetadata::empty().apply_style(BOLD);
        let node = ContentBlockNode::new(
            ContentBlockNodeConfig::new()
                .key("n")
                .text("ab")
                .character_list(vec![bold.clone(), bold])
                .children(["x"]),
        );

        let moved = node.with_parent(Some(BlockKey::from("p"))).with_depth(2);
        assert!(moved.character_list().ptr_eq(node.character_list()));
        assert_eq!(moved.child_keys().as_ptr(), node.child_keys().as_ptr());

        assert_eq!(node.parent_key(), None);
        assert_eq!(node.depth(), 0);
        assert_eq!(moved.depth(), 2);
    }

    #[test]
    fn round_trip_through_config() {
        let node = list_item("b")
            .with_data(BlockData::new().with("checked", true))
            .with_character_list(
                std::iter::repeat_n(CharacterMetadata::empty().apply_style(ITALIC), 4).collect(),
            );
        assert_eq!(ContentBlockNode::new(node.to_config()), node);
    }

    #[test]
    fn flat_conversion_drops_links() {
        let node = list_item("b");
        let flat = node.to_flat();
        assert_eq!(flat.key(), node.key());

        let lifted = ContentBlockNode::from(flat);
        assert_eq!(lifted.parent_key(), None);
        assert_eq!(lifted.text(), "item");
    }

    #[test]
    fn policy_applies_to_tree_nodes() {
        let config = ContentBlockNodeConfig::new()
            .text("abcd")
            .character_list(vec![CharacterMetadata::empty()])
            .parent("p");

        let node = ContentBlockNode::with_policy(config.clone(), CharacterListPolicy::Reconcile)
            .unwrap();
        assert_eq!(node.character_list().len(), 4);
        assert_eq!(node.parent_key().map(BlockKey::as_str), Some("p"));

        assert!(ContentBlockNode::with_policy(config, CharacterListPolicy::Reject).is_err());
    }
}
