//! # Block Model
//!
//! Immutable, structurally shared values describing one block of a rich-text
//! document.
//!
//! ## Modules
//!
//! - **`keys`**: `BlockKey` and `EntityKey` identifiers
//! - **`inline_style`**: `InlineStyle` tag sets and the common tag names
//! - **`character_metadata`**: pooled per-character `CharacterMetadata` and the
//!   style/entity comparators
//! - **`character_list`**: `CharacterList`, the copy-on-write metadata sequence
//! - **`block_type`**: `BlockType` tags
//! - **`block_data`**: `BlockData`, the opaque per-block map
//! - **`block_node`**: the `BlockNode` read contract with derived range queries
//! - **`content_block`**: flat `ContentBlock`
//! - **`content_block_node`**: tree-linked `ContentBlockNode`
//! - **`policy`**: `CharacterListPolicy` for inconsistent construction input
//!
//! ## Sharing
//!
//! Every heap-backed field sits behind an `Arc`. Cloning a block, or deriving
//! one through a `with_*` method, copies pointers for the fields it leaves
//! alone. Nothing reachable from an existing block is ever written to, so
//! blocks can be shared freely between threads.

pub mod block_data;
pub mod block_node;
pub mod block_type;
pub mod character_list;
pub mod character_metadata;
pub mod content_block;
pub mod content_block_node;
pub mod inline_style;
pub mod keys;
pub mod policy;

pub use block_data::BlockData;
pub use block_node::BlockNode;
pub use block_type::BlockType;
pub use character_list::CharacterList;
pub use character_metadata::{CharacterMetadata, have_equal_entity, have_equal_style};
pub use content_block::{ContentBlock, ContentBlockConfig};
pub use content_block_node::{ContentBlockNode, ContentBlockNodeConfig};
pub use inline_style::InlineStyle;
pub use keys::{BlockKey, EntityKey};
pub use policy::CharacterListPolicy;
