use thiserror::Error;

use crate::models::BlockKey;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BlockError {
    #[error(
        "block {key:?} has {character_len} character entries for {text_len} characters of text"
    )]
    CharacterListMismatch {
        key: BlockKey,
        text_len: usize,
        character_len: usize,
    },
}
