use serde::{Deserialize, Serialize};

/// What block construction does when a caller supplies both text and a
/// character list and their lengths disagree.
///
/// Blocks built through the defaulting path (text without a character list)
/// are always consistent; the policy only matters for explicit lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterListPolicy {
    /// Keep the caller's list as-is and log a warning. Positional accessors
    /// stay total, so a short list reads as unstyled past its end.
    #[default]
    Trust,
    /// Truncate or pad with empty metadata to match the text.
    Reconcile,
    /// Refuse to build the block.
    Reject,
}
