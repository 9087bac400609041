// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use richblock_engine::models::inline_style::{BOLD, ITALIC, UNDERLINE};
use richblock_engine::{CharacterMetadata, ContentBlockNode, ContentBlockNodeConfig, EntityKey};

/// A block of `len` characters whose style changes every `run_len` characters
/// and which carries a link entity on every fourth run.
#[allow(dead_code)]
pub fn generate_styled_block(len: usize, run_len: usize) -> ContentBlockNode {
    let palette = [
        CharacterMetadata::empty(),
        CharacterMetadata::empty().apply_style(BOLD),
        CharacterMetadata::empty().apply_style(ITALIC),
        CharacterMetadata::empty()
            .apply_style(UNDERLINE)
            .apply_entity(Some(EntityKey::from("link"))),
    ];

    let characters: Vec<CharacterMetadata> = (0..len)
        .map(|i| palette[(i / run_len.max(1)) % palette.len()].clone())
        .collect();

    ContentBlockNode::new(
        ContentBlockNodeConfig::new()
            .key("bench")
            .text("x".repeat(len))
            .character_list(characters),
    )
}

#[allow(dead_code)]
pub fn generate_plain_text(len: usize) -> String {
    "Paragraph with some content. ".repeat(len / 29 + 1)
}
