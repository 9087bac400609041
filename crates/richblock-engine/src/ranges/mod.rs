//! # Range Finding
//!
//! Run-length decomposition shared by every style and entity query.
//!
//! A *run* is a maximal stretch of index-adjacent elements that a comparator
//! considers equal. Rendering walks runs instead of characters, so this scan is
//! on the hot path of every block repaint and must stay a single pass with no
//! allocation proportional to the sequence length.
//!
//! ## Modules
//!
//! - **`runs`**: the `Runs` iterator and the callback-style `find_ranges`

pub mod runs;

pub use runs::{Runs, find_ranges};
