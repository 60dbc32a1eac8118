/// Document model subsystem - Core data structures and text operations
///
/// This module contains the cursor-addressed text buffer, the word
/// dictionary trie, and the literal search-and-replace routine.

pub mod pattern_trie;
pub mod search_replace;
pub mod text_buffer;

// Re-export main types for convenience
pub use pattern_trie::{PatternTrie, WILDCARD};
pub use search_replace::{ReplaceError, SearchReplace};
pub use text_buffer::{BufferSnapshot, TextBuffer};
