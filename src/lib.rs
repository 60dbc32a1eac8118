//! Line-oriented text editor with a cursor-addressed buffer, literal
//! search-and-replace, and a trie-backed word dictionary.

pub mod config;
pub mod controller;
pub mod document_model;
pub mod view;

pub use controller::{Command, EditorController, Session};
pub use document_model::{BufferSnapshot, PatternTrie, ReplaceError, TextBuffer};
