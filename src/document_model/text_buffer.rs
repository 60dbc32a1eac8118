use super::search_replace::{ReplaceError, SearchReplace};

/// Point-in-time copy of a buffer's text and cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferSnapshot {
    pub text: String,
    pub cursor: usize,
}

impl BufferSnapshot {
    pub fn new(text: impl Into<String>, cursor: usize) -> Self {
        Self {
            text: text.into(),
            cursor,
        }
    }
}

/// A single flat run of text with an insertion cursor.
///
/// The cursor counts characters, not bytes.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn from_string(content: String) -> Self {
        let cursor = content.chars().count();
        Self {
            text: content,
            cursor,
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        self.clamp_cursor();
        let offset = self.byte_offset(self.cursor);
        self.text.insert(offset, ch);
        self.cursor += 1;
        log::trace!("insert {ch:?}, cursor now {}", self.cursor);
    }

    /// Backspace. Does nothing at the start of the text.
    pub fn delete_char_before_cursor(&mut self) {
        self.clamp_cursor();
        if self.cursor == 0 {
            return;
        }

        let offset = self.byte_offset(self.cursor - 1);
        let removed = self.text.remove(offset);
        self.cursor -= 1;
        log::trace!("delete {removed:?}, cursor now {}", self.cursor);
    }

    pub fn move_cursor_left(&mut self) {
        self.clamp_cursor();
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.clamp_cursor();
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    /// Replace every literal occurrence of `pattern` with `replacement`.
    ///
    /// The stored cursor is left where it was, even when the text shrinks
    /// past it. The next cursor operation clamps it; `snapshot` reports it
    /// clamped.
    pub fn search_and_replace(
        &mut self,
        pattern: &str,
        replacement: &str,
    ) -> Result<usize, ReplaceError> {
        SearchReplace::replace_all(&mut self.text, pattern, replacement)
    }

    pub fn snapshot(&self) -> BufferSnapshot {
        BufferSnapshot::new(self.text.clone(), self.cursor.min(self.len()))
    }

    /// Stored cursor. May exceed `len()` right after a shrinking replace.
    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn clamp_cursor(&mut self) {
        let len = self.len();
        if self.cursor > len {
            log::debug!("clamping stale cursor {} to {len}", self.cursor);
            self.cursor = len;
        }
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(offset, _)| offset)
    }
}
