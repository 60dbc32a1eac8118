use crate::document_model::BufferSnapshot;
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{self, Write};
use unicode_width::UnicodeWidthChar;

const TEXT_LABEL: &str = "Text: ";
const CURSOR_LABEL: &str = "Cursor Position: ";

/// Line-oriented renderer for buffer snapshots.
#[derive(Debug, Clone, Default)]
pub struct View {
    show_caret: bool,
    use_color: bool,
}

impl View {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_show_caret(&mut self, show: bool) {
        self.show_caret = show;
    }

    pub fn set_use_color(&mut self, enabled: bool) {
        self.use_color = enabled;
    }

    pub fn render<W: Write>(&self, out: &mut W, snapshot: &BufferSnapshot) -> io::Result<()> {
        queue!(out, Print(TEXT_LABEL), Print(&snapshot.text), Print("\n"))?;

        if self.show_caret {
            let column = TEXT_LABEL.len() + Self::display_width(&snapshot.text, snapshot.cursor);
            queue!(out, Print(" ".repeat(column)))?;
            if self.use_color {
                queue!(out, SetForegroundColor(Color::Yellow), Print("^"), ResetColor)?;
            } else {
                queue!(out, Print("^"))?;
            }
            queue!(out, Print("\n"))?;
        }

        queue!(out, Print(CURSOR_LABEL), Print(snapshot.cursor), Print("\n"))?;
        out.flush()
    }

    pub fn message<W: Write>(&self, out: &mut W, message: &str) -> io::Result<()> {
        queue!(out, Print(message), Print("\n"))?;
        out.flush()
    }

    /// Print `prompt` without a trailing newline.
    pub fn prompt<W: Write>(&self, out: &mut W, prompt: &str) -> io::Result<()> {
        queue!(out, Print(prompt))?;
        out.flush()
    }

    /// Terminal columns occupied by the first `chars` characters of `text`.
    fn display_width(text: &str, chars: usize) -> usize {
        text.chars()
            .take(chars)
            .map(|ch| ch.width().unwrap_or(0))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(view: &View, text: &str, cursor: usize) -> String {
        let mut out = Vec::new();
        view.render(&mut out, &BufferSnapshot::new(text, cursor)).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_render() {
        let view = View::new();
        assert_eq!(render(&view, "hi", 1), "Text: hi\nCursor Position: 1\n");
        assert_eq!(render(&view, "", 0), "Text: \nCursor Position: 0\n");
    }

    #[test]
    fn test_caret_render() {
        let mut view = View::new();
        view.set_show_caret(true);
        assert_eq!(
            render(&view, "abc", 1),
            "Text: abc\n       ^\nCursor Position: 1\n"
        );
    }

    #[test]
    fn test_caret_accounts_for_wide_chars() {
        let mut view = View::new();
        view.set_show_caret(true);
        let output = render(&view, "日本x", 2);
        let caret_line = output.lines().nth(1).unwrap();
        assert_eq!(caret_line, format!("{}^", " ".repeat(TEXT_LABEL.len() + 4)));
    }

    #[test]
    fn test_colored_caret_contains_marker() {
        let mut view = View::new();
        view.set_show_caret(true);
        view.set_use_color(true);
        let output = render(&view, "a", 1);
        assert!(output.contains('^'));
        assert!(output.contains('\u{1b}'));
    }

    #[test]
    fn test_message_and_prompt() {
        let view = View::new();
        let mut out = Vec::new();
        view.prompt(&mut out, "> ").unwrap();
        view.message(&mut out, "done").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "> done\n");
    }
}
