use super::command::{COMMAND_HELP, Command};
use crate::document_model::{BufferSnapshot, PatternTrie, TextBuffer, WILDCARD};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Result of applying a command to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Quit,
}

/// One editing session: a text buffer plus the word dictionary.
#[derive(Debug, Default)]
pub struct Session {
    buffer: TextBuffer,
    dictionary: PatternTrie,
    status_message: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_dictionary(dictionary: PatternTrie) -> Self {
        Self {
            dictionary,
            ..Self::default()
        }
    }

    pub fn execute(&mut self, command: Command) -> Transition {
        log::debug!("execute {command:?}");

        match command {
            Command::InsertChar(ch) => self.buffer.insert_char(ch),
            Command::DeleteChar => self.buffer.delete_char_before_cursor(),
            Command::MoveLeft => self.buffer.move_cursor_left(),
            Command::MoveRight => self.buffer.move_cursor_right(),
            Command::Substitute {
                pattern,
                replacement,
            } => {
                if let Err(e) = self.buffer.search_and_replace(&pattern, &replacement) {
                    self.status_message = Some(e.to_string());
                }
            }
            Command::AddWord(word) => {
                self.dictionary.insert(&word);
                self.status_message = Some(format!(
                    "Added '{word}' to dictionary ({} words)",
                    self.dictionary.len()
                ));
            }
            Command::LookupWord(word) => {
                let found = if word.contains(WILDCARD) {
                    self.dictionary.wildcard_search(&word)
                } else {
                    self.dictionary.search(&word)
                };
                self.status_message = Some(if found {
                    format!("'{word}' found in dictionary")
                } else {
                    format!("'{word}' not found in dictionary")
                });
            }
            Command::LookupPrefix(prefix) => {
                self.status_message = Some(if self.dictionary.starts_with(&prefix) {
                    format!("Dictionary has words starting with '{prefix}'")
                } else {
                    format!("No dictionary words start with '{prefix}'")
                });
            }
            Command::Help => self.status_message = Some(Self::help_text()),
            Command::Quit => return Transition::Quit,
        }

        Transition::Stay
    }

    /// Read one word per line into the dictionary. Blank lines and lines
    /// starting with `#` are skipped. Returns the number of new words.
    pub fn load_dictionary(&mut self, path: &Path) -> io::Result<usize> {
        let reader = BufReader::new(File::open(path)?);
        let before = self.dictionary.len();

        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() && !word.starts_with('#') {
                self.dictionary.insert(word);
            }
        }

        let added = self.dictionary.len() - before;
        log::info!("loaded {added} words from {}", path.display());
        Ok(added)
    }

    pub fn snapshot(&self) -> BufferSnapshot {
        self.buffer.snapshot()
    }

    pub fn dictionary(&self) -> &PatternTrie {
        &self.dictionary
    }

    pub fn take_status(&mut self) -> Option<String> {
        self.status_message.take()
    }

    pub fn help_text() -> String {
        let mut text = String::from("Commands:");
        for (usage, description) in COMMAND_HELP {
            text.push_str(&format!("\n- {usage}: {description}"));
        }
        text
    }
}
