use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Editing
    InsertChar(char),
    DeleteChar,
    MoveLeft,
    MoveRight,
    Substitute { pattern: String, replacement: String },

    // Dictionary
    AddWord(String),
    LookupWord(String),
    LookupPrefix(String),

    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Invalid command. Please try again.")]
    Invalid(char),
    #[error("Usage: {0}")]
    Usage(&'static str),
}

pub const COMMAND_HELP: &[(&str, &str)] = &[
    ("i <char>", "Insert character"),
    ("d", "Delete character before the cursor"),
    ("l", "Move cursor left"),
    ("r", "Move cursor right"),
    ("s <pattern> <replacement>", "Search and replace"),
    ("w <word>", "Add word to the dictionary"),
    ("m <word>", "Look up word ('.' matches any character)"),
    ("p <prefix>", "Check for dictionary words with a prefix"),
    ("h", "Show this help"),
    ("q", "Quit"),
];

impl Command {
    /// Parse one input line. The first character selects the command.
    /// Returns `Ok(None)` for an empty line.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let Some(selector) = line.chars().next() else {
            return Ok(None);
        };

        let command = match selector {
            'i' => line
                .chars()
                .nth(2)
                .map(Command::InsertChar)
                .ok_or(CommandError::Usage("i <char>"))?,
            'd' => Command::DeleteChar,
            'l' => Command::MoveLeft,
            'r' => Command::MoveRight,
            's' => Self::parse_substitute(line).ok_or(CommandError::Usage("s <pattern> <replacement>"))?,
            'w' => Command::AddWord(Self::argument(line).ok_or(CommandError::Usage("w <word>"))?),
            'm' => Command::LookupWord(Self::argument(line).ok_or(CommandError::Usage("m <word>"))?),
            'p' => Command::LookupPrefix(Self::argument(line).ok_or(CommandError::Usage("p <prefix>"))?),
            'h' => Command::Help,
            'q' => Command::Quit,
            other => return Err(CommandError::Invalid(other)),
        };

        Ok(Some(command))
    }

    /// `s<anything> <pattern> <replacement>`: the pattern sits between the
    /// first two spaces, the replacement is the rest of the line.
    fn parse_substitute(line: &str) -> Option<Command> {
        let (_, rest) = line.split_once(' ')?;
        let (pattern, replacement) = rest.split_once(' ')?;
        if replacement.is_empty() {
            return None;
        }

        Some(Command::Substitute {
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
        })
    }

    /// Everything after the first space, trimmed.
    fn argument(line: &str) -> Option<String> {
        let (_, rest) = line.split_once(' ')?;
        let rest = rest.trim();
        (!rest.is_empty()).then(|| rest.to_string())
    }
}
