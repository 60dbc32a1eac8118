/// Controller subsystem - Handles all user input and command execution
///
/// This module parses command lines, applies them to an editing session,
/// and drives the read-eval-print loop.

pub mod command;
pub mod editor;
pub mod session;

// Re-export public interface
pub use command::{Command, CommandError};
pub use editor::EditorController;
pub use session::{Session, Transition};
