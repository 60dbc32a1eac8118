use super::command::Command;
use super::session::{Session, Transition};
use crate::config::RcConfig;
use crate::view::View;
use std::io::{self, BufRead, Write};

pub const WELCOME: &str = "Welcome to the Text Editor!";
pub const FAREWELL: &str = "Exiting Text Editor. Goodbye!";

/// Read-eval-print loop driving a [`Session`] from line input.
pub struct EditorController {
    session: Session,
    view: View,
    prompt: String,
    show_banner: bool,
}

impl EditorController {
    pub fn new(session: Session, config: &RcConfig) -> Self {
        let mut view = View::new();
        view.set_show_caret(config.show_caret);
        view.set_use_color(config.use_color);

        Self {
            session,
            view,
            prompt: config.prompt.clone(),
            show_banner: config.show_banner,
        }
    }

    /// Process lines from `input` until `q` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> io::Result<()> {
        if self.show_banner {
            self.view.message(out, WELCOME)?;
            self.view.message(out, &Session::help_text())?;
        }

        let mut line = String::new();
        loop {
            self.view.prompt(out, &self.prompt)?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                log::debug!("end of input");
                self.view.message(out, "")?;
                break;
            }

            let command_line = line.trim_end_matches(['\n', '\r']);
            if self.handle_line(command_line, out)? == Transition::Quit {
                break;
            }
        }

        self.view.message(out, FAREWELL)
    }

    fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Transition> {
        match Command::parse(line) {
            Ok(None) => return Ok(Transition::Stay),
            Ok(Some(command)) => {
                if self.session.execute(command) == Transition::Quit {
                    return Ok(Transition::Quit);
                }
            }
            Err(e) => {
                log::debug!("rejected {line:?}: {e}");
                self.view.message(out, &e.to_string())?;
            }
        }

        if let Some(status) = self.session.take_status() {
            self.view.message(out, &status)?;
        }
        self.view.render(out, &self.session.snapshot())?;
        Ok(Transition::Stay)
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document_model::BufferSnapshot;
    use std::io::Cursor;

    fn quiet_config() -> RcConfig {
        RcConfig {
            prompt: "> ".to_string(),
            show_banner: false,
            ..RcConfig::default()
        }
    }

    fn run_script(config: &RcConfig, script: &str) -> (EditorController, String) {
        let mut editor = EditorController::new(Session::new(), config);
        let mut out = Vec::new();
        editor.run(Cursor::new(script), &mut out).unwrap();
        (editor, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_scripted_session() {
        let (editor, output) = run_script(&quiet_config(), "i h\ni i\nl\nd\nq\n");

        assert_eq!(editor.session().snapshot(), BufferSnapshot::new("i", 0));
        assert_eq!(
            output,
            "> Text: h\nCursor Position: 1\n\
             > Text: hi\nCursor Position: 2\n\
             > Text: hi\nCursor Position: 1\n\
             > Text: i\nCursor Position: 0\n\
             > Exiting Text Editor. Goodbye!\n"
        );
    }

    #[test]
    fn test_empty_lines_are_skipped() {
        let (_, output) = run_script(&quiet_config(), "\n\r\nq\n");
        assert_eq!(output, "> > > Exiting Text Editor. Goodbye!\n");
    }

    #[test]
    fn test_invalid_command_keeps_state() {
        let (editor, output) = run_script(&quiet_config(), "i a\nz\nq\n");
        assert_eq!(editor.session().snapshot(), BufferSnapshot::new("a", 1));
        assert!(output.contains("Invalid command. Please try again.\nText: a\nCursor Position: 1\n"));
    }

    #[test]
    fn test_end_of_input_quits() {
        let (editor, output) = run_script(&quiet_config(), "i x");
        assert_eq!(editor.session().snapshot(), BufferSnapshot::new("x", 1));
        assert!(output.ends_with("> \nExiting Text Editor. Goodbye!\n"));
    }

    #[test]
    fn test_substitute_with_crlf_input() {
        let (editor, _) = run_script(&quiet_config(), "i a\r\ni b\r\ns a xy\r\nq\r\n");
        assert_eq!(editor.session().snapshot().text, "xyb");
    }

    #[test]
    fn test_banner_printed() {
        let config = RcConfig {
            show_banner: true,
            ..quiet_config()
        };
        let (_, output) = run_script(&config, "q\n");
        assert!(output.starts_with("Welcome to the Text Editor!\nCommands:\n- i <char>: Insert character\n"));
    }

    #[test]
    fn test_caret_config_reaches_view() {
        let config = RcConfig {
            show_caret: true,
            ..quiet_config()
        };
        let (_, output) = run_script(&config, "i a\nq\n");
        assert!(output.contains("Text: a\n       ^\nCursor Position: 1\n"));
    }
}
