//! Console output for the scaffolder.
//!
//! Everything the user reads goes through an [`Output`] sink so the orchestrator can
//! be driven in tests with a [`BufferedOutput`] instead of a real terminal.

use std::cell::RefCell;

use console::{Term, style};

/// Sink for user-facing messages
pub trait Output {
    /// Print one line of text
    fn line(&self, msg: &str);

    /// Clear the visible screen
    fn clear(&self);
}

/// Terminal implementation used by the binary
pub struct ConsoleOutput {
    term: Term,
}

impl ConsoleOutput {
    #[must_use]
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for ConsoleOutput {
    fn line(&self, msg: &str) {
        if self.term.write_line(msg).is_err() {
            println!("{msg}");
        }
    }

    fn clear(&self) {
        if let Err(e) = self.term.clear_screen() {
            log::debug!("Could not clear screen: {}", e);
        }
    }
}

/// Captures lines in memory, with styling stripped
#[derive(Default)]
pub struct BufferedOutput {
    lines: RefCell<Vec<String>>,
    clears: RefCell<usize>,
}

impl BufferedOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.borrow().iter().any(|line| line.contains(needle))
    }

    #[must_use]
    pub fn clear_count(&self) -> usize {
        *self.clears.borrow()
    }
}

impl Output for BufferedOutput {
    fn line(&self, msg: &str) {
        self.lines
            .borrow_mut()
            .push(console::strip_ansi_codes(msg).into_owned());
    }

    fn clear(&self) {
        *self.clears.borrow_mut() += 1;
    }
}

/// Banner text, blue
#[must_use]
pub fn banner(msg: &str) -> String {
    style(msg).blue().bold().to_string()
}

/// Something the user should notice, like the project name
#[must_use]
pub fn highlight(msg: &str) -> String {
    style(msg).yellow().to_string()
}

/// A shell command the user is told to run, rendered as `$ cmd`
#[must_use]
pub fn command_hint(cmd: &str) -> String {
    format!("{} {}", style("$").dim(), style(cmd).cyan())
}

/// Fatal error line
#[must_use]
pub fn error(msg: &str) -> String {
    format!("{} {}", style("✗").red().bold(), style(msg).red())
}
