//! Blocking yes/no prompt.

use std::io::{self, BufRead, StdinLock};

use tracing::debug;

use super::terminal::Console;
use crate::download::Confirm;

/// Returns true only for `y` or `yes`, case-insensitive.
#[must_use]
pub fn parse_answer(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Asks `[y|N]` questions on the console and reads answers from `input`.
///
/// Empty input, end of input, a read error or anything other than `y`/`yes`
/// counts as "no".
#[derive(Debug)]
pub struct Prompter<R> {
    console: Console,
    input: R,
}

impl Prompter<StdinLock<'static>> {
    /// Prompter reading answers from standard input.
    #[must_use]
    pub fn stdin(console: Console) -> Self {
        Self::new(console, io::stdin().lock())
    }
}

impl<R: BufRead> Prompter<R> {
    /// Prompter reading answers from an arbitrary reader.
    pub fn new(console: Console, input: R) -> Self {
        Self { console, input }
    }

    /// Prints the question and blocks for one line of input.
    pub fn ask(&mut self, question: &str) -> bool {
        self.console.question(&format!("{question} [y|N] "));

        let mut line = String::new();
        let answer = match self.input.read_line(&mut line) {
            Ok(0) => {
                // EOF leaves the cursor after the question.
                let _ = self.console.term().write_line("");
                false
            }
            Ok(_) => parse_answer(&line),
            Err(e) => {
                debug!(error = %e, "failed to read answer");
                false
            }
        };
        debug!(answer, "prompt answered");
        answer
    }
}

impl<R: BufRead> Confirm for Prompter<R> {
    fn confirm(&mut self, question: &str) -> bool {
        self.ask(question)
    }
}
