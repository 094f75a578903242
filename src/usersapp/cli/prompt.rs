//! Line input for the session loop.
//!
//! A TTY gets a `dialoguer` prompt; anything else (pipes, tests) is read one line per
//! answer. `None` from [`Prompter::ask`] means the input is exhausted.

use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::Input;
use std::io::{self, BufRead, Write};
use usersapp::error::{Result, UsersError};

pub trait Prompter {
    fn ask(&mut self, question: &str) -> Result<Option<String>>;
}

pub struct TerminalPrompter {
    theme: Box<dyn Theme>,
}

impl TerminalPrompter {
    pub fn new(color: bool) -> Self {
        let theme: Box<dyn Theme> = if color {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        };
        Self { theme }
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        let answer = Input::<String>::with_theme(self.theme.as_ref())
            .with_prompt(question)
            .allow_empty(true)
            .interact_text();

        match answer {
            Ok(text) => Ok(Some(text)),
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(UsersError::Prompt(e.to_string())),
        }
    }
}

pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "? {} ", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        writeln!(self.output)?;
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
