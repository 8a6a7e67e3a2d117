use std::io::{self, BufRead, Write};

use log::warn;
use thiserror::Error;

use crate::config::{Config, Field};

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed before the {0} was entered")]
    InputClosed(Field),
    #[error("terminal i/o failed")]
    Io(#[from] io::Error),
}

/// Asks for the run settings line by line, repeating a question until its answer is valid.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for height, width and generations in that order. Consumes the prompter,
    /// so the input is released once all three answers are in.
    pub fn collect(mut self) -> Result<Config, PromptError> {
        let height = self.ask(Field::Height)?;
        let width = self.ask(Field::Width)?;
        let generations = self.ask(Field::Generations)?;
        Ok(Config::from_values(height, width, generations))
    }

    fn ask(&mut self, field: Field) -> Result<i64, PromptError> {
        let mut line = String::new();
        loop {
            write!(self.output, "{}", field.prompt())?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PromptError::InputClosed(field));
            }
            match field.parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    warn!("rejected {}: {}", field, err);
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }
}
