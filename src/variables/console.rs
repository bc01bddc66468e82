use super::VariableSource;
use crate::error::SourceError;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Prompts for each value on `output` and reads the answer, one number per line, from `input`.
pub struct ConsoleSource<R, W> {
    input: R,
    output: W,
}

impl ConsoleSource<StdinLock<'static>, Stdout> {
    /// A source bound to the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> VariableSource for ConsoleSource<R, W> {
    fn value_of(&mut self, name: &str) -> Result<f64, SourceError> {
        write!(self.output, "Enter value for variable {}: ", name)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SourceError::Exhausted);
        }

        let text = line.trim();
        text.parse::<f64>().map_err(|source| SourceError::Malformed {
            input: text.to_string(),
            source,
        })
    }
}
