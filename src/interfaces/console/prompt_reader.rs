use crate::error::{RentalError, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Asks questions on a writer and reads one answer per line from a reader.
///
/// Works over any `BufRead` + `Write` pair (e.g., locked stdin/stdout, or byte
/// slices in tests).
pub struct PromptReader<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `prompt` and returns the next line with its line terminator removed.
    ///
    /// Fails with [`RentalError::InputClosed`] when the input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(RentalError::InputClosed);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Prints `prompt` and parses the trimmed answer.
    ///
    /// An answer that does not parse as `T` is a [`RentalError::TypeMismatch`].
    /// Digit separators (`2_0`) are not numbers here, even where `T` accepts them.
    pub fn ask_parsed<T: FromStr>(&mut self, prompt: &str, field: &'static str) -> Result<T> {
        let answer = self.ask(prompt)?;
        let trimmed = answer.trim();
        if trimmed.contains('_') {
            return Err(RentalError::TypeMismatch {
                field,
                input: answer,
            });
        }
        let parsed = trimmed.parse::<T>();
        parsed.map_err(|_| RentalError::TypeMismatch {
            field,
            input: answer,
        })
    }

    /// Writes a line of output without reading anything.
    pub fn say(&mut self, message: impl std::fmt::Display) -> std::io::Result<()> {
        writeln!(self.output, "{message}")
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Releases the input source and hands back the writer.
    pub fn close(self) -> W {
        self.output
    }
}
