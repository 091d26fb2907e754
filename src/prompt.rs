//! Interactive console prompts.
//!
//! Generic over the reader and writer so the same code drives stdin/stdout
//! and in-memory buffers in tests.

use std::io::{self, BufRead, Write};
use tracing::trace;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one line; end of input is an error since there is nobody left to ask.
    fn read_line(&mut self, message: &str) -> io::Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a value was entered",
            ));
        }
        trace!("Prompt answer: {:?}", line.trim());
        Ok(line.trim().to_string())
    }

    /// Ask until the answer parses as a number greater than `min_value`.
    pub fn read_number_above(&mut self, message: &str, min_value: f64) -> io::Result<f64> {
        loop {
            let answer = self.read_line(message)?;
            match answer.parse::<f64>() {
                Ok(value) if value.is_finite() && value > min_value => return Ok(value),
                Ok(_) => writeln!(self.output, "Please enter a value greater than {}", min_value)?,
                Err(_) => writeln!(self.output, "Please enter a valid number")?,
            }
        }
    }

    pub fn read_positive(&mut self, message: &str) -> io::Result<f64> {
        self.read_number_above(message, 0.0)
    }

    /// `y`/`yes` (any case) confirms; anything else declines.
    pub fn confirm(&mut self, message: &str) -> io::Result<bool> {
        let answer = self.read_line(&format!("{} (y/n): ", message))?;
        Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
