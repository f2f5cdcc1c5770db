use std::io::BufRead;

use crate::error::InputError;
use crate::snake::Direction;

/// Parses a move token such as `u` or `R`.
pub fn parse_direction(token: &str) -> Result<Direction, InputError> {
    token.parse()
}

/// Line-oriented reader for the answers the player types in.
pub struct Prompter<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> Prompter<R> {
    pub fn new(reader: R) -> Self {
        Prompter { reader, line: String::new() }
    }

    /// Next non-blank line, trimmed. Fails with `Closed` at end of input.
    pub fn read_line(&mut self) -> Result<&str, InputError> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Err(InputError::Closed);
            }
            if !self.line.trim().is_empty() {
                return Ok(self.line.trim());
            }
        }
    }

    pub fn read_number(&mut self) -> Result<usize, InputError> {
        let line = self.read_line()?;
        line.parse().map_err(|_| InputError::InvalidNumber(line.to_string()))
    }

    pub fn read_direction(&mut self) -> Result<Direction, InputError> {
        parse_direction(self.read_line()?)
    }
}
