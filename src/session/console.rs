//! Line-oriented console used by the menu loop.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Reads raw lines from `input` and writes prompts and messages to `output`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes one line.
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Prints `text` without a newline and reads the answer.
    ///
    /// Returns `None` at end of input. Only the line ending is removed, the
    /// answer is otherwise taken verbatim.
    pub fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_returns_answers_then_none() {
        let mut console = Console::new(Cursor::new("first\r\n second \n"), Vec::new());

        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("first"));
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some(" second "));
        assert_eq!(console.prompt("> ").unwrap(), None);

        let (_, output) = console.into_inner();
        assert_eq!(String::from_utf8(output).unwrap(), "> > > ");
    }
}
