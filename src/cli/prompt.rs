//! Line input for the interactive terminal.

use crate::errors::AppResult;
use crate::ui::messages::error;
use std::io::{self, BufRead, Write};

pub struct Prompt<R: BufRead> {
    reader: R,
}

impl<R: BufRead> Prompt<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// One trimmed line, or `None` at end of input.
    pub fn ask(&mut self, label: &str) -> AppResult<Option<String>> {
        print!("{}", label);
        io::stdout().flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask again until `parse` accepts the answer.
    pub fn ask_until<T>(
        &mut self,
        label: &str,
        parse: impl Fn(&str) -> AppResult<T>,
    ) -> AppResult<Option<T>> {
        loop {
            let Some(line) = self.ask(label)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(v) => return Ok(Some(v)),
                Err(e) if e.is_business_rule() => error(e),
                Err(e) => return Err(e),
            }
        }
    }
}
