// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::io::{self, BufRead, Write};

/// Helper to read input from the player.
pub struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    pub fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker. Returns `None` once the input is
    /// exhausted.
    pub fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<Option<T>>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            if !self.read_input_inner(prompt)? {
                return Ok(None);
            }
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(Some(val));
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line. Returns false
    /// at end of input.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<bool> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            return Ok(false);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn retries_until_accepted() {
        let mut input = InputReader::new(Cursor::new("nope\n  YES \n"));
        let mut seen = Vec::new();
        let answer = input
            .read_input_lower(">", |line| {
                seen.push(line.to_string());
                if line == "yes" {
                    Some(true)
                } else {
                    None
                }
            })
            .unwrap();
        assert_eq!(answer, Some(true));
        assert_eq!(seen, vec!["nope", "yes"]);
    }

    #[test]
    fn end_of_input_is_none() {
        let mut input = InputReader::new(Cursor::new("bad\n"));
        let answer = input.read_input_lower(">", |_| None::<()>).unwrap();
        assert_eq!(answer, None);
    }
}
