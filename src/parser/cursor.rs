//! In-memory line cursor and the continuation collector.

use crate::parser::line::{classify, LineKind};

/// Read position over a file's lines. Both scanning passes use one of these.
#[derive(Debug)]
pub struct LineCursor<'a> {
    lines: &'a [String],
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(lines: &'a [String]) -> Self {
        LineCursor { lines, pos: 0 }
    }

    /// Return the next line with its zero-based index.
    pub fn next_line(&mut self) -> Option<(usize, &'a str)> {
        let line = self.lines.get(self.pos)?;
        let index = self.pos;
        self.pos += 1;
        Some((index, line.as_str()))
    }

    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).map(String::as_str)
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn rewind(&mut self) {
        self.pos = 0;
    }

    /// Lines from the current position onward.
    pub fn remaining(&self) -> &'a [String] {
        &self.lines[self.pos.min(self.lines.len())..]
    }

    /// Absorb following plain comment lines into `initial`.
    ///
    /// Each absorbed line contributes `"\n" + <text after '#' and whitespace>`.
    /// Stops without consuming at the first line that is not a plain comment
    /// (tags, shellcheck directives, shebangs, code and blank lines).
    pub fn collect_continuation(&mut self, initial: &str) -> String {
        let mut content = initial.to_string();
        while let Some(line) = self.peek() {
            let LineKind::Comment(text) = classify(line) else {
                tracing::trace!(line, "end of continuation");
                break;
            };
            if !content.is_empty() {
                content.push('\n');
            }
            content.push_str(text);
            self.pos += 1;
        }
        content
    }
}
