//! Position-tracking cursor over pattern text.

use crate::lexer::span::ByteOffset;

/// Saved cursor position for bounded lookahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    offset: ByteOffset,
    line: u32,
    column: u32,
}

/// Character cursor with byte offset, line, and column tracking.
///
/// Lines and columns are 1-based; columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    offset: ByteOffset,
    line: u32,
    column: u32,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

impl Cursor {
    /// Creates a cursor at byte offset `0`.
    pub fn new() -> Self {
        Self {
            offset: ByteOffset::new(0),
            line: 1,
            column: 1,
        }
    }

    /// Returns the current byte offset.
    pub fn offset(&self) -> ByteOffset {
        self.offset
    }

    /// Returns the current 1-based line.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current 1-based column.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns `true` if the cursor is at or beyond input end.
    pub fn is_eof(&self, input: &str) -> bool {
        self.offset.as_usize() >= input.len()
    }

    /// Returns the character at cursor position.
    pub fn peek_char(&self, input: &str) -> Option<char> {
        input.get(self.offset.as_usize()..)?.chars().next()
    }

    /// Returns the character after the one at cursor position.
    pub fn peek_next_char(&self, input: &str) -> Option<char> {
        let mut chars = input.get(self.offset.as_usize()..)?.chars();
        chars.next()?;
        chars.next()
    }

    /// Consumes one character, updating line and column.
    pub fn advance_char(&mut self, input: &str) -> Option<char> {
        let ch = self.peek_char(input)?;
        self.offset = ByteOffset::from_usize(self.offset.as_usize() + ch.len_utf8());
        if ch == '\n' {
            self.line = self.line.saturating_add(1);
            self.column = 1;
        } else {
            self.column = self.column.saturating_add(1);
        }
        Some(ch)
    }

    /// Captures the current position.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }

    /// Restores a position captured by [`Self::checkpoint`].
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        self.offset = checkpoint.offset;
        self.line = checkpoint.line;
        self.column = checkpoint.column;
    }
}
