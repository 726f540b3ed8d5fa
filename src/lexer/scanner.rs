//! Escape-aware character scanner used directly by the grammar.

use crate::lexer::cursor::{Checkpoint, Cursor};
use crate::lexer::diagnostics::ScanError;
use crate::lexer::operator::ExtGlobKind;
use crate::lexer::span::ByteOffset;

/// One scanned character with its escape state resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannedChar {
    /// Character value after escape removal.
    pub ch: char,
    /// Whether the character was written behind a `\`.
    pub escaped: bool,
    /// Offset of the first source byte (the backslash when escaped).
    pub offset: ByteOffset,
}

impl ScannedChar {
    /// Returns `true` for an unescaped occurrence of `ch`.
    pub fn is(self, ch: char) -> bool {
        !self.escaped && self.ch == ch
    }

    /// Number of source characters this scanned character occupies.
    fn source_chars(self) -> usize {
        if self.escaped { 2 } else { 1 }
    }
}

/// Character scanner over a complete pattern input.
///
/// The scanner never materializes tokens: the grammar peeks and bumps
/// characters and decides in context which ones are special.
/// `\` makes the following character literal, a newline included.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    input: &'a str,
    cursor: Cursor,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            cursor: Cursor::new(),
        }
    }

    /// Returns the scanned input.
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Returns the current byte offset.
    pub fn offset(&self) -> ByteOffset {
        self.cursor.offset()
    }

    /// Returns the current 1-based line.
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current 1-based column.
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns `true` once no characters remain.
    pub fn is_eof(&self) -> bool {
        self.cursor.is_eof(self.input)
    }

    /// Returns the next character without consuming it.
    pub fn peek(&self) -> Result<Option<ScannedChar>, ScanError> {
        let offset = self.cursor.offset();
        match self.cursor.peek_char(self.input) {
            None => Ok(None),
            Some('\\') => match self.cursor.peek_next_char(self.input) {
                Some(ch) => Ok(Some(ScannedChar {
                    ch,
                    escaped: true,
                    offset,
                })),
                None => Err(ScanError::DanglingEscape { offset }),
            },
            Some(ch) => Ok(Some(ScannedChar {
                ch,
                escaped: false,
                offset,
            })),
        }
    }

    /// Consumes and returns the next character.
    pub fn bump(&mut self) -> Result<Option<ScannedChar>, ScanError> {
        let scanned = self.peek()?;
        if let Some(scanned) = scanned {
            for _ in 0..scanned.source_chars() {
                let _ = self.cursor.advance_char(self.input);
            }
        }
        Ok(scanned)
    }

    /// Returns the character after the next one without consuming either.
    pub fn peek_second(&self) -> Result<Option<ScannedChar>, ScanError> {
        let mut ahead = *self;
        if ahead.bump()?.is_none() {
            return Ok(None);
        }
        ahead.peek()
    }

    /// Reports an unescaped extglob operator directly followed by `(`.
    pub fn peek_extglob_open(&self) -> Result<Option<ExtGlobKind>, ScanError> {
        let Some(first) = self.peek()? else {
            return Ok(None);
        };
        if first.escaped {
            return Ok(None);
        }
        let Some(kind) = ExtGlobKind::from_char(first.ch) else {
            return Ok(None);
        };

        match self.peek_second()? {
            Some(second) if second.is('(') => Ok(Some(kind)),
            _ => Ok(None),
        }
    }

    /// Captures the current position for rollback.
    pub fn checkpoint(&self) -> Checkpoint {
        self.cursor.checkpoint()
    }

    /// Restores a position captured by [`Self::checkpoint`].
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        self.cursor.rollback(checkpoint);
    }
}
