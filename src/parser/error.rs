//! Parser error contracts.

use thiserror::Error;

use crate::lexer::{ByteOffset, ScanError, Span};
use crate::parser::arena::ArenaError;

/// Stable parser error categories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A `\` was the last character of the input.
    #[error("dangling escape")]
    DanglingEscape,
    /// A bracket expression reached end of word before its `]`.
    #[error("unterminated bracket expression starting at byte {start}")]
    UnterminatedBracket {
        /// Offset of the opening `[`.
        start: ByteOffset,
    },
    /// An extglob group reached end of word before its `)`.
    #[error("unterminated extglob group `{operator}(` starting at byte {start}")]
    UnterminatedGroup {
        /// Group operator character.
        operator: char,
        /// Offset of the operator character.
        start: ByteOffset,
    },
    /// A bracket expression has no members (`[]`, `[!]`, `[^]`).
    #[error("empty bracket expression")]
    EmptyBracket,
    /// A range whose low bound sorts after its high bound.
    #[error("reversed range `{low}-{high}` in bracket expression")]
    ReversedRange {
        /// Bound written before `-`.
        low: char,
        /// Bound written after `-`.
        high: char,
    },
    /// An extglob group with nothing between its parentheses.
    #[error("extglob group `{operator}()` has no alternatives")]
    EmptyGroup {
        /// Group operator character.
        operator: char,
    },
    /// A `[:name:]` class that is not a POSIX character class.
    #[error("unknown character class `[:{name}:]`")]
    UnknownCharacterClass {
        /// Name between the colons.
        name: String,
    },
    /// Extglob groups nested deeper than the configured ceiling.
    #[error("nesting too deep (max nesting {limit})")]
    NestingTooDeep {
        /// Configured nesting ceiling.
        limit: usize,
    },
    /// Pattern needs more AST nodes than the configured ceiling.
    #[error("pattern too large (max {limit} AST nodes)")]
    NodeLimitExceeded {
        /// Configured node ceiling.
        limit: usize,
    },
}

/// Parser error payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parse error at position {}: {kind}", .span.start)]
pub struct ParseError {
    /// Error category.
    pub kind: ParseErrorKind,
    /// Source span of the offending construct.
    pub span: Span,
}

impl ParseError {
    /// Creates a parser error.
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Creates an error pointing at a single offset.
    pub fn at(kind: ParseErrorKind, offset: ByteOffset) -> Self {
        Self::new(kind, Span::point(offset))
    }

    /// Replaces the error span.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Returns the byte offset where the offending construct starts.
    pub fn offset(&self) -> ByteOffset {
        self.span.start
    }

    /// Returns the 1-based line of the error within `input`.
    pub fn line_in(&self, input: &str) -> usize {
        let end = self.span.start.as_usize().min(input.len());
        input.as_bytes()[..end]
            .iter()
            .filter(|byte| **byte == b'\n')
            .count()
            + 1
    }
}

impl From<ScanError> for ParseError {
    fn from(error: ScanError) -> Self {
        match error {
            ScanError::DanglingEscape { offset } => {
                Self::at(ParseErrorKind::DanglingEscape, offset)
            }
        }
    }
}

impl From<ArenaError> for ParseError {
    fn from(error: ArenaError) -> Self {
        match error {
            ArenaError::NodeLimitExceeded { limit, .. } => {
                Self::new(ParseErrorKind::NodeLimitExceeded { limit }, Span::default())
            }
        }
    }
}
