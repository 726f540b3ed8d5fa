//! Error contracts for the scanner.

use thiserror::Error;

use crate::lexer::span::ByteOffset;

/// Fatal scanning error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanError {
    /// A `\` was the last character of the input.
    #[error("dangling escape at byte {offset}")]
    DanglingEscape {
        /// Offset of the trailing backslash.
        offset: ByteOffset,
    },
}

impl ScanError {
    /// Returns the byte offset the error points at.
    pub fn offset(self) -> ByteOffset {
        match self {
            Self::DanglingEscape { offset } => offset,
        }
    }
}
