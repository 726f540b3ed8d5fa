//! Pattern operator characters.

use std::fmt;

/// Extglob group operator, named after the character that introduces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtGlobKind {
    /// `@(...)`: exactly one of the alternatives.
    At,
    /// `+(...)`: one or more occurrences.
    Plus,
    /// `*(...)`: zero or more occurrences.
    Star,
    /// `?(...)`: zero or one occurrence.
    Question,
    /// `!(...)`: anything except the alternatives.
    Negate,
}

impl ExtGlobKind {
    /// Maps an operator character to its group kind.
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '@' => Some(Self::At),
            '+' => Some(Self::Plus),
            '*' => Some(Self::Star),
            '?' => Some(Self::Question),
            '!' => Some(Self::Negate),
            _ => None,
        }
    }

    /// Returns the operator character written before `(`.
    pub const fn as_char(self) -> char {
        match self {
            Self::At => '@',
            Self::Plus => '+',
            Self::Star => '*',
            Self::Question => '?',
            Self::Negate => '!',
        }
    }
}

impl fmt::Display for ExtGlobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Characters that must be escaped to stay literal in raw pattern text.
pub(crate) fn needs_escape(ch: char) -> bool {
    matches!(ch, '\\' | '*' | '?' | '[' | '(' | ')' | '|' | '\n')
}

/// Characters that must be escaped to stay literal inside a bracket expression.
pub(crate) fn needs_bracket_escape(ch: char) -> bool {
    matches!(ch, '\\' | ']' | '[' | '-' | '!' | '^' | '\n')
}
