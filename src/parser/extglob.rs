//! Extglob group sub-grammar (`@(a|b)`, `+(...)`, `*(...)`, `?(...)`, `!(...)`).

use tracing::trace;

use crate::lexer::{ByteOffset, ExtGlobKind, Span};
use crate::parser::arena::AstNodeId;
use crate::parser::error::{ParseError, ParseErrorKind};
use crate::parser::parser::{Grammar, ParseResult, SequenceContext};
use crate::stack::ensure_sufficient_stack;

impl Grammar<'_, '_> {
    /// Parses one group; the scanner is positioned on its operator.
    ///
    /// The group is built once regardless of its kind, so `*(*(...))` and
    /// other empty-matching repetitions cost no more than their text.
    pub(crate) fn parse_extglob_group(&mut self, kind: ExtGlobKind) -> ParseResult<AstNodeId> {
        let start = self.scanner.offset();
        if self.depth >= self.options.max_nesting {
            return Err(ParseError::at(
                ParseErrorKind::NestingTooDeep {
                    limit: self.options.max_nesting,
                },
                start,
            ));
        }
        trace!(
            offset = start.value(),
            operator = %kind,
            depth = self.depth + 1,
            "extglob group"
        );

        let _operator = self.scanner.bump()?;
        let _open = self.scanner.bump()?;

        if self.scanner.peek()?.is_some_and(|next| next.is(')')) {
            let _close = self.scanner.bump()?;
            return Err(ParseError::new(
                ParseErrorKind::EmptyGroup {
                    operator: kind.as_char(),
                },
                Span::new(start, self.scanner.offset()),
            ));
        }

        self.depth += 1;
        let alternatives = ensure_sufficient_stack(|| self.parse_alternatives(kind, start));
        self.depth -= 1;
        let alternatives = alternatives?;

        let span = Span::new(start, self.scanner.offset());
        self.builder.ext_group(kind, alternatives, span)
    }

    fn parse_alternatives(
        &mut self,
        kind: ExtGlobKind,
        start: ByteOffset,
    ) -> ParseResult<Vec<AstNodeId>> {
        let mut alternatives = Vec::new();

        loop {
            alternatives.push(self.parse_sequence(SequenceContext::Alternative)?);

            match self.scanner.peek()? {
                Some(next) if next.is('|') => {
                    let _pipe = self.scanner.bump()?;
                }
                Some(next) if next.is(')') => {
                    let _close = self.scanner.bump()?;
                    return Ok(alternatives);
                }
                _ => {
                    return Err(ParseError::new(
                        ParseErrorKind::UnterminatedGroup {
                            operator: kind.as_char(),
                            start,
                        },
                        Span::new(start, self.scanner.offset()),
                    ));
                }
            }
        }
    }
}
