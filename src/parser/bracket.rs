//! Bracket-expression sub-grammar (`[...]`, `[!...]`, `[^...]`).

use tracing::trace;

use crate::lexer::{ByteOffset, Span};
use crate::parser::arena::AstNodeId;
use crate::parser::ast::{ClassMember, NamedClass};
use crate::parser::error::{ParseError, ParseErrorKind};
use crate::parser::parser::{Grammar, ParseResult};

impl Grammar<'_, '_> {
    /// Parses a bracket expression; the scanner is positioned on `[`.
    pub(crate) fn parse_bracket_expression(&mut self) -> ParseResult<AstNodeId> {
        let start = self.scanner.offset();
        trace!(offset = start.value(), "bracket expression");
        let _open = self.scanner.bump()?;

        let mut negated = false;
        if let Some(next) = self.scanner.peek()?
            && (next.is('!') || next.is('^'))
        {
            let _ = self.scanner.bump()?;
            negated = true;
        }

        let mut members = Vec::new();
        let mut leading_close = false;

        loop {
            let next = match self.scanner.peek()? {
                Some(next) if !next.is('\n') => next,
                _ => return Err(self.unclosed_bracket(start, leading_close, &members)),
            };

            if next.is(']') {
                if members.is_empty() {
                    leading_close = true;
                } else {
                    let _close = self.scanner.bump()?;
                    break;
                }
            }

            if next.is('[')
                && let Some(class) = self.scan_named_class()?
            {
                members.push(ClassMember::Named(class));
                continue;
            }

            let _ = self.scanner.bump()?;
            members.push(self.parse_bracket_member(next.ch, next.offset)?);
        }

        let span = Span::new(start, self.scanner.offset());
        self.builder.char_class(negated, members, span)
    }

    /// Completes a member whose first character `low` was just consumed.
    fn parse_bracket_member(&mut self, low: char, offset: ByteOffset) -> ParseResult<ClassMember> {
        let Some(dash) = self.scanner.peek()? else {
            return Ok(ClassMember::Char(low));
        };
        if !dash.is('-') {
            return Ok(ClassMember::Char(low));
        }

        // `-` before the closing `]` is a literal member, not a range.
        let high = match self.scanner.peek_second()? {
            Some(high) if !high.is(']') && !high.is('\n') => high,
            _ => return Ok(ClassMember::Char(low)),
        };
        let _dash = self.scanner.bump()?;
        let _high = self.scanner.bump()?;

        if low > high.ch {
            return Err(ParseError::new(
                ParseErrorKind::ReversedRange { low, high: high.ch },
                Span::new(offset, self.scanner.offset()),
            ));
        }
        Ok(ClassMember::Range { low, high: high.ch })
    }

    /// Tries `[:name:]` at the scanner position.
    ///
    /// Leaves the scanner untouched and returns `None` when the text is not
    /// a complete class; the `[` is then an ordinary member.
    fn scan_named_class(&mut self) -> ParseResult<Option<NamedClass>> {
        let checkpoint = self.scanner.checkpoint();
        let start = self.scanner.offset();
        let _open = self.scanner.bump()?;

        if !self.scanner.peek()?.is_some_and(|next| next.is(':')) {
            self.scanner.rollback(checkpoint);
            return Ok(None);
        }
        let _colon = self.scanner.bump()?;

        let mut name = String::new();
        loop {
            match self.scanner.peek()? {
                Some(next) if next.is(':') => {
                    if self.scanner.peek_second()?.is_some_and(|after| after.is(']')) {
                        let _colon = self.scanner.bump()?;
                        let _close = self.scanner.bump()?;
                        break;
                    }
                    self.scanner.rollback(checkpoint);
                    return Ok(None);
                }
                Some(next) if !next.escaped && next.ch.is_ascii_alphabetic() => {
                    name.push(next.ch);
                    let _ = self.scanner.bump()?;
                }
                _ => {
                    self.scanner.rollback(checkpoint);
                    return Ok(None);
                }
            }
        }

        NamedClass::from_name(&name).map(Some).ok_or_else(|| {
            ParseError::new(
                ParseErrorKind::UnknownCharacterClass { name },
                Span::new(start, self.scanner.offset()),
            )
        })
    }

    fn unclosed_bracket(
        &self,
        start: ByteOffset,
        leading_close: bool,
        members: &[ClassMember],
    ) -> ParseError {
        let span = Span::new(start, self.scanner.offset());
        if leading_close && members == [ClassMember::Char(']')] {
            ParseError::new(ParseErrorKind::EmptyBracket, span)
        } else {
            ParseError::new(ParseErrorKind::UnterminatedBracket { start }, span)
        }
    }
}
