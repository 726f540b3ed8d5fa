//! Parser entrypoints and the top-level sequence grammar.

use std::ops::Index;

use tracing::{debug, trace};

use crate::lexer::{ByteOffset, ScannedChar, Scanner, Span};
use crate::parser::arena::{AstArena, AstNodeId};
use crate::parser::ast::{AstBuilder, Node};
use crate::parser::error::ParseError;

/// Parser behavior options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseOptions {
    /// Recognizes `@( +( *( ?( !(` as extglob groups.
    pub extglob: bool,
    /// Maximum extglob group nesting depth.
    pub max_nesting: usize,
    /// Maximum AST nodes allowed during parsing; unbounded by default.
    pub max_ast_nodes: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            extglob: false,
            max_nesting: 256,
            max_ast_nodes: usize::MAX,
        }
    }
}

impl ParseOptions {
    /// Returns options with the extglob flag set to `extglob`.
    pub fn with_extglob(self, extglob: bool) -> Self {
        Self { extglob, ..self }
    }

    /// Returns options with a different nesting ceiling.
    pub fn with_max_nesting(self, max_nesting: usize) -> Self {
        Self {
            max_nesting,
            ..self
        }
    }

    /// Returns options with a different AST node ceiling.
    pub fn with_max_ast_nodes(self, max_ast_nodes: usize) -> Self {
        Self {
            max_ast_nodes,
            ..self
        }
    }
}

/// Successful parse output: the arena plus one root sequence per word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternList {
    arena: AstArena,
    words: Vec<AstNodeId>,
}

impl PatternList {
    fn new(max_nodes: usize) -> Self {
        Self {
            arena: AstArena::new(max_nodes),
            words: Vec::new(),
        }
    }

    /// Root [`Node::Sequence`] of every word, in input order.
    pub fn words(&self) -> &[AstNodeId] {
        &self.words
    }

    /// Returns the arena owning every node of this result.
    pub fn arena(&self) -> &AstArena {
        &self.arena
    }

    /// Returns the node behind `id`, if it belongs to this result.
    pub fn get(&self, id: AstNodeId) -> Option<&Node> {
        self.arena.get(id)
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` when the input held no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn clear(&mut self) {
        self.arena.reset();
        self.words.clear();
    }
}

impl Index<AstNodeId> for PatternList {
    type Output = Node;

    fn index(&self, id: AstNodeId) -> &Node {
        &self.arena[id]
    }
}

/// Reusable glob pattern parser.
///
/// Each parser owns its arena and its last-error slot, so independent
/// parsers can run on independent threads. A successful result borrows
/// the parser; the borrow must end before the next [`Parser::parse`] or
/// [`Parser::reset`].
#[derive(Debug, Clone)]
pub struct Parser {
    options: ParseOptions,
    output: PatternList,
    last_error: Option<ParseError>,
}

impl Parser {
    /// Creates a parser with explicit options.
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            output: PatternList::new(options.max_ast_nodes),
            last_error: None,
        }
    }

    /// Returns parser options.
    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Parses a complete input into newline-delimited pattern words.
    ///
    /// Clears the previous result and error first. On failure no partial
    /// AST is kept.
    pub fn parse(&mut self, input: &str) -> Result<&PatternList, ParseError> {
        self.reset();

        let result = {
            let builder = AstBuilder::new(&mut self.output.arena);
            Grammar::new(input, builder, self.options).parse_words()
        };

        match result {
            Ok(words) => {
                debug!(
                    words = words.len(),
                    nodes = self.output.arena.allocated_nodes(),
                    extglob = self.options.extglob,
                    "parsed pattern input"
                );
                self.output.words = words;
                Ok(&self.output)
            }
            Err(error) => {
                debug!(%error, "pattern parse failed");
                self.output.clear();
                self.last_error = Some(error.clone());
                Err(error)
            }
        }
    }

    /// Returns `true` when the most recent parse failed.
    pub fn has_error(&self) -> bool {
        self.last_error.is_some()
    }

    /// Returns the error of the most recent parse, if it failed.
    pub fn error(&self) -> Option<&ParseError> {
        self.last_error.as_ref()
    }

    /// Returns the human-readable message of the most recent failure.
    pub fn error_message(&self) -> Option<String> {
        self.last_error.as_ref().map(ToString::to_string)
    }

    /// Returns the most recent successful result (empty after a failure).
    pub fn patterns(&self) -> &PatternList {
        &self.output
    }

    /// Drops every node and clears the error slot.
    pub fn reset(&mut self) {
        self.output.clear();
        self.last_error = None;
    }

    /// Consumes the parser, keeping only its most recent result.
    pub fn into_patterns(self) -> PatternList {
        self.output
    }
}

/// Parses `input` with default limits and the given extglob flag.
pub fn parse(input: &str, extglob: bool) -> Result<PatternList, ParseError> {
    let mut parser = Parser::new(ParseOptions::default().with_extglob(extglob));
    parser.parse(input)?;
    Ok(parser.into_patterns())
}

pub(crate) type ParseResult<T> = Result<T, ParseError>;

/// Where a sequence sits, which decides its terminators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SequenceContext {
    /// Top-level word: ends at newline or end of input.
    Word,
    /// Extglob alternative: also ends at `|` or `)`.
    Alternative,
}

/// Single-parse grammar state.
pub(crate) struct Grammar<'p, 'a> {
    pub(crate) scanner: Scanner<'a>,
    pub(crate) builder: AstBuilder<'p>,
    pub(crate) options: ParseOptions,
    pub(crate) depth: usize,
}

impl<'p, 'a> Grammar<'p, 'a> {
    fn new(input: &'a str, builder: AstBuilder<'p>, options: ParseOptions) -> Self {
        Self {
            scanner: Scanner::new(input),
            builder,
            options,
            depth: 0,
        }
    }

    fn parse_words(&mut self) -> ParseResult<Vec<AstNodeId>> {
        let mut words = Vec::new();

        loop {
            self.skip_word_delimiters()?;
            if self.scanner.is_eof() {
                break;
            }
            trace!(
                offset = self.scanner.offset().value(),
                line = self.scanner.line(),
                "pattern word"
            );
            words.push(self.parse_sequence(SequenceContext::Word)?);
        }

        Ok(words)
    }

    fn skip_word_delimiters(&mut self) -> ParseResult<()> {
        while let Some(next) = self.scanner.peek()? {
            if !next.is('\n') {
                break;
            }
            let _newline = self.scanner.bump()?;
        }
        Ok(())
    }

    /// Parses literals, wildcards, brackets, and groups up to a terminator.
    pub(crate) fn parse_sequence(&mut self, context: SequenceContext) -> ParseResult<AstNodeId> {
        let start = self.scanner.offset();
        let mut children = Vec::new();
        let mut literal = LiteralRun::default();
        let mut bare_parens = 0usize;

        while let Some(next) = self.scanner.peek()? {
            if next.is('\n') {
                break;
            }
            if context == SequenceContext::Alternative
                && bare_parens == 0
                && (next.is('|') || next.is(')'))
            {
                break;
            }

            if self.options.extglob
                && let Some(kind) = self.scanner.peek_extglob_open()?
            {
                self.flush_literal(&mut literal, &mut children)?;
                children.push(self.parse_extglob_group(kind)?);
                continue;
            }

            if next.is('*') {
                self.flush_literal(&mut literal, &mut children)?;
                let span = self.bump_span(next)?;
                children.push(self.builder.any_seq(span)?);
            } else if next.is('?') {
                self.flush_literal(&mut literal, &mut children)?;
                let span = self.bump_span(next)?;
                children.push(self.builder.any_char(span)?);
            } else if next.is('[') {
                self.flush_literal(&mut literal, &mut children)?;
                children.push(self.parse_bracket_expression()?);
            } else {
                if context == SequenceContext::Alternative {
                    if next.is('(') {
                        bare_parens += 1;
                    } else if next.is(')') {
                        bare_parens = bare_parens.saturating_sub(1);
                    }
                }
                let span = self.bump_span(next)?;
                literal.push(next.ch, span);
            }
        }

        self.flush_literal(&mut literal, &mut children)?;
        let span = Span::new(start, self.scanner.offset());
        self.builder.sequence(children, span)
    }

    fn bump_span(&mut self, next: ScannedChar) -> ParseResult<Span> {
        let _ = self.scanner.bump()?;
        Ok(Span::new(next.offset, self.scanner.offset()))
    }

    fn flush_literal(
        &mut self,
        literal: &mut LiteralRun,
        children: &mut Vec<AstNodeId>,
    ) -> ParseResult<()> {
        if let Some((text, span)) = literal.take() {
            children.push(self.builder.literal(text, span)?);
        }
        Ok(())
    }
}

/// Pending run of literal characters awaiting one [`Node::Literal`].
#[derive(Debug, Default)]
struct LiteralRun {
    text: String,
    start: Option<ByteOffset>,
    end: ByteOffset,
}

impl LiteralRun {
    fn push(&mut self, ch: char, span: Span) {
        if self.start.is_none() {
            self.start = Some(span.start);
        }
        self.text.push(ch);
        self.end = span.end;
    }

    fn take(&mut self) -> Option<(String, Span)> {
        let start = self.start.take()?;
        Some((std::mem::take(&mut self.text), Span::new(start, self.end)))
    }
}
