//! Pattern AST nodes and the arena-backed builder that creates them.

use crate::lexer::{ExtGlobKind, Span};
use crate::parser::arena::{AstArena, AstNodeId};
use crate::parser::error::{ParseError, ParseErrorKind};

/// One pattern AST node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Run of ordinary characters with escapes resolved.
    Literal(String),
    /// `?`: exactly one character.
    AnyChar,
    /// `*`: any run of characters, including none.
    AnySeq,
    /// Bracket expression.
    CharClass(CharClass),
    /// Extglob group.
    ExtGroup(ExtGroup),
    /// Ordered concatenation of child nodes.
    Sequence(Vec<AstNodeId>),
}

/// Bracket expression payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharClass {
    /// Set by a leading `!` or `^`.
    pub negated: bool,
    /// Members in written order; never empty.
    pub members: Vec<ClassMember>,
}

/// One member of a bracket expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassMember {
    /// A single character.
    Char(char),
    /// Inclusive range with `low <= high`.
    Range { low: char, high: char },
    /// POSIX named class such as `[:alpha:]`.
    Named(NamedClass),
}

/// POSIX character class names accepted inside bracket expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedClass {
    Alnum,
    Alpha,
    Blank,
    Cntrl,
    Digit,
    Graph,
    Lower,
    Print,
    Punct,
    Space,
    Upper,
    Xdigit,
    Word,
}

impl NamedClass {
    /// Looks up a class by the name written between `[:` and `:]`.
    pub fn from_name(name: &str) -> Option<Self> {
        let class = match name {
            "alnum" => Self::Alnum,
            "alpha" => Self::Alpha,
            "blank" => Self::Blank,
            "cntrl" => Self::Cntrl,
            "digit" => Self::Digit,
            "graph" => Self::Graph,
            "lower" => Self::Lower,
            "print" => Self::Print,
            "punct" => Self::Punct,
            "space" => Self::Space,
            "upper" => Self::Upper,
            "xdigit" => Self::Xdigit,
            "word" => Self::Word,
            _ => return None,
        };
        Some(class)
    }

    /// Returns the class name as written in patterns.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Alnum => "alnum",
            Self::Alpha => "alpha",
            Self::Blank => "blank",
            Self::Cntrl => "cntrl",
            Self::Digit => "digit",
            Self::Graph => "graph",
            Self::Lower => "lower",
            Self::Print => "print",
            Self::Punct => "punct",
            Self::Space => "space",
            Self::Upper => "upper",
            Self::Xdigit => "xdigit",
            Self::Word => "word",
        }
    }
}

/// Extglob group payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtGroup {
    /// Group operator.
    pub kind: ExtGlobKind,
    /// `|`-separated alternatives, each a [`Node::Sequence`]; never empty.
    pub alternatives: Vec<AstNodeId>,
}

/// AST builder backed by an [`AstArena`].
///
/// Builders enforce the structural invariants of each node kind and map
/// arena exhaustion to [`ParseErrorKind::NodeLimitExceeded`] positioned at
/// the end of the node that did not fit.
pub struct AstBuilder<'a> {
    arena: &'a mut AstArena,
}

impl<'a> AstBuilder<'a> {
    /// Creates an AST builder from an arena allocator.
    pub fn new(arena: &'a mut AstArena) -> Self {
        Self { arena }
    }

    /// Builds a literal node.
    pub fn literal(
        &mut self,
        text: impl Into<String>,
        span: Span,
    ) -> Result<AstNodeId, ParseError> {
        self.alloc(Node::Literal(text.into()), span)
    }

    /// Builds a `?` node.
    pub fn any_char(&mut self, span: Span) -> Result<AstNodeId, ParseError> {
        self.alloc(Node::AnyChar, span)
    }

    /// Builds a `*` node.
    pub fn any_seq(&mut self, span: Span) -> Result<AstNodeId, ParseError> {
        self.alloc(Node::AnySeq, span)
    }

    /// Builds a bracket-expression node.
    pub fn char_class(
        &mut self,
        negated: bool,
        members: Vec<ClassMember>,
        span: Span,
    ) -> Result<AstNodeId, ParseError> {
        if members.is_empty() {
            return Err(ParseError::new(ParseErrorKind::EmptyBracket, span));
        }
        if let Some((low, high)) = members.iter().find_map(|member| match *member {
            ClassMember::Range { low, high } if low > high => Some((low, high)),
            _ => None,
        }) {
            return Err(ParseError::new(
                ParseErrorKind::ReversedRange { low, high },
                span,
            ));
        }

        self.alloc(Node::CharClass(CharClass { negated, members }), span)
    }

    /// Builds an extglob group node from alternative sequences.
    pub fn ext_group(
        &mut self,
        kind: ExtGlobKind,
        alternatives: Vec<AstNodeId>,
        span: Span,
    ) -> Result<AstNodeId, ParseError> {
        if alternatives.is_empty() {
            return Err(ParseError::new(
                ParseErrorKind::EmptyGroup {
                    operator: kind.as_char(),
                },
                span,
            ));
        }

        self.alloc(Node::ExtGroup(ExtGroup { kind, alternatives }), span)
    }

    /// Builds a sequence node.
    pub fn sequence(
        &mut self,
        children: Vec<AstNodeId>,
        span: Span,
    ) -> Result<AstNodeId, ParseError> {
        self.alloc(Node::Sequence(children), span)
    }

    /// Returns current number of allocated AST nodes.
    pub fn allocated_nodes(&self) -> usize {
        self.arena.allocated_nodes()
    }

    fn alloc(&mut self, node: Node, span: Span) -> Result<AstNodeId, ParseError> {
        self.arena
            .alloc(node, span)
            .map_err(|error| ParseError::from(error).with_span(Span::point(span.end)))
    }
}
