//! Canonical text renderings of a parsed pattern AST.
//!
//! Two styles are produced:
//!
//! - **pattern**: raw glob syntax. Literal text is re-escaped so that
//!   parsing the rendering yields the same AST.
//! - **structural**: a parenthesized, space-separated s-expression used as
//!   an equality oracle. Two ASTs render identically iff they agree node for
//!   node in shape, operator kind, and literal content.
//!
//! Both are pure and infallible for ASTs built by the parser.

use crate::lexer::operator::{needs_bracket_escape, needs_escape};
use crate::parser::{AstArena, AstNodeId, ClassMember, Node, PatternList};
use crate::stack::ensure_sufficient_stack;

/// Rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Raw glob syntax.
    Pattern,
    /// S-expression oracle form.
    Structural,
}

/// Renders every word as an s-expression, separated by single spaces.
pub fn render_structural(list: &PatternList) -> String {
    render_words(list, Style::Structural, " ")
}

/// Renders one node (and its subtree) as an s-expression.
pub fn render_node_structural(arena: &AstArena, id: AstNodeId) -> String {
    render_node(arena, id, Style::Structural)
}

/// Renders every word as glob syntax, one word per line.
pub fn render_pattern(list: &PatternList) -> String {
    render_words(list, Style::Pattern, "\n")
}

/// Renders one node (and its subtree) as glob syntax.
pub fn render_node_pattern(arena: &AstArena, id: AstNodeId) -> String {
    render_node(arena, id, Style::Pattern)
}

/// Renders one node in the given style.
pub fn render_node(arena: &AstArena, id: AstNodeId, style: Style) -> String {
    let mut renderer = Renderer::new(arena, style);
    renderer.node(id);
    renderer.out
}

fn render_words(list: &PatternList, style: Style, separator: &str) -> String {
    let mut renderer = Renderer::new(list.arena(), style);
    for (index, word) in list.words().iter().enumerate() {
        if index > 0 {
            renderer.out.push_str(separator);
        }
        renderer.node(*word);
    }
    renderer.out
}

impl PatternList {
    /// Structural rendering of every word; see [`render_structural`].
    pub fn to_structural(&self) -> String {
        render_structural(self)
    }

    /// Glob-syntax rendering of every word; see [`render_pattern`].
    pub fn to_pattern(&self) -> String {
        render_pattern(self)
    }
}

struct Renderer<'a> {
    arena: &'a AstArena,
    style: Style,
    out: String,
}

impl<'a> Renderer<'a> {
    fn new(arena: &'a AstArena, style: Style) -> Self {
        Self {
            arena,
            style,
            out: String::new(),
        }
    }

    fn node(&mut self, id: AstNodeId) {
        let arena = self.arena;
        match (&arena[id], self.style) {
            (Node::Literal(text), Style::Pattern) => {
                for ch in text.chars() {
                    if needs_escape(ch) {
                        self.out.push('\\');
                    }
                    self.out.push(ch);
                }
            }
            (Node::Literal(text), Style::Structural) => {
                self.out.push_str("(lit ");
                self.quoted(text);
                self.out.push(')');
            }
            (Node::AnyChar, Style::Pattern) => self.out.push('?'),
            (Node::AnyChar, Style::Structural) => self.out.push_str("(any-char)"),
            (Node::AnySeq, Style::Pattern) => self.out.push('*'),
            (Node::AnySeq, Style::Structural) => self.out.push_str("(any-seq)"),
            (Node::CharClass(class), Style::Pattern) => {
                self.out.push('[');
                if class.negated {
                    self.out.push('!');
                }
                for member in &class.members {
                    match *member {
                        ClassMember::Char(ch) => self.bracket_char(ch),
                        ClassMember::Range { low, high } => {
                            self.bracket_char(low);
                            self.out.push('-');
                            self.bracket_char(high);
                        }
                        ClassMember::Named(named) => {
                            self.out.push_str("[:");
                            self.out.push_str(named.name());
                            self.out.push_str(":]");
                        }
                    }
                }
                self.out.push(']');
            }
            (Node::CharClass(class), Style::Structural) => {
                self.out.push_str("(class");
                if class.negated {
                    self.out.push_str(" negated");
                }
                for member in &class.members {
                    self.out.push(' ');
                    match *member {
                        ClassMember::Char(ch) => {
                            self.out.push_str("(char ");
                            self.quoted_char(ch);
                            self.out.push(')');
                        }
                        ClassMember::Range { low, high } => {
                            self.out.push_str("(range ");
                            self.quoted_char(low);
                            self.out.push(' ');
                            self.quoted_char(high);
                            self.out.push(')');
                        }
                        ClassMember::Named(named) => {
                            self.out.push_str("(named ");
                            self.out.push_str(named.name());
                            self.out.push(')');
                        }
                    }
                }
                self.out.push(')');
            }
            (Node::ExtGroup(group), Style::Pattern) => {
                self.out.push(group.kind.as_char());
                self.out.push('(');
                for (index, alternative) in group.alternatives.iter().enumerate() {
                    if index > 0 {
                        self.out.push('|');
                    }
                    ensure_sufficient_stack(|| self.node(*alternative));
                }
                self.out.push(')');
            }
            (Node::ExtGroup(group), Style::Structural) => {
                self.out.push_str("(group ");
                self.out.push(group.kind.as_char());
                for alternative in &group.alternatives {
                    self.out.push(' ');
                    ensure_sufficient_stack(|| self.node(*alternative));
                }
                self.out.push(')');
            }
            (Node::Sequence(children), Style::Pattern) => {
                for child in children {
                    self.node(*child);
                }
            }
            (Node::Sequence(children), Style::Structural) => {
                self.out.push_str("(seq");
                for child in children {
                    self.out.push(' ');
                    self.node(*child);
                }
                self.out.push(')');
            }
        }
    }

    fn bracket_char(&mut self, ch: char) {
        if needs_bracket_escape(ch) {
            self.out.push('\\');
        }
        self.out.push(ch);
    }

    fn quoted(&mut self, text: &str) {
        self.out.push('"');
        for ch in text.chars() {
            self.escaped_char(ch);
        }
        self.out.push('"');
    }

    fn quoted_char(&mut self, ch: char) {
        self.out.push('"');
        self.escaped_char(ch);
        self.out.push('"');
    }

    fn escaped_char(&mut self, ch: char) {
        match ch {
            '"' | '\\' => {
                self.out.push('\\');
                self.out.push(ch);
            }
            '\n' => self.out.push_str("\\n"),
            '\t' => self.out.push_str("\\t"),
            _ => self.out.push(ch),
        }
    }
}
