//! Recursive-descent glob/extglob parser.
//!
//! The grammar reads characters straight from the [`crate::lexer::Scanner`]
//! and builds nodes into an [`AstArena`]. Extglob recursion carries an
//! explicit depth counter checked against [`ParseOptions::max_nesting`].

pub mod arena;
pub mod ast;
pub mod error;
pub mod parser;

mod bracket;
mod extglob;

pub use arena::{ArenaError, AstArena, AstNodeId};
pub use ast::{AstBuilder, CharClass, ClassMember, ExtGroup, NamedClass, Node};
pub use error::{ParseError, ParseErrorKind};
pub use parser::{ParseOptions, Parser, PatternList, parse};
