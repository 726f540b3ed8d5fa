//! Library entrypoint for `shglob`.
//!
//! Parses shell glob patterns (`*`, `?`, `[...]`) and, when enabled, Bash
//! extglob groups (`@(...)`, `+(...)`, `*(...)`, `?(...)`, `!(...)`) into an
//! arena-backed AST, and renders that AST back to canonical text.
//!
//! ```
//! let patterns = shglob::parse("*.txt", false).expect("valid pattern");
//! assert_eq!(patterns.to_structural(), r#"(seq (any-seq) (lit ".txt"))"#);
//! ```

pub mod fixture;
pub mod lexer;
pub mod parser;
pub mod render;

mod stack;

pub use parser::{ParseError, ParseErrorKind, ParseOptions, Parser, PatternList, parse};
pub use render::{render_pattern, render_structural};
