//! Pattern scanner.
//!
//! Glob syntax is context sensitive (a `]` closes a bracket expression only
//! after its first member, a `|` separates alternatives only inside an
//! extglob group), so no token stream is produced. The grammar consults a
//! [`Scanner`] directly, one escape-resolved character at a time.

pub mod cursor;
pub mod diagnostics;
pub mod operator;
pub mod scanner;
pub mod span;

pub use cursor::{Checkpoint, Cursor};
pub use diagnostics::ScanError;
pub use operator::ExtGlobKind;
pub use scanner::{ScannedChar, Scanner};
pub use span::{ByteOffset, Span};
