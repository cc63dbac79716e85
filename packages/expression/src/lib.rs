//! Inline expression editing over a pluggable parse/print grammar.
//!
//! The grammar itself lives behind [`ExpressionSyntax`]; this crate owns
//! only the editing session: seeding from printed text, the single commit
//! path, and inline parse-error recovery.

pub mod editor;
pub mod errors;
pub mod syntax;

pub use editor::{EditOutcome, InlineEditor, Interaction};
pub use errors::ParseError;
pub use syntax::ExpressionSyntax;
