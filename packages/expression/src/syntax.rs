//! Pluggable expression grammar.

use crate::errors::ParseError;

/// Parse/print pair the inline editor works against. `print` is total:
/// every expression value has a canonical text form.
pub trait ExpressionSyntax {
    type Expr: Clone + PartialEq;

    fn parse(&self, text: &str) -> Result<Self::Expr, ParseError>;
    fn print(&self, expr: &Self::Expr) -> String;
}
