//! Inline expression editor state machine.
//!
//! Two phases: **display**, showing the printed text of the committed
//! expression, and **editing**, a live text buffer opened on focus and
//! seeded from that printed text. Every way out of the editing phase goes
//! through one commit path: an unmodified Enter and a pointer interaction
//! outside the surface behave identically.

use crate::errors::ParseError;
use crate::syntax::ExpressionSyntax;

/// User interaction routed into the editor while a session is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Enter { shift: bool },
    OutsidePointer,
}

/// What an interaction did to the editing session.
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome<E> {
    /// Buffer parsed; the value is now committed and the session closed.
    Committed(E),
    /// Empty buffer: session closed, committed value untouched.
    Cancelled,
    /// Buffer failed to parse: session stays open with the error inline.
    Rejected(ParseError),
    /// Session still open, nothing committed (e.g. Shift+Enter newline).
    Editing,
    /// No session was open.
    Idle,
}

enum Session {
    Display,
    Editing {
        buffer: String,
        error: Option<ParseError>,
    },
}

/// Inline editor over a pluggable syntax. Owns the committed expression;
/// hosts read it back after a [`EditOutcome::Committed`].
pub struct InlineEditor<S: ExpressionSyntax> {
    syntax: S,
    value: Option<S::Expr>,
    session: Session,
}

impl<S: ExpressionSyntax> InlineEditor<S> {
    pub fn new(syntax: S, value: Option<S::Expr>) -> Self {
        Self {
            syntax,
            value,
            session: Session::Display,
        }
    }

    pub fn value(&self) -> Option<&S::Expr> {
        self.value.as_ref()
    }

    /// Printed form of the committed expression, empty when unset.
    pub fn display_text(&self) -> String {
        self.value
            .as_ref()
            .map(|expr| self.syntax.print(expr))
            .unwrap_or_default()
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.session, Session::Editing { .. })
    }

    /// Live buffer of the open session.
    pub fn buffer(&self) -> Option<&str> {
        match &self.session {
            Session::Editing { buffer, .. } => Some(buffer),
            Session::Display => None,
        }
    }

    /// Inline parse error of the open session.
    pub fn error(&self) -> Option<&ParseError> {
        match &self.session {
            Session::Editing { error, .. } => error.as_ref(),
            Session::Display => None,
        }
    }

    /// Opens an editing session seeded from the printed committed value.
    /// Focusing an already-open session keeps the current buffer.
    pub fn focus(&mut self) {
        if self.is_editing() {
            return;
        }
        self.session = Session::Editing {
            buffer: self.display_text(),
            error: None,
        };
    }

    /// Replaces the buffer. Any inline error clears; the user is retyping.
    pub fn input(&mut self, text: impl Into<String>) {
        match &mut self.session {
            Session::Editing { buffer, error } => {
                *buffer = text.into();
                *error = None;
            }
            Session::Display => {
                tracing::debug!("input outside an editing session, ignored");
            }
        }
    }

    pub fn interact(&mut self, interaction: Interaction) -> EditOutcome<S::Expr> {
        if !self.is_editing() {
            return EditOutcome::Idle;
        }

        match interaction {
            Interaction::Enter { shift: true } => {
                if let Session::Editing { buffer, .. } = &mut self.session {
                    buffer.push('\n');
                }
                EditOutcome::Editing
            }
            Interaction::Enter { shift: false } | Interaction::OutsidePointer => self.commit(),
        }
    }

    /// The committed value replaces this editor's value only here; both
    /// triggers in [`interact`](Self::interact) funnel into this.
    fn commit(&mut self) -> EditOutcome<S::Expr> {
        let buffer = match &self.session {
            Session::Editing { buffer, .. } => buffer.clone(),
            Session::Display => return EditOutcome::Idle,
        };

        if buffer.is_empty() {
            self.session = Session::Display;
            return EditOutcome::Cancelled;
        }

        match self.syntax.parse(&buffer) {
            Ok(expr) => {
                self.value = Some(expr.clone());
                self.session = Session::Display;
                EditOutcome::Committed(expr)
            }
            Err(err) => {
                if let Session::Editing { error, .. } = &mut self.session {
                    *error = Some(err.clone());
                }
                EditOutcome::Rejected(err)
            }
        }
    }

    /// Adopts an externally-changed value. While a session is open the
    /// buffer is the source of truth, so the change is dropped.
    pub fn set_external_value(&mut self, value: Option<S::Expr>) {
        if self.is_editing() {
            tracing::debug!("external value change during an edit session, ignored");
            return;
        }
        self.value = value;
    }
}
