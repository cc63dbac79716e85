//! # Mosaic Renderer
//!
//! Turns evaluated view trees into rendered elements and keeps the live
//! template ⇄ element binding table that selection and overlays are built
//! on.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ evaluator (external): document → View tree  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: View tree → elements              │
//! │  - exhaustive dispatch over view kinds      │
//! │  - ownership contexts threaded explicitly   │
//! │  - scoping resolver gates binding           │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ binding table: Template → {ElementId}       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Mount and unmount are the only points that mutate the binding table,
//! and the UI runtime serializes them, so connect/disconnect pairs cannot
//! interleave for the same element.

pub mod binding;
pub mod context;
pub mod element;
pub mod external;
pub mod renderer;
pub mod resolver;

#[cfg(test)]
mod tests_scoping;

pub use binding::BindingTable;
pub use context::{BindScope, ComponentBoundary, ComponentContext, RenderContext, SlotContext};
pub use element::{ElementArena, ElementId, ElementKind, RenderedElement};
pub use external::{ElementSpec, ExternalRegistry};
pub use renderer::{RenderError, RenderResult, Renderer, RootHandle};
pub use resolver::resolve_binding;
