//! # Mosaic Editor
//!
//! Editing session for the live preview.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ store: Document + change(fn) transactions   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: session state                       │
//! │  - active component editor + frames         │
//! │  - hover/selection templates                │
//! │  - mode machine Loading → Ready → Interactive│
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: View tree → elements + bindings   │
//! └─────────────────────────────────────────────┘
//! ```

pub mod component_editor;
pub mod document;
pub mod editor;
pub mod errors;
pub mod pipeline;
pub mod store;


pub use component_editor::{ActiveComponentEditor, ActiveFrame, Comment, TplEvent};
pub use document::Document;
pub use editor::{Editor, EditorMode, INTERACTIVE_DELAY_MS, READY_DELAY_MS};
pub use errors::EditorError;
pub use pipeline::{Evaluator, PreviewPipeline};
pub use store::StateStore;
