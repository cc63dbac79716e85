//! # Preview Pipeline
//!
//! The explicit re-render loop: commit a change → re-evaluate the active
//! component top-down → render the fresh view tree into the active frame.
//!
//! The evaluator is an external collaborator: it gets the current document
//! and the active component and returns a fresh view tree rooted at a
//! document component view. Every pass's output is treated as an
//! independent tree; nothing but template ids and keys is assumed stable
//! between passes.

use crate::document::Document;
use crate::editor::Editor;
use crate::errors::EditorError;
use mosaic_types::{ComponentId, View};

pub type Evaluator = Box<dyn Fn(&Document, ComponentId) -> View>;

pub struct PreviewPipeline {
    editor: Editor,
    evaluator: Evaluator,
}

impl PreviewPipeline {
    pub fn new(editor: Editor, evaluator: Evaluator) -> Self {
        Self { editor, evaluator }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    /// Re-evaluate the active component and re-render its frame.
    pub fn refresh(&mut self) -> Result<(), EditorError> {
        let Some(component) = self
            .editor
            .active_component_editor()
            .map(|active| active.component)
        else {
            return Ok(());
        };

        let view = self
            .editor
            .store()
            .read(|doc| (self.evaluator)(doc, component));

        self.editor.render_active_frame(&view)
    }

    /// Apply one atomic document change, then regenerate the preview
    /// top-down. This is the single re-render trigger; there are no
    /// fine-grained subscriptions inside the render path.
    pub fn commit(&mut self, change: impl FnOnce(&mut Document)) -> Result<(), EditorError> {
        self.editor.store().change(change);
        self.refresh()
    }
}
