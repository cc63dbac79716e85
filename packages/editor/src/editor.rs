//! # Editor Session
//!
//! Orchestrates the preview: owns the store, the renderer, the active
//! component editor, and the mode state machine.
//!
//! ## Mode transitions
//!
//! ```text
//! Loading --(first root mount + 200ms)--> Ready --(+200ms)--> Interactive
//! ```
//!
//! Both delays run on the injected scheduler and are cancelled if the
//! preview unmounts before they fire. `Preview` is a side state the author
//! toggles into; it suppresses the selection overlay entirely.

use crate::component_editor::ActiveComponentEditor;
use crate::errors::EditorError;
use crate::store::StateStore;
use mosaic_common::{invariant, Scheduler, Sequence, SequenceStep};
use mosaic_renderer::Renderer;
use mosaic_types::{ComponentId, Template, View};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// Delay between the first root mount and the `Ready` transition.
pub const READY_DELAY_MS: u64 = 200;
/// Additional delay between `Ready` and `Interactive`.
pub const INTERACTIVE_DELAY_MS: u64 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditorMode {
    /// Preview not mounted yet.
    Loading,
    /// First mount happened; chrome may fade in.
    Ready,
    /// Normal editing.
    Interactive,
    /// Plain preview; overlay suppressed.
    Preview,
}

#[derive(Debug)]
struct ModeState {
    mode: EditorMode,
    ready: bool,
}

pub struct Editor {
    store: StateStore,
    renderer: Renderer,
    scheduler: Rc<dyn Scheduler>,
    mode: Rc<RefCell<ModeState>>,
    ready_sequence: Option<Sequence>,
    active: Option<ActiveComponentEditor>,
}

impl Editor {
    pub fn new(store: StateStore, scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            store,
            renderer: Renderer::new(),
            scheduler,
            mode: Rc::new(RefCell::new(ModeState {
                mode: EditorMode::Loading,
                ready: false,
            })),
            ready_sequence: None,
            active: None,
        }
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut Renderer {
        &mut self.renderer
    }

    pub fn mode(&self) -> EditorMode {
        self.mode.borrow().mode
    }

    pub fn is_ready(&self) -> bool {
        self.mode.borrow().ready
    }

    pub fn set_mode(&mut self, mode: EditorMode) {
        self.mode.borrow_mut().mode = mode;
    }

    /// Open a component in the editor, creating a component editor with
    /// one active frame per document frame.
    pub fn set_active_component_editor(&mut self, component: ComponentId) -> Result<(), EditorError> {
        let exists = self.store.read(|doc| doc.component(component).is_some());
        if !exists {
            return Err(EditorError::ComponentNotFound(component.to_string()));
        }

        let frame_ids = self.store.read(|doc| {
            doc.frames.iter().map(|f| f.id).collect::<Vec<_>>()
        });

        debug!(%component, frames = frame_ids.len(), "switching active component editor");
        self.active = Some(ActiveComponentEditor::new(component, frame_ids));
        Ok(())
    }

    pub fn active_component_editor(&self) -> Option<&ActiveComponentEditor> {
        self.active.as_ref()
    }

    pub fn active_component_editor_mut(&mut self) -> Option<&mut ActiveComponentEditor> {
        self.active.as_mut()
    }

    /// Render an evaluated view into the active frame. Rendering without
    /// an active component editor or frame is a caller contract breach.
    pub fn render_active_frame(&mut self, view: &View) -> Result<(), EditorError> {
        invariant!(self.active.is_some(), "no active component editor");

        let active = self.active.as_mut().expect("checked above");
        invariant!(active.active_frame().is_some(), "no active frame");

        let frame = active.active_frame_mut().expect("checked above");
        if let Some(previous) = frame.take_handle() {
            self.renderer.unmount(previous);
        }

        let handle = self.renderer.render_root(view, frame.bindings())?;
        frame.set_handle(handle);

        // One-shot per mount: a re-render while the sequence is in flight
        // must not reschedule the timers from zero.
        if !self.mode.borrow().ready && self.ready_sequence.is_none() {
            self.start_ready_sequence();
        }

        Ok(())
    }

    /// Unmount the active frame's preview and cancel an in-flight ready
    /// sequence. Releasing the timers here is part of the contract; leaked
    /// timers are treated as a violation.
    pub fn unmount_active_frame(&mut self) {
        if let Some(active) = self.active.as_mut() {
            if let Some(frame) = active.active_frame_mut() {
                if let Some(handle) = frame.take_handle() {
                    self.renderer.unmount(handle);
                }
            }
        }

        if let Some(sequence) = self.ready_sequence.take() {
            sequence.cancel();
        }
    }

    fn start_ready_sequence(&mut self) {
        let mode = self.mode.clone();
        let ready_step = SequenceStep::new(READY_DELAY_MS, move || {
            let mut state = mode.borrow_mut();
            state.ready = true;
            state.mode = EditorMode::Ready;
        });

        let mode = self.mode.clone();
        let interactive_step = SequenceStep::new(INTERACTIVE_DELAY_MS, move || {
            mode.borrow_mut().mode = EditorMode::Interactive;
        });

        self.ready_sequence = Some(Sequence::run(
            self.scheduler.clone(),
            vec![ready_step, interactive_step],
        ));
    }

    /// Set the active frame's width inside one atomic change. No-op when
    /// there is no active frame or the frame vanished from the document.
    pub fn set_frame_width(&mut self, value: impl Into<String>) {
        self.set_frame_dimension(value.into(), true);
    }

    /// Set the active frame's height inside one atomic change.
    pub fn set_frame_height(&mut self, value: impl Into<String>) {
        self.set_frame_dimension(value.into(), false);
    }

    fn set_frame_dimension(&mut self, value: String, is_width: bool) {
        let Some(frame_id) = self
            .active
            .as_ref()
            .and_then(|active| active.active_frame())
            .map(|frame| frame.frame_id)
        else {
            return;
        };

        self.store.change(|doc| {
            let Some(frame) = doc.frame_mut(frame_id) else {
                return;
            };
            if is_width {
                frame.width = Some(value);
            } else {
                frame.height = Some(value);
            }
        });
    }

    /// The overlay's edit affordance: open the component a template
    /// invokes. External (host-supplied) components are not editable, so
    /// activating the affordance on one is a no-op rather than an error;
    /// same for non-component templates and unknown component names.
    pub fn edit_component_of(&mut self, template: &Template) {
        let Some(reference) = template.component_ref() else {
            return;
        };

        if reference.external {
            return;
        }

        let found = self
            .store
            .read(|doc| doc.find_component_by_name(&reference.name).map(|c| c.id));

        let Some(component) = found else {
            return;
        };

        // Lookup above guarantees the component exists.
        let _ = self.set_active_component_editor(component);
    }
}
