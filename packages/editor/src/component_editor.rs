//! # Active Component Editor
//!
//! Editing state for one component opened in the editor: its preview
//! frames (each with its own binding table), the current hover/selection
//! templates, and per-template comments.

use mosaic_common::Disposer;
use mosaic_renderer::{BindingTable, ElementId, RootHandle};
use mosaic_types::{ComponentId, FrameId, Template, TemplateId};
use std::collections::{BTreeMap, BTreeSet};

/// One preview frame attached to a component editor. Owns the frame's
/// binding table and, while mounted, the root handle of the rendered view.
pub struct ActiveFrame {
    pub frame_id: FrameId,
    bindings: BindingTable,
    handle: Option<RootHandle>,
}

impl ActiveFrame {
    pub fn new(frame_id: FrameId) -> Self {
        Self {
            frame_id,
            bindings: BindingTable::new(),
            handle: None,
        }
    }

    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    pub fn is_mounted(&self) -> bool {
        self.handle.is_some()
    }

    pub(crate) fn take_handle(&mut self) -> Option<RootHandle> {
        self.handle.take()
    }

    pub(crate) fn set_handle(&mut self, handle: RootHandle) {
        self.handle = Some(handle);
    }
}

/// A comment an author left on a template node.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub author: String,
    pub text: String,
}

/// Current hover/selection targets. Hover and selection are independent;
/// the overlay decides what actually renders.
#[derive(Debug, Clone, Default)]
pub struct TplEvent {
    pub hovered: Option<Template>,
    pub selected: Option<Template>,
}

pub struct ActiveComponentEditor {
    pub component: ComponentId,
    frames: Vec<ActiveFrame>,
    active_frame: Option<usize>,
    pub tpl_event: TplEvent,
    comments: BTreeMap<TemplateId, Vec<Comment>>,
    visible_comments: Option<TemplateId>,
}

impl ActiveComponentEditor {
    pub fn new(component: ComponentId, frame_ids: impl IntoIterator<Item = FrameId>) -> Self {
        let frames: Vec<ActiveFrame> = frame_ids.into_iter().map(ActiveFrame::new).collect();
        let active_frame = if frames.is_empty() { None } else { Some(0) };

        Self {
            component,
            frames,
            active_frame,
            tpl_event: TplEvent::default(),
            comments: BTreeMap::new(),
            visible_comments: None,
        }
    }

    pub fn active_frame(&self) -> Option<&ActiveFrame> {
        self.active_frame.and_then(|i| self.frames.get(i))
    }

    pub fn active_frame_mut(&mut self) -> Option<&mut ActiveFrame> {
        self.active_frame.and_then(|i| self.frames.get_mut(i))
    }

    pub fn set_active_frame(&mut self, frame_id: FrameId) {
        self.active_frame = self.frames.iter().position(|f| f.frame_id == frame_id);
    }

    pub fn frames(&self) -> &[ActiveFrame] {
        &self.frames
    }

    /// Register a rendered element under a template within the active
    /// frame. Returns an inert disposer when no frame is active (nothing
    /// to register in).
    pub fn connect_tpl_dom(
        &self,
        element: ElementId,
        template: TemplateId,
        track_overlay: bool,
    ) -> Disposer {
        match self.active_frame() {
            Some(frame) => frame.bindings().connect(element, template, track_overlay),
            None => Disposer::noop(),
        }
    }

    /// Live elements realizing a template in the active frame.
    pub fn tpl_elements(&self, template: TemplateId) -> BTreeSet<ElementId> {
        self.active_frame()
            .map(|frame| frame.bindings().elements_for(template))
            .unwrap_or_default()
    }

    pub fn set_hovered(&mut self, template: Option<Template>) {
        self.tpl_event.hovered = template;
    }

    pub fn set_selected(&mut self, template: Option<Template>) {
        self.tpl_event.selected = template;
    }

    pub fn add_comment(&mut self, template: TemplateId, comment: Comment) {
        self.comments.entry(template).or_default().push(comment);
    }

    pub fn get_comment_count(&self, template: TemplateId) -> usize {
        self.comments.get(&template).map(Vec::len).unwrap_or(0)
    }

    /// Open the comment panel for a template.
    pub fn show_comments(&mut self, template: TemplateId) {
        self.visible_comments = Some(template);
    }

    pub fn hide_comments(&mut self) {
        self.visible_comments = None;
    }

    pub fn visible_comments(&self) -> Option<TemplateId> {
        self.visible_comments
    }
}
