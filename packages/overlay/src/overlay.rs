//! Decoration computation over editor state.

use crate::decoration::{place, Decoration, DecorationKind};
use crate::geometry::{GeometrySource, Viewport};
use crate::notifier::GeometryNotifier;
use mosaic_common::Disposer;
use mosaic_editor::{ActiveComponentEditor, Editor, EditorMode};
use mosaic_types::Template;
use std::cell::Cell;
use std::rc::Rc;

/// Computes every border to draw for the current hover/selection state.
///
/// Returns nothing while the editor is still loading or is previewing, when
/// no component editor is active, or when the active editor has no frame.
/// The hovered border is suppressed while the same template is selected so
/// the two never stack.
pub fn compute_decorations(
    editor: &Editor,
    viewport: &Viewport,
    geometry: &dyn GeometrySource,
) -> Vec<Decoration> {
    match editor.mode() {
        EditorMode::Preview | EditorMode::Loading => return Vec::new(),
        EditorMode::Ready | EditorMode::Interactive => {}
    }

    let active = match editor.active_component_editor() {
        Some(active) => active,
        None => return Vec::new(),
    };

    let frame = match active.active_frame() {
        Some(frame) => frame,
        None => return Vec::new(),
    };

    let mut decorations = Vec::new();

    let selected = active.tpl_event.selected.as_ref();

    if let Some(template) = selected {
        decorate(
            active,
            template,
            DecorationKind::Selected,
            viewport,
            geometry,
            frame,
            &mut decorations,
        );
    }

    if let Some(template) = active.tpl_event.hovered.as_ref() {
        let shadowed = selected.map(|s| s.id() == template.id()).unwrap_or(false);
        if !shadowed {
            decorate(
                active,
                template,
                DecorationKind::Hovered,
                viewport,
                geometry,
                frame,
                &mut decorations,
            );
        }
    }

    decorations
}

fn decorate(
    active: &ActiveComponentEditor,
    template: &Template,
    kind: DecorationKind,
    viewport: &Viewport,
    geometry: &dyn GeometrySource,
    frame: &mosaic_editor::ActiveFrame,
    out: &mut Vec<Decoration>,
) {
    let can_edit = template
        .component_ref()
        .map(|component| !component.external)
        .unwrap_or(false);
    let comment_count = active.get_comment_count(template.id());

    for element in frame.bindings().tracked_elements_for(template.id()) {
        let rect = match geometry.rect_of(element) {
            Some(rect) => rect,
            None => {
                tracing::debug!(element = %element, "no geometry for tracked element, skipping");
                continue;
            }
        };
        let placement = place(rect, viewport);
        out.push(Decoration {
            template: template.clone(),
            kind,
            left: placement.left,
            top: placement.top,
            width: placement.width,
            height: placement.height,
            overflow: placement.overflow,
            border_hidden: placement.border_hidden,
            can_edit,
            comment_count,
        });
    }
}

/// Stateful overlay surface. Subscribes to a geometry notifier on creation
/// and marks itself dirty on every pulse; the host polls
/// [`needs_refresh`](SelectionOverlay::needs_refresh) and recomputes with
/// [`refresh`](SelectionOverlay::refresh). Dropping the overlay detaches
/// the subscription.
pub struct SelectionOverlay {
    dirty: Rc<Cell<bool>>,
    _subscription: Disposer,
}

impl SelectionOverlay {
    pub fn new(notifier: &dyn GeometryNotifier) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        let subscription = notifier.subscribe(Box::new(move || flag.set(true)));
        Self {
            dirty,
            _subscription: subscription,
        }
    }

    pub fn needs_refresh(&self) -> bool {
        self.dirty.get()
    }

    /// Recomputes decorations and clears the dirty flag.
    pub fn refresh(
        &self,
        editor: &Editor,
        viewport: &Viewport,
        geometry: &dyn GeometrySource,
    ) -> Vec<Decoration> {
        self.dirty.set(false);
        compute_decorations(editor, viewport, geometry)
    }
}
