//! # Binding Table
//!
//! Live mapping from template nodes to the rendered elements that realize
//! them. One table per active frame; entries are created on element mount
//! and removed by the disposer on unmount, never persisted.
//!
//! A template may map to zero, one, or many live elements (list rendering,
//! multi-frame preview).

use crate::element::ElementId;
use mosaic_common::Disposer;
use mosaic_types::TemplateId;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;
use tracing::debug;

#[derive(Default)]
struct BindingTableInner {
    // template -> element -> overlay-tracked flag
    entries: BTreeMap<TemplateId, BTreeMap<ElementId, bool>>,
}

/// Frame-scoped template ⇄ element registry. Cheap to clone (shared state).
#[derive(Clone, Default)]
pub struct BindingTable {
    inner: Rc<RefCell<BindingTableInner>>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element under a template.
    ///
    /// Idempotent: a second connect of the same `(element, template)` pair
    /// leaves exactly one entry and returns an inert disposer, so only one
    /// effective disposer exists per pair. The returned disposer removes
    /// the entry and runs on drop, which ties removal to the renderer's
    /// unmount lifecycle.
    pub fn connect(
        &self,
        element: ElementId,
        template: TemplateId,
        track_overlay: bool,
    ) -> Disposer {
        {
            let mut inner = self.inner.borrow_mut();
            let elements = inner.entries.entry(template).or_default();

            if elements.contains_key(&element) {
                debug!(%element, %template, "duplicate connect ignored");
                return Disposer::noop();
            }

            elements.insert(element, track_overlay);
        }

        debug!(%element, %template, track_overlay, "template binding connected");

        let weak = Rc::downgrade(&self.inner);
        Disposer::new(move || {
            if let Some(inner) = weak.upgrade() {
                let mut inner = inner.borrow_mut();
                if let Some(elements) = inner.entries.get_mut(&template) {
                    elements.remove(&element);
                    if elements.is_empty() {
                        inner.entries.remove(&template);
                    }
                }
            }
        })
    }

    /// All live elements realizing a template. Empty when none.
    pub fn elements_for(&self, template: TemplateId) -> BTreeSet<ElementId> {
        self.inner
            .borrow()
            .entries
            .get(&template)
            .map(|elements| elements.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Live elements the overlay should draw decorations for.
    pub fn tracked_elements_for(&self, template: TemplateId) -> BTreeSet<ElementId> {
        self.inner
            .borrow()
            .entries
            .get(&template)
            .map(|elements| {
                elements
                    .iter()
                    .filter(|(_, tracked)| **tracked)
                    .map(|(id, _)| *id)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Total number of live `(template, element)` entries.
    pub fn entry_count(&self) -> usize {
        self.inner
            .borrow()
            .entries
            .values()
            .map(|elements| elements.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }
}
