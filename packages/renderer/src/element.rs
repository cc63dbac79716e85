//! Rendered elements.
//!
//! The renderer materializes views into elements held in an arena. Element
//! ids are the handles the binding table and overlay work with; the arena
//! owns the actual nodes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Handle to a rendered element. Unique per mount, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ElementId(u64);

impl ElementId {
    pub fn fresh() -> Self {
        Self(NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Concrete rendered node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ElementKind {
    /// Native element with normalized (plain, non-observable) styles.
    Node {
        tag: String,
        attrs: BTreeMap<String, String>,
        style: BTreeMap<String, String>,
        children: Vec<ElementId>,
    },

    /// Text leaf.
    Text { value: String },

    /// Diagnostic leaf produced for an evaluation failure.
    ErrorBanner { message: String },

    /// Host-rendered external component; `inner` is the root of whatever
    /// the host factory produced.
    External {
        component: String,
        inner: Option<ElementId>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedElement {
    pub id: ElementId,
    pub kind: ElementKind,
}

/// Owner of all currently mounted elements.
#[derive(Debug, Default)]
pub struct ElementArena {
    elements: BTreeMap<ElementId, RenderedElement>,
}

impl ElementArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: ElementKind) -> ElementId {
        let id = ElementId::fresh();
        self.elements.insert(id, RenderedElement { id, kind });
        id
    }

    pub fn get(&self, id: ElementId) -> Option<&RenderedElement> {
        self.elements.get(&id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Remove an element and everything beneath it.
    pub fn remove_subtree(&mut self, id: ElementId) {
        let Some(element) = self.elements.remove(&id) else {
            return;
        };
        match element.kind {
            ElementKind::Node { children, .. } => {
                for child in children {
                    self.remove_subtree(child);
                }
            }
            ElementKind::External { inner, .. } => {
                if let Some(inner) = inner {
                    self.remove_subtree(inner);
                }
            }
            ElementKind::Text { .. } | ElementKind::ErrorBanner { .. } => {}
        }
    }

    /// Text rendering of a subtree, for tests and diagnostics.
    pub fn to_text(&self, id: ElementId) -> String {
        match self.get(id).map(|e| &e.kind) {
            Some(ElementKind::Text { value }) => value.clone(),
            Some(ElementKind::ErrorBanner { message }) => format!("Error: {}", message),
            Some(ElementKind::Node { tag, children, .. }) => {
                let inner: Vec<String> = children.iter().map(|c| self.to_text(*c)).collect();
                format!("<{}>{}</{}>", tag, inner.join(""), tag)
            }
            Some(ElementKind::External { inner, .. }) => inner
                .map(|inner| self.to_text(inner))
                .unwrap_or_default(),
            None => String::new(),
        }
    }
}
