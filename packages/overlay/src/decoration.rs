//! Selection border placement.
//!
//! A decoration is one border drawn over one rendered element. Placement
//! translates the element's rectangle into editor-chrome coordinates and
//! clamps it to the preview viewport so borders for off-screen elements pin
//! to the viewport edge instead of floating over unrelated chrome.

use crate::geometry::{Rect, Viewport};
use mosaic_types::Template;
use serde::{Deserialize, Serialize};

/// Which edge a clamped border got pinned to, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overflow {
    Normal,
    Top,
    Bottom,
}

/// Whether a border marks the hovered or the selected template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecorationKind {
    Hovered,
    Selected,
}

/// Resolved placement of one border, plus the label metadata the host
/// renders next to it.
#[derive(Debug, Clone)]
pub struct Decoration {
    pub template: Template,
    pub kind: DecorationKind,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub overflow: Overflow,
    pub border_hidden: bool,
    pub can_edit: bool,
    pub comment_count: usize,
}

impl Decoration {
    /// Label text, e.g. `div`, `Card` or `<slot>`.
    pub fn label(&self) -> &str {
        self.template.name()
    }

    /// Label qualifier, e.g. `tag` or `component`.
    pub fn label_kind(&self) -> &'static str {
        self.template.kind_name()
    }
}

/// Computed placement independent of the template being decorated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub overflow: Overflow,
    pub border_hidden: bool,
}

/// Translates an element rectangle into chrome coordinates and clamps it
/// to the viewport. The raw position decides overflow: anything left of
/// the viewport, at or above its top edge, or at or below its bottom edge
/// is clamped and flagged, and the border itself is hidden unless the raw
/// position happens to be the chrome origin.
pub fn place(rect: Rect, viewport: &Viewport) -> Placement {
    let left = viewport.offset_left + rect.left;
    let top = viewport.offset_top + rect.top;

    let clamped_left = left.max(viewport.offset_left);
    let clamped_top = top.max(viewport.offset_top).min(viewport.bottom());

    let overflowing =
        left < viewport.offset_left || top <= viewport.offset_top || top >= viewport.bottom();

    let overflow = if !overflowing {
        Overflow::Normal
    } else if top <= viewport.offset_top {
        Overflow::Top
    } else {
        Overflow::Bottom
    };

    let border_hidden = overflowing && !(top == 0.0 && left == 0.0);

    Placement {
        left: clamped_left,
        top: clamped_top,
        width: rect.width,
        height: rect.height,
        overflow,
        border_hidden,
    }
}
