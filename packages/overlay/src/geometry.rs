//! Preview viewport geometry.

use mosaic_renderer::ElementId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Bounding rectangle of a rendered element, relative to the preview
/// surface's own coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// The embedded preview surface as seen from the editor chrome: its offset
/// within the chrome plus its visible size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub offset_left: f64,
    pub offset_top: f64,
    pub client_width: f64,
    pub client_height: f64,
}

impl Viewport {
    pub fn new(offset_left: f64, offset_top: f64, client_width: f64, client_height: f64) -> Self {
        Self {
            offset_left,
            offset_top,
            client_width,
            client_height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.offset_top + self.client_height
    }
}

/// Where element bounding rectangles come from. Production hosts measure
/// real layout; tests provide synthetic rectangles.
pub trait GeometrySource {
    fn rect_of(&self, element: ElementId) -> Option<Rect>;
}

/// Map-backed geometry source.
#[derive(Debug, Clone, Default)]
pub struct MapGeometry {
    rects: HashMap<ElementId, Rect>,
}

impl MapGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, element: ElementId, rect: Rect) {
        self.rects.insert(element, rect);
    }

    pub fn remove(&mut self, element: ElementId) {
        self.rects.remove(&element);
    }
}

impl GeometrySource for MapGeometry {
    fn rect_of(&self, element: ElementId) -> Option<Rect> {
        self.rects.get(&element).copied()
    }
}
