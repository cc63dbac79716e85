//! Selection/hover border overlay for the editor preview.
//!
//! The preview renders inside an embedded surface; the overlay draws
//! template borders over it from the editor chrome. Computation is pull
//! based:
//!
//!   editor state (hover/selection + binding table)
//!        │
//!        ▼
//!   compute_decorations ──▶ Vec<Decoration>
//!        ▲
//!        │ geometry pulses (resize, scroll, frame edits)
//!   GeometryNotifier
//!
//! Geometry is injected through [`GeometrySource`] so the overlay never
//! touches layout directly, and change detection is injected through
//! [`GeometryNotifier`] so hosts decide what counts as "moved".

pub mod decoration;
pub mod geometry;
pub mod notifier;
pub mod overlay;

#[cfg(test)]
mod tests_overlay;

pub use decoration::{place, Decoration, DecorationKind, Overflow, Placement};
pub use geometry::{GeometrySource, MapGeometry, Rect, Viewport};
pub use notifier::{GeometryNotifier, SyntheticNotifier};
pub use overlay::{compute_decorations, SelectionOverlay};
