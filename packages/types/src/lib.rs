//! # Mosaic Types
//!
//! Data model for the view-tree rendering engine.
//!
//! Two tree shapes live here:
//!
//! - **Template**: static, author-authored structure (tags, component
//!   invocations, slot placeholders). Immutable per edit; template identity
//!   is the map key that survives re-evaluation of the same document
//!   revision.
//! - **View**: the evaluated, ephemeral output of running a component
//!   against current state. Regenerated on every evaluation pass; every
//!   node carries a back-reference to the template that produced it plus a
//!   stable key for list reconciliation.
//!
//! Both are closed tagged unions: adding a variant breaks every dispatch
//! site at compile time, which is exactly what we want.

pub mod component;
pub mod frame;
pub mod id;
pub mod props;
pub mod template;
pub mod view;
pub mod visitor;

pub use component::{Component, ComponentRef, PropDef};
pub use frame::Frame;
pub use id::{ComponentId, FrameId, TemplateId, ViewId};
pub use props::{PropValue, Props, StyleMap};
pub use template::Template;
pub use view::{ComponentView, View};
pub use visitor::{walk_template, walk_view, TemplateVisitor, ViewVisitor};
