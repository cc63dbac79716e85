//! Ownership contexts threaded through the render recursion.
//!
//! These are pure read-scoped values, re-derived on every render pass and
//! passed down as explicit parameters. A `BindScope` is captured at each
//! component/slot boundary and holds the contexts *as of that boundary* —
//! for a component boundary that means the contexts before the new
//! component context is pushed, which is what the scoping rules key off.

use mosaic_types::{ComponentRef, TemplateId, ViewId};

/// Context of the component currently being rendered.
#[derive(Debug, Clone)]
pub struct ComponentContext {
    /// Component whose output is being rendered.
    pub component: ComponentRef,
    /// Root component of the whole render pass.
    pub root: ComponentRef,
    /// Component that invoked `component`, if any.
    pub parent_component: Option<ComponentRef>,
}

/// Context established at the nearest slot boundary.
#[derive(Debug, Clone)]
pub struct SlotContext {
    /// Component that owns the slot placeholder.
    pub parent_component: Option<ComponentRef>,
}

/// Component-boundary variant data needed by the resolver.
#[derive(Debug, Clone)]
pub enum ComponentBoundary {
    /// Document-defined component: `render_output` are the view ids of its
    /// direct render output.
    Reka { render_output: Vec<ViewId> },
    /// Host-supplied component.
    External,
}

/// Binding scope captured at the innermost component or slot boundary.
#[derive(Debug, Clone)]
pub enum BindScope {
    Component {
        /// Component context enclosing the boundary (pre-push).
        outer: Option<ComponentContext>,
        /// Slot context enclosing the boundary.
        slot: Option<SlotContext>,
        /// Template of the component invocation itself.
        invocation_template: TemplateId,
        variant: ComponentBoundary,
    },
    Slot {
        /// `parent_component` of the component context at the slot.
        parent_component: Option<ComponentRef>,
        /// Template of the slot placeholder.
        slot_template: TemplateId,
        /// Views supplied by the enclosing call site.
        direct_children: Vec<ViewId>,
    },
}

/// Everything the recursive render call threads downward.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub component: Option<ComponentContext>,
    pub slot: Option<SlotContext>,
    pub scope: Option<BindScope>,
}

impl RenderContext {
    pub fn root() -> Self {
        Self::default()
    }
}
