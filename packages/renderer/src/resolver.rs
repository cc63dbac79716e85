//! # Connection/Scoping Resolver
//!
//! Decides, for a mounted element realizing view `v`, whether the element
//! registers in the binding table and under which template. Binding is
//! restricted to elements visible at the editable boundary: the document
//! root's own output, direct render output of nested component
//! invocations, and slot content — never the internals of a nested
//! component.
//!
//! Returning `None` is the non-fatal degrade-to-unselectable path; it is
//! logged for diagnostics and never an error.

use crate::context::{BindScope, ComponentBoundary};
use mosaic_types::{ComponentRef, TemplateId, View};
use tracing::debug;

fn same_component(a: &Option<ComponentRef>, b: &Option<ComponentRef>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.id == b.id,
        (None, None) => true,
        _ => false,
    }
}

/// Resolve the template an element realizing `view` should bind under, if
/// any. `scope` is the innermost component/slot boundary enclosing the
/// element; `None` means the element sits above any boundary and never
/// binds.
pub fn resolve_binding(scope: Option<&BindScope>, view: &View) -> Option<TemplateId> {
    let Some(scope) = scope else {
        debug!(view = %view.id(), "no binding scope, element left unselectable");
        return None;
    };

    match scope {
        BindScope::Slot {
            parent_component,
            slot_template,
            direct_children,
        } => {
            // Slot owned by the render root (no parent component): only
            // the call site's immediate children bind, and they bind to
            // the slot placeholder itself.
            if parent_component.is_none() {
                if direct_children.contains(&view.id()) {
                    return Some(*slot_template);
                }
                debug!(view = %view.id(), "view outside slot's direct children, skipped");
                return None;
            }

            // Slot content inside a nested component still belongs to the
            // enclosing call site's template tree: bind each element to
            // its own view's template.
            Some(view.template())
        }

        BindScope::Component {
            outer,
            slot,
            invocation_template,
            variant,
        } => {
            // Root component boundary: everything in its output is
            // editable and binds to its own template.
            let Some(outer) = outer else {
                return Some(view.template());
            };

            // Only bind at the editable boundary: either we are still in
            // the root component, or the nearest slot is owned by the
            // root.
            let slot_parent = slot.as_ref().and_then(|s| s.parent_component.clone());
            if !same_component(&slot_parent, &Some(outer.root.clone()))
                && outer.component.id != outer.root.id
            {
                debug!(
                    view = %view.id(),
                    "element inside nested component internals, skipped"
                );
                return None;
            }

            match variant {
                ComponentBoundary::Reka { render_output } => {
                    // Direct render output realizes the invocation itself.
                    if render_output.contains(&view.id()) {
                        Some(*invocation_template)
                    } else {
                        debug!(
                            view = %view.id(),
                            "view not part of component's direct render output, skipped"
                        );
                        None
                    }
                }
                ComponentBoundary::External => {
                    // The same external element is reachable through
                    // multiple ownership paths; only the path whose slot
                    // matches the invocation's own parent slot binds.
                    if slot.is_some() && !same_component(&outer.parent_component, &slot_parent) {
                        debug!(
                            view = %view.id(),
                            "external invocation reached through foreign slot, skipped"
                        );
                        return None;
                    }
                    Some(*invocation_template)
                }
            }
        }
    }
}
