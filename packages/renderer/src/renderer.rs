//! # View Renderer
//!
//! Recursively converts an evaluated view tree into arena elements,
//! threading ownership contexts down the recursion and registering each
//! mounted element in the binding table when the scoping resolver says so.
//!
//! Rendering is pure with respect to structure; the only side effects are
//! element insertion and binding registration. Every binding's disposer is
//! owned by the returned [`RootHandle`], so unmounting the root is
//! guaranteed to clear every entry the mount created.

use crate::binding::BindingTable;
use crate::context::{BindScope, ComponentBoundary, ComponentContext, RenderContext, SlotContext};
use crate::element::{ElementArena, ElementId, ElementKind};
use crate::external::{ElementSpec, ExternalRegistry};
use crate::resolver::resolve_binding;
use mosaic_common::Disposer;
use mosaic_types::{ComponentView, PropValue, Props, View};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Error, Debug)]
pub enum RenderError {
    /// The evaluator produced an external component view for which the
    /// host never registered a render factory.
    #[error("no render factory registered for external component `{0}`")]
    UnknownExternalComponent(String),
}

/// Handle to one mounted root view. Owns the binding disposers; dropping
/// the handle (via [`Renderer::unmount`]) removes every binding the mount
/// created.
#[derive(Debug)]
pub struct RootHandle {
    roots: Vec<ElementId>,
    disposers: Vec<Disposer>,
}

impl RootHandle {
    pub fn roots(&self) -> &[ElementId] {
        &self.roots
    }

    /// Number of live binding disposers held by this mount.
    pub fn binding_count(&self) -> usize {
        self.disposers.iter().filter(|d| d.is_live()).count()
    }
}

/// Converts view trees into rendered elements.
#[derive(Default)]
pub struct Renderer {
    arena: ElementArena,
    externals: ExternalRegistry,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arena(&self) -> &ElementArena {
        &self.arena
    }

    pub fn externals_mut(&mut self) -> &mut ExternalRegistry {
        &mut self.externals
    }

    /// Render a full pass. The root of any render pass must be a
    /// document-defined component view; anything else is a caller
    /// contract breach.
    pub fn render_root(&mut self, view: &View, bindings: &BindingTable) -> RenderResult<RootHandle> {
        mosaic_common::invariant!(
            matches!(view, View::Component(ComponentView::Reka { .. })),
            "root view must be a document component view"
        );

        let mut disposers = Vec::new();
        let roots = self.render_view(view, &RenderContext::root(), bindings, &mut disposers)?;

        debug!(
            roots = roots.len(),
            bindings = disposers.len(),
            "root view mounted"
        );

        Ok(RootHandle { roots, disposers })
    }

    /// Unmount a previously rendered root: removes its elements from the
    /// arena and releases every binding it registered.
    pub fn unmount(&mut self, handle: RootHandle) {
        for root in &handle.roots {
            self.arena.remove_subtree(*root);
        }
        // Dropping the handle runs the binding disposers.
    }

    fn render_view(
        &mut self,
        view: &View,
        ctx: &RenderContext,
        bindings: &BindingTable,
        disposers: &mut Vec<Disposer>,
    ) -> RenderResult<Vec<ElementId>> {
        match view {
            View::Tag {
                tag,
                props,
                children,
                ..
            } => self.render_tag(view, tag, props, children, ctx, bindings, disposers),

            View::Component(component) => {
                self.render_component(view, component, ctx, bindings, disposers)
            }

            View::Slot { children, .. } => {
                self.render_slot(view, children, ctx, bindings, disposers)
            }

            View::ErrorSystem { error, .. } => {
                // Diagnostic leaf: rendered in place, contributes no
                // bindings, rest of the tree stays interactive.
                let id = self.arena.insert(ElementKind::ErrorBanner {
                    message: error.clone(),
                });
                Ok(vec![id])
            }
        }
    }

    fn render_tag(
        &mut self,
        view: &View,
        tag: &str,
        props: &Props,
        children: &[View],
        ctx: &RenderContext,
        bindings: &BindingTable,
        disposers: &mut Vec<Disposer>,
    ) -> RenderResult<Vec<ElementId>> {
        if tag == "text" {
            let value = props
                .get("value")
                .and_then(|v| v.as_text())
                .unwrap_or_default()
                .to_string();
            let id = self.arena.insert(ElementKind::Text { value });
            self.connect(id, view, ctx, bindings, disposers);
            return Ok(vec![id]);
        }

        let mut child_ids = Vec::new();
        for child in children {
            child_ids.extend(self.render_view(child, ctx, bindings, disposers)?);
        }

        // Styles are normalized out of the store's observable form before
        // they touch an element.
        let style = props
            .get("style")
            .and_then(PropValue::as_style)
            .map(|s| s.to_plain())
            .unwrap_or_default();

        let attrs: BTreeMap<String, String> = props
            .iter()
            .filter(|(name, _)| name.as_str() != "style")
            .map(|(name, value)| (name.clone(), value.to_plain_string()))
            .collect();

        let id = self.arena.insert(ElementKind::Node {
            tag: tag.to_string(),
            attrs,
            style,
            children: child_ids,
        });
        self.connect(id, view, ctx, bindings, disposers);

        Ok(vec![id])
    }

    fn render_component(
        &mut self,
        view: &View,
        component: &ComponentView,
        ctx: &RenderContext,
        bindings: &BindingTable,
        disposers: &mut Vec<Disposer>,
    ) -> RenderResult<Vec<ElementId>> {
        // Scope captures the contexts as of this boundary, before the new
        // component context is pushed.
        let scope = BindScope::Component {
            outer: ctx.component.clone(),
            slot: ctx.slot.clone(),
            invocation_template: component.template(),
            variant: match component {
                ComponentView::Reka { render, .. } => ComponentBoundary::Reka {
                    render_output: render.iter().map(View::id).collect(),
                },
                ComponentView::External { .. } => ComponentBoundary::External,
            },
        };

        let pushed = ComponentContext {
            root: ctx
                .component
                .as_ref()
                .map(|c| c.root.clone())
                .unwrap_or_else(|| component.component().clone()),
            parent_component: ctx.component.as_ref().map(|c| c.component.clone()),
            component: component.component().clone(),
        };

        let next = RenderContext {
            component: Some(pushed),
            slot: ctx.slot.clone(),
            scope: Some(scope),
        };

        match component {
            ComponentView::Reka { render, .. } => {
                let mut out = Vec::new();
                for entry in render {
                    out.extend(self.render_view(entry, &next, bindings, disposers)?);
                }
                Ok(out)
            }

            ComponentView::External {
                component: reference,
                props,
                ..
            } => {
                let Some(spec) = self
                    .externals
                    .render(reference.id, &reference.name, props)
                else {
                    return Err(RenderError::UnknownExternalComponent(reference.name.clone()));
                };

                let inner = self.instantiate_spec(&spec);
                let id = self.arena.insert(ElementKind::External {
                    component: reference.name.clone(),
                    inner: Some(inner),
                });

                // The connection callback attaches to the element the host
                // factory returned, under this invocation's own scope.
                self.connect_in_scope(id, view, next.scope.as_ref(), bindings, disposers);

                Ok(vec![id])
            }
        }
    }

    fn render_slot(
        &mut self,
        view: &View,
        children: &[View],
        ctx: &RenderContext,
        bindings: &BindingTable,
        disposers: &mut Vec<Disposer>,
    ) -> RenderResult<Vec<ElementId>> {
        let parent_component = ctx
            .component
            .as_ref()
            .and_then(|c| c.parent_component.clone());

        let scope = BindScope::Slot {
            parent_component: parent_component.clone(),
            slot_template: view.template(),
            direct_children: children.iter().map(View::id).collect(),
        };

        let next = RenderContext {
            component: ctx.component.clone(),
            slot: Some(SlotContext { parent_component }),
            scope: Some(scope),
        };

        let mut out = Vec::new();
        for child in children {
            out.extend(self.render_view(child, &next, bindings, disposers)?);
        }
        Ok(out)
    }

    fn connect(
        &mut self,
        element: ElementId,
        view: &View,
        ctx: &RenderContext,
        bindings: &BindingTable,
        disposers: &mut Vec<Disposer>,
    ) {
        self.connect_in_scope(element, view, ctx.scope.as_ref(), bindings, disposers);
    }

    fn connect_in_scope(
        &mut self,
        element: ElementId,
        view: &View,
        scope: Option<&BindScope>,
        bindings: &BindingTable,
        disposers: &mut Vec<Disposer>,
    ) {
        if let Some(template) = resolve_binding(scope, view) {
            disposers.push(bindings.connect(element, template, true));
        }
    }

    fn instantiate_spec(&mut self, spec: &ElementSpec) -> ElementId {
        match spec {
            ElementSpec::Text { value } => self.arena.insert(ElementKind::Text {
                value: value.clone(),
            }),
            ElementSpec::Node {
                tag,
                attrs,
                children,
            } => {
                let child_ids: Vec<ElementId> = children
                    .iter()
                    .map(|child| self.instantiate_spec(child))
                    .collect();
                self.arena.insert(ElementKind::Node {
                    tag: tag.clone(),
                    attrs: attrs.clone(),
                    style: BTreeMap::new(),
                    children: child_ids,
                })
            }
        }
    }
}
