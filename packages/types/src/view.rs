//! Evaluated view nodes.
//!
//! A `View` tree is the output of one evaluation pass: ephemeral, rebuilt
//! on every document change. No object identity is shared between passes;
//! only `template` back-references and `key`s are stable.

use crate::component::ComponentRef;
use crate::id::{TemplateId, ViewId};
use crate::props::{PropValue, Props};
use serde::{Deserialize, Serialize};

/// Evaluated output node. The root of any render pass must be
/// `View::Component(ComponentView::Reka { .. })`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum View {
    /// Native element. `tag == "text"` renders a text leaf from
    /// `props["value"]`.
    Tag {
        id: ViewId,
        key: String,
        template: TemplateId,
        tag: String,
        props: Props,
        children: Vec<View>,
    },

    /// Component invocation output; polymorphic over document-defined and
    /// host-supplied components.
    Component(ComponentView),

    /// Expansion point; `children` are the views supplied by the enclosing
    /// call site.
    Slot {
        id: ViewId,
        key: String,
        template: TemplateId,
        children: Vec<View>,
    },

    /// Evaluation failure sentinel. Terminal; renders diagnostic text only.
    ErrorSystem {
        id: ViewId,
        key: String,
        template: TemplateId,
        error: String,
    },
}

/// The two component-view variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "component_type")]
pub enum ComponentView {
    /// Component defined within the edited document; `render` is its
    /// expanded body.
    Reka {
        id: ViewId,
        key: String,
        template: TemplateId,
        component: ComponentRef,
        render: Vec<View>,
    },

    /// Host-supplied component; opaque, produces its own element via the
    /// registered render factory.
    External {
        id: ViewId,
        key: String,
        template: TemplateId,
        component: ComponentRef,
        props: Props,
    },
}

fn fresh_key(id: ViewId) -> String {
    format!("v{}", id)
}

impl View {
    pub fn tag(tag: impl Into<String>, template: TemplateId) -> Self {
        let id = ViewId::fresh();
        View::Tag {
            id,
            key: fresh_key(id),
            template,
            tag: tag.into(),
            props: Props::new(),
            children: Vec::new(),
        }
    }

    /// Text leaf view: a `text` tag carrying its content in
    /// `props["value"]`.
    pub fn text(value: impl Into<String>, template: TemplateId) -> Self {
        View::tag("text", template).with_prop("value", PropValue::Text(value.into()))
    }

    pub fn slot(template: TemplateId, children: Vec<View>) -> Self {
        let id = ViewId::fresh();
        View::Slot {
            id,
            key: fresh_key(id),
            template,
            children,
        }
    }

    pub fn error(error: impl Into<String>, template: TemplateId) -> Self {
        let id = ViewId::fresh();
        View::ErrorSystem {
            id,
            key: fresh_key(id),
            template,
            error: error.into(),
        }
    }

    pub fn reka(component: ComponentRef, template: TemplateId, render: Vec<View>) -> Self {
        let id = ViewId::fresh();
        View::Component(ComponentView::Reka {
            id,
            key: fresh_key(id),
            template,
            component,
            render,
        })
    }

    pub fn external(component: ComponentRef, template: TemplateId, props: Props) -> Self {
        let id = ViewId::fresh();
        View::Component(ComponentView::External {
            id,
            key: fresh_key(id),
            template,
            component,
            props,
        })
    }

    pub fn id(&self) -> ViewId {
        match self {
            View::Tag { id, .. } => *id,
            View::Component(component) => component.id(),
            View::Slot { id, .. } => *id,
            View::ErrorSystem { id, .. } => *id,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            View::Tag { key, .. } => key,
            View::Component(component) => component.key(),
            View::Slot { key, .. } => key,
            View::ErrorSystem { key, .. } => key,
        }
    }

    /// The template node that produced this view.
    pub fn template(&self) -> TemplateId {
        match self {
            View::Tag { template, .. } => *template,
            View::Component(component) => component.template(),
            View::Slot { template, .. } => *template,
            View::ErrorSystem { template, .. } => *template,
        }
    }

    pub fn children(&self) -> &[View] {
        match self {
            View::Tag { children, .. } => children,
            View::Component(ComponentView::Reka { render, .. }) => render,
            View::Component(ComponentView::External { .. }) => &[],
            View::Slot { children, .. } => children,
            View::ErrorSystem { .. } => &[],
        }
    }

    pub fn with_prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        if let View::Tag { props, .. } = &mut self {
            props.insert(name.into(), value.into());
        }
        self
    }

    pub fn with_child(mut self, child: View) -> Self {
        if let View::Tag { children, .. } = &mut self {
            children.push(child);
        }
        self
    }

    pub fn with_key(mut self, new_key: impl Into<String>) -> Self {
        let new_key = new_key.into();
        match &mut self {
            View::Tag { key, .. } => *key = new_key,
            View::Component(ComponentView::Reka { key, .. }) => *key = new_key,
            View::Component(ComponentView::External { key, .. }) => *key = new_key,
            View::Slot { key, .. } => *key = new_key,
            View::ErrorSystem { key, .. } => *key = new_key,
        }
        self
    }
}

impl ComponentView {
    pub fn id(&self) -> ViewId {
        match self {
            ComponentView::Reka { id, .. } => *id,
            ComponentView::External { id, .. } => *id,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            ComponentView::Reka { key, .. } => key,
            ComponentView::External { key, .. } => key,
        }
    }

    pub fn template(&self) -> TemplateId {
        match self {
            ComponentView::Reka { template, .. } => *template,
            ComponentView::External { template, .. } => *template,
        }
    }

    pub fn component(&self) -> &ComponentRef {
        match self {
            ComponentView::Reka { component, .. } => component,
            ComponentView::External { component, .. } => component,
        }
    }
}
