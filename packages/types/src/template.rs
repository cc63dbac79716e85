//! Static template nodes.

use crate::component::ComponentRef;
use crate::id::TemplateId;
use crate::props::{PropValue, Props};
use serde::{Deserialize, Serialize};

/// Author-authored structural node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Template {
    /// Native element, e.g. `div` or the special `text` leaf.
    Tag {
        id: TemplateId,
        tag: String,
        props: Props,
        children: Vec<Template>,
    },

    /// Invocation of a document-defined or host-supplied component.
    Component {
        id: TemplateId,
        component: ComponentRef,
        props: Props,
        children: Vec<Template>,
    },

    /// Placeholder filled by the call site's children at evaluation time.
    Slot { id: TemplateId },
}

impl Template {
    pub fn tag(tag: impl Into<String>) -> Self {
        Template::Tag {
            id: TemplateId::fresh(),
            tag: tag.into(),
            props: Props::new(),
            children: Vec::new(),
        }
    }

    /// The `text` leaf: renders `props["value"]` as a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Template::tag("text").with_prop("value", PropValue::Text(value.into()))
    }

    pub fn component(component: ComponentRef) -> Self {
        Template::Component {
            id: TemplateId::fresh(),
            component,
            props: Props::new(),
            children: Vec::new(),
        }
    }

    pub fn slot() -> Self {
        Template::Slot {
            id: TemplateId::fresh(),
        }
    }

    pub fn id(&self) -> TemplateId {
        match self {
            Template::Tag { id, .. } => *id,
            Template::Component { id, .. } => *id,
            Template::Slot { id } => *id,
        }
    }

    /// Display name used by the selection overlay label.
    pub fn name(&self) -> &str {
        match self {
            Template::Tag { tag, .. } => tag,
            Template::Component { component, .. } => &component.name,
            Template::Slot { .. } => "<slot>",
        }
    }

    /// Node-kind label used by the selection overlay label.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Template::Tag { .. } => "tag",
            Template::Component { .. } => "component",
            Template::Slot { .. } => "slot",
        }
    }

    pub fn component_ref(&self) -> Option<&ComponentRef> {
        match self {
            Template::Component { component, .. } => Some(component),
            _ => None,
        }
    }

    pub fn children(&self) -> &[Template] {
        match self {
            Template::Tag { children, .. } => children,
            Template::Component { children, .. } => children,
            Template::Slot { .. } => &[],
        }
    }

    pub fn props(&self) -> Option<&Props> {
        match self {
            Template::Tag { props, .. } => Some(props),
            Template::Component { props, .. } => Some(props),
            Template::Slot { .. } => None,
        }
    }

    pub fn with_prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        match &mut self {
            Template::Tag { props, .. } | Template::Component { props, .. } => {
                props.insert(name.into(), value.into());
            }
            Template::Slot { .. } => {}
        }
        self
    }

    pub fn with_child(mut self, child: Template) -> Self {
        match &mut self {
            Template::Tag { children, .. } | Template::Component { children, .. } => {
                children.push(child);
            }
            Template::Slot { .. } => {}
        }
        self
    }

    /// Depth-first lookup by id.
    pub fn find(&self, target: TemplateId) -> Option<&Template> {
        if self.id() == target {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(target))
    }
}
