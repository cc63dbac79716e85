//! Author-defined components and references to them.

use crate::id::ComponentId;
use crate::props::PropValue;
use crate::template::Template;
use serde::{Deserialize, Serialize};

/// Reference to a component from a template or view.
///
/// `external` marks host-supplied components: they render through an
/// opaque factory and cannot be opened in the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRef {
    pub id: ComponentId,
    pub name: String,
    pub external: bool,
}

impl ComponentRef {
    /// Reference to a host-supplied component. Document-defined components
    /// get their references via [`Component::reference`].
    pub fn external(name: impl Into<String>) -> Self {
        Self {
            id: ComponentId::fresh(),
            name: name.into(),
            external: true,
        }
    }
}

/// Declared prop on a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropDef {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<PropValue>,
}

impl PropDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    pub fn with_default(mut self, default: PropValue) -> Self {
        self.default = Some(default);
        self
    }
}

/// Named reusable unit with a template body. Owned by the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: ComponentId,
    pub name: String,
    pub root: Template,
    pub props: Vec<PropDef>,
}

impl Component {
    pub fn new(name: impl Into<String>, root: Template) -> Self {
        Self {
            id: ComponentId::fresh(),
            name: name.into(),
            root,
            props: Vec::new(),
        }
    }

    pub fn with_prop(mut self, prop: PropDef) -> Self {
        self.props.push(prop);
        self
    }

    pub fn reference(&self) -> ComponentRef {
        ComponentRef {
            id: self.id,
            name: self.name.clone(),
            external: false,
        }
    }
}
