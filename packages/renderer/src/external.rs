//! # External Component Registry
//!
//! Host-supplied components render through opaque factories registered by
//! name. The factory output is memoized per `(component, props)` identity:
//! the factory runs once and its result is reused until the props change,
//! matching the host-component contract.

use mosaic_types::{ComponentId, Props};
use std::collections::{BTreeMap, HashMap};

/// Declarative description of what a host factory produced. The renderer
/// instantiates this into arena elements.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementSpec {
    Node {
        tag: String,
        attrs: BTreeMap<String, String>,
        children: Vec<ElementSpec>,
    },
    Text {
        value: String,
    },
}

impl ElementSpec {
    pub fn node(tag: impl Into<String>) -> Self {
        ElementSpec::Node {
            tag: tag.into(),
            attrs: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        ElementSpec::Text {
            value: value.into(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let ElementSpec::Node { attrs, .. } = &mut self {
            attrs.insert(name.into(), value.into());
        }
        self
    }

    pub fn with_child(mut self, child: ElementSpec) -> Self {
        if let ElementSpec::Node { children, .. } = &mut self {
            children.push(child);
        }
        self
    }
}

type RenderFactory = Box<dyn Fn(&Props) -> ElementSpec>;

struct CachedRender {
    props: Props,
    spec: ElementSpec,
}

/// Registry of host component render factories, keyed by component name.
#[derive(Default)]
pub struct ExternalRegistry {
    factories: HashMap<String, RenderFactory>,
    cache: HashMap<ComponentId, CachedRender>,
}

impl ExternalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        factory: impl Fn(&Props) -> ElementSpec + 'static,
    ) {
        self.factories.insert(name.into(), Box::new(factory));
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Render a host component, reusing the cached output while the props
    /// are unchanged. Returns `None` when no factory is registered.
    pub fn render(
        &mut self,
        component: ComponentId,
        name: &str,
        props: &Props,
    ) -> Option<ElementSpec> {
        if let Some(cached) = self.cache.get(&component) {
            if &cached.props == props {
                return Some(cached.spec.clone());
            }
        }

        let factory = self.factories.get(name)?;
        let spec = factory(props);
        self.cache.insert(
            component,
            CachedRender {
                props: props.clone(),
                spec: spec.clone(),
            },
        );
        Some(spec)
    }

    /// Number of live cache entries, for tests.
    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }
}
