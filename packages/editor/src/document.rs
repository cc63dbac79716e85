//! # Document
//!
//! Editable document state: the author's components plus the preview
//! frames of the current session. All mutation goes through the store's
//! transactional `change` API; the document itself is plain data.

use mosaic_types::{
    walk_template, Component, ComponentId, Frame, FrameId, Template, TemplateId, TemplateVisitor,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub components: Vec<Component>,
    pub frames: Vec<Frame>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    pub fn with_frame(mut self, frame: Frame) -> Self {
        self.frames.push(frame);
        self
    }

    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn find_component_by_name(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name == name)
    }

    pub fn frame(&self, id: FrameId) -> Option<&Frame> {
        self.frames.iter().find(|f| f.id == id)
    }

    pub fn frame_mut(&mut self, id: FrameId) -> Option<&mut Frame> {
        self.frames.iter_mut().find(|f| f.id == id)
    }

    /// The component whose template tree contains the given template.
    /// Chrome uses this to map a picked template back to its definition.
    pub fn owner_of_template(&self, template: TemplateId) -> Option<ComponentId> {
        struct Contains {
            target: TemplateId,
            found: bool,
        }

        impl TemplateVisitor for Contains {
            fn visit_template(&mut self, template: &Template) {
                if template.id() == self.target {
                    self.found = true;
                    return;
                }
                walk_template(self, template);
            }
        }

        self.components
            .iter()
            .find(|c| {
                let mut visitor = Contains {
                    target: template,
                    found: false,
                };
                visitor.visit_template(&c.root);
                visitor.found
            })
            .map(|c| c.id)
    }
}
