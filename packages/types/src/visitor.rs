//! Visitor pattern for traversing template and view trees immutably.
//!
//! Default implementations walk the entire tree; override specific
//! `visit_*` methods to act on particular node kinds.

use crate::template::Template;
use crate::view::{ComponentView, View};

pub trait TemplateVisitor: Sized {
    fn visit_template(&mut self, template: &Template) {
        walk_template(self, template);
    }
}

pub fn walk_template<V: TemplateVisitor>(visitor: &mut V, template: &Template) {
    for child in template.children() {
        visitor.visit_template(child);
    }
}

pub trait ViewVisitor: Sized {
    fn visit_view(&mut self, view: &View) {
        walk_view(self, view);
    }
}

pub fn walk_view<V: ViewVisitor>(visitor: &mut V, view: &View) {
    match view {
        View::Tag { children, .. } => {
            for child in children {
                visitor.visit_view(child);
            }
        }
        View::Component(ComponentView::Reka { render, .. }) => {
            for child in render {
                visitor.visit_view(child);
            }
        }
        View::Component(ComponentView::External { .. }) => {
            // Opaque leaf, nothing to walk.
        }
        View::Slot { children, .. } => {
            for child in children {
                visitor.visit_view(child);
            }
        }
        View::ErrorSystem { .. } => {
            // Terminal, nothing to walk.
        }
    }
}
