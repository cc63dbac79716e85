//! Overlay tests driven through a full editor session: store → evaluator
//! → renderer → binding table → decorations.

use crate::geometry::{MapGeometry, Rect, Viewport};
use crate::notifier::SyntheticNotifier;
use crate::overlay::{compute_decorations, SelectionOverlay};
use crate::DecorationKind;
use mosaic_editor::{
    Comment, Document, Editor, EditorMode, Evaluator, PreviewPipeline, StateStore,
    INTERACTIVE_DELAY_MS, READY_DELAY_MS,
};
use mosaic_common::VirtualScheduler;
use mosaic_renderer::ElementSpec;
use mosaic_types::{Component, ComponentId, ComponentRef, Frame, Props, Template, View};
use std::rc::Rc;

fn expand(template: &Template) -> View {
    match template {
        Template::Tag {
            id, tag, children, ..
        } => {
            let mut view = View::tag(tag.clone(), *id);
            for child in children {
                view = view.with_child(expand(child));
            }
            view
        }
        Template::Component { id, component, .. } => {
            View::external(component.clone(), *id, Props::new())
        }
        Template::Slot { id } => View::slot(*id, Vec::new()),
    }
}

/// Evaluator that expands the component body structurally, treating every
/// component reference as a host component invocation.
fn evaluator() -> Evaluator {
    Box::new(|doc: &Document, component: ComponentId| {
        let component = doc.component(component).expect("component exists");
        let invocation = Template::component(component.reference());
        View::reka(
            component.reference(),
            invocation.id(),
            vec![expand(&component.root)],
        )
    })
}

fn session(document: Document, active: ComponentId) -> (PreviewPipeline, VirtualScheduler) {
    let scheduler = VirtualScheduler::new();
    let mut editor = Editor::new(StateStore::new(document), Rc::new(scheduler.clone()));
    editor.set_active_component_editor(active).unwrap();
    (PreviewPipeline::new(editor, evaluator()), scheduler)
}

fn viewport() -> Viewport {
    Viewport::new(0.0, 0.0, 1024.0, 768.0)
}

/// Assigns a distinct rectangle to every element bound to a template, well
/// inside the viewport.
fn seed_geometry(editor: &Editor, geometry: &mut MapGeometry, template: &Template) {
    let active = editor.active_component_editor().unwrap();
    for (i, element) in active.tpl_elements(template.id()).iter().enumerate() {
        geometry.set(
            *element,
            Rect::new(10.0 + 5.0 * i as f64, 10.0 + 40.0 * i as f64, 200.0, 32.0),
        );
    }
}

#[test]
fn selection_shadows_hover_until_selection_moves_on() {
    let span = Template::tag("span");
    let body = Template::tag("div").with_child(span.clone());
    let app = Component::new("App", body.clone());
    let app_id = app.id;
    let document = Document::new().with_component(app).with_frame(Frame::new());

    let (mut pipeline, scheduler) = session(document, app_id);
    pipeline.refresh().unwrap();
    scheduler.advance(READY_DELAY_MS + INTERACTIVE_DELAY_MS);

    let mut geometry = MapGeometry::new();
    seed_geometry(pipeline.editor(), &mut geometry, &body);
    seed_geometry(pipeline.editor(), &mut geometry, &span);

    let active = pipeline.editor_mut().active_component_editor_mut().unwrap();
    active.set_selected(Some(body.clone()));
    active.set_hovered(Some(body.clone()));

    let decorations = compute_decorations(pipeline.editor(), &viewport(), &geometry);
    assert_eq!(decorations.len(), 1);
    assert_eq!(decorations[0].kind, DecorationKind::Selected);
    assert_eq!(decorations[0].template.id(), body.id());

    // Selecting something else re-enables the hover border.
    let active = pipeline.editor_mut().active_component_editor_mut().unwrap();
    active.set_selected(Some(span.clone()));

    let decorations = compute_decorations(pipeline.editor(), &viewport(), &geometry);
    assert_eq!(decorations.len(), 2);
    assert_eq!(decorations[0].kind, DecorationKind::Selected);
    assert_eq!(decorations[0].template.id(), span.id());
    assert_eq!(decorations[1].kind, DecorationKind::Hovered);
    assert_eq!(decorations[1].template.id(), body.id());
}

#[test]
fn decorations_stay_hidden_while_loading_or_previewing() {
    let body = Template::tag("div");
    let app = Component::new("App", body.clone());
    let app_id = app.id;
    let document = Document::new().with_component(app).with_frame(Frame::new());

    let (mut pipeline, scheduler) = session(document, app_id);
    pipeline.refresh().unwrap();

    let mut geometry = MapGeometry::new();
    seed_geometry(pipeline.editor(), &mut geometry, &body);
    pipeline
        .editor_mut()
        .active_component_editor_mut()
        .unwrap()
        .set_selected(Some(body.clone()));

    // Still loading: the ready sequence has not fired.
    assert_eq!(pipeline.editor().mode(), EditorMode::Loading);
    assert!(compute_decorations(pipeline.editor(), &viewport(), &geometry).is_empty());

    scheduler.advance(READY_DELAY_MS + INTERACTIVE_DELAY_MS);
    assert_eq!(
        compute_decorations(pipeline.editor(), &viewport(), &geometry).len(),
        1
    );

    pipeline.editor_mut().set_mode(EditorMode::Preview);
    assert!(compute_decorations(pipeline.editor(), &viewport(), &geometry).is_empty());
}

#[test]
fn external_component_border_has_no_edit_affordance() {
    let button = Template::component(ComponentRef::external("Button"));
    let body = Template::tag("div").with_child(button.clone());
    let app = Component::new("App", body);
    let app_id = app.id;
    let document = Document::new().with_component(app).with_frame(Frame::new());

    let (mut pipeline, scheduler) = session(document, app_id);
    pipeline
        .editor_mut()
        .renderer_mut()
        .externals_mut()
        .register("Button", |_props| ElementSpec::node("button"));
    pipeline.refresh().unwrap();
    scheduler.advance(READY_DELAY_MS + INTERACTIVE_DELAY_MS);

    let mut geometry = MapGeometry::new();
    seed_geometry(pipeline.editor(), &mut geometry, &button);
    pipeline
        .editor_mut()
        .active_component_editor_mut()
        .unwrap()
        .set_selected(Some(button.clone()));

    let decorations = compute_decorations(pipeline.editor(), &viewport(), &geometry);
    assert_eq!(decorations.len(), 1);
    assert!(!decorations[0].can_edit);
    assert_eq!(decorations[0].label(), "Button");
    assert_eq!(decorations[0].label_kind(), "component");

    // Activating the affordance anyway is a no-op, not an error.
    pipeline.editor_mut().edit_component_of(&button);
    assert_eq!(
        pipeline.editor().active_component_editor().unwrap().component,
        app_id
    );
}

#[test]
fn every_bound_element_gets_its_own_border() {
    let item = Template::tag("li");
    let list = Template::tag("ul").with_child(item.clone());
    let app = Component::new("App", list);
    let app_id = app.id;
    let document = Document::new().with_component(app).with_frame(Frame::new());

    let scheduler = VirtualScheduler::new();
    let mut editor = Editor::new(StateStore::new(document), Rc::new(scheduler.clone()));
    editor.set_active_component_editor(app_id).unwrap();

    // Evaluator that repeats the list item, the way a repeat directive
    // would: many views, one template.
    let item_for_eval = item.clone();
    let repeat: Evaluator = Box::new(move |doc: &Document, component: ComponentId| {
        let component = doc.component(component).expect("component exists");
        let invocation = Template::component(component.reference());
        let mut list_view = View::tag("ul", component.root.id());
        for _ in 0..3 {
            list_view = list_view.with_child(expand(&item_for_eval));
        }
        View::reka(component.reference(), invocation.id(), vec![list_view])
    });

    let mut pipeline = PreviewPipeline::new(editor, repeat);
    pipeline.refresh().unwrap();
    scheduler.advance(READY_DELAY_MS + INTERACTIVE_DELAY_MS);

    let mut geometry = MapGeometry::new();
    seed_geometry(pipeline.editor(), &mut geometry, &item);
    pipeline
        .editor_mut()
        .active_component_editor_mut()
        .unwrap()
        .set_selected(Some(item.clone()));

    let decorations = compute_decorations(pipeline.editor(), &viewport(), &geometry);
    assert_eq!(decorations.len(), 3);
    assert!(decorations
        .iter()
        .all(|d| d.kind == DecorationKind::Selected && d.template.id() == item.id()));
}

#[test]
fn elements_without_geometry_are_skipped() {
    let body = Template::tag("div");
    let app = Component::new("App", body.clone());
    let app_id = app.id;
    let document = Document::new().with_component(app).with_frame(Frame::new());

    let (mut pipeline, scheduler) = session(document, app_id);
    pipeline.refresh().unwrap();
    scheduler.advance(READY_DELAY_MS + INTERACTIVE_DELAY_MS);

    pipeline
        .editor_mut()
        .active_component_editor_mut()
        .unwrap()
        .set_selected(Some(body.clone()));

    // No rectangles measured yet: no borders, no panic.
    let geometry = MapGeometry::new();
    assert!(compute_decorations(pipeline.editor(), &viewport(), &geometry).is_empty());
}

#[test]
fn decorations_carry_comment_counts() {
    let body = Template::tag("div");
    let app = Component::new("App", body.clone());
    let app_id = app.id;
    let document = Document::new().with_component(app).with_frame(Frame::new());

    let (mut pipeline, scheduler) = session(document, app_id);
    pipeline.refresh().unwrap();
    scheduler.advance(READY_DELAY_MS + INTERACTIVE_DELAY_MS);

    let mut geometry = MapGeometry::new();
    seed_geometry(pipeline.editor(), &mut geometry, &body);

    let active = pipeline.editor_mut().active_component_editor_mut().unwrap();
    active.set_selected(Some(body.clone()));
    active.add_comment(
        body.id(),
        Comment {
            author: "ana".into(),
            text: "tighten this up".into(),
        },
    );
    active.add_comment(
        body.id(),
        Comment {
            author: "ben".into(),
            text: "agreed".into(),
        },
    );

    let decorations = compute_decorations(pipeline.editor(), &viewport(), &geometry);
    assert_eq!(decorations[0].comment_count, 2);
}

#[test]
fn recomputation_is_stable_for_unchanged_state() {
    let body = Template::tag("div");
    let app = Component::new("App", body.clone());
    let app_id = app.id;
    let document = Document::new().with_component(app).with_frame(Frame::new());

    let (mut pipeline, scheduler) = session(document, app_id);
    pipeline.refresh().unwrap();
    scheduler.advance(READY_DELAY_MS + INTERACTIVE_DELAY_MS);

    let mut geometry = MapGeometry::new();
    seed_geometry(pipeline.editor(), &mut geometry, &body);
    pipeline
        .editor_mut()
        .active_component_editor_mut()
        .unwrap()
        .set_selected(Some(body.clone()));

    let first = compute_decorations(pipeline.editor(), &viewport(), &geometry);
    let second = compute_decorations(pipeline.editor(), &viewport(), &geometry);
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.template.id(), b.template.id());
        assert_eq!((a.left, a.top, a.width, a.height), (b.left, b.top, b.width, b.height));
        assert_eq!(a.overflow, b.overflow);
    }
}

#[test]
fn overlay_goes_dirty_on_pulses_and_detaches_on_drop() {
    let notifier = SyntheticNotifier::new();
    let overlay = SelectionOverlay::new(&notifier);
    assert_eq!(notifier.subscriber_count(), 1);
    assert!(overlay.needs_refresh());

    let document = Document::new();
    let scheduler = VirtualScheduler::new();
    let editor = Editor::new(StateStore::new(document), Rc::new(scheduler));

    let geometry = MapGeometry::new();
    let decorations = overlay.refresh(&editor, &viewport(), &geometry);
    assert!(decorations.is_empty());
    assert!(!overlay.needs_refresh());

    notifier.emit();
    assert!(overlay.needs_refresh());

    drop(overlay);
    assert_eq!(notifier.subscriber_count(), 0);
}
