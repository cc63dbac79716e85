//! End-to-end scoping tests across component, slot, and external
//! boundaries, built on hand-assembled view trees the way the evaluator
//! would emit them.

use crate::binding::BindingTable;
use crate::external::ElementSpec;
use crate::renderer::Renderer;
use mosaic_types::{Component, ComponentRef, PropValue, Props, StyleMap, Template, View};

/// Document fixture: `App` renders a `main` tag containing a `Card`
/// invocation; `Card` renders a `section` with an internal `header` and a
/// slot filled by the call site with a `p` tag.
struct Fixture {
    view: View,
    main_tpl: Template,
    card_invocation: Template,
    card_section: Template,
    card_header: Template,
    card_slot: Template,
    slot_fill: Template,
}

fn fixture() -> Fixture {
    let card_section = Template::tag("section");
    let card_header = Template::tag("header");
    let card_slot = Template::slot();
    let card = Component::new(
        "Card",
        card_section.clone(),
    );

    let slot_fill = Template::tag("p");
    let card_invocation = Template::component(card.reference());
    let main_tpl = Template::tag("main");
    let app = Component::new("App", main_tpl.clone());
    let app_invocation = Template::component(app.reference());

    // What the evaluator would produce for one pass.
    let section_view = View::tag("section", card_section.id())
        .with_child(View::tag("header", card_header.id()))
        .with_child(View::slot(
            card_slot.id(),
            vec![View::tag("p", slot_fill.id())],
        ));

    let card_view = View::reka(card.reference(), card_invocation.id(), vec![section_view]);

    let main_view = View::tag("main", main_tpl.id()).with_child(card_view);

    let view = View::reka(app.reference(), app_invocation.id(), vec![main_view]);

    Fixture {
        view,
        main_tpl,
        card_invocation,
        card_section,
        card_header,
        card_slot,
        slot_fill,
    }
}

#[test]
fn binding_symmetry_holds_across_mount_and_unmount() {
    let fx = fixture();
    let mut renderer = Renderer::new();
    let bindings = BindingTable::new();

    let handle = renderer.render_root(&fx.view, &bindings).unwrap();

    // Every element the mount bound is discoverable through the table.
    for template in [&fx.main_tpl, &fx.card_invocation, &fx.slot_fill] {
        let elements = bindings.elements_for(template.id());
        assert!(
            !elements.is_empty(),
            "expected live binding for {}",
            template.name()
        );
        for element in &elements {
            assert!(renderer.arena().contains(*element));
        }
    }

    renderer.unmount(handle);

    for template in [&fx.main_tpl, &fx.card_invocation, &fx.slot_fill] {
        assert!(bindings.elements_for(template.id()).is_empty());
    }
    assert!(bindings.is_empty());
}

#[test]
fn nested_component_binds_its_invocation_not_its_body() {
    let fx = fixture();
    let mut renderer = Renderer::new();
    let bindings = BindingTable::new();

    let _handle = renderer.render_root(&fx.view, &bindings).unwrap();

    // The section element realizes the Card invocation template.
    assert_eq!(bindings.elements_for(fx.card_invocation.id()).len(), 1);
    // The section's own body template gets no entry of its own.
    assert!(bindings.elements_for(fx.card_section.id()).is_empty());
}

#[test]
fn nested_component_internals_are_unselectable() {
    let fx = fixture();
    let mut renderer = Renderer::new();
    let bindings = BindingTable::new();

    let _handle = renderer.render_root(&fx.view, &bindings).unwrap();

    // `header` lives strictly inside Card's internals; it must not be
    // reachable from any template binding.
    assert!(bindings.elements_for(fx.card_header.id()).is_empty());
}

#[test]
fn slot_content_inside_nested_component_binds_to_its_own_template() {
    let fx = fixture();
    let mut renderer = Renderer::new();
    let bindings = BindingTable::new();

    let _handle = renderer.render_root(&fx.view, &bindings).unwrap();

    // The `p` supplied by the call site stays editable: it binds to its
    // own template, not to the slot placeholder.
    assert_eq!(bindings.elements_for(fx.slot_fill.id()).len(), 1);
    assert!(bindings.elements_for(fx.card_slot.id()).is_empty());
}

#[test]
fn root_owned_slot_binds_direct_children_to_the_placeholder() {
    // Top-level slot content: a slot rendered with no enclosing parent
    // component binds its immediate children to the slot template itself.
    let slot_tpl = Template::slot();
    let child_tpl = Template::tag("div");
    let grandchild_tpl = Template::tag("span");
    let app = Component::new("App", Template::tag("div"));
    let app_invocation = Template::component(app.reference());

    let view = View::reka(
        app.reference(),
        app_invocation.id(),
        vec![View::slot(
            slot_tpl.id(),
            vec![View::tag("div", child_tpl.id())
                .with_child(View::tag("span", grandchild_tpl.id()))],
        )],
    );

    let mut renderer = Renderer::new();
    let bindings = BindingTable::new();
    let _handle = renderer.render_root(&view, &bindings).unwrap();

    assert_eq!(bindings.elements_for(slot_tpl.id()).len(), 1);
    // Only the immediate child registers; deeper content is outside the
    // slot's direct children and degrades to unselectable.
    assert!(bindings.elements_for(child_tpl.id()).is_empty());
    assert!(bindings.elements_for(grandchild_tpl.id()).is_empty());
}

#[test]
fn repeated_invocations_map_many_elements_to_one_template() {
    // List rendering: the same template realized by several live elements.
    let item_tpl = Template::tag("li");
    let app = Component::new("App", Template::tag("ul"));
    let app_invocation = Template::component(app.reference());
    let list_tpl = Template::tag("ul");

    let items: Vec<View> = (0..3)
        .map(|i| {
            View::tag("li", item_tpl.id())
                .with_key(format!("item-{}", i))
                .with_child(View::text(format!("item {}", i), item_tpl.id()))
        })
        .collect();

    let view = View::reka(
        app.reference(),
        app_invocation.id(),
        vec![{
            let mut list = View::tag("ul", list_tpl.id());
            for item in items {
                list = list.with_child(item);
            }
            list
        }],
    );

    let mut renderer = Renderer::new();
    let bindings = BindingTable::new();
    let _handle = renderer.render_root(&view, &bindings).unwrap();

    // Three <li> elements plus three text leaves all realize item_tpl.
    assert_eq!(bindings.elements_for(item_tpl.id()).len(), 6);
}

#[test]
fn external_component_binds_once_through_its_own_path() {
    let chart = ComponentRef::external("Chart");
    let chart_invocation = Template::component(chart.clone());
    let app = Component::new("App", Template::tag("div"));
    let app_invocation = Template::component(app.reference());

    let mut props = Props::new();
    props.insert("label".into(), PropValue::from("sales"));

    let view = View::reka(
        app.reference(),
        app_invocation.id(),
        vec![View::external(chart, chart_invocation.id(), props)],
    );

    let mut renderer = Renderer::new();
    renderer
        .externals_mut()
        .register("Chart", |props| {
            let label = props
                .get("label")
                .and_then(|v| v.as_text())
                .unwrap_or("chart")
                .to_string();
            ElementSpec::node("canvas").with_attr("aria-label", label)
        });

    let bindings = BindingTable::new();
    let _handle = renderer.render_root(&view, &bindings).unwrap();

    assert_eq!(bindings.elements_for(chart_invocation.id()).len(), 1);
}

#[test]
fn rerender_produces_fresh_elements_for_fresh_views() {
    // Each evaluation pass yields an independent view tree; the renderer
    // must not assume identity across passes.
    let app = Component::new("App", Template::tag("div"));
    let app_invocation = Template::component(app.reference());
    let div_tpl = Template::tag("div");

    let make_pass = || {
        View::reka(
            app.reference(),
            app_invocation.id(),
            vec![View::tag("div", div_tpl.id()).with_prop(
                "style",
                PropValue::Style(StyleMap::new().with("color", "red")),
            )],
        )
    };

    let mut renderer = Renderer::new();
    let bindings = BindingTable::new();

    let first = renderer.render_root(&make_pass(), &bindings).unwrap();
    let first_element = *bindings.elements_for(div_tpl.id()).iter().next().unwrap();
    renderer.unmount(first);

    let _second = renderer.render_root(&make_pass(), &bindings).unwrap();
    let second_element = *bindings.elements_for(div_tpl.id()).iter().next().unwrap();

    // Same template key across passes, fresh element handles.
    assert_ne!(first_element, second_element);
    assert_eq!(bindings.elements_for(div_tpl.id()).len(), 1);
}
