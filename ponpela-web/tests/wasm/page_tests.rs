use ponpela_core::{A11ySettings, FilterTarget, PresentationPlan, ScrollLock};
use ponpela_web::a11y::{self, PageNodes, ScrollGuard};
use ponpela_web::dom;
use wasm_bindgen_test::*;

fn reset_body(markup: &str) {
    let body = dom::body().expect("document body");
    body.set_inner_html(markup);
    let root = dom::root_element().expect("html element");
    root.set_class_name("");
    let _ = root.style().remove_property("font-size");
}

#[wasm_bindgen_test]
fn stylesheet_is_injected_once() {
    a11y::inject_stylesheet().expect("inject");
    a11y::inject_stylesheet().expect("inject again");
    let doc = dom::document().expect("document");
    let styles = doc
        .query_selector_all(&format!("#{}", a11y::STYLE_ID))
        .expect("query styles");
    assert_eq!(styles.length(), 1);
}

#[wasm_bindgen_test]
fn wrapper_collects_content_but_not_scripts() {
    reset_body("<main id='content'>hi</main><script></script><p>tail</p>");
    let nodes = PageNodes::attach(FilterTarget::Wrapper).expect("attach");
    let wrapper = nodes.filter_target.clone().expect("wrapper");
    assert_eq!(wrapper.id(), a11y::WRAPPER_ID);
    assert_eq!(wrapper.children().length(), 2);
    let again = PageNodes::attach(FilterTarget::Wrapper).expect("attach twice");
    assert_eq!(again.filter_target, nodes.filter_target);
}

#[wasm_bindgen_test]
fn plan_lands_on_root_and_filter_target() {
    reset_body("<main>content</main>");
    let nodes = PageNodes::attach(FilterTarget::Wrapper).expect("attach");
    let settings = A11ySettings {
        grayscale: true,
        links: true,
        font_size: 2,
        ..A11ySettings::default()
    };
    a11y::apply_plan(&nodes, &PresentationPlan::from_settings(&settings, FilterTarget::Wrapper));
    let root_classes = nodes.root.class_list();
    assert!(root_classes.contains("a11y-highlight-links"));
    assert!(!root_classes.contains("a11y-filter-grayscale"));
    let wrapper = nodes.filter_target.clone().expect("wrapper");
    assert!(wrapper.class_list().contains("a11y-filter-grayscale"));
    assert_eq!(
        nodes.root.style().get_property_value("font-size").unwrap_or_default(),
        "130%"
    );

    a11y::apply_plan(
        &nodes,
        &PresentationPlan::from_settings(&A11ySettings::default(), FilterTarget::Wrapper),
    );
    assert!(!root_classes.contains("a11y-highlight-links"));
    assert!(!wrapper.class_list().contains("a11y-filter-grayscale"));
}

#[wasm_bindgen_test]
fn scroll_guard_restores_on_drop() {
    reset_body("<main>content</main>");
    let nodes = PageNodes::attach(FilterTarget::Body).expect("attach");
    {
        let _guard = ScrollGuard::engage(
            ScrollLock::Overflow,
            nodes.root.clone(),
            nodes.body.clone(),
            None,
        );
        assert!(nodes.root.class_list().contains("a11y-scroll-locked"));
    }
    assert!(!nodes.root.class_list().contains("a11y-scroll-locked"));

    {
        let _guard = ScrollGuard::engage(
            ScrollLock::FixedBody,
            nodes.root.clone(),
            nodes.body.clone(),
            None,
        );
        assert!(nodes.body.class_list().contains("a11y-body-fixed"));
    }
    assert!(!nodes.body.class_list().contains("a11y-body-fixed"));
    assert_eq!(
        nodes.body.style().get_property_value("top").unwrap_or_default(),
        ""
    );
}

#[wasm_bindgen_test]
fn fixed_body_pins_and_restores_scroll_offset() {
    a11y::inject_stylesheet().expect("inject");
    reset_body("<div style='height: 5000px'>tall</div>");
    let nodes = PageNodes::attach(FilterTarget::Body).expect("attach");
    let win = dom::window().expect("window");
    win.scroll_to_with_x_and_y(0.0, 200.0);
    assert!((win.scroll_y().expect("scroll_y") - 200.0).abs() < 1.0);

    let guard = ScrollGuard::engage(
        ScrollLock::FixedBody,
        nodes.root.clone(),
        nodes.body.clone(),
        None,
    );
    assert_eq!(
        nodes.body.style().get_property_value("top").unwrap_or_default(),
        "-200px"
    );
    drop(guard);

    assert!((win.scroll_y().expect("scroll_y") - 200.0).abs() < 1.0);
    win.scroll_to_with_x_and_y(0.0, 0.0);
}
