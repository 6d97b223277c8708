use ponpela_core::constants::SETTINGS_STORAGE_KEY;
use ponpela_core::{A11ySettings, FilterTarget, WidgetConfig};
use ponpela_web::a11y::PageNodes;
use ponpela_web::components::widget::{A11yWidget, Props};
use ponpela_web::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{EventTarget, HtmlElement, KeyboardEvent, KeyboardEventInit};
use yew::Renderer;

async fn tick() {
    dom::sleep_ms(20).await.expect("timer");
}

fn mount() -> PageNodes {
    ponpela_web::i18n::set_lang("he");
    let body = dom::body().expect("body");
    body.set_inner_html("<a href='#x' id='before'>link</a>");
    let storage = dom::local_storage().expect("localStorage");
    let _ = storage.remove_item(SETTINGS_STORAGE_KEY);

    let nodes = PageNodes::attach(FilterTarget::Wrapper).expect("attach");
    let host = dom::create_element("div", "").expect("host");
    body.append_child(&host).expect("append host");
    Renderer::<A11yWidget>::with_root_and_props(
        host,
        Props {
            config: WidgetConfig::default(),
            nodes: Some(nodes.clone()),
        },
    )
    .render();
    nodes
}

fn click(selector: &str) {
    dom::document()
        .and_then(|doc| doc.query_selector(selector).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .expect(selector)
        .click();
}

fn focus(selector: &str) -> HtmlElement {
    let el = dom::document()
        .and_then(|doc| doc.query_selector(selector).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .expect(selector);
    el.focus().expect("focus");
    el
}

fn press(target: &EventTarget, key: &str, shift: bool) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_shift_key(shift);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event =
        KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("keydown event");
    target.dispatch_event(&event).expect("dispatch");
}

fn focused_has_class(class: &str) -> bool {
    dom::active_html_element().is_some_and(|el| el.class_list().contains(class))
}

fn panel_open() -> bool {
    dom::document()
        .and_then(|doc| doc.query_selector(".a11y-panel").ok().flatten())
        .is_some_and(|panel| panel.class_list().contains("open"))
}

#[wasm_bindgen_test]
async fn option_click_applies_and_persists() {
    let nodes = mount();
    tick().await;
    click(".a11y-btn");
    tick().await;
    click("[data-action='links']");
    tick().await;

    assert!(nodes.root.class_list().contains("a11y-highlight-links"));
    let stored = dom::local_storage()
        .expect("localStorage")
        .get_item(SETTINGS_STORAGE_KEY)
        .expect("read")
        .expect("settings saved");
    assert!(A11ySettings::from_json(&stored).links);
    let status = dom::document()
        .and_then(|doc| doc.get_element_by_id("ponpela-a11y-status"))
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    assert!(status.contains("מופעל"));
    click(".a11y-close");
    tick().await;
}

#[wasm_bindgen_test]
async fn reset_restores_defaults_and_closes() {
    let nodes = mount();
    tick().await;
    click(".a11y-btn");
    tick().await;
    click("[data-action='font-up']");
    click("[data-action='cursor']");
    tick().await;
    click(".a11y-reset");
    tick().await;

    assert!(!nodes.root.class_list().contains("a11y-big-cursor"));
    assert_eq!(
        nodes.root.style().get_property_value("font-size").unwrap_or_default(),
        "100%"
    );
    let panel = dom::document()
        .and_then(|doc| doc.query_selector(".a11y-panel").ok().flatten())
        .expect("panel");
    assert!(!panel.class_list().contains("open"));
}

#[wasm_bindgen_test]
async fn opening_focuses_close_and_locks_scroll() {
    let nodes = mount();
    tick().await;
    click(".a11y-btn");
    tick().await;

    let active = dom::active_html_element().expect("focused element");
    assert!(active.class_list().contains("a11y-close"));
    assert!(nodes.root.class_list().contains("a11y-scroll-locked"));

    click(".a11y-dim-overlay");
    tick().await;
    assert!(!nodes.root.class_list().contains("a11y-scroll-locked"));
}

#[wasm_bindgen_test]
async fn escape_outside_the_panel_closes_and_focuses_trigger() {
    mount();
    tick().await;
    click(".a11y-btn");
    tick().await;
    assert!(panel_open());

    let body = dom::body().expect("body");
    press(&body, "Escape", false);
    tick().await;

    assert!(!panel_open());
    assert!(focused_has_class("a11y-btn"));
}

#[wasm_bindgen_test]
async fn tab_wraps_between_first_and_last_control() {
    mount();
    tick().await;
    click(".a11y-btn");
    tick().await;

    let reset = focus(".a11y-reset");
    press(&reset, "Tab", false);
    assert!(focused_has_class("a11y-close"));

    let close = focus(".a11y-close");
    press(&close, "Tab", true);
    assert!(focused_has_class("a11y-reset"));

    click(".a11y-close");
    tick().await;
}

#[wasm_bindgen_test]
async fn tab_from_the_page_returns_into_the_panel() {
    mount();
    tick().await;
    click(".a11y-btn");
    tick().await;

    let outside = focus("#before");
    press(&outside, "Tab", false);
    assert!(focused_has_class("a11y-close"));

    click(".a11y-close");
    tick().await;
}

#[wasm_bindgen_test]
async fn closing_returns_focus_to_the_previous_element() {
    mount();
    tick().await;
    focus("#before");
    click(".a11y-btn");
    tick().await;
    assert!(focused_has_class("a11y-close"));

    click(".a11y-close");
    tick().await;
    let active = dom::active_html_element().expect("focused element");
    assert_eq!(active.id(), "before");
}

#[wasm_bindgen_test]
async fn keys_are_ignored_while_closed() {
    mount();
    tick().await;
    let outside = focus("#before");
    press(&outside, "Tab", false);
    press(&outside, "Escape", false);
    tick().await;
    assert!(!panel_open());
    let active = dom::active_html_element().expect("focused element");
    assert_eq!(active.id(), "before");
}
