//! DOM side of the accessibility widget: stylesheet injection, the filter
//! wrapper, overlays and application of a [`PresentationPlan`].

mod scroll;

pub use scroll::ScrollGuard;

use crate::dom;
use ponpela_core::{ClassToggle, FilterTarget, PresentationPlan};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement};

pub const STYLE_ID: &str = "ponpela-a11y-css";
pub const WRAPPER_ID: &str = "ponpela-a11y-wrapper";
pub const WIDGET_ROOT_ID: &str = "ponpela-a11y-root";

const WIDGET_CSS: &str = include_str!("../../static/a11y.css");

/// Stylesheet injected once into `<head>`.
#[must_use]
pub const fn widget_css() -> &'static str {
    WIDGET_CSS
}

/// Add the widget stylesheet to `<head>` unless it is already present.
///
/// # Errors
/// Returns an error when the document has no `<head>` or the element cannot be created.
pub fn inject_stylesheet() -> Result<(), JsValue> {
    let doc = dom::document().ok_or_else(|| JsValue::from_str("document unavailable"))?;
    if doc.get_element_by_id(STYLE_ID).is_some() {
        return Ok(());
    }
    let head = doc
        .head()
        .ok_or_else(|| JsValue::from_str("document has no <head>"))?;
    let style = doc.create_element("style")?;
    style.set_id(STYLE_ID);
    style.set_text_content(Some(WIDGET_CSS));
    head.append_child(&style)?;
    Ok(())
}

/// Move every pre-existing body child except scripts into a wrapper `div`.
///
/// Filters applied to the wrapper leave later siblings (the widget, fixed
/// overlays) untouched. Calling this twice reuses the existing wrapper.
///
/// # Errors
/// Returns an error when the wrapper cannot be created or children cannot be moved.
pub fn ensure_wrapper(body: &HtmlElement) -> Result<HtmlElement, JsValue> {
    if let Some(existing) = dom::html_element_by_id(WRAPPER_ID) {
        return Ok(existing);
    }
    let wrapper: HtmlElement = dom::create_element("div", "")?.dyn_into()?;
    wrapper.set_id(WRAPPER_ID);

    let children = body.child_nodes();
    let mut moving = Vec::new();
    for idx in 0..children.length() {
        let Some(node) = children.get(idx) else {
            continue;
        };
        let is_script = node
            .dyn_ref::<Element>()
            .is_some_and(|el| el.tag_name().eq_ignore_ascii_case("script"));
        if !is_script {
            moving.push(node);
        }
    }
    for node in moving {
        wrapper.append_child(&node)?;
    }
    body.insert_before(&wrapper, body.first_child().as_ref())?;
    Ok(wrapper)
}

fn overlay(body: &HtmlElement, class: &str) -> Result<Element, JsValue> {
    let el = dom::create_element("div", class)?;
    el.set_attribute("aria-hidden", "true")?;
    body.append_child(&el)?;
    Ok(el)
}

/// Node references resolved once at start-up and reused for every update.
#[derive(Clone, PartialEq)]
pub struct PageNodes {
    pub root: HtmlElement,
    pub body: HtmlElement,
    /// Receives filter classes. `None` in overlay mode.
    pub filter_target: Option<HtmlElement>,
    pub gray_overlay: Option<Element>,
    pub invert_overlay: Option<Element>,
}

impl PageNodes {
    /// Resolve the nodes for `target`, creating the wrapper or overlays it needs.
    ///
    /// # Errors
    /// Returns an error when `<html>`/`<body>` are missing or nodes cannot be created.
    pub fn attach(target: FilterTarget) -> Result<Self, JsValue> {
        let root = dom::root_element().ok_or_else(|| JsValue::from_str("no <html> element"))?;
        let body = dom::body().ok_or_else(|| JsValue::from_str("no <body> element"))?;
        let mut nodes = Self {
            root: root.clone(),
            body: body.clone(),
            filter_target: None,
            gray_overlay: None,
            invert_overlay: None,
        };
        match target {
            FilterTarget::Root => nodes.filter_target = Some(root),
            FilterTarget::Body => nodes.filter_target = Some(body),
            FilterTarget::Wrapper => nodes.filter_target = Some(ensure_wrapper(&body)?),
            FilterTarget::Overlay => {
                nodes.gray_overlay = Some(overlay(&body, "a11y-gray-overlay")?);
                nodes.invert_overlay = Some(overlay(&body, "a11y-invert-overlay")?);
            }
        }
        Ok(nodes)
    }
}

fn toggle_classes(el: &Element, toggles: &[ClassToggle]) {
    let list = el.class_list();
    for toggle in toggles {
        let _ = list.toggle_with_force(toggle.class, toggle.enabled);
    }
}

fn toggle_active(el: Option<&Element>, active: bool) {
    if let Some(el) = el {
        let _ = el.class_list().toggle_with_force("active", active);
    }
}

/// Reflect a plan onto the page.
pub fn apply_plan(nodes: &PageNodes, plan: &PresentationPlan) {
    let _ = nodes
        .root
        .style()
        .set_property("font-size", &plan.root_font_size);
    toggle_classes(&nodes.root, &plan.root_classes);
    if let Some(target) = nodes.filter_target.as_ref() {
        toggle_classes(target, &plan.filter_classes);
    }
    toggle_active(nodes.gray_overlay.as_ref(), plan.gray_overlay);
    toggle_active(nodes.invert_overlay.as_ref(), plan.invert_overlay);
}

/// Announce a change through the widget's live region.
pub fn set_status(msg: &str) {
    if let Some(node) = dom::document().and_then(|doc| doc.get_element_by_id("ponpela-a11y-status"))
    {
        node.set_text_content(Some(msg));
    }
}
