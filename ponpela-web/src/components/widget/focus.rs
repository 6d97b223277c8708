use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, KeyboardEvent};
use yew::hook;
use yew::prelude::*;

const FOCUSABLE_QUERY: &str =
    "button, [href], input, textarea, select, [tabindex]:not([tabindex='-1'])";
const INITIAL_FOCUS_QUERY: &str = ".a11y-close";

/// Where focus goes when the panel closes. `None` restores whatever had focus
/// before the panel opened.
pub type ReturnFocus = Rc<RefCell<Option<NodeRef>>>;

/// Move focus into the panel when it opens and hand it back when it closes.
#[hook]
pub fn use_focus_management(open: bool, container_ref: NodeRef, return_focus: ReturnFocus) {
    use_effect_with((open, container_ref), move |(open, container_ref)| {
        let mut prev_focus: Option<web_sys::HtmlElement> = None;
        let focus_target = if cfg!(target_arch = "wasm32") && *open {
            prev_focus = crate::dom::active_html_element();

            container_ref.cast::<web_sys::Element>().and_then(|el| {
                el.query_selector(INITIAL_FOCUS_QUERY)
                    .ok()
                    .flatten()
                    .or_else(|| el.query_selector(FOCUSABLE_QUERY).ok().flatten())
                    .and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok())
            })
        } else {
            None
        };

        if let Some(first) = focus_target {
            let _ = first.focus();
        }
        let opened = *open;
        move || {
            if !opened {
                return;
            }
            let override_target = return_focus
                .borrow_mut()
                .take()
                .and_then(|node| node.cast::<web_sys::HtmlElement>());
            if let Some(el) = override_target.or(prev_focus) {
                let _ = el.focus();
            }
        }
    });
}

/// A `keydown` listener on `document`, removed when dropped.
struct DocumentKeydown {
    document: Document,
    handler: Closure<dyn FnMut(KeyboardEvent)>,
}

impl DocumentKeydown {
    fn attach(on_key: Callback<KeyboardEvent>) -> Option<Self> {
        let document = crate::dom::document()?;
        let handler = Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| on_key.emit(e));
        document
            .add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { document, handler })
    }
}

impl Drop for DocumentKeydown {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("keydown", self.handler.as_ref().unchecked_ref());
    }
}

/// Route every document keydown to `on_key` while `open`, so Escape and the
/// Tab trap work wherever focus currently is.
#[hook]
pub fn use_document_keydown(open: bool, on_key: Callback<KeyboardEvent>) {
    use_effect_with(open, move |open| {
        let listener = if cfg!(target_arch = "wasm32") && *open {
            DocumentKeydown::attach(on_key)
        } else {
            None
        };
        move || drop(listener)
    });
}

/// Escape closes; Tab and Shift+Tab wrap between the first and last control.
pub fn keydown_handler(container_ref: NodeRef, on_escape: Callback<()>) -> Callback<KeyboardEvent> {
    Callback::from(move |e: KeyboardEvent| {
        if !cfg!(target_arch = "wasm32") {
            let _ = e;
            return;
        }
        if e.key() == "Escape" {
            e.prevent_default();
            on_escape.emit(());
            return;
        }
        if e.key() != "Tab" {
            return;
        }
        let Some(container) = container_ref.cast::<web_sys::Element>() else {
            return;
        };
        let Ok(nodes) = container.query_selector_all(FOCUSABLE_QUERY) else {
            return;
        };
        let len = nodes.length();
        if len == 0 {
            return;
        }
        let first = nodes
            .get(0)
            .and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok());
        let last = nodes
            .get(len - 1)
            .and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok());
        let active = crate::dom::document().and_then(|d| d.active_element());
        let shift = e.shift_key();
        if let (Some(first), Some(last), Some(active)) = (first, last, active) {
            let first_el: web_sys::Element = first.clone().unchecked_into();
            let last_el: web_sys::Element = last.clone().unchecked_into();
            if !container.contains(Some(&active)) {
                e.prevent_default();
                let _ = first.focus();
                return;
            }
            if shift && active == first_el {
                e.prevent_default();
                let _ = last.focus();
            } else if !shift && active == last_el {
                e.prevent_default();
                let _ = first.focus();
            }
        }
    })
}
