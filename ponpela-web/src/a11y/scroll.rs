use crate::dom;
use ponpela_core::ScrollLock;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Element, HtmlElement, Node, TouchEvent};

const OVERFLOW_CLASS: &str = "a11y-scroll-locked";
const FIXED_BODY_CLASS: &str = "a11y-body-fixed";

/// Suppresses page scrolling while the panel is open. Dropping the guard
/// restores the page, including the scroll offset for the fixed-body strategy.
pub struct ScrollGuard {
    strategy: ScrollLock,
    root: HtmlElement,
    body: HtmlElement,
    offset: f64,
    touch: Option<Closure<dyn FnMut(TouchEvent)>>,
}

impl ScrollGuard {
    /// Lock scrolling. Touch scrolling stays possible inside `panel`.
    #[must_use]
    pub fn engage(
        strategy: ScrollLock,
        root: HtmlElement,
        body: HtmlElement,
        panel: Option<Element>,
    ) -> Self {
        let mut offset = 0.0;
        match strategy {
            ScrollLock::Overflow => {
                let _ = root.class_list().add_1(OVERFLOW_CLASS);
            }
            ScrollLock::FixedBody => {
                offset = dom::window()
                    .and_then(|w| w.scroll_y().ok())
                    .unwrap_or_default();
                let _ = body.style().set_property("top", &format!("-{offset}px"));
                let _ = body.class_list().add_1(FIXED_BODY_CLASS);
            }
        }
        let touch = block_touch_scroll(&body, panel);
        Self {
            strategy,
            root,
            body,
            offset,
            touch,
        }
    }
}

fn block_touch_scroll(
    body: &HtmlElement,
    panel: Option<Element>,
) -> Option<Closure<dyn FnMut(TouchEvent)>> {
    let handler = Closure::<dyn FnMut(TouchEvent)>::new(move |e: TouchEvent| {
        let inside_panel = panel.as_ref().is_some_and(|panel| {
            e.target()
                .and_then(|t| t.dyn_into::<Node>().ok())
                .is_some_and(|node| panel.contains(Some(&node)))
        });
        if !inside_panel {
            e.prevent_default();
        }
    });
    let opts = AddEventListenerOptions::new();
    opts.set_passive(false);
    body.add_event_listener_with_callback_and_add_event_listener_options(
        "touchmove",
        handler.as_ref().unchecked_ref(),
        &opts,
    )
    .ok()
    .map(|()| handler)
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        if let Some(handler) = self.touch.take() {
            let _ = self
                .body
                .remove_event_listener_with_callback("touchmove", handler.as_ref().unchecked_ref());
        }
        match self.strategy {
            ScrollLock::Overflow => {
                let _ = self.root.class_list().remove_1(OVERFLOW_CLASS);
            }
            ScrollLock::FixedBody => {
                let _ = self.body.class_list().remove_1(FIXED_BODY_CLASS);
                let _ = self.body.style().remove_property("top");
                if let Some(win) = dom::window() {
                    win.scroll_to_with_x_and_y(0.0, self.offset);
                }
            }
        }
    }
}
