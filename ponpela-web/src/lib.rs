#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod api;
pub mod bridge;
pub mod components;
pub mod dom;
pub mod i18n;
pub mod storage;

#[cfg(target_arch = "wasm32")]
fn widget_config(root: &web_sys::Element) -> ponpela_core::WidgetConfig {
    ponpela_core::WidgetConfig::from_attributes(
        root.get_attribute("data-a11y-storage-key").as_deref(),
        root.get_attribute("data-a11y-filter").as_deref(),
        root.get_attribute("data-a11y-scroll").as_deref(),
    )
}

/// Mount the accessibility widget at the end of `<body>`. A second call is a no-op.
#[cfg(target_arch = "wasm32")]
fn mount_widget(config: ponpela_core::WidgetConfig) -> Result<(), JsValue> {
    use crate::components::widget::{A11yWidget, Props};

    if dom::html_element_by_id(a11y::WIDGET_ROOT_ID).is_some() {
        log::debug!("accessibility widget already mounted");
        return Ok(());
    }
    a11y::inject_stylesheet()?;
    let nodes = a11y::PageNodes::attach(config.filter_target)?;

    let host = dom::create_element("div", "")?;
    host.set_id(a11y::WIDGET_ROOT_ID);
    nodes.body.append_child(&host)?;

    let props = Props {
        config,
        nodes: Some(nodes),
    };
    yew::Renderer::<A11yWidget>::with_root_and_props(host, props).render();
    Ok(())
}

/// Mount the shop into `#products-container` when the page has one.
#[cfg(target_arch = "wasm32")]
fn mount_shop(storage_key: String) {
    use crate::components::shop::{PRODUCTS_CONTAINER_ID, Props, Shop};

    let Some(container) = dom::document().and_then(|doc| doc.get_element_by_id(PRODUCTS_CONTAINER_ID))
    else {
        log::error!("products container #{PRODUCTS_CONTAINER_ID} not found; shop not mounted");
        return;
    };
    container.set_inner_html("");
    let props = Props {
        storage_key,
        ..Props::default()
    };
    yew::Renderer::<Shop>::with_root_and_props(container, props).render();
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }

    let Some(root) = dom::root_element() else {
        log::error!("no <html> element; nothing mounted");
        return;
    };
    let html_lang = root.get_attribute("lang");
    i18n::set_lang(i18n::lang_for_document(html_lang.as_deref()));
    let config = widget_config(&root);
    let storage_key = config.storage_key.clone();

    if let Err(e) = mount_widget(config) {
        log::error!(
            "accessibility widget failed to start: {}",
            dom::js_error_message(&e)
        );
    }
    mount_shop(storage_key);
}
