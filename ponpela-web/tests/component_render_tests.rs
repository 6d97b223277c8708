use futures::executor::block_on;
use ponpela_core::{A11yAction, A11ySettings, ContrastMode, WidgetConfig};
use ponpela_web::components::shop::{Props as ShopProps, Shop};
use ponpela_web::components::widget::{A11yWidget, Props as WidgetProps};
use ponpela_web::components::widget::panel::{A11yPanel, Props as PanelProps};
use yew::{Callback, LocalServerRenderer, NodeRef};

#[test]
fn widget_renders_closed_trigger_and_panel() {
    ponpela_web::i18n::set_lang("he");
    let props = WidgetProps {
        config: WidgetConfig::default(),
        nodes: None,
    };
    let html = block_on(LocalServerRenderer::<A11yWidget>::with_props(props).render());
    assert!(html.contains("class=\"a11y-btn\""));
    assert!(html.contains("aria-expanded=\"false\""));
    assert!(html.contains("role=\"dialog\""));
    assert!(html.contains("aria-modal=\"true\""));
    assert!(html.contains("aria-label=\"הגדרות נגישות\""));
    assert!(html.contains("ponpela-a11y-status"));
    assert!(!html.contains("a11y-dim-overlay open"));
}

#[test]
fn panel_follows_document_language() {
    ponpela_web::i18n::set_lang("en");
    let settings = A11ySettings {
        contrast: ContrastMode::Inverted,
        ..A11ySettings::default()
    };
    let props = PanelProps {
        settings,
        open: true,
        panel_ref: NodeRef::default(),
        on_action: Callback::noop(),
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<A11yPanel>::with_props(props).render());
    assert!(html.contains("dir=\"ltr\""));
    assert!(html.contains("a11y-panel open"));
    let inverted = format!(
        "data-action=\"{}\"",
        A11yAction::Contrast(ContrastMode::Inverted).as_str()
    );
    let pressed = html
        .split("<button")
        .find(|chunk| chunk.contains(&inverted))
        .expect("inverted option rendered");
    assert!(pressed.contains("aria-pressed=\"true\""));
    ponpela_web::i18n::set_lang("he");
}

#[test]
fn shop_shows_loading_before_products_arrive() {
    ponpela_web::i18n::set_lang("he");
    let html = block_on(LocalServerRenderer::<Shop>::with_props(ShopProps::default()).render());
    assert!(html.contains("טוען מוצרים"));
    assert!(!html.contains("cart-modal"));
}

#[test]
fn shop_renders_with_a_configured_storage_key() {
    assert_eq!(
        ShopProps::default().storage_key,
        ponpela_core::constants::SETTINGS_STORAGE_KEY
    );
    let props = ShopProps {
        storage_key: "site_a11y".into(),
        ..ShopProps::default()
    };
    let html = block_on(LocalServerRenderer::<Shop>::with_props(props).render());
    assert!(html.contains("class=\"loading\""));
}
