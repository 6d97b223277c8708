//! Product listing, cart modal and notifications.
//!
//! The shop mounts into the host page's `products-container`. The cart modal
//! and toasts are portalled into `<body>` so page filters applied to the
//! content wrapper never affect their fixed positioning.
pub mod cart_modal;
pub mod notification;
pub mod product_card;
pub mod state;

use crate::api::ShopClient;
use crate::bridge;
use crate::dom;
use crate::i18n;
use crate::storage::web_persistence;
use cart_modal::CartModal;
use notification::Notifications;
use ponpela_core::constants::{
    CHECKOUT_PATH, NOTIFICATION_FADE_MS, NOTIFICATION_MS, NOTIFICATION_REVEAL_MS,
    SETTINGS_STORAGE_KEY,
};
use product_card::ProductGrid;
use state::{Catalog, ShopAction, ShopState};
use std::cell::RefCell;
use web_sys::HtmlElement;
use yew::prelude::*;

/// Host element showing the cart item count.
pub const CART_BADGE_ID: &str = "cart-count";
/// Host element the shop mounts into.
pub const PRODUCTS_CONTAINER_ID: &str = "products-container";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub client: ShopClient,
    /// Settings key configured for the page; the cart shares its storage.
    #[prop_or_else(|| SETTINGS_STORAGE_KEY.to_string())]
    pub storage_key: String,
}

impl Default for Props {
    fn default() -> Self {
        Self {
            client: ShopClient::default(),
            storage_key: SETTINGS_STORAGE_KEY.to_string(),
        }
    }
}

/// Render `content` at the end of `<body>` in the browser, inline elsewhere.
fn in_body(content: Html) -> Html {
    #[cfg(target_arch = "wasm32")]
    if let Some(body) = dom::body() {
        return create_portal(content, body.into());
    }
    content
}

/// Reveal, fade and finally remove notice `id`.
#[allow(clippy::future_not_send)]
async fn run_notice(id: u32, dispatcher: UseReducerDispatcher<ShopState>) {
    let phases = [
        (NOTIFICATION_REVEAL_MS, ShopAction::Reveal(id)),
        (NOTIFICATION_MS - NOTIFICATION_REVEAL_MS, ShopAction::Fade(id)),
        (NOTIFICATION_FADE_MS, ShopAction::Dismiss(id)),
    ];
    for (delay, action) in phases {
        if let Err(e) = dom::sleep_ms(delay).await {
            log::warn!("notification timer failed: {}", dom::js_error_message(&e));
        }
        dispatcher.dispatch(action);
    }
}

/// The badge element is looked up once and reused.
fn update_badge(slot: &RefCell<Option<Option<HtmlElement>>>, count: u64) {
    let mut slot = slot.borrow_mut();
    let badge = slot.get_or_insert_with(|| dom::html_element_by_id(CART_BADGE_ID));
    if let Some(badge) = badge {
        badge.set_text_content(Some(&count.to_string()));
        let display = if count > 0 { "inline" } else { "none" };
        let _ = badge.style().set_property("display", display);
    }
}

#[function_component(Shop)]
pub fn shop(props: &Props) -> Html {
    let persistence = use_memo(props.storage_key.clone(), |key| web_persistence(key));
    let state = {
        let persistence = persistence.clone();
        use_reducer(move || ShopState::with_cart(persistence.load_cart()))
    };
    let badge = use_mut_ref(|| None::<Option<HtmlElement>>);

    {
        let client = props.client.clone();
        let dispatcher = state.dispatcher();
        use_effect_with(client, move |client| {
            let client = client.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let products = match client.fetch_products().await {
                    Ok(products) => products,
                    Err(e) => {
                        log::error!("failed to fetch products: {e}");
                        Vec::new()
                    }
                };
                dispatcher.dispatch(ShopAction::Loaded(products));
            });
            || ()
        });
    }

    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |()| {
            bridge::register(Callback::from(move |action| dispatcher.dispatch(action)));
            bridge::unregister
        });
    }

    {
        let persistence = persistence.clone();
        use_effect_with(state.cart.clone(), move |cart| {
            update_badge(&badge, cart.item_count());
            if let Err(e) = persistence.save_cart(cart) {
                log::error!("failed to save cart: {e}");
            }
            || ()
        });
    }

    {
        let dispatcher = state.dispatcher();
        use_effect_with(state.latest_notice(), move |latest| {
            if let Some(id) = *latest {
                wasm_bindgen_futures::spawn_local(run_notice(id, dispatcher));
            }
            || ()
        });
    }

    let on_add = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id| dispatcher.dispatch(ShopAction::Add(id)))
    };
    let on_details = {
        let client = props.client.clone();
        Callback::from(move |id: u64| {
            let client = client.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match client.fetch_product(id).await {
                    Ok(product) => log::info!("product details: {product:?}"),
                    Err(e) => log::error!("failed to fetch product {id}: {e}"),
                }
            });
        })
    };
    let on_close = {
        let dispatcher = state.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(ShopAction::CloseCart))
    };
    let on_quantity = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(id, qty)| dispatcher.dispatch(ShopAction::SetQuantity(id, qty)))
    };
    let on_remove = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id| dispatcher.dispatch(ShopAction::Remove(id)))
    };
    let on_checkout = {
        let dispatcher = state.dispatcher();
        let empty = state.cart.is_empty();
        Callback::from(move |()| {
            if empty {
                dispatcher.dispatch(ShopAction::Notify(i18n::t("shop.cart_empty_alert")));
            } else {
                dom::navigate(CHECKOUT_PATH);
            }
        })
    };

    let listing = match &state.catalog {
        Catalog::Loading => html! { <p class="loading">{ i18n::t("shop.loading") }</p> },
        Catalog::Ready(products) => html! {
            <ProductGrid products={products.clone()} {on_add} {on_details} />
        },
    };

    html! {
      <>
        { listing }
        { in_body(html! {
            <>
              if state.cart_mounted {
                <CartModal
                  cart={state.cart.clone()}
                  open={state.cart_open}
                  {on_close}
                  {on_quantity}
                  {on_remove}
                  {on_checkout}
                />
              }
              <Notifications notices={state.notices.clone()} />
            </>
        }) }
      </>
    }
}
