//! JavaScript entry points for host pages that wire their own cart controls.
//!
//! The mounted shop registers its dispatcher here; the exported functions
//! forward to it. Calls made before the shop mounts are logged and dropped.
use crate::components::shop::state::ShopAction;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use yew::Callback;

thread_local! {
    static SHOP: RefCell<Option<Callback<ShopAction>>> = const { RefCell::new(None) };
}

pub(crate) fn register(dispatch: Callback<ShopAction>) {
    SHOP.with(|slot| *slot.borrow_mut() = Some(dispatch));
}

pub(crate) fn unregister() {
    SHOP.with(|slot| slot.borrow_mut().take());
}

/// Forward `action` to the mounted shop. Returns `false` when none is mounted.
pub fn send(action: ShopAction) -> bool {
    let dispatch = SHOP.with(|slot| slot.borrow().clone());
    match dispatch {
        Some(cb) => {
            cb.emit(action);
            true
        }
        None => {
            log::warn!("shop is not mounted; ignoring {action:?}");
            false
        }
    }
}

#[wasm_bindgen(js_name = openCart)]
pub fn open_cart() {
    send(ShopAction::OpenCart);
}

#[wasm_bindgen(js_name = closeCart)]
pub fn close_cart() {
    send(ShopAction::CloseCart);
}

#[wasm_bindgen(js_name = addToCart)]
pub fn add_to_cart(product_id: u32) {
    send(ShopAction::Add(u64::from(product_id)));
}

#[wasm_bindgen(js_name = removeFromCart)]
pub fn remove_from_cart(product_id: u32) {
    send(ShopAction::Remove(u64::from(product_id)));
}

#[wasm_bindgen(js_name = updateQuantity)]
pub fn update_quantity(product_id: u32, quantity: i32) {
    send(ShopAction::SetQuantity(
        u64::from(product_id),
        i64::from(quantity),
    ));
}
