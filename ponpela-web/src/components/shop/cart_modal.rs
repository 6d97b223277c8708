use crate::i18n;
use ponpela_core::constants::CART_IMAGE_FALLBACK;
use ponpela_core::{Cart, CartLine, format_price};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub cart: Cart,
    pub open: bool,
    pub on_close: Callback<()>,
    /// `(id, new quantity)`; zero or below removes the line.
    pub on_quantity: Callback<(u64, i64)>,
    pub on_remove: Callback<u64>,
    pub on_checkout: Callback<()>,
}

fn cart_line(line: &CartLine, on_quantity: &Callback<(u64, i64)>, on_remove: &Callback<u64>) -> Html {
    let id = line.id;
    let quantity = i64::from(line.quantity);
    let step = |delta: i64| {
        let cb = on_quantity.clone();
        Callback::from(move |_: MouseEvent| cb.emit((id, quantity + delta)))
    };
    let remove = {
        let cb = on_remove.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id))
    };
    let image = line
        .image
        .clone()
        .unwrap_or_else(|| CART_IMAGE_FALLBACK.to_string());

    html! {
      <div class="cart-item" key={id}>
        <img src={image} alt={line.name.clone()} class="cart-item-image" />
        <div class="cart-item-info">
          <h4>{ &line.name }</h4>
          <p class="cart-item-price">{ format_price(line.price_cents) }</p>
        </div>
        <div class="cart-item-quantity">
          <button type="button" aria-label={i18n::t("shop.decrease")} onclick={step(-1)}>{"-"}</button>
          <span>{ line.quantity }</span>
          <button type="button" aria-label={i18n::t("shop.increase")} onclick={step(1)}>{"+"}</button>
        </div>
        <button type="button" class="btn-remove" aria-label={i18n::t("shop.remove")} onclick={remove}>{"×"}</button>
      </div>
    }
}

#[function_component(CartModal)]
pub fn cart_modal(p: &Props) -> Html {
    let close = {
        let cb = p.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let checkout = {
        let cb = p.on_checkout.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let display = if p.open { "display: flex" } else { "display: none" };

    html! {
      <div id="cart-modal" class="modal" style={display} role="dialog" aria-modal="true"
        aria-label={i18n::t("shop.cart_title")}>
        <div class="modal-content">
          <div class="modal-header">
            <h2>{ i18n::t("shop.cart_title") }</h2>
            <button type="button" class="btn-close" aria-label={i18n::t("shop.close")} onclick={close}>{"×"}</button>
          </div>
          <div id="cart-items" class="cart-items">
            if p.cart.is_empty() {
              <p class="empty-cart">{ i18n::t("shop.cart_empty") }</p>
            } else {
              { for p.cart.lines().iter().map(|line| cart_line(line, &p.on_quantity, &p.on_remove)) }
            }
          </div>
          <div class="cart-footer">
            <div class="cart-total-row">
              <span>{ i18n::t("shop.total") }</span>
              <span id="cart-total" class="cart-total">{ format_price(p.cart.total_cents()) }</span>
            </div>
            <button type="button" class="btn-checkout" onclick={checkout}>{ i18n::t("shop.checkout") }</button>
          </div>
        </div>
      </div>
    }
}
