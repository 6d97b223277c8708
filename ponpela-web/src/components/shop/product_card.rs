use crate::i18n;
use ponpela_core::{Product, format_price};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CardProps {
    pub product: Product,
    pub on_add: Callback<u64>,
    /// Fired when the card is clicked anywhere except the add button.
    #[prop_or_default]
    pub on_details: Callback<u64>,
}

#[function_component(ProductCard)]
pub fn product_card(p: &CardProps) -> Html {
    let id = p.product.id;
    let on_card_click = {
        let cb = p.on_details.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id))
    };
    let on_add_click = {
        let cb = p.on_add.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(id);
        })
    };

    html! {
      <div class="product-card" onclick={on_card_click}>
        <div class="product-image-wrapper">
          if let Some(src) = p.product.image.clone() {
            <img src={src} alt={p.product.name.clone()} class="product-image" loading="lazy" />
          } else {
            <div class="product-no-image">{ i18n::t("shop.no_image") }</div>
          }
        </div>
        <div class="product-info">
          <h3 class="product-name">{ &p.product.name }</h3>
          if let Some(desc) = p.product.short_description.as_ref() {
            <p class="product-short-desc">{ desc }</p>
          }
          <div class="product-footer">
            <span class="product-price">{ format_price(p.product.price_cents) }</span>
            <button type="button" class="btn-add-to-cart" onclick={on_add_click}>
              { i18n::t("shop.add_to_cart") }
            </button>
          </div>
        </div>
      </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct GridProps {
    pub products: Rc<Vec<Product>>,
    pub on_add: Callback<u64>,
    #[prop_or_default]
    pub on_details: Callback<u64>,
}

/// Contents of the products container: one card per product, or the empty notice.
#[function_component(ProductGrid)]
pub fn product_grid(p: &GridProps) -> Html {
    if p.products.is_empty() {
        return html! { <p class="no-products">{ i18n::t("shop.no_products") }</p> };
    }
    html! {
      { for p.products.iter().map(|product| html! {
          <ProductCard
            key={product.id}
            product={product.clone()}
            on_add={p.on_add.clone()}
            on_details={p.on_details.clone()}
          />
      }) }
    }
}
