use crate::i18n;
use ponpela_core::{Cart, Product, find_product};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

/// Product collection as seen by the page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Catalog {
    #[default]
    Loading,
    /// Fetched products. A failed fetch lands here empty.
    Ready(Rc<Vec<Product>>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u32,
    pub message: String,
    /// Carries the `show` class. New notices start hidden and fade in.
    pub visible: bool,
}

/// Everything the shop renders from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShopState {
    pub catalog: Catalog,
    pub cart: Cart,
    pub cart_open: bool,
    /// The cart modal is built on first open and kept afterwards.
    pub cart_mounted: bool,
    pub notices: Vec<Notice>,
    next_notice: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopAction {
    Loaded(Vec<Product>),
    Add(u64),
    Remove(u64),
    SetQuantity(u64, i64),
    OpenCart,
    CloseCart,
    Notify(String),
    /// Add the `show` class to a notice.
    Reveal(u32),
    /// Drop the `show` class so the notice fades out.
    Fade(u32),
    Dismiss(u32),
}

impl ShopState {
    #[must_use]
    pub fn with_cart(cart: Cart) -> Self {
        Self {
            cart,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        match &self.catalog {
            Catalog::Loading => &[],
            Catalog::Ready(products) => products,
        }
    }

    /// Id of the most recent notification, used to schedule its dismissal.
    #[must_use]
    pub fn latest_notice(&self) -> Option<u32> {
        self.notices.last().map(|n| n.id)
    }

    fn set_visible(&mut self, id: u32, visible: bool) {
        if let Some(notice) = self.notices.iter_mut().find(|n| n.id == id) {
            notice.visible = visible;
        }
    }

    fn notify(&mut self, message: String) {
        self.next_notice = self.next_notice.wrapping_add(1);
        self.notices.push(Notice {
            id: self.next_notice,
            message,
            visible: false,
        });
    }

    /// Apply one action and return the next state.
    #[must_use]
    pub fn apply(mut self, action: ShopAction) -> Self {
        match action {
            ShopAction::Loaded(products) => self.catalog = Catalog::Ready(Rc::new(products)),
            ShopAction::Add(id) => {
                let Some(product) = find_product(self.products(), id).cloned() else {
                    log::warn!("add to cart: unknown product {id}");
                    return self;
                };
                self.cart.add(&product);
                let mut vars = BTreeMap::new();
                vars.insert("name", product.name.as_str());
                self.notify(i18n::tr("shop.added", Some(&vars)));
            }
            ShopAction::Remove(id) => {
                self.cart.remove(id);
            }
            ShopAction::SetQuantity(id, quantity) => {
                self.cart.update_quantity(id, quantity);
            }
            ShopAction::OpenCart => {
                self.cart_open = true;
                self.cart_mounted = true;
            }
            ShopAction::CloseCart => self.cart_open = false,
            ShopAction::Notify(message) => self.notify(message),
            ShopAction::Reveal(id) => self.set_visible(id, true),
            ShopAction::Fade(id) => self.set_visible(id, false),
            ShopAction::Dismiss(id) => self.notices.retain(|n| n.id != id),
        }
        self
    }
}

impl Reducible for ShopState {
    type Action = ShopAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}
