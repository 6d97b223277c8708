pub mod shop;
pub mod widget;

pub use shop::Shop;
pub use widget::A11yWidget;
