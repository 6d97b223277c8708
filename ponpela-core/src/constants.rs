//! Centralized keys and bounds shared by the widget and the shop.
//!
//! Storage keys match the blobs written by earlier deployments so existing
//! visitors keep their preferences and carts.

// Storage keys -------------------------------------------------------------
pub const SETTINGS_STORAGE_KEY: &str = "ponpela_a11y";
pub const CART_STORAGE_KEY: &str = "ponpela_cart";

// Font scaling -------------------------------------------------------------
pub const FONT_OFFSET_MIN: i8 = -2;
pub const FONT_OFFSET_MAX: i8 = 5;
pub const FONT_BASE_PERCENT: i32 = 100;
pub const FONT_STEP_PERCENT: i32 = 15;

// Shop ---------------------------------------------------------------------
pub const DEFAULT_SHOP_API: &str = "https://shop.ponpela.co.il/wp-json/ponpela/v1/products";
pub const CURRENCY_PREFIX: &str = "₪";
pub const CART_IMAGE_FALLBACK: &str = "/logo.png";
pub const CHECKOUT_PATH: &str = "/checkout.html";
/// Delay before a new toast gets its `show` class so the CSS transition runs.
pub const NOTIFICATION_REVEAL_MS: i32 = 10;
/// Time from a toast being added until it starts fading out.
pub const NOTIFICATION_MS: i32 = 3_000;
/// Fade-out length; the toast leaves the DOM afterwards.
pub const NOTIFICATION_FADE_MS: i32 = 300;
