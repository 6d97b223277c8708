mod bundle;
mod locales;
mod render;

pub use bundle::{I18nBundle, current_lang, is_rtl, set_lang};
pub use locales::lang_for_document;
pub use render::{t, tr};
