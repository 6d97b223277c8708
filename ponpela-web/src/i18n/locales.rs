use serde_json::Value;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub rtl: bool,
}

pub const DEFAULT_LANG: &str = "he";

pub const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "he",
        rtl: true,
    },
    LocaleMeta {
        code: "en",
        rtl: false,
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("he", include_str!("../../i18n/he.json")),
    ("en", include_str!("../../i18n/en.json")),
];

#[must_use]
pub fn is_rtl_lang(lang: &str) -> bool {
    LOCALE_META.iter().any(|m| m.code == lang && m.rtl)
}

/// Pick a supported locale from a host page `lang` attribute such as `en-US`.
///
/// Unknown or missing languages resolve to Hebrew, the site's language.
#[must_use]
pub fn lang_for_document(html_lang: Option<&str>) -> &'static str {
    let primary = html_lang
        .and_then(|l| l.split(['-', '_']).next())
        .map(str::to_ascii_lowercase);
    primary
        .as_deref()
        .and_then(|code| {
            LOCALE_META
                .iter()
                .find(|m| m.code == code)
                .map(|m| m.code)
        })
        .unwrap_or(DEFAULT_LANG)
}

pub fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))?;

    serde_json::from_str(bundle).ok()
}
