//! Widget configuration covering every supported page layout.
use crate::constants::SETTINGS_STORAGE_KEY;
use std::str::FromStr;

/// Which node receives the grayscale and inversion filters.
///
/// CSS filters turn the filtered element into a containing block, which
/// breaks `position: fixed` descendants. `Wrapper` moves pre-existing page
/// content into a synthetic container so the widget itself stays unfiltered;
/// `Overlay` never filters content and composites fixed overlays instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterTarget {
    Root,
    Body,
    #[default]
    Wrapper,
    Overlay,
}

impl FromStr for FilterTarget {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "root" | "html" => Ok(Self::Root),
            "body" => Ok(Self::Body),
            "wrapper" => Ok(Self::Wrapper),
            "overlay" => Ok(Self::Overlay),
            _ => Err(()),
        }
    }
}

/// How page scrolling is suppressed while the panel is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollLock {
    /// `overflow: hidden` on `<html>` and `<body>`.
    #[default]
    Overflow,
    /// Pin `<body>` with `position: fixed` and restore the scroll offset on close.
    FixedBody,
}

impl FromStr for ScrollLock {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overflow" => Ok(Self::Overflow),
            "fixed" | "fixed-body" => Ok(Self::FixedBody),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub storage_key: String,
    pub filter_target: FilterTarget,
    pub scroll_lock: ScrollLock,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            storage_key: SETTINGS_STORAGE_KEY.to_string(),
            filter_target: FilterTarget::default(),
            scroll_lock: ScrollLock::default(),
        }
    }
}

impl WidgetConfig {
    /// Build a config from optional attribute values, ignoring ones that do
    /// not parse.
    #[must_use]
    pub fn from_attributes(
        storage_key: Option<&str>,
        filter_target: Option<&str>,
        scroll_lock: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            storage_key: storage_key
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map_or(defaults.storage_key, str::to_string),
            filter_target: filter_target
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.filter_target),
            scroll_lock: scroll_lock
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.scroll_lock),
        }
    }
}
