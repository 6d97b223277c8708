//! Derivation of CSS classes and styles from the settings record.
//!
//! The widget applies a [`PresentationPlan`] wholesale after every change, so
//! the DOM never drifts from the stored settings.
use crate::config::FilterTarget;
use crate::settings::{A11ySettings, ContrastMode, TextAlign};

pub const CLASS_CONTRAST_HIGH: &str = "a11y-contrast-high";
pub const CLASS_CONTRAST_INVERTED: &str = "a11y-contrast-inverted";
pub const CLASS_NO_ANIMATIONS: &str = "a11y-no-animations";
pub const CLASS_HIGHLIGHT_LINKS: &str = "a11y-highlight-links";
pub const CLASS_BIG_CURSOR: &str = "a11y-big-cursor";
pub const CLASS_READABLE_FONT: &str = "a11y-readable-font";
pub const CLASS_LINE_HEIGHT: &str = "a11y-line-height";
pub const CLASS_LETTER_SPACING: &str = "a11y-letter-spacing";
pub const CLASS_ALIGN_RIGHT: &str = "a11y-align-right";
pub const CLASS_ALIGN_LEFT: &str = "a11y-align-left";
pub const CLASS_ALIGN_CENTER: &str = "a11y-align-center";
pub const CLASS_FILTER_GRAYSCALE: &str = "a11y-filter-grayscale";
pub const CLASS_FILTER_INVERT: &str = "a11y-filter-invert";

/// Feature groups offered by the widget, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    FontScale,
    Contrast,
    Filters,
    Motion,
    NavigationAids,
    Readability,
}

impl Capability {
    pub const ALL: [Self; 6] = [
        Self::FontScale,
        Self::Contrast,
        Self::Filters,
        Self::Motion,
        Self::NavigationAids,
        Self::Readability,
    ];
}

/// One class and whether it should be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassToggle {
    pub class: &'static str,
    pub enabled: bool,
}

const fn toggle(class: &'static str, enabled: bool) -> ClassToggle {
    ClassToggle { class, enabled }
}

/// Everything the DOM layer needs to reflect a settings record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationPlan {
    pub target: FilterTarget,
    /// Inline `font-size` for the document root, e.g. `115%`.
    pub root_font_size: String,
    /// Colour-only and typography classes for `<html>`.
    pub root_classes: Vec<ClassToggle>,
    /// Filter classes for the node chosen by `target`. Empty for overlays.
    pub filter_classes: Vec<ClassToggle>,
    pub gray_overlay: bool,
    pub invert_overlay: bool,
}

impl PresentationPlan {
    #[must_use]
    pub fn from_settings(settings: &A11ySettings, target: FilterTarget) -> Self {
        let mut plan = Self {
            target,
            root_font_size: String::new(),
            root_classes: Vec::new(),
            filter_classes: Vec::new(),
            gray_overlay: false,
            invert_overlay: false,
        };
        for capability in Capability::ALL {
            plan.add(capability, settings);
        }
        plan
    }

    fn add(&mut self, capability: Capability, s: &A11ySettings) {
        match capability {
            Capability::FontScale => self.root_font_size = s.font_label(),
            Capability::Contrast => {
                self.root_classes.extend([
                    toggle(CLASS_CONTRAST_HIGH, s.contrast == ContrastMode::High),
                    toggle(CLASS_CONTRAST_INVERTED, s.contrast == ContrastMode::Inverted),
                ]);
            }
            Capability::Filters => {
                let invert = s.contrast == ContrastMode::Inverted;
                if self.target == FilterTarget::Overlay {
                    self.gray_overlay = s.grayscale;
                    self.invert_overlay = invert;
                } else {
                    self.filter_classes.extend([
                        toggle(CLASS_FILTER_GRAYSCALE, s.grayscale),
                        toggle(CLASS_FILTER_INVERT, invert),
                    ]);
                }
            }
            Capability::Motion => {
                self.root_classes
                    .push(toggle(CLASS_NO_ANIMATIONS, !s.animations));
            }
            Capability::NavigationAids => {
                self.root_classes.extend([
                    toggle(CLASS_HIGHLIGHT_LINKS, s.links),
                    toggle(CLASS_BIG_CURSOR, s.cursor),
                ]);
            }
            Capability::Readability => {
                self.root_classes.extend([
                    toggle(CLASS_READABLE_FONT, s.font),
                    toggle(CLASS_LINE_HEIGHT, s.line_height),
                    toggle(CLASS_LETTER_SPACING, s.letter_spacing),
                    toggle(CLASS_ALIGN_RIGHT, s.text_align == TextAlign::Right),
                    toggle(CLASS_ALIGN_LEFT, s.text_align == TextAlign::Left),
                    toggle(CLASS_ALIGN_CENTER, s.text_align == TextAlign::Center),
                ]);
            }
        }
    }

    /// Classes currently enabled on the document root.
    #[must_use]
    pub fn active_root_classes(&self) -> Vec<&'static str> {
        self.root_classes
            .iter()
            .filter(|t| t.enabled)
            .map(|t| t.class)
            .collect()
    }

    /// Classes currently enabled on the filter target.
    #[must_use]
    pub fn active_filter_classes(&self) -> Vec<&'static str> {
        self.filter_classes
            .iter()
            .filter(|t| t.enabled)
            .map(|t| t.class)
            .collect()
    }
}
