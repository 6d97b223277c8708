//! User actions issued from the accessibility panel.
use crate::constants::{FONT_OFFSET_MAX, FONT_OFFSET_MIN};
use crate::settings::{A11ySettings, ContrastMode, TextAlign};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single panel action. Each one flips exactly one field, except `Reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum A11yAction {
    FontUp,
    FontDown,
    Contrast(ContrastMode),
    Grayscale,
    Animations,
    Links,
    Cursor,
    ReadableFont,
    LineHeight,
    LetterSpacing,
    Align(TextAlign),
    Reset,
}

/// What the widget should do after an action has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Applied,
    ClosePanel,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown accessibility action: {0}")]
pub struct UnknownAction(pub String);

impl A11yAction {
    /// Toggle options rendered as grid buttons, in panel order.
    pub const OPTIONS: [Self; 12] = [
        Self::Contrast(ContrastMode::High),
        Self::Contrast(ContrastMode::Inverted),
        Self::Grayscale,
        Self::Links,
        Self::ReadableFont,
        Self::LineHeight,
        Self::LetterSpacing,
        Self::Animations,
        Self::Cursor,
        Self::Align(TextAlign::Right),
        Self::Align(TextAlign::Left),
        Self::Align(TextAlign::Center),
    ];

    /// Stable `data-action` name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FontUp => "font-up",
            Self::FontDown => "font-down",
            Self::Contrast(ContrastMode::High) => "contrast-high",
            Self::Contrast(ContrastMode::Inverted) => "contrast-inverted",
            Self::Contrast(ContrastMode::None) => "contrast-none",
            Self::Grayscale => "grayscale",
            Self::Animations => "animations",
            Self::Links => "links",
            Self::Cursor => "cursor",
            Self::ReadableFont => "font",
            Self::LineHeight => "lineHeight",
            Self::LetterSpacing => "letterSpacing",
            Self::Align(TextAlign::Right) => "align-right",
            Self::Align(TextAlign::Left) => "align-left",
            Self::Align(TextAlign::Center) => "align-center",
            Self::Align(TextAlign::None) => "align-none",
            Self::Reset => "reset",
        }
    }
}

impl fmt::Display for A11yAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for A11yAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let action = match s {
            "font-up" => Self::FontUp,
            "font-down" => Self::FontDown,
            "contrast-high" => Self::Contrast(ContrastMode::High),
            "contrast-inverted" => Self::Contrast(ContrastMode::Inverted),
            "contrast-none" => Self::Contrast(ContrastMode::None),
            "grayscale" => Self::Grayscale,
            "animations" => Self::Animations,
            "links" => Self::Links,
            "cursor" => Self::Cursor,
            "font" => Self::ReadableFont,
            "lineHeight" => Self::LineHeight,
            "letterSpacing" => Self::LetterSpacing,
            "align-right" => Self::Align(TextAlign::Right),
            "align-left" => Self::Align(TextAlign::Left),
            "align-center" => Self::Align(TextAlign::Center),
            "align-none" => Self::Align(TextAlign::None),
            "reset" => Self::Reset,
            other => return Err(UnknownAction(other.to_string())),
        };
        Ok(action)
    }
}

/// Exclusive toggle: picking the active mode turns it back off.
fn toggle_exclusive<T: Copy + PartialEq + Default>(current: T, picked: T) -> T {
    if current == picked { T::default() } else { picked }
}

impl A11ySettings {
    /// Apply one panel action in place.
    pub fn apply(&mut self, action: A11yAction) -> ActionOutcome {
        match action {
            A11yAction::FontUp => {
                if self.font_size < FONT_OFFSET_MAX {
                    self.font_size += 1;
                }
            }
            A11yAction::FontDown => {
                if self.font_size > FONT_OFFSET_MIN {
                    self.font_size -= 1;
                }
            }
            A11yAction::Contrast(mode) => self.contrast = toggle_exclusive(self.contrast, mode),
            A11yAction::Grayscale => self.grayscale = !self.grayscale,
            A11yAction::Animations => self.animations = !self.animations,
            A11yAction::Links => self.links = !self.links,
            A11yAction::Cursor => self.cursor = !self.cursor,
            A11yAction::ReadableFont => self.font = !self.font,
            A11yAction::LineHeight => self.line_height = !self.line_height,
            A11yAction::LetterSpacing => self.letter_spacing = !self.letter_spacing,
            A11yAction::Align(align) => self.text_align = toggle_exclusive(self.text_align, align),
            A11yAction::Reset => {
                *self = Self::default();
                return ActionOutcome::ClosePanel;
            }
        }
        ActionOutcome::Applied
    }

    /// Whether the option button for `action` should render as active.
    ///
    /// The animations option is a "stop animations" switch, so it is active
    /// while animations are disabled.
    #[must_use]
    pub fn is_active(&self, action: A11yAction) -> bool {
        match action {
            A11yAction::Contrast(ContrastMode::None) | A11yAction::Align(TextAlign::None) => false,
            A11yAction::Contrast(mode) => self.contrast == mode,
            A11yAction::Grayscale => self.grayscale,
            A11yAction::Animations => !self.animations,
            A11yAction::Links => self.links,
            A11yAction::Cursor => self.cursor,
            A11yAction::ReadableFont => self.font,
            A11yAction::LineHeight => self.line_height,
            A11yAction::LetterSpacing => self.letter_spacing,
            A11yAction::Align(align) => self.text_align == align,
            A11yAction::FontUp | A11yAction::FontDown | A11yAction::Reset => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_names_round_trip() {
        for action in A11yAction::OPTIONS
            .into_iter()
            .chain([A11yAction::FontUp, A11yAction::FontDown, A11yAction::Reset])
        {
            assert_eq!(action.as_str().parse::<A11yAction>(), Ok(action));
        }
        assert_eq!(
            "sparkles".parse::<A11yAction>(),
            Err(UnknownAction("sparkles".into()))
        );
    }

    #[test]
    fn contrast_is_radio_with_toggle_off() {
        let mut s = A11ySettings::default();
        s.apply(A11yAction::Contrast(ContrastMode::High));
        assert_eq!(s.contrast, ContrastMode::High);
        s.apply(A11yAction::Contrast(ContrastMode::Inverted));
        assert_eq!(s.contrast, ContrastMode::Inverted);
        s.apply(A11yAction::Contrast(ContrastMode::Inverted));
        assert_eq!(s.contrast, ContrastMode::None);
    }

    #[test]
    fn alignment_is_radio_with_toggle_off() {
        let mut s = A11ySettings::default();
        s.apply(A11yAction::Align(TextAlign::Center));
        s.apply(A11yAction::Align(TextAlign::Left));
        assert_eq!(s.text_align, TextAlign::Left);
        s.apply(A11yAction::Align(TextAlign::Left));
        assert_eq!(s.text_align, TextAlign::None);
    }

    #[test]
    fn reset_requests_panel_close() {
        let mut s = A11ySettings::default();
        assert_eq!(s.apply(A11yAction::Links), ActionOutcome::Applied);
        assert_eq!(s.apply(A11yAction::Reset), ActionOutcome::ClosePanel);
        assert_eq!(s, A11ySettings::default());
    }

    #[test]
    fn animations_option_reads_as_stop_switch() {
        let mut s = A11ySettings::default();
        assert!(!s.is_active(A11yAction::Animations));
        s.apply(A11yAction::Animations);
        assert!(!s.animations);
        assert!(s.is_active(A11yAction::Animations));
    }
}
