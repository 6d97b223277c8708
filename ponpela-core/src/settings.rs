//! The persisted accessibility preferences record.
use crate::constants::{FONT_BASE_PERCENT, FONT_OFFSET_MAX, FONT_OFFSET_MIN, FONT_STEP_PERCENT};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Colour treatment of the page. Exactly one mode is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastMode {
    #[default]
    None,
    High,
    Inverted,
}

/// Forced text alignment. Exactly one mode is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    None,
    Right,
    Left,
    Center,
}

impl TextAlign {
    /// Suffix used in the `a11y-align-*` class names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Right => "right",
            Self::Left => "left",
            Self::Center => "center",
        }
    }
}

/// User-chosen accessibility preferences, one per browser origin.
///
/// Field names serialize in camelCase so blobs written by older deployments
/// load unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct A11ySettings {
    /// Font scale offset in steps, always within `[-2, 5]`.
    pub font_size: i8,
    pub contrast: ContrastMode,
    pub grayscale: bool,
    /// `true` while page animations are allowed.
    pub animations: bool,
    pub links: bool,
    pub cursor: bool,
    /// Readable font family override.
    pub font: bool,
    pub line_height: bool,
    pub letter_spacing: bool,
    pub text_align: TextAlign,
}

impl Default for A11ySettings {
    fn default() -> Self {
        Self {
            font_size: 0,
            contrast: ContrastMode::None,
            grayscale: false,
            animations: true,
            links: false,
            cursor: false,
            font: false,
            line_height: false,
            letter_spacing: false,
            text_align: TextAlign::None,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings blob is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("settings blob is not an object")]
    NotAnObject,
}

fn field<T: DeserializeOwned>(map: &Map<String, Value>, key: &str, default: T) -> T {
    map.get(key)
        .and_then(|value| T::deserialize(value).ok())
        .unwrap_or(default)
}

impl A11ySettings {
    /// Parse a stored blob, merging each known field over the defaults.
    ///
    /// Fields that are missing or carry a value of the wrong shape keep their
    /// default; unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error when the blob is not JSON or not a JSON object.
    pub fn parse(raw: &str) -> Result<Self, SettingsError> {
        let value: Value = serde_json::from_str(raw)?;
        let Value::Object(map) = value else {
            return Err(SettingsError::NotAnObject);
        };
        let defaults = Self::default();
        let font_size = map
            .get("fontSize")
            .and_then(Value::as_i64)
            .map_or(defaults.font_size, clamp_font_offset);
        Ok(Self {
            font_size,
            contrast: field(&map, "contrast", defaults.contrast),
            grayscale: field(&map, "grayscale", defaults.grayscale),
            animations: field(&map, "animations", defaults.animations),
            links: field(&map, "links", defaults.links),
            cursor: field(&map, "cursor", defaults.cursor),
            font: field(&map, "font", defaults.font),
            line_height: field(&map, "lineHeight", defaults.line_height),
            letter_spacing: field(&map, "letterSpacing", defaults.letter_spacing),
            text_align: field(&map, "textAlign", defaults.text_align),
        })
    }

    /// Parse a stored blob, falling back to defaults when it is unusable.
    #[must_use]
    pub fn from_json(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_default()
    }

    /// Serialize the full record.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Root font size as a percentage: `100 + offset * 15`.
    #[must_use]
    pub fn font_percent(&self) -> i32 {
        FONT_BASE_PERCENT + i32::from(self.font_size) * FONT_STEP_PERCENT
    }

    /// Font size label shown in the panel, e.g. `115%`.
    #[must_use]
    pub fn font_label(&self) -> String {
        format!("{}%", self.font_percent())
    }
}

fn clamp_font_offset(raw: i64) -> i8 {
    let clamped = raw.clamp(i64::from(FONT_OFFSET_MIN), i64::from(FONT_OFFSET_MAX));
    i8::try_from(clamped).unwrap_or_default()
}
