//! Flow container configuration.
//!
//! A [`FlowConfig`] is a plain record; hosts either build it with the
//! builder-style setters, or read it from a declarative attribute source via
//! [`FlowConfig::from_attrs_with`]. Parsing never fails: malformed values keep
//! the base value and are returned as diagnostics next to a usable config.
//!
//! Attribute keys:
//! - `flowGravity` = start|left|1, center|2, end|right|3
//! - `rowGravity` = top|1, center|2, bottom|3
//! - `spacingHorizontal` (integer, negative clamps to 0)
//! - `spacingVertical` (integer, negative clamps to 0)
//!
//! Environment variables read by [`FlowConfig::from_env`]:
//! - `FLOWROW_DIRECTION` = ltr|rtl (overrides the locale)
//! - `FLOWROW_FLOW_GRAVITY`, `FLOWROW_ROW_GRAVITY`
//! - `FLOWROW_SPACING_HORIZONTAL`, `FLOWROW_SPACING_VERTICAL`

use std::env;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use flowrow_core::geometry::clamp_non_negative;

use crate::direction::FlowDirection;

const ATTR_FLOW_GRAVITY: &str = "flowGravity";
const ATTR_ROW_GRAVITY: &str = "rowGravity";
const ATTR_SPACING_HORIZONTAL: &str = "spacingHorizontal";
const ATTR_SPACING_VERTICAL: &str = "spacingVertical";

const ENV_DIRECTION: &str = "FLOWROW_DIRECTION";
const ENV_FLOW_GRAVITY: &str = "FLOWROW_FLOW_GRAVITY";
const ENV_ROW_GRAVITY: &str = "FLOWROW_ROW_GRAVITY";
const ENV_SPACING_HORIZONTAL: &str = "FLOWROW_SPACING_HORIZONTAL";
const ENV_SPACING_VERTICAL: &str = "FLOWROW_SPACING_VERTICAL";

/// Horizontal alignment of each row inside the container's content width.
///
/// Physical, not logical: `Start` is always the left edge and `End` the right
/// edge, whatever the reading direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FlowGravity {
    /// Rows hug the left edge.
    Start,
    /// Rows are centered.
    Center,
    /// Rows hug the right edge.
    End,
}

impl FlowGravity {
    /// Parse a gravity name or its numeric attribute code.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "start" | "left" | "1" => Some(Self::Start),
            "center" | "2" => Some(Self::Center),
            "end" | "right" | "3" => Some(Self::End),
            _ => None,
        }
    }
}

impl fmt::Display for FlowGravity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        };
        f.write_str(name)
    }
}

/// Vertical alignment of an item inside its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RowGravity {
    #[default]
    Top,
    Center,
    Bottom,
}

impl RowGravity {
    /// Parse a gravity name or its numeric attribute code.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "top" | "1" => Some(Self::Top),
            "center" | "2" => Some(Self::Center),
            "bottom" | "3" => Some(Self::Bottom),
            _ => None,
        }
    }
}

impl fmt::Display for RowGravity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        };
        f.write_str(name)
    }
}

/// Spacing, alignment and direction of a flow container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlowConfig {
    /// Gap between neighbouring items of one row.
    pub spacing_horizontal: i32,
    /// Gap between consecutive rows.
    pub spacing_vertical: i32,
    pub flow_gravity: FlowGravity,
    pub row_gravity: RowGravity,
    pub direction: FlowDirection,
}

impl Default for FlowConfig {
    /// Left-to-right defaults. Use [`FlowConfig::from_system_locale`] to
    /// follow the process locale instead.
    fn default() -> Self {
        Self::for_direction(FlowDirection::Ltr)
    }
}

impl FlowConfig {
    /// Defaults for a direction: no spacing, top row gravity, and rows hugging
    /// the edge the direction starts from.
    #[must_use]
    pub const fn for_direction(direction: FlowDirection) -> Self {
        Self {
            spacing_horizontal: 0,
            spacing_vertical: 0,
            flow_gravity: direction.default_flow_gravity(),
            row_gravity: RowGravity::Top,
            direction,
        }
    }

    /// Defaults for a locale tag such as `ar-EG` or `en_US.UTF-8`.
    #[must_use]
    pub fn from_locale(locale: &str) -> Self {
        Self::for_direction(FlowDirection::from_locale(locale))
    }

    /// Defaults for the process locale.
    #[must_use]
    pub fn from_system_locale() -> Self {
        Self::for_direction(FlowDirection::from_env())
    }

    /// Resolve an optional host config; `None` falls back to the
    /// system-locale defaults.
    #[must_use]
    pub fn resolve(config: Option<FlowConfig>) -> Self {
        config.map_or_else(Self::from_system_locale, FlowConfig::normalized)
    }

    /// Set the horizontal gap between items (negative clamps to 0).
    #[must_use]
    pub fn spacing_horizontal(mut self, spacing: i32) -> Self {
        self.spacing_horizontal = clamp_non_negative(spacing);
        self
    }

    /// Set the vertical gap between rows (negative clamps to 0).
    #[must_use]
    pub fn spacing_vertical(mut self, spacing: i32) -> Self {
        self.spacing_vertical = clamp_non_negative(spacing);
        self
    }

    /// Set the row alignment inside the container.
    #[must_use]
    pub fn flow_gravity(mut self, gravity: FlowGravity) -> Self {
        self.flow_gravity = gravity;
        self
    }

    /// Set the item alignment inside its row.
    #[must_use]
    pub fn row_gravity(mut self, gravity: RowGravity) -> Self {
        self.row_gravity = gravity;
        self
    }

    /// Set the direction.
    ///
    /// A flow gravity still at the old direction's default moves to the new
    /// direction's default; any other gravity is kept.
    #[must_use]
    pub fn direction(mut self, direction: FlowDirection) -> Self {
        self.set_direction(direction);
        self
    }

    pub(crate) fn set_direction(&mut self, direction: FlowDirection) {
        if self.flow_gravity == self.direction.default_flow_gravity() {
            self.flow_gravity = direction.default_flow_gravity();
        }
        self.direction = direction;
    }

    /// Copy with negative spacing clamped to 0.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            spacing_horizontal: clamp_non_negative(self.spacing_horizontal),
            spacing_vertical: clamp_non_negative(self.spacing_vertical),
            ..self
        }
    }

    /// Report every out-of-range field.
    pub fn validate(&self) -> Result<(), Vec<FlowConfigError>> {
        let mut errors = Vec::new();
        validate_non_negative("spacing_horizontal", self.spacing_horizontal, &mut errors);
        validate_non_negative("spacing_vertical", self.spacing_vertical, &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Read settings from an attribute source on top of `base`.
    ///
    /// `get` returns the raw attribute value for a key, or `None` when the
    /// attribute is absent.
    #[must_use]
    pub fn from_attrs_with<F>(base: FlowConfig, mut get: F) -> FlowConfigParse
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut parse = FlowConfigParse {
            config: base.normalized(),
            errors: Vec::new(),
        };
        apply_settings(
            &mut parse,
            &mut get,
            SettingKeys {
                direction: None,
                flow_gravity: ATTR_FLOW_GRAVITY,
                row_gravity: ATTR_ROW_GRAVITY,
                spacing_horizontal: ATTR_SPACING_HORIZONTAL,
                spacing_vertical: ATTR_SPACING_VERTICAL,
            },
        );
        parse
    }

    /// Parse config from environment variables on top of the locale defaults.
    #[must_use]
    pub fn from_env() -> FlowConfig {
        Self::from_env_with_diagnostics().config
    }

    /// Parse config from environment variables and return diagnostics.
    #[must_use]
    pub fn from_env_with_diagnostics() -> FlowConfigParse {
        from_env_with(|key| env::var(key).ok())
    }
}

/// Configuration parse result: always a usable config, plus diagnostics.
#[derive(Debug, Clone)]
pub struct FlowConfigParse {
    pub config: FlowConfig,
    pub errors: Vec<FlowConfigError>,
}

impl FlowConfigParse {
    /// Check for a clean parse.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl FlowConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FlowConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for FlowConfigError {}

struct SettingKeys {
    direction: Option<&'static str>,
    flow_gravity: &'static str,
    row_gravity: &'static str,
    spacing_horizontal: &'static str,
    spacing_vertical: &'static str,
}

fn from_env_with<F>(mut get: F) -> FlowConfigParse
where
    F: FnMut(&str) -> Option<String>,
{
    let mut parse = FlowConfigParse {
        config: FlowConfig::for_direction(FlowDirection::from_env_with(&mut get)),
        errors: Vec::new(),
    };
    apply_settings(
        &mut parse,
        &mut get,
        SettingKeys {
            direction: Some(ENV_DIRECTION),
            flow_gravity: ENV_FLOW_GRAVITY,
            row_gravity: ENV_ROW_GRAVITY,
            spacing_horizontal: ENV_SPACING_HORIZONTAL,
            spacing_vertical: ENV_SPACING_VERTICAL,
        },
    );
    parse
}

fn apply_settings<F>(parse: &mut FlowConfigParse, get: &mut F, keys: SettingKeys)
where
    F: FnMut(&str) -> Option<String>,
{
    let config = &mut parse.config;
    let errors = &mut parse.errors;

    // An explicit gravity below still wins over the direction default.
    if let Some(value) = keys.direction.and_then(|key| get(key)) {
        match FlowDirection::parse(&value) {
            Some(direction) => config.set_direction(direction),
            None => errors.push(FlowConfigError::new("direction", value, "expected ltr|rtl")),
        }
    }

    if let Some(value) = get(keys.flow_gravity) {
        match FlowGravity::parse(&value) {
            Some(parsed) => config.flow_gravity = parsed,
            None => errors.push(FlowConfigError::new(
                "flow_gravity",
                value,
                "expected start|center|end",
            )),
        }
    }

    if let Some(value) = get(keys.row_gravity) {
        match RowGravity::parse(&value) {
            Some(parsed) => config.row_gravity = parsed,
            None => errors.push(FlowConfigError::new(
                "row_gravity",
                value,
                "expected top|center|bottom",
            )),
        }
    }

    if let Some(value) = get(keys.spacing_horizontal) {
        match parse_spacing(&value) {
            Some(parsed) => config.spacing_horizontal = parsed,
            None => errors.push(FlowConfigError::new(
                "spacing_horizontal",
                value,
                "expected integer",
            )),
        }
    }

    if let Some(value) = get(keys.spacing_vertical) {
        match parse_spacing(&value) {
            Some(parsed) => config.spacing_vertical = parsed,
            None => errors.push(FlowConfigError::new(
                "spacing_vertical",
                value,
                "expected integer",
            )),
        }
    }
}

/// Integer spacing; negative values clamp to 0, a trailing `px` is accepted.
fn parse_spacing(value: &str) -> Option<i32> {
    let trimmed = value.trim();
    let digits = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();
    digits.parse::<i32>().ok().map(clamp_non_negative)
}

fn validate_non_negative(field: &'static str, value: i32, errors: &mut Vec<FlowConfigError>) {
    if value < 0 {
        errors.push(FlowConfigError::new(
            field,
            value.to_string(),
            "must be >= 0",
        ));
    }
}
