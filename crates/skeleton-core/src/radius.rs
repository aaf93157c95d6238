//! Corner radius normalization.
//!
//! A radius is either a pixel value, an opaque CSS expression, or one of the
//! five named presets. Normalization happens once, at the boundary between
//! configuration and the resolved tree, so composers only ever see a
//! concrete [`Size`].

use crate::error::{Result, SkeletonError};
use crate::style::{NumberOrText, Size};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Radius used for pill shapes (chips, trend badges, "full" buttons).
///
/// Deliberately not a [`RadiusPreset`]: pills are a large literal pixel
/// radius, which browsers clamp to half the box height.
pub const PILL_RADIUS: f64 = 9999.0;

/// Named corner-rounding shorthands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadiusPreset {
    Circle,
    Sm,
    Md,
    Lg,
    Xl,
}

/// All presets, smallest rounding first (circle last).
pub const ALL_PRESETS: &[RadiusPreset] = &[
    RadiusPreset::Sm,
    RadiusPreset::Md,
    RadiusPreset::Lg,
    RadiusPreset::Xl,
    RadiusPreset::Circle,
];

impl RadiusPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            RadiusPreset::Circle => "circle",
            RadiusPreset::Sm => "sm",
            RadiusPreset::Md => "md",
            RadiusPreset::Lg => "lg",
            RadiusPreset::Xl => "xl",
        }
    }

    /// The fixed concrete value of this preset.
    pub fn value(&self) -> Size {
        match self {
            RadiusPreset::Circle => Size::Percent(50.0),
            RadiusPreset::Sm => Size::Px(4.0),
            RadiusPreset::Md => Size::Px(8.0),
            RadiusPreset::Lg => Size::Px(12.0),
            RadiusPreset::Xl => Size::Px(16.0),
        }
    }
}

impl FromStr for RadiusPreset {
    type Err = SkeletonError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "circle" => Ok(RadiusPreset::Circle),
            "sm" => Ok(RadiusPreset::Sm),
            "md" => Ok(RadiusPreset::Md),
            "lg" => Ok(RadiusPreset::Lg),
            "xl" => Ok(RadiusPreset::Xl),
            other => Err(SkeletonError::invalid_field(
                "radius",
                format!("unknown radius preset `{other}`"),
            )),
        }
    }
}

impl fmt::Display for RadiusPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A corner radius as supplied by a caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Radius {
    Px(f64),
    Expr(String),
    Preset(RadiusPreset),
}

impl Radius {
    pub fn pill() -> Self {
        Radius::Px(PILL_RADIUS)
    }

    /// Resolve to the concrete value handed to the renderer.
    ///
    /// Presets map to their fixed scale, pixels and expressions pass
    /// through unchanged.
    pub fn normalize(&self) -> Result<Size> {
        match self {
            Radius::Preset(preset) => Ok(preset.value()),
            Radius::Px(n) => {
                let size = Size::Px(*n);
                size.validate("radius")?;
                Ok(size)
            }
            Radius::Expr(expr) => Ok(Size::Expr(expr.clone())),
        }
    }
}

impl From<RadiusPreset> for Radius {
    fn from(preset: RadiusPreset) -> Self {
        Radius::Preset(preset)
    }
}

impl From<f64> for Radius {
    fn from(px: f64) -> Self {
        Radius::Px(px)
    }
}

impl From<u32> for Radius {
    fn from(px: u32) -> Self {
        Radius::Px(f64::from(px))
    }
}

impl From<i32> for Radius {
    fn from(px: i32) -> Self {
        Radius::Px(f64::from(px))
    }
}

/// Preset names become presets; any other string is an opaque expression.
impl From<&str> for Radius {
    fn from(s: &str) -> Self {
        match s.parse::<RadiusPreset>() {
            Ok(preset) => Radius::Preset(preset),
            Err(_) => Radius::Expr(s.to_string()),
        }
    }
}

impl fmt::Display for Radius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Radius::Px(n) => write!(f, "{n}px"),
            Radius::Expr(expr) => f.write_str(expr),
            Radius::Preset(preset) => f.write_str(preset.as_str()),
        }
    }
}

impl Serialize for Radius {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Radius::Px(n) => serializer.serialize_f64(*n),
            Radius::Expr(expr) => serializer.serialize_str(expr),
            Radius::Preset(preset) => serializer.serialize_str(preset.as_str()),
        }
    }
}

impl<'de> Deserialize<'de> for Radius {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(match NumberOrText::deserialize(deserializer)? {
            NumberOrText::Number(n) => Radius::Px(n),
            NumberOrText::Text(s) => Radius::from(s.as_str()),
        })
    }
}
