use crate::error::{Result, SkeletonError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix shared by every class the library emits.
pub const CLASS_PREFIX: &str = "nano-skeleton";

/// Animation applied to a visual unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Shimmer,
    Pulse,
    Wave,
    Static,
}

/// All variants in display order.
pub const ALL_VARIANTS: &[Variant] = &[
    Variant::Shimmer,
    Variant::Pulse,
    Variant::Wave,
    Variant::Static,
];

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Shimmer => "shimmer",
            Variant::Pulse => "pulse",
            Variant::Wave => "wave",
            Variant::Static => "static",
        }
    }

    /// Name of the stylesheet class carrying the animation.
    pub fn class(&self) -> &'static str {
        match self {
            Variant::Shimmer => "nano-skeleton-shimmer",
            Variant::Pulse => "nano-skeleton-pulse",
            Variant::Wave => "nano-skeleton-wave",
            Variant::Static => "nano-skeleton-static",
        }
    }

    /// Apply the deprecated `animate` flag.
    ///
    /// An explicit `false` forces [`Variant::Static`]; `None` and `true`
    /// leave `self` in charge.
    pub fn with_legacy_animate(self, animate: Option<bool>) -> Variant {
        match animate {
            Some(false) => Variant::Static,
            _ => self,
        }
    }
}

impl FromStr for Variant {
    type Err = SkeletonError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "shimmer" => Ok(Variant::Shimmer),
            "pulse" => Ok(Variant::Pulse),
            "wave" => Ok(Variant::Wave),
            "static" => Ok(Variant::Static),
            other => Err(SkeletonError::invalid_field(
                "variant",
                format!("unknown animation variant `{other}`"),
            )),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
