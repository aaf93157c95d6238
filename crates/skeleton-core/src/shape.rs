//! The primitive resolver: one configurable placeholder shape.

use crate::error::{Result, SkeletonError};
use crate::node::{Container, Node, Stack, VisualUnit};
use crate::radius::Radius;
use crate::style::{Size, Style};
use crate::variant::Variant;
use serde::{Deserialize, Serialize};

/// Parameters of the primitive placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShapeConfig {
    pub width: Size,
    pub height: Size,
    pub radius: Radius,
    /// How many identical units to emit.
    pub count: u32,
    pub variant: Variant,
    /// Pixels between units when `count > 1`.
    pub gap: f64,
    #[serde(alias = "className", skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Style::is_empty")]
    pub style: Style,
    /// Deprecated. `Some(false)` forces [`Variant::Static`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animate: Option<bool>,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            width: Size::full(),
            height: Size::Px(16.0),
            radius: Radius::Px(6.0),
            count: 1,
            variant: Variant::Shimmer,
            gap: 8.0,
            class: None,
            style: Style::new(),
            animate: None,
        }
    }
}

impl ShapeConfig {
    /// A single unit of the given size, every other field at its default.
    pub fn sized(width: impl Into<Size>, height: impl Into<Size>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
            ..Self::default()
        }
    }

    pub fn radius(mut self, radius: impl Into<Radius>) -> Self {
        self.radius = radius.into();
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Add a single declaration to the extra style.
    pub fn css(mut self, property: &str, value: impl ToString) -> Self {
        self.style.set(property, value);
        self
    }

    pub fn animate(mut self, animate: bool) -> Self {
        self.animate = Some(animate);
        self
    }

    /// The animation that applies once the legacy flag is taken into account.
    pub fn effective_variant(&self) -> Variant {
        self.variant.with_legacy_animate(self.animate)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }
}

/// Resolve the single-unit form of `config`, ignoring `count` and `gap`.
pub fn unit(config: &ShapeConfig) -> Result<VisualUnit> {
    config.width.validate("width")?;
    config.height.validate("height")?;
    let corner_radius = config.radius.normalize()?;

    Ok(VisualUnit {
        width: config.width.clone(),
        height: config.height.clone(),
        corner_radius,
        variant: config.effective_variant(),
        class: config
            .class
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string),
        style: config.style.clone(),
    })
}

/// Resolve `config` into renderable nodes.
///
/// `count == 0` yields `None`, `count == 1` a bare unit, and larger counts a
/// column stack of identical units separated by `gap` pixels.
pub fn resolve(config: &ShapeConfig) -> Result<Option<Node>> {
    if !config.gap.is_finite() || config.gap < 0.0 {
        return Err(SkeletonError::invalid_field(
            "gap",
            format!("{} is not a valid gap", config.gap),
        ));
    }
    let unit = unit(config)?;

    Ok(match config.count {
        0 => None,
        1 => Some(Node::Unit(unit)),
        n => Some(
            Container::new(Stack::column().gap(config.gap))
                .children((0..n).map(|_| Node::Unit(unit.clone())))
                .into(),
        ),
    })
}
