use super::{leaf, non_negative, Compose};
use crate::error::Result;
use crate::node::{Container, Node, Stack};
use crate::radius::{Radius, RadiusPreset};
use crate::shape::ShapeConfig;
use crate::style::{Size, Style};
use crate::variant::Variant;
use serde::{Deserialize, Serialize};

/// One or more button placeholders in a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonConfig {
    pub width: Size,
    pub height: f64,
    /// Besides the usual values, accepts `"full"` for a pill.
    pub radius: Radius,
    /// Render circular icon buttons of `icon_size` instead.
    pub icon_only: bool,
    pub icon_size: f64,
    pub count: u32,
    pub gap: f64,
    pub variant: Variant,
    #[serde(alias = "className", skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Style::is_empty")]
    pub style: Style,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            width: Size::Px(120.0),
            height: 40.0,
            radius: Radius::Preset(RadiusPreset::Md),
            icon_only: false,
            icon_size: 40.0,
            count: 1,
            gap: 8.0,
            variant: Variant::Shimmer,
            class: None,
            style: Style::new(),
        }
    }
}

impl ButtonConfig {
    /// `"full"` is not a radius preset; it stands for the literal pill radius.
    pub fn resolved_radius(&self) -> Radius {
        match &self.radius {
            Radius::Expr(expr) if expr == "full" => Radius::pill(),
            other => other.clone(),
        }
    }
}

impl Compose for ButtonConfig {
    fn compose(&self) -> Result<Node> {
        let gap = non_negative("gap", self.gap)?;

        let (shape, stack) = if self.icon_only {
            (
                ShapeConfig::sized(self.icon_size, self.icon_size).radius(RadiusPreset::Circle),
                Stack::row().gap(gap),
            )
        } else {
            (
                ShapeConfig::sized(self.width.clone(), self.height).radius(self.resolved_radius()),
                Stack::row().wrap(true).gap(gap),
            )
        };
        let shape = shape.variant(self.variant);
        let buttons = (0..self.count)
            .map(|_| leaf(shape.clone()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Container::new(stack)
            .children(buttons)
            .overridden_by(self.class.as_deref(), &self.style)
            .into())
    }
}
