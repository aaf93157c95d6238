use super::{full_width, leaf, non_negative, Compose};
use crate::error::{Result, SkeletonError};
use crate::node::{Container, Node, Stack};
use crate::radius::{Radius, PILL_RADIUS};
use crate::shape::ShapeConfig;
use crate::style::Style;
use crate::variant::Variant;
use serde::{Deserialize, Serialize};

/// A row of tags or filter chips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChipConfig {
    pub count: u32,
    pub gap: f64,
    pub height: f64,
    /// Cycle through `width_cycle` instead of using `width` for every chip.
    pub vary_widths: bool,
    pub width_cycle: Vec<f64>,
    pub width: f64,
    pub radius: Radius,
    pub wrap: bool,
    pub variant: Variant,
    #[serde(alias = "className", skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Style::is_empty")]
    pub style: Style,
}

impl Default for ChipConfig {
    fn default() -> Self {
        Self {
            count: 5,
            gap: 8.0,
            height: 32.0,
            vary_widths: true,
            width_cycle: vec![72.0, 56.0, 88.0, 64.0, 96.0, 48.0, 80.0],
            width: 80.0,
            radius: Radius::Px(PILL_RADIUS),
            wrap: true,
            variant: Variant::Shimmer,
            class: None,
            style: Style::new(),
        }
    }
}

impl ChipConfig {
    /// Width of chip `index`, or `None` if the cycle is empty.
    pub fn chip_width(&self, index: usize) -> Option<f64> {
        if !self.vary_widths {
            return Some(self.width);
        }
        match self.width_cycle.len() {
            0 => None,
            len => Some(self.width_cycle[index % len]),
        }
    }
}

impl Compose for ChipConfig {
    fn compose(&self) -> Result<Node> {
        let gap = non_negative("gap", self.gap)?;
        if self.vary_widths && self.count > 0 && self.width_cycle.is_empty() {
            return Err(SkeletonError::invalid_field(
                "widthCycle",
                "varyWidths needs at least one width",
            ));
        }

        let chips = (0..self.count as usize)
            .filter_map(|i| self.chip_width(i))
            .map(|width| {
                leaf(
                    ShapeConfig::sized(width, self.height)
                        .radius(self.radius.clone())
                        .variant(self.variant),
                )
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Container::new(Stack::row().gap(gap).wrap(self.wrap))
            .with_style(full_width())
            .children(chips)
            .overridden_by(self.class.as_deref(), &self.style)
            .into())
    }
}
