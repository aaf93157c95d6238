use super::{full_width, leaf, non_negative, Compose};
use crate::error::Result;
use crate::node::{Align, Container, Grid, Justify, Node, Stack, Track};
use crate::radius::RadiusPreset;
use crate::shape::ShapeConfig;
use crate::style::{px, Size, Style};
use crate::variant::Variant;
use serde::{Deserialize, Serialize};

/// Bar heights of the sparkline, in percent of its height.
pub const SPARKLINE_BARS: [u32; 7] = [60, 45, 75, 55, 80, 50, 90];

const SPARKLINE_HEIGHT: f64 = 28.0;

/// Dashboard metric cards in a single row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatConfig {
    /// Number of cards, which is also the number of grid columns.
    pub count: u32,
    pub gap: f64,
    pub show_icon: bool,
    pub show_trend: bool,
    /// Only rendered when `show_trend` is off.
    pub show_sparkline: bool,
    pub card_height: f64,
    pub card_padding: f64,
    pub card_radius: f64,
    pub card_background: String,
    pub card_border: String,
    pub variant: Variant,
    #[serde(alias = "className", skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Style::is_empty")]
    pub style: Style,
}

impl Default for StatConfig {
    fn default() -> Self {
        Self {
            count: 4,
            gap: 16.0,
            show_icon: true,
            show_trend: true,
            show_sparkline: false,
            card_height: 120.0,
            card_padding: 20.0,
            card_radius: 12.0,
            card_background: "transparent".to_string(),
            card_border: "1px solid rgba(0,0,0,0.08)".to_string(),
            variant: Variant::Shimmer,
            class: None,
            style: Style::new(),
        }
    }
}

/// Pixel heights of the sparkline bars.
pub fn sparkline_heights() -> Vec<f64> {
    SPARKLINE_BARS
        .iter()
        .map(|pct| (f64::from(*pct) / 100.0 * SPARKLINE_HEIGHT).round())
        .collect()
}

impl StatConfig {
    fn shape(&self, width: impl Into<Size>, height: f64, radius: f64) -> ShapeConfig {
        ShapeConfig::sized(width, height)
            .radius(radius)
            .variant(self.variant)
    }

    fn footer(&self) -> Result<Option<Node>> {
        if !(self.show_trend || self.show_sparkline) {
            return Ok(None);
        }

        let mut footer = Container::new(Stack::row().align(Align::Center).gap(8.0));
        if self.show_trend {
            footer = footer
                .child(leaf(self.shape(40.0, 20.0, 99.0))?)
                .child(leaf(self.shape(Size::Percent(40.0), 11.0, 4.0))?);
        } else {
            let bars = sparkline_heights()
                .into_iter()
                .map(|height| leaf(self.shape(6.0, height, 2.0)))
                .collect::<Result<Vec<_>>>()?;
            footer = footer.child(
                Container::new(Stack::row().align(Align::End).gap(3.0))
                    .with_style(Style::new().with("height", px(SPARKLINE_HEIGHT)))
                    .children(bars),
            );
        }
        Ok(Some(footer.into()))
    }

    fn card(&self) -> Result<Node> {
        let icon = if self.show_icon {
            Some(leaf(
                ShapeConfig::sized(32, 32)
                    .radius(RadiusPreset::Md)
                    .variant(self.variant),
            )?)
        } else {
            None
        };
        let header = Container::new(
            Stack::row()
                .justify(Justify::SpaceBetween)
                .align(Align::Start),
        )
        .child(leaf(self.shape(Size::Percent(55.0), 12.0, 4.0))?)
        .maybe_child(icon);

        Ok(Container::new(Stack::column().justify(Justify::SpaceBetween))
            .with_style(
                Style::new()
                    .with("height", px(self.card_height))
                    .with("padding", px(self.card_padding))
                    .with("background", &self.card_background)
                    .with("border", &self.card_border)
                    .with("border-radius", px(self.card_radius))
                    .with("box-sizing", "border-box"),
            )
            .child(header)
            .child(leaf(self.shape(Size::Percent(45.0), 28.0, 6.0))?)
            .maybe_child(self.footer()?)
            .into())
    }
}

impl Compose for StatConfig {
    fn compose(&self) -> Result<Node> {
        let gap = non_negative("gap", self.gap)?;

        let cards = (0..self.count)
            .map(|_| self.card())
            .collect::<Result<Vec<_>>>()?;

        Ok(Container::new(Grid {
            columns: self.count,
            gap,
            track: Track::Shrinkable,
        })
        .with_style(full_width())
        .children(cards)
        .overridden_by(self.class.as_deref(), &self.style)
        .into())
    }
}
