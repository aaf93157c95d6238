use super::text::TextConfig;
use super::{flexible, full_width, leaf, non_negative, Compose};
use crate::error::Result;
use crate::node::{Align, Container, Node, Stack};
use crate::radius::Radius;
use crate::shape::ShapeConfig;
use crate::style::{Size, Style};
use crate::variant::Variant;
use serde::{Deserialize, Serialize};

/// `(width, height)` of the current price, the struck-through price and the
/// discount tag.
const PRICE_SIZES: [(f64, f64); 3] = [(80.0, 22.0), (55.0, 14.0), (45.0, 18.0)];

const RATING_STARS: u32 = 5;

/// Horizontal product listings: thumbnail on the left, details on the
/// right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductRowConfig {
    pub items: u32,
    pub gap: f64,
    pub image_width: f64,
    pub image_height: f64,
    pub image_radius: Radius,
    /// Title lines.
    pub lines: u32,
    pub show_price: bool,
    pub show_rating: bool,
    pub show_badge: bool,
    pub show_cta: bool,
    pub variant: Variant,
    #[serde(alias = "className", skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Style::is_empty")]
    pub style: Style,
}

impl Default for ProductRowConfig {
    fn default() -> Self {
        Self {
            items: 4,
            gap: 20.0,
            image_width: 140.0,
            image_height: 140.0,
            image_radius: Radius::Px(8.0),
            lines: 3,
            show_price: true,
            show_rating: true,
            show_badge: false,
            show_cta: false,
            variant: Variant::Shimmer,
            class: None,
            style: Style::new(),
        }
    }
}

impl ProductRowConfig {
    fn shape(&self, width: impl Into<Size>, height: f64, radius: impl Into<Radius>) -> Result<Node> {
        leaf(
            ShapeConfig::sized(width, height)
                .radius(radius)
                .variant(self.variant),
        )
    }

    fn rating(&self) -> Result<Node> {
        let stars = (0..RATING_STARS)
            .map(|_| self.shape(14.0, 14.0, 2))
            .collect::<Result<Vec<_>>>()?;
        Ok(Container::new(Stack::row().gap(6.0).align(Align::Center))
            .children(stars)
            // review count
            .child(self.shape(60.0, 11.0, 4)?)
            .into())
    }

    fn price(&self) -> Result<Node> {
        let parts = PRICE_SIZES
            .iter()
            .map(|(width, height)| self.shape(*width, *height, 4))
            .collect::<Result<Vec<_>>>()?;
        Ok(Container::new(Stack::row().gap(12.0).align(Align::Center))
            .children(parts)
            .into())
    }

    fn details(&self) -> Result<Node> {
        let badge = if self.show_badge {
            Some(self.shape(90.0, 22.0, 99)?)
        } else {
            None
        };
        let title = TextConfig {
            lines: self.lines,
            line_height: 13.0,
            gap: 7.0,
            last_line_width: 60.0,
            variant: self.variant,
            ..TextConfig::default()
        }
        .compose()?;
        let rating = if self.show_rating {
            Some(self.rating()?)
        } else {
            None
        };
        let price = if self.show_price {
            Some(self.price()?)
        } else {
            None
        };
        let cta = if self.show_cta {
            Some(self.shape(140.0, 40.0, 6)?)
        } else {
            None
        };

        Ok(Container::new(Stack::column().gap(10.0))
            .with_style(flexible())
            .maybe_child(badge)
            .child(title)
            .maybe_child(rating)
            .maybe_child(price)
            .maybe_child(cta)
            .into())
    }

    fn row(&self) -> Result<Node> {
        let thumbnail = leaf(
            ShapeConfig::sized(self.image_width, self.image_height)
                .radius(self.image_radius.clone())
                .variant(self.variant)
                .css("flex-shrink", 0),
        )?;

        Ok(Container::new(Stack::row().gap(20.0).align(Align::Start))
            .with_style(full_width())
            .child(thumbnail)
            .child(self.details()?)
            .into())
    }
}

impl Compose for ProductRowConfig {
    fn compose(&self) -> Result<Node> {
        let gap = non_negative("gap", self.gap)?;

        let rows = (0..self.items)
            .map(|_| self.row())
            .collect::<Result<Vec<_>>>()?;

        Ok(Container::new(Stack::column().gap(gap))
            .with_style(full_width())
            .children(rows)
            .overridden_by(self.class.as_deref(), &self.style)
            .into())
    }
}
