use super::{leaf, Compose};
use crate::error::{Result, SkeletonError};
use crate::node::{overlay_style, Align, Container, Justify, Node, Stack};
use crate::radius::Radius;
use crate::shape::{self, ShapeConfig};
use crate::style::{Size, Style};
use crate::variant::Variant;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named width:height ratios for image placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "4:3")]
    Standard,
    #[default]
    #[serde(rename = "16:9")]
    Widescreen,
    #[serde(rename = "3:2")]
    Photo,
    #[serde(rename = "3:4")]
    Portrait,
    #[serde(rename = "9:16")]
    Story,
}

pub const ALL_ASPECT_RATIOS: &[AspectRatio] = &[
    AspectRatio::Square,
    AspectRatio::Standard,
    AspectRatio::Widescreen,
    AspectRatio::Photo,
    AspectRatio::Portrait,
    AspectRatio::Story,
];

impl AspectRatio {
    /// `(width, height)` terms of the ratio.
    pub fn terms(&self) -> (u32, u32) {
        match self {
            AspectRatio::Square => (1, 1),
            AspectRatio::Standard => (4, 3),
            AspectRatio::Widescreen => (16, 9),
            AspectRatio::Photo => (3, 2),
            AspectRatio::Portrait => (3, 4),
            AspectRatio::Story => (9, 16),
        }
    }

    /// Height as a fraction of width.
    pub fn padding_fraction(&self) -> f64 {
        let (w, h) = self.terms();
        f64::from(h) / f64::from(w)
    }

    /// Top padding, in percent of the width, that gives a box this ratio.
    pub fn padding_percent(&self) -> f64 {
        let (w, h) = self.terms();
        f64::from(h) * 100.0 / f64::from(w)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = self.terms();
        write!(f, "{w}:{h}")
    }
}

impl FromStr for AspectRatio {
    type Err = SkeletonError;

    fn from_str(s: &str) -> Result<Self> {
        ALL_ASPECT_RATIOS
            .iter()
            .copied()
            .find(|ratio| ratio.to_string() == s)
            .ok_or_else(|| {
                SkeletonError::invalid_field("aspectRatio", format!("unsupported aspect ratio `{s}`"))
            })
    }
}

/// An image or video thumbnail placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageConfig {
    /// Ignored whenever `height` is set.
    pub aspect_ratio: AspectRatio,
    pub width: Size,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Size>,
    pub radius: Radius,
    /// Overlay a play button, for video thumbnails.
    pub show_play_icon: bool,
    pub variant: Variant,
    #[serde(alias = "className", skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Style::is_empty")]
    pub style: Style,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: AspectRatio::Widescreen,
            width: Size::full(),
            height: None,
            radius: Radius::Px(8.0),
            show_play_icon: false,
            variant: Variant::Shimmer,
            class: None,
            style: Style::new(),
        }
    }
}

fn play_icon() -> Node {
    let triangle = Container::block().with_style(
        Style::new()
            .with("width", "0")
            .with("height", "0")
            .with("border-top", "10px solid transparent")
            .with("border-bottom", "10px solid transparent")
            .with("border-left", "18px solid rgba(255,255,255,0.6)")
            .with("margin-left", "4px"),
    );
    let disc = Container::new(Stack::row().align(Align::Center).justify(Justify::Center))
        .with_style(
            Style::new()
                .with("width", "48px")
                .with("height", "48px")
                .with("border-radius", "50%")
                .with("background", "rgba(0,0,0,0.25)"),
        )
        .child(triangle);

    Container::new(Stack::row().align(Align::Center).justify(Justify::Center))
        .with_style(overlay_style().with("pointer-events", "none"))
        .child(disc)
        .into()
}

impl Compose for ImageConfig {
    fn compose(&self) -> Result<Node> {
        if let Some(height) = &self.height {
            let mut shape = ShapeConfig::sized(self.width.clone(), height.clone())
                .radius(self.radius.clone())
                .variant(self.variant)
                .style(self.style.clone());
            shape.class = self.class.clone();
            return Ok(Node::Unit(shape::unit(&shape)?));
        }

        self.width.validate("width")?;
        let border_radius = self.radius.normalize()?;
        let frame = Style::new()
            .with("position", "relative")
            .with("width", &self.width)
            .with("padding-top", format!("{}%", self.aspect_ratio.padding_percent()))
            .with("overflow", "hidden")
            .with("border-radius", border_radius)
            .with("flex-shrink", "0");

        let fill = leaf(
            ShapeConfig::sized(Size::full(), Size::full())
                .radius(0)
                .variant(self.variant),
        )?;

        Ok(Container::block()
            .with_style(frame)
            .child(Container::block().with_style(overlay_style()).child(fill))
            .maybe_child(self.show_play_icon.then(play_icon))
            .overridden_by(self.class.as_deref(), &self.style)
            .into())
    }
}
