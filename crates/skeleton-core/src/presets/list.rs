use super::text::body_text;
use super::{flexible, full_width, leaf, non_negative, Compose};
use crate::error::Result;
use crate::node::{Align, Container, Node, Stack};
use crate::radius::RadiusPreset;
use crate::shape::ShapeConfig;
use crate::style::{px, Style};
use crate::variant::Variant;
use serde::{Deserialize, Serialize};

/// Horizontal space between a row's leading element and its text.
const LEADING_GAP: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarShape {
    #[default]
    Circle,
    Square,
}

impl AvatarShape {
    fn radius(&self) -> RadiusPreset {
        match self {
            AvatarShape::Circle => RadiusPreset::Circle,
            AvatarShape::Square => RadiusPreset::Md,
        }
    }
}

/// Rows of text with optional leading avatar or thumbnail, trailing
/// element and dividers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListConfig {
    pub items: u32,
    /// Vertical distance between rows, split evenly above and below.
    pub gap: f64,
    pub show_avatar: bool,
    pub avatar_size: f64,
    pub avatar_shape: AvatarShape,
    /// Ignored when `show_avatar` is set.
    pub show_thumbnail: bool,
    pub thumbnail_width: f64,
    pub thumbnail_height: f64,
    pub show_trailing: bool,
    pub trailing_width: f64,
    pub lines: u32,
    pub show_divider: bool,
    pub divider_color: String,
    pub variant: Variant,
    #[serde(alias = "className", skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Style::is_empty")]
    pub style: Style,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            items: 5,
            gap: 16.0,
            show_avatar: false,
            avatar_size: 44.0,
            avatar_shape: AvatarShape::Circle,
            show_thumbnail: false,
            thumbnail_width: 56.0,
            thumbnail_height: 56.0,
            show_trailing: false,
            trailing_width: 24.0,
            lines: 2,
            show_divider: false,
            divider_color: "rgba(0,0,0,0.07)".to_string(),
            variant: Variant::Shimmer,
            class: None,
            style: Style::new(),
        }
    }
}

impl ListConfig {
    /// Left offset of the dividers, so they line up with the text column.
    pub fn divider_indent(&self) -> f64 {
        if self.show_avatar {
            self.avatar_size + LEADING_GAP
        } else if self.show_thumbnail {
            self.thumbnail_width + LEADING_GAP
        } else {
            0.0
        }
    }

    fn leading(&self) -> Result<Option<Node>> {
        if self.show_avatar {
            leaf(
                ShapeConfig::sized(self.avatar_size, self.avatar_size)
                    .radius(self.avatar_shape.radius())
                    .variant(self.variant),
            )
            .map(Some)
        } else if self.show_thumbnail {
            leaf(
                ShapeConfig::sized(self.thumbnail_width, self.thumbnail_height)
                    .radius(RadiusPreset::Sm)
                    .variant(self.variant)
                    .css("flex-shrink", 0),
            )
            .map(Some)
        } else {
            Ok(None)
        }
    }

    fn row(&self, index: u32) -> Result<Node> {
        let half_gap = self.gap / 2.0;
        let padding_top = if index == 0 { 0.0 } else { half_gap };
        let padding_bottom = if index + 1 == self.items { 0.0 } else { half_gap };

        let trailing = if self.show_trailing {
            Some(leaf(
                ShapeConfig::sized(self.trailing_width, self.trailing_width)
                    .radius(RadiusPreset::Sm)
                    .variant(self.variant)
                    .css("flex-shrink", 0),
            )?)
        } else {
            None
        };

        let row = Container::new(Stack::row().align(Align::Center).gap(LEADING_GAP))
            .with_style(
                Style::new()
                    .with("padding-top", px(padding_top))
                    .with("padding-bottom", px(padding_bottom)),
            )
            .maybe_child(self.leading()?)
            .child(
                Container::block()
                    .with_style(flexible())
                    .child(body_text(self.lines, 6.0, 55.0, self.variant)?),
            )
            .maybe_child(trailing);

        let divider: Option<Node> = (self.show_divider && index + 1 < self.items).then(|| {
            Container::block()
                .with_style(
                    Style::new()
                        .with("height", "1px")
                        .with("background", &self.divider_color)
                        .with("margin-left", px(self.divider_indent())),
                )
                .into()
        });

        Ok(Container::block().child(row).maybe_child(divider).into())
    }
}

impl Compose for ListConfig {
    fn compose(&self) -> Result<Node> {
        non_negative("gap", self.gap)?;

        let rows = (0..self.items)
            .map(|i| self.row(i))
            .collect::<Result<Vec<_>>>()?;

        Ok(Container::new(Stack::column())
            .with_style(full_width())
            .children(rows)
            .overridden_by(self.class.as_deref(), &self.style)
            .into())
    }
}
