use super::text::body_text;
use super::{full_width, leaf, non_negative, Compose};
use crate::error::Result;
use crate::node::{Container, Node, Stack};
use crate::radius::Radius;
use crate::shape::ShapeConfig;
use crate::style::{Size, Style};
use crate::variant::Variant;
use serde::{Deserialize, Serialize};

/// Media block, optional title and a few lines of description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardConfig {
    pub lines: u32,
    pub image_height: f64,
    pub show_title: bool,
    /// Title width in percent.
    pub title_width: f64,
    pub variant: Variant,
    pub gap: f64,
    pub image_radius: Radius,
    #[serde(alias = "className", skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Style::is_empty")]
    pub style: Style,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            lines: 2,
            image_height: 200.0,
            show_title: true,
            title_width: 70.0,
            variant: Variant::Shimmer,
            gap: 12.0,
            image_radius: Radius::Px(8.0),
            class: None,
            style: Style::new(),
        }
    }
}

impl Compose for CardConfig {
    fn compose(&self) -> Result<Node> {
        let gap = non_negative("gap", self.gap)?;

        let media = leaf(
            ShapeConfig::sized(Size::full(), self.image_height)
                .radius(self.image_radius.clone())
                .variant(self.variant),
        )?;
        let title = if self.show_title {
            Some(leaf(
                ShapeConfig::sized(Size::Percent(self.title_width), 16)
                    .radius(4)
                    .variant(self.variant),
            )?)
        } else {
            None
        };
        let description = if self.lines > 0 {
            Some(body_text(self.lines, 8.0, 55.0, self.variant)?)
        } else {
            None
        };

        Ok(Container::new(Stack::column().gap(gap))
            .with_style(full_width())
            .child(media)
            .maybe_child(title)
            .maybe_child(description)
            .overridden_by(self.class.as_deref(), &self.style)
            .into())
    }
}
