use super::text::TextConfig;
use super::{flexible, full_width, leaf, non_negative, Compose};
use crate::error::Result;
use crate::node::{Align, Container, Node, Stack};
use crate::radius::RadiusPreset;
use crate::shape::ShapeConfig;
use crate::style::Style;
use crate::variant::Variant;
use serde::{Deserialize, Serialize};

/// A circular avatar next to a few lines of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AvatarTextConfig {
    pub lines: u32,
    pub avatar_size: f64,
    /// Pixels between the avatar and the text.
    pub gap: f64,
    pub variant: Variant,
    pub line_height: f64,
    pub line_gap: f64,
    /// Vertical alignment of the avatar against the text.
    pub align: Align,
    #[serde(alias = "className", skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Style::is_empty")]
    pub style: Style,
}

impl Default for AvatarTextConfig {
    fn default() -> Self {
        Self {
            lines: 2,
            avatar_size: 48.0,
            gap: 12.0,
            variant: Variant::Shimmer,
            line_height: 12.0,
            line_gap: 6.0,
            align: Align::Center,
            class: None,
            style: Style::new(),
        }
    }
}

impl Compose for AvatarTextConfig {
    fn compose(&self) -> Result<Node> {
        let gap = non_negative("gap", self.gap)?;

        let avatar = leaf(
            ShapeConfig::sized(self.avatar_size, self.avatar_size)
                .radius(RadiusPreset::Circle)
                .variant(self.variant),
        )?;
        let text = TextConfig {
            lines: self.lines,
            line_height: self.line_height,
            gap: self.line_gap,
            last_line_width: 65.0,
            variant: self.variant,
            ..TextConfig::default()
        }
        .compose()?;

        Ok(Container::new(Stack::row().gap(gap).align(self.align))
            .with_style(full_width())
            .child(avatar)
            .child(Container::block().with_style(flexible()).child(text))
            .overridden_by(self.class.as_deref(), &self.style)
            .into())
    }
}
