use super::{full_width, leaf, non_negative, Compose};
use crate::error::Result;
use crate::node::{Container, Node, Stack};
use crate::radius::Radius;
use crate::shape::ShapeConfig;
use crate::style::{Size, Style};
use crate::variant::Variant;
use serde::{Deserialize, Serialize};

/// A block of text lines whose last line is shorter, like the end of a
/// paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextConfig {
    pub lines: u32,
    pub line_height: f64,
    pub gap: f64,
    /// Width of the final line, in percent of the container.
    pub last_line_width: f64,
    pub variant: Variant,
    pub radius: Radius,
    #[serde(alias = "className", skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Style::is_empty")]
    pub style: Style,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            lines: 3,
            line_height: 12.0,
            gap: 8.0,
            last_line_width: 60.0,
            variant: Variant::Shimmer,
            radius: Radius::Px(4.0),
            class: None,
            style: Style::new(),
        }
    }
}

impl TextConfig {
    /// Width of line `index` (zero-based).
    pub fn line_width(&self, index: u32) -> Size {
        if index + 1 == self.lines {
            Size::Percent(self.last_line_width)
        } else {
            Size::full()
        }
    }
}

impl Compose for TextConfig {
    fn compose(&self) -> Result<Node> {
        non_negative("gap", self.gap)?;
        non_negative("lastLineWidth", self.last_line_width)?;

        let lines = (0..self.lines)
            .map(|i| {
                leaf(
                    ShapeConfig::sized(self.line_width(i), self.line_height)
                        .radius(self.radius.clone())
                        .variant(self.variant),
                )
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Container::new(Stack::column().gap(self.gap))
            .with_style(full_width())
            .children(lines)
            .overridden_by(self.class.as_deref(), &self.style)
            .into())
    }
}

/// Text block with the fixed 12px line height used inside other presets.
pub(crate) fn body_text(lines: u32, gap: f64, last_line_width: f64, variant: Variant) -> Result<Node> {
    TextConfig {
        lines,
        line_height: 12.0,
        gap,
        last_line_width,
        variant,
        ..TextConfig::default()
    }
    .compose()
}
