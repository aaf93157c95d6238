use super::{leaf, Compose};
use crate::error::Result;
use crate::node::{overlay_style, Align, Container, Justify, Node, Stack};
use crate::shape::ShapeConfig;
use crate::style::{px, Size, Style};
use crate::variant::Variant;
use serde::{Deserialize, Serialize};

/// Placement of the banner's overlay content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentAlign {
    #[default]
    Center,
    Left,
    /// Pinned to the bottom-left corner.
    Bottom,
}

impl ContentAlign {
    fn stack(&self) -> Stack {
        let stack = Stack::column().gap(16.0);
        match self {
            ContentAlign::Center => stack.align(Align::Center).justify(Justify::Center),
            ContentAlign::Left => stack.align(Align::Start).justify(Justify::Center),
            ContentAlign::Bottom => stack.align(Align::Start).justify(Justify::End),
        }
    }

    fn style(&self) -> Style {
        let style = overlay_style().with("padding", "0 48px");
        match self {
            ContentAlign::Center => style.with("text-align", "center"),
            ContentAlign::Left => style,
            ContentAlign::Bottom => style.with("padding-bottom", "40px"),
        }
    }
}

/// A hero banner: a full-bleed background with static overlay text and
/// call-to-action placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BannerConfig {
    pub height: f64,
    pub show_title: bool,
    pub title_width: f64,
    pub show_subtitle: bool,
    pub subtitle_width: f64,
    pub show_cta: bool,
    pub cta_count: u32,
    pub content_align: ContentAlign,
    pub radius: f64,
    /// Animation of the background only; overlay placeholders are static.
    pub variant: Variant,
    #[serde(alias = "className", skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Style::is_empty")]
    pub style: Style,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            height: 420.0,
            show_title: true,
            title_width: 60.0,
            show_subtitle: true,
            subtitle_width: 45.0,
            show_cta: true,
            cta_count: 2,
            content_align: ContentAlign::Center,
            radius: 0.0,
            variant: Variant::Shimmer,
            class: None,
            style: Style::new(),
        }
    }
}

fn overlay_unit(width: impl Into<Size>, height: f64, radius: f64, opacity: f64) -> Result<Node> {
    leaf(
        ShapeConfig::sized(width, height)
            .radius(radius)
            .variant(Variant::Static)
            .css("opacity", opacity),
    )
}

impl BannerConfig {
    fn overlay(&self) -> Result<Node> {
        let title = if self.show_title {
            Some(overlay_unit(Size::Percent(self.title_width), 40.0, 8.0, 0.35)?)
        } else {
            None
        };
        let subtitle = if self.show_subtitle {
            Some(overlay_unit(Size::Percent(self.subtitle_width), 20.0, 6.0, 0.3)?)
        } else {
            None
        };
        let ctas = if self.show_cta && self.cta_count > 0 {
            let buttons = (0..self.cta_count)
                .map(|i| {
                    let (width, opacity) = if i == 0 { (140.0, 0.5) } else { (110.0, 0.3) };
                    overlay_unit(width, 44.0, 6.0, opacity)
                })
                .collect::<Result<Vec<_>>>()?;
            Some(
                Container::new(Stack::row().gap(12.0))
                    .with_style(Style::new().with("margin-top", "8px"))
                    .children(buttons)
                    .into(),
            )
        } else {
            None
        };

        Ok(Container::new(self.content_align.stack())
            .with_style(self.content_align.style())
            // eyebrow
            .child(overlay_unit(80.0, 12.0, 99.0, 0.4)?)
            .maybe_child(title)
            .maybe_child(subtitle)
            .maybe_child(ctas)
            .into())
    }
}

impl Compose for BannerConfig {
    fn compose(&self) -> Result<Node> {
        Size::Px(self.height).validate("height")?;

        let background = leaf(
            ShapeConfig::sized(Size::full(), Size::full())
                .radius(self.radius)
                .variant(self.variant),
        )?;

        Ok(Container::block()
            .with_style(
                Style::new()
                    .with("position", "relative")
                    .with("width", "100%")
                    .with("height", px(self.height))
                    .with("overflow", "hidden")
                    .with("border-radius", px(self.radius)),
            )
            .child(background)
            .child(self.overlay()?)
            .overridden_by(self.class.as_deref(), &self.style)
            .into())
    }
}
