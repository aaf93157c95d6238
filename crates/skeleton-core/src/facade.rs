//! Single entry point: the primitive plus every preset, by name.

use crate::error::Result;
use crate::node::Node;
use crate::presets::*;
use crate::shape::{self, ShapeConfig};
use serde::{Deserialize, Serialize};

/// Namespace for the primitive and the presets.
///
/// Every method delegates to its composer; nothing is computed here.
#[derive(Debug, Clone, Copy, Default)]
pub struct Skeleton;

impl Skeleton {
    /// The primitive: `None` when `count` is zero.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn shape(config: &ShapeConfig) -> Result<Option<Node>> {
        shape::resolve(config)
    }

    #[tracing::instrument(level = "trace", skip_all)]
    pub fn text(config: &TextConfig) -> Result<Node> {
        config.compose()
    }

    #[tracing::instrument(level = "trace", skip_all)]
    pub fn avatar_text(config: &AvatarTextConfig) -> Result<Node> {
        config.compose()
    }

    #[tracing::instrument(level = "trace", skip_all)]
    pub fn card(config: &CardConfig) -> Result<Node> {
        config.compose()
    }

    #[tracing::instrument(level = "trace", skip_all)]
    pub fn table(config: &TableConfig) -> Result<Node> {
        config.compose()
    }

    #[tracing::instrument(level = "trace", skip_all)]
    pub fn button(config: &ButtonConfig) -> Result<Node> {
        config.compose()
    }

    #[tracing::instrument(level = "trace", skip_all)]
    pub fn image(config: &ImageConfig) -> Result<Node> {
        config.compose()
    }

    #[tracing::instrument(level = "trace", skip_all)]
    pub fn list(config: &ListConfig) -> Result<Node> {
        config.compose()
    }

    #[tracing::instrument(level = "trace", skip_all)]
    pub fn form(config: &FormConfig) -> Result<Node> {
        config.compose()
    }

    #[tracing::instrument(level = "trace", skip_all)]
    pub fn stat(config: &StatConfig) -> Result<Node> {
        config.compose()
    }

    #[tracing::instrument(level = "trace", skip_all)]
    pub fn banner(config: &BannerConfig) -> Result<Node> {
        config.compose()
    }

    #[tracing::instrument(level = "trace", skip_all)]
    pub fn comment(config: &CommentConfig) -> Result<Node> {
        config.compose()
    }

    #[tracing::instrument(level = "trace", skip_all)]
    pub fn product_row(config: &ProductRowConfig) -> Result<Node> {
        config.compose()
    }

    #[tracing::instrument(level = "trace", skip_all)]
    pub fn chip(config: &ChipConfig) -> Result<Node> {
        config.compose()
    }
}

/// A named preset with its configuration, e.g. `{"preset": "text", "lines": 4}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "preset", rename_all = "camelCase")]
pub enum Preset {
    Shape(ShapeConfig),
    Text(TextConfig),
    AvatarText(AvatarTextConfig),
    Card(CardConfig),
    Table(TableConfig),
    Button(ButtonConfig),
    Image(ImageConfig),
    List(ListConfig),
    Form(FormConfig),
    Stat(StatConfig),
    Banner(BannerConfig),
    Comment(CommentConfig),
    ProductRow(ProductRowConfig),
    Chip(ChipConfig),
}

impl Preset {
    /// Registry name, as used in the `preset` tag.
    pub fn name(&self) -> &'static str {
        match self {
            Preset::Shape(_) => "shape",
            Preset::Text(_) => "text",
            Preset::AvatarText(_) => "avatarText",
            Preset::Card(_) => "card",
            Preset::Table(_) => "table",
            Preset::Button(_) => "button",
            Preset::Image(_) => "image",
            Preset::List(_) => "list",
            Preset::Form(_) => "form",
            Preset::Stat(_) => "stat",
            Preset::Banner(_) => "banner",
            Preset::Comment(_) => "comment",
            Preset::ProductRow(_) => "productRow",
            Preset::Chip(_) => "chip",
        }
    }

    /// Build the tree. Only the primitive can produce nothing.
    #[tracing::instrument(level = "trace", skip_all, fields(preset = self.name()))]
    pub fn compose(&self) -> Result<Option<Node>> {
        let node = match self {
            Preset::Shape(config) => return Skeleton::shape(config),
            Preset::Text(config) => Skeleton::text(config),
            Preset::AvatarText(config) => Skeleton::avatar_text(config),
            Preset::Card(config) => Skeleton::card(config),
            Preset::Table(config) => Skeleton::table(config),
            Preset::Button(config) => Skeleton::button(config),
            Preset::Image(config) => Skeleton::image(config),
            Preset::List(config) => Skeleton::list(config),
            Preset::Form(config) => Skeleton::form(config),
            Preset::Stat(config) => Skeleton::stat(config),
            Preset::Banner(config) => Skeleton::banner(config),
            Preset::Comment(config) => Skeleton::comment(config),
            Preset::ProductRow(config) => Skeleton::product_row(config),
            Preset::Chip(config) => Skeleton::chip(config),
        };
        node.map(Some)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }
}

macro_rules! preset_from {
    ($($config:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$config> for Preset {
                fn from(config: $config) -> Self {
                    Preset::$variant(config)
                }
            }
        )*
    };
}

preset_from! {
    ShapeConfig => Shape,
    TextConfig => Text,
    AvatarTextConfig => AvatarText,
    CardConfig => Card,
    TableConfig => Table,
    ButtonConfig => Button,
    ImageConfig => Image,
    ListConfig => List,
    FormConfig => Form,
    StatConfig => Stat,
    BannerConfig => Banner,
    CommentConfig => Comment,
    ProductRowConfig => ProductRow,
    ChipConfig => Chip,
}
