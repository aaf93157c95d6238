use crate::components::skeleton::SkeletonStylesheet;
use crate::render::{render_node_with, CallerOverrides};
use dioxus::prelude::*;
use skeleton_core::{
    AvatarTextConfig, BannerConfig, ButtonConfig, CardConfig, ChipConfig, CommentConfig, Compose,
    FormConfig, ImageConfig, ListConfig, Node, Preset, ProductRowConfig, Result, StatConfig,
    TableConfig, TextConfig,
};

/// Render a composed tree, or nothing when composition failed.
///
/// Caller `class` and `style` apply to the outermost node like the config's
/// own `class` and `style`.
fn composed(preset: &'static str, result: Result<Option<Node>>, attributes: Vec<Attribute>) -> Element {
    let overrides = CallerOverrides::split(attributes);
    match result {
        Ok(Some(node)) => {
            let node = node.overridden_by(overrides.class.as_deref(), &overrides.style);
            rsx! {
                SkeletonStylesheet {}
                {render_node_with(&node, overrides.rest)}
            }
        }
        Ok(None) => rsx! {},
        Err(err) => {
            tracing::error!(preset, %err, "skeleton preset failed to compose");
            rsx! {}
        }
    }
}

/// Paragraph placeholder with a shortened last line.
#[component]
pub fn SkeletonText(
    #[props(default)] config: TextConfig,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    composed("text", config.compose().map(Some), attributes)
}

#[component]
pub fn SkeletonAvatarText(
    #[props(default)] config: AvatarTextConfig,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    composed("avatarText", config.compose().map(Some), attributes)
}

/// Media, title and body text.
#[component]
pub fn SkeletonCard(
    #[props(default)] config: CardConfig,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    composed("card", config.compose().map(Some), attributes)
}

#[component]
pub fn SkeletonTable(
    #[props(default)] config: TableConfig,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    composed("table", config.compose().map(Some), attributes)
}

#[component]
pub fn SkeletonButton(
    #[props(default)] config: ButtonConfig,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    composed("button", config.compose().map(Some), attributes)
}

/// Aspect-locked image or video thumbnail.
#[component]
pub fn SkeletonImage(
    #[props(default)] config: ImageConfig,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    composed("image", config.compose().map(Some), attributes)
}

#[component]
pub fn SkeletonList(
    #[props(default)] config: ListConfig,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    composed("list", config.compose().map(Some), attributes)
}

#[component]
pub fn SkeletonForm(
    #[props(default)] config: FormConfig,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    composed("form", config.compose().map(Some), attributes)
}

/// Row of dashboard metric cards.
#[component]
pub fn SkeletonStat(
    #[props(default)] config: StatConfig,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    composed("stat", config.compose().map(Some), attributes)
}

#[component]
pub fn SkeletonBanner(
    #[props(default)] config: BannerConfig,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    composed("banner", config.compose().map(Some), attributes)
}

/// Comment threads with indented replies.
#[component]
pub fn SkeletonComment(
    #[props(default)] config: CommentConfig,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    composed("comment", config.compose().map(Some), attributes)
}

#[component]
pub fn SkeletonProductRow(
    #[props(default)] config: ProductRowConfig,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    composed("productRow", config.compose().map(Some), attributes)
}

#[component]
pub fn SkeletonChip(
    #[props(default)] config: ChipConfig,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    composed("chip", config.compose().map(Some), attributes)
}

/// Any preset chosen at runtime, e.g. parsed with [`Preset::from_json_str`].
#[component]
pub fn SkeletonPreset(
    preset: Preset,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    composed(preset.name(), preset.compose(), attributes)
}
