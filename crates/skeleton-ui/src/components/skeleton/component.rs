use crate::render::{render_node_with, CallerOverrides};
use dioxus::prelude::*;
use skeleton_core::{Radius, ShapeConfig, Size, Variant};

/// Loads the animation keyframes for every `nano-skeleton` class.
#[component]
pub fn SkeletonStylesheet() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
    }
}

/// An animated loading placeholder.
///
/// With `count > 1` the units are stacked vertically `gap` pixels apart.
/// `class` and `style` go on every unit, with style declarations merged over
/// the computed size and radius; other attributes land on the outermost
/// element. `animate: false` is the deprecated spelling of
/// `variant: Variant::Static`.
#[component]
pub fn Skeleton(
    #[props(into, default = Size::full())] width: Size,
    #[props(into, default = Size::Px(16.0))] height: Size,
    #[props(into, default = Radius::Px(6.0))] radius: Radius,
    #[props(default = 1)] count: u32,
    #[props(default)] variant: Variant,
    #[props(default = 8.0)] gap: f64,
    animate: Option<bool>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let overrides = CallerOverrides::split(attributes);
    let config = ShapeConfig {
        width,
        height,
        radius,
        count,
        variant,
        gap,
        class: overrides.class,
        style: overrides.style,
        animate,
    };

    match skeleton_core::resolve(&config) {
        Ok(Some(node)) => rsx! {
            SkeletonStylesheet {}
            {render_node_with(&node, overrides.rest)}
        },
        Ok(None) => rsx! {},
        Err(err) => {
            tracing::error!(%err, "skeleton shape rejected");
            rsx! {}
        }
    }
}
