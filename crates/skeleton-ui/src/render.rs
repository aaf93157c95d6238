//! Turns a composite tree into `div` elements.

use dioxus::dioxus_core::AttributeValue;
use dioxus::prelude::*;
use skeleton_core::{Node, Style};

/// Caller attributes with `class` and `style` pulled out, so they can be
/// merged declaration by declaration instead of replacing computed values.
#[derive(Default)]
pub struct CallerOverrides {
    /// Every `class` attribute, joined.
    pub class: Option<String>,
    /// The `style` attribute plus single CSS properties such as `opacity`.
    pub style: Style,
    /// Everything else (`id`, `data-*`, ...).
    pub rest: Vec<Attribute>,
}

impl CallerOverrides {
    pub fn split(attributes: Vec<Attribute>) -> Self {
        let mut overrides = Self::default();
        let mut classes = Vec::new();
        for attribute in attributes {
            let text = match &attribute.value {
                AttributeValue::Text(text) => Some(text.clone()),
                _ => None,
            };
            match (attribute.namespace, attribute.name, text) {
                (None, "class", Some(class)) => classes.push(class),
                (None, "style", Some(inline)) => {
                    let style = inline.parse::<Style>().unwrap_or_default();
                    overrides.style = Style::merged(&overrides.style, &style);
                }
                (Some("style"), property, Some(value)) => overrides.style.set(property, value),
                _ => overrides.rest.push(attribute),
            }
        }
        let class = skeleton_core::join_classes(classes.iter().map(String::as_str));
        overrides.class = (!class.is_empty()).then_some(class);
        overrides
    }
}

/// `class`, inline `style` and `aria-hidden` for the element standing in
/// for `node`. Empty values are left out.
pub fn node_attributes(node: &Node) -> Vec<Attribute> {
    let (class, style) = match node {
        Node::Unit(unit) => (Some(unit.class_name()), unit.css()),
        Node::Container(container) => (container.class.clone(), container.css()),
    };

    let mut attributes = Vec::with_capacity(3);
    if let Some(class) = class.filter(|c| !c.is_empty()) {
        attributes.push(Attribute::new("class", class, None, false));
    }
    if !style.is_empty() {
        attributes.push(Attribute::new("style", style.to_string(), None, false));
    }
    attributes.push(Attribute::new("aria-hidden", "true", None, false));
    attributes
}

/// Render any node and its descendants.
pub fn render_node(node: &Node) -> Element {
    element(node, node_attributes(node))
}

/// Like [`render_node`], with extra attributes merged onto the outermost
/// element. Route `class` and `style` through [`CallerOverrides`] first: a
/// `style` attribute given here replaces the computed one.
pub fn render_node_with(node: &Node, attributes: Vec<Attribute>) -> Element {
    if attributes.is_empty() {
        return render_node(node);
    }
    let merged = dioxus_primitives::merge_attributes(vec![node_attributes(node), attributes]);
    element(node, merged)
}

fn element(node: &Node, attributes: Vec<Attribute>) -> Element {
    rsx! {
        div {
            ..attributes,
            for child in node.child_nodes() {
                {render_node(child)}
            }
        }
    }
}

/// Server-render a whole app, for component tests.
#[cfg(test)]
pub(crate) fn render_app(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
