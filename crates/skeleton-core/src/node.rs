//! The composite tree handed to the rendering collaborator.

use crate::style::{join_classes, px, Size, Style};
use crate::variant::{Variant, CLASS_PREFIX};
use serde::{Deserialize, Serialize};

/// One placeholder box with resolved size, corner radius and animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualUnit {
    pub width: Size,
    pub height: Size,
    pub corner_radius: Size,
    pub variant: Variant,
    /// Extra class appended after the computed ones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Extra declarations merged over the computed ones.
    #[serde(default, skip_serializing_if = "Style::is_empty")]
    pub style: Style,
}

impl VisualUnit {
    /// `nano-skeleton <animation class> <extra class>`.
    pub fn class_name(&self) -> String {
        join_classes([
            CLASS_PREFIX,
            self.variant.class(),
            self.class.as_deref().unwrap_or_default(),
        ])
    }

    /// Inline style: size and radius first, caller declarations last.
    pub fn css(&self) -> Style {
        let computed = Style::new()
            .with("width", &self.width)
            .with("height", &self.height)
            .with("border-radius", &self.corner_radius);
        Style::merged(&computed, &self.style)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Row,
    Column,
}

/// Cross-axis alignment of a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Start,
    Center,
    End,
}

impl Align {
    pub fn css(&self) -> &'static str {
        match self {
            Align::Start => "flex-start",
            Align::Center => "center",
            Align::End => "flex-end",
        }
    }
}

/// Main-axis distribution of a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Justify {
    Start,
    Center,
    End,
    SpaceBetween,
}

impl Justify {
    pub fn css(&self) -> &'static str {
        match self {
            Justify::Start => "flex-start",
            Justify::Center => "center",
            Justify::End => "flex-end",
            Justify::SpaceBetween => "space-between",
        }
    }
}

/// A flex arrangement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stack {
    pub axis: Axis,
    pub gap: Option<f64>,
    pub align: Option<Align>,
    pub justify: Option<Justify>,
    pub wrap: Option<bool>,
}

impl Stack {
    pub fn row() -> Self {
        Self {
            axis: Axis::Row,
            gap: None,
            align: None,
            justify: None,
            wrap: None,
        }
    }

    pub fn column() -> Self {
        Self {
            axis: Axis::Column,
            ..Self::row()
        }
    }

    pub fn gap(mut self, gap: f64) -> Self {
        self.gap = Some(gap);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = Some(justify);
        self
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = Some(wrap);
        self
    }
}

/// Sizing of grid tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Track {
    /// `1fr`
    Fraction,
    /// `minmax(0, 1fr)`, lets tracks shrink below their content width.
    Shrinkable,
}

/// A fixed-column grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub columns: u32,
    pub gap: f64,
    pub track: Track,
}

/// How a container arranges its children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "display", rename_all = "lowercase")]
pub enum Layout {
    Block,
    Flex(Stack),
    Grid(Grid),
}

impl Layout {
    pub fn declarations(&self) -> Style {
        match self {
            Layout::Block => Style::new(),
            Layout::Flex(stack) => {
                let mut style = Style::new().with("display", "flex");
                if stack.axis == Axis::Column {
                    style.set("flex-direction", "column");
                }
                if let Some(wrap) = stack.wrap {
                    style.set("flex-wrap", if wrap { "wrap" } else { "nowrap" });
                }
                if let Some(gap) = stack.gap {
                    style.set("gap", px(gap));
                }
                if let Some(align) = stack.align {
                    style.set("align-items", align.css());
                }
                if let Some(justify) = stack.justify {
                    style.set("justify-content", justify.css());
                }
                style
            }
            Layout::Grid(grid) => {
                let track = match grid.track {
                    Track::Fraction => "1fr",
                    Track::Shrinkable => "minmax(0, 1fr)",
                };
                Style::new()
                    .with("display", "grid")
                    .with(
                        "grid-template-columns",
                        format!("repeat({}, {track})", grid.columns),
                    )
                    .with("gap", px(grid.gap))
            }
        }
    }
}

impl From<Stack> for Layout {
    fn from(stack: Stack) -> Self {
        Layout::Flex(stack)
    }
}

impl From<Grid> for Layout {
    fn from(grid: Grid) -> Self {
        Layout::Grid(grid)
    }
}

/// A layout node grouping other nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub layout: Layout,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Style::is_empty")]
    pub style: Style,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Container {
    pub fn new(layout: impl Into<Layout>) -> Self {
        Self {
            layout: layout.into(),
            class: None,
            style: Style::new(),
            children: Vec::new(),
        }
    }

    pub fn block() -> Self {
        Self::new(Layout::Block)
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Append a child only when `node` is present.
    pub fn maybe_child(mut self, node: Option<Node>) -> Self {
        self.children.extend(node);
        self
    }

    /// Apply a caller's class and style passthrough. Applied last, so caller
    /// declarations win over everything the composer computed.
    pub fn overridden_by(mut self, class: Option<&str>, style: &Style) -> Self {
        self.class = appended(self.class, class);
        self.style = Style::merged(&self.style, style);
        self
    }

    /// Inline style: layout directives, then box properties.
    pub fn css(&self) -> Style {
        Style::merged(&self.layout.declarations(), &self.style)
    }
}

/// A node of the composite tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    Unit(VisualUnit),
    Container(Container),
}

impl Node {
    pub fn as_unit(&self) -> Option<&VisualUnit> {
        match self {
            Node::Unit(unit) => Some(unit),
            Node::Container(_) => None,
        }
    }

    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Node::Container(container) => Some(container),
            Node::Unit(_) => None,
        }
    }

    /// Children of a container; empty for a unit.
    pub fn child_nodes(&self) -> &[Node] {
        match self {
            Node::Container(container) => &container.children,
            Node::Unit(_) => &[],
        }
    }

    /// Every visual unit in document order.
    pub fn units(&self) -> Vec<&VisualUnit> {
        let mut out = Vec::new();
        self.collect_units(&mut out);
        out
    }

    fn collect_units<'a>(&'a self, out: &mut Vec<&'a VisualUnit>) {
        match self {
            Node::Unit(unit) => out.push(unit),
            Node::Container(container) => {
                for child in &container.children {
                    child.collect_units(out);
                }
            }
        }
    }

    /// Apply a caller's class and style to this node only: the class is
    /// appended, style declarations win one by one.
    pub fn overridden_by(self, class: Option<&str>, style: &Style) -> Node {
        match self {
            Node::Container(container) => container.overridden_by(class, style).into(),
            Node::Unit(mut unit) => {
                unit.class = appended(unit.class, class);
                unit.style = Style::merged(&unit.style, style);
                unit.into()
            }
        }
    }

    /// Levels of nesting, counting this node.
    pub fn depth(&self) -> usize {
        1 + self
            .child_nodes()
            .iter()
            .map(Node::depth)
            .max()
            .unwrap_or_default()
    }
}

impl From<VisualUnit> for Node {
    fn from(unit: VisualUnit) -> Self {
        Node::Unit(unit)
    }
}

impl From<Container> for Node {
    fn from(container: Container) -> Self {
        Node::Container(container)
    }
}

fn appended(existing: Option<String>, class: Option<&str>) -> Option<String> {
    let joined = join_classes([existing.as_deref().unwrap_or_default(), class.unwrap_or_default()]);
    (!joined.is_empty()).then_some(joined)
}

/// `position: absolute; inset: 0` box filling its positioned parent.
pub fn overlay_style() -> Style {
    Style::new().with("position", "absolute").with("inset", "0")
}
