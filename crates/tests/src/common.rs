use skeleton_core::{Node, Size};

pub fn widths(node: &Node) -> Vec<Size> {
    node.units().iter().map(|u| u.width.clone()).collect()
}

pub fn heights(node: &Node) -> Vec<Size> {
    node.units().iter().map(|u| u.height.clone()).collect()
}

pub fn px(values: &[f64]) -> Vec<Size> {
    values.iter().copied().map(Size::Px).collect()
}
