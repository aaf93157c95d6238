//! Preset composers.
//!
//! Every preset owns its configuration struct and its defaults; nothing is
//! shared between presets except the primitive resolver they all build
//! their leaves with.

pub mod avatar_text;
pub mod banner;
pub mod button;
pub mod card;
pub mod chip;
pub mod comment;
pub mod form;
pub mod image;
pub mod list;
pub mod product_row;
pub mod stat;
pub mod table;
pub mod text;

pub use avatar_text::*;
pub use banner::*;
pub use button::*;
pub use card::*;
pub use chip::*;
pub use comment::*;
pub use form::*;
pub use image::*;
pub use list::*;
pub use product_row::*;
pub use stat::*;
pub use table::*;
pub use text::*;

use crate::error::{Result, SkeletonError};
use crate::node::Node;
use crate::shape::{self, ShapeConfig};
use crate::style::Style;

/// A configuration that can be turned into a composite tree.
pub trait Compose {
    fn compose(&self) -> Result<Node>;
}

/// Resolve one leaf through the primitive resolver.
pub(crate) fn leaf(config: ShapeConfig) -> Result<Node> {
    shape::unit(&config).map(Node::Unit)
}

pub(crate) fn non_negative(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(SkeletonError::invalid_field(
            field,
            format!("{value} must be a finite, non-negative number"),
        ))
    }
}

pub(crate) fn full_width() -> Style {
    Style::new().with("width", "100%")
}

/// A flex child that takes the remaining space and may shrink below its
/// content width.
pub(crate) fn flexible() -> Style {
    Style::new().with("flex", "1").with("min-width", "0")
}
