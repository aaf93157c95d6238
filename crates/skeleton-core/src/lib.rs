pub mod error;
pub mod style;
pub mod radius;
pub mod variant;
pub mod node;

// Primitive resolver and the composers built on it
pub mod shape;
pub mod presets;
pub mod facade;

pub use error::*;
pub use style::*;
pub use radius::*;
pub use variant::*;
pub use node::*;
pub use shape::{resolve, unit, ShapeConfig};
pub use presets::*;
pub use facade::*;
