pub mod components;
pub mod render;

pub use components::*;
pub use render::*;
