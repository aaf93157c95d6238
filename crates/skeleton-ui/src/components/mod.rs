pub mod presets;
pub mod skeleton;

pub use presets::*;
pub use skeleton::*;
