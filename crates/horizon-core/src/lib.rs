pub mod camera;
pub mod color;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod grid;
pub mod input;
pub mod scene;
pub mod viewport;
pub mod wave;

pub use camera::*;
pub use color::*;
pub use config::*;
pub use constants::*;
pub use geometry::*;
pub use grid::*;
pub use input::*;
pub use scene::*;
pub use viewport::*;
pub use wave::*;

// Shaders bundled as string constants
pub static LINES_WGSL: &str = include_str!("../shaders/lines.wgsl");
