pub mod camera;
pub mod sphere_instance;
pub mod traits;

pub use traits::{FrameData, Renderer};
