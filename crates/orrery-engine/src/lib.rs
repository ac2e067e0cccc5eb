pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::EntityId;
pub use api::controls::{SliderSpec, format_readout, parse_slider_value};
pub use components::entity::Entity;
pub use components::mesh::{MeshComponent, MeshShape, Color};
pub use components::line_loop::LineLoopComponent;
pub use core::scene::Scene;
pub use renderer::camera::{Camera3D, CameraConfig, Projection};
pub use renderer::sphere_instance::{SphereInstance, SphereBuffer};
pub use renderer::traits::{FrameData, Renderer};
pub use input::queue::{InputEvent, InputQueue};
pub use systems::lighting::{PointLight, LightState};
pub use systems::line_render::build_line_buffer;
pub use systems::sphere_render::build_sphere_buffer;
pub use systems::vector::{VectorState, VectorVertex, VectorColor};
