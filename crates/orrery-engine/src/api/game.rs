use crate::api::controls::SliderSpec;
use crate::api::types::EntityId;
use crate::components::mesh::Color;
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::renderer::camera::{Camera3D, CameraConfig};
use crate::systems::lighting::LightState;
use crate::systems::vector::VectorState;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Initial viewport width in pixels, replaced by the real window size on mount.
    pub viewport_width: f32,
    /// Initial viewport height in pixels.
    pub viewport_height: f32,
    /// Maximum number of sphere instances (default: 64).
    pub max_spheres: usize,
    /// Maximum number of line vertices (default: 16384).
    pub max_vector_vertices: usize,
    /// Perspective camera setup.
    pub camera: CameraConfig,
    /// Background color (default: black).
    pub clear_color: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 600.0,
            max_spheres: 64,
            max_vector_vertices: 16384,
            camera: CameraConfig::default(),
            clear_color: Color::BLACK,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, spawn entities, configure the scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The frame tick. Read input, move entities.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Sliders the host page should mount, in display order.
    /// Each one reports changes as an `InputEvent::Slider` carrying its `kind` and `index`.
    fn sliders(&self) -> Vec<SliderSpec> {
        Vec::new()
    }
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: Camera3D,
    pub lights: LightState,
    pub vectors: VectorState,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    /// Create an EngineContext sized and framed by `config`.
    pub fn with_config(config: &GameConfig) -> Self {
        Self {
            scene: Scene::new(),
            camera: Camera3D::new(&config.camera, config.viewport_width, config.viewport_height),
            lights: LightState::new(),
            vectors: VectorState::with_capacity(config.max_vector_vertices),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Clear per-frame transient data (tessellated lines).
    pub fn clear_frame_data(&mut self) {
        self.vectors.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::vector::VectorColor;
    use glam::{Vec2, Vec3};

    #[test]
    fn ids_are_unique_and_start_at_one() {
        let mut ctx = EngineContext::new();
        assert_eq!(ctx.next_id(), EntityId(1));
        assert_eq!(ctx.next_id(), EntityId(2));
        assert_eq!(ctx.next_id(), EntityId(3));
    }

    #[test]
    fn context_follows_config() {
        let config = GameConfig {
            viewport_width: 1280.0,
            viewport_height: 720.0,
            camera: CameraConfig {
                eye: Vec3::new(0.0, 50.0, 80.0),
                ..CameraConfig::default()
            },
            ..GameConfig::default()
        };
        let ctx = EngineContext::with_config(&config);
        assert_eq!(ctx.camera.viewport, Vec2::new(1280.0, 720.0));
        assert_eq!(ctx.camera.eye, Vec3::new(0.0, 50.0, 80.0));
        assert!(ctx.scene.is_empty());
        assert_eq!(ctx.lights.count(), 0);
    }

    #[test]
    fn clear_frame_data_empties_vectors() {
        let mut ctx = EngineContext::new();
        ctx.vectors.stroke_polygon(
            &[Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)],
            1.0,
            VectorColor::WHITE,
        );
        assert!(ctx.vectors.vertex_count() > 0);
        ctx.clear_frame_data();
        assert_eq!(ctx.vectors.vertex_count(), 0);
    }

    struct NoSliders;

    impl Game for NoSliders {
        fn init(&mut self, _ctx: &mut EngineContext) {}
        fn update(&mut self, _ctx: &mut EngineContext, _input: &InputQueue) {}
    }

    #[test]
    fn game_defaults() {
        let game = NoSliders;
        assert!(game.sliders().is_empty());
        assert_eq!(game.config().viewport_width, 800.0);
        assert_eq!(game.config().clear_color, Color::BLACK);
    }
}
