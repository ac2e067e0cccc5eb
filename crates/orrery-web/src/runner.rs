use orrery_engine::{
    build_line_buffer, build_sphere_buffer, EngineContext, FrameData, Game, GameConfig, InputEvent,
    InputQueue, SphereBuffer, SliderSpec,
};

/// Generic game runner that wires up the engine loop.
///
/// Owns the game, the engine context and the per-frame draw buffers.
/// The browser side (`app::launch`) holds it behind `Rc<RefCell<_>>` and
/// drives it from `requestAnimationFrame`; nothing here touches the DOM,
/// so the whole loop runs under native `cargo test`.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    sphere_buffer: SphereBuffer,
    config: GameConfig,
    initialized: bool,
    frame_count: u64,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self {
            ctx: EngineContext::with_config(&config),
            input: InputQueue::new(),
            sphere_buffer: SphereBuffer::with_capacity(config.max_spheres),
            game,
            config,
            initialized: false,
            frame_count: 0,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue. Seen by the game on the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame tick: update game, then rebuild the sphere and line buffers.
    pub fn tick(&mut self) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        self.game.update(&mut self.ctx, &self.input);

        // Drain input after update
        self.input.drain();

        build_sphere_buffer(
            self.ctx.scene.iter(),
            &self.ctx.camera,
            &self.ctx.lights,
            &mut self.sphere_buffer,
        );
        build_line_buffer(self.ctx.scene.iter(), &self.ctx.camera, &mut self.ctx.vectors);

        self.frame_count += 1;
    }

    /// Track a new viewport size. Degenerate sizes are ignored by the camera.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.ctx.camera.resize(width, height);
    }

    /// Draw data for the most recent tick.
    pub fn frame(&self) -> FrameData<'_> {
        FrameData {
            spheres: self.sphere_buffer.instances(),
            vector_vertices: self.ctx.vectors.vertices(),
            clear_color: self.config.clear_color,
            width: self.ctx.camera.viewport.x,
            height: self.ctx.camera.viewport.y,
        }
    }

    pub fn sliders(&self) -> Vec<SliderSpec> {
        self.game.sliders()
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }
}
