/// Solar System: a lit sun, eight planets on circular orbits, one guide ring
/// per orbit and a speed slider per planet.

use glam::Vec3;
use orrery_engine::*;

use crate::bodies::Catalog;
use crate::orbit::{OrbitSystem, OrbitingBody};

// ── Slider event kinds ───────────────────────────────────────────────

/// Slider event: set the speed of planet `index` to `value`.
pub const SET_SPEED: u32 = 1;

const SPEED_MIN: f64 = 0.001;
const SPEED_MAX: f64 = 0.05;
const SPEED_STEP: f64 = 0.001;
const SPEED_DECIMALS: usize = 3;

// ── Guide rings ──────────────────────────────────────────────────────

const RING_SEGMENTS: usize = 100;
const RING_WIDTH: f32 = 1.0;
const RING_GRAY: u8 = 0x44;

// ── Lighting ─────────────────────────────────────────────────────────

const SUN_LIGHT_INTENSITY: f32 = 2.0;
const SUN_LIGHT_RANGE: f32 = 300.0;
const AMBIENT_LEVEL: f32 = 0.3;

// ── Scene builder ────────────────────────────────────────────────────

/// Spawn the sun, the planets and their guide rings, and set up the lights.
/// Returns the orbit records in catalog order, all at angle 0.
pub fn build_scene(ctx: &mut EngineContext, catalog: &Catalog) -> OrbitSystem {
    ctx.lights.set_ambient(Color::WHITE.scale(AMBIENT_LEVEL));
    ctx.lights.add(PointLight::new(
        Vec3::ZERO,
        Color::WHITE,
        SUN_LIGHT_INTENSITY,
        SUN_LIGHT_RANGE,
    ));

    let sun_id = ctx.next_id();
    ctx.scene.spawn(
        Entity::new(sun_id).with_tag("sun").with_mesh(
            MeshComponent::sphere(catalog.sun.radius, catalog.sun.color)
                .with_emissive(catalog.sun.color),
        ),
    );

    let ring_color = VectorColor::rgb8(RING_GRAY, RING_GRAY, RING_GRAY);
    let mut bodies = Vec::with_capacity(catalog.planets.len());
    for planet in &catalog.planets {
        let id = ctx.next_id();
        let body = OrbitingBody::new(planet.name.as_str(), id, planet.distance, planet.speed);
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag(planet.name.as_str())
                .with_pos(body.position().as_vec3())
                .with_mesh(MeshComponent::sphere(planet.radius, planet.color)),
        );

        let ring_id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(ring_id)
                .with_tag(format!("{} orbit", planet.name))
                .with_outline(LineLoopComponent::circle_xz(
                    body.distance() as f32,
                    RING_SEGMENTS,
                    ring_color,
                    RING_WIDTH,
                )),
        );

        bodies.push(body);
    }

    let orbits = OrbitSystem::new(bodies);
    log::info!("solar-system: spawned {} entities, {} orbits", ctx.scene.len(), orbits.len());
    orbits
}

// ── Game struct ──────────────────────────────────────────────────────

pub struct SolarSystem {
    catalog: Catalog,
    orbits: OrbitSystem,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::load(),
            orbits: OrbitSystem::default(),
        }
    }

    fn apply_input(&mut self, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::Slider { kind: SET_SPEED, index, value } => {
                    match self.orbits.get(index) {
                        Some(body) => {
                            log::debug!("solar-system: {} speed {value:.3}", body.name);
                            self.orbits.set_speed(index, value);
                        }
                        None => log::warn!("solar-system: no planet at slider index {index}"),
                    }
                }
                InputEvent::Slider { kind, .. } => {
                    log::warn!("solar-system: ignoring slider event kind {kind}");
                }
            }
        }
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        GameConfig {
            max_spheres: self.catalog.planets.len() + 1,
            camera: CameraConfig {
                fov_y_deg: 75.0,
                near: 0.1,
                far: 1000.0,
                eye: Vec3::new(0.0, 0.0, 100.0),
                target: Vec3::ZERO,
            },
            clear_color: Color::BLACK,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.orbits = build_scene(ctx, &self.catalog);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        self.apply_input(input);
        self.orbits.advance_frame(&mut ctx.scene);
    }

    fn sliders(&self) -> Vec<SliderSpec> {
        self.orbits
            .iter()
            .enumerate()
            .map(|(index, body)| SliderSpec {
                label: format!("{} Speed: ", body.name),
                min: SPEED_MIN,
                max: SPEED_MAX,
                step: SPEED_STEP,
                value: body.speed,
                decimals: SPEED_DECIMALS,
                kind: SET_SPEED,
                index,
            })
            .collect()
    }
}
