use glam::Vec2;

use crate::components::entity::Entity;
use crate::components::mesh::{MeshComponent, Color};
use crate::renderer::camera::Camera3D;
use crate::renderer::sphere_instance::{SphereBuffer, SphereInstance};
use crate::systems::lighting::LightState;

/// Screen-space light offsets shorter than this are treated as head-on.
const MIN_LIGHT_OFFSET_PX: f32 = 1e-3;

/// Build the sphere instance buffer from entities with mesh components.
///
/// Each sphere is projected through the camera, sized by perspective,
/// shaded by the scene lights and sorted back-to-front.
/// Spheres behind the camera are skipped.
pub fn build_sphere_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    camera: &Camera3D,
    lights: &LightState,
    buffer: &mut SphereBuffer,
) {
    buffer.clear();
    for entity in entities {
        if !entity.active {
            continue;
        }
        let mesh = match &entity.mesh {
            Some(m) => m,
            None => continue,
        };
        let proj = match camera.project(entity.pos) {
            Some(p) => p,
            None => continue,
        };

        let (lit, shade, light_dir) = shade_sphere(entity, mesh, camera, lights);

        buffer.push(SphereInstance {
            x: proj.pos.x,
            y: proj.pos.y,
            radius: mesh.radius() * proj.scale,
            depth: proj.depth,
            lit_r: lit.r,
            lit_g: lit.g,
            lit_b: lit.b,
            shade_r: shade.r,
            shade_g: shade.g,
            shade_b: shade.b,
            light_dx: light_dir.x,
            light_dy: light_dir.y,
        });
    }
    buffer.sort_back_to_front();
}

/// Returns (lit color, shadow color, screen-space direction toward the light).
fn shade_sphere(
    entity: &Entity,
    mesh: &MeshComponent,
    camera: &Camera3D,
    lights: &LightState,
) -> (Color, Color, Vec2) {
    let ambient = mesh.color.modulate(lights.ambient()) + mesh.emissive;
    let shade = ambient.saturate();

    if mesh.is_emissive() {
        return (shade, shade, Vec2::ZERO);
    }

    let irradiance = lights.irradiance(entity.pos);
    let lit = (ambient + mesh.color.modulate(irradiance.diffuse)).saturate();

    let dir = match irradiance.direction {
        Some(d) => d,
        None => return (shade, shade, Vec2::ZERO),
    };

    let center = camera.project(entity.pos);
    let toward = camera.project(entity.pos + dir * mesh.radius());
    let offset = match (center, toward) {
        (Some(c), Some(t)) => t.pos - c.pos,
        _ => Vec2::ZERO,
    };

    if offset.length() < MIN_LIGHT_OFFSET_PX {
        // Light is along the view axis: we see either the lit or the dark face.
        let facing_camera = dir.dot(camera.eye - entity.pos) > 0.0;
        let flat = if facing_camera { lit } else { shade };
        return (flat, flat, Vec2::ZERO);
    }

    (lit, shade, offset.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::renderer::camera::CameraConfig;
    use crate::systems::lighting::PointLight;
    use glam::Vec3;

    fn camera() -> Camera3D {
        Camera3D::new(&CameraConfig::default(), 800.0, 600.0)
    }

    fn sun_lights() -> LightState {
        let mut lights = LightState::new();
        lights.add(PointLight::new(Vec3::ZERO, Color::WHITE, 2.0, 300.0));
        lights.set_ambient(Color::WHITE.scale(0.3));
        lights
    }

    fn planet(id: u32, pos: Vec3) -> Entity {
        Entity::new(EntityId(id))
            .with_pos(pos)
            .with_mesh(MeshComponent::sphere(2.0, Color::new(0.2, 0.6, 1.0)))
    }

    #[test]
    fn projects_position_and_radius() {
        let cam = camera();
        let entities = vec![planet(1, Vec3::ZERO)];
        let mut buffer = SphereBuffer::new();
        build_sphere_buffer(entities.iter(), &cam, &LightState::new(), &mut buffer);

        assert_eq!(buffer.instance_count(), 1);
        let s = buffer.instances()[0];
        assert!((s.x - 400.0).abs() < 1e-3);
        assert!((s.y - 300.0).abs() < 1e-3);
        assert!((s.radius - 2.0 * cam.focal_px() / 100.0).abs() < 1e-3);
        assert!((s.depth - 100.0).abs() < 1e-3);
    }

    #[test]
    fn skips_inactive_meshless_and_behind_camera() {
        let e1 = Entity::new(EntityId(1)); // no mesh
        let mut e2 = planet(2, Vec3::ZERO);
        e2.active = false;
        let e3 = planet(3, Vec3::new(0.0, 0.0, 200.0)); // behind the eye
        let e4 = planet(4, Vec3::new(10.0, 0.0, 0.0));

        let entities = vec![e1, e2, e3, e4];
        let mut buffer = SphereBuffer::new();
        build_sphere_buffer(entities.iter(), &camera(), &sun_lights(), &mut buffer);
        assert_eq!(buffer.instance_count(), 1);
    }

    #[test]
    fn sorted_back_to_front() {
        let entities = vec![
            planet(1, Vec3::new(0.0, 0.0, 40.0)),
            planet(2, Vec3::new(0.0, 0.0, -40.0)),
        ];
        let mut buffer = SphereBuffer::new();
        build_sphere_buffer(entities.iter(), &camera(), &sun_lights(), &mut buffer);

        let inst = buffer.instances();
        assert!(inst[0].depth > inst[1].depth);
        assert!(inst[0].radius < inst[1].radius);
    }

    #[test]
    fn emissive_sphere_is_flat() {
        let sun = Entity::new(EntityId(1)).with_mesh(
            MeshComponent::sphere(5.0, Color::WHITE).with_emissive(Color::new(1.0, 1.0, 0.0)),
        );
        let entities = vec![sun];
        let mut buffer = SphereBuffer::new();
        build_sphere_buffer(entities.iter(), &camera(), &sun_lights(), &mut buffer);

        let inst = buffer.instances()[0];
        assert!(inst.is_flat());
        assert_eq!((inst.lit_r, inst.lit_g, inst.lit_b), (1.0, 1.0, 0.3));
        assert_eq!(inst.lit_r, inst.shade_r);
    }

    #[test]
    fn lit_side_faces_the_light() {
        let entities = vec![planet(1, Vec3::new(20.0, 0.0, 0.0))];
        let mut buffer = SphereBuffer::new();
        build_sphere_buffer(entities.iter(), &camera(), &sun_lights(), &mut buffer);

        let inst = buffer.instances()[0];
        assert!(inst.light_dx < -0.99);
        assert!(inst.light_dy.abs() < 1e-3);
        assert!(inst.lit_b >= inst.shade_b);
        // Shadow side is ambient only: base color x 0.3
        assert!((inst.shade_r - 0.06).abs() < 1e-6);
        assert!((inst.shade_g - 0.18).abs() < 1e-6);
        assert!((inst.shade_b - 0.3).abs() < 1e-6);
    }

    #[test]
    fn unlit_sphere_uses_shadow_color() {
        let mut lights = LightState::new();
        lights.set_ambient(Color::WHITE.scale(0.3));
        let entities = vec![planet(1, Vec3::new(20.0, 0.0, 0.0))];
        let mut buffer = SphereBuffer::new();
        build_sphere_buffer(entities.iter(), &camera(), &lights, &mut buffer);

        let inst = buffer.instances()[0];
        assert!(inst.is_flat());
        assert_eq!(inst.lit_g, inst.shade_g);
    }
}
