/// Circular orbit bookkeeping: each body's phase advances by a fixed step
/// every frame and its position is recomputed on the XZ plane.
///
/// Uses f64 for angle, speed and distance. Only convert to f32 when writing
/// the entity position.

use glam::DVec3;
use orrery_engine::{EntityId, Scene};

/// Planar position on a circle of radius `distance` at phase `angle`.
pub fn position(angle: f64, distance: f64) -> DVec3 {
    DVec3::new(angle.cos() * distance, 0.0, angle.sin() * distance)
}

/// One orbiting body and the entity that draws it.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitingBody {
    pub name: String,
    pub entity: EntityId,
    /// Orbital radius. Fixed at construction.
    distance: f64,
    /// Accumulated phase in radians. Not wrapped.
    pub angle: f64,
    /// Radians added to `angle` every frame.
    pub speed: f64,
}

impl OrbitingBody {
    pub fn new(name: impl Into<String>, entity: EntityId, distance: f64, speed: f64) -> Self {
        Self {
            name: name.into(),
            entity,
            distance,
            angle: 0.0,
            speed,
        }
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn position(&self) -> DVec3 {
        position(self.angle, self.distance)
    }
}

/// Ordered collection of orbiting bodies, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct OrbitSystem {
    bodies: Vec<OrbitingBody>,
}

impl OrbitSystem {
    pub fn new(bodies: Vec<OrbitingBody>) -> Self {
        Self { bodies }
    }

    /// Advance every body by its speed and write the new positions into `scene`.
    pub fn advance_frame(&mut self, scene: &mut Scene) {
        for body in &mut self.bodies {
            body.angle += body.speed;
            if let Some(entity) = scene.get_mut(body.entity) {
                entity.pos = body.position().as_vec3();
            }
        }
    }

    /// Set the speed of the body at `index`. Returns false for an unknown index.
    pub fn set_speed(&mut self, index: usize, speed: f64) -> bool {
        match self.bodies.get_mut(index) {
            Some(body) => {
                body.speed = speed;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&OrbitingBody> {
        self.bodies.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrbitingBody> {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use orrery_engine::Entity;

    /// Scene with one entity per (distance, speed) pair, placed at (distance, 0, 0).
    fn setup(orbits: &[(&str, f64, f64)]) -> (Scene, OrbitSystem) {
        let mut scene = Scene::new();
        let mut bodies = Vec::new();
        for (i, &(name, distance, speed)) in orbits.iter().enumerate() {
            let id = EntityId(i as u32 + 1);
            scene.spawn(Entity::new(id).with_pos(Vec3::new(distance as f32, 0.0, 0.0)));
            bodies.push(OrbitingBody::new(name, id, distance, speed));
        }
        (scene, OrbitSystem::new(bodies))
    }

    fn inner_four() -> (Scene, OrbitSystem) {
        setup(&[
            ("Mercury", 10.0, 0.02),
            ("Venus", 15.0, 0.015),
            ("Earth", 20.0, 0.01),
            ("Mars", 25.0, 0.008),
        ])
    }

    #[test]
    fn position_on_circle() {
        assert!((position(0.0, 20.0) - DVec3::new(20.0, 0.0, 0.0)).length() < 1e-12);
        let quarter = position(std::f64::consts::FRAC_PI_2, 10.0);
        assert!(quarter.x.abs() < 1e-12);
        assert!((quarter.z - 10.0).abs() < 1e-12);
        assert!((position(2.7, 35.0).length() - 35.0).abs() < 1e-12);
    }

    #[test]
    fn advance_adds_speed_and_moves_entity() {
        let (mut scene, mut orbits) = inner_four();
        let before: Vec<f64> = orbits.iter().map(|b| b.angle).collect();

        orbits.advance_frame(&mut scene);

        for (body, old) in orbits.iter().zip(before) {
            assert_eq!(body.angle, old + body.speed);
            let expected = position(body.angle, body.distance()).as_vec3();
            assert_eq!(scene.get(body.entity).unwrap().pos, expected);
        }
    }

    #[test]
    fn earth_after_100_frames() {
        let (mut scene, mut orbits) = inner_four();
        for _ in 0..100 {
            orbits.advance_frame(&mut scene);
        }

        let earth = orbits.get(2).unwrap();
        assert!((earth.angle - 1.0).abs() < 1e-9);
        let pos = scene.get(earth.entity).unwrap().pos;
        assert!((pos.x - 10.806).abs() < 1e-3, "x = {}", pos.x);
        assert_eq!(pos.y, 0.0);
        assert!((pos.z - 16.829).abs() < 1e-3, "z = {}", pos.z);
    }

    #[test]
    fn speed_change_applies_to_one_body_only() {
        let (mut scene, mut orbits) = inner_four();
        for _ in 0..10 {
            orbits.advance_frame(&mut scene);
        }
        let before: Vec<OrbitingBody> = orbits.iter().cloned().collect();

        assert!(orbits.set_speed(3, 0.03));
        // Setting a speed alone changes nothing else
        let mars = orbits.get(3).unwrap();
        assert_eq!(mars.angle, before[3].angle);
        assert_eq!(mars.distance(), before[3].distance());

        orbits.advance_frame(&mut scene);
        for (i, (body, old)) in orbits.iter().zip(&before).enumerate() {
            let step = if i == 3 { 0.03 } else { old.speed };
            assert_eq!(body.angle, old.angle + step, "{}", body.name);
            assert_eq!(body.distance(), old.distance());
        }
        assert_eq!(orbits.get(2).unwrap().speed, 0.01);
    }

    #[test]
    fn unknown_index_is_rejected() {
        let (_, mut orbits) = inner_four();
        assert!(!orbits.set_speed(4, 0.02));
        assert!(!orbits.set_speed(usize::MAX, 0.02));
        assert!(orbits.iter().map(|b| b.speed).eq([0.02, 0.015, 0.01, 0.008]));
    }

    #[test]
    fn distance_never_changes() {
        let (mut scene, mut orbits) = inner_four();
        orbits.set_speed(0, 0.05);
        for _ in 0..500 {
            orbits.advance_frame(&mut scene);
        }
        for body in orbits.iter() {
            let pos = scene.get(body.entity).unwrap().pos;
            assert!((pos.length() as f64 - body.distance()).abs() < 1e-4);
        }
        // Angle grows without wrapping
        assert!(orbits.get(0).unwrap().angle > std::f64::consts::TAU);
    }

    #[test]
    fn missing_entity_still_advances_angle() {
        let mut scene = Scene::new();
        let mut orbits = OrbitSystem::new(vec![OrbitingBody::new("Ghost", EntityId(9), 5.0, 0.01)]);
        orbits.advance_frame(&mut scene);
        assert_eq!(orbits.get(0).unwrap().angle, 0.01);
        assert!(scene.is_empty());
    }
}
