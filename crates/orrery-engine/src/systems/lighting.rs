//! Point + ambient lighting for shaded spheres.
//!
//! Lights are persistent: they stay until explicitly removed.
//! Each frame the sphere pass asks the light state how brightly each
//! sphere is lit and from which direction.

use glam::Vec3;

use crate::components::mesh::Color;

/// A point light with position, color, intensity and range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub pos: Vec3,
    pub color: Color,
    /// Light strength multiplier.
    pub intensity: f32,
    /// Distance at which the light's contribution reaches zero.
    /// Zero means unlimited range.
    pub range: f32,
}

impl PointLight {
    pub fn new(pos: Vec3, color: Color, intensity: f32, range: f32) -> Self {
        Self { pos, color, intensity, range }
    }

    /// Smooth windowed falloff: 1 at the light, 0 at `range`.
    pub fn attenuation(&self, distance: f32) -> f32 {
        if self.range <= 0.0 {
            return 1.0;
        }
        let ratio = (distance / self.range).clamp(0.0, 1.0);
        let window = 1.0 - ratio * ratio * ratio * ratio;
        window * window
    }
}

/// Light arriving at one point in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Irradiance {
    /// Summed point-light color on a surface facing the lights.
    pub diffuse: Color,
    /// Unit direction toward the dominant light, `None` when no light reaches the point
    /// or the point sits on the light itself.
    pub direction: Option<Vec3>,
}

/// Manages active lights and ambient color for the scene.
///
/// The ambient color defaults to (1.0, 1.0, 1.0), which produces unlit output
/// when no lights are present.
pub struct LightState {
    lights: Vec<PointLight>,
    ambient: Color,
}

impl LightState {
    pub fn new() -> Self {
        Self {
            lights: Vec::new(),
            ambient: Color::WHITE,
        }
    }

    /// Add a point light to the scene.
    pub fn add(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    /// Remove all lights.
    pub fn clear(&mut self) {
        self.lights.clear();
    }

    /// Get an iterator over active lights.
    pub fn iter(&self) -> impl Iterator<Item = &PointLight> {
        self.lights.iter()
    }

    /// Number of active lights.
    pub fn count(&self) -> usize {
        self.lights.len()
    }

    /// Set the ambient light color (default: white = no darkening).
    /// For a dark scene lit by point lights, use low values like (0.3, 0.3, 0.3).
    pub fn set_ambient(&mut self, color: Color) {
        self.ambient = color;
    }

    pub fn ambient(&self) -> Color {
        self.ambient
    }

    /// Evaluate all point lights at `point`.
    pub fn irradiance(&self, point: Vec3) -> Irradiance {
        let mut diffuse = Color::BLACK;
        let mut strongest = 0.0_f32;
        let mut direction = None;

        for light in &self.lights {
            let to_light = light.pos - point;
            let distance = to_light.length();
            let strength = light.intensity * light.attenuation(distance);
            if strength <= 0.0 {
                continue;
            }
            diffuse = diffuse + light.color.scale(strength);
            if strength > strongest {
                strongest = strength;
                direction = to_light.try_normalize();
            }
        }

        Irradiance { diffuse, direction }
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sun() -> PointLight {
        PointLight::new(Vec3::ZERO, Color::WHITE, 2.0, 300.0)
    }

    #[test]
    fn attenuation_ends_at_range() {
        let light = sun();
        assert_eq!(light.attenuation(0.0), 1.0);
        assert_eq!(light.attenuation(300.0), 0.0);
        assert_eq!(light.attenuation(500.0), 0.0);
        let mid = light.attenuation(150.0);
        assert!(mid > 0.0 && mid < 1.0);
        assert!(light.attenuation(20.0) > light.attenuation(65.0));
    }

    #[test]
    fn zero_range_never_fades() {
        let light = PointLight::new(Vec3::ZERO, Color::WHITE, 1.0, 0.0);
        assert_eq!(light.attenuation(1.0e6), 1.0);
    }

    #[test]
    fn light_state_add_and_clear() {
        let mut state = LightState::new();
        assert_eq!(state.count(), 0);
        state.add(sun());
        state.add(PointLight::new(Vec3::X, Color::WHITE, 1.0, 10.0));
        assert_eq!(state.count(), 2);
        state.clear();
        assert_eq!(state.count(), 0);
    }

    #[test]
    fn ambient_default_and_override() {
        let mut state = LightState::new();
        assert_eq!(state.ambient(), Color::WHITE);
        state.set_ambient(Color::WHITE.scale(0.3));
        assert_eq!(state.ambient(), Color::new(0.3, 0.3, 0.3));
    }

    #[test]
    fn irradiance_points_toward_light() {
        let mut state = LightState::new();
        state.add(sun());
        let lit = state.irradiance(Vec3::new(20.0, 0.0, 0.0));
        let dir = lit.direction.unwrap();
        assert!((dir - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-6);
        assert!(lit.diffuse.r > 1.0);
    }

    #[test]
    fn irradiance_outside_range_is_dark() {
        let mut state = LightState::new();
        state.add(sun());
        let dark = state.irradiance(Vec3::new(400.0, 0.0, 0.0));
        assert_eq!(dark.diffuse, Color::BLACK);
        assert!(dark.direction.is_none());
    }

    #[test]
    fn irradiance_at_light_has_no_direction() {
        let mut state = LightState::new();
        state.add(sun());
        let at_source = state.irradiance(Vec3::ZERO);
        assert!(at_source.direction.is_none());
        assert_eq!(at_source.diffuse, Color::new(2.0, 2.0, 2.0));
    }
}
