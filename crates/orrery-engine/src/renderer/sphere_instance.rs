/// Per-instance draw data for one shaded sphere, already in screen space.
///
/// `lit_*` is the color on the side facing the light, `shade_*` the color on
/// the far side (ambient only). `light_dx/dy` is the unit screen-space
/// direction toward the light, zero for flat-shaded (emissive or unlit) spheres.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SphereInstance {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub depth: f32,
    pub lit_r: f32,
    pub lit_g: f32,
    pub lit_b: f32,
    pub shade_r: f32,
    pub shade_g: f32,
    pub shade_b: f32,
    pub light_dx: f32,
    pub light_dy: f32,
}

impl SphereInstance {
    /// Whether the sphere should be drawn with a single flat color.
    pub fn is_flat(&self) -> bool {
        self.light_dx == 0.0 && self.light_dy == 0.0
    }
}

/// Buffer of sphere instances, rebuilt every frame.
pub struct SphereBuffer {
    instances: Vec<SphereInstance>,
}

impl SphereBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: SphereInstance) {
        self.instances.push(instance);
    }

    /// Sort farthest-first so nearer spheres paint over farther ones.
    pub fn sort_back_to_front(&mut self) {
        self.instances
            .sort_by(|a, b| b.depth.partial_cmp(&a.depth).unwrap_or(std::cmp::Ordering::Equal));
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    pub fn instances(&self) -> &[SphereInstance] {
        &self.instances
    }
}

impl Default for SphereBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_when_no_light_direction() {
        assert!(SphereInstance::default().is_flat());
        let lit = SphereInstance { light_dx: 0.6, light_dy: -0.8, ..Default::default() };
        assert!(!lit.is_flat());
    }

    #[test]
    fn sphere_buffer_push_and_count() {
        let mut buf = SphereBuffer::new();
        buf.push(SphereInstance::default());
        buf.push(SphereInstance::default());
        assert_eq!(buf.instance_count(), 2);
        assert_eq!(buf.instances().len(), 2);
        buf.clear();
        assert_eq!(buf.instance_count(), 0);
    }

    #[test]
    fn sort_puts_farthest_first() {
        let mut buf = SphereBuffer::new();
        for depth in [50.0, 120.0, 80.0] {
            buf.push(SphereInstance { depth, ..Default::default() });
        }
        buf.sort_back_to_front();
        let depths: Vec<f32> = buf.instances().iter().map(|i| i.depth).collect();
        assert_eq!(depths, vec![120.0, 80.0, 50.0]);
    }
}
