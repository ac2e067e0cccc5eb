use glam::Vec3;

use crate::systems::vector::VectorColor;

/// A closed polyline in 3D, drawn as a thin unfilled loop.
///
/// Points are relative to the owning entity's position. The loop is
/// projected and re-tessellated every frame, so it follows camera changes.
#[derive(Debug, Clone)]
pub struct LineLoopComponent {
    pub points: Vec<Vec3>,
    pub color: VectorColor,
    /// Stroke width in screen pixels.
    pub width: f32,
}

impl LineLoopComponent {
    pub fn new(points: Vec<Vec3>, color: VectorColor, width: f32) -> Self {
        Self { points, color, width }
    }

    /// A circle of `radius` in the XZ plane, sampled at `segments` points.
    pub fn circle_xz(radius: f32, segments: usize, color: VectorColor, width: f32) -> Self {
        let points = (0..segments)
            .map(|i| {
                let t = (i as f32 / segments as f32) * std::f32::consts::TAU;
                Vec3::new(radius * t.cos(), 0.0, radius * t.sin())
            })
            .collect();
        Self::new(points, color, width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_points_lie_on_radius_in_plane() {
        let ring = LineLoopComponent::circle_xz(25.0, 100, VectorColor::GRAY, 1.0);
        assert_eq!(ring.points.len(), 100);
        for p in &ring.points {
            assert_eq!(p.y, 0.0);
            assert!((p.length() - 25.0).abs() < 1e-3);
        }
        assert!((ring.points[0] - Vec3::new(25.0, 0.0, 0.0)).length() < 1e-6);
    }
}
