//! Renderer trait for drawing backends.
//!
//! The engine produces screen-space buffers (shaded spheres and tessellated
//! lines) each frame. A backend only has to paint them; it never touches
//! scene entities or the camera.
//!
//! The browser backend is `Canvas2dRenderer` in `orrery-web`.

use super::sphere_instance::SphereInstance;
use crate::components::mesh::Color;
use crate::systems::vector::VectorVertex;

/// Renderer trait for drawing backends.
///
/// # Example Implementation
///
/// ```ignore
/// struct SvgRenderer {
///     out: String,
/// }
///
/// impl Renderer for SvgRenderer {
///     fn backend(&self) -> &'static str { "svg" }
///
///     fn draw(&mut self, frame: &FrameData) {
///         // Emit <circle> and <polygon> elements...
///     }
///
///     fn resize(&mut self, width: u32, height: u32) {
///         // Update the viewBox...
///     }
/// }
/// ```
pub trait Renderer {
    /// Backend identifier (e.g., "canvas2d", "webgl", "svg")
    fn backend(&self) -> &'static str;

    /// Draw a complete frame: clear, then lines, then spheres in buffer order.
    fn draw(&mut self, frame: &FrameData);

    /// Handle viewport resize. Called with the new size in pixels.
    fn resize(&mut self, width: u32, height: u32);
}

/// Complete frame data for rendering.
/// Aggregates all render data produced by engine systems.
pub struct FrameData<'a> {
    /// Shaded sphere instances, sorted back-to-front
    pub spheres: &'a [SphereInstance],
    /// Line vertices (triangle list, screen pixels)
    pub vector_vertices: &'a [VectorVertex],
    /// Background fill
    pub clear_color: Color,
    /// Viewport size in pixels
    pub width: f32,
    pub height: f32,
}

impl FrameData<'_> {
    /// Whether there is nothing to draw besides the background.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty() && self.vector_vertices.is_empty()
    }
}
