use glam::{Mat4, Vec2, Vec3};

/// Perspective camera parameters supplied through `GameConfig`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    pub near: f32,
    pub far: f32,
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y_deg: 75.0,
            near: 0.1,
            far: 1000.0,
            eye: Vec3::new(0.0, 0.0, 100.0),
            target: Vec3::ZERO,
        }
    }
}

/// Projection result from 3D world space to 2D screen pixels.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    /// Screen position in pixels, origin top-left, Y down.
    pub pos: Vec2,
    /// Distance along the view direction (larger = farther).
    pub depth: f32,
    /// Pixels per world unit at this depth.
    pub scale: f32,
}

/// Perspective camera for 3D scenes.
/// Produces view/projection matrices and projects world points to pixels.
#[derive(Debug, Clone)]
pub struct Camera3D {
    pub fov_y_deg: f32,
    /// Viewport width / height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub eye: Vec3,
    pub target: Vec3,
    /// Viewport size in pixels.
    pub viewport: Vec2,
}

impl Camera3D {
    pub fn new(config: &CameraConfig, viewport_width: f32, viewport_height: f32) -> Self {
        let mut camera = Self {
            fov_y_deg: config.fov_y_deg,
            aspect: 1.0,
            near: config.near,
            far: config.far,
            eye: config.eye,
            target: config.target,
            viewport: Vec2::ONE,
        };
        camera.resize(viewport_width, viewport_height);
        camera
    }

    /// Track a new viewport size: aspect becomes `width / height`.
    /// Degenerate sizes (e.g. a minimized window) are ignored.
    pub fn resize(&mut self, width: f32, height: f32) {
        if !(width > 0.0 && height > 0.0) {
            log::debug!("camera: ignoring degenerate viewport {width}x{height}");
            return;
        }
        self.viewport = Vec2::new(width, height);
        self.aspect = width / height;
    }

    /// Right-handed view matrix, Y up.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    /// Right-handed perspective projection, depth in [0, 1].
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Focal length in pixels for the current viewport height.
    pub fn focal_px(&self) -> f32 {
        (self.viewport.y / 2.0) / (self.fov_y_deg.to_radians() / 2.0).tan()
    }

    /// Project a world position to screen pixels.
    /// Returns `None` for points at or behind the near plane.
    pub fn project(&self, world: Vec3) -> Option<Projection> {
        let clip = self.view_projection() * world.extend(1.0);
        if clip.w < self.near {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        let pos = Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport.x,
            (1.0 - ndc.y) * 0.5 * self.viewport.y,
        );
        Some(Projection {
            pos,
            depth: clip.w,
            scale: self.focal_px() / clip.w,
        })
    }
}
