use glam::{Mat4, UVec2, Vec2, Vec3, Vec4};

/// Anything that can hand the renderer one primary ray per pixel.
///
/// Directions are indexed `x + y * width` and must already be unit length.
pub trait RaySource {
    /// World-space origin shared by every primary ray.
    fn position(&self) -> Vec3;

    /// One direction per pixel of the current viewport.
    fn ray_directions(&self) -> &[Vec3];
}

/// Perspective pinhole camera with cached per-pixel ray directions.
///
/// Row 0 of the direction grid is the bottom of the viewport.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    forward_direction: Vec3,

    /// Vertical field of view in degrees
    vertical_fov: f32,
    near_clip: f32,
    far_clip: f32,

    projection: Mat4,
    view: Mat4,
    inverse_projection: Mat4,
    inverse_view: Mat4,

    ray_directions: Vec<Vec3>,
    viewport_size: UVec2,
}

impl Camera {
    /// World up axis used to build the view matrix.
    pub const UP: Vec3 = Vec3::Y;

    /// Up axis used instead of `UP` when looking straight up or down.
    pub const FALLBACK_UP: Vec3 = Vec3::NEG_Z;

    /// Create a new camera
    pub fn new(vertical_fov: f32, near_clip: f32, far_clip: f32) -> Self {
        let mut camera = Self {
            position: Vec3::new(0.0, 0.0, 6.0),
            forward_direction: Vec3::NEG_Z,
            vertical_fov,
            near_clip,
            far_clip,
            projection: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
            inverse_projection: Mat4::IDENTITY,
            inverse_view: Mat4::IDENTITY,
            ray_directions: Vec::new(),
            viewport_size: UVec2::ZERO,
        };
        camera.recalculate_view();
        camera
    }

    /// Builder-style position override.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.set_position(position);
        self
    }

    /// Builder-style forward direction override.
    pub fn with_forward_direction(mut self, forward: Vec3) -> Self {
        self.set_forward_direction(forward);
        self
    }

    /// Update the viewport size (e.g., on window resize).
    ///
    /// Does nothing if the size is unchanged.
    pub fn resize(&mut self, width: u32, height: u32) {
        let size = UVec2::new(width, height);
        if size == self.viewport_size {
            return;
        }

        self.viewport_size = size;
        self.recalculate_projection();
        self.recalculate_ray_directions();
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.recalculate_view();
        self.recalculate_ray_directions();
    }

    /// Point the camera along `forward`. Zero-length vectors are ignored.
    pub fn set_forward_direction(&mut self, forward: Vec3) {
        let Some(forward) = forward.try_normalize() else {
            return;
        };
        self.forward_direction = forward;
        self.recalculate_view();
        self.recalculate_ray_directions();
    }

    /// Aim the camera at a world-space point.
    pub fn look_at(&mut self, target: Vec3) {
        self.set_forward_direction(target - self.position);
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn forward_direction(&self) -> Vec3 {
        self.forward_direction
    }

    pub fn vertical_fov(&self) -> f32 {
        self.vertical_fov
    }

    pub fn viewport_size(&self) -> UVec2 {
        self.viewport_size
    }

    /// Camera → clip space
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// World → camera space
    pub fn view(&self) -> Mat4 {
        self.view
    }

    pub fn inverse_projection(&self) -> Mat4 {
        self.inverse_projection
    }

    pub fn inverse_view(&self) -> Mat4 {
        self.inverse_view
    }

    pub fn ray_directions(&self) -> &[Vec3] {
        &self.ray_directions
    }

    fn recalculate_projection(&mut self) {
        if self.viewport_size.x == 0 || self.viewport_size.y == 0 {
            return;
        }

        let aspect = self.viewport_size.x as f32 / self.viewport_size.y as f32;
        self.projection = Mat4::perspective_rh(
            self.vertical_fov.to_radians(),
            aspect,
            self.near_clip,
            self.far_clip,
        );
        self.inverse_projection = self.projection.inverse();
    }

    /// Up axis for the view matrix; never parallel to the forward direction.
    fn up_direction(&self) -> Vec3 {
        if self.forward_direction.cross(Self::UP).length_squared() < 1e-12 {
            Self::FALLBACK_UP
        } else {
            Self::UP
        }
    }

    fn recalculate_view(&mut self) {
        self.view = Mat4::look_at_rh(
            self.position,
            self.position + self.forward_direction,
            self.up_direction(),
        );
        self.inverse_view = self.view.inverse();
    }

    fn recalculate_ray_directions(&mut self) {
        let width = self.viewport_size.x;
        let height = self.viewport_size.y;

        // Replace wholesale so the length always matches the viewport
        self.ray_directions = Vec::with_capacity(pixel_count(width, height));

        for y in 0..height {
            for x in 0..width {
                let coord = Vec2::new(x as f32 / width as f32, y as f32 / height as f32) * 2.0 - 1.0;

                let target = self.inverse_projection * Vec4::new(coord.x, coord.y, 1.0, 1.0);
                let local = (target.truncate() / target.w).normalize();
                let world = (self.inverse_view * local.extend(0.0)).truncate();

                self.ray_directions.push(world.normalize());
            }
        }
    }
}

/// Number of pixels in a `width` x `height` viewport, widened before multiplying.
fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(45.0, 0.1, 100.0)
    }
}

impl RaySource for Camera {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn ray_directions(&self) -> &[Vec3] {
        &self.ray_directions
    }
}
