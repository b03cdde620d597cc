use crate::Vec3;

/// A ray in 3D space with an origin and a direction.
///
/// Primary rays come from the camera with unit-length directions; bounce
/// rays keep that property because reflection preserves length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            direction: Vec3::NEG_Z,
        }
    }
}

/// Mirror `direction` about the surface normal `normal`.
///
/// `d - 2 * dot(d, n) * n`; `normal` is expected to be unit length.
#[inline]
pub fn reflect(direction: Vec3, normal: Vec3) -> Vec3 {
    direction - 2.0 * direction.dot(normal) * normal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let direction = Vec3::new(0.0, 1.0, 0.0);
        let ray = Ray::new(origin, direction);

        assert_eq!(ray.origin, origin);
        assert_eq!(ray.direction, direction);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert_eq!(ray.at(1.0), Vec3::X);
        assert_eq!(ray.at(2.0), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_reflect_head_on() {
        // Straight into a surface facing +Z bounces straight back
        let reflected = reflect(Vec3::NEG_Z, Vec3::Z);
        assert_eq!(reflected, Vec3::Z);
    }

    #[test]
    fn test_reflect_grazing_keeps_tangent() {
        let d = Vec3::new(1.0, -1.0, 0.0).normalize();
        let reflected = reflect(d, Vec3::Y);

        assert!((reflected - Vec3::new(1.0, 1.0, 0.0).normalize()).length() < 1e-6);
        assert!((reflected.length() - 1.0).abs() < 1e-6);
    }
}
