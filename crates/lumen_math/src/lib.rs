// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod camera;
mod ray;
pub use camera::{Camera, RaySource};
pub use ray::{reflect, Ray};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_dot_and_normalize() {
        let v = Vec3::new(-1.0, -1.0, -1.0).normalize();
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert!((v.dot(Vec3::new(1.0, 1.0, 1.0).normalize()) + 1.0).abs() < 1e-6);
    }
}
