//! Ray-sphere intersection.

use lumen_core::Sphere;
use lumen_math::Ray;

/// Near root of the ray-sphere quadratic, if the ray's line meets the sphere.
///
/// Only `(-b - sqrt(d)) / 2a` is evaluated, so a ray starting inside the
/// sphere yields a negative root and the caller treats it as a miss. The
/// root may be negative or zero; callers filter on distance.
///
/// Degenerate rays (zero or non-finite direction) never intersect.
pub fn intersect_sphere(ray: &Ray, sphere: &Sphere) -> Option<f32> {
    // Solve in sphere-local space
    let origin = ray.origin - sphere.position;

    let a = ray.direction.dot(ray.direction);
    let b = 2.0 * origin.dot(ray.direction);
    let c = origin.dot(origin) - sphere.radius * sphere.radius;

    if a == 0.0 || !a.is_finite() {
        return None;
    }

    let discriminant = b * b - 4.0 * a * c;
    if !discriminant.is_finite() || discriminant < 0.0 {
        return None;
    }

    let t1 = (-b - discriminant.sqrt()) / (2.0 * a);
    t1.is_finite().then_some(t1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_math::Vec3;

    fn unit_sphere() -> Sphere {
        Sphere::new(Vec3::ZERO, 1.0, Vec3::ONE)
    }

    #[test]
    fn test_sphere_hit() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 3.0), Vec3::NEG_Z);
        let t = intersect_sphere(&ray, &unit_sphere()).unwrap();
        assert!((t - 2.0).abs() < 1e-6); // Front surface at z = 1
    }

    #[test]
    fn test_sphere_miss() {
        // Passes beside the sphere
        let ray = Ray::new(Vec3::new(2.0, 0.0, 3.0), Vec3::NEG_Z);
        assert!(intersect_sphere(&ray, &unit_sphere()).is_none());
    }

    #[test]
    fn test_sphere_behind_ray_gives_negative_root() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 3.0), Vec3::Z);
        let t = intersect_sphere(&ray, &unit_sphere()).unwrap();
        assert!(t < 0.0);
    }

    #[test]
    fn test_inside_sphere_reports_near_root_only() {
        // The far root (t = 1) is never returned
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let t = intersect_sphere(&ray, &unit_sphere()).unwrap();
        assert!((t + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_tangent_ray_touches() {
        let ray = Ray::new(Vec3::new(1.0, 0.0, 3.0), Vec3::NEG_Z);
        let t = intersect_sphere(&ray, &unit_sphere()).unwrap();
        assert!((t - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_unnormalized_direction() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 3.0), Vec3::new(0.0, 0.0, -2.0));
        let t = intersect_sphere(&ray, &unit_sphere()).unwrap();
        assert!((t - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_direction_never_hits() {
        let zero = Ray::new(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO);
        assert!(intersect_sphere(&zero, &unit_sphere()).is_none());

        let nan = Ray::new(Vec3::new(0.0, 0.0, 3.0), Vec3::new(f32::NAN, 0.0, -1.0));
        assert!(intersect_sphere(&nan, &unit_sphere()).is_none());

        let inf = Ray::new(Vec3::new(0.0, 0.0, 3.0), Vec3::new(0.0, 0.0, f32::NEG_INFINITY));
        assert!(intersect_sphere(&inf, &unit_sphere()).is_none());
    }
}
