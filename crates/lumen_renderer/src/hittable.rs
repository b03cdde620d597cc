//! Nearest-hit scene query and the HitRecord it produces.

use lumen_core::{Scene, Sphere};
use lumen_math::{Ray, Vec3};

use crate::sphere::intersect_sphere;

/// Record of a ray-scene intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Distance along the ray; negative means the ray missed
    pub hit_distance: f32,
    /// Point of intersection
    pub world_position: Vec3,
    /// Unit surface normal, pointing away from the sphere center
    pub world_normal: Vec3,
    /// Index of the sphere in the scene (meaningless on a miss)
    pub object_index: usize,
}

impl HitRecord {
    /// Distance stored in a miss record.
    pub const MISS_DISTANCE: f32 = -1.0;

    /// The miss sentinel.
    pub fn miss() -> Self {
        Self {
            hit_distance: Self::MISS_DISTANCE,
            world_position: Vec3::ZERO,
            world_normal: Vec3::ZERO,
            object_index: 0,
        }
    }

    #[inline]
    pub fn is_hit(&self) -> bool {
        self.hit_distance >= 0.0
    }
}

/// Find the nearest sphere in front of the ray.
///
/// Scans every sphere in index order. A candidate needs a strictly positive
/// distance that is strictly smaller than the best so far, so equal
/// distances keep the lower index.
pub fn trace_ray(ray: &Ray, scene: &Scene) -> HitRecord {
    let mut closest_index = None;
    let mut hit_distance = f32::MAX;

    for (index, sphere) in scene.spheres.iter().enumerate() {
        let Some(t1) = intersect_sphere(ray, sphere) else {
            continue;
        };

        if t1 > 0.0 && t1 < hit_distance {
            hit_distance = t1;
            closest_index = Some(index);
        }
    }

    match closest_index {
        Some(index) => closest_hit(ray, &scene.spheres[index], index, hit_distance),
        None => HitRecord::miss(),
    }
}

/// Complete the record for a confirmed hit.
fn closest_hit(ray: &Ray, sphere: &Sphere, object_index: usize, hit_distance: f32) -> HitRecord {
    let origin = ray.origin - sphere.position;
    let local_position = origin + ray.direction * hit_distance;

    HitRecord {
        hit_distance,
        world_position: local_position + sphere.position,
        world_normal: local_position.normalize(),
        object_index,
    }
}
