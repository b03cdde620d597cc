//! Scene types for Lumen.
//!
//! A scene is a flat, ordered list of spheres. Order matters: the
//! intersector scans front to back and keeps the lowest index on ties.

use lumen_math::Vec3;
use serde::Deserialize;

/// A sphere primitive.
///
/// In scene files `position` and `radius` are required; `albedo` defaults
/// to white.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Sphere {
    /// Center in world space
    pub position: Vec3,

    /// Radius, must be positive
    pub radius: f32,

    /// Diffuse/albedo color (RGB, 0-1)
    #[serde(default = "default_albedo")]
    pub albedo: Vec3,
}

fn default_albedo() -> Vec3 {
    Vec3::ONE
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            radius: 0.5,
            albedo: default_albedo(),
        }
    }
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(position: Vec3, radius: f32, albedo: Vec3) -> Self {
        Self {
            position,
            radius,
            albedo,
        }
    }

    /// Check the sphere is renderable, returning a reason if not.
    pub fn validate(&self) -> Result<(), String> {
        if !self.position.is_finite() {
            return Err(format!("position {} is not finite", self.position));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(format!("radius {} must be positive", self.radius));
        }
        let in_range = |c: f32| (0.0..=1.0).contains(&c);
        if !self.albedo.to_array().into_iter().all(in_range) {
            return Err(format!("albedo {} is outside [0, 1]", self.albedo));
        }
        Ok(())
    }
}

/// An ordered collection of spheres.
///
/// Read-only while a frame renders; edit it between frames.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scene from a list of spheres, keeping their order.
    pub fn from_spheres(spheres: Vec<Sphere>) -> Self {
        Self { spheres }
    }

    /// Add a sphere to the scene and return its index.
    pub fn add_sphere(&mut self, sphere: Sphere) -> usize {
        let index = self.spheres.len();
        self.spheres.push(sphere);
        index
    }

    /// Get a sphere by index.
    pub fn sphere(&self, index: usize) -> Option<&Sphere> {
        self.spheres.get(index)
    }

    /// Get sphere count.
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }
}
