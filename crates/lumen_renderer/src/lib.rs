//! Lumen Renderer - brute-force CPU sphere ray tracing
//!
//! One primary ray per pixel, nearest-hit search over every sphere, Lambert
//! shading from a single directional light and a fixed number of mirror
//! bounces. Output is a buffer of packed RGBA8 pixels.

mod color;
mod final_image;
mod hittable;
mod renderer;
mod sphere;

pub use color::{convert_to_rgba, quantize_channel, unpack_rgba};
pub use final_image::FinalImage;
pub use hittable::{trace_ray, HitRecord};
pub use renderer::{ray_color, RenderError, RenderResult, Renderer};
pub use sphere::intersect_sphere;

/// Re-export scene and math types used in the renderer's API
pub use lumen_core::{RenderSettings, Scene, Sphere};
pub use lumen_math::{Camera, Ray, RaySource, Vec3, Vec4};
