//! Frame renderer.
//!
//! Casts one primary ray per pixel and follows it through a fixed number of
//! mirror bounces:
//! - Lambert shading from a single directional light, no shadow test
//! - Contribution falls off by a constant factor per bounce
//! - No anti-aliasing, no gamma correction

use std::time::{Duration, Instant};

use lumen_core::{RenderSettings, Scene};
use lumen_math::{reflect, Ray, RaySource, Vec3, Vec4};
use thiserror::Error;

use crate::color::convert_to_rgba;
use crate::final_image::FinalImage;
use crate::hittable::trace_ray;

/// Errors raised when a render call's preconditions are not met.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("No output image; call on_resize before render")]
    NotResized,

    #[error("Camera supplies {actual} ray directions but the image has {expected} pixels")]
    CameraMismatch { expected: usize, actual: usize },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Compute the linear color seen along a primary ray.
///
/// Runs at most `settings.bounces` iterations. A miss adds the background
/// and ends the loop; a hit adds the lit albedo and reflects the ray off
/// the surface, nudged along the normal so it does not re-hit the same
/// point. Alpha is always 1.
pub fn ray_color(ray: &Ray, scene: &Scene, settings: &RenderSettings) -> Vec4 {
    let light_direction = settings.normalized_light_direction();

    let mut ray = *ray;
    let mut color = Vec3::ZERO;
    let mut multiplier = 1.0;

    for _ in 0..settings.bounces {
        let payload = trace_ray(&ray, scene);

        if !payload.is_hit() {
            color += settings.background * multiplier;
            break;
        }

        // == cos(angle), back faces get nothing
        let light_intensity = payload.world_normal.dot(-light_direction).max(0.0);

        let sphere = &scene.spheres[payload.object_index];
        color += sphere.albedo * light_intensity * multiplier;

        multiplier *= settings.attenuation;

        ray = Ray::new(
            payload.world_position + payload.world_normal * settings.self_intersection_bias,
            reflect(ray.direction, payload.world_normal),
        );
    }

    color.extend(1.0)
}

/// Owns the pixel buffer and the published image.
pub struct Renderer {
    final_image: Option<FinalImage>,
    image_data: Vec<u32>,
    settings: RenderSettings,
    last_render_time: Option<Duration>,
}

impl Renderer {
    /// Create a renderer with no image. Call `on_resize` before rendering.
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            final_image: None,
            image_data: Vec::new(),
            settings,
            last_render_time: None,
        }
    }

    /// Match the output to the viewport size.
    ///
    /// Does nothing if the size is unchanged. Otherwise both the image and
    /// the pixel buffer are replaced with fresh zeroed allocations.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        if let Some(image) = &self.final_image {
            if image.width() == width && image.height() == height {
                return;
            }
        }

        log::debug!("Resizing render target to {}x{}", width, height);

        self.final_image = Some(FinalImage::new(width, height));
        self.image_data = vec![0; width as usize * height as usize];
    }

    /// Render one frame of `scene` as seen by `camera`.
    ///
    /// Pixels are visited row by row and the image is published once, after
    /// every pixel is done. The camera must supply exactly one direction per
    /// pixel, indexed `x + y * width`.
    pub fn render(&mut self, camera: &dyn RaySource, scene: &Scene) -> RenderResult<()> {
        let start = Instant::now();

        let Some(image) = self.final_image.as_mut() else {
            log::warn!("Render requested before the first resize");
            return Err(RenderError::NotResized);
        };

        let ray_directions = camera.ray_directions();
        if ray_directions.len() != self.image_data.len() {
            log::warn!(
                "Camera has {} rays for a {}x{} image",
                ray_directions.len(),
                image.width(),
                image.height()
            );
            return Err(RenderError::CameraMismatch {
                expected: self.image_data.len(),
                actual: ray_directions.len(),
            });
        }

        let width = image.width() as usize;
        let height = image.height() as usize;
        let origin = camera.position();

        for y in 0..height {
            for x in 0..width {
                let index = x + y * width;
                let ray = Ray::new(origin, ray_directions[index]);

                let color = ray_color(&ray, scene, &self.settings).clamp(Vec4::ZERO, Vec4::ONE);
                self.image_data[index] = convert_to_rgba(color);
            }
        }

        image.set_data(&self.image_data);

        let elapsed = start.elapsed();
        self.last_render_time = Some(elapsed);
        log::debug!(
            "Rendered {}x{} ({} spheres) in {:.3}ms",
            width,
            height,
            scene.len(),
            elapsed.as_secs_f64() * 1000.0
        );

        Ok(())
    }

    /// The most recently published frame.
    pub fn final_image(&self) -> Option<&FinalImage> {
        self.final_image.as_ref()
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Adjust settings between frames.
    pub fn settings_mut(&mut self) -> &mut RenderSettings {
        &mut self.settings
    }

    /// Wall time of the last successful render.
    pub fn last_render_time(&self) -> Option<Duration> {
        self.last_render_time
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderSettings::default())
    }
}
