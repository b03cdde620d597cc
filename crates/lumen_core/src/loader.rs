//! JSON scene file loading.
//!
//! A scene file bundles the camera placement, the sphere list and optional
//! render settings:
//!
//! ```json
//! {
//!   "camera": { "position": [0, 0, 6], "forward": [0, 0, -1] },
//!   "spheres": [ { "position": [0, 0, 0], "radius": 1.0, "albedo": [1, 0, 1] } ],
//!   "render": { "bounces": 2 }
//! }
//! ```

use std::path::Path;

use lumen_math::{Camera, Vec3};
use serde::Deserialize;
use thiserror::Error;

use crate::scene::{Scene, Sphere};
use crate::settings::RenderSettings;

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid sphere {index}: {reason}")]
    InvalidSphere { index: usize, reason: String },

    #[error("Invalid camera: {0}")]
    InvalidCamera(String),

    #[error("Invalid render settings: {0}")]
    InvalidSettings(String),
}

/// Result type for loading operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Camera placement as written in a scene file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraSettings {
    pub position: Vec3,
    pub forward: Vec3,
    /// Vertical field of view in degrees
    pub vertical_fov: f32,
    pub near_clip: f32,
    pub far_clip: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 6.0),
            forward: Vec3::NEG_Z,
            vertical_fov: 45.0,
            near_clip: 0.1,
            far_clip: 100.0,
        }
    }
}

impl CameraSettings {
    /// Build a camera from these settings. Call `resize` before rendering.
    pub fn build(&self) -> Camera {
        Camera::new(self.vertical_fov, self.near_clip, self.far_clip)
            .with_position(self.position)
            .with_forward_direction(self.forward)
    }

    fn validate(&self) -> SceneResult<()> {
        if !self.position.is_finite() {
            return Err(SceneError::InvalidCamera(format!(
                "position {} is not finite",
                self.position
            )));
        }
        if self.forward.try_normalize().is_none() {
            return Err(SceneError::InvalidCamera(format!(
                "forward {} has no direction",
                self.forward
            )));
        }
        if !(self.vertical_fov > 0.0 && self.vertical_fov < 180.0) {
            return Err(SceneError::InvalidCamera(format!(
                "vertical fov {} must be within (0, 180) degrees",
                self.vertical_fov
            )));
        }
        if !(self.near_clip > 0.0 && self.far_clip > self.near_clip) {
            return Err(SceneError::InvalidCamera(format!(
                "clip range {}..{} is empty",
                self.near_clip, self.far_clip
            )));
        }
        Ok(())
    }
}

/// A parsed and validated scene file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneFile {
    #[serde(default)]
    pub camera: CameraSettings,
    pub spheres: Vec<Sphere>,
    #[serde(default)]
    pub render: RenderSettings,
}

impl SceneFile {
    /// Split into the scene, the configured camera and the render settings.
    pub fn into_parts(self) -> (Scene, Camera, RenderSettings) {
        let camera = self.camera.build();
        (Scene::from_spheres(self.spheres), camera, self.render)
    }

    fn validate(&self) -> SceneResult<()> {
        self.camera.validate()?;

        for (index, sphere) in self.spheres.iter().enumerate() {
            sphere
                .validate()
                .map_err(|reason| SceneError::InvalidSphere { index, reason })?;
        }

        self.render.validate().map_err(SceneError::InvalidSettings)
    }
}

/// Load a JSON scene file from disk.
pub fn load_scene_file<P: AsRef<Path>>(path: P) -> SceneResult<SceneFile> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)?;
    let file = parse_scene_file(&source)?;

    log::info!("Loaded {} spheres from {}", file.spheres.len(), path.display());

    Ok(file)
}

/// Parse and validate a scene file from a JSON string.
pub fn parse_scene_file(source: &str) -> SceneResult<SceneFile> {
    let file: SceneFile = serde_json::from_str(source)?;
    file.validate()?;

    if file.spheres.is_empty() {
        log::warn!("Scene file has no spheres; every pixel will be background");
    }

    Ok(file)
}
