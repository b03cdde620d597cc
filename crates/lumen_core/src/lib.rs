//! Lumen Core - Scene description for the Lumen ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Sphere`
//! - **Render settings**: `RenderSettings` with the reference shading constants
//! - **Scene files**: JSON scene loading with validation
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::load_scene_file;
//!
//! let file = load_scene_file("scene.json")?;
//! println!("Loaded {} spheres", file.spheres.len());
//! ```

pub mod loader;
pub mod scene;
pub mod settings;

// Re-export commonly used types
pub use loader::{load_scene_file, parse_scene_file, CameraSettings, SceneError, SceneFile, SceneResult};
pub use scene::{Scene, Sphere};
pub use settings::RenderSettings;
