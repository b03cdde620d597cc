//! Render configuration.

use lumen_math::Vec3;
use serde::Deserialize;

/// Shading and bounce settings for a frame.
///
/// Defaults are the reference values: two bounces, 0.7 falloff, a white
/// directional light along (-1, -1, -1) and a black background.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    /// Number of trace/shade/reflect iterations per pixel
    pub bounces: u32,
    /// Multiplier applied to the contribution after every bounce
    pub attenuation: f32,
    /// Direction the light travels (normalized on use)
    pub light_direction: Vec3,
    /// Color added when a ray escapes the scene
    pub background: Vec3,
    /// Offset along the normal for bounce ray origins
    pub self_intersection_bias: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            bounces: 2,
            attenuation: 0.7,
            light_direction: Vec3::new(-1.0, -1.0, -1.0),
            background: Vec3::ZERO,
            self_intersection_bias: 1e-4,
        }
    }
}

impl RenderSettings {
    /// Unit light direction, or zero if the configured vector is degenerate.
    ///
    /// A zero light makes every Lambert term zero instead of NaN.
    pub fn normalized_light_direction(&self) -> Vec3 {
        self.light_direction.normalize_or_zero()
    }

    /// Check the settings describe a usable render, returning a reason if not.
    pub fn validate(&self) -> Result<(), String> {
        if self.bounces == 0 {
            return Err("bounces must be at least 1".to_string());
        }
        if !(self.attenuation.is_finite() && self.attenuation >= 0.0) {
            return Err(format!("attenuation {} must be finite and non-negative", self.attenuation));
        }
        if !self.light_direction.is_finite() {
            return Err(format!("light direction {} is not finite", self.light_direction));
        }
        if !self.background.is_finite() {
            return Err(format!("background {} is not finite", self.background));
        }
        if !(self.self_intersection_bias.is_finite() && self.self_intersection_bias >= 0.0) {
            return Err(format!(
                "self intersection bias {} must be finite and non-negative",
                self.self_intersection_bias
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_defaults() {
        let settings = RenderSettings::default();
        assert_eq!(settings.bounces, 2);
        assert_eq!(settings.attenuation, 0.7);
        assert_eq!(settings.background, Vec3::ZERO);
        assert_eq!(settings.self_intersection_bias, 1e-4);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_light_direction_is_normalized() {
        let settings = RenderSettings::default();
        let dir = settings.normalized_light_direction();
        let expected = -1.0 / 3.0_f32.sqrt();

        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!((dir.x - expected).abs() < 1e-6);
    }

    #[test]
    fn test_zero_light_direction() {
        let settings = RenderSettings {
            light_direction: Vec3::ZERO,
            ..Default::default()
        };
        assert_eq!(settings.normalized_light_direction(), Vec3::ZERO);
    }

    #[test]
    fn test_validate_rejects_zero_bounces() {
        let settings = RenderSettings {
            bounces: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings: RenderSettings = serde_json::from_str(r#"{ "bounces": 5 }"#).unwrap();
        assert_eq!(settings.bounces, 5);
        assert_eq!(settings.attenuation, 0.7);
    }
}
