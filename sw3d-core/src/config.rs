/// Engine configuration: every constant the pipeline depends on
use nalgebra::{Point3, Vector3};

use crate::backend::RenderMode;
use crate::error::RenderError;
use crate::projection::{Projection, Viewport};
use crate::transform::Axis;

/// Caller-supplied rendering constants.
///
/// `Default` reproduces the classic spinning-cube demo: an 800x800 viewport,
/// 90 degree field of view, the camera at the origin looking down +z, light
/// shining along -z, and the scene pushed 3 units away from the camera.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub width: u32,
    pub height: u32,
    pub fov_degrees: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub camera: Point3<f32>,
    /// Direction the light shines from; normalized during validation.
    pub light_direction: Vector3<f32>,
    /// Radians added to the spin angle after every tick. Per-tick, not
    /// per-second: perceived speed follows the achieved frame rate.
    pub rotation_step: f32,
    /// Offset pushing the scene away from the camera so it clears the near
    /// plane.
    pub scene_offset: Vector3<f32>,
    /// Rotations applied to every vertex, in order, at the current angle.
    pub spin_axes: Vec<Axis>,
    /// Which primitive the driver emits per visible triangle.
    pub render_mode: RenderMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            fov_degrees: 90.0,
            z_near: 0.1,
            z_far: 1000.0,
            camera: Point3::origin(),
            light_direction: Vector3::new(0.0, 0.0, -1.0),
            rotation_step: 0.1,
            scene_offset: Vector3::new(0.0, 0.0, 3.0),
            spin_axes: vec![Axis::X, Axis::Z],
            render_mode: RenderMode::Filled,
        }
    }
}

impl EngineConfig {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// Build the projection for this configuration, rejecting degenerate
    /// clip planes or field of view.
    pub fn projection(&self) -> Result<Projection, RenderError> {
        Projection::perspective(
            self.fov_degrees,
            self.viewport().aspect(),
            self.z_near,
            self.z_far,
        )
    }

    /// The light direction as a unit vector.
    pub fn normalized_light(&self) -> Result<Vector3<f32>, RenderError> {
        self.light_direction
            .try_normalize(0.0)
            .ok_or(RenderError::ZeroLengthVector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = EngineConfig::default();
        assert!(config.projection().is_ok());
        assert_eq!(
            config.normalized_light().unwrap(),
            Vector3::new(0.0, 0.0, -1.0)
        );
    }

    #[test]
    fn test_zero_light_direction_is_rejected() {
        let config = EngineConfig {
            light_direction: Vector3::zeros(),
            ..Default::default()
        };
        assert_eq!(
            config.normalized_light(),
            Err(RenderError::ZeroLengthVector)
        );
    }

    #[test]
    fn test_bad_clip_planes_are_rejected() {
        let config = EngineConfig {
            z_near: 5.0,
            z_far: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.projection(),
            Err(RenderError::InvalidProjection { .. })
        ));
    }
}
