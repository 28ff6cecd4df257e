/// Perspective projection and screen-space mapping
use nalgebra::{Matrix4, Point3};

use crate::error::RenderError;

/// A validated perspective projection matrix (row-vector convention).
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    matrix: Matrix4<f32>,
}

impl Projection {
    /// Build a perspective matrix from the field of view in degrees, the
    /// viewport aspect ratio and the near/far clip distances.
    ///
    /// Rejects parameters that would make the matrix singular:
    /// `z_near <= 0`, `z_far <= z_near`, or a field of view outside
    /// (0, 180) degrees.
    pub fn perspective(
        fov_degrees: f32,
        aspect: f32,
        z_near: f32,
        z_far: f32,
    ) -> Result<Self, RenderError> {
        if !(fov_degrees > 0.0 && fov_degrees < 180.0) || z_near <= 0.0 || z_far <= z_near {
            return Err(RenderError::InvalidProjection {
                fov_degrees,
                z_near,
                z_far,
            });
        }

        let q = z_far / (z_far - z_near);
        let fov_tan = 1.0 / (fov_degrees * 0.5).to_radians().tan();
        #[rustfmt::skip]
        let matrix = Matrix4::new(
            aspect * fov_tan, 0.0,     0.0,          0.0,
            0.0,              fov_tan, 0.0,          0.0,
            0.0,              0.0,     q,            1.0,
            0.0,              0.0,     -z_near * q,  0.0,
        );
        Ok(Self { matrix })
    }

    pub fn matrix(&self) -> &Matrix4<f32> {
        &self.matrix
    }
}

/// Viewport extent in pixels (or character cells).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Map projected [-1, 1] x/y into pixel coordinates by shifting into
    /// [0, 2] and scaling by half the extent. z passes through untouched.
    pub fn to_screen(&self, p: &Point3<f32>) -> Point3<f32> {
        Point3::new(
            (p.x + 1.0) * 0.5 * self.width as f32,
            (p.y + 1.0) * 0.5 * self.height as f32,
            p.z,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform;

    #[test]
    fn test_rejects_degenerate_parameters() {
        assert!(Projection::perspective(90.0, 1.0, 0.1, 1000.0).is_ok());
        assert!(Projection::perspective(0.0, 1.0, 0.1, 1000.0).is_err());
        assert!(Projection::perspective(180.0, 1.0, 0.1, 1000.0).is_err());
        assert!(Projection::perspective(90.0, 1.0, 0.0, 1000.0).is_err());
        assert!(Projection::perspective(90.0, 1.0, -1.0, 1000.0).is_err());
        assert!(Projection::perspective(90.0, 1.0, 10.0, 10.0).is_err());
        assert!(Projection::perspective(90.0, 1.0, 10.0, 1.0).is_err());
    }

    #[test]
    fn test_clip_planes_map_to_unit_depth_range() {
        let proj = Projection::perspective(90.0, 1.0, 0.1, 1000.0).unwrap();
        let near = transform::apply(&Point3::new(0.0, 0.0, 0.1), proj.matrix());
        let far = transform::apply(&Point3::new(0.0, 0.0, 1000.0), proj.matrix());
        assert!(near.z.abs() < 1e-6);
        assert!((far.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_fov_90_leaves_axis_scale_at_one() {
        // tan(45 deg) == 1, so x/y only pick up the aspect factor.
        let proj = Projection::perspective(90.0, 1.0, 0.1, 1000.0).unwrap();
        let p = transform::apply(&Point3::new(1.0, 1.0, 2.0), proj.matrix());
        assert!((p.x - 0.5).abs() < 1e-6);
        assert!((p.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_screen_mapping_corners_and_center() {
        let vp = Viewport::new(800, 600);
        assert_eq!(
            vp.to_screen(&Point3::new(0.0, 0.0, 1.0)),
            Point3::new(400.0, 300.0, 1.0)
        );
        assert_eq!(
            vp.to_screen(&Point3::new(-1.0, -1.0, 1.0)),
            Point3::new(0.0, 0.0, 1.0)
        );
        assert_eq!(
            vp.to_screen(&Point3::new(1.0, 1.0, 1.0)),
            Point3::new(800.0, 600.0, 1.0)
        );
    }
}
