/// Row-vector homogeneous transforms and the matrices that build them
use nalgebra::{Matrix4, Point3, Vector3};

/// Axes a per-frame spin can rotate about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Apply `m` to `p` under the row-vector convention: `p` is extended to
/// `(x, y, z, 1)` and multiplied as `p * m`. When the resulting w component
/// is nonzero, x/y/z are divided by it (perspective divide); when w is
/// exactly zero the divide is skipped and the affine part passes through
/// unchanged. Affine transforms produce w == 1, so the divide is a no-op for
/// them; w == 0 only occurs for points on the camera plane of a projective
/// transform and is not an error.
pub fn apply(p: &Point3<f32>, m: &Matrix4<f32>) -> Point3<f32> {
    let x = p.x * m[(0, 0)] + p.y * m[(1, 0)] + p.z * m[(2, 0)] + m[(3, 0)];
    let y = p.x * m[(0, 1)] + p.y * m[(1, 1)] + p.z * m[(2, 1)] + m[(3, 1)];
    let z = p.x * m[(0, 2)] + p.y * m[(1, 2)] + p.z * m[(2, 2)] + m[(3, 2)];
    let w = p.x * m[(0, 3)] + p.y * m[(1, 3)] + p.z * m[(2, 3)] + m[(3, 3)];

    if w != 0.0 {
        Point3::new(x / w, y / w, z / w)
    } else {
        Point3::new(x, y, z)
    }
}

/// Transform builders for the row-vector convention.
pub struct Transform;

impl Transform {
    /// Rotation about the X axis, angle in radians.
    pub fn rotation_x(theta: f32) -> Matrix4<f32> {
        let (sin, cos) = theta.sin_cos();
        #[rustfmt::skip]
        let m = Matrix4::new(
            1.0, 0.0,  0.0, 0.0,
            0.0, cos, -sin, 0.0,
            0.0, sin,  cos, 0.0,
            0.0, 0.0,  0.0, 1.0,
        );
        m
    }

    /// Rotation about the Y axis, angle in radians.
    pub fn rotation_y(theta: f32) -> Matrix4<f32> {
        let (sin, cos) = theta.sin_cos();
        #[rustfmt::skip]
        let m = Matrix4::new(
             cos, 0.0, sin, 0.0,
             0.0, 1.0, 0.0, 0.0,
            -sin, 0.0, cos, 0.0,
             0.0, 0.0, 0.0, 1.0,
        );
        m
    }

    /// Rotation about the Z axis, angle in radians.
    pub fn rotation_z(theta: f32) -> Matrix4<f32> {
        let (sin, cos) = theta.sin_cos();
        #[rustfmt::skip]
        let m = Matrix4::new(
            cos, -sin, 0.0, 0.0,
            sin,  cos, 0.0, 0.0,
            0.0,  0.0, 1.0, 0.0,
            0.0,  0.0, 0.0, 1.0,
        );
        m
    }

    /// Rotation about a configured axis; the spin-axis list in the engine
    /// configuration decides which of these a frame applies.
    pub fn rotation(axis: Axis, theta: f32) -> Matrix4<f32> {
        match axis {
            Axis::X => Self::rotation_x(theta),
            Axis::Y => Self::rotation_y(theta),
            Axis::Z => Self::rotation_z(theta),
        }
    }

    /// Identity matrix with `offset` placed in the fourth row, so that
    /// `apply` adds the offset after the linear part.
    pub fn translation(offset: &Vector3<f32>) -> Matrix4<f32> {
        #[rustfmt::skip]
        let m = Matrix4::new(
            1.0,      0.0,      0.0,      0.0,
            0.0,      1.0,      0.0,      0.0,
            0.0,      0.0,      1.0,      0.0,
            offset.x, offset.y, offset.z, 1.0,
        );
        m
    }
}
