/// Typed pipeline errors
use thiserror::Error;

/// Errors surfaced by configuration validation and frame computation.
///
/// The reference behavior for each of these was a silently garbage result
/// (NaN normals, singular projection matrices); they are explicit here so a
/// malformed mesh or configuration fails on the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RenderError {
    /// The triangle's edges are collinear, so its face normal is undefined.
    #[error("degenerate triangle: edges are collinear, face normal is undefined")]
    DegenerateTriangle,

    /// Projection parameters outside `far > near > 0` and `0 < fov < 180`.
    #[error("invalid projection parameters: fov {fov_degrees} deg, near {z_near}, far {z_far}")]
    InvalidProjection {
        fov_degrees: f32,
        z_near: f32,
        z_far: f32,
    },

    /// A direction vector with zero length cannot be normalized.
    #[error("zero-length vector cannot be normalized")]
    ZeroLengthVector,
}
