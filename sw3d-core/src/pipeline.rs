/// Per-frame transform sequence, backface culling and flat shading
use log::trace;
use nalgebra::{Matrix4, Point3, Vector3};

use crate::config::EngineConfig;
use crate::error::RenderError;
use crate::geometry::Triangle;
use crate::projection::{Projection, Viewport};
use crate::transform::{self, Transform};

/// Everything one frame needs, rebuilt per tick from the driver's angle and
/// the engine configuration. Owns no scene data; triangles stream through
/// [`FrameContext::process`].
pub struct FrameContext {
    rotations: Vec<Matrix4<f32>>,
    translation: Matrix4<f32>,
    projection: Matrix4<f32>,
    viewport: Viewport,
    camera: Point3<f32>,
    light: Vector3<f32>,
}

impl FrameContext {
    /// `projection` and `light` come pre-validated from the driver, so the
    /// per-frame path can only fail on degenerate geometry.
    pub fn new(
        config: &EngineConfig,
        projection: &Projection,
        light: Vector3<f32>,
        angle: f32,
    ) -> Self {
        let rotations = config
            .spin_axes
            .iter()
            .map(|&axis| Transform::rotation(axis, angle))
            .collect();

        Self {
            rotations,
            translation: Transform::translation(&config.scene_offset),
            projection: *projection.matrix(),
            viewport: config.viewport(),
            camera: config.camera,
            light,
        }
    }

    /// Rotate (in configured order) and translate a point into
    /// camera-relative world space.
    fn to_world(&self, p: &Point3<f32>) -> Point3<f32> {
        let mut out = *p;
        for rotation in &self.rotations {
            out = transform::apply(&out, rotation);
        }
        transform::apply(&out, &self.translation)
    }

    /// Run one triangle through the frame. `Ok(None)` means the triangle is
    /// back-facing and was culled; kept triangles come back in screen
    /// coordinates with their shading intensity set.
    ///
    /// Projection and screen mapping run only for triangles that survive
    /// culling, so the `dot == 0` grazing boundary never depends on
    /// projected values.
    pub fn process(&self, triangle: &Triangle) -> Result<Option<Triangle>, RenderError> {
        let world = triangle.map_points(|p| self.to_world(p));

        let normal = world.face_normal()?;
        let view = world.points[1] - self.camera;
        if normal.dot(&view) >= 0.0 {
            trace!("culled back-facing triangle at {:?}", world.points[0]);
            return Ok(None);
        }

        let mut screen = world
            .map_points(|p| self.viewport.to_screen(&transform::apply(p, &self.projection)));
        screen.light = normal.dot(&self.light);
        Ok(Some(screen))
    }
}
