/// Frame driver: owns the scene and advances the simulation each tick
use log::{debug, info};
use nalgebra::Vector3;

use crate::backend::{DrawBackend, RenderMode};
use crate::config::EngineConfig;
use crate::error::RenderError;
use crate::geometry::{Scene, Triangle};
use crate::pipeline::FrameContext;
use crate::projection::Projection;

/// Driver lifecycle. The only transition is `Running -> Stopped`, triggered
/// by the presentation layer's quit signal and checked between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Running,
    Stopped,
}

/// Ticks the scene through the transform pipeline and emits screen-space
/// primitives to a drawing backend.
pub struct FrameDriver {
    scene: Scene,
    config: EngineConfig,
    projection: Projection,
    light: Vector3<f32>,
    angle: f32,
    state: DriverState,
}

impl FrameDriver {
    /// Validates the configuration up front; a driver that constructs
    /// successfully can only fail later on degenerate geometry.
    pub fn new(scene: Scene, config: EngineConfig) -> Result<Self, RenderError> {
        let projection = config.projection()?;
        let light = config.normalized_light()?;
        info!(
            "frame driver ready: {} meshes, {} triangles, {}x{} viewport",
            scene.meshes.len(),
            scene.triangle_count(),
            config.width,
            config.height,
        );

        Ok(Self {
            scene,
            config,
            projection,
            light,
            angle: 0.0,
            state: DriverState::Running,
        })
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    /// Current spin angle in radians.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.config.render_mode = mode;
    }

    /// External quit signal. Idempotent; never interrupts a frame in
    /// progress.
    pub fn stop(&mut self) {
        if self.state == DriverState::Running {
            self.state = DriverState::Stopped;
            debug!("frame driver stopped at angle {:.3}", self.angle);
        }
    }

    /// Compute the current frame: every visible triangle, in screen
    /// coordinates, shaded. Pure with respect to driver state; calling it
    /// twice without an intervening `tick` yields bit-identical output.
    pub fn frame(&self) -> Result<Vec<Triangle>, RenderError> {
        let ctx = FrameContext::new(&self.config, &self.projection, self.light, self.angle);

        let mut visible = Vec::new();
        for mesh in &self.scene.meshes {
            for triangle in &mesh.triangles {
                if let Some(t) = ctx.process(triangle)? {
                    visible.push(t);
                }
            }
        }
        Ok(visible)
    }

    /// Emit one frame to the backend and advance the spin angle by the
    /// configured step. Does nothing once stopped.
    pub fn tick<B: DrawBackend>(&mut self, backend: &mut B) -> Result<(), RenderError> {
        if self.state != DriverState::Running {
            return Ok(());
        }

        for t in self.frame()? {
            let p0 = (t.points[0].x, t.points[0].y);
            let p1 = (t.points[1].x, t.points[1].y);
            let p2 = (t.points[2].x, t.points[2].y);
            match self.config.render_mode {
                RenderMode::Points => {
                    backend.draw_point(p0.0, p0.1);
                    backend.draw_point(p1.0, p1.1);
                    backend.draw_point(p2.0, p2.1);
                }
                RenderMode::Wireframe => backend.draw_triangle(p0, p1, p2),
                RenderMode::Filled => backend.fill_triangle(p0, p1, p2, t.light),
            }
        }

        self.angle += self.config.rotation_step;
        Ok(())
    }
}
