/// Geometry primitives for the rendering pipeline
use nalgebra::{Point3, Vector3};

use crate::error::RenderError;

/// A triangle with a flat-shading intensity.
///
/// Pipeline stages never mutate a triangle in place; each stage produces a
/// fresh copy via [`Triangle::map_points`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub points: [Point3<f32>; 3],
    /// Alignment between the face normal and the light direction, written by
    /// the shading stage. May be negative for faces lit from behind; the
    /// drawing backend clamps when mapping to a color.
    pub light: f32,
}

impl Triangle {
    pub fn new(p0: Point3<f32>, p1: Point3<f32>, p2: Point3<f32>) -> Self {
        Self {
            points: [p0, p1, p2],
            light: 0.0,
        }
    }

    /// A copy with every vertex passed through `f`, keeping the intensity.
    pub fn map_points<F: Fn(&Point3<f32>) -> Point3<f32>>(&self, f: F) -> Self {
        Self {
            points: [f(&self.points[0]), f(&self.points[1]), f(&self.points[2])],
            light: self.light,
        }
    }

    /// Unit face normal derived from winding order (right-handed: edge
    /// P0->P1 crossed with edge P0->P2). Collinear edges have no plane and
    /// therefore no normal.
    pub fn face_normal(&self) -> Result<Vector3<f32>, RenderError> {
        let l1 = self.points[1] - self.points[0];
        let l2 = self.points[2] - self.points[0];
        l1.cross(&l2)
            .try_normalize(0.0)
            .ok_or(RenderError::DegenerateTriangle)
    }
}

/// A 3D mesh composed of triangles, immutable once built.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// The classic 12-triangle cube with vertices in {0,1}^3.
    ///
    /// Winding is outward-facing so that backface culling keeps at most the
    /// three faces visible from any outside viewpoint.
    pub fn unit_cube() -> Self {
        fn tri(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> Triangle {
            Triangle::new(
                Point3::new(a[0], a[1], a[2]),
                Point3::new(b[0], b[1], b[2]),
                Point3::new(c[0], c[1], c[2]),
            )
        }

        let mut mesh = Self::with_capacity(12);

        // Back (z = 0)
        mesh.add_triangle(tri([0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]));
        mesh.add_triangle(tri([0.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 0.0, 0.0]));
        // Bottom (y = 0)
        mesh.add_triangle(tri([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 1.0]));
        mesh.add_triangle(tri([0.0, 0.0, 0.0], [1.0, 0.0, 1.0], [0.0, 0.0, 1.0]));
        // Right (x = 1)
        mesh.add_triangle(tri([1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 1.0, 1.0]));
        mesh.add_triangle(tri([1.0, 0.0, 0.0], [1.0, 1.0, 1.0], [1.0, 0.0, 1.0]));
        // Left (x = 0)
        mesh.add_triangle(tri([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 1.0]));
        mesh.add_triangle(tri([0.0, 0.0, 0.0], [0.0, 1.0, 1.0], [0.0, 1.0, 0.0]));
        // Top (y = 1)
        mesh.add_triangle(tri([0.0, 1.0, 0.0], [0.0, 1.0, 1.0], [1.0, 1.0, 1.0]));
        mesh.add_triangle(tri([0.0, 1.0, 0.0], [1.0, 1.0, 1.0], [1.0, 1.0, 0.0]));
        // Front (z = 1)
        mesh.add_triangle(tri([0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 1.0]));
        mesh.add_triangle(tri([0.0, 0.0, 1.0], [1.0, 1.0, 1.0], [0.0, 1.0, 1.0]));

        mesh
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level owner of all renderable geometry (Scene -> Mesh -> Triangle,
/// acyclic and flat).
#[derive(Debug, Clone)]
pub struct Scene {
    pub meshes: Vec<Mesh>,
}

impl Scene {
    pub fn new() -> Self {
        Self { meshes: Vec::new() }
    }

    pub fn add_mesh(&mut self, mesh: Mesh) {
        self.meshes.push(mesh);
    }

    pub fn triangle_count(&self) -> usize {
        self.meshes.iter().map(|m| m.triangles.len()).sum()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_normal_is_unit_length() {
        let t = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.5),
            Point3::new(0.0, 3.0, 1.0),
        );
        let n = t.face_normal().unwrap();
        assert!((n.norm() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_face_normal_perpendicular_to_edges() {
        let t = Triangle::new(
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
            Point3::new(0.0, 0.0, 3.0),
        );
        let n = t.face_normal().unwrap();
        let l1 = t.points[1] - t.points[0];
        let l2 = t.points[2] - t.points[0];
        assert!(n.dot(&l1).abs() < 1e-6);
        assert!(n.dot(&l2).abs() < 1e-6);
    }

    #[test]
    fn test_collinear_triangle_has_no_normal() {
        let t = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(2.0, 2.0, 2.0),
        );
        assert_eq!(t.face_normal(), Err(RenderError::DegenerateTriangle));
    }

    #[test]
    fn test_map_points_keeps_intensity() {
        let mut t = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        );
        t.light = 0.25;
        let shifted = t.map_points(|p| Point3::new(p.x + 1.0, p.y, p.z));
        assert_eq!(shifted.points[1], Point3::new(2.0, 0.0, 0.0));
        assert_eq!(shifted.light, 0.25);
    }

    #[test]
    fn test_unit_cube_shape() {
        let cube = Mesh::unit_cube();
        assert_eq!(cube.triangles.len(), 12);
        // First back-face triangle winds toward -z.
        let n = cube.triangles[0].face_normal().unwrap();
        assert!((n - Vector3::new(0.0, 0.0, -1.0)).norm() < 1e-6);
    }

    #[test]
    fn test_scene_counts_triangles_across_meshes() {
        let mut scene = Scene::new();
        scene.add_mesh(Mesh::unit_cube());
        scene.add_mesh(Mesh::unit_cube());
        assert_eq!(scene.triangle_count(), 24);
    }
}
