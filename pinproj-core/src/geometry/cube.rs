use nalgebra::{Point3, Vector3};

/// Unit cube wireframe: 8 vertices at (+-1, +-1, +-1) and the 12 edges
/// connecting adjacent vertices. Used to exercise the projection
/// pipeline with a known solid.
#[derive(Debug, Clone)]
pub struct CubeWireframe {
    vertices: [Point3<f64>; 8],
    edges: [(usize, usize); 12],
}

impl CubeWireframe {
    /// The canonical unit cube centered at the origin.
    ///
    /// Vertices 0-3 are the front face (z = +1), 4-7 the back face
    /// (z = -1). Edges: 4 front, 4 back, 4 connecting front to back.
    pub fn unit() -> Self {
        Self {
            vertices: [
                Point3::new(-1.0, -1.0, 1.0),
                Point3::new(1.0, -1.0, 1.0),
                Point3::new(1.0, 1.0, 1.0),
                Point3::new(-1.0, 1.0, 1.0),
                Point3::new(-1.0, -1.0, -1.0),
                Point3::new(1.0, -1.0, -1.0),
                Point3::new(1.0, 1.0, -1.0),
                Point3::new(-1.0, 1.0, -1.0),
            ],
            edges: [
                (0, 1),
                (1, 2),
                (2, 3),
                (3, 0),
                (4, 5),
                (5, 6),
                (6, 7),
                (7, 4),
                (0, 4),
                (1, 5),
                (2, 6),
                (3, 7),
            ],
        }
    }

    /// Get cube vertices
    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    /// Get edge index pairs into [`CubeWireframe::vertices`]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Vertex set shifted by `offset`, e.g. to place the cube in front
    /// of a camera sitting at the origin looking down +Z.
    pub fn translated(&self, offset: Vector3<f64>) -> Vec<Point3<f64>> {
        self.vertices.iter().map(|v| v + offset).collect()
    }
}
