//! Edge-list wireframes.
//!
//! An [`EdgeWireframe`] is a vertex list plus index pairs naming which vertices
//! are connected by a drawn line. Vertices stay in local space; the
//! `location` offset is applied by the renderer each frame.

use std::error::Error;
use std::fmt;

use crate::math::vec3::Vec3;

pub const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
];

pub const CUBE_EDGES: [(usize, usize); 12] = [
    // Back face
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    // Front face
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    // Connecting edges
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// Errors raised while building scene geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// An edge refers to a vertex index past the end of the vertex list.
    EdgeOutOfBounds {
        edge: usize,
        index: usize,
        vertex_count: usize,
    },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::EdgeOutOfBounds {
                edge,
                index,
                vertex_count,
            } => write!(
                f,
                "edge {edge} references vertex {index}, but the wireframe has {vertex_count} vertices"
            ),
        }
    }
}

impl Error for SceneError {}

/// A wireframe made of explicit vertex-to-vertex edges.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeWireframe {
    vertices: Vec<Vec3>,
    edges: Vec<(usize, usize)>,
    /// World-space offset applied at render time.
    location: Vec3,
}

impl Default for EdgeWireframe {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            location: Vec3::ZERO,
        }
    }
}

impl EdgeWireframe {
    /// Builds a wireframe, checking that every edge names existing vertices.
    pub fn new(
        vertices: Vec<Vec3>,
        edges: Vec<(usize, usize)>,
        location: Vec3,
    ) -> Result<Self, SceneError> {
        let vertex_count = vertices.len();
        for (edge, &(a, b)) in edges.iter().enumerate() {
            if let Some(index) = [a, b].into_iter().find(|&i| i >= vertex_count) {
                return Err(SceneError::EdgeOutOfBounds {
                    edge,
                    index,
                    vertex_count,
                });
            }
        }

        Ok(Self {
            vertices,
            edges,
            location,
        })
    }

    /// A 2x2x2 cube centered on its local origin.
    pub fn cube(location: Vec3) -> Self {
        Self {
            vertices: CUBE_VERTICES.to_vec(),
            edges: CUBE_EDGES.to_vec(),
            location,
        }
    }

    /// An axis-aligned square outline lying in the plane `y = height`.
    pub fn ground_square(half_extent: f32, height: f32) -> Self {
        let h = half_extent;
        Self {
            vertices: vec![
                Vec3::new(-h, height, -h),
                Vec3::new(h, height, -h),
                Vec3::new(h, height, h),
                Vec3::new(-h, height, h),
            ],
            edges: vec![(0, 1), (1, 2), (2, 3), (3, 0)],
            location: Vec3::ZERO,
        }
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn location(&self) -> Vec3 {
        self.location
    }

    pub fn set_location(&mut self, location: Vec3) {
        self.location = location;
    }
}
