//! Triangle-soup wireframes.
//!
//! A [`TriangleWireframe`] holds explicit triangles, each carrying its own
//! vertex copies and face normal, so faces can be culled individually before
//! their edges are drawn.

use crate::math::vec3::Vec3;
use crate::triangle::Triangle;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleWireframe {
    triangles: Vec<Triangle>,
    origin: Vec3,
}

impl TriangleWireframe {
    pub fn new(triangles: Vec<Triangle>, origin: Vec3) -> Self {
        Self { triangles, origin }
    }

    /// Two triangles covering the square `[-h, h] x [-h, h]` in the plane
    /// `y = height`, wound so both normals point up (+Y).
    pub fn ground_plane(half_extent: f32, height: f32) -> Self {
        let h = half_extent;
        let mut plane = Self::default();
        plane.add_triangle([
            Vec3::new(-h, height, -h),
            Vec3::new(h, height, h),
            Vec3::new(h, height, -h),
        ]);
        plane.add_triangle([
            Vec3::new(-h, height, -h),
            Vec3::new(-h, height, h),
            Vec3::new(h, height, h),
        ]);
        plane
    }

    /// Appends a triangle, computing its face normal from the winding order.
    pub fn add_triangle(&mut self, vertices: [Vec3; 3]) {
        self.triangles.push(Triangle::new(vertices));
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn set_origin(&mut self, origin: Vec3) {
        self.origin = origin;
    }
}
