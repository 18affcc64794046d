use crate::math::vec3::Vec3;

// A triangle owns copies of its three vertices. The face normal is derived
// once from the winding order and is left unnormalized; the renderer
// normalizes it when it needs a direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    vertices: [Vec3; 3],
    normal: Vec3,
}

impl Triangle {
    pub fn new(vertices: [Vec3; 3]) -> Self {
        let [v0, v1, v2] = vertices;
        Self {
            vertices,
            normal: (v1 - v0).cross(v2 - v0),
        }
    }

    pub fn vertices(&self) -> &[Vec3; 3] {
        &self.vertices
    }

    /// The face normal `(v1 - v0) x (v2 - v0)`; its length is twice the area.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// True when the vertices are collinear and the normal has no direction.
    pub fn is_degenerate(&self) -> bool {
        self.normal == Vec3::ZERO
    }
}
