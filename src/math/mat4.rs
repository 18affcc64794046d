//! 4x4 homogeneous transformation matrix.
//!
//! # Convention
//! - Vectors are **column vectors** on the right: `Mat4 * Vec3`
//! - Translation is stored in the **last column**
//! - Transforms chain **right-to-left**: `projection * view * model` applies
//!   the model transform first
//! - View space is **right-handed**: the camera looks down its local -Z axis

use std::ops::Mul;

use approx::{AbsDiffEq, RelativeEq};

use super::vec3::Vec3;

/// 4x4 matrix stored as `data[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f32; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    pub fn new(data: [[f32; 4]; 4]) -> Self {
        Mat4 { data }
    }

    pub fn identity() -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a translation matrix placing local-origin vertices in world space.
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, x],
            [0.0, 1.0, 0.0, y],
            [0.0, 0.0, 1.0, z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a right-handed view matrix.
    ///
    /// # Arguments
    ///
    /// * `eye` - The position of the camera.
    /// * `target` - The point the camera is looking at.
    /// * `up` - The up direction of the world. Must not be parallel to
    ///   `eye - target`, otherwise the right axis collapses and the matrix is NaN.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let z = (eye - target).normalize();
        let x = up.cross(z).normalize();
        // z and x are orthonormal, so y is unit length without renormalizing
        let y = z.cross(x);

        Self::new([
            [x.x, x.y, x.z, -x.dot(eye)],
            [y.x, y.y, y.z, -y.dot(eye)],
            [z.x, z.y, z.z, -z.dot(eye)],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a perspective projection matrix.
    ///
    /// `fov_degrees` is the vertical field of view. The bottom row carries
    /// `-1` in the z column so that `w` equals the distance in front of the
    /// camera; the screen mapping flips Y afterwards to reach top-left pixel
    /// space.
    pub fn perspective(fov_degrees: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        let tan_half_fov = (fov_degrees.to_radians() / 2.0).tan();
        let depth = far - near;
        Mat4::new([
            [1.0 / (aspect_ratio * tan_half_fov), 0.0, 0.0, 0.0],
            [0.0, 1.0 / tan_half_fov, 0.0, 0.0],
            [0.0, 0.0, far / depth, -far * near / depth],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }

    /// Access element at [row][col].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row][col]
    }
}

/// Matrix multiplication: Mat4 * Mat4.
///
/// `A * B * v` applies B first, then A.
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut result = [[0.0f32; 4]; 4];

        for (row, out) in result.iter_mut().enumerate() {
            for (col, cell) in out.iter_mut().enumerate() {
                *cell = self.data[row][0] * rhs.data[0][col]
                    + self.data[row][1] * rhs.data[1][col]
                    + self.data[row][2] * rhs.data[2][col]
                    + self.data[row][3] * rhs.data[3][col];
            }
        }

        Mat4::new(result)
    }
}

/// Transform a point: Mat4 * Vec3 (treats Vec3 as column vector with w=1).
///
/// Divides by w when w != 0. A zero w is a point at infinity; the raw x, y, z
/// are returned unchanged.
impl Mul<Vec3> for Mat4 {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Self::Output {
        let x =
            self.data[0][0] * v.x + self.data[0][1] * v.y + self.data[0][2] * v.z + self.data[0][3];
        let y =
            self.data[1][0] * v.x + self.data[1][1] * v.y + self.data[1][2] * v.z + self.data[1][3];
        let z =
            self.data[2][0] * v.x + self.data[2][1] * v.y + self.data[2][2] * v.z + self.data[2][3];
        let w =
            self.data[3][0] * v.x + self.data[3][1] * v.y + self.data[3][2] * v.z + self.data[3][3];

        if w != 0.0 {
            Vec3::new(x / w, y / w, z / w)
        } else {
            Vec3::new(x, y, z)
        }
    }
}

impl AbsDiffEq for Mat4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Mat4 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_matrices() -> [Mat4; 3] {
        [
            Mat4::translation(1.0, -2.0, 3.5),
            Mat4::look_at(Vec3::new(0.0, 3.0, 10.0), Vec3::ZERO, Vec3::UP),
            Mat4::perspective(75.0, 1.5, 0.1, 50.0),
        ]
    }

    #[test]
    fn multiplication_is_associative() {
        let [a, b, c] = sample_matrices();
        assert_relative_eq!((a * b) * c, a * (b * c), epsilon = 1e-3);
        assert_relative_eq!((c * a) * b, c * (a * b), epsilon = 1e-3);
    }

    #[test]
    fn identity_is_neutral() {
        for m in sample_matrices() {
            assert_eq!(m * Mat4::identity(), m);
            assert_eq!(Mat4::identity() * m, m);
        }
    }

    #[test]
    fn multiplication_is_not_commutative() {
        let t = Mat4::translation(5.0, 0.0, 0.0);
        let p = Mat4::perspective(90.0, 1.0, 0.1, 50.0);
        assert_ne!(t * p, p * t);
    }

    #[test]
    fn translation_moves_points() {
        let m = Mat4::translation(10.0, 20.0, 30.0);
        let p = m * Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(p, Vec3::new(11.0, 22.0, 33.0));
    }

    #[test]
    fn look_at_maps_eye_to_origin() {
        let eye = Vec3::new(2.0, 3.0, -7.0);
        let forward = Vec3::new(0.3, -0.2, 1.0);
        let view = Mat4::look_at(eye, eye + forward, Vec3::UP);
        assert_relative_eq!(view * eye, Vec3::ZERO, epsilon = 1e-5);
    }

    #[test]
    fn look_at_places_target_on_negative_z() {
        let eye = Vec3::new(0.0, 3.0, 10.0);
        let view = Mat4::look_at(eye, Vec3::ZERO, Vec3::UP);
        let target = view * Vec3::ZERO;
        assert_relative_eq!(target.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(target.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(target.z, -eye.magnitude(), epsilon = 1e-4);
    }

    #[test]
    fn look_at_with_parallel_up_is_nan() {
        let view = Mat4::look_at(Vec3::new(0.0, 3.0, 0.0), Vec3::ZERO, Vec3::UP);
        assert!(view.get(0, 0).is_nan());
    }

    #[test]
    fn perspective_layout() {
        let (near, far) = (0.1, 50.0);
        let m = Mat4::perspective(90.0, 2.0, near, far);
        assert_relative_eq!(m.get(0, 0), 0.5, epsilon = 1e-6);
        assert_relative_eq!(m.get(1, 1), 1.0, epsilon = 1e-6);
        assert_relative_eq!(m.get(2, 2), far / (far - near));
        assert_relative_eq!(m.get(2, 3), -far * near / (far - near));
        assert_eq!(m.get(3, 2), -1.0);
        assert_eq!(m.get(3, 3), 0.0);
    }

    #[test]
    fn perspective_maps_near_plane_to_zero_depth() {
        let near = 0.1;
        let m = Mat4::perspective(90.0, 1.5, near, 50.0);
        let clip = m * Vec3::new(0.0, 0.0, near);
        assert_relative_eq!(clip.x, 0.0);
        assert_relative_eq!(clip.y, 0.0);
        assert_relative_eq!(clip.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn zero_w_skips_divide() {
        // A point on the camera plane has w == 0 under the projection
        let m = Mat4::perspective(90.0, 1.0, 0.1, 50.0);
        let out = m * Vec3::new(2.0, 3.0, 0.0);
        assert_relative_eq!(out.x, 2.0, epsilon = 1e-6);
        assert_relative_eq!(out.y, 3.0, epsilon = 1e-6);
        assert_relative_eq!(out.z, -50.0 * 0.1 / 49.9, epsilon = 1e-6);
    }
}
