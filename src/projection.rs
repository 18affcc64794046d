//! Perspective projection parameters and the clip-to-screen mapping.
//!
//! [`Projection`] is the single source of truth for FOV, aspect ratio and the
//! near/far planes. [`Viewport`] maps projected coordinates onto device pixels
//! with the origin at the top-left corner.

use crate::math::mat4::Mat4;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees.
    fov: f32,
    /// Aspect ratio (width / height).
    aspect_ratio: f32,
    /// Near clipping plane distance.
    z_near: f32,
    /// Far clipping plane distance.
    z_far: f32,
}

impl Projection {
    /// Creates a new projection with the given parameters.
    ///
    /// # Arguments
    /// * `fov` - Vertical field of view in degrees
    /// * `aspect_ratio` - Width divided by height
    /// * `z_near` - Near clipping plane distance (must be > 0)
    /// * `z_far` - Far clipping plane distance (must be > z_near)
    pub fn new(fov: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        Self {
            fov,
            aspect_ratio,
            z_near,
            z_far,
        }
    }

    /// Returns the vertical field of view in degrees.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective(self.fov, self.aspect_ratio, self.z_near, self.z_far)
    }
}

/// The pixel rectangle projected geometry is mapped onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Maps a projected point to pixel coordinates.
    ///
    /// X grows to the right from `-1 -> 0` to `1 -> width`; Y is flipped so
    /// `1` lands on the top row.
    pub fn to_screen(&self, projected: Vec3) -> Vec2 {
        let width = self.width as f32;
        let height = self.height as f32;
        Vec2::new(
            (projected.x + 1.0) * width / 2.0,
            (1.0 - projected.y) * height / 2.0,
        )
    }

    /// Returns the pixel containing `point`, if it lies inside the viewport.
    pub fn pixel(&self, point: Vec2) -> Option<(u32, u32)> {
        if !point.is_finite() || point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let (x, y) = (point.x as u32, point.y as u32);
        (x < self.width && y < self.height).then_some((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn camera_projection_reports_its_parameters() {
        let camera = crate::camera::Camera::new(Vec3::new(0.0, 3.0, 10.0), Vec3::ZERO, 75.0);
        let proj = camera.projection(1.5, 0.1, 50.0);
        assert_eq!(proj.fov(), 75.0);
        assert_eq!(proj.aspect_ratio(), 1.5);
    }

    #[test]
    fn matrix_uses_degrees() {
        let proj = Projection::new(90.0, 1.0, 0.1, 50.0);
        assert_eq!(proj.matrix(), Mat4::perspective(90.0, 1.0, 0.1, 50.0));
        assert_relative_eq!(proj.matrix().get(1, 1), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn screen_mapping_corners() {
        let vp = Viewport::new(600, 400);
        assert_eq!(vp.to_screen(Vec3::new(-1.0, 1.0, 0.0)), Vec2::new(0.0, 0.0));
        assert_eq!(vp.to_screen(Vec3::new(1.0, -1.0, 0.0)), Vec2::new(600.0, 400.0));
        assert_eq!(vp.to_screen(Vec3::ZERO), Vec2::new(300.0, 200.0));
    }

    #[test]
    fn pixel_rejects_outside_points() {
        let vp = Viewport::new(600, 400);
        assert_eq!(vp.pixel(Vec2::new(10.5, 20.9)), Some((10, 20)));
        assert_eq!(vp.pixel(Vec2::new(600.0, 0.0)), None);
        assert_eq!(vp.pixel(Vec2::new(-0.5, 10.0)), None);
        assert_eq!(vp.pixel(Vec2::new(f32::NAN, 10.0)), None);
    }
}
