//! Look-at camera and orbit controller.
//!
//! # Coordinate System
//!
//! Uses a **right-handed** coordinate system:
//! - X: positive right
//! - Y: positive up
//! - Z: positive toward the viewer (the camera looks down its local -Z)
//!
//! The camera has no roll: its up axis is always derived from the world up
//! vector held in [`RenderConfig`](crate::config::RenderConfig).

use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::projection::Projection;

pub const MIN_FOV: f32 = 1.0;
pub const MAX_FOV: f32 = 179.0;

/// A camera defined by where it is, what it looks at and how wide it sees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec3,
    target: Vec3,
    /// Vertical field of view in degrees.
    fov: f32,
}

impl Camera {
    pub fn new(position: Vec3, target: Vec3, fov: f32) -> Self {
        Self {
            position,
            target,
            fov,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
    }

    /// Builds the world-to-view matrix.
    ///
    /// Degenerate when `world_up` is parallel to the viewing direction or the
    /// target coincides with the position.
    pub fn view_matrix(&self, world_up: Vec3) -> Mat4 {
        Mat4::look_at(self.position, self.target, world_up)
    }

    /// Projection parameters for this camera on a surface with the given aspect.
    pub fn projection(&self, aspect_ratio: f32, z_near: f32, z_far: f32) -> Projection {
        Projection::new(self.fov, aspect_ratio, z_near, z_far)
    }
}

// =============================================================================
// Orbit Controller
// =============================================================================

/// Moves a camera around a fixed target on a horizontal circle.
///
/// Scroll input drives it: vertical scroll widens or narrows the field of
/// view, horizontal scroll walks the camera around the circle.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    /// Orbit angle in degrees, kept within (-360, 360).
    angle: f32,
    radius: f32,
    height: f32,
    target: Vec3,
    fov: f32,
    /// Degrees of orbit per horizontal scroll unit.
    pub orbit_step: f32,
    /// Degrees of field of view per vertical scroll unit.
    pub fov_step: f32,
}

impl OrbitCamera {
    pub fn new(radius: f32, height: f32, fov: f32) -> Self {
        Self {
            angle: 0.0,
            radius,
            height,
            target: Vec3::ZERO,
            fov: fov.clamp(MIN_FOV, MAX_FOV),
            orbit_step: 3.0,
            fov_step: 1.0,
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Camera position for the current angle: `(r sin a, height, r cos a)`.
    pub fn position(&self) -> Vec3 {
        let radians = self.angle.to_radians();
        Vec3::new(
            self.radius * radians.sin(),
            self.height,
            self.radius * radians.cos(),
        )
    }

    pub fn camera(&self) -> Camera {
        Camera::new(self.position(), self.target, self.fov)
    }

    /// Applies one scroll event. Returns `true` when the camera changed.
    pub fn scroll(&mut self, dx: f32, dy: f32) -> bool {
        if dx == 0.0 && dy == 0.0 {
            return false;
        }

        self.fov = (self.fov + dy * self.fov_step).clamp(MIN_FOV, MAX_FOV);
        self.rotate(dx * self.orbit_step);

        log::debug!(
            "fov: {:.1}, camera: {:?}, angle: {:.1}",
            self.fov,
            self.position(),
            self.angle
        );
        true
    }

    /// Walks the camera around the circle by `degrees`.
    ///
    /// A full turn in either direction snaps the angle back to zero.
    pub fn rotate(&mut self, degrees: f32) {
        self.angle += degrees;
        if self.angle.abs() >= 360.0 {
            self.angle %= 360.0;
        }
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(10.0, 3.0, 90.0)
    }
}

// =============================================================================
// Tests
// =============================================================================
