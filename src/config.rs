//! Renderer and viewer configuration.

use std::time::Duration;

use crate::colors::{self, Color};
use crate::math::vec3::Vec3;

/// Constants of the transform pipeline that stay fixed across draw calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Near clipping plane distance used by the projection.
    pub near_plane: f32,
    /// Far clipping plane distance used by the projection.
    pub far_plane: f32,
    /// World up direction fed to the view matrix. Camera roll is not supported.
    pub world_up: Vec3,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            near_plane: 0.1,
            far_plane: 50.0,
            world_up: Vec3::UP,
        }
    }
}

/// Settings for the interactive viewer binary.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Starting vertical field of view in degrees.
    pub fov: f32,
    /// Distance of the orbiting camera from the target.
    pub orbit_radius: f32,
    /// Height of the orbiting camera above the target.
    pub camera_height: f32,
    /// Orbit degrees per horizontal scroll unit.
    pub orbit_step: f32,
    /// Field-of-view degrees per vertical scroll unit.
    pub fov_step: f32,
    /// Sleep after each presented frame.
    pub frame_delay: Duration,
    pub background: Color,
    pub render: RenderConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: String::from("wirescope"),
            width: 600,
            height: 400,
            fov: 90.0,
            orbit_radius: 10.0,
            camera_height: 3.0,
            orbit_step: 3.0,
            fov_step: 1.0,
            frame_delay: Duration::from_millis(1),
            background: colors::BLACK,
            render: RenderConfig::default(),
        }
    }
}
