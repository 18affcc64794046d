//! A real-time 3D wireframe visualizer.
//!
//! Edge wireframes and triangle meshes are pushed through a model/view/
//! projection pipeline on the CPU and drawn as 2D line segments onto any
//! [`DrawingSurface`](render::DrawingSurface): an SDL2 window, an in-memory
//! pixel buffer, or a command recorder.
//!
//! # Quick Start
//!
//! ```ignore
//! use wirescope::prelude::*;
//!
//! let mut window = Window::new("My App", 600, 400)?;
//! let mut renderer = Renderer::new(Viewport::new(600, 400), RenderConfig::default());
//! let cube = EdgeWireframe::cube(Vec3::ZERO);
//! let camera = Camera::new(Vec3::new(0.0, 3.0, 10.0), Vec3::ZERO, 90.0);
//!
//! let mut frame = renderer.begin_frame(&mut window, colors::BLACK)?;
//! frame.draw_wireframe(&cube, &camera, colors::WHITE)?;
//! frame.present()?;
//! ```

pub mod camera;
pub mod colors;
pub mod config;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod render;
pub mod triangle;
pub mod window;
pub mod wireframe;

pub use camera::{Camera, OrbitCamera};
pub use config::{RenderConfig, ViewerConfig};
pub use mesh::TriangleWireframe;
pub use projection::{Projection, Viewport};
pub use render::{Renderer, SurfaceError};
pub use triangle::Triangle;
pub use wireframe::{EdgeWireframe, SceneError};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use wirescope::prelude::*;
/// ```
pub mod prelude {
    // Camera
    pub use crate::camera::{Camera, OrbitCamera};

    // Colors & configuration
    pub use crate::colors::{self, Color};
    pub use crate::config::{RenderConfig, ViewerConfig};

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;

    // Scene
    pub use crate::mesh::TriangleWireframe;
    pub use crate::triangle::Triangle;
    pub use crate::wireframe::EdgeWireframe;

    // Projection
    pub use crate::projection::{Projection, Viewport};

    // Rendering
    pub use crate::render::{
        DrawingSurface, Frame, PixelSurface, RecordingSurface, Renderer, SurfaceError,
    };

    // Window & Input
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}
