//! Rendering: the frame renderer, its depth buffer and the surfaces it draws on.

mod depth_buffer;
mod pixel_surface;
mod renderer;
mod surface;

pub use depth_buffer::{DepthBuffer, FAR_DEPTH};
pub use pixel_surface::PixelSurface;
pub use renderer::{is_front_facing, Frame, Renderer, ScreenVertex};
pub use surface::{DrawCommand, DrawingSurface, RecordingSurface, SurfaceError};
