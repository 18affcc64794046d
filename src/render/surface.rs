//! The drawing capability the frame renderer emits into.
//!
//! A [`DrawingSurface`] is an immediate-mode line canvas with a current draw
//! color. The SDL window, the in-memory [`PixelSurface`](super::PixelSurface)
//! and the [`RecordingSurface`] all implement it.

use std::error::Error;
use std::fmt;

use crate::colors::Color;
use crate::math::vec2::Vec2;

/// Failures reported by a drawing backend.
#[derive(Debug)]
pub enum SurfaceError {
    /// The backend could not be created (window, canvas, event pump).
    Init(String),
    /// A draw or present call was rejected by the backend.
    Backend(String),
    /// Writing a captured frame to disk failed.
    Export(image::ImageError),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::Init(msg) => write!(f, "failed to initialize drawing surface: {msg}"),
            SurfaceError::Backend(msg) => write!(f, "drawing backend error: {msg}"),
            SurfaceError::Export(err) => write!(f, "failed to export frame: {err}"),
        }
    }
}

impl Error for SurfaceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SurfaceError::Export(err) => Some(err),
            _ => None,
        }
    }
}

impl From<image::ImageError> for SurfaceError {
    fn from(err: image::ImageError) -> Self {
        SurfaceError::Export(err)
    }
}

/// An immediate-mode 2D line canvas addressed in device pixels.
pub trait DrawingSurface {
    /// Sets the color used by subsequent draws.
    fn set_color(&mut self, color: Color);

    /// Draws a straight line between two pixel coordinates.
    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) -> Result<(), SurfaceError>;

    /// Draws a single pixel.
    fn draw_point(&mut self, x: f32, y: f32) -> Result<(), SurfaceError>;

    /// Fills the whole surface with `color`. The draw color is left unchanged.
    fn clear(&mut self, color: Color) -> Result<(), SurfaceError>;

    /// Makes everything drawn since the last clear visible.
    fn present(&mut self) -> Result<(), SurfaceError>;

    /// Draws a line of `length` pixels from `(x, y)` heading `angle` radians
    /// clockwise from the +X axis (Y grows downward).
    fn draw_line_polar(
        &mut self,
        x: f32,
        y: f32,
        angle: f32,
        length: f32,
    ) -> Result<(), SurfaceError> {
        let x_end = x + length * angle.cos();
        let y_end = y + length * angle.sin();
        self.draw_line(x, y, x_end, y_end)
    }
}

/// One call made against a [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    SetColor(Color),
    Line { from: Vec2, to: Vec2 },
    Point(Vec2),
    Clear(Color),
    Present,
}

/// A surface that draws nothing and remembers every call in order.
///
/// Useful for headless inspection of what a frame would draw.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// The line segments drawn so far, as `(from, to)` pairs.
    pub fn lines(&self) -> Vec<(Vec2, Vec2)> {
        self.commands
            .iter()
            .filter_map(|cmd| match *cmd {
                DrawCommand::Line { from, to } => Some((from, to)),
                _ => None,
            })
            .collect()
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl DrawingSurface for RecordingSurface {
    fn set_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetColor(color));
    }

    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) -> Result<(), SurfaceError> {
        self.commands.push(DrawCommand::Line {
            from: Vec2::new(x0, y0),
            to: Vec2::new(x1, y1),
        });
        Ok(())
    }

    fn draw_point(&mut self, x: f32, y: f32) -> Result<(), SurfaceError> {
        self.commands.push(DrawCommand::Point(Vec2::new(x, y)));
        Ok(())
    }

    fn clear(&mut self, color: Color) -> Result<(), SurfaceError> {
        self.commands.push(DrawCommand::Clear(color));
        Ok(())
    }

    fn present(&mut self) -> Result<(), SurfaceError> {
        self.commands.push(DrawCommand::Present);
        Ok(())
    }
}
