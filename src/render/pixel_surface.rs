//! In-memory software surface.
//!
//! [`PixelSurface`] owns an ARGB8888 color buffer and rasterizes lines into it
//! on the CPU, which makes it usable without a window (snapshots, tests,
//! benchmarks).

use std::path::Path;

use super::surface::{DrawingSurface, SurfaceError};
use crate::colors::{self, Color};

pub struct PixelSurface {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
    draw_color: u32,
}

impl PixelSurface {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![colors::BLACK.to_argb(); size],
            width,
            height,
            draw_color: colors::WHITE.to_argb(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = (y as u32 * self.width + x as u32) as usize;
            self.color_buffer[index] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let argb = self.color_buffer[(y as u32 * self.width + x as u32) as usize];
            Some(Color::from_argb(argb))
        } else {
            None
        }
    }

    pub fn pixels(&self) -> &[u32] {
        &self.color_buffer
    }

    /// Draws a line between two points using Bresenham's line algorithm.
    ///
    /// An error term tracks the distance between the ideal line and the
    /// current pixel; stepping along the major axis, the minor axis is stepped
    /// too whenever the accumulated error crosses the threshold.
    pub fn draw_line_bresenham(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();

        let x_incr_direction = if x0 < x1 { 1 } else { -1 };
        let y_incr_direction = if y0 < y1 { 1 } else { -1 };

        // Positive error favors x movement, negative favors y.
        let mut err = dx - dy;

        let mut x = x0;
        let mut y = y0;

        loop {
            self.set_pixel(x, y, color);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;

            if e2 > -dy {
                err -= dy;
                x += x_incr_direction;
            }

            // Both branches may fire, which is a diagonal step.
            if e2 < dx {
                err += dx;
                y += y_incr_direction;
            }
        }
    }

    /// Converts the buffer to an RGBA image.
    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            let c = Color::from_argb(self.color_buffer[(y * self.width + x) as usize]);
            image::Rgba([c.r, c.g, c.b, c.a])
        })
    }

    /// Writes the buffer to an image file; the format follows the extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SurfaceError> {
        self.to_image().save(path)?;
        Ok(())
    }
}

/// Converts a pixel coordinate to an integer, refusing values Bresenham
/// cannot walk (NaN, infinities, or far beyond any real surface).
fn to_pixel(v: f32) -> Option<i32> {
    const LIMIT: f32 = 1.0e6;
    (v.is_finite() && v.abs() < LIMIT).then_some(v as i32)
}

impl DrawingSurface for PixelSurface {
    fn set_color(&mut self, color: Color) {
        self.draw_color = color.to_argb();
    }

    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) -> Result<(), SurfaceError> {
        if let (Some(x0), Some(y0), Some(x1), Some(y1)) =
            (to_pixel(x0), to_pixel(y0), to_pixel(x1), to_pixel(y1))
        {
            self.draw_line_bresenham(x0, y0, x1, y1, self.draw_color);
        }
        Ok(())
    }

    fn draw_point(&mut self, x: f32, y: f32) -> Result<(), SurfaceError> {
        if let (Some(x), Some(y)) = (to_pixel(x), to_pixel(y)) {
            self.set_pixel(x, y, self.draw_color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Color) -> Result<(), SurfaceError> {
        self.color_buffer.fill(color.to_argb());
        Ok(())
    }

    fn present(&mut self) -> Result<(), SurfaceError> {
        Ok(())
    }
}
