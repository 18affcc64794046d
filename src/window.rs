//! SDL2 window acting as a [`DrawingSurface`] and input event source.

use std::time::Duration;

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::rect::FPoint;

use crate::colors::{self, Color};
use crate::render::{DrawingSurface, SurfaceError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowEvent {
    Quit,
    /// Mouse wheel movement, positive `dy` away from the user.
    Scroll { dx: f32, dy: f32 },
    Resize(u32, u32),
}

/// Sleeps a fixed amount after each frame.
pub struct FrameLimiter {
    delay: Duration,
}

impl FrameLimiter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn wait(&self) {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    event_pump: sdl2::EventPump,
    draw_color: Color,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, SurfaceError> {
        let sdl_context = sdl2::init().map_err(SurfaceError::Init)?;
        let video_subsystem = sdl_context.video().map_err(SurfaceError::Init)?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| SurfaceError::Init(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .build()
            .map_err(|e| SurfaceError::Init(e.to_string()))?;
        let event_pump = sdl_context.event_pump().map_err(SurfaceError::Init)?;

        log::info!("opened {width}x{height} window \"{title}\"");

        Ok(Self {
            canvas,
            event_pump,
            draw_color: colors::WHITE,
            width,
            height,
        })
    }

    /// Drains every pending event.
    pub fn poll_events(&mut self) -> Vec<WindowEvent> {
        let mut events = Vec::new();
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => events.push(WindowEvent::Quit),
                Event::MouseWheel { x, y, .. } => events.push(WindowEvent::Scroll {
                    dx: x as f32,
                    dy: y as f32,
                }),
                Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(w, h),
                    ..
                } => {
                    self.width = w as u32;
                    self.height = h as u32;
                    events.push(WindowEvent::Resize(self.width, self.height));
                }
                _ => {}
            }
        }
        events
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl DrawingSurface for Window {
    fn set_color(&mut self, color: Color) {
        self.draw_color = color;
        self.canvas.set_draw_color(color);
    }

    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) -> Result<(), SurfaceError> {
        self.canvas
            .draw_fline(FPoint::new(x0, y0), FPoint::new(x1, y1))
            .map_err(SurfaceError::Backend)
    }

    fn draw_point(&mut self, x: f32, y: f32) -> Result<(), SurfaceError> {
        self.canvas
            .draw_fpoint(FPoint::new(x, y))
            .map_err(SurfaceError::Backend)
    }

    fn clear(&mut self, color: Color) -> Result<(), SurfaceError> {
        self.canvas.set_draw_color(color);
        self.canvas.clear();
        self.canvas.set_draw_color(self.draw_color);
        Ok(())
    }

    fn present(&mut self) -> Result<(), SurfaceError> {
        self.canvas.present();
        Ok(())
    }
}
