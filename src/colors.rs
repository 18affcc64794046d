//! RGBA draw colors.

/// An 8-bit per channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
pub const RED: Color = Color::rgba(255, 0, 0, 255);
pub const GREEN: Color = Color::rgba(0, 255, 0, 255);
pub const BLUE: Color = Color::rgba(0, 0, 255, 255);

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Packs the color as ARGB8888.
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Unpacks an ARGB8888 pixel.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }
}

impl From<Color> for sdl2::pixels::Color {
    fn from(c: Color) -> Self {
        sdl2::pixels::Color::RGBA(c.r, c.g, c.b, c.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_packing() {
        assert_eq!(RED.to_argb(), 0xFFFF0000);
        assert_eq!(Color::from_argb(0x80102030), Color::rgba(0x10, 0x20, 0x30, 0x80));
    }
}
