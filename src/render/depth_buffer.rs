//! Per-pixel nearest-depth tracking.
//!
//! The buffer keeps the smallest projected depth seen at each pixel. Line
//! drawing records into it but does not test against it yet, so overlapping
//! wireframes are not occluded.

/// Depth value of an untouched pixel: as far as the projection reaches.
pub const FAR_DEPTH: f32 = 1.0;

/// A width x height grid of depths, row-major with (0, 0) at the top-left.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthBuffer {
    depths: Vec<f32>,
    width: u32,
    height: u32,
}

impl DepthBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            depths: vec![FAR_DEPTH; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Resets every pixel to [`FAR_DEPTH`].
    pub fn clear(&mut self) {
        self.depths.fill(FAR_DEPTH);
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| (y * self.width + x) as usize)
    }

    /// Depth at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        self.index(x, y).map(|i| self.depths[i])
    }

    /// Stores `depth` at (x, y) if it is nearer than what is already there.
    ///
    /// Returns `true` when the value was written. Out-of-bounds coordinates and
    /// NaN depths are ignored.
    #[inline]
    pub fn record(&mut self, x: u32, y: u32, depth: f32) -> bool {
        match self.index(x, y) {
            Some(i) if depth < self.depths[i] => {
                self.depths[i] = depth;
                true
            }
            _ => false,
        }
    }

    /// Number of pixels holding something nearer than [`FAR_DEPTH`].
    pub fn touched(&self) -> usize {
        self.depths.iter().filter(|&&d| d < FAR_DEPTH).count()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.depths
    }
}
