//! Render surface abstraction: pixel readback, pixel upload, presentation.
//!
//! Pixel buffers are tightly packed RGB, three bytes per pixel, row-major
//! with the bottom row first (display coordinates).

use glam::{IVec2, UVec2};

use crate::geometry::ScreenRect;

/// Bytes per pixel in every buffer exchanged with a [`RenderSurface`].
pub const BYTES_PER_PIXEL: usize = 3;

/// The framebuffer the scene is rendered into.
///
/// Implementations wrap a window's back buffer, an offscreen texture, or an
/// in-memory image like [`SoftwareSurface`].
pub trait RenderSurface {
    /// Surface size in pixels.
    fn size(&self) -> UVec2;

    /// Read the pixels covered by `rect` (clipped to the surface).
    fn read_pixels(&mut self, rect: ScreenRect) -> Vec<u8>;

    /// Upload `pixels` into `rect` without touching the scene.
    fn write_pixels(&mut self, rect: ScreenRect, pixels: &[u8]);

    /// Present the current contents, e.g. swap buffers.
    fn present(&mut self);

    /// Rectangle covering the whole surface.
    fn full_rect(&self) -> ScreenRect {
        let size = self.size();
        ScreenRect::new(0, 0, size.x as i32, size.y as i32)
    }
}

/// In-memory RGB framebuffer.
///
/// Useful for headless embedding and for driving the gesture in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoftwareSurface {
    size: UVec2,
    pixels: Vec<u8>,
    presented_frames: u64,
}

impl SoftwareSurface {
    /// Create a black surface.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: UVec2::new(width, height),
            pixels: vec![0; buffer_len(width, height)],
            presented_frames: 0,
        }
    }

    /// Create a surface whose pixels are produced by `shade(x, y)`.
    #[must_use]
    pub fn from_fn(width: u32, height: u32, mut shade: impl FnMut(u32, u32) -> [u8; 3]) -> Self {
        let mut surface = Self::new(width, height);
        let rgb: &mut [[u8; 3]] = bytemuck::cast_slice_mut(&mut surface.pixels);
        for (i, px) in rgb.iter_mut().enumerate() {
            let i = i as u32;
            *px = shade(i % width, i / width);
        }
        surface
    }

    /// Raw pixel storage.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Color of a single pixel, or `None` outside the surface.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.size.x || y >= self.size.y {
            return None;
        }
        let i = (y * self.size.x + x) as usize * BYTES_PER_PIXEL;
        Some([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]])
    }

    /// Number of [`RenderSurface::present`] calls so far.
    #[must_use]
    pub fn presented_frames(&self) -> u64 {
        self.presented_frames
    }

    /// Resize, discarding the contents.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = UVec2::new(width, height);
        self.pixels = vec![0; buffer_len(width, height)];
    }

    fn clip(&self, rect: ScreenRect) -> Option<(UVec2, UVec2)> {
        let min = rect.min().max(IVec2::ZERO);
        let max = rect.max().min(self.size.as_ivec2());
        if min.x >= max.x || min.y >= max.y {
            return None;
        }
        Some((min.as_uvec2(), max.as_uvec2()))
    }

    fn row_range(&self, y: u32, x0: u32, x1: u32) -> std::ops::Range<usize> {
        let start = (y * self.size.x + x0) as usize * BYTES_PER_PIXEL;
        start..start + (x1 - x0) as usize * BYTES_PER_PIXEL
    }
}

fn buffer_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

impl RenderSurface for SoftwareSurface {
    fn size(&self) -> UVec2 {
        self.size
    }

    fn read_pixels(&mut self, rect: ScreenRect) -> Vec<u8> {
        let Some((min, max)) = self.clip(rect) else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(buffer_len(max.x - min.x, max.y - min.y));
        for y in min.y..max.y {
            out.extend_from_slice(&self.pixels[self.row_range(y, min.x, max.x)]);
        }
        out
    }

    fn write_pixels(&mut self, rect: ScreenRect, pixels: &[u8]) {
        let Some((min, max)) = self.clip(rect) else {
            return;
        };
        let row_bytes = (max.x - min.x) as usize * BYTES_PER_PIXEL;
        for (row, y) in pixels.chunks_exact(row_bytes).zip(min.y..max.y) {
            let range = self.row_range(y, min.x, max.x);
            self.pixels[range].copy_from_slice(row);
        }
    }

    fn present(&mut self) {
        self.presented_frames += 1;
    }
}
