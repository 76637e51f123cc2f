use glam::UVec2;

use crate::surface::{RenderSurface, BYTES_PER_PIXEL};

/// Full-surface RGB readback taken at drag start.
///
/// The buffer length always equals `width * height * 3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelSnapshot {
    size: UVec2,
    pixels: Vec<u8>,
}

impl PixelSnapshot {
    /// Read back the whole surface.
    ///
    /// Returns `None` when the surface hands back a buffer that does not
    /// match its reported size.
    pub fn capture(surface: &mut impl RenderSurface) -> Option<Self> {
        let size = surface.size();
        let full = surface.full_rect();
        let pixels = surface.read_pixels(full);
        let snapshot = Self::from_pixels(size, pixels);
        if snapshot.is_none() {
            log::warn!(
                "surface readback does not match its {}x{} size, ignoring",
                size.x,
                size.y
            );
        }
        snapshot
    }

    /// Wrap an existing buffer, checking its length against `size`.
    #[must_use]
    pub fn from_pixels(size: UVec2, pixels: Vec<u8>) -> Option<Self> {
        let expected = size.x as usize * size.y as usize * BYTES_PER_PIXEL;
        (pixels.len() == expected).then_some(Self { size, pixels })
    }

    /// Snapshot size in pixels.
    #[must_use]
    pub fn size(&self) -> UVec2 {
        self.size
    }

    /// Captured pixel data.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Whether the snapshot still describes a surface of `size`.
    #[must_use]
    pub fn matches(&self, size: UVec2) -> bool {
        self.size == size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::SoftwareSurface;

    #[test]
    fn capture_copies_surface() {
        let mut surface = SoftwareSurface::from_fn(5, 4, |x, y| [x as u8, y as u8, 0]);
        let snapshot = PixelSnapshot::capture(&mut surface).unwrap();
        assert_eq!(snapshot.size(), UVec2::new(5, 4));
        assert_eq!(snapshot.pixels(), surface.pixels());
        assert!(snapshot.matches(UVec2::new(5, 4)));
        assert!(!snapshot.matches(UVec2::new(4, 5)));
    }

    #[test]
    fn from_pixels_rejects_wrong_length() {
        assert!(PixelSnapshot::from_pixels(UVec2::new(2, 2), vec![0; 11]).is_none());
        assert!(PixelSnapshot::from_pixels(UVec2::new(2, 2), vec![0; 12]).is_some());
    }
}
