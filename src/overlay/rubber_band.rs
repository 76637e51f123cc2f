use glam::{IVec2, UVec2};

use super::snapshot::PixelSnapshot;
use crate::geometry::ScreenRect;
use crate::surface::{RenderSurface, BYTES_PER_PIXEL};

/// Clamp a pointer position to the surface's pixel grid.
#[must_use]
pub fn clamp_to_surface(point: IVec2, size: UVec2) -> IVec2 {
    let max = (size.as_ivec2() - IVec2::ONE).max(IVec2::ZERO);
    point.clamp(IVec2::ZERO, max)
}

/// Copy of `snapshot` with the outline of `rect` inverted.
///
/// The snapshot itself is left untouched.
#[must_use]
pub fn draw_rubber_band(snapshot: &PixelSnapshot, rect: ScreenRect) -> Vec<u8> {
    let mut pixels = snapshot.pixels().to_vec();
    invert_outline(&mut pixels, snapshot.size(), rect);
    pixels
}

/// Draw the rubber band over `snapshot` and present it on `surface`.
pub fn present_rubber_band(
    surface: &mut impl RenderSurface,
    snapshot: &PixelSnapshot,
    rect: ScreenRect,
) {
    let frame = draw_rubber_band(snapshot, rect);
    let full = surface.full_rect();
    surface.write_pixels(full, &frame);
    surface.present();
}

/// XOR every outline pixel of `rect` with `0xFF` in an RGB buffer.
///
/// Each outline pixel is inverted exactly once, so applying this twice
/// restores the buffer. Edges outside the buffer are skipped and the
/// remaining spans are clamped to it.
pub fn invert_outline(pixels: &mut [u8], size: UVec2, rect: ScreenRect) {
    let width = size.x as i32;
    let height = size.y as i32;
    if width == 0 || height == 0 || pixels.len() != (width * height) as usize * BYTES_PER_PIXEL {
        return;
    }
    let rgb: &mut [[u8; 3]] = bytemuck::cast_slice_mut(pixels);

    let min = rect.min();
    let max = rect.max();
    let clamped_min = min.max(IVec2::ZERO);
    let clamped_max = max.min(IVec2::new(width - 1, height - 1));

    let mut invert = |x: i32, y: i32| {
        for channel in &mut rgb[(y * width + x) as usize] {
            *channel ^= 0xFF;
        }
    };

    // Horizontal edges own the corners.
    for y in edges(min.y, max.y) {
        if (0..height).contains(&y) {
            for x in clamped_min.x..=clamped_max.x {
                invert(x, y);
            }
        }
    }

    let inner_min_y = (min.y + 1).max(0);
    let inner_max_y = (max.y - 1).min(height - 1);
    for x in edges(min.x, max.x) {
        if (0..width).contains(&x) {
            for y in inner_min_y..=inner_max_y {
                invert(x, y);
            }
        }
    }
}

/// One or two edge coordinates; a collapsed rectangle yields a single line.
fn edges(lo: i32, hi: i32) -> impl Iterator<Item = i32> {
    std::iter::once(lo).chain((hi != lo).then_some(hi))
}
