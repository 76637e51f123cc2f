//! Live drag feedback drawn straight into pixel buffers.
//!
//! A [`PixelSnapshot`] of the rendered scene is captured when a drag starts.
//! Every pointer move copies it, inverts the rectangle outline in the copy
//! and presents that copy, so the scene is never re-rendered mid-drag and
//! the snapshot stays pristine for the next frame.

/// XOR rectangle outline drawing and presentation.
pub mod rubber_band;
/// Captured framebuffer contents.
pub mod snapshot;

pub use rubber_band::{clamp_to_surface, draw_rubber_band, invert_outline, present_rubber_band};
pub use snapshot::PixelSnapshot;
