//! Screen-space rectangle geometry for the rubber-band gesture.
//!
//! All coordinates are display pixels with the origin at the bottom-left
//! corner of the render surface and `y` increasing upward.

/// Aspect-lock and center-at-start adjustment of a drag box.
pub mod adjust;
/// Normalized screen rectangles.
pub mod rect;

pub use adjust::{adjust_box, ZoomPolicy};
pub use rect::ScreenRect;
