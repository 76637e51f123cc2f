//! The zoom executor: drag lifecycle and camera transforms.
//!
//! [`RubberBandZoom`] is a standalone `Idle -> Dragging -> Idle` state
//! machine. It owns the [`DragSession`] of the active gesture, draws the
//! overlay on every move and applies one of the [`ZoomMode`] transforms on
//! release.

/// Drag state machine and event dispatch.
pub mod interactor;
/// State of one press-move-release gesture.
pub mod session;
/// Screen-rectangle to camera-transform math.
pub mod transform;

#[cfg(test)]
pub(crate) mod test_support;

pub use interactor::{ReleaseOutcome, RubberBandZoom};
pub use session::DragSession;
pub use transform::{
    apply_zoom, corrected_clipping_range, zoom_factor, zoom_traditional,
    zoom_view_angle, ZoomMode,
};
