//! Camera system consumed by the zoom executor.
//!
//! [`Camera`] is the interface the gesture drives; [`SceneCamera`] is a
//! reference implementation with VTK-style zoom and dolly semantics.

/// Camera trait, clipping range and projection mode.
pub mod core;
/// Reference look-at camera with perspective and parallel projection.
pub mod scene_camera;

pub use self::core::{Camera, ClippingRange, Projection};
pub use scene_camera::SceneCamera;
