//! Renderer viewports and the scene that owns them.
//!
//! A [`Scene`] routes a display point to the [`Viewport`] under it and
//! performs full re-renders. Each viewport owns the [`Camera`] it renders
//! through and knows how to unproject display points.

/// Reference viewport backed by a [`SceneCamera`](crate::camera::SceneCamera).
pub mod scene_viewport;

use glam::{DVec2, DVec3, IVec2};

pub use scene_viewport::SceneViewport;

use crate::camera::Camera;
use crate::geometry::ScreenRect;

/// Index of a viewport within its [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewportId(pub usize);

/// A rectangular region of the render surface drawn through one camera.
pub trait Viewport {
    /// Camera type owned by this viewport.
    type Camera: Camera;

    /// Origin and size in display pixels.
    fn origin_and_size(&self) -> ScreenRect;

    /// Cached width / height ratio.
    fn aspect(&self) -> f64;

    /// Refresh the cached aspect ratio from the current size.
    fn recompute_aspect(&mut self);

    /// Unproject a display point onto the near plane in world space.
    fn display_to_world(&self, display: DVec2) -> DVec3;

    /// Narrow the camera's view angle so `rect` fills the viewport.
    ///
    /// `offset_ratio` scales the zoom factor; values below 1 leave a margin.
    fn zoom_to_box_by_view_angle(&mut self, rect: ScreenRect, offset_ratio: f64);

    /// The active camera.
    fn camera(&self) -> &Self::Camera;

    /// Mutable access to the active camera.
    fn camera_mut(&mut self) -> &mut Self::Camera;
}

/// The renderer collection behind a render surface.
pub trait Scene {
    /// Viewport type held by the scene.
    type Viewport: Viewport;

    /// Viewport containing `point`, if any.
    fn viewport_at(&self, point: IVec2) -> Option<ViewportId>;

    /// Look up a viewport for camera changes.
    fn viewport_mut(&mut self, id: ViewportId) -> Option<&mut Self::Viewport>;

    /// Re-render every viewport into the surface and present the result.
    fn render(&mut self);
}
