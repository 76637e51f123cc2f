use glam::DVec3;

/// Near/far clipping distances measured from the camera along its view
/// direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClippingRange {
    /// Near plane distance.
    pub near: f64,
    /// Far plane distance.
    pub far: f64,
}

impl ClippingRange {
    /// Create a clipping range.
    #[must_use]
    pub const fn new(near: f64, far: f64) -> Self {
        Self { near, far }
    }
}

/// Camera projection model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Projection {
    /// Pinhole perspective with a vertical view angle.
    #[default]
    Perspective,
    /// Orthographic projection with a parallel scale.
    Parallel,
}

/// The camera a viewport renders through.
///
/// `zoom` scales the projection without moving the camera (parallel scale
/// or view angle); `dolly` moves the position toward the focal point.
pub trait Camera {
    /// Eye position in world space.
    fn position(&self) -> DVec3;
    /// Move the eye without changing the focal point.
    fn set_position(&mut self, position: DVec3);
    /// Look-at point in world space.
    fn focal_point(&self) -> DVec3;
    /// Move the look-at point without changing the eye.
    fn set_focal_point(&mut self, focal_point: DVec3);
    /// Current near/far clipping range.
    fn clipping_range(&self) -> ClippingRange;
    /// Replace the clipping range.
    fn set_clipping_range(&mut self, range: ClippingRange);
    /// Whether the camera uses parallel (orthographic) projection.
    fn is_parallel_projection(&self) -> bool;
    /// Magnify the projection by `factor` (> 1 zooms in).
    fn zoom(&mut self, factor: f64);
    /// Divide the eye-to-focal distance by `factor` (> 1 moves closer).
    fn dolly(&mut self, factor: f64);

    /// Distance from the eye to the focal point.
    fn distance(&self) -> f64 {
        self.position().distance(self.focal_point())
    }
}
