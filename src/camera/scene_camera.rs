use glam::{DMat4, DVec3};

use super::core::{Camera, ClippingRange, Projection};
use crate::options::CameraOptions;

const MIN_VIEW_ANGLE: f64 = 1e-8;
const MAX_VIEW_ANGLE: f64 = 179.0;

/// Look-at camera defined by eye position, focal point and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneCamera {
    /// Eye (camera) position in world space.
    pub position: DVec3,
    /// Look-at target position.
    pub focal_point: DVec3,
    /// Up direction vector.
    pub view_up: DVec3,
    /// Vertical field of view in degrees (perspective only).
    pub view_angle: f64,
    /// Half the viewport height in world units (parallel only).
    pub parallel_scale: f64,
    /// Near/far clipping distances.
    pub clipping_range: ClippingRange,
    /// Projection model.
    pub projection: Projection,
}

impl Default for SceneCamera {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default())
    }
}

impl SceneCamera {
    /// Camera at `(0, 0, 1)` looking at the origin, configured from
    /// `options`.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        Self {
            position: DVec3::Z,
            focal_point: DVec3::ZERO,
            view_up: DVec3::Y,
            view_angle: options.view_angle,
            parallel_scale: options.parallel_scale,
            clipping_range: ClippingRange::new(options.near, options.far),
            projection: if options.parallel_projection {
                Projection::Parallel
            } else {
                Projection::Perspective
            },
        }
    }

    /// Unit vector from the eye toward the focal point.
    #[must_use]
    pub fn direction_of_projection(&self) -> DVec3 {
        (self.focal_point - self.position).normalize_or(DVec3::NEG_Z)
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.position, self.focal_point, self.view_up)
    }

    /// View-to-clip matrix for a viewport of the given aspect ratio.
    ///
    /// Uses the `[0, 1]` depth range, so clip depth 0 is the near plane.
    #[must_use]
    pub fn projection_matrix(&self, aspect: f64) -> DMat4 {
        let ClippingRange { near, far } = self.clipping_range;
        match self.projection {
            Projection::Perspective => {
                DMat4::perspective_rh(self.view_angle.to_radians(), aspect, near, far)
            }
            Projection::Parallel => {
                let half_h = self.parallel_scale;
                let half_w = half_h * aspect;
                DMat4::orthographic_rh(-half_w, half_w, -half_h, half_h, near, far)
            }
        }
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self, aspect: f64) -> DMat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}

impl Camera for SceneCamera {
    fn position(&self) -> DVec3 {
        self.position
    }

    fn set_position(&mut self, position: DVec3) {
        self.position = position;
    }

    fn focal_point(&self) -> DVec3 {
        self.focal_point
    }

    fn set_focal_point(&mut self, focal_point: DVec3) {
        self.focal_point = focal_point;
    }

    fn clipping_range(&self) -> ClippingRange {
        self.clipping_range
    }

    fn set_clipping_range(&mut self, range: ClippingRange) {
        self.clipping_range = range;
    }

    fn is_parallel_projection(&self) -> bool {
        self.projection == Projection::Parallel
    }

    fn zoom(&mut self, factor: f64) {
        if !(factor.is_finite() && factor > 0.0) {
            return;
        }
        match self.projection {
            Projection::Parallel => self.parallel_scale /= factor,
            Projection::Perspective => {
                self.view_angle = (self.view_angle / factor).clamp(MIN_VIEW_ANGLE, MAX_VIEW_ANGLE);
            }
        }
    }

    fn dolly(&mut self, factor: f64) {
        if !(factor.is_finite() && factor > 0.0) {
            return;
        }
        let distance = self.distance() / factor;
        self.position = self.focal_point - self.direction_of_projection() * distance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: DVec3, b: DVec3) {
        assert!(a.abs_diff_eq(b, 1e-9), "{a} != {b}");
    }

    #[test]
    fn default_looks_down_negative_z() {
        let camera = SceneCamera::default();
        assert_close(camera.direction_of_projection(), DVec3::NEG_Z);
        assert_eq!(camera.distance(), 1.0);
        assert!(!camera.is_parallel_projection());
    }

    #[test]
    fn zoom_parallel_shrinks_scale() {
        let mut camera = SceneCamera {
            projection: Projection::Parallel,
            parallel_scale: 8.0,
            ..SceneCamera::default()
        };
        camera.zoom(4.0);
        assert_eq!(camera.parallel_scale, 2.0);
        assert_eq!(camera.position, DVec3::Z);
    }

    #[test]
    fn zoom_perspective_narrows_view_angle() {
        let mut camera = SceneCamera::default();
        camera.zoom(2.0);
        assert_eq!(camera.view_angle, 15.0);
        camera.zoom(0.0);
        camera.zoom(f64::NAN);
        assert_eq!(camera.view_angle, 15.0);
    }

    #[test]
    fn dolly_moves_toward_focal_point() {
        let mut camera = SceneCamera {
            position: DVec3::new(0.0, 0.0, 20.0),
            ..SceneCamera::default()
        };
        camera.dolly(4.0);
        assert_close(camera.position, DVec3::new(0.0, 0.0, 5.0));
        assert_eq!(camera.focal_point, DVec3::ZERO);

        camera.dolly(0.5);
        assert_close(camera.position, DVec3::new(0.0, 0.0, 10.0));
    }

    #[test]
    fn near_plane_maps_to_depth_zero() {
        for projection in [Projection::Perspective, Projection::Parallel] {
            let camera = SceneCamera {
                position: DVec3::new(0.0, 0.0, 10.0),
                clipping_range: ClippingRange::new(1.0, 100.0),
                projection,
                ..SceneCamera::default()
            };
            let near_center = camera.build_matrix(1.5).project_point3(DVec3::new(0.0, 0.0, 9.0));
            assert!(near_center.z.abs() < 1e-9, "{projection:?}: {near_center}");
        }
    }
}
