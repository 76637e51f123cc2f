use glam::{DVec2, DVec3, IVec2, UVec2};

use super::Viewport;
use crate::camera::{Camera, SceneCamera};
use crate::geometry::ScreenRect;

/// Viewport with a cached aspect ratio and its own [`SceneCamera`].
#[derive(Debug, Clone, PartialEq)]
pub struct SceneViewport {
    origin: IVec2,
    size: UVec2,
    aspect: f64,
    /// Camera this viewport renders through.
    pub camera: SceneCamera,
}

impl SceneViewport {
    /// Create a viewport at `origin` with `size` pixels.
    #[must_use]
    pub fn new(origin: IVec2, size: UVec2, camera: SceneCamera) -> Self {
        let mut viewport = Self {
            origin,
            size,
            aspect: 1.0,
            camera,
        };
        viewport.recompute_aspect();
        viewport
    }

    /// Move or resize the viewport. The aspect ratio is not refreshed until
    /// [`Viewport::recompute_aspect`] runs.
    pub fn set_origin_and_size(&mut self, origin: IVec2, size: UVec2) {
        self.origin = origin;
        self.size = size;
    }

    /// Whether a display point falls inside this viewport.
    #[must_use]
    pub fn contains(&self, point: IVec2) -> bool {
        let rel = point - self.origin;
        rel.cmpge(IVec2::ZERO).all() && rel.cmplt(self.size.as_ivec2()).all()
    }
}

impl Viewport for SceneViewport {
    type Camera = SceneCamera;

    fn origin_and_size(&self) -> ScreenRect {
        ScreenRect::new(self.origin.x, self.origin.y, self.size.x as i32, self.size.y as i32)
    }

    fn aspect(&self) -> f64 {
        self.aspect
    }

    fn recompute_aspect(&mut self) {
        if self.size.y > 0 {
            self.aspect = f64::from(self.size.x) / f64::from(self.size.y);
        }
    }

    fn display_to_world(&self, display: DVec2) -> DVec3 {
        if self.size.x == 0 || self.size.y == 0 {
            return self.camera.focal_point();
        }
        let ndc = (display - self.origin.as_dvec2()) / self.size.as_dvec2() * 2.0 - DVec2::ONE;
        let inverse = self.camera.build_matrix(self.aspect).inverse();
        inverse.project_point3(ndc.extend(0.0))
    }

    fn zoom_to_box_by_view_angle(&mut self, rect: ScreenRect, offset_ratio: f64) {
        if rect.width <= 0 && rect.height <= 0 {
            return;
        }
        let size = self.size.as_dvec2();
        let by_width = size.x / f64::from(rect.width);
        let by_height = size.y / f64::from(rect.height);
        self.camera.zoom(by_width.min(by_height) * offset_ratio);
    }

    fn camera(&self) -> &SceneCamera {
        &self.camera
    }

    fn camera_mut(&mut self) -> &mut SceneCamera {
        &mut self.camera
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{ClippingRange, Projection};

    fn ortho_viewport() -> SceneViewport {
        let camera = SceneCamera {
            position: DVec3::new(0.0, 0.0, 10.0),
            parallel_scale: 300.0,
            clipping_range: ClippingRange::new(1.0, 100.0),
            projection: Projection::Parallel,
            ..SceneCamera::default()
        };
        SceneViewport::new(IVec2::ZERO, UVec2::new(800, 600), camera)
    }

    #[test]
    fn aspect_is_cached_until_recomputed() {
        let mut viewport = ortho_viewport();
        assert_eq!(viewport.aspect(), 800.0 / 600.0);

        viewport.set_origin_and_size(IVec2::ZERO, UVec2::new(600, 600));
        assert_eq!(viewport.aspect(), 800.0 / 600.0);
        viewport.recompute_aspect();
        assert_eq!(viewport.aspect(), 1.0);
    }

    #[test]
    fn contains_uses_half_open_bounds() {
        let viewport =
            SceneViewport::new(IVec2::new(100, 50), UVec2::new(10, 10), SceneCamera::default());
        assert!(viewport.contains(IVec2::new(100, 50)));
        assert!(viewport.contains(IVec2::new(109, 59)));
        assert!(!viewport.contains(IVec2::new(110, 55)));
        assert!(!viewport.contains(IVec2::new(99, 55)));
    }

    #[test]
    fn unprojects_parallel_view_onto_near_plane() {
        let viewport = ortho_viewport();
        let center = viewport.display_to_world(DVec2::new(400.0, 300.0));
        assert!(center.abs_diff_eq(DVec3::new(0.0, 0.0, 9.0), 1e-9), "{center}");

        let corner = viewport.display_to_world(DVec2::new(200.0, 250.0));
        assert!(corner.abs_diff_eq(DVec3::new(-200.0, -50.0, 9.0), 1e-9), "{corner}");
    }

    #[test]
    fn unprojection_respects_origin() {
        let mut viewport = ortho_viewport();
        viewport.set_origin_and_size(IVec2::new(800, 0), UVec2::new(800, 600));
        let center = viewport.display_to_world(DVec2::new(1200.0, 300.0));
        assert!(center.abs_diff_eq(DVec3::new(0.0, 0.0, 9.0), 1e-9), "{center}");
    }

    #[test]
    fn view_angle_box_zoom_uses_tighter_axis() {
        let mut viewport =
            SceneViewport::new(IVec2::ZERO, UVec2::new(800, 600), SceneCamera::default());
        viewport.zoom_to_box_by_view_angle(ScreenRect::new(100, 100, 200, 300), 1.0);
        // min(800 / 200, 600 / 300) = 2
        assert_eq!(viewport.camera.view_angle, 15.0);

        viewport.zoom_to_box_by_view_angle(ScreenRect::new(0, 0, 400, 0), 0.5);
        // min(2, inf) * 0.5 = 1
        assert_eq!(viewport.camera.view_angle, 15.0);
    }
}
