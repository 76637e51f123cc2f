//! Recording collaborators for exercising the zoom executor.

use glam::{DVec2, DVec3, IVec2, UVec2};

use crate::camera::{Camera, ClippingRange, Projection, SceneCamera};
use crate::geometry::ScreenRect;
use crate::viewport::{Scene, Viewport, ViewportId};

/// World units per display pixel in [`TestViewport::display_to_world`].
pub(crate) const WORLD_PER_PIXEL: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum CameraCall {
    Zoom(f64),
    Dolly(f64),
    SetClippingRange(ClippingRange),
}

/// [`SceneCamera`] that logs every zoom, dolly and clipping change.
#[derive(Debug, Clone)]
pub(crate) struct RecordingCamera {
    pub(crate) inner: SceneCamera,
    pub(crate) calls: Vec<CameraCall>,
}

impl Camera for RecordingCamera {
    fn position(&self) -> DVec3 {
        self.inner.position
    }

    fn set_position(&mut self, position: DVec3) {
        self.inner.position = position;
    }

    fn focal_point(&self) -> DVec3 {
        self.inner.focal_point
    }

    fn set_focal_point(&mut self, focal_point: DVec3) {
        self.inner.focal_point = focal_point;
    }

    fn clipping_range(&self) -> ClippingRange {
        self.inner.clipping_range
    }

    fn set_clipping_range(&mut self, range: ClippingRange) {
        self.calls.push(CameraCall::SetClippingRange(range));
        self.inner.clipping_range = range;
    }

    fn is_parallel_projection(&self) -> bool {
        self.inner.is_parallel_projection()
    }

    fn zoom(&mut self, factor: f64) {
        self.calls.push(CameraCall::Zoom(factor));
        self.inner.zoom(factor);
    }

    fn dolly(&mut self, factor: f64) {
        self.calls.push(CameraCall::Dolly(factor));
        self.inner.dolly(factor);
    }
}

/// Viewport with an affine display-to-world map:
/// `world = (display * WORLD_PER_PIXEL, 0)`.
#[derive(Debug, Clone)]
pub(crate) struct TestViewport {
    pub(crate) bounds: ScreenRect,
    pub(crate) aspect: f64,
    pub(crate) aspect_refreshes: usize,
    pub(crate) camera: RecordingCamera,
    pub(crate) box_zooms: Vec<(ScreenRect, f64)>,
}

impl TestViewport {
    pub(crate) fn new(width: i32, height: i32, projection: Projection) -> Self {
        let inner = SceneCamera {
            position: DVec3::new(0.0, 0.0, 20.0),
            clipping_range: ClippingRange::new(10.0, 30.0),
            projection,
            ..SceneCamera::default()
        };
        Self {
            bounds: ScreenRect::new(0, 0, width, height),
            aspect: 0.0,
            aspect_refreshes: 0,
            camera: RecordingCamera {
                inner,
                calls: Vec::new(),
            },
            box_zooms: Vec::new(),
        }
    }
}

impl Viewport for TestViewport {
    type Camera = RecordingCamera;

    fn origin_and_size(&self) -> ScreenRect {
        self.bounds
    }

    fn aspect(&self) -> f64 {
        self.aspect
    }

    fn recompute_aspect(&mut self) {
        self.aspect_refreshes += 1;
        self.aspect = f64::from(self.bounds.width) / f64::from(self.bounds.height);
    }

    fn display_to_world(&self, display: DVec2) -> DVec3 {
        (display * WORLD_PER_PIXEL).extend(0.0)
    }

    fn zoom_to_box_by_view_angle(&mut self, rect: ScreenRect, offset_ratio: f64) {
        self.box_zooms.push((rect, offset_ratio));
    }

    fn camera(&self) -> &RecordingCamera {
        &self.camera
    }

    fn camera_mut(&mut self) -> &mut RecordingCamera {
        &mut self.camera
    }
}

/// Scene of side-by-side viewports that counts render requests.
#[derive(Debug, Clone)]
pub(crate) struct TestScene<V> {
    pub(crate) viewports: Vec<V>,
    pub(crate) renders: usize,
}

impl<V> TestScene<V> {
    pub(crate) fn new(viewports: Vec<V>) -> Self {
        Self {
            viewports,
            renders: 0,
        }
    }
}

impl<V: Viewport> Scene for TestScene<V> {
    type Viewport = V;

    fn viewport_at(&self, point: IVec2) -> Option<ViewportId> {
        self.viewports
            .iter()
            .position(|v| {
                let b = v.origin_and_size();
                let rel = point - b.min();
                rel.x >= 0 && rel.y >= 0 && rel.x < b.width && rel.y < b.height
            })
            .map(ViewportId)
    }

    fn viewport_mut(&mut self, id: ViewportId) -> Option<&mut V> {
        self.viewports.get_mut(id.0)
    }

    fn render(&mut self) {
        self.renders += 1;
    }
}

/// 800x600 surface size used by the end-to-end scenarios.
pub(crate) const SURFACE: UVec2 = UVec2::new(800, 600);
