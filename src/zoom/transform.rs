use crate::camera::{Camera, ClippingRange};
use crate::geometry::{ScreenRect, ZoomPolicy};
use crate::viewport::Viewport;

/// Far plane used when a dolly pushes it behind the camera.
const MIN_FAR_PLANE: f64 = 0.001;
/// Smallest allowed near / far ratio.
const NEAR_FAR_RATIO: f64 = 0.001;

/// How a completed drag moves the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomMode {
    /// Re-center, then scale the parallel projection.
    Parallel,
    /// Re-center, then move a perspective camera toward the focal point.
    Dolly,
    /// Re-aim at the box center and narrow the perspective view angle.
    ViewAngle,
}

impl ZoomMode {
    /// Pick the strategy for `camera` under `policy`.
    #[must_use]
    pub fn select(camera: &impl Camera, policy: ZoomPolicy) -> Self {
        if camera.is_parallel_projection() {
            Self::Parallel
        } else if policy.use_dolly_for_perspective {
            Self::Dolly
        } else {
            Self::ViewAngle
        }
    }
}

/// Magnification that makes `rect` fill `viewport` along the rectangle's
/// longer axis (height on ties).
#[must_use]
pub fn zoom_factor(rect: ScreenRect, viewport: ScreenRect) -> f64 {
    if rect.width > rect.height {
        f64::from(viewport.width) / f64::from(rect.width)
    } else {
        f64::from(viewport.height) / f64::from(rect.height)
    }
}

/// Shift both clipping planes by the distance a dolly moved the camera,
/// then keep the far plane in front of the camera and the near plane off
/// the eye.
#[must_use]
pub fn corrected_clipping_range(range: ClippingRange, delta_distance: f64) -> ClippingRange {
    let mut near = range.near - delta_distance;
    let mut far = range.far - delta_distance;
    if far <= 0.0 {
        far = MIN_FAR_PLANE;
    }
    if near < NEAR_FAR_RATIO * far {
        near = NEAR_FAR_RATIO * far;
    }
    ClippingRange::new(near, far)
}

/// Re-center the camera on `rect`, then zoom (parallel) or dolly
/// (perspective) so it fills the viewport. Returns the zoom factor.
pub fn zoom_traditional(viewport: &mut impl Viewport, rect: ScreenRect) -> f64 {
    let bounds = viewport.origin_and_size();
    let translation =
        viewport.display_to_world(rect.center()) - viewport.display_to_world(bounds.center());

    let camera = viewport.camera_mut();
    camera.set_position(camera.position() + translation);
    camera.set_focal_point(camera.focal_point() + translation);

    let factor = zoom_factor(rect, bounds);
    if camera.is_parallel_projection() {
        camera.zoom(factor);
    } else {
        let initial_distance = camera.distance();
        camera.dolly(factor);
        let delta_distance = initial_distance - camera.distance();
        let range = corrected_clipping_range(camera.clipping_range(), delta_distance);
        camera.set_clipping_range(range);
    }
    factor
}

/// Aim the camera at the center of `rect` and let the viewport narrow the
/// view angle until `rect` fills it. The camera position does not move.
pub fn zoom_view_angle(viewport: &mut impl Viewport, rect: ScreenRect, offset_ratio: f64) {
    let focal_point = viewport.display_to_world(rect.center());
    viewport.camera_mut().set_focal_point(focal_point);
    viewport.zoom_to_box_by_view_angle(rect, offset_ratio);
}

/// Move the viewport's camera so the adjusted `rect` fills the viewport.
pub fn apply_zoom(
    viewport: &mut impl Viewport,
    rect: ScreenRect,
    policy: ZoomPolicy,
    offset_ratio: f64,
) -> ZoomMode {
    let mode = ZoomMode::select(viewport.camera(), policy);
    match mode {
        ZoomMode::Parallel | ZoomMode::Dolly => {
            let factor = zoom_traditional(viewport, rect);
            log::debug!("{mode:?} zoom to {rect:?}, factor {factor:.3}");
        }
        ZoomMode::ViewAngle => {
            zoom_view_angle(viewport, rect, offset_ratio);
            log::debug!("view-angle zoom to {rect:?}");
        }
    }
    mode
}
