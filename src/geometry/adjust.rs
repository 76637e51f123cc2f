use glam::{I64Vec2, IVec2};

/// Policy flags that shape the drag box and the zoom strategy.
///
/// Read once when a drag starts and held by the session until it ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ZoomPolicy {
    /// Force the box to the viewport's aspect ratio.
    pub lock_aspect_to_viewport: bool,
    /// Grow the box symmetrically around the press point.
    pub center_at_start_position: bool,
    /// Dolly perspective cameras instead of narrowing the view angle.
    pub use_dolly_for_perspective: bool,
}

impl Default for ZoomPolicy {
    fn default() -> Self {
        Self {
            lock_aspect_to_viewport: false,
            center_at_start_position: false,
            use_dolly_for_perspective: true,
        }
    }
}

impl ZoomPolicy {
    /// Effective center-at-start flag; a held modifier inverts the setting.
    #[must_use]
    pub fn center_at_start(self, modifier_active: bool) -> bool {
        self.center_at_start_position ^ modifier_active
    }
}

/// Apply aspect locking and center-at-start to a raw drag.
///
/// Aspect locking only ever moves `end`, and always outward along one axis,
/// so the pointer stays inside the adjusted box. `aspect` is width / height
/// of the target viewport; `None` or a non-positive value skips locking.
/// Coordinates pushed past the `i32` range by extreme ratios saturate.
#[must_use]
pub fn adjust_box(
    start: IVec2,
    end: IVec2,
    policy: ZoomPolicy,
    aspect: Option<f64>,
    modifier_active: bool,
) -> (IVec2, IVec2) {
    let mut end = end;
    if policy.lock_aspect_to_viewport {
        if let Some(aspect) = aspect.filter(|a| a.is_finite() && *a > 0.0) {
            end = lock_aspect(start, end, aspect);
        }
    }

    let mut start = start;
    if policy.center_at_start(modifier_active) {
        let (s, e) = (start.as_i64vec2(), end.as_i64vec2());
        start = saturate(s * 2 - e);
    }
    (start, end)
}

fn lock_aspect(start: IVec2, end: IVec2, aspect: f64) -> IVec2 {
    let start = start.as_i64vec2();
    let mut delta = end.as_i64vec2() - start;

    let target_dy = round_half_up(delta.x.abs() as f64 / aspect);
    if delta.y.abs() > target_dy {
        let target_dx = round_half_up(aspect * delta.y.abs() as f64);
        delta.x = if delta.x < 0 { -target_dx } else { target_dx };
    } else {
        delta.y = if delta.y < 0 { -target_dy } else { target_dy };
    }
    saturate(start.saturating_add(delta))
}

/// Round half up; `as` saturates out-of-range values.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5) as i64
}

fn saturate(v: I64Vec2) -> IVec2 {
    v.clamp(I64Vec2::splat(i64::from(i32::MIN)), I64Vec2::splat(i64::from(i32::MAX)))
        .as_ivec2()
}
