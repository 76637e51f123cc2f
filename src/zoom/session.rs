use glam::IVec2;

use crate::geometry::{adjust_box, ScreenRect, ZoomPolicy};
use crate::input::Modifiers;
use crate::options::ZoomOptions;
use crate::overlay::PixelSnapshot;
use crate::viewport::ViewportId;

/// Transient state of one rubber-band drag.
///
/// Owns the framebuffer snapshot for the lifetime of the gesture; dropping
/// the session frees it. Options are captured at drag start so changes made
/// mid-drag only affect the next gesture.
#[derive(Debug, Clone)]
pub struct DragSession {
    viewport: ViewportId,
    start: IVec2,
    end: IVec2,
    snapshot: PixelSnapshot,
    options: ZoomOptions,
    aspect: f64,
    overlay_presented: bool,
}

impl DragSession {
    /// Begin a session anchored at `start`.
    #[must_use]
    pub fn new(
        viewport: ViewportId,
        start: IVec2,
        snapshot: PixelSnapshot,
        options: ZoomOptions,
        aspect: f64,
    ) -> Self {
        Self {
            viewport,
            start,
            end: start,
            snapshot,
            options,
            aspect,
            overlay_presented: false,
        }
    }

    /// Viewport the drag started in.
    #[must_use]
    pub fn viewport(&self) -> ViewportId {
        self.viewport
    }

    /// Press point.
    #[must_use]
    pub fn start(&self) -> IVec2 {
        self.start
    }

    /// Latest clamped pointer position.
    #[must_use]
    pub fn end(&self) -> IVec2 {
        self.end
    }

    /// Framebuffer contents captured at drag start.
    #[must_use]
    pub fn snapshot(&self) -> &PixelSnapshot {
        &self.snapshot
    }

    /// Options captured at drag start.
    #[must_use]
    pub fn options(&self) -> &ZoomOptions {
        &self.options
    }

    /// Policy flags captured at drag start.
    #[must_use]
    pub fn policy(&self) -> ZoomPolicy {
        self.options.policy()
    }

    /// Viewport aspect ratio computed at drag start.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        self.aspect
    }

    /// Whether any overlay frame has been presented.
    #[must_use]
    pub fn overlay_presented(&self) -> bool {
        self.overlay_presented
    }

    /// Whether the pointer is back where it was pressed.
    #[must_use]
    pub fn is_click(&self) -> bool {
        self.start == self.end
    }

    pub(crate) fn set_end(&mut self, end: IVec2) {
        self.end = end;
    }

    pub(crate) fn mark_overlay_presented(&mut self) {
        self.overlay_presented = true;
    }

    /// Start and end after aspect locking and center-at-start, with the
    /// held `modifiers` evaluated now.
    #[must_use]
    pub fn adjusted(&self, modifiers: Modifiers) -> (IVec2, IVec2) {
        let modifier_active = self.options.center_toggle.is_active(modifiers);
        adjust_box(
            self.start,
            self.end,
            self.policy(),
            Some(self.aspect),
            modifier_active,
        )
    }

    /// Normalized rectangle of [`adjusted`](Self::adjusted).
    #[must_use]
    pub fn adjusted_rect(&self, modifiers: Modifiers) -> ScreenRect {
        let (start, end) = self.adjusted(modifiers);
        ScreenRect::from_corners(start, end)
    }
}

#[cfg(test)]
mod tests {
    use glam::UVec2;

    use super::*;
    use crate::options::CenterToggle;

    fn session(options: ZoomOptions) -> DragSession {
        let snapshot = PixelSnapshot::from_pixels(UVec2::new(2, 2), vec![0; 12]).unwrap();
        DragSession::new(ViewportId(0), IVec2::new(100, 100), snapshot, options, 2.0)
    }

    #[test]
    fn starts_as_click() {
        let s = session(ZoomOptions::default());
        assert!(s.is_click());
        assert_eq!(s.end(), s.start());
        assert!(!s.overlay_presented());
    }

    #[test]
    fn adjusted_rect_uses_captured_aspect() {
        let mut s = session(ZoomOptions {
            lock_aspect_to_viewport: true,
            ..ZoomOptions::default()
        });
        s.set_end(IVec2::new(300, 110));
        assert_eq!(s.adjusted_rect(Modifiers::default()), ScreenRect::new(100, 100, 200, 100));
    }

    #[test]
    fn modifier_follows_configured_toggle() {
        let mut s = session(ZoomOptions {
            center_toggle: CenterToggle::Control,
            ..ZoomOptions::default()
        });
        s.set_end(IVec2::new(110, 120));

        let shift = Modifiers {
            shift: true,
            control: false,
        };
        let control = Modifiers {
            shift: false,
            control: true,
        };
        assert_eq!(s.adjusted_rect(shift), ScreenRect::new(100, 100, 10, 20));
        assert_eq!(s.adjusted_rect(control), ScreenRect::new(90, 80, 20, 40));
    }
}
