//! Rubber-band drag state machine.
//!
//! Owns the active [`DragSession`] and the cursor/modifier state needed to
//! interpret raw events. It is the only thing that sits between input events
//! and the camera transforms in [`transform`](super::transform).

use glam::{IVec2, UVec2};

use super::session::DragSession;
use super::transform::{apply_zoom, ZoomMode};
use crate::geometry::ScreenRect;
use crate::input::{InputEvent, Modifiers, MouseButton};
use crate::options::ZoomOptions;
use crate::overlay::{clamp_to_surface, present_rubber_band, PixelSnapshot};
use crate::surface::RenderSurface;
use crate::viewport::{Scene, Viewport};

/// What a button release did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// No drag was active.
    NotDragging,
    /// The pointer ended where it was pressed; the camera is untouched.
    Click,
    /// The drag's viewport disappeared; the camera is untouched.
    Cancelled,
    /// The camera was moved so `rect` fills the viewport.
    Zoomed {
        /// Adjusted rectangle the zoom targeted.
        rect: ScreenRect,
        /// Strategy that was applied.
        mode: ZoomMode,
    },
}

#[derive(Debug, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Rubber-band zoom interaction.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(ReleaseOutcome::Zoomed { mode, .. }) =
///     zoom.handle_event(event, &mut surface, &mut scene)
/// {
///     log::info!("zoomed with {mode:?}");
/// }
/// ```
#[derive(Debug, Default)]
pub struct RubberBandZoom {
    /// Options applied to the next drag.
    options: ZoomOptions,
    /// Idle, or the active drag session.
    state: DragState,
    /// Currently held modifier keys.
    modifiers: Modifiers,
    /// Last cursor position in display coordinates.
    cursor: IVec2,
}

impl RubberBandZoom {
    /// Create an idle interaction with the given options.
    #[must_use]
    pub fn new(options: ZoomOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Options applied to the next drag.
    #[must_use]
    pub fn options(&self) -> &ZoomOptions {
        &self.options
    }

    /// Replace the options. An active drag keeps the ones it started with.
    pub fn set_options(&mut self, options: ZoomOptions) {
        self.options = options;
    }

    /// Currently held modifier keys.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Update the held modifier keys.
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    /// Last cursor position in display coordinates.
    #[must_use]
    pub fn cursor(&self) -> IVec2 {
        self.cursor
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// The active drag session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging(session) => Some(session),
        }
    }

    /// Primary button pressed at `point` (display coordinates).
    ///
    /// Starts a drag when a viewport lies under the point: the surface is
    /// captured and the viewport's aspect ratio refreshed. Returns whether a
    /// drag started.
    pub fn on_button_down(
        &mut self,
        point: IVec2,
        surface: &mut impl RenderSurface,
        scene: &mut impl Scene,
    ) -> bool {
        if self.is_dragging() {
            return false;
        }
        let Some(id) = scene.viewport_at(point) else {
            log::debug!("no viewport under {point}, staying idle");
            return false;
        };
        let Some(snapshot) = PixelSnapshot::capture(surface) else {
            return false;
        };
        let Some(viewport) = scene.viewport_mut(id) else {
            return false;
        };
        viewport.recompute_aspect();
        let aspect = viewport.aspect();

        log::debug!("rubber-band drag started at {point} in viewport {}", id.0);
        self.state = DragState::Dragging(DragSession::new(
            id,
            point,
            snapshot,
            self.options.clone(),
            aspect,
        ));
        true
    }

    /// Pointer moved to `point` (display coordinates) while dragging.
    ///
    /// Redraws the rubber band over the drag snapshot and presents it; the
    /// camera and scene are untouched. A surface that no longer matches the
    /// snapshot cancels the drag. Returns whether a frame was presented.
    pub fn on_mouse_move(
        &mut self,
        point: IVec2,
        surface: &mut impl RenderSurface,
        scene: &mut impl Scene,
    ) -> bool {
        let modifiers = self.modifiers;
        let size = surface.size();
        let DragState::Dragging(session) = &mut self.state else {
            return false;
        };
        if !session.snapshot().matches(size) {
            log::debug!("surface resized to {}x{} mid-drag, cancelling", size.x, size.y);
            let _ = self.cancel(scene);
            return false;
        }

        session.set_end(clamp_to_surface(point, size));
        let rect = session.adjusted_rect(modifiers);
        present_rubber_band(surface, session.snapshot(), rect);
        session.mark_overlay_presented();
        log::trace!("rubber band {rect:?}");
        true
    }

    /// Primary button released: zoom to the dragged box and re-render once.
    ///
    /// A release where the pointer never left the press point leaves the
    /// camera alone.
    pub fn on_button_up(&mut self, scene: &mut impl Scene) -> ReleaseOutcome {
        let DragState::Dragging(session) = std::mem::take(&mut self.state) else {
            return ReleaseOutcome::NotDragging;
        };
        if session.is_click() {
            restore_scene(scene, &session);
            return ReleaseOutcome::Click;
        }

        let rect = session.adjusted_rect(self.modifiers);
        let Some(viewport) = scene.viewport_mut(session.viewport()) else {
            log::debug!("viewport {} vanished mid-drag", session.viewport().0);
            restore_scene(scene, &session);
            return ReleaseOutcome::Cancelled;
        };
        let mode = apply_zoom(
            viewport,
            rect,
            session.policy(),
            session.options().view_angle_offset_ratio,
        );
        scene.render();
        ReleaseOutcome::Zoomed { rect, mode }
    }

    /// Abort the active drag without zooming.
    ///
    /// Requests a render when overlay pixels are on screen. Returns whether
    /// a drag was active.
    pub fn cancel(&mut self, scene: &mut impl Scene) -> bool {
        let DragState::Dragging(session) = std::mem::take(&mut self.state) else {
            return false;
        };
        log::debug!("rubber-band drag cancelled");
        restore_scene(scene, &session);
        true
    }

    /// Route a raw input event.
    ///
    /// Cursor positions arrive in window coordinates (origin top-left) and
    /// are flipped into display coordinates. Only the left button drives the
    /// gesture. Returns the outcome of a left-button release.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        surface: &mut impl RenderSurface,
        scene: &mut impl Scene,
    ) -> Option<ReleaseOutcome> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = window_to_display(x, y, surface.size());
                let _ = self.on_mouse_move(self.cursor, surface, scene);
                None
            }
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed,
            } => {
                if pressed {
                    let _ = self.on_button_down(self.cursor, surface, scene);
                    None
                } else {
                    Some(self.on_button_up(scene))
                }
            }
            InputEvent::MouseButton { .. } => None,
            InputEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers;
                None
            }
            InputEvent::Resized { .. } => {
                let _ = self.cancel(scene);
                None
            }
        }
    }
}

/// Re-render if the session left overlay pixels on screen.
fn restore_scene(scene: &mut impl Scene, session: &DragSession) {
    if session.overlay_presented() {
        scene.render();
    }
}

fn window_to_display(x: f32, y: f32, size: UVec2) -> IVec2 {
    IVec2::new(x.floor() as i32, size.y as i32 - 1 - y.floor() as i32)
}
