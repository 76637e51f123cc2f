/// Platform-agnostic input events.
///
/// These are fed into [`RubberBandZoom::handle_event`](crate::RubberBandZoom::handle_event),
/// which tracks cursor and modifier state and drives the drag state machine.
///
/// # Example
///
/// ```ignore
/// let outcome = zoom.handle_event(
///     InputEvent::MouseButton { button: MouseButton::Left, pressed: false },
///     &mut surface,
///     &mut scene,
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to an absolute window position (origin top-left).
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels, growing downward.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Modifier key state changed.
    ModifiersChanged(Modifiers),
    /// The render surface changed size.
    Resized {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
    /// Back, forward or any extra button.
    Other,
}

/// Held modifier keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Modifiers {
    /// Whether the shift key is held.
    pub shift: bool,
    /// Whether the control key is held.
    pub control: bool,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Other,
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::keyboard::ModifiersState> for Modifiers {
    fn from(state: winit::keyboard::ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            control: state.control_key(),
        }
    }
}
