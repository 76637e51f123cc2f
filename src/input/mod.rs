//! Platform-agnostic input events routed to the rubber-band gesture.

/// Input event, mouse button and modifier types.
pub mod event;

pub use event::{InputEvent, Modifiers, MouseButton};
