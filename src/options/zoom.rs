use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::geometry::ZoomPolicy;
use crate::input::Modifiers;

/// Which held modifier inverts the center-at-start setting during a drag.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CenterToggle {
    /// Shift only.
    Shift,
    /// Control only.
    Control,
    /// Either Shift or Control.
    #[default]
    ShiftOrControl,
}

impl CenterToggle {
    /// Whether `modifiers` activate the toggle.
    #[must_use]
    pub fn is_active(self, modifiers: Modifiers) -> bool {
        match self {
            Self::Shift => modifiers.shift,
            Self::Control => modifiers.control,
            Self::ShiftOrControl => modifiers.shift || modifiers.control,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Rubber-Band Zoom", inline)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
/// Rubber-band zoom behavior.
pub struct ZoomOptions {
    /// Force the drag box to the viewport's aspect ratio.
    #[schemars(title = "Lock Aspect")]
    pub lock_aspect_to_viewport: bool,
    /// Grow the box around the press point instead of from a corner.
    #[schemars(title = "Center at Start")]
    pub center_at_start_position: bool,
    /// Dolly perspective cameras instead of narrowing the view angle.
    #[schemars(title = "Dolly Perspective")]
    pub use_dolly_for_perspective: bool,
    /// Modifier that inverts center-at-start while held.
    #[schemars(skip)]
    pub center_toggle: CenterToggle,
    /// Multiplier on the view-angle zoom factor; below 1 leaves a margin.
    #[schemars(title = "View Angle Margin", range(min = 0.1, max = 1.0), extend("step" = 0.05))]
    pub view_angle_offset_ratio: f64,
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            lock_aspect_to_viewport: false,
            center_at_start_position: false,
            use_dolly_for_perspective: true,
            center_toggle: CenterToggle::default(),
            view_angle_offset_ratio: 1.0,
        }
    }
}

impl ZoomOptions {
    /// The policy flags a drag session captures at its start.
    #[must_use]
    pub fn policy(&self) -> ZoomPolicy {
        ZoomPolicy {
            lock_aspect_to_viewport: self.lock_aspect_to_viewport,
            center_at_start_position: self.center_at_start_position,
            use_dolly_for_perspective: self.use_dolly_for_perspective,
        }
    }
}
