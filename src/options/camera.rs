use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial projection parameters for a [`SceneCamera`](crate::camera::SceneCamera).
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "View Angle", range(min = 1.0, max = 179.0), extend("step" = 1.0))]
    pub view_angle: f64,
    /// Half the viewport height in world units for parallel projection.
    #[schemars(title = "Parallel Scale", range(min = 0.0001))]
    pub parallel_scale: f64,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub near: f64,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub far: f64,
    /// Start in parallel (orthographic) projection.
    #[schemars(title = "Parallel Projection")]
    pub parallel_projection: bool,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            view_angle: 30.0,
            parallel_scale: 1.0,
            near: 0.01,
            far: 1000.0,
            parallel_projection: false,
        }
    }
}
