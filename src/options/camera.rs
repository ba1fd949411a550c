use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Reset Pose", inline)]
#[serde(default)]
/// Pose that [`ResetView`](crate::CameraCommand::ResetView) returns to.
pub struct ResetPose {
    /// Eye position in world space. The pivot is always the origin.
    pub eye: [f32; 3],
    /// Initial pitch about the camera's right axis, in degrees.
    pub up_degrees: f32,
    /// Initial world-vertical pan offset.
    pub look_z: f32,
}

impl Default for ResetPose {
    fn default() -> Self {
        Self {
            eye: [200.0, 0.0, 0.0],
            up_degrees: 20.0,
            look_z: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera reset pose and input sensitivity.
pub struct CameraOptions {
    /// Pose restored by a view reset.
    #[schemars(skip)]
    pub reset: ResetPose,
    /// Orbit sensitivity multiplier.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 4.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
    /// Pan sensitivity multiplier.
    #[schemars(title = "Pan Speed", range(min = 0.1, max = 4.0), extend("step" = 0.05))]
    pub pan_speed: f32,
    /// Dolly sensitivity multiplier.
    #[schemars(title = "Zoom Speed", range(min = 0.1, max = 4.0), extend("step" = 0.05))]
    pub zoom_speed: f32,
    /// Flip the direction of vertical orbit.
    #[schemars(title = "Invert Vertical")]
    pub invert_vertical: bool,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            reset: ResetPose::default(),
            rotate_speed: 1.0,
            pan_speed: 1.0,
            zoom_speed: 1.0,
            invert_vertical: false,
        }
    }
}
