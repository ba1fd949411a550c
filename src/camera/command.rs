//! The camera's interactive vocabulary.
//!
//! Every camera manipulation, whether it comes from a mouse drag, a key
//! press, or a scripted sequence, is represented as a `CameraCommand`.
//! Consumers construct commands and pass them to
//! [`CameraController::execute`](super::controller::CameraController::execute).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::options::ResetPose;

/// A single camera manipulation.
///
/// Angles are in degrees and distances in world units, before the
/// controller's sensitivity multipliers are applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CameraCommand {
    /// Vertical orbit about the camera's right axis.
    RotateUp {
        /// Pitch angle in degrees.
        degrees: f32,
    },
    /// Horizontal orbit about the camera's up axis.
    RotateRight {
        /// Yaw angle in degrees.
        degrees: f32,
    },
    /// Yaw about the world vertical axis.
    RotateRightFlat {
        /// Yaw angle in degrees.
        degrees: f32,
    },
    /// Flat yaw whose direction is chosen by a screen-space drag.
    RotateRightFlatToward {
        /// Yaw magnitude in degrees.
        degrees: f32,
        /// Drag vector in screen space.
        screen: Vec2,
    },
    /// Dolly toward (positive) or away from (negative) the pivot.
    MoveForward {
        /// Dolly distance before zoom scaling.
        distance: f32,
    },
    /// Screen-space pan.
    Pan {
        /// Drag vector in screen space.
        delta: Vec2,
    },
    /// Return to the configured reset pose.
    ResetView,
    /// Reset to an explicit pose.
    ResetViewTo {
        /// Pose to reset to.
        pose: ResetPose,
    },
}
