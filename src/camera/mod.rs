//! Camera system for an interactive 3D viewport.
//!
//! Provides an orbit camera with pitch, yaw, flat yaw, pan and dolly, the
//! view export consumed by rendering backends, and a command-driven
//! controller.

/// Serializable vocabulary of camera manipulations.
pub mod command;
/// Options-aware wrapper that executes commands against an orbit camera.
pub mod controller;
/// Orbit camera state and manipulation operations.
pub mod core;
/// View export, backend seam and GPU uniform.
pub mod view;

pub use command::CameraCommand;
pub use controller::CameraController;
pub use self::core::OrbitCamera;
pub use view::{MatrixStack, ViewSink, ViewTransform, ViewUniform};
