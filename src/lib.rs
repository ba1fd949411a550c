// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Orbit/pan/dolly camera controller for real-time 3D viewports.
//!
//! The camera keeps its pose as an eye position, a fixed pivot and an
//! explicit orthonormal basis, and turns mouse-drag deltas and discrete
//! angle steps into incremental rotations, pans and dollies. Each frame the
//! pose is exported as a rotation matrix plus a pan-adjusted translation.
//!
//! # Key entry points
//!
//! - [`camera::OrbitCamera`] - pose state and manipulation operations
//! - [`camera::CameraController`] - executes [`CameraCommand`]s with
//!   configured sensitivity
//! - [`camera::ViewTransform`] / [`camera::ViewSink`] - what backends
//!   consume
//! - [`options::Options`] - TOML-backed configuration and presets
//!
//! # Example
//!
//! ```
//! use orbit_camera::{CameraCommand, CameraController, MatrixStack};
//!
//! let mut controller = CameraController::default();
//! let _ = controller.execute(CameraCommand::RotateRight { degrees: 15.0 });
//! let _ = controller.execute(CameraCommand::MoveForward { distance: 20.0 });
//!
//! let mut stack = MatrixStack::new();
//! controller.apply_view(&mut stack);
//! assert_eq!(stack.current(), controller.view_transform().to_mat4());
//! ```

pub mod camera;
pub mod error;
pub mod math;
pub mod options;

pub use camera::{
    CameraCommand, CameraController, MatrixStack, OrbitCamera, ViewSink,
    ViewTransform, ViewUniform,
};
pub use error::CameraError;
pub use options::{CameraOptions, Options, ResetPose};
