use std::path::Path;

use super::command::CameraCommand;
use super::core::OrbitCamera;
use super::view::{ViewSink, ViewTransform, ViewUniform};
use crate::options::{CameraOptions, Options, ResetPose};

/// Orbit camera plus the options that shape how commands drive it.
///
/// The controller owns the only mutable path to its camera during a frame:
/// commands go in through [`execute`](Self::execute), the view comes out
/// through [`view_transform`](Self::view_transform) or
/// [`apply_view`](Self::apply_view).
#[derive(Debug, Clone)]
pub struct CameraController {
    camera: OrbitCamera,
    options: Options,
    active_preset: Option<String>,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl CameraController {
    /// Controller with the camera placed at the configured reset pose.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let mut controller = Self {
            camera: OrbitCamera::new(),
            options,
            active_preset: None,
        };
        controller.reset(controller.options.camera.reset);
        controller
    }

    /// The camera being driven.
    #[must_use]
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// Direct access to the camera, bypassing sensitivity scaling.
    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Shorthand for the camera section of the options.
    #[must_use]
    pub fn camera_options(&self) -> &CameraOptions {
        &self.options.camera
    }

    /// Replace the options. The camera pose is left as it is; the new reset
    /// pose takes effect on the next [`CameraCommand::ResetView`].
    pub fn set_options(&mut self, options: Options) {
        log::debug!("camera options updated: {:?}", options.camera);
        self.options = options;
        self.active_preset = None;
    }

    /// Name of the preset the options were last loaded from or saved as.
    #[must_use]
    pub fn active_preset(&self) -> Option<&str> {
        self.active_preset.as_deref()
    }

    /// Apply one command.
    ///
    /// Returns `false` only when a dolly was refused because it would pass
    /// the pivot or leave the allowed range; every other command always
    /// applies.
    pub fn execute(&mut self, cmd: CameraCommand) -> bool {
        let co = &self.options.camera;
        let pitch_sign = if co.invert_vertical { -1.0 } else { 1.0 };

        match cmd {
            CameraCommand::RotateUp { degrees } => {
                self.camera.rotate_up(degrees * co.rotate_speed * pitch_sign);
            }
            CameraCommand::RotateRight { degrees } => {
                self.camera.rotate_right(degrees * co.rotate_speed);
            }
            CameraCommand::RotateRightFlat { degrees } => {
                self.camera.rotate_right_flat(degrees * co.rotate_speed);
            }
            CameraCommand::RotateRightFlatToward { degrees, screen } => {
                self.camera.rotate_right_flat_toward(
                    degrees * co.rotate_speed,
                    screen.x,
                    screen.y,
                );
            }
            CameraCommand::MoveForward { distance } => {
                return self.camera.move_forward(distance * co.zoom_speed);
            }
            CameraCommand::Pan { delta } => {
                let delta = delta * co.pan_speed;
                self.camera.pan(delta.x, delta.y);
            }
            CameraCommand::ResetView => {
                let pose = co.reset;
                self.reset(pose);
            }
            CameraCommand::ResetViewTo { pose } => self.reset(pose),
        }
        true
    }

    /// Apply a sequence of commands in order. Returns how many were refused.
    pub fn execute_all<I>(&mut self, cmds: I) -> usize
    where
        I: IntoIterator<Item = CameraCommand>,
    {
        cmds.into_iter().filter(|cmd| !self.execute(*cmd)).count()
    }

    fn reset(&mut self, pose: ResetPose) {
        let [x, y, z] = pose.eye;
        self.camera
            .reset_view(x, y, z, pose.up_degrees, pose.look_z);
    }

    /// The current view, ready for a backend.
    #[must_use]
    pub fn view_transform(&self) -> ViewTransform {
        self.camera.export_view_transform()
    }

    /// The current view packed for GPU upload.
    #[must_use]
    pub fn uniform(&self) -> ViewUniform {
        ViewUniform::from(&self.camera)
    }

    /// Hand the current view to a backend.
    pub fn apply_view<S: ViewSink + ?Sized>(&self, sink: &mut S) {
        self.camera.apply_view(sink);
    }

    /// Load a named options preset from `presets_dir`.
    /// Returns true on success.
    pub fn load_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match Options::load(&path) {
            Ok(opts) => {
                log::info!("Loaded camera preset '{name}'");
                self.set_options(opts);
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("Failed to load camera preset '{name}': {e}");
                false
            }
        }
    }

    /// Save the current options as a named preset.
    /// Returns true on success.
    pub fn save_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match self.options.save(&path) {
            Ok(()) => {
                log::info!("Saved camera preset '{name}'");
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("Failed to save camera preset '{name}': {e}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use super::*;

    const EPS: f32 = 1e-4;

    fn options_with(f: impl FnOnce(&mut CameraOptions)) -> Options {
        let mut opts = Options::default();
        f(&mut opts.camera);
        opts
    }

    #[test]
    fn starts_at_reset_pose() {
        let controller = CameraController::default();
        let mut expected = OrbitCamera::new();
        expected.reset_view(200.0, 0.0, 0.0, 20.0, 0.0);
        assert_eq!(controller.camera(), &expected);
    }

    #[test]
    fn rotate_speed_scales_orbit() {
        let mut fast = CameraController::new(options_with(|c| {
            c.rotate_speed = 2.0;
        }));
        let mut plain = CameraController::default();
        assert!(fast.execute(CameraCommand::RotateRight { degrees: 10.0 }));
        plain.camera_mut().rotate_right(20.0);
        assert!(fast.camera().eye().abs_diff_eq(plain.camera().eye(), EPS));
    }

    #[test]
    fn invert_vertical_flips_pitch() {
        let mut inverted = CameraController::new(options_with(|c| {
            c.invert_vertical = true;
        }));
        let mut plain = CameraController::default();
        let _ = inverted.execute(CameraCommand::RotateUp { degrees: 12.0 });
        plain.camera_mut().rotate_up(-12.0);
        assert!(inverted
            .camera()
            .eye()
            .abs_diff_eq(plain.camera().eye(), EPS));
    }

    #[test]
    fn pan_speed_scales_offsets() {
        let mut controller = CameraController::new(options_with(|c| {
            c.pan_speed = 0.5;
        }));
        let _ = controller.execute(CameraCommand::Pan {
            delta: Vec2::new(10.0, 0.0),
        });
        // distance 200 -> factor 0.4; 10 * 0.5 * 0.4 = 2.
        assert!((controller.camera().pan_offsets().x - 2.0).abs() < EPS);
    }

    #[test]
    fn refused_dolly_reports_false() {
        let mut controller = CameraController::default();
        let before = controller.camera().clone();
        assert!(!controller.execute(CameraCommand::MoveForward {
            distance: 500.0
        }));
        assert_eq!(controller.camera(), &before);
        assert!(controller.execute(CameraCommand::MoveForward {
            distance: 5.0
        }));
        assert!((controller.camera().distance() - 195.0).abs() < 1e-3);
    }

    #[test]
    fn execute_all_counts_refusals() {
        let mut controller = CameraController::default();
        let refused = controller.execute_all([
            CameraCommand::MoveForward { distance: 1e6 },
            CameraCommand::RotateRightFlat { degrees: 30.0 },
            CameraCommand::MoveForward { distance: -1e6 },
            CameraCommand::MoveForward { distance: 1.0 },
        ]);
        assert_eq!(refused, 2);
    }

    #[test]
    fn reset_commands_restore_pose() {
        let mut controller = CameraController::default();
        let initial = controller.camera().clone();
        let _ = controller.execute_all([
            CameraCommand::RotateUp { degrees: 40.0 },
            CameraCommand::Pan {
                delta: Vec2::new(25.0, 0.0),
            },
            CameraCommand::ResetView,
        ]);
        let cam = controller.camera();
        assert_eq!(cam.eye(), initial.eye());
        assert_eq!(cam.up(), initial.up());
        assert_eq!(cam.right(), initial.right());
        assert_eq!(cam.view_matrix(), initial.view_matrix());
        // Horizontal pan survives a reset.
        assert!((cam.pan_offsets().x - 10.0).abs() < EPS);

        let pose = ResetPose {
            eye: [0.0, -80.0, 0.0],
            up_degrees: 0.0,
            look_z: 4.0,
        };
        let _ = controller.execute(CameraCommand::ResetViewTo { pose });
        assert!(controller
            .camera()
            .eye()
            .abs_diff_eq(Vec3::new(0.0, -80.0, 0.0), EPS));
        assert_eq!(controller.camera().pan_offsets().z, 4.0);
    }

    #[test]
    fn set_options_changes_next_reset() {
        let mut controller = CameraController::default();
        controller.set_options(options_with(|c| {
            c.reset.eye = [50.0, 0.0, 0.0];
            c.reset.up_degrees = 0.0;
        }));
        assert!((controller.camera().distance() - 200.0).abs() < EPS);
        let _ = controller.execute(CameraCommand::ResetView);
        assert!((controller.camera().distance() - 50.0).abs() < EPS);
    }

    #[test]
    fn presets_round_trip() {
        let dir = std::env::temp_dir()
            .join(format!("orbit-camera-ctl-{}", std::process::id()));
        let mut controller = CameraController::new(options_with(|c| {
            c.zoom_speed = 3.0;
        }));
        assert!(controller.save_preset("zoomy", &dir));
        assert_eq!(controller.active_preset(), Some("zoomy"));

        let mut other = CameraController::default();
        assert!(!other.load_preset("absent", &dir));
        assert_eq!(other.active_preset(), None);
        assert!(other.load_preset("zoomy", &dir));
        assert_eq!(other.camera_options().zoom_speed, 3.0);
        assert_eq!(other.active_preset(), Some("zoomy"));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
