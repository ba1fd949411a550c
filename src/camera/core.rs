use glam::{Mat4, Vec3};

use super::view::{ViewSink, ViewTransform};
use crate::math::{mat4_from_rows, rotation_about_axis, sign, transform_point};

/// Pivot axis for flat yaw.
pub const WORLD_UP: Vec3 = Vec3::Z;
/// Dolly speed is `distance / DOLLY_SPEED_DIVISOR` per unit of input.
pub const DOLLY_SPEED_DIVISOR: f32 = 200.0;
/// Lower bound on the dolly speed factor so close-up zoom still moves.
pub const MIN_DOLLY_FACTOR: f32 = 0.3;
/// Dolly is refused at or beyond this eye-to-pivot distance.
pub const MAX_DOLLY_DISTANCE: f32 = 1000.0;
/// Pan speed is `distance / PAN_SPEED_DIVISOR` per unit of input.
pub const PAN_SPEED_DIVISOR: f32 = 500.0;
/// Bound on every pan accumulator (`pan.z` is additionally floored at 0).
pub const PAN_LIMIT: f32 = 70.0;
/// `|up.z|` above this sends vertical pan to the world-vertical offset.
pub const TOP_DOWN_THRESHOLD: f32 = 0.7;

/// Orbit/pan/dolly camera around a fixed pivot.
///
/// The orientation is kept as an explicit `right`/`up`/`target` basis rather
/// than angles. Every rotation re-derives one basis vector from the other two
/// with a cross product, which is what keeps the basis orthonormal under
/// thousands of small incremental rotations.
///
/// Pan is not applied to `eye`. It accumulates in screen-relative offsets
/// that [`export_view_transform`](Self::export_view_transform) projects
/// through the current basis each frame.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    eye: Vec3,
    look_at: Vec3,
    up: Vec3,
    right: Vec3,
    target: Vec3,
    pan: Vec3,
    view_matrix: Mat4,
}

impl Default for OrbitCamera {
    /// One unit above the origin on +Z looking down -Z, with an identity
    /// view matrix.
    fn default() -> Self {
        let mut camera = Self {
            eye: Vec3::Z,
            look_at: Vec3::ZERO,
            up: Vec3::Y,
            right: Vec3::X,
            target: Vec3::NEG_Z,
            pan: Vec3::ZERO,
            view_matrix: Mat4::IDENTITY,
        };
        camera.update_view();
        camera
    }
}

impl OrbitCamera {
    /// Camera at the default pose. Call [`reset_view`](Self::reset_view)
    /// to place it.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Eye position in world space.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Pivot the camera orbits around.
    #[must_use]
    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    /// Up basis vector.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Right basis vector.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Unit view direction, from `eye` toward `look_at`.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Pan accumulators: screen-horizontal, screen-vertical, world-vertical.
    #[must_use]
    pub fn pan_offsets(&self) -> Vec3 {
        self.pan
    }

    /// Cached rotation-only view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.view_matrix
    }

    /// Distance from `eye` to `look_at`.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.eye.distance(self.look_at)
    }

    /// Unit direction from `eye` to `look_at`.
    ///
    /// When the two coincide there is no direction to take, and the current
    /// `target` is returned unchanged.
    #[must_use]
    pub fn norma(&self) -> Vec3 {
        (self.look_at - self.eye)
            .try_normalize()
            .unwrap_or(self.target)
    }

    /// Rows `right`, `up`, `-target`, then `(0, 0, 0, 1)`.
    fn build_view_matrix(&self) -> Mat4 {
        let (r, u, t) = (self.right, self.up, self.target);
        mat4_from_rows([
            r.x, r.y, r.z, 0.0, //
            u.x, u.y, u.z, 0.0, //
            -t.x, -t.y, -t.z, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    fn update_view(&mut self) {
        self.view_matrix = self.build_view_matrix();
    }

    /// Swing `eye` about `axis` through `look_at` and return the rotation
    /// so the caller can carry the basis along.
    fn orbit(&mut self, axis: Vec3, degrees: f32) -> Mat4 {
        let rot = rotation_about_axis(axis, degrees);
        self.eye = transform_point(&rot, self.eye - self.look_at) + self.look_at;
        rot
    }

    /// Vertical orbit (pitch) about the `right` axis.
    pub fn rotate_up(&mut self, degrees: f32) {
        let _ = self.orbit(self.right, degrees);
        self.target = self.norma();
        self.up = self.right.cross(self.target).normalize_or(self.up);
        self.update_view();
    }

    /// Horizontal orbit (yaw) about the camera's own `up` axis.
    pub fn rotate_right(&mut self, degrees: f32) {
        let _ = self.orbit(self.up, degrees);
        self.target = self.norma();
        self.right = self.target.cross(self.up).normalize_or(self.right);
        self.update_view();
    }

    /// Yaw about the world vertical axis through `look_at`.
    ///
    /// The whole frame turns with the eye, so roll relative to the world
    /// horizon is preserved even when the camera is tilted.
    pub fn rotate_right_flat(&mut self, degrees: f32) {
        let rot = self.orbit(WORLD_UP, degrees);
        self.target = transform_point(&rot, self.target);
        self.right = transform_point(&rot, self.right);
        self.up = transform_point(&rot, self.up);

        self.target = self.norma();
        self.right = self.target.cross(self.up).normalize_or(self.right);
        self.up = self.right.cross(self.target);
        self.update_view();
    }

    /// Flat yaw whose direction follows a screen-space drag.
    ///
    /// The drag `(screen_x, screen_y)` is compared against the screen
    /// projection of `right`; the sign of their cross product picks the
    /// turn direction and `degrees` supplies the magnitude. A drag parallel
    /// to `right` does not rotate.
    pub fn rotate_right_flat_toward(
        &mut self,
        degrees: f32,
        screen_x: f32,
        screen_y: f32,
    ) {
        let drag = Vec3::new(screen_x, screen_y, 0.0);
        let horizon = Vec3::new(self.right.x, self.right.y, 0.0);
        let direction = sign(drag.cross(horizon).z);
        self.rotate_right_flat(degrees * direction);
    }

    /// Dolly toward (positive) or away from (negative) `look_at`.
    ///
    /// `distance` is scaled by the current zoom level. Returns `false` and
    /// leaves the camera untouched if the move would reach or pass the
    /// pivot, or end [`MAX_DOLLY_DISTANCE`] or more away from it.
    pub fn move_forward(&mut self, distance: f32) -> bool {
        let offset = self.eye - self.look_at;
        let current = offset.length();
        let step = distance * (current / DOLLY_SPEED_DIVISOR).max(MIN_DOLLY_FACTOR);

        let remaining = current - step;
        let in_band = remaining > 0.0 && remaining < MAX_DOLLY_DISTANCE;
        if !in_band {
            log::trace!(
                "dolly by {distance} ignored: distance would become {remaining}"
            );
            return false;
        }
        let Some(dir) = offset.try_normalize() else {
            return false;
        };

        self.eye -= dir * step;
        self.update_view();
        true
    }

    /// Accumulate a screen-space pan.
    ///
    /// Horizontal motion always goes to the screen-horizontal offset.
    /// Vertical motion goes to the world-vertical offset while `up` stays
    /// close to world vertical, and to the screen-vertical offset otherwise. All
    /// offsets saturate at their bounds. The view matrix is unaffected; the
    /// offsets are applied by [`export_view_transform`](Self::export_view_transform).
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let factor = self.distance() / PAN_SPEED_DIVISOR;

        self.pan.x = (self.pan.x + dx * factor).clamp(-PAN_LIMIT, PAN_LIMIT);
        if self.up.z.abs() > TOP_DOWN_THRESHOLD {
            self.pan.z = (self.pan.z + dy * factor * sign(self.up.z))
                .clamp(0.0, PAN_LIMIT);
        } else {
            self.pan.y = (self.pan.y + dy * factor).clamp(-PAN_LIMIT, PAN_LIMIT);
        }
    }

    /// Re-seat the camera at `(x, y, z)` looking at the origin, then pitch
    /// it by `up_degrees`. `look_z` becomes the world-vertical pan offset;
    /// the screen pan offsets carry over.
    pub fn reset_view(
        &mut self,
        x: f32,
        y: f32,
        z: f32,
        up_degrees: f32,
        look_z: f32,
    ) {
        self.eye = Vec3::new(x, y, z);
        self.look_at = Vec3::ZERO;
        self.up = WORLD_UP;
        self.pan.z = look_z.clamp(0.0, PAN_LIMIT);
        self.target = self.norma();
        let target = self.target;
        self.right = target.cross(self.up).try_normalize().unwrap_or_else(|| {
            // Eye straight above or below the pivot.
            Vec3::X
                .reject_from_normalized(target)
                .try_normalize()
                .unwrap_or(Vec3::Y)
        });
        log::debug!(
            "camera reset: eye {} pitch {up_degrees} look_z {look_z}",
            self.eye
        );
        self.rotate_up(up_degrees);
    }

    /// Column-major view matrix plus the pan-adjusted eye translation.
    #[must_use]
    pub fn export_view_transform(&self) -> ViewTransform {
        let offset_x = self.up.x * self.pan.y - self.right.x * self.pan.x;
        let offset_y = self.up.y * self.pan.y - self.right.y * self.pan.x;
        ViewTransform {
            matrix: self.view_matrix.to_cols_array(),
            translation: Vec3::new(
                -self.eye.x - offset_x,
                -self.eye.y - offset_y,
                -self.eye.z - self.pan.z,
            ),
        }
    }

    /// Hand the view to a backend: load the matrix, then translate.
    pub fn apply_view<S: ViewSink + ?Sized>(&self, sink: &mut S) {
        let view = self.export_view_transform();
        sink.load_matrix(&view.matrix);
        sink.translate(view.translation);
    }
}
