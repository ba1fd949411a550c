use glam::{Mat4, Vec3};

use super::core::OrbitCamera;

/// A camera view split the way fixed-function backends consume it: a
/// rotation matrix to load, then a translation to apply on top.
///
/// The translation is kept separate because pan offsets live in screen
/// space and are re-projected through the current basis every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Rotation, 16 values in column-major order. Element `row * 4 + col`
    /// is the view matrix entry `[col, row]`.
    pub matrix: [f32; 16],
    /// Translation to apply after loading `matrix`.
    pub translation: Vec3,
}

impl ViewTransform {
    /// The rotation part as a matrix.
    #[must_use]
    pub fn rotation(&self) -> Mat4 {
        Mat4::from_cols_array(&self.matrix)
    }

    /// Rotation and translation composed into a single world-to-view
    /// matrix, for backends that upload a uniform instead of driving a
    /// matrix stack.
    #[must_use]
    pub fn to_mat4(&self) -> Mat4 {
        self.rotation() * Mat4::from_translation(self.translation)
    }

    /// World-space point that the view maps to the origin: the eye with pan
    /// offsets applied.
    #[must_use]
    pub fn effective_eye(&self) -> Vec3 {
        -self.translation
    }
}

/// Receiver for [`OrbitCamera::apply_view`].
///
/// Mirrors the fixed-function contract: `load_matrix` replaces the current
/// transform, `translate` post-multiplies it.
pub trait ViewSink {
    /// Replace the current transform with a column-major matrix.
    fn load_matrix(&mut self, matrix: &[f32; 16]);

    /// Post-multiply the current transform by a translation.
    fn translate(&mut self, offset: Vec3);
}

/// Software [`ViewSink`] that tracks the resulting transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixStack {
    current: Mat4,
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixStack {
    /// Stack holding the identity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Mat4::IDENTITY,
        }
    }

    /// The current transform.
    #[must_use]
    pub fn current(&self) -> Mat4 {
        self.current
    }
}

impl ViewSink for MatrixStack {
    fn load_matrix(&mut self, matrix: &[f32; 16]) {
        self.current = Mat4::from_cols_array(matrix);
    }

    fn translate(&mut self, offset: Vec3) {
        self.current *= Mat4::from_translation(offset);
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the composed view matrix.
pub struct ViewUniform {
    /// World-to-view matrix, column arrays.
    pub view: [[f32; 4]; 4],
    /// Eye position with pan applied.
    pub eye: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for ViewUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewUniform {
    /// Identity view at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            eye: [0.0; 3],
            _pad: 0.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update(&mut self, camera: &OrbitCamera) {
        let view = camera.export_view_transform();
        self.view = view.to_mat4().to_cols_array_2d();
        self.eye = view.effective_eye().to_array();
    }
}

impl From<&OrbitCamera> for ViewUniform {
    fn from(camera: &OrbitCamera) -> Self {
        let mut uniform = Self::new();
        uniform.update(camera);
        uniform
    }
}
