//! Small math layer the camera builds on.
//!
//! Vector and matrix storage come from `glam`; this module adds the handful
//! of operations the camera needs in the exact form it needs them: matrices
//! written out row by row, an axis-angle rotation with explicit Rodrigues
//! coefficients, and a sign function that maps zero to zero.

use glam::{Mat4, Vec3};

/// Degrees to radians.
pub const DEG2RAD: f32 = std::f32::consts::PI / 180.0;

/// Build a matrix from 16 values listed in row-major order.
///
/// `glam` stores matrices column-major, so the values are read as columns
/// and transposed.
#[must_use]
pub fn mat4_from_rows(rows: [f32; 16]) -> Mat4 {
    Mat4::from_cols_array(&rows).transpose()
}

/// Element `[row, col]` of `m`.
#[inline]
#[must_use]
pub fn element(m: &Mat4, row: usize, col: usize) -> f32 {
    m.col(col)[row]
}

/// Row-major copy of `m`, one inner array per row.
#[must_use]
pub fn to_rows(m: &Mat4) -> [[f32; 4]; 4] {
    m.transpose().to_cols_array_2d()
}

/// Apply `m` to a point (column vector on the right).
#[inline]
#[must_use]
pub fn transform_point(m: &Mat4, p: Vec3) -> Vec3 {
    m.transform_point3(p)
}

/// Rotation of `degrees` about `axis`.
///
/// `axis` is expected to be unit length; it is not normalized here so that
/// callers passing basis vectors get exactly the coefficients of their own
/// axis.
#[must_use]
pub fn rotation_about_axis(axis: Vec3, degrees: f32) -> Mat4 {
    let rad = DEG2RAD * degrees;
    let (s, c) = rad.sin_cos();
    let t = 1.0 - c;
    let Vec3 { x, y, z } = axis;
    mat4_from_rows([
        t * x * x + c,
        t * x * y - s * z,
        t * x * z + s * y,
        0.0,
        t * x * y + s * z,
        t * y * y + c,
        t * y * z - s * x,
        0.0,
        t * x * z - s * y,
        t * y * z + s * x,
        t * z * z + c,
        0.0,
        0.0,
        0.0,
        0.0,
        1.0,
    ])
}

/// -1, 0 or 1. Unlike [`f32::signum`], zero maps to zero.
#[inline]
#[must_use]
pub fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}
