use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

/// Rotation axis selector for elementary rotations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Elementary rotation about the X axis (pitch), angle in degrees.
///
/// Right-handed active convention:
/// ```text
/// Rx = | 1    0       0   |
///      | 0  cos(a) -sin(a)|
///      | 0  sin(a)  cos(a)|
/// ```
pub fn rotation_x(angle_deg: f64) -> Matrix3<f64> {
    let (s, c) = angle_deg.to_radians().sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0,
        0.0, c, -s,
        0.0, s, c,
    )
}

/// Elementary rotation about the Y axis (yaw), angle in degrees.
///
/// ```text
/// Ry = | cos(a)  0  sin(a)|
///      |   0     1    0   |
///      |-sin(a)  0  cos(a)|
/// ```
pub fn rotation_y(angle_deg: f64) -> Matrix3<f64> {
    let (s, c) = angle_deg.to_radians().sin_cos();
    Matrix3::new(
        c, 0.0, s,
        0.0, 1.0, 0.0,
        -s, 0.0, c,
    )
}

/// Elementary rotation about the Z axis (roll), angle in degrees.
///
/// ```text
/// Rz = | cos(a) -sin(a)  0|
///      | sin(a)  cos(a)  0|
///      |   0       0     1|
/// ```
pub fn rotation_z(angle_deg: f64) -> Matrix3<f64> {
    let (s, c) = angle_deg.to_radians().sin_cos();
    Matrix3::new(
        c, -s, 0.0,
        s, c, 0.0,
        0.0, 0.0, 1.0,
    )
}

/// Elementary rotation about the given axis, angle in degrees.
/// Any real angle is valid; values outside [0, 360) reduce by periodicity.
pub fn rotation_about(axis: Axis, angle_deg: f64) -> Matrix3<f64> {
    match axis {
        Axis::X => rotation_x(angle_deg),
        Axis::Y => rotation_y(angle_deg),
        Axis::Z => rotation_z(angle_deg),
    }
}
