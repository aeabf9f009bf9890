//! Camera pose and world-to-camera coordinate transforms

mod rotation;

pub use rotation::{Axis, rotation_about, rotation_x, rotation_y, rotation_z};

use nalgebra::{Matrix3, Point3, Vector3};

use crate::error::{PoseError, Result};

const ROTATION_TOL: f64 = 1e-9;

/// Camera pose [R|t]: orientation and position of the camera in the
/// world frame. Maps world points into the camera frame via
/// `p_cam = R * p_world + t`.
#[derive(Debug, Clone)]
pub struct Pose {
    rotation: Matrix3<f64>,
    translation: Vector3<f64>,
}

impl Pose {
    /// Create a pose from an explicit rotation matrix and translation.
    ///
    /// The matrix must be a proper rotation (orthogonal, determinant +1)
    /// within floating tolerance.
    pub fn new(rotation: Matrix3<f64>, translation: Vector3<f64>) -> Result<Self> {
        if !is_proper_rotation(&rotation) {
            return Err(PoseError::NotARotation.into());
        }
        Ok(Self {
            rotation,
            translation,
        })
    }

    /// Pose from an elementary rotation (axis + angle in degrees) and a
    /// translation. Infallible: the rotation builder only emits proper
    /// rotations.
    pub fn from_axis_angle(axis: Axis, angle_deg: f64, translation: Vector3<f64>) -> Self {
        Self {
            rotation: rotation_about(axis, angle_deg),
            translation,
        }
    }

    /// Identity pose: camera frame coincides with the world frame
    pub fn identity() -> Self {
        Self {
            rotation: Matrix3::identity(),
            translation: Vector3::zeros(),
        }
    }

    /// Get rotation matrix
    pub fn rotation(&self) -> &Matrix3<f64> {
        &self.rotation
    }

    /// Get translation vector
    pub fn translation(&self) -> &Vector3<f64> {
        &self.translation
    }

    /// Re-express a world point in the camera frame: `R * p + t`.
    ///
    /// The result may have Z <= 0 (point on or behind the image plane);
    /// that is a projection concern, not a pose error.
    pub fn transform_point(&self, point_world: &Point3<f64>) -> Point3<f64> {
        self.rotation * point_world + self.translation
    }

    /// Batch form of [`Pose::transform_point`]. Output is one-to-one
    /// with the input and order-preserving.
    pub fn transform_points(&self, points_world: &[Point3<f64>]) -> Vec<Point3<f64>> {
        points_world
            .iter()
            .map(|p| self.transform_point(p))
            .collect()
    }
}

fn is_proper_rotation(m: &Matrix3<f64>) -> bool {
    let gram = m * m.transpose();
    (gram - Matrix3::identity()).abs().max() < ROTATION_TOL
        && (m.determinant() - 1.0).abs() < ROTATION_TOL
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PinProjError;

    #[test]
    fn test_identity_pose_is_identity_transform() {
        let pose = Pose::identity();
        let points = vec![
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(-0.5, 0.0, 4.2),
            Point3::new(0.0, 0.0, 0.0),
        ];

        let out = pose.transform_points(&points);
        assert_eq!(out.len(), points.len());
        for (p, q) in points.iter().zip(out.iter()) {
            assert!((p - q).norm() < 1e-15);
        }
    }

    #[test]
    fn test_translation_only() {
        let pose = Pose::from_axis_angle(Axis::Y, 0.0, Vector3::new(0.0, 0.0, 5.0));
        let p = pose.transform_point(&Point3::new(1.0, 1.0, 1.0));
        assert!((p.x - 1.0).abs() < 1e-15);
        assert!((p.y - 1.0).abs() < 1e-15);
        assert!((p.z - 6.0).abs() < 1e-15);
    }

    #[test]
    fn test_rotation_then_translation_order() {
        // Rz(90) maps (1,0,0) to (0,1,0); translation applies after
        let pose = Pose::from_axis_angle(Axis::Z, 90.0, Vector3::new(10.0, 0.0, 0.0));
        let p = pose.transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert!((p.x - 10.0).abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);
        assert!(p.z.abs() < 1e-12);
    }

    #[test]
    fn test_points_behind_camera_pass_through() {
        let pose = Pose::identity();
        let p = pose.transform_point(&Point3::new(0.0, 0.0, -3.0));
        assert!((p.z + 3.0).abs() < 1e-15);
    }

    #[test]
    fn test_new_accepts_builder_output() {
        let r = rotation_about(Axis::X, 123.4);
        let pose = Pose::new(r, Vector3::new(1.0, 2.0, 3.0)).unwrap();
        assert!((pose.rotation() - r).abs().max() < 1e-15);
    }

    #[test]
    fn test_new_rejects_scaled_matrix() {
        let m = Matrix3::identity() * 2.0;
        let result = Pose::new(m, Vector3::zeros());
        assert!(matches!(result.unwrap_err(), PinProjError::Pose(_)));
    }

    #[test]
    fn test_new_rejects_reflection() {
        // Orthogonal but det = -1
        let m = Matrix3::from_diagonal(&Vector3::new(1.0, 1.0, -1.0));
        let result = Pose::new(m, Vector3::zeros());
        assert!(matches!(
            result.unwrap_err(),
            PinProjError::Pose(PoseError::NotARotation)
        ));
    }

    #[test]
    fn test_transform_points_preserves_order() {
        let pose = Pose::from_axis_angle(Axis::Y, 20.0, Vector3::new(0.0, 0.0, 5.0));
        let points = vec![
            Point3::new(1.0, -1.0, 1.0),
            Point3::new(-1.0, 1.0, -1.0),
        ];
        let batch = pose.transform_points(&points);
        for (p, q) in points.iter().zip(batch.iter()) {
            let single = pose.transform_point(p);
            assert!((single - q).norm() < 1e-15);
        }
    }
}
