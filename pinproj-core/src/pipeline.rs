//! End-to-end world-to-pixel projection

use nalgebra::{Point2, Point3};
use rayon::prelude::*;

use crate::camera::Intrinsics;
use crate::error::Result;
use crate::pose::Pose;

/// Project world points to pixel coordinates: the extrinsic transform
/// `R * p + t` followed by the intrinsic pixel mapping.
///
/// Composes [`Pose::transform_point`] and [`Intrinsics::project_point`]
/// and carries their preconditions forward; in particular, a point that
/// lands on the Z = 0 plane of the camera frame fails the whole batch
/// with a degenerate-depth error.
pub fn project_points(
    points_world: &[Point3<f64>],
    intrinsics: &Intrinsics,
    pose: &Pose,
) -> Result<Vec<Point2<f64>>> {
    points_world
        .iter()
        .map(|p| intrinsics.project_point(&pose.transform_point(p)))
        .collect()
}

/// Parallel variant of [`project_points`].
///
/// Per-point projection is independent, so the batch is distributed
/// across the rayon pool. Output order still matches input order.
pub fn project_points_par(
    points_world: &[Point3<f64>],
    intrinsics: &Intrinsics,
    pose: &Pose,
) -> Result<Vec<Point2<f64>>> {
    points_world
        .par_iter()
        .map(|p| intrinsics.project_point(&pose.transform_point(p)))
        .collect()
}
