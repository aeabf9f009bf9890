use nalgebra::{Matrix3, Point2, Point3};
use serde::{Deserialize, Serialize};

use crate::error::{CameraError, PinProjError, ProjectionError, Result};

/// Ideal (rectilinear) pinhole intrinsics: focal lengths and principal
/// point in pixel units. No distortion terms.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "IntrinsicsParams")]
pub struct Intrinsics {
    fx: f64,
    fy: f64,
    cx: f64,
    cy: f64,
}

/// Raw parameter blob as read from a parameter file. Conversion goes
/// through [`Intrinsics::new`] so deserialized values pass the same
/// focal-length validation as directly constructed ones.
#[derive(Debug, Clone, Copy, Deserialize)]
struct IntrinsicsParams {
    fx: f64,
    fy: f64,
    cx: f64,
    cy: f64,
}

impl TryFrom<IntrinsicsParams> for Intrinsics {
    type Error = PinProjError;

    fn try_from(params: IntrinsicsParams) -> Result<Self> {
        Intrinsics::new(params.fx, params.fy, params.cx, params.cy)
    }
}

impl Intrinsics {
    /// Create intrinsics from focal lengths and principal point.
    ///
    /// Focal lengths must be positive and finite; a non-positive focal
    /// length has no physical meaning and is rejected here rather than
    /// at projection time.
    pub fn new(fx: f64, fy: f64, cx: f64, cy: f64) -> Result<Self> {
        if !fx.is_finite() || fx <= 0.0 {
            return Err(CameraError::InvalidFocalLength {
                name: "fx",
                value: fx,
            }
            .into());
        }
        if !fy.is_finite() || fy <= 0.0 {
            return Err(CameraError::InvalidFocalLength {
                name: "fy",
                value: fy,
            }
            .into());
        }
        Ok(Self { fx, fy, cx, cy })
    }

    /// Metric intrinsics: fx = fy = f and principal point at the origin.
    ///
    /// Projection then reduces to `x' = f*X/Z, y' = f*Y/Z` on the focal
    /// plane, so the focal-plane model and the pixel model share one
    /// code path.
    pub fn metric(f: f64) -> Result<Self> {
        Self::new(f, f, 0.0, 0.0)
    }

    /// Get focal lengths
    pub fn focal_length(&self) -> (f64, f64) {
        (self.fx, self.fy)
    }

    /// Get principal point
    pub fn principal_point(&self) -> (f64, f64) {
        (self.cx, self.cy)
    }

    /// The 3x3 intrinsic matrix K. The bottom row is always (0, 0, 1).
    pub fn matrix(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.fx, 0.0, self.cx,
            0.0, self.fy, self.cy,
            0.0, 0.0, 1.0,
        )
    }

    /// Project a camera-frame point to pixel coordinates.
    ///
    /// Perspective division (`xn = X/Z, yn = Y/Z`) followed by the pixel
    /// mapping (`u = fx*xn + cx, v = fy*yn + cy`).
    ///
    /// Z = 0 is a degenerate depth and fails. Z < 0 yields a mirrored
    /// projection that is returned as-is; callers needing visibility
    /// culling must filter by Z sign themselves.
    pub fn project_point(&self, point_camera: &Point3<f64>) -> Result<Point2<f64>> {
        if point_camera.z == 0.0 {
            return Err(ProjectionError::DegenerateDepth.into());
        }

        let x_norm = point_camera.x / point_camera.z;
        let y_norm = point_camera.y / point_camera.z;

        Ok(Point2::new(
            self.fx * x_norm + self.cx,
            self.fy * y_norm + self.cy,
        ))
    }

    /// Batch form of [`Intrinsics::project_point`]. Output is one-to-one
    /// with the input and order-preserving; the first degenerate point
    /// aborts the batch with its error.
    pub fn project_points(&self, points_camera: &[Point3<f64>]) -> Result<Vec<Point2<f64>>> {
        points_camera.iter().map(|p| self.project_point(p)).collect()
    }
}
