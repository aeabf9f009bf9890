//! Pinhole camera projection: world points -> camera frame -> pixels.
//!
//! The pipeline is `p_cam = R * p_world + t` (extrinsics) followed by
//! perspective division and the intrinsic pixel mapping (K). All types
//! are immutable values and every operation is a pure function.

pub mod camera;
pub mod error;
pub mod geometry;
pub mod pipeline;
pub mod pose;

pub use camera::Intrinsics;
pub use error::{CameraError, PinProjError, PoseError, ProjectionError, Result};
pub use geometry::CubeWireframe;
pub use pipeline::{project_points, project_points_par};
pub use pose::{Axis, Pose, rotation_about, rotation_x, rotation_y, rotation_z};
