use thiserror::Error;

/// Common errors across the projection pipeline
#[derive(Error, Debug)]
pub enum PinProjError {
    #[error("Projection error: {0}")]
    Projection(#[from] ProjectionError),

    #[error("Camera error: {0}")]
    Camera(#[from] CameraError),

    #[error("Pose error: {0}")]
    Pose(#[from] PoseError),
}

#[derive(Error, Debug)]
pub enum ProjectionError {
    #[error("Degenerate depth: Z = 0 during perspective division")]
    DegenerateDepth,
}

#[derive(Error, Debug)]
pub enum CameraError {
    #[error("Invalid focal length {name} = {value} (must be positive and finite)")]
    InvalidFocalLength { name: &'static str, value: f64 },
}

#[derive(Error, Debug)]
pub enum PoseError {
    #[error("Matrix is not a proper rotation (R*R^T != I or det != +1)")]
    NotARotation,
}

pub type Result<T> = std::result::Result<T, PinProjError>;
