//! Test solids for exercising the projection pipeline

mod cube;

pub use cube::CubeWireframe;
