//! Camera sensor model (ideal pinhole intrinsics)

mod intrinsics;

pub use intrinsics::Intrinsics;
