pub mod affine;
pub mod errors;
pub mod julia;
pub mod transform2d;
