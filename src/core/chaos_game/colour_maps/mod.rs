pub mod binary;
pub mod density_gradient;
pub mod errors;
pub mod kinds;
