pub mod reduce;
pub mod reduction;

pub use reduction::{argmax_axis, argmin_axis};
