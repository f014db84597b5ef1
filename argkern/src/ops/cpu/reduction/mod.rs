pub mod arg_axis;
pub mod argmax_axis;
pub mod argmin_axis;

pub use arg_axis::{ArgSelect, IndexElement, SelectMax, SelectMin};
