mod shape;
mod tensor;
mod value;

pub use half::{bf16, f16};
pub use shape::{compute_strides, numel};
pub use tensor::{Tensor, TensorOptions};
pub use value::{DType, TensorElement, TensorValue};
