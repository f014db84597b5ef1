//! Arg-reduction CPU kernels (`argmax_axis`, `argmin_axis`) for a tensor graph
//! executor.
//!
//! Kernels follow a configure/execute life cycle; see [`ArgAxisKernel`].

#[doc(hidden)]
pub mod logging;

mod config;
mod error;
mod kernel;
mod ops;
mod params;
mod registry;
mod tensor;

pub use config::{ExecConfig, DEFAULT_MIN_PARALLEL_LEN};
pub use error::KernelError;
pub use kernel::{ArgAxisKernel, ArgAxisPlan, ArgMax, ArgMin};
pub use ops::cpu::reduction::{ArgSelect, IndexElement, SelectMax, SelectMin};
pub use ops::registry::{lookup_kernel, supported_pairs, KernelFn, OpKey};
pub use ops::OpKind;
pub use params::ArgReduceParams;
pub use registry::{op_dtype_support, OpDTypeSupport};
pub use tensor::{bf16, compute_strides, f16, numel, DType, Tensor, TensorElement, TensorOptions, TensorValue};
