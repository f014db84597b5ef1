#[path = "common/mod.rs"]
mod common;

#[path = "kernel/argmax_basic.rs"]
mod argmax_basic;
#[path = "kernel/argmax_errors.rs"]
mod argmax_errors;
#[path = "kernel/argmin.rs"]
mod argmin;
#[path = "kernel/dtypes.rs"]
mod dtypes;
#[path = "kernel/parallel.rs"]
mod parallel;

#[path = "tensor/tensor_layout.rs"]
mod tensor_layout;
#[path = "tensor/params.rs"]
mod params;
