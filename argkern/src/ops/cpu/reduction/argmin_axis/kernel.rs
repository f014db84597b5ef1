use crate::ops::cpu::reduction::arg_axis::{arg_axis_kernel, SelectMin};
use crate::ops::registry::KernelFn;
use crate::tensor::DType;

pub fn argmin_axis_dispatch(input: DType, output: DType) -> Option<KernelFn> {
    arg_axis_kernel::<SelectMin>(input, output)
}
