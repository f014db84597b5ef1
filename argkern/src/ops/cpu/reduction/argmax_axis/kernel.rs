use crate::ops::cpu::reduction::arg_axis::{arg_axis_kernel, SelectMax};
use crate::ops::registry::KernelFn;
use crate::tensor::DType;

pub fn argmax_axis_dispatch(input: DType, output: DType) -> Option<KernelFn> {
    arg_axis_kernel::<SelectMax>(input, output)
}
