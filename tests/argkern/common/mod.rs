#![allow(dead_code)]

use anyhow::{anyhow, Result};
use argkern::{
    ArgAxisKernel, ArgReduceParams, ArgSelect, DType, ExecConfig, KernelError, Tensor,
    TensorElement, TensorValue,
};

pub fn tensor<T: TensorElement>(shape: &[usize], data: Vec<T>) -> Result<TensorValue> {
    Ok(T::into_value(Tensor::from_shape_vec(shape, data)?))
}

pub fn axis_i32(axis: i32) -> TensorValue {
    TensorValue::from(Tensor::from_scalar(axis))
}

pub fn axis_i64(axis: i64) -> TensorValue {
    TensorValue::from(Tensor::from_scalar(axis))
}

/// Placeholder output handle; `configure` assigns its real dtype and shape.
pub fn empty_output() -> TensorValue {
    TensorValue::zeros(DType::F32, &[0])
}

/// Configure and execute once, returning the output tensor.
pub fn run_kernel<S: ArgSelect>(
    params: ArgReduceParams,
    config: ExecConfig,
    input: &TensorValue,
    axis: &TensorValue,
) -> Result<TensorValue> {
    let mut output = empty_output();
    let mut kernel = ArgAxisKernel::<S>::with_config(params, config);
    kernel.configure(input, axis, &mut output)?;
    kernel.execute(input, &mut output)?;
    Ok(output)
}

/// Output values widened to i64 regardless of the index dtype.
pub fn indices(value: &TensorValue) -> Result<Vec<i64>> {
    match value {
        TensorValue::I32(tensor) => Ok(tensor.data.iter().map(|v| *v as i64).collect()),
        TensorValue::I64(tensor) => Ok(tensor.data.clone()),
        other => Err(anyhow!("expected index tensor, got {:?}", other.dtype())),
    }
}

pub fn kernel_error(err: &anyhow::Error) -> Option<&KernelError> {
    err.downcast_ref::<KernelError>()
}

/// Coordinate-by-coordinate reference over a row-major buffer.
pub fn naive_arg_reduce<T: PartialOrd + Copy>(
    shape: &[usize],
    data: &[T],
    axis: usize,
    select_min: bool,
    select_last: bool,
) -> Vec<i64> {
    let outer: usize = shape[..axis].iter().product();
    let len = shape[axis];
    let inner: usize = shape[axis + 1..].iter().product();
    let mut out = Vec::with_capacity(outer * inner);
    for o in 0..outer {
        for i in 0..inner {
            let at = |r: usize| data[(o * len + r) * inner + i];
            let mut best_idx = 0usize;
            for r in 1..len {
                let (v, b) = (at(r), at(best_idx));
                let wins = if select_min { v < b } else { v > b };
                if wins || (select_last && v == b) {
                    best_idx = r;
                }
            }
            out.push(best_idx as i64);
        }
    }
    out
}
