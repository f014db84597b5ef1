//! Shared loop behind `argmax_axis` and `argmin_axis`.
//!
//! Every supported (input, output) dtype pair gets its own monomorphized
//! `arg_axis_typed` instance; the registry stores them as plain fn pointers.
use anyhow::{anyhow, Result};
use rayon::prelude::*;

use crate::config::ExecConfig;
use crate::error::KernelError;
use crate::kernel::ArgAxisPlan;
use crate::ops::cpu::reduce::ArgAxisGeometry;
use crate::ops::registry::KernelFn;
use crate::ops::OpKind;
use crate::tensor::{bf16, f16, DType, TensorElement, TensorValue};

/// Direction of an arg-reduction.
pub trait ArgSelect: Send + Sync + 'static {
    const OP: OpKind;

    /// True when `candidate` strictly beats the current `best`.
    fn prefer<T: PartialOrd>(candidate: &T, best: &T) -> bool;
}

#[derive(Debug, Clone, Copy)]
pub struct SelectMax;

#[derive(Debug, Clone, Copy)]
pub struct SelectMin;

impl ArgSelect for SelectMax {
    const OP: OpKind = OpKind::ArgmaxAxis;

    fn prefer<T: PartialOrd>(candidate: &T, best: &T) -> bool {
        candidate > best
    }
}

impl ArgSelect for SelectMin {
    const OP: OpKind = OpKind::ArgminAxis;

    fn prefer<T: PartialOrd>(candidate: &T, best: &T) -> bool {
        candidate < best
    }
}

/// Integer element that can hold an index along the reduced axis.
pub trait IndexElement: TensorElement + Copy {
    /// Largest index representable by this type.
    const MAX_INDEX: usize;

    /// Convert an index already checked against `MAX_INDEX`.
    fn from_index(index: usize) -> Self;

    /// Fail with `IndexOverflow` unless every index of an axis of length `len` fits.
    fn check_axis_len(len: usize) -> Result<()> {
        if len.saturating_sub(1) > Self::MAX_INDEX {
            return Err(KernelError::IndexOverflow {
                len,
                output: Self::DTYPE,
            }
            .into());
        }
        Ok(())
    }
}

impl IndexElement for i32 {
    const MAX_INDEX: usize = i32::MAX as usize;

    fn from_index(index: usize) -> Self {
        index as i32
    }
}

impl IndexElement for i64 {
    const MAX_INDEX: usize = i64::MAX as usize;

    fn from_index(index: usize) -> Self {
        index as i64
    }
}

/// Resolve the specialized loop for `(input, output)`, if one exists.
pub fn arg_axis_kernel<S: ArgSelect>(input: DType, output: DType) -> Option<KernelFn> {
    match output {
        DType::I32 => kernel_for_input::<S, i32>(input),
        DType::I64 => kernel_for_input::<S, i64>(input),
        _ => None,
    }
}

fn kernel_for_input<S: ArgSelect, O: IndexElement>(input: DType) -> Option<KernelFn> {
    let kernel: KernelFn = match input {
        DType::I8 => arg_axis_typed::<i8, O, S>,
        DType::I16 => arg_axis_typed::<i16, O, S>,
        DType::I32 => arg_axis_typed::<i32, O, S>,
        DType::I64 => arg_axis_typed::<i64, O, S>,
        DType::U8 => arg_axis_typed::<u8, O, S>,
        DType::U16 => arg_axis_typed::<u16, O, S>,
        DType::U32 => arg_axis_typed::<u32, O, S>,
        DType::U64 => arg_axis_typed::<u64, O, S>,
        DType::F16 => arg_axis_typed::<f16, O, S>,
        DType::BF16 => arg_axis_typed::<bf16, O, S>,
        DType::F32 => arg_axis_typed::<f32, O, S>,
        DType::F64 => arg_axis_typed::<f64, O, S>,
        DType::Bool => return None,
    };
    Some(kernel)
}

fn arg_axis_typed<T, O, S>(
    plan: &ArgAxisPlan,
    input: &TensorValue,
    output: &mut TensorValue,
    config: &ExecConfig,
) -> Result<()>
where
    T: TensorElement + PartialOrd + Copy,
    O: IndexElement,
    S: ArgSelect,
{
    let a = input.as_typed::<T>()?;
    let out = output.as_typed_mut::<O>()?;
    let geometry = ArgAxisGeometry::new(a.shape(), a.strides(), plan.axis);
    if geometry.positions() != out.data.len() {
        return Err(anyhow!(
            "{} output holds {} values, expected {}",
            S::OP,
            out.data.len(),
            geometry.positions()
        ));
    }
    if out.data.is_empty() {
        return Ok(());
    }
    let reduce_len = geometry.reduce_len;
    if reduce_len == 0 {
        return Err(KernelError::EmptyAxis {
            op: S::OP,
            axis: plan.axis,
            shape: a.shape().to_vec(),
        }
        .into());
    }
    O::check_axis_len(reduce_len)?;

    let select_last = plan.select_last_index;
    let data = a.data.as_slice();
    let step = geometry.axis_stride;
    // NaN never compares greater or less, so it only wins from index 0.
    let scan = |pos: usize| -> O {
        let base = geometry.base_offset(pos);
        let mut best = data[base];
        let mut best_idx = 0usize;
        for r in 1..reduce_len {
            let value = data[base + r * step];
            if S::prefer(&value, &best) || (select_last && value == best) {
                best = value;
                best_idx = r;
            }
        }
        O::from_index(best_idx)
    };

    if config.should_parallelize(out.data.len()) {
        out.data
            .par_iter_mut()
            .enumerate()
            .with_min_len(config.min_parallel_len)
            .for_each(|(pos, slot)| *slot = scan(pos));
    } else {
        for (pos, slot) in out.data.iter_mut().enumerate() {
            *slot = scan(pos);
        }
    }
    Ok(())
}
