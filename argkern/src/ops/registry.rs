use std::collections::HashMap;

use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;

use crate::config::ExecConfig;
use crate::kernel::ArgAxisPlan;
use crate::ops::cpu::{argmax_axis, argmin_axis};
use crate::ops::OpKind;
use crate::registry::{op_dtype_support, OpDTypeSupport};
use crate::tensor::{DType, TensorValue};

/// Specialized host loop for one (op, input dtype, output dtype) combination.
pub type KernelFn = fn(&ArgAxisPlan, &TensorValue, &mut TensorValue, &ExecConfig) -> Result<()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpKey {
    pub kind: OpKind,
    pub input: DType,
    pub out0: DType,
}

static KERNELS: Lazy<HashMap<OpKey, KernelFn>> = Lazy::new(|| {
    argmax_axis::registry::ENTRIES
        .iter()
        .chain(argmin_axis::registry::ENTRIES.iter())
        .map(|(key, kernel)| (*key, *kernel))
        .collect()
});

/// Build registry entries for every pair in `support`.
///
/// Fails if the support table names a pair `dispatch` has no loop for.
pub fn build_op_entries(
    kind: OpKind,
    support: OpDTypeSupport,
    dispatch: fn(DType, DType) -> Option<KernelFn>,
) -> Result<Vec<(OpKey, KernelFn)>> {
    let mut entries = Vec::new();
    for (input, out0) in support.pairs() {
        let kernel = dispatch(input, out0).ok_or_else(|| {
            anyhow!(
                "op {} lists {:?} -> {:?} but has no kernel for it",
                kind,
                input,
                out0
            )
        })?;
        entries.push((OpKey { kind, input, out0 }, kernel));
    }
    Ok(entries)
}

pub fn lookup_kernel(op: OpKind, input_dtype: DType, output_dtype: DType) -> Option<KernelFn> {
    KERNELS
        .get(&OpKey {
            kind: op,
            input: input_dtype,
            out0: output_dtype,
        })
        .copied()
}

/// All (input, output) dtype pairs `op` can execute.
pub fn supported_pairs(op: OpKind) -> Vec<(DType, DType)> {
    op_dtype_support(op).pairs().collect()
}
