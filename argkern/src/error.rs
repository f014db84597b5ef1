//! Recoverable kernel errors.
//!
//! Kernels return `anyhow::Result`; failures a caller may want to branch on are
//! raised as a `KernelError` and can be recovered with
//! `err.downcast_ref::<KernelError>()`.

use thiserror::Error;

use crate::ops::OpKind;
use crate::tensor::DType;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// Resolved axis lies outside `[0, rank)`.
    #[error("axis {axis} out of range for rank {rank}")]
    InvalidAxis {
        /// Axis as read from the axis tensor, before normalization.
        axis: i64,
        rank: usize,
    },

    /// Axis tensor is not a single-element signed integer tensor.
    #[error("axis tensor must hold one signed integer, got {dtype:?} with shape {shape:?}")]
    InvalidAxisTensor { dtype: DType, shape: Vec<usize> },

    /// No specialized loop exists for this input/output dtype pair.
    #[error("{op} has no kernel for input {input:?} with output {output:?}")]
    UnsupportedTypeCombination {
        op: OpKind,
        input: DType,
        output: DType,
    },

    /// The largest index along the axis is not representable in the output dtype.
    #[error("axis length {len} does not fit in {output:?} indices")]
    IndexOverflow { len: usize, output: DType },

    /// Reduction over a zero-length axis with a non-empty output.
    #[error("{op} cannot reduce empty axis {axis} of shape {shape:?}")]
    EmptyAxis {
        op: OpKind,
        axis: usize,
        shape: Vec<usize>,
    },
}
