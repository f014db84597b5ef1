//! Two-phase arg-reduction kernels.
//!
//! A kernel is built from `ArgReduceParams`, then `configure`d once against the
//! input, axis and output tensors, then `execute`d any number of times. The
//! caller owns every tensor; the kernel only borrows them per call.
//!
//! # Example
//! ```
//! # use argkern::{ArgMax, ArgReduceParams, DType, Tensor, TensorValue};
//! # fn main() -> anyhow::Result<()> {
//! let input = TensorValue::from(Tensor::from_shape_vec(&[2, 3], vec![1.0f32, 5.0, 2.0, 7.0, 0.0, 7.0])?);
//! let axis = TensorValue::from(Tensor::from_scalar(-1i32));
//! let mut output = TensorValue::zeros(DType::I64, &[]);
//!
//! let mut kernel = ArgMax::new(ArgReduceParams::new(DType::I64));
//! kernel.configure(&input, &axis, &mut output)?;
//! kernel.execute(&input, &mut output)?;
//! assert_eq!(output.as_typed::<i64>()?.data, vec![1, 0]);
//! # Ok(()) }
//! ```
use std::marker::PhantomData;

use anyhow::Result;

use crate::config::ExecConfig;
use crate::error::KernelError;
use crate::ops::cpu::reduce::{normalize_axis, output_shape};
use crate::ops::cpu::reduction::{ArgSelect, SelectMax, SelectMin};
use crate::ops::registry::lookup_kernel;
use crate::ops::OpKind;
use crate::params::ArgReduceParams;
use crate::tensor::{DType, TensorValue};

/// Index of the maximum along an axis; ties resolve to the lowest index.
///
/// NaN is never preferred over another value, so a NaN is only reported when
/// it sits at index 0 of its row.
pub type ArgMax = ArgAxisKernel<SelectMax>;
/// Index of the minimum along an axis; ties resolve to the lowest index.
///
/// NaN handling matches [`ArgMax`].
pub type ArgMin = ArgAxisKernel<SelectMin>;

/// Shape and type decisions fixed by `configure`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgAxisPlan {
    pub op: OpKind,
    /// Resolved, non-negative reduction axis.
    pub axis: usize,
    pub input_dtype: DType,
    pub input_shape: Vec<usize>,
    pub output_dtype: DType,
    pub output_shape: Vec<usize>,
    /// Length of the reduced axis.
    pub reduce_len: usize,
    pub select_last_index: bool,
}

#[derive(Debug, Clone)]
pub struct ArgAxisKernel<S: ArgSelect> {
    params: ArgReduceParams,
    config: ExecConfig,
    plan: Option<ArgAxisPlan>,
    _select: PhantomData<S>,
}

impl<S: ArgSelect> ArgAxisKernel<S> {
    /// Build an unconfigured kernel using `ExecConfig::global()`.
    pub fn new(params: ArgReduceParams) -> Self {
        Self::with_config(params, *ExecConfig::global())
    }

    pub fn with_config(params: ArgReduceParams, config: ExecConfig) -> Self {
        Self {
            params,
            config,
            plan: None,
            _select: PhantomData,
        }
    }

    pub fn op(&self) -> OpKind {
        S::OP
    }

    pub fn params(&self) -> &ArgReduceParams {
        &self.params
    }

    pub fn config(&self) -> &ExecConfig {
        &self.config
    }

    /// The configured plan, `None` until `configure` succeeds.
    pub fn plan(&self) -> Option<&ArgAxisPlan> {
        self.plan.as_ref()
    }

    pub fn is_configured(&self) -> bool {
        self.plan.is_some()
    }

    /// Resolve the axis, then assign shape and dtype to `output`.
    ///
    /// Only the axis scalar is read. The output dtype is taken from the params
    /// without checking that a kernel exists for it; `execute` reports that.
    /// On error the output is left untouched and the kernel is unconfigured.
    pub fn configure(
        &mut self,
        input: &TensorValue,
        axis: &TensorValue,
        output: &mut TensorValue,
    ) -> Result<()> {
        self.plan = None;
        let raw_axis = axis.scalar_i64().ok_or_else(|| KernelError::InvalidAxisTensor {
            dtype: axis.dtype(),
            shape: axis.shape().to_vec(),
        })?;
        let input_shape = input.shape();
        let resolved = normalize_axis(raw_axis, input_shape.len())?;
        let out_shape = output_shape(input_shape, resolved, self.params.keepdims);
        output.reset(self.params.output_type, &out_shape);

        crate::trace!(
            "{}.configure axis={} resolved={} input={:?}{:?} output={:?}{:?}",
            S::OP,
            raw_axis,
            resolved,
            input.dtype(),
            input_shape,
            self.params.output_type,
            out_shape
        );
        self.plan = Some(ArgAxisPlan {
            op: S::OP,
            axis: resolved,
            input_dtype: input.dtype(),
            input_shape: input_shape.to_vec(),
            output_dtype: self.params.output_type,
            output_shape: out_shape,
            reduce_len: input_shape[resolved],
            select_last_index: self.params.select_last_index,
        });
        Ok(())
    }

    /// Write the arg-reduction of `input` into `output`.
    ///
    /// Floats are compared with `PartialOrd`. NaN is neither greater nor less
    /// than anything, so it never replaces the running best; a row only reports
    /// a NaN position when the NaN comes first.
    ///
    /// # Panics
    /// If called before a successful `configure`, or with tensors whose dtype or
    /// shape differ from the configured ones.
    pub fn execute(&self, input: &TensorValue, output: &mut TensorValue) -> Result<()> {
        let plan = self
            .plan
            .as_ref()
            .unwrap_or_else(|| panic!("{} executed before configure", S::OP));
        assert!(
            input.dtype() == plan.input_dtype && input.shape() == plan.input_shape.as_slice(),
            "{} input {:?}{:?} does not match configured {:?}{:?}",
            S::OP,
            input.dtype(),
            input.shape(),
            plan.input_dtype,
            plan.input_shape
        );
        assert!(
            output.dtype() == plan.output_dtype && output.shape() == plan.output_shape.as_slice(),
            "{} output {:?}{:?} does not match configured {:?}{:?}",
            S::OP,
            output.dtype(),
            output.shape(),
            plan.output_dtype,
            plan.output_shape
        );

        let Some(kernel) = lookup_kernel(S::OP, plan.input_dtype, plan.output_dtype) else {
            crate::error!(
                "{} has no kernel for {:?} -> {:?}",
                S::OP,
                plan.input_dtype,
                plan.output_dtype
            );
            return Err(KernelError::UnsupportedTypeCombination {
                op: S::OP,
                input: plan.input_dtype,
                output: plan.output_dtype,
            }
            .into());
        };
        kernel(plan, input, output, &self.config)
    }
}
