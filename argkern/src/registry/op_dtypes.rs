use crate::ops::OpKind;
use crate::tensor::DType;

pub mod argmax_axis_dtypes;
pub mod argmin_axis_dtypes;

pub use argmax_axis_dtypes::ARGMAX_AXIS_DTYPE_SUPPORT;
pub use argmin_axis_dtypes::ARGMIN_AXIS_DTYPE_SUPPORT;

/// Index dtypes an arg-reduction may write.
pub const ARG_AXIS_INDEX_DTYPES: &[DType] = &[DType::I32, DType::I64];

/// Input/output dtype support of one op; every `inputs x outputs` pair has a kernel.
#[derive(Debug, Clone, Copy)]
pub struct OpDTypeSupport {
    pub inputs: &'static [DType],
    pub outputs: &'static [DType],
}

impl OpDTypeSupport {
    pub fn pairs(&self) -> impl Iterator<Item = (DType, DType)> + '_ {
        self.inputs
            .iter()
            .flat_map(move |input| self.outputs.iter().map(move |output| (*input, *output)))
    }
}

pub fn op_dtype_support(kind: OpKind) -> OpDTypeSupport {
    match kind {
        OpKind::ArgmaxAxis => ARGMAX_AXIS_DTYPE_SUPPORT,
        OpKind::ArgminAxis => ARGMIN_AXIS_DTYPE_SUPPORT,
    }
}
