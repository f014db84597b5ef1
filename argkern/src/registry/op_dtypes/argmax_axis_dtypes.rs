use crate::registry::op_dtypes::{OpDTypeSupport, ARG_AXIS_INDEX_DTYPES};
use crate::tensor::DType;

pub const ARGMAX_AXIS_INPUT_DTYPES: &[DType] = &[
    DType::F16,
    DType::BF16,
    DType::F32,
    DType::F64,
    DType::I8,
    DType::I16,
    DType::I32,
    DType::I64,
    DType::U8,
    DType::U16,
    DType::U32,
    DType::U64,
];

pub const ARGMAX_AXIS_DTYPE_SUPPORT: OpDTypeSupport = OpDTypeSupport {
    inputs: ARGMAX_AXIS_INPUT_DTYPES,
    outputs: ARG_AXIS_INDEX_DTYPES,
};
