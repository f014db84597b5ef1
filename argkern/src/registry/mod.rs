pub mod op_dtypes;

pub use op_dtypes::{
    op_dtype_support, OpDTypeSupport, ARGMAX_AXIS_DTYPE_SUPPORT, ARGMIN_AXIS_DTYPE_SUPPORT,
};
