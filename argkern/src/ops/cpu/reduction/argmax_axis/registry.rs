use once_cell::sync::Lazy;

use crate::ops::registry::{build_op_entries, KernelFn, OpKey};
use crate::ops::OpKind;
use crate::registry::ARGMAX_AXIS_DTYPE_SUPPORT;

use super::kernel::argmax_axis_dispatch;

pub static ENTRIES: Lazy<Vec<(OpKey, KernelFn)>> = Lazy::new(|| {
    build_op_entries(
        OpKind::ArgmaxAxis,
        ARGMAX_AXIS_DTYPE_SUPPORT,
        argmax_axis_dispatch,
    )
    .expect("failed to build argmax_axis cpu entries")
});
