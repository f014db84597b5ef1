use once_cell::sync::Lazy;

use crate::ops::registry::{build_op_entries, KernelFn, OpKey};
use crate::ops::OpKind;
use crate::registry::ARGMIN_AXIS_DTYPE_SUPPORT;

use super::kernel::argmin_axis_dispatch;

pub static ENTRIES: Lazy<Vec<(OpKey, KernelFn)>> = Lazy::new(|| {
    build_op_entries(
        OpKind::ArgminAxis,
        ARGMIN_AXIS_DTYPE_SUPPORT,
        argmin_axis_dispatch,
    )
    .expect("failed to build argmin_axis cpu entries")
});
