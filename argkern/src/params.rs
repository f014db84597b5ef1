use serde::{Deserialize, Serialize};

use crate::tensor::DType;

/// Caller-supplied configuration of an arg-reduction kernel.
///
/// `output_type` is taken as-is; whether a kernel exists for it is only
/// decided when the kernel executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgReduceParams {
    /// Element type of the written indices.
    pub output_type: DType,
    /// Keep the reduced axis as a size-1 dimension.
    #[serde(default)]
    pub keepdims: bool,
    /// Report the last extreme along the axis instead of the first.
    #[serde(default)]
    pub select_last_index: bool,
}

impl ArgReduceParams {
    pub fn new(output_type: DType) -> Self {
        Self {
            output_type,
            keepdims: false,
            select_last_index: false,
        }
    }

    pub fn with_keepdims(mut self, keepdims: bool) -> Self {
        self.keepdims = keepdims;
        self
    }

    pub fn with_select_last_index(mut self, select_last_index: bool) -> Self {
        self.select_last_index = select_last_index;
        self
    }
}
