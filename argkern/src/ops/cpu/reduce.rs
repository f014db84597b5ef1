use anyhow::Result;

use crate::error::KernelError;

/// Resolve a possibly negative axis against `rank`.
pub fn normalize_axis(axis: i64, rank: usize) -> Result<usize> {
    let rank_i64 = rank as i64;
    let resolved = if axis < 0 { axis + rank_i64 } else { axis };
    if resolved < 0 || resolved >= rank_i64 {
        return Err(KernelError::InvalidAxis { axis, rank }.into());
    }
    Ok(resolved as usize)
}

/// Shape left after reducing `axis`; with `keepdims` the axis stays as size 1.
pub fn output_shape(shape: &[usize], axis: usize, keepdims: bool) -> Vec<usize> {
    if keepdims {
        shape
            .iter()
            .enumerate()
            .map(|(idx, dim)| if idx == axis { 1 } else { *dim })
            .collect()
    } else {
        shape
            .iter()
            .enumerate()
            .filter_map(|(idx, dim)| if idx == axis { None } else { Some(*dim) })
            .collect()
    }
}

/// Addressing of one axis reduction over a (possibly strided) input.
///
/// Output position `pos` is the row-major linear index over the input shape
/// with `axis` removed; its segment starts at `base_offset(pos)` and advances
/// by `axis_stride` elements.
#[derive(Debug, Clone)]
pub struct ArgAxisGeometry {
    outer_shape: Vec<usize>,
    outer_strides: Vec<usize>,
    pub axis_stride: usize,
    pub reduce_len: usize,
}

impl ArgAxisGeometry {
    pub fn new(shape: &[usize], strides: &[usize], axis: usize) -> Self {
        let mut outer_shape = Vec::with_capacity(shape.len().saturating_sub(1));
        let mut outer_strides = Vec::with_capacity(shape.len().saturating_sub(1));
        for (idx, (dim, stride)) in shape.iter().zip(strides.iter()).enumerate() {
            if idx != axis {
                outer_shape.push(*dim);
                outer_strides.push(*stride);
            }
        }
        Self {
            outer_shape,
            outer_strides,
            axis_stride: strides[axis],
            reduce_len: shape[axis],
        }
    }

    /// Number of independent segments (output positions).
    pub fn positions(&self) -> usize {
        self.outer_shape.iter().product()
    }

    /// Storage offset of the first element of segment `pos`.
    pub fn base_offset(&self, mut pos: usize) -> usize {
        let mut offset = 0usize;
        for (dim, stride) in self.outer_shape.iter().zip(self.outer_strides.iter()).rev() {
            offset += (pos % dim) * stride;
            pos /= dim;
        }
        offset
    }
}
