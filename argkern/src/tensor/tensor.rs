//! Tensor container.
//!
//! `Tensor<T>` owns flat storage with shape/stride metadata. Kernels borrow
//! tensors for the duration of a call and never take ownership of them.
use anyhow::{anyhow, Result};

use super::shape::{
    checked_numel, compute_strides, is_contiguous, linear_to_indices, max_offset, numel, offset_for,
};

/// Tensor construction options (shape/stride overrides).
#[derive(Debug, Clone, Default)]
pub struct TensorOptions {
    /// Optional explicit shape.
    pub shape: Option<Vec<usize>>,
    /// Optional explicit strides, in elements.
    pub strides: Option<Vec<usize>>,
}

/// Owned tensor container with shape and stride metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<T> {
    pub data: Vec<T>,
    shape: Vec<usize>,
    strides: Vec<usize>,
}

impl<T> Tensor<T> {
    /// Build a rank-1 tensor from a flat data vector.
    ///
    /// # Example
    /// ```
    /// # use argkern::Tensor;
    /// # fn main() -> anyhow::Result<()> {
    /// let t = Tensor::from_vec(vec![1.0f32, 2.0, 3.0])?;
    /// assert_eq!(t.shape(), &[3]);
    /// # Ok(()) }
    /// ```
    pub fn from_vec(data: Vec<T>) -> Result<Self> {
        Self::from_vec_with_opts(data, TensorOptions::default())
    }

    /// Build a tensor with an explicit shape and row-major strides.
    pub fn from_shape_vec(shape: &[usize], data: Vec<T>) -> Result<Self> {
        Self::from_vec_with_opts(
            data,
            TensorOptions {
                shape: Some(shape.to_vec()),
                ..TensorOptions::default()
            },
        )
    }

    /// Build a tensor with explicit options.
    ///
    /// # Example
    /// ```
    /// # use argkern::{Tensor, TensorOptions};
    /// # fn main() -> anyhow::Result<()> {
    /// // column-major 2x3 view over the same six values
    /// let t = Tensor::from_vec_with_opts(
    ///     vec![1.0f32, 4.0, 2.0, 5.0, 3.0, 6.0],
    ///     TensorOptions { shape: Some(vec![2, 3]), strides: Some(vec![1, 2]) },
    /// )?;
    /// assert_eq!(*t.at(&[1, 2]), 6.0);
    /// # Ok(()) }
    /// ```
    pub fn from_vec_with_opts(data: Vec<T>, opts: TensorOptions) -> Result<Self> {
        let shape = match opts.shape {
            Some(shape) => shape,
            None => vec![data.len()],
        };
        let expected = checked_numel(&shape)
            .ok_or_else(|| anyhow!("tensor shape {:?} has more elements than fit in memory", shape))?;
        if expected != data.len() {
            return Err(anyhow!(
                "tensor shape {:?} expects {} values, got {}",
                shape,
                expected,
                data.len()
            ));
        }
        let strides = match opts.strides {
            Some(strides) => {
                if strides.len() != shape.len() {
                    return Err(anyhow!(
                        "tensor strides length {} does not match shape length {}",
                        strides.len(),
                        shape.len()
                    ));
                }
                if let Some(last) = max_offset(&shape, &strides) {
                    if last >= data.len() {
                        return Err(anyhow!(
                            "tensor strides {:?} address offset {} past storage of {} values",
                            strides,
                            last,
                            data.len()
                        ));
                    }
                }
                strides
            }
            None => compute_strides(&shape),
        };
        Ok(Self {
            data,
            shape,
            strides,
        })
    }

    /// Create a rank-0 tensor from a single value.
    ///
    /// # Example
    /// ```
    /// # use argkern::Tensor;
    /// let axis = Tensor::from_scalar(3i32);
    /// assert!(axis.shape().is_empty());
    /// ```
    pub fn from_scalar(value: T) -> Self {
        Self {
            data: vec![value],
            shape: Vec::new(),
            strides: Vec::new(),
        }
    }

    /// Return the tensor shape.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Return the tensor strides.
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Return the logical element count.
    pub fn numel(&self) -> usize {
        numel(&self.shape)
    }

    pub fn is_contiguous(&self) -> bool {
        is_contiguous(&self.shape, &self.strides)
    }

    /// Access a value by multidimensional indices.
    pub fn at(&self, indices: &[usize]) -> &T {
        let offset = offset_for(&self.shape, &self.strides, indices)
            .unwrap_or_else(|err| panic!("tensor index error: {}", err));
        &self.data[offset]
    }

    /// Collect the values in logical (row-major) order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        if self.is_contiguous() {
            return self.data.clone();
        }
        (0..self.numel())
            .map(|idx| self.at(&linear_to_indices(idx, &self.shape)).clone())
            .collect()
    }
}

impl<T: Clone + Default> Tensor<T> {
    /// Allocate a contiguous tensor filled with `T::default()`.
    pub fn zeros(shape: &[usize]) -> Self {
        Self {
            data: vec![T::default(); numel(shape)],
            shape: shape.to_vec(),
            strides: compute_strides(shape),
        }
    }

    /// Reshape in place to a contiguous layout, reusing the existing buffer.
    ///
    /// Existing values are kept up to the new length; new slots are defaulted.
    pub fn resize(&mut self, shape: &[usize]) {
        self.data.resize(numel(shape), T::default());
        self.shape = shape.to_vec();
        self.strides = compute_strides(shape);
    }
}
