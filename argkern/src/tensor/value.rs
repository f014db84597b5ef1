use anyhow::{anyhow, Result};
use half::{bf16, f16};
use serde::{Deserialize, Serialize};

use super::Tensor;

/// Element type that can be borrowed out of / wrapped into a `TensorValue`.
pub trait TensorElement: Sized + Clone + Default + Send + Sync {
    const DTYPE: DType;

    /// Borrow the typed tensor if `value` holds this element type.
    fn as_tensor(value: &TensorValue) -> Option<&Tensor<Self>>;
    /// Mutably borrow the typed tensor if `value` holds this element type.
    fn as_tensor_mut(value: &mut TensorValue) -> Option<&mut Tensor<Self>>;
    /// Wrap a typed tensor into a generic value.
    fn into_value(tensor: Tensor<Self>) -> TensorValue;
}

macro_rules! tensor_element {
    ($ty:ty, $variant:ident) => {
        impl TensorElement for $ty {
            const DTYPE: DType = DType::$variant;

            fn as_tensor(value: &TensorValue) -> Option<&Tensor<Self>> {
                match value {
                    TensorValue::$variant(tensor) => Some(tensor),
                    _ => None,
                }
            }

            fn as_tensor_mut(value: &mut TensorValue) -> Option<&mut Tensor<Self>> {
                match value {
                    TensorValue::$variant(tensor) => Some(tensor),
                    _ => None,
                }
            }

            fn into_value(tensor: Tensor<Self>) -> TensorValue {
                TensorValue::$variant(tensor)
            }
        }

        impl From<Tensor<$ty>> for TensorValue {
            fn from(tensor: Tensor<$ty>) -> Self {
                TensorValue::$variant(tensor)
            }
        }
    };
}

tensor_element!(i8, I8);
tensor_element!(i16, I16);
tensor_element!(i32, I32);
tensor_element!(i64, I64);
tensor_element!(u8, U8);
tensor_element!(u16, U16);
tensor_element!(u32, U32);
tensor_element!(u64, U64);
tensor_element!(f16, F16);
tensor_element!(bf16, BF16);
tensor_element!(f32, F32);
tensor_element!(f64, F64);
tensor_element!(bool, Bool);

/// Supported element dtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DType {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F16,
    BF16,
    F32,
    F64,
    Bool,
}

impl DType {
    /// Parse a dtype from its identifier string.
    pub fn from_ident(ident: &str) -> Result<Self> {
        match ident {
            "i8" | "s8" => Ok(DType::I8),
            "i16" | "s16" => Ok(DType::I16),
            "i32" | "s32" => Ok(DType::I32),
            "i64" | "s64" => Ok(DType::I64),
            "u8" => Ok(DType::U8),
            "u16" => Ok(DType::U16),
            "u32" => Ok(DType::U32),
            "u64" => Ok(DType::U64),
            "f16" => Ok(DType::F16),
            "bf16" => Ok(DType::BF16),
            "f32" => Ok(DType::F32),
            "f64" => Ok(DType::F64),
            "bool" => Ok(DType::Bool),
            _ => Err(anyhow!("unsupported dtype: {}", ident)),
        }
    }

    /// Identifier accepted by `from_ident`.
    pub fn ident(self) -> &'static str {
        match self {
            DType::I8 => "i8",
            DType::I16 => "i16",
            DType::I32 => "i32",
            DType::I64 => "i64",
            DType::U8 => "u8",
            DType::U16 => "u16",
            DType::U32 => "u32",
            DType::U64 => "u64",
            DType::F16 => "f16",
            DType::BF16 => "bf16",
            DType::F32 => "f32",
            DType::F64 => "f64",
            DType::Bool => "bool",
        }
    }
}

/// Runtime tensor value with an enum over concrete dtypes.
#[derive(Debug, Clone, PartialEq)]
pub enum TensorValue {
    I8(Tensor<i8>),
    I16(Tensor<i16>),
    I32(Tensor<i32>),
    I64(Tensor<i64>),
    U8(Tensor<u8>),
    U16(Tensor<u16>),
    U32(Tensor<u32>),
    U64(Tensor<u64>),
    F16(Tensor<f16>),
    BF16(Tensor<bf16>),
    F32(Tensor<f32>),
    F64(Tensor<f64>),
    Bool(Tensor<bool>),
}

macro_rules! each_variant {
    ($value:expr, $tensor:ident => $body:expr) => {
        match $value {
            TensorValue::I8($tensor) => $body,
            TensorValue::I16($tensor) => $body,
            TensorValue::I32($tensor) => $body,
            TensorValue::I64($tensor) => $body,
            TensorValue::U8($tensor) => $body,
            TensorValue::U16($tensor) => $body,
            TensorValue::U32($tensor) => $body,
            TensorValue::U64($tensor) => $body,
            TensorValue::F16($tensor) => $body,
            TensorValue::BF16($tensor) => $body,
            TensorValue::F32($tensor) => $body,
            TensorValue::F64($tensor) => $body,
            TensorValue::Bool($tensor) => $body,
        }
    };
}

impl TensorValue {
    /// Return the dtype of this value.
    pub fn dtype(&self) -> DType {
        match self {
            TensorValue::I8(_) => DType::I8,
            TensorValue::I16(_) => DType::I16,
            TensorValue::I32(_) => DType::I32,
            TensorValue::I64(_) => DType::I64,
            TensorValue::U8(_) => DType::U8,
            TensorValue::U16(_) => DType::U16,
            TensorValue::U32(_) => DType::U32,
            TensorValue::U64(_) => DType::U64,
            TensorValue::F16(_) => DType::F16,
            TensorValue::BF16(_) => DType::BF16,
            TensorValue::F32(_) => DType::F32,
            TensorValue::F64(_) => DType::F64,
            TensorValue::Bool(_) => DType::Bool,
        }
    }

    /// Return the tensor shape.
    pub fn shape(&self) -> &[usize] {
        each_variant!(self, tensor => tensor.shape())
    }

    /// Return the tensor strides.
    pub fn strides(&self) -> &[usize] {
        each_variant!(self, tensor => tensor.strides())
    }

    /// Return the logical element count.
    pub fn numel(&self) -> usize {
        each_variant!(self, tensor => tensor.numel())
    }

    /// Allocate a contiguous zero-filled tensor of the given dtype.
    pub fn zeros(dtype: DType, shape: &[usize]) -> TensorValue {
        match dtype {
            DType::I8 => TensorValue::I8(Tensor::zeros(shape)),
            DType::I16 => TensorValue::I16(Tensor::zeros(shape)),
            DType::I32 => TensorValue::I32(Tensor::zeros(shape)),
            DType::I64 => TensorValue::I64(Tensor::zeros(shape)),
            DType::U8 => TensorValue::U8(Tensor::zeros(shape)),
            DType::U16 => TensorValue::U16(Tensor::zeros(shape)),
            DType::U32 => TensorValue::U32(Tensor::zeros(shape)),
            DType::U64 => TensorValue::U64(Tensor::zeros(shape)),
            DType::F16 => TensorValue::F16(Tensor::zeros(shape)),
            DType::BF16 => TensorValue::BF16(Tensor::zeros(shape)),
            DType::F32 => TensorValue::F32(Tensor::zeros(shape)),
            DType::F64 => TensorValue::F64(Tensor::zeros(shape)),
            DType::Bool => TensorValue::Bool(Tensor::zeros(shape)),
        }
    }

    /// Set dtype and shape, reusing the current buffer when the dtype already matches.
    pub fn reset(&mut self, dtype: DType, shape: &[usize]) {
        if self.dtype() != dtype {
            *self = TensorValue::zeros(dtype, shape);
            return;
        }
        each_variant!(self, tensor => tensor.resize(shape))
    }

    /// Read a single-element signed integer tensor as `i64`.
    pub fn scalar_i64(&self) -> Option<i64> {
        if self.numel() != 1 {
            return None;
        }
        match self {
            TensorValue::I8(tensor) => tensor.data.first().map(|v| *v as i64),
            TensorValue::I16(tensor) => tensor.data.first().map(|v| *v as i64),
            TensorValue::I32(tensor) => tensor.data.first().map(|v| *v as i64),
            TensorValue::I64(tensor) => tensor.data.first().copied(),
            _ => None,
        }
    }

    /// Borrow as a typed tensor, failing on dtype mismatch.
    pub fn as_typed<T: TensorElement>(&self) -> Result<&Tensor<T>> {
        T::as_tensor(self)
            .ok_or_else(|| anyhow!("expected {:?} tensor, got {:?}", T::DTYPE, self.dtype()))
    }

    /// Mutably borrow as a typed tensor, failing on dtype mismatch.
    pub fn as_typed_mut<T: TensorElement>(&mut self) -> Result<&mut Tensor<T>> {
        let dtype = self.dtype();
        T::as_tensor_mut(self)
            .ok_or_else(|| anyhow!("expected {:?} tensor, got {:?}", T::DTYPE, dtype))
    }
}
