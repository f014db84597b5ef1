use anyhow::Result;
use argkern::{DType, Tensor, TensorOptions, TensorValue};

#[test]
fn tensor_strides_match_default_layout() -> Result<()> {
    let tensor = Tensor::from_shape_vec(&[2, 3], vec![0.0f32; 6])?;
    assert_eq!(tensor.shape(), &[2, 3]);
    assert_eq!(tensor.strides(), &[3, 1]);
    assert!(tensor.is_contiguous());
    Ok(())
}

#[test]
fn tensor_rejects_length_mismatch() {
    let err = Tensor::from_shape_vec(&[2, 3], vec![1u8; 5]).unwrap_err();
    assert_eq!(err.to_string(), "tensor shape [2, 3] expects 6 values, got 5");
}

#[test]
fn tensor_shape_with_zero_dim_ignores_huge_extents() -> Result<()> {
    let tensor = Tensor::<f32>::from_shape_vec(&[usize::MAX, 2, 0], Vec::new())?;
    assert_eq!(tensor.numel(), 0);
    assert_eq!(argkern::numel(&[usize::MAX, 2, 0]), 0);

    let err = Tensor::<f32>::from_shape_vec(&[usize::MAX, 2], Vec::new()).unwrap_err();
    assert!(err.to_string().contains("more elements than fit"));
    Ok(())
}

#[test]
fn tensor_rejects_strides_past_storage() {
    let err = Tensor::from_vec_with_opts(
        vec![0i32; 6],
        TensorOptions {
            shape: Some(vec![2, 3]),
            strides: Some(vec![3, 2]),
        },
    )
    .unwrap_err();
    assert!(err.to_string().contains("past storage"));

    let err = Tensor::from_vec_with_opts(
        vec![0i32; 6],
        TensorOptions {
            shape: Some(vec![2, 3]),
            strides: Some(vec![1]),
        },
    )
    .unwrap_err();
    assert!(err.to_string().contains("does not match shape length"));
}

#[test]
fn scalar_tensor_has_rank_zero() {
    let tensor = Tensor::from_scalar(-1i64);
    assert!(tensor.shape().is_empty());
    assert_eq!(tensor.numel(), 1);
    assert_eq!(*tensor.at(&[]), -1);
}

#[test]
fn tensor_value_reset_reuses_matching_dtype() -> Result<()> {
    let mut value = TensorValue::from(Tensor::from_shape_vec(&[4], vec![9i64, 8, 7, 6])?);
    value.reset(DType::I64, &[2, 1]);
    assert_eq!(value.shape(), &[2, 1]);
    assert_eq!(value.as_typed::<i64>()?.data, vec![9, 8]);

    value.reset(DType::I32, &[3]);
    assert_eq!(value.dtype(), DType::I32);
    assert_eq!(value.as_typed::<i32>()?.data, vec![0, 0, 0]);
    assert!(value.as_typed::<i64>().is_err());
    Ok(())
}

#[test]
fn scalar_i64_reads_signed_single_values_only() -> Result<()> {
    assert_eq!(TensorValue::from(Tensor::from_scalar(-3i8)).scalar_i64(), Some(-3));
    assert_eq!(
        TensorValue::from(Tensor::from_shape_vec(&[1, 1], vec![5i16])?).scalar_i64(),
        Some(5)
    );
    assert_eq!(TensorValue::from(Tensor::from_scalar(5u8)).scalar_i64(), None);
    assert_eq!(
        TensorValue::from(Tensor::from_shape_vec(&[2], vec![1i32, 2])?).scalar_i64(),
        None
    );
    Ok(())
}

#[test]
fn dtype_identifiers_round_trip() -> Result<()> {
    for dtype in [
        DType::I8,
        DType::I16,
        DType::I32,
        DType::I64,
        DType::U8,
        DType::U16,
        DType::U32,
        DType::U64,
        DType::F16,
        DType::BF16,
        DType::F32,
        DType::F64,
        DType::Bool,
    ] {
        assert_eq!(DType::from_ident(dtype.ident())?, dtype);
    }
    assert_eq!(DType::from_ident("s32")?, DType::I32);
    assert!(DType::from_ident("f8").is_err());
    Ok(())
}
