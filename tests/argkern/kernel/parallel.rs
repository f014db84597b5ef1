use anyhow::Result;
use argkern::{
    ArgReduceParams, DType, ExecConfig, SelectMax, SelectMin, Tensor, TensorOptions, TensorValue,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common;

fn eager_parallel() -> ExecConfig {
    ExecConfig {
        parallel: true,
        min_parallel_len: 1,
    }
}

#[test]
fn arg_axis_parallel_matches_sequential_and_reference() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..8 {
        let rank = rng.gen_range(1..=4);
        let shape: Vec<usize> = (0..rank).map(|_| rng.gen_range(1..=6)).collect();
        let len: usize = shape.iter().product();
        // small value range so ties show up often
        let data: Vec<i32> = (0..len).map(|_| rng.gen_range(-3..=3)).collect();
        let input = common::tensor::<i32>(&shape, data.clone())?;

        for axis in 0..rank {
            let params = ArgReduceParams::new(DType::I64);
            let par = common::run_kernel::<SelectMax>(
                params,
                eager_parallel(),
                &input,
                &common::axis_i32(axis as i32),
            )?;
            let seq = common::run_kernel::<SelectMax>(
                params,
                ExecConfig::sequential(),
                &input,
                &common::axis_i32(axis as i32),
            )?;
            assert_eq!(par, seq, "shape {:?} axis {}", shape, axis);
            assert_eq!(
                common::indices(&par)?,
                common::naive_arg_reduce(&shape, &data, axis, false, false)
            );

            let last = common::run_kernel::<SelectMin>(
                params.with_select_last_index(true),
                eager_parallel(),
                &input,
                &common::axis_i32(axis as i32 - rank as i32),
            )?;
            assert_eq!(
                common::indices(&last)?,
                common::naive_arg_reduce(&shape, &data, axis, true, true)
            );
        }
    }
    Ok(())
}

#[test]
fn arg_axis_large_float_input_splits_across_threads() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(42);
    let shape = [64usize, 33, 17];
    let data: Vec<f32> = (0..shape.iter().product::<usize>())
        .map(|_| rng.gen_range(-1.0f32..1.0))
        .collect();
    let input = common::tensor::<f32>(&shape, data.clone())?;
    let config = ExecConfig {
        parallel: true,
        min_parallel_len: 16,
    };
    for axis in 0..shape.len() {
        let output = common::run_kernel::<SelectMax>(
            ArgReduceParams::new(DType::I32),
            config,
            &input,
            &common::axis_i32(axis as i32),
        )?;
        assert_eq!(
            common::indices(&output)?,
            common::naive_arg_reduce(&shape, &data, axis, false, false)
        );
    }
    Ok(())
}

#[test]
fn arg_axis_strided_input_matches_contiguous() -> Result<()> {
    let rows = 3usize;
    let cols = 4usize;
    let logical: Vec<f64> = vec![
        0.5, 2.0, -1.0, 2.0, //
        3.0, 1.0, 4.0, -2.0, //
        3.0, 0.0, 4.5, 1.0,
    ];
    let mut column_major = vec![0.0f64; rows * cols];
    for r in 0..rows {
        for c in 0..cols {
            column_major[c * rows + r] = logical[r * cols + c];
        }
    }
    let strided = Tensor::from_vec_with_opts(
        column_major,
        TensorOptions {
            shape: Some(vec![rows, cols]),
            strides: Some(vec![1, rows]),
        },
    )?;
    assert!(!strided.is_contiguous());
    assert_eq!(strided.to_vec(), logical);
    let strided = TensorValue::from(strided);
    assert_eq!(strided.strides(), &[1, rows]);
    let contiguous = common::tensor::<f64>(&[rows, cols], logical.clone())?;

    for axis in 0..2 {
        for config in [ExecConfig::sequential(), eager_parallel()] {
            let a = common::run_kernel::<SelectMax>(
                ArgReduceParams::new(DType::I64),
                config,
                &strided,
                &common::axis_i32(axis),
            )?;
            let b = common::run_kernel::<SelectMax>(
                ArgReduceParams::new(DType::I64),
                config,
                &contiguous,
                &common::axis_i32(axis),
            )?;
            assert_eq!(a, b, "axis {}", axis);
        }
    }
    let rows_max = common::run_kernel::<SelectMax>(
        ArgReduceParams::new(DType::I64),
        ExecConfig::sequential(),
        &strided,
        &common::axis_i32(1),
    )?;
    assert_eq!(common::indices(&rows_max)?, vec![1, 2, 2]);
    Ok(())
}
