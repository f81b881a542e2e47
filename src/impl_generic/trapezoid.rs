//! Full-reduction trapezoid integration using tensor operations.
//!
//! All implementations use numr tensor ops - no scalar loops.

use numr::ops::{ScalarOps, TensorOps};
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

use crate::error::TrapzResult;
use crate::impl_generic::shape::zeros_like_except;
use crate::impl_generic::spacing::sample_spacing;
use crate::impl_generic::validate::{ensure_integrable_dtype, normalize_dim};
use crate::traits::Spacing;

/// Trapezoid-rule integration of `y` along `dim`.
///
/// The estimated integral of a function y of x, sampled at points
/// `(y_1, ..., y_n)` separated by distances `(dx_1, ..., dx_{n-1})`, is
///
/// ```text
/// sum_{i=1}^{n-1}  dx_i * (y_i + y_{i+1}) / 2
/// ```
///
/// Negative `dim` counts from the end. The result drops `dim` from `y`'s
/// shape; if `dim` holds zero samples the result is all zeros, following the
/// numpy convention.
pub fn trapezoid_impl<R, C>(
    client: &C,
    y: &Tensor<R>,
    spacing: Spacing<'_, R>,
    dim: isize,
) -> TrapzResult<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + RuntimeClient<R>,
{
    let dim = normalize_dim(dim, y.ndim())?;

    // Asking for the integral with zero samples is a bit nonsensical, but
    // zero matches the numpy convention.
    if y.shape()[dim] == 0 {
        return Ok(zeros_like_except(client, y, dim));
    }

    match spacing {
        Spacing::Sampled(x) => {
            ensure_integrable_dtype(y.dtype(), "trapezoid")?;
            ensure_integrable_dtype(x.dtype(), "trapezoid")?;
            let dx = sample_spacing(client, y, x, dim)?;
            trapezoid_sampled(client, y, &dx, dim)
        }
        Spacing::Uniform(dx) => {
            ensure_integrable_dtype(y.dtype(), "trapezoid")?;
            trapezoid_uniform(client, y, dx, dim)
        }
    }
}

/// `sum((y_left + y_right) * dx, dim) / 2` with `dx` broadcasting against
/// the paired samples.
fn trapezoid_sampled<R, C>(
    client: &C,
    y: &Tensor<R>,
    dx: &Tensor<R>,
    dim: usize,
) -> TrapzResult<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + RuntimeClient<R>,
{
    let intervals = y.shape()[dim] - 1;
    let y_left = y.narrow(dim as isize, 0, intervals)?.contiguous();
    let y_right = y.narrow(dim as isize, 1, intervals)?.contiguous();

    let y_sum = client.add(&y_left, &y_right)?;
    let areas = client.mul(&y_sum, dx)?;
    let total = client.sum(&areas, &[dim], false)?;

    Ok(client.mul_scalar(&total, 0.5)?)
}

/// With constant spacing the trapezoid sum simplifies to
/// `(sum(y) - (y_first + y_last) * 0.5) * dx`, touching each element once
/// instead of materializing the shifted pair.
fn trapezoid_uniform<R, C>(
    client: &C,
    y: &Tensor<R>,
    dx: f64,
    dim: usize,
) -> TrapzResult<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + RuntimeClient<R>,
{
    let n = y.shape()[dim];
    let total = client.sum(y, &[dim], false)?;

    // Summing the size-1 slices removes `dim`, matching `total`'s shape.
    let y_first = y.narrow(dim as isize, 0, 1)?.contiguous();
    let y_last = y.narrow(dim as isize, n - 1, 1)?.contiguous();
    let endpoints = client.add(&y_first, &y_last)?;
    let endpoints = client.sum(&endpoints, &[dim], false)?;

    let half_endpoints = client.mul_scalar(&endpoints, 0.5)?;
    let corrected = client.sub(&total, &half_endpoints)?;

    Ok(client.mul_scalar(&corrected, dx)?)
}
