//! Cumulative (running) trapezoid integration using tensor operations.

use numr::ops::{ScalarOps, TensorOps};
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

use crate::error::TrapzResult;
use crate::impl_generic::spacing::sample_spacing;
use crate::impl_generic::validate::{ensure_integrable_dtype, expect_normalized_dim};
use crate::traits::Spacing;

/// Cumulative trapezoid-rule integration of `y` along `dim`.
///
/// Produces one partial sum per interval between consecutive samples, so the
/// extent along `dim` is one less than `y`'s (zero when `y` holds fewer than
/// two samples there). The last slice along `dim` equals the full reduction
/// of [`trapezoid_impl`](crate::impl_generic::trapezoid_impl).
///
/// `dim` must already be canonical: negative values are rejected, not
/// wrapped. The cumulative entry points leave axis wrapping to the caller.
pub fn cumulative_trapezoid_impl<R, C>(
    client: &C,
    y: &Tensor<R>,
    spacing: Spacing<'_, R>,
    dim: isize,
) -> TrapzResult<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + RuntimeClient<R>,
{
    let dim = expect_normalized_dim(dim, y.ndim())?;

    match spacing {
        Spacing::Sampled(x) => {
            ensure_integrable_dtype(y.dtype(), "cumulative_trapezoid")?;
            ensure_integrable_dtype(x.dtype(), "cumulative_trapezoid")?;
            let dx = sample_spacing(client, y, x, dim)?;
            cumulative_sampled(client, y, &dx, dim)
        }
        Spacing::Uniform(dx) => {
            ensure_integrable_dtype(y.dtype(), "cumulative_trapezoid")?;
            cumulative_uniform(client, y, dx, dim)
        }
    }
}

/// `cumsum((y_left + y_right) * dx, dim) / 2`.
fn cumulative_sampled<R, C>(
    client: &C,
    y: &Tensor<R>,
    dx: &Tensor<R>,
    dim: usize,
) -> TrapzResult<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + RuntimeClient<R>,
{
    let (y_left, y_right) = interval_pair(y, dim)?;
    let y_sum = client.add(&y_left, &y_right)?;
    let areas = client.mul(&y_sum, dx)?;
    let running = client.cumsum(&areas, dim as isize)?;

    Ok(client.mul_scalar(&running, 0.5)?)
}

/// `cumsum(dx / 2 * (y_left + y_right), dim)`. No algebraic shortcut exists
/// here: every interval's area is needed, not just the total.
fn cumulative_uniform<R, C>(
    client: &C,
    y: &Tensor<R>,
    dx: f64,
    dim: usize,
) -> TrapzResult<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + RuntimeClient<R>,
{
    let (y_left, y_right) = interval_pair(y, dim)?;
    let y_sum = client.add(&y_left, &y_right)?;
    let areas = client.mul_scalar(&y_sum, 0.5 * dx)?;

    Ok(client.cumsum(&areas, dim as isize)?)
}

/// The two sample slices bounding each interval along `dim`. The right start
/// clamps to 0 when there are no intervals, since narrow rejects stepping
/// past an empty extent.
fn interval_pair<R: Runtime>(y: &Tensor<R>, dim: usize) -> TrapzResult<(Tensor<R>, Tensor<R>)> {
    let intervals = y.shape()[dim].saturating_sub(1);
    let y_left = y.narrow(dim as isize, 0, intervals)?.contiguous();
    let y_right = y
        .narrow(dim as isize, intervals.min(1), intervals)?
        .contiguous();
    Ok((y_left, y_right))
}
