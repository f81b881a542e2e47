//! Per-element spacing from sample locations.

use numr::ops::TensorOps;
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

use crate::error::{TrapzError, TrapzResult};
use crate::impl_generic::shape::add_padding_to_shape;

/// Forward differences of the sample locations along `dim`, aligned so they
/// broadcast against `y`.
///
/// `x` is first brought to `y`'s rank:
///
/// - 1-D `x` must hold one coordinate per sample along `dim`; it is reshaped
///   so every dimension is singleton except `dim`.
/// - `x` of lower rank is left-padded with singleton dimensions, aligning its
///   trailing axes with `y`'s, so slicing along any `dim` stays in bounds.
/// - `x` of `y`'s rank is used as-is.
/// - `x` of higher rank cannot be broadcast toward `y` and is rejected.
///
/// The result is `x[1:] - x[:-1]` along `dim`: one spacing per interval,
/// rank equal to `y`'s.
pub fn sample_spacing<R, C>(
    client: &C,
    y: &Tensor<R>,
    x: &Tensor<R>,
    dim: usize,
) -> TrapzResult<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + RuntimeClient<R>,
{
    let x_viewed = if x.ndim() == 1 {
        let samples = y.shape()[dim];
        if x.shape()[0] != samples {
            return Err(TrapzError::SampleCountMismatch {
                expected: samples,
                got: x.shape()[0],
            });
        }
        let mut sizes = vec![1; y.ndim()];
        sizes[dim] = samples;
        x.reshape(&sizes)?
    } else if x.ndim() < y.ndim() {
        x.reshape(&add_padding_to_shape(x.shape(), y.ndim()))?
    } else if x.ndim() == y.ndim() {
        x.clone()
    } else {
        return Err(TrapzError::SampleRankMismatch {
            x_ndim: x.ndim(),
            y_ndim: y.ndim(),
        });
    };

    // narrow reduces the extent along `dim` by one; other dimensions are
    // untouched. The right start clamps to 0 when there are no intervals,
    // since narrow rejects stepping past an empty extent.
    let intervals = x_viewed.shape()[dim].saturating_sub(1);
    let x_left = x_viewed.narrow(dim as isize, 0, intervals)?.contiguous();
    let x_right = x_viewed
        .narrow(dim as isize, intervals.min(1), intervals)?
        .contiguous();

    Ok(client.sub(&x_right, &x_left)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use numr::runtime::cpu::{CpuClient, CpuDevice, CpuRuntime};

    fn setup() -> (CpuDevice, CpuClient) {
        let device = CpuDevice::new();
        let client = CpuClient::new(device.clone());
        (device, client)
    }

    #[test]
    fn test_spacing_1d_x() {
        let (device, client) = setup();

        let y = Tensor::<CpuRuntime>::from_slice(&[1.0, 2.0, 3.0, 4.0], &[4], &device);
        let x = Tensor::<CpuRuntime>::from_slice(&[0.0, 1.0, 3.0, 6.0], &[4], &device);

        let dx = sample_spacing(&client, &y, &x, 0).unwrap();
        assert_eq!(dx.shape(), &[3]);

        let values: Vec<f64> = dx.to_vec();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_spacing_1d_x_against_2d_y() {
        let (device, client) = setup();

        let y = Tensor::<CpuRuntime>::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3], &device);
        let x = Tensor::<CpuRuntime>::from_slice(&[0.0, 1.0, 2.0], &[3], &device);

        // Along dim 1 the 1-D x is viewed as [1, 3], broadcastable over rows.
        let dx = sample_spacing(&client, &y, &x, 1).unwrap();
        assert_eq!(dx.shape(), &[1, 2]);

        // Along dim 0 the same x must match extent 2 instead.
        let err = sample_spacing(&client, &y, &x, 0).unwrap_err();
        assert!(matches!(
            err,
            crate::error::TrapzError::SampleCountMismatch {
                expected: 2,
                got: 3
            }
        ));
    }

    #[test]
    fn test_spacing_lower_rank_x_is_left_padded() {
        let (device, client) = setup();

        let y = Tensor::<CpuRuntime>::zeros(&[2, 2, 3], numr::dtype::DType::F64, &device);
        let x = Tensor::<CpuRuntime>::from_slice(
            &[0.0, 1.0, 2.0, 0.0, 2.0, 4.0],
            &[2, 3],
            &device,
        );

        // (2, 3) is padded to (1, 2, 3); slicing along the last dim leaves
        // a (1, 2, 2) spacing tensor.
        let dx = sample_spacing(&client, &y, &x, 2).unwrap();
        assert_eq!(dx.shape(), &[1, 2, 2]);

        let values: Vec<f64> = dx.to_vec();
        assert_eq!(values, vec![1.0, 1.0, 2.0, 2.0]);
    }

    #[test]
    fn test_spacing_full_rank_x() {
        let (device, client) = setup();

        let y = Tensor::<CpuRuntime>::from_slice(&[1.0, 1.0, 1.0, 1.0], &[2, 2], &device);
        let x = Tensor::<CpuRuntime>::from_slice(&[0.0, 1.0, 0.0, 3.0], &[2, 2], &device);

        let dx = sample_spacing(&client, &y, &x, 1).unwrap();
        assert_eq!(dx.shape(), &[2, 1]);

        let values: Vec<f64> = dx.to_vec();
        assert_eq!(values, vec![1.0, 3.0]);
    }

    #[test]
    fn test_spacing_higher_rank_x_rejected() {
        let (device, client) = setup();

        let y = Tensor::<CpuRuntime>::from_slice(&[1.0, 2.0], &[2], &device);
        let x = Tensor::<CpuRuntime>::zeros(&[1, 2], numr::dtype::DType::F64, &device);

        let err = sample_spacing(&client, &y, &x, 0).unwrap_err();
        assert!(matches!(
            err,
            crate::error::TrapzError::SampleRankMismatch {
                x_ndim: 2,
                y_ndim: 1
            }
        ));
    }
}

