//! Shape alignment helpers for broadcasting sample locations against data.

use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

/// Left-pad a shape with singleton dimensions up to a target rank.
///
/// The trailing entries of the result equal `curr_shape`; every leading
/// entry is 1. For example `(5, 5, 5)` with target 6 becomes
/// `(1, 1, 1, 5, 5, 5)`, so a low-rank coordinate grid lines up with the
/// trailing axes of a higher-rank data tensor and broadcasts against it.
/// If `curr_shape` already has at least `target_ndim` dimensions, it is
/// returned unchanged in length.
pub fn add_padding_to_shape(curr_shape: &[usize], target_ndim: usize) -> Vec<usize> {
    let target = target_ndim.max(curr_shape.len());
    let mut padded = vec![1; target];
    padded[target - curr_shape.len()..].copy_from_slice(curr_shape);
    padded
}

/// Zero tensor shaped like `y` with dimension `dim` removed.
///
/// This is the defined result of integrating across zero samples, matching
/// numpy's convention rather than raising.
pub fn zeros_like_except<R, C>(client: &C, y: &Tensor<R>, dim: usize) -> Tensor<R>
where
    R: Runtime,
    C: RuntimeClient<R>,
{
    let mut sizes = y.shape().to_vec();
    sizes.remove(dim);
    Tensor::<R>::zeros(&sizes, y.dtype(), client.device())
}
