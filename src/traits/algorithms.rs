use numr::runtime::Runtime;
use numr::tensor::Tensor;

use crate::error::TrapzResult;

/// Trait for trapezoid integration that works across all Runtime backends.
///
/// This trait provides a unified interface for:
/// - Trapezoidal integration along any axis of an N-D tensor
/// - Cumulative (running) trapezoidal integration
/// - Uniform and irregular sample spacing
///
/// All methods work with `Tensor<R>` for GPU acceleration and batch operations.
///
/// # Example
///
/// ```ignore
/// use trapz::TrapezoidAlgorithms;
/// use numr::runtime::cpu::{CpuClient, CpuDevice};
///
/// let device = CpuDevice::new();
/// let client = CpuClient::new(device.clone());
///
/// // Integrate y = x^2 from 0 to 1
/// let x = Tensor::from_slice(&[0.0, 0.25, 0.5, 0.75, 1.0], &[5], &device);
/// let y = Tensor::from_slice(&[0.0, 0.0625, 0.25, 0.5625, 1.0], &[5], &device);
/// let result = client.trapezoid(&y, &x, 0)?;
/// ```
pub trait TrapezoidAlgorithms<R: Runtime> {
    /// Trapezoidal rule integration along `dim`.
    ///
    /// Computes the trapezoid sum `Σ dx_i * (y_i + y_{i+1}) / 2` where the
    /// spacings `dx_i` are forward differences of `x` along `dim`. The result
    /// has `dim` removed.
    ///
    /// `x` is broadcast to match `y`, not the other way around. If `dim` has
    /// no samples at all, the result is a zero tensor of the reduced shape.
    ///
    /// # Arguments
    /// * `y` - Sampled function values, rank >= 1
    /// * `x` - Sample locations (1-D, or rank <= `y`'s for a coordinate grid)
    /// * `dim` - Integration axis; negative values count from the end
    fn trapezoid(&self, y: &Tensor<R>, x: &Tensor<R>, dim: isize) -> TrapzResult<Tensor<R>>;

    /// Trapezoidal rule with uniform spacing along `dim`.
    ///
    /// Equivalent to [`trapezoid`](Self::trapezoid) with equidistant sample
    /// locations, computed as `(sum(y) - (y_first + y_last) * 0.5) * dx` so
    /// each element is touched once.
    ///
    /// # Arguments
    /// * `y` - Sampled function values
    /// * `dx` - Uniform spacing between consecutive samples
    /// * `dim` - Integration axis; negative values count from the end
    fn trapezoid_uniform(&self, y: &Tensor<R>, dx: f64, dim: isize) -> TrapzResult<Tensor<R>>;

    /// Cumulative trapezoidal integration along `dim`.
    ///
    /// Returns the running integral: one value per interval between
    /// consecutive samples, so the extent along `dim` shrinks by one. The
    /// last slice along `dim` equals [`trapezoid`](Self::trapezoid).
    ///
    /// Unlike the full-reduction methods, `dim` must already be canonical:
    /// negative values are rejected rather than wrapped.
    fn cumulative_trapezoid(
        &self,
        y: &Tensor<R>,
        x: &Tensor<R>,
        dim: isize,
    ) -> TrapzResult<Tensor<R>>;

    /// Cumulative trapezoidal integration with uniform spacing along `dim`.
    ///
    /// Unlike the full-reduction methods, `dim` must already be canonical:
    /// negative values are rejected rather than wrapped.
    fn cumulative_trapezoid_uniform(
        &self,
        y: &Tensor<R>,
        dx: f64,
        dim: isize,
    ) -> TrapzResult<Tensor<R>>;

    /// Legacy name for [`trapezoid`](Self::trapezoid), kept for numpy-style
    /// call sites.
    fn trapz(&self, y: &Tensor<R>, x: &Tensor<R>, dim: isize) -> TrapzResult<Tensor<R>> {
        self.trapezoid(y, x, dim)
    }

    /// Legacy name for [`trapezoid_uniform`](Self::trapezoid_uniform).
    fn trapz_uniform(&self, y: &Tensor<R>, dx: f64, dim: isize) -> TrapzResult<Tensor<R>> {
        self.trapezoid_uniform(y, dx, dim)
    }
}
