//! CUDA implementation of trapezoid integration.

use numr::runtime::cuda::{CudaClient, CudaRuntime};
use numr::tensor::Tensor;

use crate::error::TrapzResult;
use crate::impl_generic::{cumulative_trapezoid_impl, trapezoid_impl};
use crate::traits::{Spacing, TrapezoidAlgorithms};

impl TrapezoidAlgorithms<CudaRuntime> for CudaClient {
    fn trapezoid(
        &self,
        y: &Tensor<CudaRuntime>,
        x: &Tensor<CudaRuntime>,
        dim: isize,
    ) -> TrapzResult<Tensor<CudaRuntime>> {
        trapezoid_impl(self, y, Spacing::Sampled(x), dim)
    }

    fn trapezoid_uniform(
        &self,
        y: &Tensor<CudaRuntime>,
        dx: f64,
        dim: isize,
    ) -> TrapzResult<Tensor<CudaRuntime>> {
        trapezoid_impl(self, y, Spacing::Uniform(dx), dim)
    }

    fn cumulative_trapezoid(
        &self,
        y: &Tensor<CudaRuntime>,
        x: &Tensor<CudaRuntime>,
        dim: isize,
    ) -> TrapzResult<Tensor<CudaRuntime>> {
        cumulative_trapezoid_impl(self, y, Spacing::Sampled(x), dim)
    }

    fn cumulative_trapezoid_uniform(
        &self,
        y: &Tensor<CudaRuntime>,
        dx: f64,
        dim: isize,
    ) -> TrapzResult<Tensor<CudaRuntime>> {
        cumulative_trapezoid_impl(self, y, Spacing::Uniform(dx), dim)
    }
}
