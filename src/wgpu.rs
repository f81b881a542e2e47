//! WebGPU implementation of trapezoid integration.

use numr::runtime::wgpu::{WgpuClient, WgpuRuntime};
use numr::tensor::Tensor;

use crate::error::TrapzResult;
use crate::impl_generic::{cumulative_trapezoid_impl, trapezoid_impl};
use crate::traits::{Spacing, TrapezoidAlgorithms};

impl TrapezoidAlgorithms<WgpuRuntime> for WgpuClient {
    fn trapezoid(
        &self,
        y: &Tensor<WgpuRuntime>,
        x: &Tensor<WgpuRuntime>,
        dim: isize,
    ) -> TrapzResult<Tensor<WgpuRuntime>> {
        trapezoid_impl(self, y, Spacing::Sampled(x), dim)
    }

    fn trapezoid_uniform(
        &self,
        y: &Tensor<WgpuRuntime>,
        dx: f64,
        dim: isize,
    ) -> TrapzResult<Tensor<WgpuRuntime>> {
        trapezoid_impl(self, y, Spacing::Uniform(dx), dim)
    }

    fn cumulative_trapezoid(
        &self,
        y: &Tensor<WgpuRuntime>,
        x: &Tensor<WgpuRuntime>,
        dim: isize,
    ) -> TrapzResult<Tensor<WgpuRuntime>> {
        cumulative_trapezoid_impl(self, y, Spacing::Sampled(x), dim)
    }

    fn cumulative_trapezoid_uniform(
        &self,
        y: &Tensor<WgpuRuntime>,
        dx: f64,
        dim: isize,
    ) -> TrapzResult<Tensor<WgpuRuntime>> {
        cumulative_trapezoid_impl(self, y, Spacing::Uniform(dx), dim)
    }
}
