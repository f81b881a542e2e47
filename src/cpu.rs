//! CPU implementation of trapezoid integration.

use numr::runtime::cpu::{CpuClient, CpuRuntime};
use numr::tensor::Tensor;

use crate::error::TrapzResult;
use crate::impl_generic::{cumulative_trapezoid_impl, trapezoid_impl};
use crate::traits::{Spacing, TrapezoidAlgorithms};

impl TrapezoidAlgorithms<CpuRuntime> for CpuClient {
    fn trapezoid(
        &self,
        y: &Tensor<CpuRuntime>,
        x: &Tensor<CpuRuntime>,
        dim: isize,
    ) -> TrapzResult<Tensor<CpuRuntime>> {
        trapezoid_impl(self, y, Spacing::Sampled(x), dim)
    }

    fn trapezoid_uniform(
        &self,
        y: &Tensor<CpuRuntime>,
        dx: f64,
        dim: isize,
    ) -> TrapzResult<Tensor<CpuRuntime>> {
        trapezoid_impl(self, y, Spacing::Uniform(dx), dim)
    }

    fn cumulative_trapezoid(
        &self,
        y: &Tensor<CpuRuntime>,
        x: &Tensor<CpuRuntime>,
        dim: isize,
    ) -> TrapzResult<Tensor<CpuRuntime>> {
        cumulative_trapezoid_impl(self, y, Spacing::Sampled(x), dim)
    }

    fn cumulative_trapezoid_uniform(
        &self,
        y: &Tensor<CpuRuntime>,
        dx: f64,
        dim: isize,
    ) -> TrapzResult<Tensor<CpuRuntime>> {
        cumulative_trapezoid_impl(self, y, Spacing::Uniform(dx), dim)
    }
}
