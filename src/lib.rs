//! trapz - Trapezoid-rule integration for numr tensors
//!
//! trapz computes definite integrals and running integrals of sampled data
//! stored in N-dimensional tensors, along any axis, using the composite
//! trapezoid rule. Built on numr's foundational tensor primitives, it works
//! across all backends (CPU, CUDA, WebGPU).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      trapz                               │
//! │   (axis handling, shape alignment, trapezoid kernels)   │
//! └──────────────────────────┬──────────────────────────────┘
//!                            │ uses
//! ┌──────────────────────────▼──────────────────────────────┐
//! │                       numr                               │
//! │   (tensors, slicing, broadcasting, reductions, cumsum)  │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! All algorithms implement the [`TrapezoidAlgorithms`] trait and are written
//! once in [`impl_generic`] against numr's `Runtime` abstraction; the backend
//! modules only delegate.
//!
//! # Sampling modes
//!
//! Sample locations can be given three ways, mirrored by the [`Spacing`] type:
//!
//! - a 1-D tensor of coordinates, one per sample along the integration axis;
//! - a tensor of rank up to `y`'s rank, aligned against `y`'s trailing axes
//!   and broadcast. Note this broadcasts `x` to match `y`, not the other way
//!   around, which differs from numpy's `trapz`;
//! - a uniform scalar spacing.
//!
//! # Example
//!
//! ```ignore
//! use trapz::TrapezoidAlgorithms;
//! use numr::runtime::cpu::{CpuClient, CpuDevice};
//! use numr::tensor::Tensor;
//!
//! let device = CpuDevice::new();
//! let client = CpuClient::new(device.clone());
//!
//! // Integrate y = x^2 sampled at 0, 0.5, 1
//! let x = Tensor::from_slice(&[0.0, 0.5, 1.0], &[3], &device);
//! let y = Tensor::from_slice(&[0.0, 0.25, 1.0], &[3], &device);
//! let total = client.trapezoid(&y, &x, 0)?;
//! let running = client.cumulative_trapezoid(&y, &x, 0)?;
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Description | Dependencies |
//! |---------|-------------|--------------|
//! | `cuda`  | Enable CUDA GPU acceleration | CUDA 12.x, numr/cuda |
//! | `wgpu`  | Enable WebGPU cross-platform GPU | numr/wgpu |

mod cpu;
#[cfg(feature = "cuda")]
mod cuda;
pub mod error;
pub mod impl_generic;
pub mod traits;
#[cfg(feature = "wgpu")]
mod wgpu;

pub use error::{TrapzError, TrapzResult};
pub use impl_generic::{cumulative_trapezoid_impl, trapezoid_impl};
pub use traits::{Spacing, TrapezoidAlgorithms};
