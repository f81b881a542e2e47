//! Types for trapezoid integration.

use numr::runtime::Runtime;
use numr::tensor::Tensor;

/// How the distance between consecutive samples is specified.
///
/// torch and numpy overload their trapezoid functions on the spacing
/// argument; here the two forms are a single tagged type so the dispatch is
/// explicit.
#[derive(Debug, Clone, Copy)]
pub enum Spacing<'a, R: Runtime> {
    /// Sample locations as a tensor.
    ///
    /// A 1-D tensor must hold one coordinate per sample along the
    /// integration axis. A tensor of rank below the data's is left-padded
    /// with singleton dimensions so its trailing axes align with the data's,
    /// then broadcast. A tensor of the data's rank is used as-is.
    Sampled(&'a Tensor<R>),

    /// Uniform distance between consecutive samples.
    Uniform(f64),
}
