//! Generic implementations of trapezoid integration.
//!
//! These implementations work across all Runtime backends by using
//! numr's tensor operations.

pub mod cumulative;
pub mod shape;
pub mod spacing;
pub mod trapezoid;
pub mod validate;

pub use cumulative::cumulative_trapezoid_impl;
pub use shape::add_padding_to_shape;
pub use spacing::sample_spacing;
pub use trapezoid::trapezoid_impl;
