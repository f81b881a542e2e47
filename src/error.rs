//! Error types for trapezoid integration.

use std::fmt;

use numr::dtype::DType;

/// Result type for trapezoid integration operations.
pub type TrapzResult<T> = Result<T, TrapzError>;

/// Errors that can occur during trapezoid integration.
#[derive(Debug, Clone)]
pub enum TrapzError {
    /// Integration axis is outside the tensor's dimensions.
    InvalidAxis { dim: isize, ndim: usize },

    /// A 1-D sample-location tensor does not have one value per sample.
    SampleCountMismatch { expected: usize, got: usize },

    /// Sample-location tensor has more dimensions than the data tensor.
    SampleRankMismatch { x_ndim: usize, y_ndim: usize },

    /// Input dtype is not supported (mask tensors cannot be integrated).
    UnsupportedDType { dtype: DType, op: &'static str },

    /// Error from underlying numr operation.
    NumrError(String),
}

impl fmt::Display for TrapzError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAxis { dim, ndim } => {
                write!(
                    f,
                    "Invalid integration axis {} for tensor with {} dimensions",
                    dim, ndim
                )
            }
            Self::SampleCountMismatch { expected, got } => {
                write!(
                    f,
                    "There must be one x value for each sample point: expected {}, got {}",
                    expected, got
                )
            }
            Self::SampleRankMismatch { x_ndim, y_ndim } => {
                write!(
                    f,
                    "x has {} dimensions but y only has {}: x cannot be broadcast to match y",
                    x_ndim, y_ndim
                )
            }
            Self::UnsupportedDType { dtype, op } => {
                write!(f, "{}: received {:?} input, which is not supported", op, dtype)
            }
            Self::NumrError(msg) => {
                write!(f, "numr error: {}", msg)
            }
        }
    }
}

impl std::error::Error for TrapzError {}

impl From<numr::error::Error> for TrapzError {
    fn from(err: numr::error::Error) -> Self {
        Self::NumrError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrapzError::InvalidAxis { dim: -3, ndim: 2 };
        assert!(err.to_string().contains("-3"));
        assert!(err.to_string().contains('2'));

        let err = TrapzError::SampleCountMismatch {
            expected: 5,
            got: 4,
        };
        assert!(err.to_string().contains('5'));
        assert!(err.to_string().contains('4'));

        let err = TrapzError::SampleRankMismatch {
            x_ndim: 3,
            y_ndim: 2,
        };
        assert!(err.to_string().contains("broadcast"));
    }
}
