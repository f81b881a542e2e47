//! Argument validation shared by the integration entry points.

use numr::dtype::DType;

use crate::error::{TrapzError, TrapzResult};

/// Canonicalize an integration axis, wrapping negative values.
///
/// Negative axes count from the end, python-style: `-1` is the last
/// dimension. Anything still out of range after wrapping is rejected.
pub fn normalize_dim(dim: isize, ndim: usize) -> TrapzResult<usize> {
    let wrapped = if dim < 0 { dim + ndim as isize } else { dim };
    if wrapped < 0 || wrapped >= ndim as isize {
        return Err(TrapzError::InvalidAxis { dim, ndim });
    }
    Ok(wrapped as usize)
}

/// Bounds-check an axis that the caller must already have canonicalized.
///
/// The cumulative entry points do not wrap negative axes; a negative value
/// here is a caller error, not shorthand for counting from the end.
pub fn expect_normalized_dim(dim: isize, ndim: usize) -> TrapzResult<usize> {
    if dim < 0 || dim >= ndim as isize {
        return Err(TrapzError::InvalidAxis { dim, ndim });
    }
    Ok(dim as usize)
}

/// Reject mask tensors.
///
/// numr has no dedicated bool dtype; comparison ops produce U8 masks, and
/// integrating a mask is not meaningful.
pub fn ensure_integrable_dtype(dtype: DType, op: &'static str) -> TrapzResult<()> {
    if dtype == DType::U8 {
        return Err(TrapzError::UnsupportedDType { dtype, op });
    }
    Ok(())
}
