//! Construction errors for expression nodes.
//!
//! Only node construction can fail. Reading an element out of range is a
//! caller precondition and is not reported through this type.

use thiserror::Error;

/// Error returned when an expression cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExprError {
    /// The two operands of a binary operation have different lengths.
    #[error("operand size mismatch: left has {left} elements, right has {right}")]
    SizeMismatch { left: usize, right: usize },
}

impl ExprError {
    /// Returns `Ok(len)` when both lengths agree.
    pub(crate) fn check_sizes(left: usize, right: usize) -> Result<usize, ExprError> {
        if left == right {
            Ok(left)
        } else {
            tracing::debug!(left, right, "rejecting operands with mismatched sizes");
            Err(ExprError::SizeMismatch { left, right })
        }
    }
}
