//! Approximate comparison of evaluation results.

use thiserror::Error;

use crate::expr::Operand;

/// Default absolute tolerance used when comparing evaluation strategies.
pub const DEFAULT_MARGIN: f64 = 1e-3;

/// Returns `true` if `a` and `b` differ by at most `margin`.
///
/// NaN is never approximately equal to anything, including itself.
pub fn approx_eq(a: f64, b: f64, margin: f64) -> bool {
    (a - b).abs() <= margin
}

/// Reason two operands are not equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValidationError {
    #[error("length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("element {index} differs: expected {expected}, got {actual} (margin {margin})")]
    ElementMismatch {
        index: usize,
        expected: f64,
        actual: f64,
        margin: f64,
    },
}

/// Checks that `actual` matches `expected` element by element within
/// `margin`, reporting the first index that does not.
pub fn check_equivalent<E, A>(expected: &E, actual: &A, margin: f64) -> Result<(), ValidationError>
where
    E: Operand<Elem = f64> + ?Sized,
    A: Operand<Elem = f64> + ?Sized,
{
    if expected.len() != actual.len() {
        return Err(ValidationError::LengthMismatch {
            expected: expected.len(),
            actual: actual.len(),
        });
    }
    for index in 0..expected.len() {
        let (e, a) = (expected.at(index), actual.at(index));
        if !approx_eq(e, a, margin) {
            tracing::debug!(index, expected = e, actual = a, margin, "element mismatch");
            return Err(ValidationError::ElementMismatch {
                index,
                expected: e,
                actual: a,
                margin,
            });
        }
    }
    Ok(())
}
