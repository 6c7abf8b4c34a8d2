//! Reference evaluation that materializes every intermediate result.

use super::Strategy;
use crate::{
    ExprError, Field, Operand,
    expr::ops::{Add, BinaryOp, Div, Mul},
    kernel::KernelInputs,
};

/// Evaluates left to right, allocating a fresh field for each operation.
///
/// Memory grows with the number of operations times the field length. This
/// is the ground truth the deferred strategies are checked against.
#[derive(Debug, Default, Clone, Copy)]
pub struct Eager;

fn step<Op: BinaryOp<f64>>(
    left: &Field<f64>,
    right: &Field<f64>,
    op: Op,
) -> Result<Field<f64>, ExprError> {
    left.zip_with(right, |lhs, rhs| op.apply(lhs, rhs))
}

impl Strategy for Eager {
    fn name(&self) -> &'static str {
        "eager"
    }

    fn with_result<R>(
        &self,
        inputs: &KernelInputs,
        consume: impl FnOnce(&dyn Operand<Elem = f64>) -> R,
    ) -> Result<R, ExprError> {
        let vf = self.evaluate(inputs)?;
        Ok(consume(&vf))
    }

    fn evaluate(&self, inputs: &KernelInputs) -> Result<Field<f64>, ExprError> {
        let KernelInputs { rho, m, w } = inputs;
        tracing::debug!(strategy = self.name(), len = inputs.len(), "evaluating kernel");

        let mw = step(m, w, Mul)?;
        let mw_rho = step(&mw, rho, Div)?;
        let m_plus_rho = step(m, rho, Add)?;
        let scaled = step(&m_plus_rho, w, Mul)?;
        let scaled_m = step(&scaled, m, Div)?;
        step(&mw_rho, &scaled_m, Add)
    }
}
