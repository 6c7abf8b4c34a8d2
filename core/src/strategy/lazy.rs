//! Deferred evaluation through borrowed expression nodes.

use super::Strategy;
use crate::{ExprError, Operand, expr, kernel::KernelInputs};

/// Builds the kernel expression as a tree of
/// [`BinaryExpr`](crate::BinaryExpr) nodes over the input fields.
///
/// No intermediate field is allocated. Each element of the result is
/// computed from the leaves when it is read.
#[derive(Debug, Default, Clone, Copy)]
pub struct Lazy;

impl Strategy for Lazy {
    fn name(&self) -> &'static str {
        "lazy"
    }

    fn with_result<R>(
        &self,
        inputs: &KernelInputs,
        consume: impl FnOnce(&dyn Operand<Elem = f64>) -> R,
    ) -> Result<R, ExprError> {
        let KernelInputs { rho, m, w } = inputs;
        tracing::debug!(strategy = self.name(), len = inputs.len(), "evaluating kernel");

        let mw = expr::mul(m, w)?;
        let mw_rho = expr::div(&mw, rho)?;
        let m_plus_rho = expr::add(m, rho)?;
        let scaled = expr::mul(&m_plus_rho, w)?;
        let scaled_m = expr::div(&scaled, m)?;
        let vf = expr::add(&mw_rho, &scaled_m)?;
        Ok(consume(&vf))
    }
}
