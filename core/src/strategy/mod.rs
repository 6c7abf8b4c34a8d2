//! Interchangeable ways of evaluating the kernel expression.
//!
//! Every strategy computes `vf = m*w/rho + (m+rho)*w/m` with the same
//! operators in the same order, and exposes the result through the same
//! read interface, an [`Operand`]. They differ only in when values are
//! computed and what gets allocated along the way:
//!
//! - [`Eager`]: materializes every intermediate into a fresh [`Field`]
//! - [`Lazy`]: composes borrowed [`BinaryExpr`](crate::BinaryExpr) nodes
//! - [`Pairwise`]: nests owned [`ZipMap`] adapters (`zip` + `map` when streamed)
//!
//! The benchmark harness drives them uniformly through [`StrategyKind`].

mod eager;
mod lazy;
mod pairwise;

#[cfg(test)]
mod strategy_test;

use core::fmt;

pub use eager::Eager;
pub use lazy::Lazy;
pub use pairwise::{Pairwise, ZipMap, pairwise};

use crate::{ExprError, Field, Operand, kernel::KernelInputs};

/// A way of evaluating the kernel expression over a set of inputs.
pub trait Strategy {
    /// Short, stable name used in benchmark ids and logs.
    fn name(&self) -> &'static str;

    /// Evaluates the expression and passes the result to `consume`.
    ///
    /// The result may borrow from values that only live for the duration of
    /// the call, which is why it is handed to a closure instead of returned.
    fn with_result<R>(
        &self,
        inputs: &KernelInputs,
        consume: impl FnOnce(&dyn Operand<Elem = f64>) -> R,
    ) -> Result<R, ExprError>;

    /// Evaluates the expression into a newly allocated field.
    fn evaluate(&self, inputs: &KernelInputs) -> Result<Field<f64>, ExprError> {
        self.with_result(inputs, |result| Field::materialize(result))
    }

    /// Evaluates only element `index`, or `None` if it is out of range.
    fn element(&self, inputs: &KernelInputs, index: usize) -> Result<Option<f64>, ExprError> {
        self.with_result(inputs, |result| result.get(index))
    }
}

/// Selects one of the built-in strategies at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Eager,
    Lazy,
    Pairwise,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Eager,
        StrategyKind::Lazy,
        StrategyKind::Pairwise,
    ];
}

impl Strategy for StrategyKind {
    fn name(&self) -> &'static str {
        match self {
            StrategyKind::Eager => Eager.name(),
            StrategyKind::Lazy => Lazy.name(),
            StrategyKind::Pairwise => Pairwise.name(),
        }
    }

    fn with_result<R>(
        &self,
        inputs: &KernelInputs,
        consume: impl FnOnce(&dyn Operand<Elem = f64>) -> R,
    ) -> Result<R, ExprError> {
        match self {
            StrategyKind::Eager => Eager.with_result(inputs, consume),
            StrategyKind::Lazy => Lazy.with_result(inputs, consume),
            StrategyKind::Pairwise => Pairwise.with_result(inputs, consume),
        }
    }

    fn evaluate(&self, inputs: &KernelInputs) -> Result<Field<f64>, ExprError> {
        match self {
            StrategyKind::Eager => Eager.evaluate(inputs),
            StrategyKind::Lazy => Lazy.evaluate(inputs),
            StrategyKind::Pairwise => Pairwise.evaluate(inputs),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
