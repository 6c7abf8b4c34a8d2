//! Deferred evaluation through owned, nested adapters.

use super::Strategy;
use crate::{
    ExprError, Operand,
    expr::{
        elements,
        ops::{Add, BinaryOp, Div, Mul},
    },
    kernel::KernelInputs,
};

/// Combines two operands elementwise with `op`.
///
/// The operands are taken by value, the way iterator adapters nest, so a
/// whole expression is one value that can be returned from a function.
/// Pass `&field` to borrow a leaf.
pub fn pairwise<L, R, Op>(left: L, right: R, op: Op) -> Result<ZipMap<L, R, Op>, ExprError>
where
    L: Operand,
    R: Operand<Elem = L::Elem>,
    Op: BinaryOp<L::Elem>,
{
    let len = ExprError::check_sizes(left.len(), right.len())?;
    Ok(ZipMap {
        left,
        right,
        op,
        len,
    })
}

/// Two operands of equal length combined by `op`.
///
/// Indexed reads apply `op` once per read, to element `i` of each side.
/// Sequential reads go through [`iter`](ZipMap::iter), which is
/// `zip` + `map` over the two sides.
#[derive(Debug, Clone, Copy)]
pub struct ZipMap<L, R, Op> {
    left: L,
    right: R,
    op: Op,
    len: usize,
}

impl<L, R, Op> ZipMap<L, R, Op>
where
    L: Operand,
    R: Operand<Elem = L::Elem>,
    Op: BinaryOp<L::Elem>,
{
    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn right(&self) -> &R {
        &self.right
    }

    /// Streams every element in index order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = L::Elem> + '_ {
        elements(&self.left)
            .zip(elements(&self.right))
            .map(move |(lhs, rhs)| self.op.apply(lhs, rhs))
    }
}

impl<L, R, Op> Operand for ZipMap<L, R, Op>
where
    L: Operand,
    R: Operand<Elem = L::Elem>,
    Op: BinaryOp<L::Elem>,
{
    type Elem = L::Elem;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn at(&self, index: usize) -> Self::Elem {
        debug_assert!(
            index < self.len,
            "index {index} out of range for adapter of length {}",
            self.len
        );
        self.op.apply(self.left.at(index), self.right.at(index))
    }

    fn depth(&self) -> usize {
        1 + self.left.depth().max(self.right.depth())
    }
}

/// Builds the kernel expression as nested [`ZipMap`] adapters over the
/// input fields, in the same shape as the node tree built by
/// [`Lazy`](super::Lazy).
#[derive(Debug, Default, Clone, Copy)]
pub struct Pairwise;

impl Pairwise {
    fn kernel(inputs: &KernelInputs) -> Result<impl Operand<Elem = f64> + '_, ExprError> {
        let KernelInputs { rho, m, w } = inputs;

        let mw_rho = pairwise(pairwise(m, w, Mul)?, rho, Div)?;
        let scaled_m = pairwise(pairwise(pairwise(m, rho, Add)?, w, Mul)?, m, Div)?;
        pairwise(mw_rho, scaled_m, Add)
    }
}

impl Strategy for Pairwise {
    fn name(&self) -> &'static str {
        "pairwise"
    }

    fn with_result<R>(
        &self,
        inputs: &KernelInputs,
        consume: impl FnOnce(&dyn Operand<Elem = f64>) -> R,
    ) -> Result<R, ExprError> {
        tracing::debug!(strategy = self.name(), len = inputs.len(), "evaluating kernel");
        let vf = Self::kernel(inputs)?;
        Ok(consume(&vf))
    }
}
