//! The binary expression node.

use core::fmt;

use super::{
    ExprError, Operand,
    ops::{BinaryOp, FnOp},
};

/// A deferred elementwise binary operation over two borrowed operands.
///
/// The node stores references to its operands, never copies of their data.
/// Reading element `i` applies the operator to element `i` of each operand,
/// recursing through any operand that is itself a node. Nothing is cached:
/// every read recomputes the subtree below this node for that index, so
/// evaluating all `n` elements of a tree of depth `d` costs `O(n * d)`
/// operator applications.
///
/// Operands must outlive the node. The borrow checker enforces this, so a
/// node cannot be read once anything it points into is gone:
///
/// ```compile_fail
/// use fieldexpr_core::{Field, expr::{self, Operand}};
///
/// let a = Field::with_value(3, 1.0);
/// let sum = {
///     let b = Field::with_value(3, 2.0);
///     expr::add(&a, &b).unwrap()
/// }; // `b` dropped here while still borrowed
/// assert_eq!(sum.at(0), 3.0);
/// ```
///
/// The same holds for nested nodes:
///
/// ```compile_fail
/// use fieldexpr_core::{Field, expr::{self, Operand}};
///
/// let a = Field::with_value(3, 1.0);
/// let outer = {
///     let inner = expr::add(&a, &a).unwrap();
///     expr::mul(&inner, &a).unwrap()
/// }; // `inner` dropped here while still borrowed
/// assert_eq!(outer.at(0), 2.0);
/// ```
pub struct BinaryExpr<'a, L: ?Sized, R: ?Sized, Op> {
    left: &'a L,
    right: &'a R,
    op: Op,
}

// Manual impls: deriving would require `L: Clone` and `R: Clone`, which
// excludes unsized operands such as `dyn Operand`.
impl<L: ?Sized, R: ?Sized, Op: Clone> Clone for BinaryExpr<'_, L, R, Op> {
    fn clone(&self) -> Self {
        Self {
            left: self.left,
            right: self.right,
            op: self.op.clone(),
        }
    }
}

impl<L: ?Sized, R: ?Sized, Op: Copy> Copy for BinaryExpr<'_, L, R, Op> {}

impl<'a, L, R, Op> BinaryExpr<'a, L, R, Op>
where
    L: Operand + ?Sized,
    R: Operand<Elem = L::Elem> + ?Sized,
    Op: BinaryOp<L::Elem>,
{
    /// Builds a node over `left` and `right`.
    ///
    /// Fails with [`ExprError::SizeMismatch`] if the operands have different
    /// lengths. The check happens once, here, and not on every read.
    pub fn new(left: &'a L, right: &'a R, op: Op) -> Result<Self, ExprError> {
        ExprError::check_sizes(left.len(), right.len())?;
        Ok(Self { left, right, op })
    }

    pub fn left(&self) -> &'a L {
        self.left
    }

    pub fn right(&self) -> &'a R {
        self.right
    }

    pub fn op(&self) -> &Op {
        &self.op
    }
}

impl<'a, L, R, F> BinaryExpr<'a, L, R, FnOp<F>>
where
    L: Operand + ?Sized,
    R: Operand<Elem = L::Elem> + ?Sized,
    F: Fn(L::Elem, L::Elem) -> L::Elem,
{
    /// Builds a node that applies an arbitrary closure.
    ///
    /// ```
    /// use fieldexpr_core::{BinaryExpr, Field, Operand};
    ///
    /// let a = Field::from_vec(vec![1.0, 5.0]);
    /// let b = Field::from_vec(vec![4.0, 2.0]);
    /// let max = BinaryExpr::with_fn(&a, &b, f64::max)?;
    /// assert_eq!(max.at(0), 4.0);
    /// assert_eq!(max.at(1), 5.0);
    /// # Ok::<(), fieldexpr_core::ExprError>(())
    /// ```
    pub fn with_fn(left: &'a L, right: &'a R, f: F) -> Result<Self, ExprError> {
        Self::new(left, right, FnOp(f))
    }
}

impl<L, R, Op> Operand for BinaryExpr<'_, L, R, Op>
where
    L: Operand + ?Sized,
    R: Operand<Elem = L::Elem> + ?Sized,
    Op: BinaryOp<L::Elem>,
{
    type Elem = L::Elem;

    #[inline]
    fn len(&self) -> usize {
        self.left.len()
    }

    #[inline]
    fn at(&self, index: usize) -> Self::Elem {
        debug_assert!(
            index < self.len(),
            "index {index} out of range for expression of length {}",
            self.len()
        );
        self.op.apply(self.left.at(index), self.right.at(index))
    }

    fn depth(&self) -> usize {
        1 + self.left.depth().max(self.right.depth())
    }
}

impl<L, R, Op> fmt::Debug for BinaryExpr<'_, L, R, Op>
where
    L: Operand + ?Sized,
    R: Operand<Elem = L::Elem> + ?Sized,
    Op: BinaryOp<L::Elem>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryExpr")
            .field("op", &self.op.symbol())
            .field("len", &self.len())
            .field("depth", &self.depth())
            .finish()
    }
}
