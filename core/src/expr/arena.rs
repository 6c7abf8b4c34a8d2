//! Arena-allocated expression chains of runtime-determined depth.
//!
//! Statically-typed nodes encode the whole tree shape in their type, which
//! is ideal for a fixed formula but cannot express a chain whose length is
//! only known at runtime. Nodes built here are allocated in a `Bump` arena
//! and referred to as `&dyn Operand`, so every node has the same type no
//! matter how deep the chain goes. Reads go through dynamic dispatch.
//!
//! Bump arenas never run destructors. Operators holding owned resources
//! (for example a closure capturing a `Vec`) leak them when the arena is
//! dropped.

use bumpalo::Bump;

use super::{
    BinaryExpr, ExprError, Operand,
    ops::{Add, BinaryOp, Div, Mul, Sub},
};

/// A type-erased operand borrowed for `'a`.
pub type DynOperand<'a, T> = dyn Operand<Elem = T> + 'a;

/// Builds expression nodes inside a `Bump` arena.
///
/// # Example
///
/// ```
/// use bumpalo::Bump;
/// use fieldexpr_core::{Field, expr::{ExprArena, Operand, ops::Add}};
///
/// let arena = Bump::new();
/// let exprs = ExprArena::new(&arena);
///
/// let x = Field::with_value(4, 1.0);
/// let step = Field::with_value(4, 0.5);
/// let x: &dyn Operand<Elem = f64> = &x;
/// let step: &dyn Operand<Elem = f64> = &step;
///
/// // x + 0.5 + 0.5 + ... (10 times)
/// let chain = exprs.fold(x, std::iter::repeat(step).take(10), Add)?;
/// assert_eq!(chain.depth(), 10);
/// assert_eq!(chain.at(3), 6.0);
/// # Ok::<(), fieldexpr_core::ExprError>(())
/// ```
#[derive(Copy, Clone, Debug)]
pub struct ExprArena<'arena> {
    arena: &'arena Bump,
}

impl<'arena> ExprArena<'arena> {
    pub fn new(arena: &'arena Bump) -> Self {
        Self { arena }
    }

    /// Allocates a node applying `op` to `left` and `right`.
    pub fn binary<T, Op>(
        self,
        left: &'arena DynOperand<'arena, T>,
        right: &'arena DynOperand<'arena, T>,
        op: Op,
    ) -> Result<&'arena DynOperand<'arena, T>, ExprError>
    where
        T: Copy + 'arena,
        Op: BinaryOp<T> + 'arena,
    {
        let node = BinaryExpr::new(left, right, op)?;
        tracing::trace!(
            op = node.op().symbol(),
            len = node.len(),
            depth = node.depth(),
            "allocating arena node"
        );
        Ok(self.arena.alloc(node))
    }

    pub fn add<T>(
        self,
        left: &'arena DynOperand<'arena, T>,
        right: &'arena DynOperand<'arena, T>,
    ) -> Result<&'arena DynOperand<'arena, T>, ExprError>
    where
        T: Copy + core::ops::Add<Output = T> + 'arena,
    {
        self.binary(left, right, Add)
    }

    pub fn sub<T>(
        self,
        left: &'arena DynOperand<'arena, T>,
        right: &'arena DynOperand<'arena, T>,
    ) -> Result<&'arena DynOperand<'arena, T>, ExprError>
    where
        T: Copy + core::ops::Sub<Output = T> + 'arena,
    {
        self.binary(left, right, Sub)
    }

    pub fn mul<T>(
        self,
        left: &'arena DynOperand<'arena, T>,
        right: &'arena DynOperand<'arena, T>,
    ) -> Result<&'arena DynOperand<'arena, T>, ExprError>
    where
        T: Copy + core::ops::Mul<Output = T> + 'arena,
    {
        self.binary(left, right, Mul)
    }

    pub fn div<T>(
        self,
        left: &'arena DynOperand<'arena, T>,
        right: &'arena DynOperand<'arena, T>,
    ) -> Result<&'arena DynOperand<'arena, T>, ExprError>
    where
        T: Copy + core::ops::Div<Output = T> + 'arena,
    {
        self.binary(left, right, Div)
    }

    /// Left-folds `operands` onto `seed` with `op`, one node per operand.
    ///
    /// Returns `seed` unchanged when `operands` is empty. Stops at the first
    /// operand whose length differs from the chain built so far.
    pub fn fold<T, Op, I>(
        self,
        seed: &'arena DynOperand<'arena, T>,
        operands: I,
        op: Op,
    ) -> Result<&'arena DynOperand<'arena, T>, ExprError>
    where
        T: Copy + 'arena,
        Op: BinaryOp<T> + Copy + 'arena,
        I: IntoIterator<Item = &'arena DynOperand<'arena, T>>,
    {
        operands
            .into_iter()
            .try_fold(seed, |acc, operand| self.binary(acc, operand, op))
    }
}
