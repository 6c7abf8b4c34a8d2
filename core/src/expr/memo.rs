//! Opt-in per-element caching for expensive subtrees.
//!
//! [`BinaryExpr`](super::BinaryExpr) recomputes its whole subtree on every
//! read. When a deep or shared subtree is read many times, wrapping it in
//! [`Memoized`] computes each element at most once. This is a different
//! resource model: the wrapper allocates one cell per element up front and
//! mutates them through a shared reference, so it is neither free nor
//! `Sync`.

use core::cell::{Cell, OnceCell};
use core::fmt;

use super::Operand;

/// Caches each element of the wrapped operand on first read.
///
/// ```
/// use fieldexpr_core::{Field, expr::{self, Memoized, Operand}};
///
/// let a = Field::from_vec(vec![1.0, 2.0]);
/// let sum = expr::add(&a, &a)?;
/// let cached = Memoized::new(&sum);
///
/// assert_eq!(cached.at(1), 4.0);
/// assert_eq!(cached.at(1), 4.0);
/// assert_eq!(cached.evaluations(), 1);
/// # Ok::<(), fieldexpr_core::ExprError>(())
/// ```
pub struct Memoized<'a, O: Operand + ?Sized> {
    inner: &'a O,
    cells: Box<[OnceCell<O::Elem>]>,
    evaluations: Cell<usize>,
}

impl<'a, O: Operand + ?Sized> Memoized<'a, O> {
    pub fn new(inner: &'a O) -> Self {
        Self {
            inner,
            cells: (0..inner.len()).map(|_| OnceCell::new()).collect(),
            evaluations: Cell::new(0),
        }
    }

    pub fn inner(&self) -> &'a O {
        self.inner
    }

    /// Number of elements computed by the wrapped operand so far.
    pub fn evaluations(&self) -> usize {
        self.evaluations.get()
    }
}

impl<O: Operand + ?Sized> Operand for Memoized<'_, O> {
    type Elem = O::Elem;

    fn len(&self) -> usize {
        self.cells.len()
    }

    fn at(&self, index: usize) -> Self::Elem {
        *self.cells[index].get_or_init(|| {
            self.evaluations.set(self.evaluations.get() + 1);
            self.inner.at(index)
        })
    }

    fn depth(&self) -> usize {
        self.inner.depth()
    }
}

impl<O: Operand + ?Sized> fmt::Debug for Memoized<'_, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoized")
            .field("len", &self.len())
            .field("evaluations", &self.evaluations())
            .finish()
    }
}
