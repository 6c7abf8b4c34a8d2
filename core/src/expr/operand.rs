//! The read interface shared by fields and expression nodes.

/// Anything that can supply one value per index: a [`Field`](crate::Field),
/// a [`BinaryExpr`](super::BinaryExpr), or any other view.
///
/// The trait is object safe, so `&dyn Operand<Elem = f64>` can stand in for
/// an operand whose concrete type is only known at runtime.
pub trait Operand {
    /// The element type produced at each index.
    type Elem: Copy;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Returns the element at `index`.
    ///
    /// `index` must be less than [`len`](Operand::len). Violating this is a
    /// caller bug: debug builds assert, and leaf fields panic on the slice
    /// access. Use [`get`](Operand::get) when the index is not known to be in
    /// range.
    fn at(&self, index: usize) -> Self::Elem;

    /// Checked variant of [`at`](Operand::at).
    fn get(&self, index: usize) -> Option<Self::Elem> {
        if index < self.len() {
            Some(self.at(index))
        } else {
            None
        }
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of chained operations between this operand and its deepest leaf.
    fn depth(&self) -> usize {
        0
    }
}

impl<O: Operand + ?Sized> Operand for &O {
    type Elem = O::Elem;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn at(&self, index: usize) -> Self::Elem {
        (**self).at(index)
    }

    fn depth(&self) -> usize {
        (**self).depth()
    }
}

/// Iterates over every element of an operand in index order.
///
/// The iterator borrows the operand and computes each element on demand.
pub fn elements<O: Operand + ?Sized>(operand: &O) -> impl ExactSizeIterator<Item = O::Elem> + '_ {
    (0..operand.len()).map(move |index| operand.at(index))
}
