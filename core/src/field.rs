//! Fixed-length numeric fields and their eager elementwise arithmetic.
//!
//! A [`Field`] owns its storage. Every arithmetic operator on fields allocates
//! a fresh result, which makes fields the natural leaves of a lazy expression
//! tree and the natural baseline to compare it against.

use core::ops::{Add, Div, Index, IndexMut, Mul, Sub};

use crate::expr::{ExprError, Operand};

/// A fixed-length sequence of numeric values.
#[derive(Debug, Clone, PartialEq)]
pub struct Field<T> {
    values: Vec<T>,
}

impl<T: Copy> Field<T> {
    /// Creates a field of `len` elements, all equal to `value`.
    pub fn with_value(len: usize, value: T) -> Self {
        Self {
            values: vec![value; len],
        }
    }

    pub fn from_vec(values: Vec<T>) -> Self {
        Self { values }
    }

    /// Creates a field by calling `f` for every index in `0..len`.
    pub fn from_fn(len: usize, f: impl FnMut(usize) -> T) -> Self {
        Self {
            values: (0..len).map(f).collect(),
        }
    }

    /// Evaluates every element of `operand` into a newly allocated field.
    pub fn materialize<O>(operand: &O) -> Self
    where
        O: Operand<Elem = T> + ?Sized,
    {
        Self::from_fn(operand.len(), |index| operand.at(index))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn iter(&self) -> core::iter::Copied<core::slice::Iter<'_, T>> {
        self.values.iter().copied()
    }

    /// Applies `f` to each element, producing a new field.
    pub fn map<U: Copy>(&self, f: impl FnMut(T) -> U) -> Field<U> {
        Field {
            values: self.values.iter().copied().map(f).collect(),
        }
    }

    /// Combines two fields elementwise into a newly allocated field.
    pub fn zip_with(&self, other: &Field<T>, f: impl Fn(T, T) -> T) -> Result<Field<T>, ExprError> {
        ExprError::check_sizes(self.len(), other.len())?;
        Ok(Field {
            values: self
                .values
                .iter()
                .zip(&other.values)
                .map(|(&lhs, &rhs)| f(lhs, rhs))
                .collect(),
        })
    }

    pub fn into_vec(self) -> Vec<T> {
        self.values
    }
}

impl<T: Copy> Operand for Field<T> {
    type Elem = T;

    #[inline]
    fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    fn at(&self, index: usize) -> T {
        self.values[index]
    }
}

impl<T> Index<usize> for Field<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

impl<T> IndexMut<usize> for Field<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.values[index]
    }
}

impl<T> FromIterator<T> for Field<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<T> From<Vec<T>> for Field<T> {
    fn from(values: Vec<T>) -> Self {
        Self { values }
    }
}

impl<'f, T: Copy> IntoIterator for &'f Field<T> {
    type Item = T;
    type IntoIter = core::iter::Copied<core::slice::Iter<'f, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter().copied()
    }
}

// Eager operators: each one allocates and fills a fresh field.
macro_rules! eager_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        /// Elementwise operation producing a newly allocated field.
        ///
        /// # Panics
        ///
        /// Panics if the two fields have different lengths. Use
        /// [`Field::zip_with`] for a fallible version.
        impl<T> $trait<&Field<T>> for &Field<T>
        where
            T: Copy + $trait<Output = T>,
        {
            type Output = Field<T>;

            fn $method(self, rhs: &Field<T>) -> Field<T> {
                assert_eq!(
                    self.len(),
                    rhs.len(),
                    "elementwise `{}` on fields of different lengths",
                    stringify!($op)
                );
                Field {
                    values: self
                        .values
                        .iter()
                        .zip(&rhs.values)
                        .map(|(&lhs, &rhs)| lhs $op rhs)
                        .collect(),
                }
            }
        }
    };
}

eager_binop!(Add, add, +);
eager_binop!(Sub, sub, -);
eager_binop!(Mul, mul, *);
eager_binop!(Div, div, /);
