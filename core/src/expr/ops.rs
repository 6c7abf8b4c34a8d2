//! Binary operators stored inside expression nodes.
//!
//! Operators are function objects chosen when a node is built. Each node is
//! generic over its operator type, so applying the operator is a direct,
//! inlinable call rather than dynamic dispatch.

use core::fmt;
use core::ops;

/// A pure function of two elements returning one element.
pub trait BinaryOp<T> {
    fn apply(&self, lhs: T, rhs: T) -> T;

    /// Short name used when printing expression trees.
    fn symbol(&self) -> &'static str {
        "fn"
    }
}

macro_rules! arithmetic_op {
    ($(#[$doc:meta])* $name:ident, $trait:ident, $op:tt) => {
        $(#[$doc])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name;

        impl<T: ops::$trait<Output = T>> BinaryOp<T> for $name {
            #[inline(always)]
            fn apply(&self, lhs: T, rhs: T) -> T {
                lhs $op rhs
            }

            fn symbol(&self) -> &'static str {
                stringify!($op)
            }
        }
    };
}

arithmetic_op!(
    /// Elementwise `lhs + rhs`.
    Add, Add, +
);
arithmetic_op!(
    /// Elementwise `lhs - rhs`.
    Sub, Sub, -
);
arithmetic_op!(
    /// Elementwise `lhs * rhs`.
    Mul, Mul, *
);
arithmetic_op!(
    /// Elementwise `lhs / rhs`. Float division by zero follows IEEE 754.
    Div, Div, /
);

/// Adapts any `Fn(T, T) -> T` closure into a [`BinaryOp`].
#[derive(Clone, Copy)]
pub struct FnOp<F>(pub F);

impl<T, F: Fn(T, T) -> T> BinaryOp<T> for FnOp<F> {
    #[inline(always)]
    fn apply(&self, lhs: T, rhs: T) -> T {
        (self.0)(lhs, rhs)
    }
}

impl<F> fmt::Debug for FnOp<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnOp(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_ops() {
        assert_eq!(Add.apply(3.0, 2.0), 5.0);
        assert_eq!(Sub.apply(3.0, 2.0), 1.0);
        assert_eq!(Mul.apply(3.0, 2.0), 6.0);
        assert_eq!(Div.apply(3.0, 2.0), 1.5);
    }

    #[test]
    fn test_float_div_by_zero() {
        // Float division by zero produces infinity (IEEE 754)
        let result = Div.apply(10.0_f64, 0.0);
        assert!(result.is_infinite() && result.is_sign_positive());
    }

    #[test]
    fn test_int_ops() {
        assert_eq!(Add.apply(2i64, 3), 5);
        assert_eq!(Div.apply(7i64, 2), 3);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(BinaryOp::<f64>::symbol(&Add), "+");
        assert_eq!(BinaryOp::<f64>::symbol(&Sub), "-");
        assert_eq!(BinaryOp::<f64>::symbol(&Mul), "*");
        assert_eq!(BinaryOp::<f64>::symbol(&Div), "/");
        assert_eq!(BinaryOp::<f64>::symbol(&FnOp(f64::max)), "fn");
    }

    #[test]
    fn test_fn_op_wraps_closure() {
        let hypot = FnOp(|a: f64, b: f64| (a * a + b * b).sqrt());
        assert_eq!(hypot.apply(3.0, 4.0), 5.0);
    }
}
