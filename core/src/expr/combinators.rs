//! Factory functions that compose operands into expression nodes.
//!
//! Each combinator only builds structure. The composed node type is inferred
//! from the argument types, so chains read like ordinary arithmetic:
//!
//! ```
//! use fieldexpr_core::{Field, expr::{add, div, mul, Operand}};
//!
//! let m = Field::with_value(2, 0.5);
//! let w = Field::from_vec(vec![0.25, 1.0]);
//! let rho = Field::with_value(2, 1.0);
//!
//! let m_plus_rho = add(&m, &rho)?;
//! let scaled = mul(&m_plus_rho, &w)?;
//! let result = div(&scaled, &m)?;
//!
//! assert_eq!(result.at(0), 0.75);
//! assert_eq!(result.depth(), 3);
//! # Ok::<(), fieldexpr_core::ExprError>(())
//! ```

use super::{
    BinaryExpr, ExprError, Operand,
    ops::{Add, Div, Mul, Sub},
};

/// Deferred elementwise `left + right`.
pub fn add<'a, L, R>(left: &'a L, right: &'a R) -> Result<BinaryExpr<'a, L, R, Add>, ExprError>
where
    L: Operand + ?Sized,
    R: Operand<Elem = L::Elem> + ?Sized,
    L::Elem: core::ops::Add<Output = L::Elem>,
{
    BinaryExpr::new(left, right, Add)
}

/// Deferred elementwise `left - right`.
pub fn sub<'a, L, R>(left: &'a L, right: &'a R) -> Result<BinaryExpr<'a, L, R, Sub>, ExprError>
where
    L: Operand + ?Sized,
    R: Operand<Elem = L::Elem> + ?Sized,
    L::Elem: core::ops::Sub<Output = L::Elem>,
{
    BinaryExpr::new(left, right, Sub)
}

/// Deferred elementwise `left * right`.
pub fn mul<'a, L, R>(left: &'a L, right: &'a R) -> Result<BinaryExpr<'a, L, R, Mul>, ExprError>
where
    L: Operand + ?Sized,
    R: Operand<Elem = L::Elem> + ?Sized,
    L::Elem: core::ops::Mul<Output = L::Elem>,
{
    BinaryExpr::new(left, right, Mul)
}

/// Deferred elementwise `left / right`.
pub fn div<'a, L, R>(left: &'a L, right: &'a R) -> Result<BinaryExpr<'a, L, R, Div>, ExprError>
where
    L: Operand + ?Sized,
    R: Operand<Elem = L::Elem> + ?Sized,
    L::Elem: core::ops::Div<Output = L::Elem>,
{
    BinaryExpr::new(left, right, Div)
}
