//! Lazy elementwise expression composition over numeric fields.
//!
//! A chain such as `m*w/rho + (m+rho)*w/m` is built as a tree of
//! [`BinaryExpr`](expr::BinaryExpr) nodes that borrow their operands. Nothing
//! is computed until an element is requested by index, and no intermediate
//! field is ever allocated.
//!
//! ```
//! use fieldexpr_core::{Field, expr::{self, Operand}};
//!
//! let m = Field::with_value(3, 0.5);
//! let w = Field::from_vec(vec![1.0, 2.0, 4.0]);
//! let rho = Field::with_value(3, 2.0);
//!
//! let mw = expr::mul(&m, &w)?;
//! let mw_over_rho = expr::div(&mw, &rho)?;
//!
//! assert_eq!(mw_over_rho.len(), 3);
//! assert_eq!(mw_over_rho.at(2), 1.0);
//! # Ok::<(), fieldexpr_core::expr::ExprError>(())
//! ```

pub mod expr;
pub mod field;
pub mod kernel;
pub mod options;
pub mod strategy;
pub mod validate;

pub use expr::{BinaryExpr, ExprError, Operand};
pub use field::Field;
pub use options::ScenarioOptions;
