//! fieldexpr - Lazy elementwise arithmetic over numeric fields
//!
//! # Overview
//!
//! Chains of elementwise operations such as `m*w/rho + (m+rho)*w/m` are
//! usually evaluated one operation at a time, allocating a full-length
//! temporary for every step. fieldexpr instead builds a tree of expression
//! nodes that borrow their operands and compute each element only when it
//! is read.
//!
//! # Quick Start
//!
//! ```
//! use fieldexpr::{Field, Operand, expr};
//!
//! let m = Field::with_value(4, 0.5);
//! let rho = Field::with_value(4, 1.0);
//! let w = Field::from_vec(vec![1.0, 0.9, 0.8, 0.7]);
//!
//! let mw = expr::mul(&m, &w)?;
//! let mw_rho = expr::div(&mw, &rho)?;
//! let m_plus_rho = expr::add(&m, &rho)?;
//! let scaled = expr::mul(&m_plus_rho, &w)?;
//! let scaled_m = expr::div(&scaled, &m)?;
//! let vf = expr::add(&mw_rho, &scaled_m)?;
//!
//! // Nothing has been computed yet; this reads one element.
//! assert_eq!(vf.at(0), 3.5);
//!
//! // Materialize once, at the end.
//! let result = Field::materialize(&vf);
//! assert_eq!(result.len(), 4);
//! # Ok::<(), fieldexpr::ExprError>(())
//! ```
//!
//! # Configurations
//!
//! - Statically-typed nodes from [`expr::add`], [`expr::sub`], [`expr::mul`]
//!   and [`expr::div`]
//! - Arena-allocated, type-erased chains of runtime depth with
//!   [`expr::ExprArena`]
//! - Opt-in per-element caching with [`expr::Memoized`]
//!
//! # Strategies
//!
//! The [`strategy`] module evaluates the same kernel expression eagerly,
//! through expression nodes, or through iterator adapters, all behind the
//! [`strategy::Strategy`] trait.

// Re-export public API from fieldexpr_core
pub use fieldexpr_core::{
    BinaryExpr, ExprError, Field, Operand, ScenarioOptions, expr, kernel, strategy, validate,
};

// Re-export the arena type used by `expr::ExprArena`
pub use bumpalo::Bump;
