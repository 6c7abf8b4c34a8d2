//! Lazy expression nodes and the combinators that build them.
//!
//! An expression tree is made of [`BinaryExpr`] nodes whose leaves are
//! [`Field`](crate::Field)s. Nodes hold references to their operands and
//! an operator; they never own or copy operand data. Indexing the root pulls
//! one value from each leaf through the tree at the moment of the request.
//!
//! ## Design Principles
//!
//! - **No materialization**: building and reading a tree allocates nothing
//! - **Borrowed operands**: the borrow checker guarantees operands outlive nodes
//! - **Checked once**: operand sizes are validated at construction, not per read
//! - **No caching**: every read recomputes; use [`Memoized`] to opt in
//!
//! ## Configurations
//!
//! - [`add`], [`sub`], [`mul`], [`div`]: statically-typed nodes, fully inlined
//! - [`ExprArena`]: type-erased nodes of runtime-determined depth
//! - [`Memoized`]: per-element caching wrapper

mod arena;
mod combinators;
mod error;
mod memo;
mod node;
mod operand;
pub mod ops;


pub use arena::{DynOperand, ExprArena};
pub use combinators::{add, div, mul, sub};
pub use error::ExprError;
pub use memo::Memoized;
pub use node::BinaryExpr;
pub use operand::{Operand, elements};
