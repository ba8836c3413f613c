//! Inlam: self-inlining anonymous expressions.
//!
//! A self-inlining expression inlines itself wherever it ends up being used,
//! avoiding runtime closure creation and call penalties. It works by folding
//! the syntax tree of an expression into its *type*: every constant, argument
//! placeholder, sum, and product is a distinct zero-sized marker type, and a
//! type-indexed resolver unfolds that tree back into plain arithmetic at each
//! use site.
//!
//! The design centers around two complementary pieces:
//! - a typed, composable builder API ([`node::Exp`] with `+`/`*` operator
//!   sugar and the free builders in [`func`]) that grows the expression type
//!   as you write the expression; and
//! - a compile-time resolver ([`eval::Eval`]) that expands any expression
//!   type into the arithmetic it denotes, by structural recursion over the
//!   type, with every step `#[inline(always)]`.
//!
//! Performance
//!  - Expression values are zero-sized; they carry no state and are never
//!    inspected at runtime.
//!  - Resolution is pure monomorphization: no function pointers, no virtual
//!    dispatch, no allocation. The generated code for an expression is the
//!    same arithmetic you would have written by hand at the call site.
//!
//! Example
//! ```
//! use inlam::prelude::*;
//!
//! // x ↦ x² + 1, as a type
//! let x = arg::<f64>();
//! let f = lambda(x, x * x + lit::<1>());
//!
//! // Generic callers resolve the expression through `Eval`.
//! fn apply<F: Eval<f64>>(f: F, v: f64) -> f64 {
//!     f.eval_at(v)
//! }
//! assert_eq!(apply(f, 3.0), 10.0);
//! ```
#![deny(missing_docs)]

/// Compile-time resolver: the `Eval` trait and the `Scalar` bound.
pub mod eval;
/// Free-function builders and the `lambda` call-site sugar.
pub mod func;
/// Expression type lattice: node markers and the `Exp` capability.
pub mod node;

pub mod prelude {
    //! Convenient re-exports for end users.
    //!
    //! - `Exp` trait with the `sum`/`product` combinators
    //! - Node markers (`Lit`, `Arg`, `Sum`, `Prod`)
    //! - The `Eval` resolver and its value-side `eval_at` helper
    //! - Free builders (`arg`, `lit`, `sum`, `product`, `lambda`)
    pub use crate::eval::{Eval, EvalExt, Scalar};
    pub use crate::func::{arg, lambda, lit, product, sum};
    pub use crate::node::{Arg, Exp, Lit, Prod, Sum};
}
