//! Free-function builders for expression nodes, plus the `lambda` sugar.
//!
//! Everything here is glue: each function only forwards to the node
//! constructors or combinators in [`crate::node`] so call sites can be
//! written point-free.
use crate::node::{Arg, Exp, Lit, Prod, Sum};

/// The argument placeholder for an expression over scalars of type `A`.
#[inline]
pub fn arg<A>() -> Arg<A> {
    Arg::new()
}

/// The constant expression `I`.
#[inline]
pub fn lit<const I: i64>() -> Lit<I> {
    Lit::new()
}

/// The expression `lhs + rhs`.
#[inline]
pub fn sum<P: Exp, Q: Exp>(lhs: P, rhs: Q) -> Sum<P, Q> {
    lhs.sum(rhs)
}

/// The expression `lhs * rhs`.
#[inline]
pub fn product<P: Exp, Q: Exp>(lhs: P, rhs: Q) -> Prod<P, Q> {
    lhs.product(rhs)
}

/// Call-site sugar for single-argument anonymous functions.
///
/// Returns `body` unchanged: the value exists only so the expression type
/// built with the placeholder flows to the caller through inference.
///
/// ```
/// use inlam::prelude::*;
///
/// let x = arg::<f64>();
/// let square = lambda(x, x * x);
/// assert_eq!(square.eval_at(4.0), 16.0);
/// ```
#[inline]
pub fn lambda<P: Exp, B: Exp>(_arg: P, body: B) -> B {
    body
}
