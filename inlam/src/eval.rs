//! Compile-time resolver: unfolds an expression type back into arithmetic.
//!
//! Role
//! - [`Eval<A>`] is indexed by the expression's node type. Each node has
//!   exactly one impl, so resolving an expression is structural recursion
//!   over the type: the resolver of a `Sum` is built from the resolvers of
//!   its children, and so on down to the leaves.
//! - Recursion depth equals tree depth, and every step is
//!   `#[inline(always)]`, so after monomorphization nothing of the
//!   expression machinery remains in the generated code.
//!
//! A node combination with no matching impl is a compile error at the call
//! site; there is no runtime failure path. In particular the argument
//! placeholder only resolves at its own scalar type:
//!
//! ```compile_fail
//! use inlam::prelude::*;
//!
//! // An `f32` placeholder cannot be resolved at `f64`.
//! let x = arg::<f32>();
//! let square = lambda(x, x * x);
//! let _ = square.eval_at(1.0_f64);
//! ```
use num_traits::Num;

use crate::node::{Arg, Exp, Lit, Prod, Sum};

/// Numeric types an expression can be evaluated at.
///
/// The arithmetic itself comes from [`num_traits::Num`]; on top of that a
/// scalar only needs to absorb constant literals, which are stored as `i64`
/// in the expression type.
pub trait Scalar: Copy + Num {
    /// Convert a constant literal into this scalar.
    ///
    /// Uses `as`-cast semantics, matching what writing the literal directly
    /// in source would do for the common cases (all `i64` constants are
    /// exact in every integer type wide enough to hold them, and exact in
    /// `f64` up to 2⁵³).
    fn from_literal(lit: i64) -> Self;
}

macro_rules! impl_scalar {
    ( $( $ty:ty ),* $(,)? ) => {
        $(
            impl Scalar for $ty {
                #[inline(always)]
                fn from_literal(lit: i64) -> Self {
                    lit as $ty
                }
            }
        )*
    };
}

impl_scalar! {
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
}

/// Type-indexed resolver for expression nodes.
///
/// For any expression type built from [`crate::node`], `Eval<A>::at`
/// produces the value of the expression at the given argument, expanded to
/// the same arithmetic a hand-written version would perform, in the same
/// order. The operation is pure: same type, same argument, same result.
pub trait Eval<A: Scalar>: Exp {
    /// Evaluate the expression this type denotes at `arg`.
    fn at(arg: A) -> A;
}

// Resolve constants: the argument is ignored.
impl<A: Scalar, const I: i64> Eval<A> for Lit<I> {
    #[inline(always)]
    fn at(_arg: A) -> A {
        A::from_literal(I)
    }
}

// Resolve the argument placeholder: identity, and the only impl is at the
// placeholder's own scalar type, which pins the `at(A) -> A` signature of
// the whole expression.
impl<A: Scalar> Eval<A> for Arg<A> {
    #[inline(always)]
    fn at(arg: A) -> A {
        arg
    }
}

// Resolve sums from the resolvers of both children.
impl<A: Scalar, E1: Eval<A>, E2: Eval<A>> Eval<A> for Sum<E1, E2> {
    #[inline(always)]
    fn at(arg: A) -> A {
        E1::at(arg) + E2::at(arg)
    }
}

// Resolve products from the resolvers of both children.
impl<A: Scalar, E1: Eval<A>, E2: Eval<A>> Eval<A> for Prod<E1, E2> {
    #[inline(always)]
    fn at(arg: A) -> A {
        E1::at(arg) * E2::at(arg)
    }
}

/// Value-side convenience for resolving through a marker value.
///
/// [`Eval::at`] is an associated function; `eval_at` lets code that holds an
/// expression *value* (for example one returned by
/// [`lambda`](crate::func::lambda)) evaluate it without naming the type.
pub trait EvalExt: Exp {
    /// Evaluate the expression denoted by `self`'s type at `arg`.
    #[inline(always)]
    fn eval_at<A: Scalar>(self, arg: A) -> A
    where
        Self: Eval<A>,
    {
        Self::at(arg)
    }
}

impl<T: Exp> EvalExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_conversion_matches_as_casts() {
        assert_eq!(i32::from_literal(-7), -7);
        assert_eq!(u8::from_literal(300), 300i64 as u8);
        assert_eq!(f64::from_literal(3), 3.0);
        assert_eq!(f32::from_literal(-2), -2.0);
    }

    #[test]
    fn resolves_each_node_shape() {
        assert_eq!(<Lit<5> as Eval<i64>>::at(123), 5);
        assert_eq!(<Arg<i64> as Eval<i64>>::at(123), 123);
        assert_eq!(<Sum<Lit<5>, Arg<i64>> as Eval<i64>>::at(123), 128);
        assert_eq!(<Prod<Lit<5>, Arg<i64>> as Eval<i64>>::at(123), 615);
    }
}
