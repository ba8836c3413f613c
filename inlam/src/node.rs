//! Expression type lattice: zero-sized markers whose types spell out a
//! syntax tree.
//!
//! Role
//! - Each node type ([`Lit`], [`Arg`], [`Sum`], [`Prod`]) is one syntactic
//!   element; interior nodes carry their children as type parameters, so the
//!   whole tree lives in the type.
//! - [`Exp`] unifies the nodes and provides the `sum`/`product` combinators;
//!   `+` and `*` operator sugar is generated for every node type.
//!
//! Values of these types exist only to drive type inference at call sites.
//! They are zero-sized, `Copy`, and never read; combinators consume their
//! operands without looking at them. An expression built from anything other
//! than these four nodes is rejected by the trait bounds at compile time.
use std::marker::PhantomData;

mod sealed {
    pub trait Sealed {}
}

/// Trait implemented by all expression nodes provided by this crate.
///
/// Role
/// - Unifies building across the concrete node types: any two expressions
///   can be combined with [`sum`](Exp::sum) or [`product`](Exp::product)
///   into a new, larger expression type.
/// - Sealed: the node set is closed, which is what lets the resolver in
///   [`crate::eval`] cover every expression by structural recursion.
///
/// Both combinators are pure type-level operations. The operands are
/// consumed but never read; only their types flow into the result.
pub trait Exp: sealed::Sealed + Sized + Copy {
    /// Combine `self + other` into a new expression type.
    #[inline]
    fn sum<M: Exp>(self, _other: M) -> Sum<Self, M> {
        Sum::new()
    }

    /// Combine `self * other` into a new expression type.
    #[inline]
    fn product<M: Exp>(self, _other: M) -> Prod<Self, M> {
        Prod::new()
    }
}

// Operator sugar (`+`, `*`) for expression nodes. Mirrors the combinators
// above so that expressions read like the arithmetic they denote.
macro_rules! define_node_ops {
    ( [ $( $params:tt )* ] $name:ty ) => {
        impl< $( $params )* _O1: Exp > std::ops::Add<_O1> for $name {
            type Output = Sum<Self, _O1>;

            #[inline]
            fn add(self, rhs: _O1) -> Self::Output {
                self.sum(rhs)
            }
        }

        impl< $( $params )* _O1: Exp > std::ops::Mul<_O1> for $name {
            type Output = Prod<Self, _O1>;

            #[inline]
            fn mul(self, rhs: _O1) -> Self::Output {
                self.product(rhs)
            }
        }
    };
}

// ========================= Leaf nodes =========================

/// Constant leaf: the literal `I` lives in the type, not in the value.
///
/// Evaluating `Lit<I>` at any argument yields `I` converted into the
/// evaluation scalar (see [`crate::eval::Scalar::from_literal`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lit<const I: i64>;

impl<const I: i64> Lit<I> {
    /// Produce the marker value for this constant.
    #[inline]
    pub const fn new() -> Self {
        Lit
    }
}

impl<const I: i64> sealed::Sealed for Lit<I> {}
impl<const I: i64> Exp for Lit<I> {}

define_node_ops! { [const I: i64,] Lit<I> }

/// Argument placeholder leaf for an expression over scalars of type `A`.
///
/// Stands in for the expression's single runtime input; evaluating it
/// returns the argument unchanged. The parameter pins down the scalar type
/// the finished expression can be resolved at.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Arg<A>(PhantomData<fn(A) -> A>);

// Manual impls: `PhantomData<fn(A) -> A>` is `Copy` for any `A`, but the
// derives would add a spurious `A: Copy` bound.
impl<A> Clone for Arg<A> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for Arg<A> {}

impl<A> Arg<A> {
    /// Produce the marker value for the argument placeholder.
    #[inline]
    pub const fn new() -> Self {
        Arg(PhantomData)
    }
}

impl<A> sealed::Sealed for Arg<A> {}
impl<A> Exp for Arg<A> {}

define_node_ops! { [A,] Arg<A> }

// ========================= Interior nodes =========================

/// Sum node: `E1 + E2`, with both children carried in the type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sum<E1, E2>(PhantomData<fn(E1, E2)>);

impl<E1, E2> Sum<E1, E2> {
    /// Produce the marker value for this sum.
    #[inline]
    pub const fn new() -> Self {
        Sum(PhantomData)
    }
}

impl<E1: Exp, E2: Exp> sealed::Sealed for Sum<E1, E2> {}
impl<E1: Exp, E2: Exp> Exp for Sum<E1, E2> {}

define_node_ops! { [E1: Exp, E2: Exp,] Sum<E1, E2> }

/// Product node: `E1 * E2`, with both children carried in the type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Prod<E1, E2>(PhantomData<fn(E1, E2)>);

impl<E1, E2> Prod<E1, E2> {
    /// Produce the marker value for this product.
    #[inline]
    pub const fn new() -> Self {
        Prod(PhantomData)
    }
}

impl<E1: Exp, E2: Exp> sealed::Sealed for Prod<E1, E2> {}
impl<E1: Exp, E2: Exp> Exp for Prod<E1, E2> {}

define_node_ops! { [E1: Exp, E2: Exp,] Prod<E1, E2> }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_are_zero_sized() {
        assert_eq!(size_of::<Lit<42>>(), 0);
        assert_eq!(size_of::<Arg<f64>>(), 0);
        assert_eq!(size_of::<Sum<Lit<1>, Arg<f64>>>(), 0);
        assert_eq!(size_of::<Prod<Arg<f64>, Prod<Arg<f64>, Lit<{ -3 }>>>>(), 0);
    }

    #[test]
    fn combinators_and_operators_agree_on_types() {
        fn assert_same<T>(_a: T, _b: T) {}

        let x = Arg::<f64>::new();
        let one = Lit::<1>::new();

        assert_same(x.sum(one), x + one);
        assert_same(x.product(one), x * one);
        assert_same((x + one).product(x), (x + one) * x);
    }
}
