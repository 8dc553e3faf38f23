use std::marker::PhantomData;

use super::constant::Constant;
use super::nat::*;

/*
 * Type level cons list
 */


pub trait TList {
    type Len: Nat;
    const LEN: usize;
}
impl TList for () {
    type Len = Zero;
    const LEN: usize = 0;
}
impl<A, T: TList> TList for TCons<A, T> {
    type Len = Succ<T::Len>;
    const LEN: usize = 1 + T::LEN;
}


pub struct TCons<A, T: TList>(PhantomData<fn() -> (A, T)>);

impl<A, T: TList> Clone for TCons<A, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<A, T: TList> Copy for TCons<A, T> {}
impl<A, T: TList> Default for TCons<A, T> {
    fn default() -> Self {
        TCons(PhantomData)
    }
}


#[macro_export]
macro_rules! tlist {
    () => { () };
    ($A:ty $(,$tok:ty)* $(,)?) => {
        $crate::TCons<$A, $crate::tlist!($($tok),*)>
    };
}


/*
 * Positional descent
 */

#[diagnostic::on_unimplemented(
    message = "position `{N}` is out of range for `{Self}`",
    label = "no element at this position"
)]
pub trait At<N: Nat> {
    type Output;
}
impl<A, T: TList> At<Zero> for TCons<A, T> {
    type Output = A;
}
impl<A, T: TList + At<N>, N: Nat> At<Succ<N>> for TCons<A, T> {
    type Output = T::Output;
}

/// The element of `L` at position `P`.
pub type ElementAt<L, P> = <L as At<<P as Position>::Offset>>::Output;


/*
 * Linear search. `N` is the position of `U` and is inferred from whichever
 * impl chain succeeds, so a key occurring twice is ambiguous.
 */

#[diagnostic::on_unimplemented(
    message = "`{U}` does not occur in `{Self}`",
    label = "searched for here"
)]
pub trait Find<U, N: Nat> {}
impl<U, T: TList> Find<U, Zero> for TCons<U, T> {}
impl<A, U, T: TList + Find<U, N>, N: Nat> Find<U, Succ<N>> for TCons<A, T> {}


#[diagnostic::on_unimplemented(message = "`{Self}` cannot be concatenated with `{R}`")]
pub trait Concat<R: TList>: TList {
    type Output: TList;
}
impl<R: TList> Concat<R> for () {
    type Output = R;
}
impl<A, T: Concat<R>, R: TList> Concat<R> for TCons<A, T> {
    type Output = TCons<A, T::Output>;
}


/// Lists whose elements are all constants of the primitive `T`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a list of `{T}` constants",
    note = "every element of a value list must be a constant of the list's type"
)]
pub trait Homogeneous<T>: TList {}
impl<T> Homogeneous<T> for () {}
impl<T, C: Constant<Type = T>, R: Homogeneous<T>> Homogeneous<T> for TCons<C, R> {}
