use std::marker::PhantomData;

use super::constant::*;
use super::lift::{lift_operators, op, Binary};
use super::macros::*;
use super::tlist::*;


/*
 * Pairwise value equality of two lists of constants. Lengths are compared
 * structurally, so lists of different lengths are unequal without touching
 * their elements.
 */

#[diagnostic::on_unimplemented(
    message = "the elements of `{Self}` and `{R}` cannot be compared",
    note = "both lists must hold constants of the same primitive type"
)]
pub trait ValuesEq<R> {
    const EQUAL: bool;
}

impl ValuesEq<()> for () {
    const EQUAL: bool = true;
}
impl<B, S: TList> ValuesEq<TCons<B, S>> for () {
    const EQUAL: bool = false;
}
impl<A, T: TList> ValuesEq<()> for TCons<A, T> {
    const EQUAL: bool = false;
}
impl<A, T, B, S> ValuesEq<TCons<B, S>> for TCons<A, T>
    where
        A: Constant,
        B: Constant,
        T: TList + ValuesEq<S>,
        S: TList,
        Binary<op::Equal, A, B>: Constant<Type = bool>,
{
    const EQUAL: bool = <Binary<op::Equal, A, B> as Constant>::VALUE && T::EQUAL;
}


/// `True` valued when `L` and `R` hold equal values at every position.
pub struct ListEqual<L, R>(PhantomData<fn() -> (L, R)>);
impl_marker!([L, R], ListEqual<L, R>, ListEqual(PhantomData));
impl_value_fmt!([L, R], ListEqual<L, R>, "ListEqual");
lift_operators!([L, R,], ListEqual<L, R>);

impl<L: ValuesEq<R> + 'static, R: 'static> Constant for ListEqual<L, R> {
    type Type = bool;
    const VALUE: bool = L::EQUAL;
    const INSTANCE: &'static Self = &ListEqual(PhantomData);
}

impl<L: ValuesEq<R> + 'static, R: 'static> From<ListEqual<L, R>> for bool {
    fn from(_: ListEqual<L, R>) -> bool {
        L::EQUAL
    }
}


/*
 * Search by value. The scan runs in const evaluation and stops at the first
 * element whose value equals the key, so repeated values and lifted keys
 * are found like any other.
 */

#[diagnostic::on_unimplemented(
    message = "`{C}` cannot be searched for in `{Self}`",
    note = "the key must be a constant of the list's type"
)]
pub trait FindValue<C> {
    const POSITION: Option<usize>;
}

impl<C> FindValue<C> for () {
    const POSITION: Option<usize> = None;
}
impl<A, T, C> FindValue<C> for TCons<A, T>
    where
        A: Constant,
        C: Constant,
        T: TList + FindValue<C>,
        Binary<op::Equal, A, C>: Constant<Type = bool>,
{
    const POSITION: Option<usize> = if <Binary<op::Equal, A, C> as Constant>::VALUE {
        Some(0)
    } else {
        match T::POSITION {
            Some(n) => Some(n + 1),
            None => None,
        }
    };
}


/// Position of the first element of `L` equal to `C`. Evaluating it fails
/// when no element is.
pub struct ValuePosition<L, C>(PhantomData<fn() -> (L, C)>);
impl_marker!([L, C], ValuePosition<L, C>, ValuePosition(PhantomData));
impl_value_fmt!([L, C], ValuePosition<L, C>, "ValuePosition");
lift_operators!([L, C,], ValuePosition<L, C>);

impl<L: FindValue<C> + 'static, C: 'static> Constant for ValuePosition<L, C> {
    type Type = usize;
    const VALUE: usize = match L::POSITION {
        Some(n) => n,
        None => panic!("the constant does not occur in the value list"),
    };
    const INSTANCE: &'static Self = &ValuePosition(PhantomData);
}

impl<L: FindValue<C> + 'static, C: 'static> From<ValuePosition<L, C>> for usize {
    fn from(_: ValuePosition<L, C>) -> usize {
        <ValuePosition<L, C> as Constant>::VALUE
    }
}
