use std::marker::PhantomData;

use super::constant::*;
use super::lift::{lift_operators, op, Binary, Unary};
use super::macros::*;


/*
 * Type level naturals. Lengths come out as naturals and positional
 * descent recurses on them; they are usize constants like any other.
 */

pub trait Nat: Constant<Type = usize> {}


#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Zero;
impl Nat for Zero {}
impl Constant for Zero {
    type Type = usize;
    const VALUE: usize = 0;
    const INSTANCE: &'static Self = &Zero;
}
impl_value_fmt!([], Zero, "Nat");
lift_operators!(@unsigned [], Zero);

impl From<Zero> for usize {
    fn from(_: Zero) -> usize {
        0
    }
}


pub struct Succ<N>(PhantomData<fn() -> N>);
impl_marker!([N], Succ<N>, Succ(PhantomData));
impl_value_fmt!([N], Succ<N>, "Nat");
lift_operators!([N,], Succ<N>);

impl<N: Nat> Nat for Succ<N> {}
impl<N: Nat> Constant for Succ<N> {
    type Type = usize;
    const VALUE: usize = N::VALUE + 1;
    const INSTANCE: &'static Self = &Succ(PhantomData);
}

impl<N: Nat> From<Succ<N>> for usize {
    fn from(_: Succ<N>) -> usize {
        N::VALUE + 1
    }
}


/*
 * Offset arithmetic. Subtraction below zero and the predecessor of zero
 * have no impl.
 */

pub trait Pred: Nat {
    type Output: Nat;
}
impl<N: Nat> Pred for Succ<N> {
    type Output = N;
}

pub trait NatAdd<R: Nat>: Nat {
    type Output: Nat;
}
impl<R: Nat> NatAdd<R> for Zero {
    type Output = R;
}
impl<N: NatAdd<R>, R: Nat> NatAdd<R> for Succ<N> {
    type Output = Succ<N::Output>;
}

pub trait NatSub<R: Nat>: Nat {
    type Output: Nat;
}
impl<N: Nat> NatSub<Zero> for N {
    type Output = N;
}
impl<N: NatSub<R>, R: Nat> NatSub<Succ<R>> for Succ<N> {
    type Output = N::Output;
}


/*
 * Anything usable as a list position: naturals as they are, `Index<I>`
 * for the first 96 positions, and `inc`, `dec`, `+` and `-` applied to
 * positions. The offset of a lifted position is computed on the naturals,
 * so it agrees with the lifted `VALUE`.
 */

#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a list position",
    note = "positions are `Index<0>` through `Index<95>`, type level naturals, \
            or `inc`, `dec`, `+` and `-` over positions without going below zero"
)]
pub trait Position: Constant<Type = usize> {
    type Offset: Nat;
}

impl Position for Zero {
    type Offset = Zero;
}
impl<N: Nat> Position for Succ<N> {
    type Offset = Succ<N>;
}

impl<P: Position> Position for Unary<op::Inc, P> {
    type Offset = Succ<P::Offset>;
}
impl<P: Position> Position for Unary<op::Dec, P>
    where P::Offset: Pred
{
    type Offset = <P::Offset as Pred>::Output;
}
impl<P: Position, Q: Position> Position for Binary<op::Add, P, Q>
    where P::Offset: NatAdd<Q::Offset>
{
    type Offset = <P::Offset as NatAdd<Q::Offset>>::Output;
}
impl<P: Position, Q: Position> Position for Binary<op::Sub, P, Q>
    where P::Offset: NatSub<Q::Offset>
{
    type Offset = <P::Offset as NatSub<Q::Offset>>::Output;
}

// Each run starts from the offset the previous one ended on, which keeps
// the normalisation of any one offset shallow.
macro_rules! index_positions {
    ($offset:ty; $n:literal $($rest:literal)*) => {
        impl Position for Index<$n> {
            type Offset = $offset;
        }
        index_positions!(Succ<$offset>; $($rest)*);
    };
    ($offset:ty;) => {};
}

index_positions!(Zero;
      0   1   2   3   4   5   6   7   8   9  10  11  12  13  14  15);
index_positions!(Succ<<Index<15> as Position>::Offset>;
     16  17  18  19  20  21  22  23  24  25  26  27  28  29  30  31);
index_positions!(Succ<<Index<31> as Position>::Offset>;
     32  33  34  35  36  37  38  39  40  41  42  43  44  45  46  47);
index_positions!(Succ<<Index<47> as Position>::Offset>;
     48  49  50  51  52  53  54  55  56  57  58  59  60  61  62  63);
index_positions!(Succ<<Index<63> as Position>::Offset>;
     64  65  66  67  68  69  70  71  72  73  74  75  76  77  78  79);
index_positions!(Succ<<Index<79> as Position>::Offset>;
     80  81  82  83  84  85  86  87  88  89  90  91  92  93  94  95);
