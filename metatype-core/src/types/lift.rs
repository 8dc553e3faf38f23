use std::marker::PhantomData;

use super::constant::*;
use super::macros::*;


/*
 * Operator lifting. An operator applied to constants produces a new
 * constant whose value is the native operator applied to the operands'
 * values. The native semantics live on the primitive itself, one impl per
 * (operator, primitive), so `Binary` and `Unary` stay generic.
 */

pub mod op {
    macro_rules! operators {
        ($($name:ident),*) => { $(
            #[derive(Clone, Copy, Debug, Default)]
            pub struct $name;
        )* };
    }

    operators!(
        Add, Sub, Mul, Div, Rem,
        Equal, NotEqual, Less, Greater, LessEqual, GreaterEqual,
        And, Or,
        BitAnd, BitOr, BitXor,
        Not, Neg, Inc, Dec
    );
}


#[diagnostic::on_unimplemented(
    message = "`{Self}` has no native operator `{Op}` for `{A}` and `{B}`",
    note = "both operands of a lifted operator must share the same primitive type"
)]
pub trait NativeBinary<Op, A, B> {
    type Output: Copy + 'static;
    const RESULT: Self::Output;
}

#[diagnostic::on_unimplemented(
    message = "`{Self}` has no native operator `{Op}` for `{A}`"
)]
pub trait NativeUnary<Op, A> {
    type Output: Copy + 'static;
    const RESULT: Self::Output;
}


pub struct Binary<Op, A, B>(PhantomData<fn() -> (Op, A, B)>);
impl_marker!([Op, A, B], Binary<Op, A, B>, Binary(PhantomData));
impl_value_fmt!([Op, A, B], Binary<Op, A, B>, "Binary");

impl<Op: 'static, A: Constant, B: Constant> Constant for Binary<Op, A, B>
    where A::Type: NativeBinary<Op, A, B>
{
    type Type = <A::Type as NativeBinary<Op, A, B>>::Output;
    const VALUE: Self::Type = <A::Type as NativeBinary<Op, A, B>>::RESULT;
    const INSTANCE: &'static Self = &Binary(PhantomData);
}


pub struct Unary<Op, A>(PhantomData<fn() -> (Op, A)>);
impl_marker!([Op, A], Unary<Op, A>, Unary(PhantomData));
impl_value_fmt!([Op, A], Unary<Op, A>, "Unary");

impl<Op: 'static, A: Constant> Constant for Unary<Op, A>
    where A::Type: NativeUnary<Op, A>
{
    type Type = <A::Type as NativeUnary<Op, A>>::Output;
    const VALUE: Self::Type = <A::Type as NativeUnary<Op, A>>::RESULT;
    const INSTANCE: &'static Self = &Unary(PhantomData);
}

macro_rules! native_binary {
    ($op:ident($sym:tt) -> $out:ty: $($t:ty),+) => { $(
        impl<A, B> NativeBinary<op::$op, A, B> for $t
            where A: Constant<Type = $t>, B: Constant<Type = $t>
        {
            type Output = $out;
            const RESULT: $out = A::VALUE $sym B::VALUE;
        }
    )+ };
}

macro_rules! native_ints {
    ($($op:ident($sym:tt) -> $out:ty),*) => { $(
        native_binary!($op($sym) -> $out:
            u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
    )* };
}

native_ints!(
    Add(+) -> Self,
    Sub(-) -> Self,
    Mul(*) -> Self,
    Div(/) -> Self,
    Rem(%) -> Self,
    BitAnd(&) -> Self,
    BitOr(|) -> Self,
    BitXor(^) -> Self,
    Equal(==) -> bool,
    NotEqual(!=) -> bool,
    Less(<) -> bool,
    Greater(>) -> bool,
    LessEqual(<=) -> bool,
    GreaterEqual(>=) -> bool
);

native_binary!(BitAnd(&) -> Self: bool);
native_binary!(BitOr(|) -> Self: bool);
native_binary!(BitXor(^) -> Self: bool);
native_binary!(And(&&) -> Self: bool);
native_binary!(Or(||) -> Self: bool);
native_binary!(Equal(==) -> bool: bool, char);
native_binary!(NotEqual(!=) -> bool: bool, char);
native_binary!(Less(<) -> bool: bool, char);
native_binary!(Greater(>) -> bool: bool, char);
native_binary!(LessEqual(<=) -> bool: bool, char);
native_binary!(GreaterEqual(>=) -> bool: bool, char);


macro_rules! native_unary {
    ($op:ident |$a:ident| $e:expr; $($t:ty),+) => { $(
        impl<A: Constant<Type = $t>> NativeUnary<op::$op, A> for $t {
            type Output = Self;
            const RESULT: Self = {
                let $a = A::VALUE;
                $e
            };
        }
    )+ };
}

native_unary!(Not |a| !a; u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool);
native_unary!(Neg |a| -a; i8, i16, i32, i64, i128, isize);
native_unary!(Inc |a| a + 1; u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
native_unary!(Dec |a| a - 1; u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);


macro_rules! lifted_into {
    ($($t:ty),*) => { $(
        impl<Op, A, B> From<Binary<Op, A, B>> for $t
            where Binary<Op, A, B>: Constant<Type = $t>
        {
            fn from(c: Binary<Op, A, B>) -> $t {
                c.get()
            }
        }
        impl<Op, A> From<Unary<Op, A>> for $t
            where Unary<Op, A>: Constant<Type = $t>
        {
            fn from(c: Unary<Op, A>) -> $t {
                c.get()
            }
        }
    )* };
}

lifted_into!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char);


/*
 * std::ops for any constant type. The Output bound is what rejects
 * operands with no native operator.
 */

macro_rules! lift_operators {
    ([$($g:tt)*], $type:ty) => {
        $crate::types::lift::lift_operators!(@unsigned [$($g)*], $type);
        $crate::types::lift::lift_operators!(@unary [$($g)*], $type, Neg, neg);
    };
    // Without `Neg`, for non generic unsigned types where its bound could
    // never hold.
    (@unsigned [$($g:tt)*], $type:ty) => {
        $crate::types::lift::lift_operators!(@binary [$($g)*], $type, Add, add);
        $crate::types::lift::lift_operators!(@binary [$($g)*], $type, Sub, sub);
        $crate::types::lift::lift_operators!(@binary [$($g)*], $type, Mul, mul);
        $crate::types::lift::lift_operators!(@binary [$($g)*], $type, Div, div);
        $crate::types::lift::lift_operators!(@binary [$($g)*], $type, Rem, rem);
        $crate::types::lift::lift_operators!(@binary [$($g)*], $type, BitAnd, bitand);
        $crate::types::lift::lift_operators!(@binary [$($g)*], $type, BitOr, bitor);
        $crate::types::lift::lift_operators!(@binary [$($g)*], $type, BitXor, bitxor);
        $crate::types::lift::lift_operators!(@unary [$($g)*], $type, Not, not);
    };
    (@binary [$($g:tt)*], $type:ty, $tr:ident, $f:ident) => {
        impl<$($g)* Rhs: $crate::Constant> std::ops::$tr<Rhs> for $type
            where $crate::Binary<$crate::op::$tr, Self, Rhs>: $crate::Constant
        {
            type Output = $crate::Binary<$crate::op::$tr, Self, Rhs>;
            fn $f(self, _: Rhs) -> Self::Output {
                Default::default()
            }
        }
    };
    (@unary [$($g:tt)*], $type:ty, $tr:ident, $f:ident) => {
        impl<$($g)*> std::ops::$tr for $type
            where $crate::Unary<$crate::op::$tr, Self>: $crate::Constant
        {
            type Output = $crate::Unary<$crate::op::$tr, Self>;
            fn $f(self) -> Self::Output {
                Default::default()
            }
        }
    };
}
pub(crate) use lift_operators;

lift_operators!([Op, A, B,], Binary<Op, A, B>);
lift_operators!([Op, A,], Unary<Op, A>);


/*
 * Operators Rust won't let us overload with a non bool result
 */

impl<A: Constant> ConstOps for A {}
pub trait ConstOps: Constant {
    fn equal<B: Constant>(self, _: B) -> Binary<op::Equal, Self, B>
        where Binary<op::Equal, Self, B>: Constant
    {
        Default::default()
    }
    fn not_equal<B: Constant>(self, _: B) -> Binary<op::NotEqual, Self, B>
        where Binary<op::NotEqual, Self, B>: Constant
    {
        Default::default()
    }
    fn less<B: Constant>(self, _: B) -> Binary<op::Less, Self, B>
        where Binary<op::Less, Self, B>: Constant
    {
        Default::default()
    }
    fn greater<B: Constant>(self, _: B) -> Binary<op::Greater, Self, B>
        where Binary<op::Greater, Self, B>: Constant
    {
        Default::default()
    }
    fn less_equal<B: Constant>(self, _: B) -> Binary<op::LessEqual, Self, B>
        where Binary<op::LessEqual, Self, B>: Constant
    {
        Default::default()
    }
    fn greater_equal<B: Constant>(self, _: B) -> Binary<op::GreaterEqual, Self, B>
        where Binary<op::GreaterEqual, Self, B>: Constant
    {
        Default::default()
    }
    fn and<B: Constant>(self, _: B) -> Binary<op::And, Self, B>
        where Binary<op::And, Self, B>: Constant
    {
        Default::default()
    }
    fn or<B: Constant>(self, _: B) -> Binary<op::Or, Self, B>
        where Binary<op::Or, Self, B>: Constant
    {
        Default::default()
    }
    fn inc(self) -> Unary<op::Inc, Self>
        where Unary<op::Inc, Self>: Constant
    {
        Default::default()
    }
    fn dec(self) -> Unary<op::Dec, Self>
        where Unary<op::Dec, Self>: Constant
    {
        Default::default()
    }
}
