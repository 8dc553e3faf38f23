use paste::paste;

use super::lift::lift_operators;
use super::macros::*;


/*
 * A compile time constant: a zero sized marker whose value lives in the
 * type. Leaves carry the value as a const parameter, lifted operators
 * compute theirs from their operands.
 */

pub trait Constant: Copy + Default + 'static {
    type Type: Copy + 'static;
    const VALUE: Self::Type;
    const INSTANCE: &'static Self;

    /// The call form, `c.get() == C::VALUE`.
    fn get(self) -> Self::Type {
        Self::VALUE
    }
}


macro_rules! leaf_constants {
    ($($t:ident),*) => {
        paste! { $(
            #[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct [<$t:camel>]<const V: $t>;

            impl<const V: $t> Constant for [<$t:camel>]<V> {
                type Type = $t;
                const VALUE: $t = V;
                const INSTANCE: &'static Self = &Self;
            }

            impl<const V: $t> From<[<$t:camel>]<V>> for $t {
                fn from(_: [<$t:camel>]<V>) -> $t {
                    V
                }
            }

            impl_value_fmt!([const V: $t], [<$t:camel>]<V>, stringify!([<$t:camel>]));
            lift_operators!([const V: $t,], [<$t:camel>]<V>);
        )* }
    };
}

leaf_constants!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char);


/// A list position. `Index<0>` through `Index<95>` can address a list;
/// past that, positions are written as naturals and the using crate raises
/// `#![recursion_limit]` to match the list length.
pub type Index<const I: usize> = Usize<I>;
pub type Int<const I: i32> = I32<I>;
pub type True = Bool<true>;
pub type False = Bool<false>;

pub const fn index<const I: usize>() -> Index<I> {
    Usize
}

pub const fn int<const I: i32>() -> Int<I> {
    I32
}


/// Names the leaf constant for a primitive and a value, `Value![i32, 3]` is
/// `I32<3>`.
#[macro_export]
macro_rules! Value {
    ($t:ident, $v:expr) => {
        $crate::paste::paste! { $crate::[<$t:camel>]<{ $v }> }
    };
}

#[macro_export]
macro_rules! value {
    ($t:ident, $v:expr) => {
        <$crate::Value!($t, $v) as ::std::default::Default>::default()
    };
}
