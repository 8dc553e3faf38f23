use std::marker::PhantomData;
use std::ops;

use metatype_core::{At, Concat, ElementAt, Find, Nat, Position, TList, Type};


/*
 * Types is the value level handle on a cons list of types. Every method is
 * resolved by the trait solver; the handle itself is zero sized.
 */

pub struct Types<L: TList>(PhantomData<fn() -> L>);

impl<L: TList> Types<L> {
    pub const fn new() -> Self {
        Types(PhantomData)
    }

    pub fn size(self) -> L::Len {
        Default::default()
    }

    pub fn at<P: Position>(self, _: P) -> Type<ElementAt<L, P>>
        where L: At<P::Offset>
    {
        Type::new()
    }

    /// Position of `U`. Rejected at compile time when `U` is absent, and
    /// when it occurs more than once.
    pub fn find<U, N: Nat>(self, _: Type<U>) -> N
        where L: Find<U, N>
    {
        N::default()
    }
}

impl<L: Concat<R>, R: TList> ops::Add<Types<R>> for Types<L> {
    type Output = Types<L::Output>;
    fn add(self, _: Types<R>) -> Self::Output {
        Types::new()
    }
}

impl<L, P> ops::Index<P> for Types<L>
    where L: TList + At<P::Offset>, P: Position, ElementAt<L, P>: 'static
{
    type Output = Type<ElementAt<L, P>>;
    fn index(&self, _: P) -> &Self::Output {
        Type::<ElementAt<L, P>>::INSTANCE
    }
}


impl<L: TList> Clone for Types<L> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<L: TList> Copy for Types<L> {}
impl<L: TList> Default for Types<L> {
    fn default() -> Self {
        Types::new()
    }
}
impl<L: TList> PartialEq for Types<L> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}
impl<L: TList> Eq for Types<L> {}
impl<L: TList> std::fmt::Debug for Types<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Types<{}>", std::any::type_name::<L>())
    }
}
