use std::marker::PhantomData;
use std::ops;

use metatype_core::{At, Concat, Constant, ElementAt, FindValue, Homogeneous, ListEqual, Position, TList, ValuePosition};

use crate::list::Types;


/*
 * Values is a list of constants sharing the primitive `T`. Underneath it is
 * the same cons list a Types holds, so positional access and search are the
 * type list machinery applied to the constants' types.
 */

pub struct Values<T, L: TList>(PhantomData<fn() -> (T, L)>);

impl<T, L: Homogeneous<T>> Values<T, L> {
    pub const fn new() -> Self {
        Values(PhantomData)
    }

    pub fn size(self) -> L::Len {
        Default::default()
    }

    pub fn at<P: Position>(self, _: P) -> ElementAt<L, P>
        where L: At<P::Offset>, ElementAt<L, P>: Constant
    {
        Default::default()
    }

    /// Position of the first element whose value equals `C`. A value the
    /// list does not hold fails to compile.
    pub fn find<C: Constant<Type = T>>(self, _: C) -> ValuePosition<L, C>
        where L: FindValue<C> + 'static
    {
        let _ = <ValuePosition<L, C> as Constant>::VALUE;
        ValuePosition::default()
    }

    pub fn equal<R: Homogeneous<T>>(self, _: Values<T, R>) -> ListEqual<L, R>
        where ListEqual<L, R>: Constant
    {
        Default::default()
    }

    /// The list of the constants' types.
    pub fn types(self) -> Types<L> {
        Types::new()
    }
}

impl<T, L, R> ops::Add<Values<T, R>> for Values<T, L>
    where L: Homogeneous<T> + Concat<R>, R: Homogeneous<T>
{
    type Output = Values<T, L::Output>;
    fn add(self, _: Values<T, R>) -> Self::Output {
        Values(PhantomData)
    }
}

impl<T, L, P> ops::Index<P> for Values<T, L>
    where L: Homogeneous<T> + At<P::Offset>, P: Position, ElementAt<L, P>: Constant
{
    type Output = ElementAt<L, P>;
    fn index(&self, _: P) -> &Self::Output {
        <ElementAt<L, P> as Constant>::INSTANCE
    }
}


impl<T, L: TList> Clone for Values<T, L> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T, L: TList> Copy for Values<T, L> {}
impl<T, L: TList> Default for Values<T, L> {
    fn default() -> Self {
        Values(PhantomData)
    }
}
impl<T, L: TList> PartialEq for Values<T, L> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}
impl<T, L: TList> Eq for Values<T, L> {}
impl<T, L: TList> std::fmt::Debug for Values<T, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Values<{}; {}>", std::any::type_name::<T>(), L::LEN)
    }
}
