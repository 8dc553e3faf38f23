use std::marker::PhantomData;

use metatype_core::{False, True};


/*
 * Structural equality of any two values by their types. The exact match
 * is implemented on `Probe<A, A>` and the mismatch on `&Probe<A, B>`;
 * calling through one reference, method resolution reaches the exact match
 * first and only falls back to the mismatch when `A` and `B` differ.
 *
 * The types are compared where `same!` expands. Inside generic code whose
 * parameters are still open the exact match cannot be proven, and the
 * result is `False`.
 */

#[doc(hidden)]
pub struct Probe<A: ?Sized, B: ?Sized>(PhantomData<fn() -> (*const A, *const B)>);

impl<A: ?Sized, B: ?Sized> Probe<A, B> {
    pub fn of(_: &A, _: &B) -> Self {
        Probe(PhantomData)
    }
}

#[doc(hidden)]
pub trait ExactMatch {
    fn resolve(&self) -> True {
        True::default()
    }
}
impl<A: ?Sized> ExactMatch for Probe<A, A> {}

#[doc(hidden)]
pub trait Mismatch {
    fn resolve(&self) -> False {
        False::default()
    }
}
impl<A: ?Sized, B: ?Sized> Mismatch for &Probe<A, B> {}


/// `True` when both operands have the same type, `False` otherwise. Works
/// for any two values, typically tags and type lists.
#[macro_export]
macro_rules! same {
    ($a:expr, $b:expr $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::same::{ExactMatch as _, Mismatch as _};
        (&$crate::same::Probe::of(&$a, &$b)).resolve()
    }};
}


#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tags() {
        let t: True = same!(Type::<u8>::new(), Type::<u8>::new());
        assert!(t.get());
        let f: False = same!(Type::<u8>::new(), Type::<u16>::new());
        assert!(!f.get());
        assert!(!same!(Type::<str>::new(), Type::<String>::new()).get());
        assert!(!same!(Type::<std::rc::Rc<u8>>::new(), Type::<dyn std::any::Any>::new()).get());
    }

    #[test]
    fn test_lists() {
        let l = types![u8, u16, u32];
        assert!(same!(l, l).get());
        assert!(same!(l, types![u8, u16, u32]).get());
        assert!(same!(l, types![u8] + types![u16, u32]).get());
        assert!(!same!(l, types![u8, u16]).get());
        assert!(!same!(l, types![u8, u16, u64]).get());
        assert!(!same!(types![u8, u16], types![u16, u8]).get());
        assert!(same!(types![], types![]).get());
    }

    #[test]
    fn test_symmetric() {
        let l = types![u8, char];
        let m = types![char];
        assert_eq!(same!(l, m).get(), same!(m, l).get());
        assert_eq!(same!(l, l).get(), same!(l, l).get());
    }

    #[test]
    fn test_mixed() {
        assert!(!same!(types![u8], Type::<u8>::new()).get());
        assert!(!same!(int::<1>(), index::<1>()).get());
        assert!(same!(int::<1>(), I32::<1>).get());
    }

    #[test]
    fn test_at_against_tag() {
        let l = types![u8, String];
        assert!(same!(l.at(index::<1>()), Type::<String>::new()).get());
        assert!(!same!(l.at(index::<0>()), Type::<String>::new()).get());
    }
}
