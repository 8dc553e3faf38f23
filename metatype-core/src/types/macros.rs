
/*
 * Every constant and tag is a zero sized marker. The derives would bound
 * the phantom parameters, so the marker traits are written out here.
 */

macro_rules! impl_marker {
    ([$($impl_generics:tt)*], $type:ty, $ctor:expr) => {
        impl<$($impl_generics)*> Clone for $type {
            fn clone(&self) -> Self {
                *self
            }
        }
        impl<$($impl_generics)*> Copy for $type {}
        impl<$($impl_generics)*> Default for $type {
            fn default() -> Self {
                $ctor
            }
        }
    };
}
pub(crate) use impl_marker;


macro_rules! impl_value_fmt {
    ([$($impl_generics:tt)*], $type:ty, $name:expr) => {
        impl<$($impl_generics)*> std::fmt::Debug for $type
            where Self: $crate::Constant, <Self as $crate::Constant>::Type: std::fmt::Debug
        {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}<{:?}>", $name, <Self as $crate::Constant>::VALUE)
            }
        }
        impl<$($impl_generics)*> std::fmt::Display for $type
            where Self: $crate::Constant, <Self as $crate::Constant>::Type: std::fmt::Display
        {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", <Self as $crate::Constant>::VALUE)
            }
        }
    };
}
pub(crate) use impl_value_fmt;
