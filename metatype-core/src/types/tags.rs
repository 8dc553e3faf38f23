use std::marker::PhantomData;


/// A type carried as a value. Holds nothing; two tags are the same value
/// exactly when they tag the same type.
pub struct Type<T: ?Sized>(PhantomData<fn() -> *const T>);

impl<T: ?Sized> Type<T> {
    pub const fn new() -> Self {
        Type(PhantomData)
    }
}

impl<T: ?Sized + 'static> Type<T> {
    pub const INSTANCE: &'static Self = &Type(PhantomData);
}

impl<T: ?Sized> Clone for Type<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T: ?Sized> Copy for Type<T> {}
impl<T: ?Sized> Default for Type<T> {
    fn default() -> Self {
        Type::new()
    }
}

impl<T: ?Sized> PartialEq for Type<T> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}
impl<T: ?Sized> Eq for Type<T> {}

impl<T: ?Sized> std::hash::Hash for Type<T> {
    fn hash<H: std::hash::Hasher>(&self, _: &mut H) {}
}

impl<T: ?Sized> std::fmt::Debug for Type<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Type<{}>", std::any::type_name::<T>())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use static_assertions::assert_impl_all;

    assert_impl_all!(Type<str>: Copy, Send, Sync, Default);
    assert_impl_all!(Type<std::cell::Cell<u8>>: Send, Sync);

    #[test]
    fn test_tag() {
        assert_eq!(Type::<u8>::new(), Type::<u8>::default());
        assert_eq!(std::mem::size_of::<Type<[u64]>>(), 0);
        assert_eq!(format!("{:?}", Type::<u16>::new()), "Type<u16>");
    }

    #[test]
    fn test_instance() {
        let tag: &'static Type<dyn std::fmt::Debug> = Type::INSTANCE;
        assert_eq!(*tag, Type::new());
    }
}
