
/*
 * Type and value forms of the list constructors. The capitalised macro
 * names the type, the lowercase one builds the (zero sized) value.
 */

#[macro_export]
macro_rules! Types {
    ($($t:ty),* $(,)?) => {
        $crate::Types<$crate::tlist!($($t),*)>
    };
}

#[macro_export]
macro_rules! types {
    ($($t:ty),* $(,)?) => {
        <$crate::Types!($($t),*)>::new()
    };
}


#[macro_export]
macro_rules! Values {
    ($t:ident; $($v:expr),* $(,)?) => {
        $crate::Values<$t, $crate::tlist!($($crate::Value!($t, $v)),*)>
    };
}

#[macro_export]
macro_rules! values {
    ($t:ident; $($v:expr),* $(,)?) => {
        <$crate::Values!($t; $($v),*)>::new()
    };
}


#[macro_export]
macro_rules! Indices {
    ($($v:expr),* $(,)?) => {
        $crate::Values!(usize; $($v),*)
    };
}

#[macro_export]
macro_rules! indices {
    ($($v:expr),* $(,)?) => {
        <$crate::Indices!($($v),*)>::new()
    };
}

#[macro_export]
macro_rules! Ints {
    ($($v:expr),* $(,)?) => {
        $crate::Values!(i32; $($v),*)
    };
}

#[macro_export]
macro_rules! ints {
    ($($v:expr),* $(,)?) => {
        <$crate::Ints!($($v),*)>::new()
    };
}
