
pub use metatype_core::*;

pub use crate::{Types, Values, types, values, Indices, indices, Ints, ints, same};
