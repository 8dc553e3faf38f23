
pub(crate) mod macros;
pub mod constant;
pub mod lift;
pub mod nat;
pub mod tags;
pub mod tlist;
pub mod compare;
