pub mod types;

pub use types::constant::*;
pub use types::lift::{op, Binary, Unary, ConstOps, NativeBinary, NativeUnary};
pub use types::nat::{Nat, NatAdd, NatSub, Position, Pred, Zero, Succ};
pub use types::tags::Type;
pub use types::tlist::*;
pub use types::compare::{FindValue, ListEqual, ValuePosition, ValuesEq};

#[doc(hidden)]
pub use paste;
