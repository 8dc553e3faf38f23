//! Compile time lists of types and of constants.
//!
//! Every operation is resolved while compiling: sizes, positions, search
//! results and operator results are types, and converting one to a runtime
//! value only reads an associated constant.
//!
//! ```
//! use metatype::prelude::*;
//!
//! let l = types![u8, String, bool];
//! assert_eq!(l.size().get(), 3);
//! assert_eq!(l.at(index::<0>()), Type::<u8>::new());
//! assert_eq!(l.find(Type::<u8>::new()).get(), 0);
//!
//! let lm = types![u8, u16] + types![char];
//! assert!(same!(lm.at(index::<2>()), Type::<char>::new()).get());
//! assert_eq!(l.at(l.size().dec()), Type::<bool>::new());
//! assert_eq!(l.at(index::<0>().inc()), Type::<String>::new());
//!
//! let v = ints![1, 2, 3] + ints![4, 5];
//! assert_eq!(v.at(index::<1>()).get(), 2);
//! assert!(v.equal(ints![1, 2, 3, 4, 5]).get());
//!
//! let seven = I32::<3> + I32::<4>;
//! assert_eq!(i32::from(seven), 7);
//! ```
//!
//! Contract violations do not compile. A position past the end:
//!
//! ```compile_fail
//! use metatype::prelude::*;
//! let _ = types![u8, u16, u32].at(index::<5>());
//! ```
//!
//! A search for a type that is not in the list:
//!
//! ```compile_fail
//! use metatype::prelude::*;
//! let _ = types![u8, u16].find(Type::<char>::new());
//! ```
//!
//! A position that arithmetic takes below zero:
//!
//! ```compile_fail
//! use metatype::prelude::*;
//! let _ = types![u8, u16].at(index::<0>().dec());
//! ```
//!
//! A value a value list does not hold:
//!
//! ```compile_fail
//! use metatype::prelude::*;
//! let _ = ints![1, 2].find(I32::<3>);
//! ```
//!
//! Value lists of different types:
//!
//! ```compile_fail
//! use metatype::prelude::*;
//! let _ = values![i32; 1, 2] + values![u8; 3];
//! ```
//!
//! Operands with no common native operator:
//!
//! ```compile_fail
//! use metatype::prelude::*;
//! let _ = I32::<1> + U8::<1>;
//! ```
//!
//! ```compile_fail
//! use metatype::prelude::*;
//! let _ = Char::<'a'> + Char::<'b'>;
//! ```
//!
//! Value level faults fail constant evaluation, as the native operator
//! would in a constant:
//!
//! ```compile_fail
//! use metatype::prelude::*;
//! const OVERFLOW: i32 = <Binary<op::Add, I32<{ i32::MAX }>, I32<1>> as Constant>::VALUE;
//! ```
//!
//! ```compile_fail
//! use metatype::prelude::*;
//! const BY_ZERO: u8 = <Binary<op::Div, U8<1>, U8<0>> as Constant>::VALUE;
//! ```

pub mod prelude;
mod macros;
mod list;
mod values;
#[doc(hidden)]
pub mod same;

pub use crate::list::Types;
pub use crate::values::Values;
pub use metatype_core::*;

