//! Single module with almost all `growvec` exports
//!
//! # Examples
//!
//! Import all into current scope:
//!
//! ```
//! use growvec::prelude::*;
//! let v: GrowVec<u8> = GrowVec::from_init(2, FillWithDefault);
//! assert_eq!(v, growvec![0, 0]);
//! ```

pub use crate::cursor::{Cursor, ReverseCursor};
pub use crate::error::Error;
pub use crate::growvec;
pub use crate::init::{
    CloneFrom, CloneOf, CopyFrom, DefaultValue, FillSequentially, FillWith, FillWithDefault,
    FromIterPrefix, Initializer, MoveFrom, RangeInitializer, Value, With,
};
pub use crate::iter::IntoIter;
pub use crate::vec::GrowVec;
