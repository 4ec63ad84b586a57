#![doc = crate::doc_macro::svgbob_doc!(
//! # `growvec`
//! A growable contiguous sequence with random-access cursors.
//!
//! 1. [Summary](#summary)
//! 1. [Examples](#examples)
//! 1. [Growth policy](#growth-policy)
//! 1. [Cursors and invalidation](#cursors-and-invalidation)
//! 1. [Feature flags](#feature-flags)
//!
//! # Summary
//!
//! [`GrowVec<T>`] stores its elements in one heap buffer. The first `len` slots hold live
//! elements and the rest are uninitialized spare capacity:
//!
//! ```svgbob
//!  0     1     2     3     4     5
//! +-----+-----+-----+-----+-----+-----+
//! | 10  | 20  | 30  |  ?  |  ?  |  ?  |
//! +-----+-----+-----+-----+-----+-----+
//!  ^                 ^                 ^
//!  |                 |                 |
//! "begin()"         "end()"           "capacity()"
//! ```
//!
//! Appending, inserting and erasing construct and destroy elements exactly once, move
//! the tail with a single `memmove`, and reallocate geometrically when the buffer is full.
//! Positions are expressed as [`Cursor`]s, which support the full set of random-access
//! arithmetic, and as [`ReverseCursor`]s for walking from the back.
//!
//! # Examples
//!
//! ```
//! use growvec::{growvec, GrowVec};
//!
//! let mut v: GrowVec<i32> = GrowVec::new();
//! for i in 0..20 {
//!     v.push_back(i);
//! }
//! assert_eq!(v.len(), 20);
//! assert_eq!(v.capacity(), 32);
//!
//! // Insert before the third element, then erase a range.
//! let at = v.insert(v.begin() + 2, 100);
//! assert_eq!(v[at], 100);
//! let next = v.erase_range(v.begin(), v.begin() + 2);
//! assert_eq!(v[next], 100);
//!
//! // Slices, iterators and comparisons come for free.
//! v.truncate(3);
//! assert_eq!(v, [100, 2, 3]);
//! assert_eq!(v.iter().sum::<i32>(), 105);
//! assert_eq!(v, growvec![100, 2, 3]);
//! ```
//!
//! # Growth policy
//!
//! * [`GrowVec::new`] does not allocate.
//! * Pre-sized constructors ([`from_elem`][GrowVec::from_elem],
//!   [`from_slice`][GrowVec::from_slice], the [`growvec!`] macro, `clone`, ...) allocate
//!   `GROWTH_FACTOR * max(MIN_CAPACITY, n)` slots for `n` elements.
//! * When an append or insert does not fit, the buffer grows to
//!   `max(GROWTH_FACTOR * max(MIN_CAPACITY, capacity), required)` slots.
//! * [`reserve`][GrowVec::reserve] grows to exactly the requested capacity.
//! * [`shrink_to_fit`][GrowVec::shrink_to_fit] keeps `GROWTH_FACTOR * len` slots and never grows.
//! * [`clear`][GrowVec::clear] frees the buffer.
//!
//! # Cursors and invalidation
//!
//! Every operation that changes the length or the storage of a container invalidates
//! all of its cursors. Debug builds detect use of an invalidated cursor and panic; see
//! [`cursor`] for details. Borrowing iterators (`v.iter()`, `&v`) are ordinary slice
//! iterators, so the borrow checker rules out mutation while they are alive.
//!
//! # Feature flags
//!
//! * `doc`. Renders the diagrams in this documentation as SVG. Adds a dependency on
//!   `svgbobdoc`.
//!
)]
#![no_std]
extern crate alloc;

#[cfg(doc)]
extern crate std;

pub mod cursor;
pub mod error;
pub mod init;
pub mod iter;
pub mod prelude;
pub mod traits;
pub mod vec;

mod doc_macro;
mod raw;

pub use cursor::{Cursor, ReverseCursor};
pub use error::{Error, Result};
pub use vec::GrowVec;

/// Factor by which capacity grows when an append or insert does not fit.
pub const GROWTH_FACTOR: usize = 2;

/// Smallest capacity the growth policy multiplies from.
pub const MIN_CAPACITY: usize = 2;

/// Creates a [`GrowVec`] containing the arguments.
///
/// Like `vec!`, there are three forms:
///
/// ```
/// use growvec::{growvec, GrowVec};
///
/// let empty: GrowVec<u8> = growvec![];
/// assert!(empty.is_empty());
///
/// let listed = growvec![1, 2, 3];
/// assert_eq!(listed, [1, 2, 3]);
/// assert_eq!(listed.capacity(), 6);
///
/// let repeated = growvec!["x"; 4];
/// assert_eq!(repeated, ["x"; 4]);
/// ```
#[macro_export]
macro_rules! growvec {
    () => (
        $crate::GrowVec::new()
    );
    ($elem:expr; $n:expr) => (
        $crate::GrowVec::from_elem($n, $elem)
    );
    ($($x:expr),+ $(,)?) => (
        $crate::GrowVec::from([$($x),+])
    );
}
