//! Standard trait implementations for [`GrowVec`].
//!
//! A `GrowVec<T>` dereferences to `[T]`, so every slice method (sorting, searching,
//! `iter`, `windows`, ...) is available on it directly. Comparisons are elementwise
//! and lexicographic, and work against slices, arrays and `Vec`s of any element type
//! the elements compare with.
//!
//! ```
//! use growvec::{growvec, GrowVec};
//!
//! let mut v = growvec![3, 1, 2];
//! v.sort();
//! assert_eq!(v, [1, 2, 3]);
//! assert!(v.contains(&2));
//! assert!(growvec![1, 2] < growvec![1, 3]);
//! assert!(growvec![1, 2] < growvec![1, 2, 0]);
//!
//! let from_vec: GrowVec<&str> = vec!["a", "b"].into();
//! assert_eq!(from_vec, vec!["a", "b"]);
//! ```

use crate::cursor::{Cursor, ReverseCursor};
use crate::init::{CloneFrom, FromIterPrefix, MoveFrom};
use crate::vec::GrowVec;

use alloc::vec::Vec;
use core::borrow::{Borrow, BorrowMut};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Deref, DerefMut, Index, IndexMut};

impl<T> Default for GrowVec<T> {
    #[inline]
    fn default() -> Self {
        GrowVec::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_slice(), f)
    }
}

/// Clones use the pre-sized capacity policy: `clone()` of a 3-element container has
/// room for 6, whatever the source's capacity.
///
/// ```
/// use growvec::GrowVec;
/// let mut big: GrowVec<i32> = GrowVec::with_capacity(100);
/// big.extend([1, 2, 3]);
/// let copy = big.clone();
/// assert_eq!(copy, big);
/// assert_eq!(copy.capacity(), 6);
/// ```
impl<T: Clone> Clone for GrowVec<T> {
    fn clone(&self) -> Self {
        GrowVec::from_slice(self.as_slice())
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign_slice(source.as_slice())
    }
}

impl<T> Deref for GrowVec<T> {
    type Target = [T];
    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for GrowVec<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for GrowVec<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for GrowVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for GrowVec<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for GrowVec<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

/// Unchecked-style indexing. Panics if `index >= len()`; use
/// [`at`][GrowVec::at] for a fallible lookup.
impl<T> Index<usize> for GrowVec<T> {
    type Output = T;
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for GrowVec<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

/// Reads the element a cursor refers to. Panics if the cursor is at or past the end,
/// and in debug builds if it is stale.
impl<T> Index<Cursor> for GrowVec<T> {
    type Output = T;
    #[inline]
    fn index(&self, cursor: Cursor) -> &T {
        let index = self.check(cursor);
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<Cursor> for GrowVec<T> {
    #[inline]
    fn index_mut(&mut self, cursor: Cursor) -> &mut T {
        let index = self.check(cursor);
        &mut self.as_mut_slice()[index]
    }
}

impl<T> Index<ReverseCursor> for GrowVec<T> {
    type Output = T;
    #[inline]
    fn index(&self, cursor: ReverseCursor) -> &T {
        let index = self.check_reverse(cursor);
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<ReverseCursor> for GrowVec<T> {
    #[inline]
    fn index_mut(&mut self, cursor: ReverseCursor) -> &mut T {
        let index = self.check_reverse(cursor);
        &mut self.as_mut_slice()[index]
    }
}

impl<T, U> PartialEq<GrowVec<U>> for GrowVec<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &GrowVec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U> PartialEq<[U]> for GrowVec<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<'a, T, U> PartialEq<&'a [U]> for GrowVec<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &&'a [U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for GrowVec<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<'a, T, U, const N: usize> PartialEq<&'a [U; N]> for GrowVec<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &&'a [U; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<T, U> PartialEq<Vec<U>> for GrowVec<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowVec<T> {}

impl<T: PartialOrd> PartialOrd for GrowVec<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        PartialOrd::partial_cmp(self.as_slice(), other.as_slice())
    }
}

impl<T: Ord> Ord for GrowVec<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        Ord::cmp(self.as_slice(), other.as_slice())
    }
}

impl<T: Hash> Hash for GrowVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(self.as_slice(), state)
    }
}

impl<T, const N: usize> From<[T; N]> for GrowVec<T> {
    fn from(items: [T; N]) -> Self {
        GrowVec::from_init(N, MoveFrom(items))
    }
}

impl<T: Clone> From<&[T]> for GrowVec<T> {
    fn from(items: &[T]) -> Self {
        GrowVec::from_init(items.len(), CloneFrom(items))
    }
}

impl<T> From<Vec<T>> for GrowVec<T> {
    fn from(items: Vec<T>) -> Self {
        let len = items.len();
        GrowVec::from_init(len, FromIterPrefix(items.into_iter()))
    }
}

impl<T> From<GrowVec<T>> for Vec<T> {
    fn from(items: GrowVec<T>) -> Self {
        let mut out = Vec::with_capacity(items.len());
        out.extend(items);
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::growvec;
    use alloc::format;
    use alloc::string::{String, ToString};
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<H: Hash + ?Sized>(value: &H) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn comparisons_are_lexicographic() {
        let a = growvec![1, 2, 3];
        let b = growvec![1, 2, 4];
        assert!(a < b);
        assert!(growvec![1, 2] < a);
        assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
        assert!(GrowVec::<i32>::new() < a);
        assert_ne!(a, b);
    }

    #[test]
    fn equality_across_sequence_types() {
        let v = growvec!["a".to_string(), "b".to_string()];
        assert_eq!(v, ["a", "b"]);
        assert_eq!(v, &["a", "b"]);
        assert_eq!(v, &["a", "b"][..]);
        assert_eq!(v, alloc::vec!["a", "b"]);
        assert_eq!(v, growvec!["a", "b"]);
    }

    #[test]
    fn hash_matches_slice() {
        let v = growvec![5u8, 6, 7];
        assert_eq!(hash_of(&v), hash_of(&[5u8, 6, 7][..]));
    }

    #[test]
    fn debug_prints_like_a_slice() {
        let v = growvec![1, 2];
        assert_eq!(format!("{:?}", v), "[1, 2]");
    }

    #[test]
    fn clone_from_reuses_target() {
        let source = growvec![String::from("x"), String::from("y")];
        let mut target: GrowVec<String> = GrowVec::with_capacity(32);
        target.push_back(String::from("old"));
        target.clone_from(&source);
        assert_eq!(target, source);
        assert_eq!(target.capacity(), 32);
    }

    #[test]
    fn cursor_indexing() {
        let mut v = growvec![10, 20, 30];
        let c = v.begin() + 1;
        v[c] += 5;
        assert_eq!(v[c], 25);
        let r = v.rbegin();
        v[r] = 0;
        assert_eq!(v, [10, 25, 0]);
        assert_eq!(v[v.rend() - 1], 10);
    }

    #[test]
    #[should_panic]
    fn rend_cannot_be_read() {
        let v = growvec![1];
        let _ = v[v.rend()];
    }

    #[test]
    #[should_panic]
    fn end_cannot_be_read() {
        let v = growvec![1];
        let _ = v[v.end()];
    }

    #[test]
    fn vec_conversions() {
        let v: GrowVec<i32> = alloc::vec![1, 2, 3].into();
        assert_eq!(v.capacity(), 6);
        let back: Vec<i32> = v.into();
        assert_eq!(back, [1, 2, 3]);
        let from_slice = GrowVec::from(&back[1..]);
        assert_eq!(from_slice, [2, 3]);
    }
}
