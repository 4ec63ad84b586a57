//! Iteration over [`GrowVec`].
//!
//! Borrowing iteration goes through the slice iterators (`v.iter()`, `&v`, `&mut v`).
//! [`IntoIter`] consumes the container and hands out its elements by value.
//!
//! Mutating a container while a borrowing iterator is alive is rejected at compile
//! time:
//!
//! ```compile_fail
//! use growvec::growvec;
//! let mut v = growvec![1, 2, 3];
//! for x in &v {
//!     v.push_back(*x);
//! }
//! ```

use crate::raw::RawBuf;
use crate::vec::GrowVec;

use core::fmt;
use core::iter::FusedIterator;
use core::ptr;
use core::slice;

/// A by-value iterator over the elements of a [`GrowVec`].
///
/// Elements not yielded are dropped together with the iterator.
///
/// ```
/// use growvec::growvec;
/// let v = growvec![String::from("a"), String::from("b"), String::from("c")];
/// let mut it = v.into_iter();
/// assert_eq!(it.next().as_deref(), Some("a"));
/// assert_eq!(it.next_back().as_deref(), Some("c"));
/// assert_eq!(it.as_slice(), ["b"]);
/// ```
pub struct IntoIter<T> {
    buf: RawBuf<T>,
    // Slots [start, end) are still live.
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // Safety: [start, end) are live and within capacity.
        unsafe { slice::from_raw_parts(self.buf.ptr().add(self.start), self.end - self.start) }
    }

    /// The elements not yet yielded, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // Safety: as for `as_slice`.
        unsafe {
            slice::from_raw_parts_mut(self.buf.ptr().add(self.start), self.end - self.start)
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        let index = self.start;
        self.start += 1;
        // Safety: the slot was live and is now outside [start, end).
        Some(unsafe { ptr::read(self.buf.slot(index)) })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // Safety: the slot was live and is now outside [start, end).
        Some(unsafe { ptr::read(self.buf.slot(self.end)) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Safety: exactly the unyielded slots are still live.
        unsafe { self.buf.drop_range(self.start, self.end - self.start) }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> IntoIterator for GrowVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let (buf, len) = self.into_raw_parts();
        IntoIter {
            buf,
            start: 0,
            end: len,
        }
    }
}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowVec<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> slice::IterMut<'a, T> {
        self.as_mut_slice().iter_mut()
    }
}

/// Appends every item, reserving for the iterator's lower size bound up front.
///
/// ```
/// use growvec::{growvec, GrowVec};
/// let mut v = growvec![1];
/// v.extend(2..=4);
/// v.extend(&[5, 6]);
/// assert_eq!(v, [1, 2, 3, 4, 5, 6]);
/// ```
impl<T> Extend<T> for GrowVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        let items = items.into_iter();
        let (lower, _) = items.size_hint();
        self.reserve_for(lower);
        for item in items {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for GrowVec<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, items: I) {
        self.extend(items.into_iter().copied())
    }
}

/// ```
/// use growvec::GrowVec;
/// let evens: GrowVec<u32> = (0..10).filter(|x| x % 2 == 0).collect();
/// assert_eq!(evens, [0, 2, 4, 6, 8]);
/// ```
impl<T> FromIterator<T> for GrowVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        let mut v = GrowVec::new();
        v.extend(items);
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growvec;
    use alloc::rc::Rc;
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::cell::Cell;

    struct CountDrops(Rc<Cell<usize>>);

    impl Drop for CountDrops {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn into_iter_drops_unyielded_elements() {
        let drops = Rc::new(Cell::new(0));
        let v: GrowVec<CountDrops> = (0..5).map(|_| CountDrops(drops.clone())).collect();
        let mut it = v.into_iter();
        drop(it.next());
        drop(it.next_back());
        assert_eq!(drops.get(), 2);
        assert_eq!(it.len(), 3);
        drop(it);
        assert_eq!(drops.get(), 5);
    }

    #[test]
    fn iterates_in_both_directions() {
        let v = growvec![1, 2, 3, 4];
        let forward: Vec<i32> = v.iter().copied().collect();
        let backward: Vec<i32> = v.iter().rev().copied().collect();
        assert_eq!(forward, [1, 2, 3, 4]);
        assert_eq!(backward, [4, 3, 2, 1]);
        assert_eq!(v.into_iter().rev().collect::<Vec<_>>(), [4, 3, 2, 1]);
    }

    #[test]
    fn mutable_iteration() {
        let mut v = growvec![1, 2, 3];
        for x in &mut v {
            *x *= 10;
        }
        assert_eq!(v, [10, 20, 30]);
    }

    #[test]
    fn empty_iteration_yields_nothing() {
        let v: GrowVec<String> = GrowVec::new();
        assert_eq!(v.iter().count(), 0);
        let mut it = v.into_iter();
        assert!(it.next().is_none());
        assert!(it.next_back().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn collect_uses_geometric_growth() {
        let v: GrowVec<usize> = (0..100).collect();
        assert_eq!(v.len(), 100);
        assert!(v.capacity() >= 100);
        assert!(v.iter().enumerate().all(|(i, &x)| i == x));
    }
}
