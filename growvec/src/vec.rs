#![warn(missing_docs)]

//! The [`GrowVec<T>`] container: construction, capacity, access and mutation.
//!
//! Trait implementations (comparison, conversion, indexing) live in
//! [`traits`][crate::traits]; iteration in [`iter`][crate::iter].

use crate::cursor::{Cursor, ReverseCursor};
use crate::error::{Error, Result};
use crate::init::{
    CloneFrom, FillWith, FillWithDefault, FromIterPrefix, Initializer, RangeInitializer, Value,
};
use crate::raw::{capacity_overflow, RawBuf};
use crate::{GROWTH_FACTOR, MIN_CAPACITY};

use core::cmp;
use core::mem::{self, ManuallyDrop, MaybeUninit};
use core::ptr;
use core::slice;

#[inline(never)]
#[cold]
fn stale_cursor() -> ! {
    panic!("Stale cursor: the container was resized or reallocated after the cursor was taken")
}

#[inline(never)]
#[cold]
fn cursor_out_of_bounds(pos: usize, len: usize) -> ! {
    panic!("Cursor position {} is past the end (length {})", pos, len)
}

#[inline(never)]
#[cold]
fn invalid_range(start: usize, end: usize, len: usize) -> ! {
    panic!("Invalid cursor range {}..{} (length {})", start, end, len)
}

/// Capacity allocated by the pre-sized constructors for `len` elements.
#[inline]
pub(crate) fn sized_capacity(len: usize) -> usize {
    GROWTH_FACTOR
        .checked_mul(cmp::max(MIN_CAPACITY, len))
        .unwrap_or(len)
}

/// Capacity to grow to when `required` slots do not fit in `current`.
#[inline]
pub(crate) fn grown_capacity(current: usize, required: usize) -> usize {
    let geometric = GROWTH_FACTOR
        .checked_mul(cmp::max(MIN_CAPACITY, current))
        .unwrap_or(required);
    cmp::max(geometric, required)
}

/// A contiguous growable sequence.
///
/// Elements `[0, len)` of the buffer are live; the remaining `capacity - len` slots
/// are uninitialized. Appending is amortized O(1): whenever the buffer is full it is
/// relocated into one [`GROWTH_FACTOR`][crate::GROWTH_FACTOR] times larger.
///
/// # Examples
///
/// ```
/// use growvec::{growvec, GrowVec};
///
/// let mut v = GrowVec::new();
/// v.push_back(1);
/// v.push_back(2);
/// let at = v.insert(v.begin() + 1, 99);
/// assert_eq!(v, [1, 99, 2]);
/// assert_eq!(v[at], 99);
///
/// v.erase(v.begin()).unwrap();
/// assert_eq!(v, [99, 2]);
///
/// let sorted: GrowVec<i32> = {
///     let mut s = growvec![3, 1, 2];
///     s.sort();
///     s
/// };
/// assert_eq!(sorted, [1, 2, 3]);
/// ```
pub struct GrowVec<T> {
    buf: RawBuf<T>,
    len: usize,
    // Bumped by every change of length or storage. Cursors carry the value they were
    // issued at.
    generation: usize,
}

impl<T> GrowVec<T> {
    /// Creates an empty container. Does not allocate.
    ///
    /// ```
    /// use growvec::GrowVec;
    /// let v: GrowVec<String> = GrowVec::new();
    /// assert!(v.is_empty());
    /// assert_eq!(v.capacity(), 0);
    /// ```
    #[inline]
    pub const fn new() -> Self {
        GrowVec {
            buf: RawBuf::new(),
            len: 0,
            generation: 0,
        }
    }

    /// Creates an empty container with room for exactly `capacity` elements.
    ///
    /// ```
    /// use growvec::GrowVec;
    /// let v: GrowVec<u8> = GrowVec::with_capacity(10);
    /// assert_eq!(v.capacity(), 10);
    /// assert_eq!(v.len(), 0);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        GrowVec {
            buf: RawBuf::with_capacity(capacity),
            len: 0,
            generation: 0,
        }
    }

    /// Creates a container of `len` elements constructed in place by `init`.
    ///
    /// Like every pre-sized constructor, this allocates
    /// `GROWTH_FACTOR * max(MIN_CAPACITY, len)` slots.
    ///
    /// ```
    /// use growvec::prelude::*;
    /// let squares: GrowVec<u32> = GrowVec::from_init(4, FillSequentially(|i| (i * i) as u32));
    /// assert_eq!(squares, [0, 1, 4, 9]);
    /// assert_eq!(squares.capacity(), 8);
    /// ```
    pub fn from_init(len: usize, init: impl RangeInitializer<T>) -> Self {
        let mut v = Self::with_capacity(sized_capacity(len));
        v.append_with(len, init);
        v
    }

    /// Creates a container of `len` default values.
    ///
    /// ```
    /// use growvec::GrowVec;
    /// let v: GrowVec<i64> = GrowVec::with_len(5);
    /// assert_eq!(v, [0; 5]);
    /// ```
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        Self::from_init(len, FillWithDefault)
    }

    /// Creates a container of `len` clones of `value`.
    ///
    /// ```
    /// use growvec::GrowVec;
    /// let v = GrowVec::from_elem(3, 42);
    /// assert_eq!(v, [42, 42, 42]);
    /// ```
    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::from_init(len, FillWith(&value))
    }

    /// Creates a container holding clones of the elements of `items`.
    ///
    /// ```
    /// use growvec::GrowVec;
    /// let source = vec![1, 2, 3, 4];
    /// let v = GrowVec::from_slice(&source[1..]);
    /// assert_eq!(v, [2, 3, 4]);
    /// ```
    pub fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_init(items.len(), CloneFrom(items))
    }

    /// Moves the contents out into a new container, leaving `self` empty, with no
    /// allocation, and ready for reuse.
    ///
    /// ```
    /// use growvec::growvec;
    /// let mut a = growvec![1, 2, 3];
    /// let b = a.take();
    /// assert_eq!(b, [1, 2, 3]);
    /// assert!(a.is_empty());
    /// assert_eq!(a.capacity(), 0);
    /// a.push_back(7);
    /// assert_eq!(a, [7]);
    /// ```
    pub fn take(&mut self) -> Self {
        let taken = GrowVec {
            buf: mem::replace(&mut self.buf, RawBuf::new()),
            len: mem::replace(&mut self.len, 0),
            generation: 0,
        };
        self.invalidate();
        taken
    }

    /// Replaces the contents of `self` with those of `other`, leaving `other` empty,
    /// with no allocation, and ready for reuse. The previous elements of `self` are
    /// dropped and its buffer is freed.
    ///
    /// ```
    /// use growvec::growvec;
    /// let mut a = growvec![4, 5];
    /// let mut b = growvec![9];
    /// b.move_from(&mut a);
    /// assert_eq!(b, [4, 5]);
    /// assert!(a.is_empty());
    /// assert_eq!(a.capacity(), 0);
    /// ```
    pub fn move_from(&mut self, other: &mut Self) {
        let generation = self.generation;
        *self = other.take();
        self.generation = generation.wrapping_add(1);
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Whether the container holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Ensures room for at least `capacity` elements. Reallocates to exactly
    /// `capacity` slots if the current buffer is smaller; never shrinks.
    ///
    /// ```
    /// use growvec::growvec;
    /// let mut v = growvec![1];
    /// v.reserve(100);
    /// assert_eq!(v.capacity(), 100);
    /// v.reserve(3);
    /// assert_eq!(v.capacity(), 100);
    /// ```
    pub fn reserve(&mut self, capacity: usize) {
        if capacity > self.capacity() {
            self.relocate(capacity);
        }
    }

    /// Fallible [`reserve`][Self::reserve]: reports capacity overflow and allocator
    /// failure instead of panicking or aborting. On error the container is unchanged.
    ///
    /// ```
    /// use growvec::{Error, GrowVec};
    /// let mut v: GrowVec<u64> = GrowVec::new();
    /// assert_eq!(v.try_reserve(16), Ok(()));
    /// assert_eq!(
    ///     v.try_reserve(usize::MAX),
    ///     Err(Error::CapacityOverflow { requested: usize::MAX }),
    /// );
    /// assert_eq!(v.capacity(), 16);
    /// ```
    pub fn try_reserve(&mut self, capacity: usize) -> Result<()> {
        if capacity > self.capacity() {
            // Safety: slots [0, len) are live and len <= capacity.
            unsafe { self.buf.try_relocate(capacity, self.len)? };
            self.invalidate();
        }
        Ok(())
    }

    /// Reduces the buffer to `GROWTH_FACTOR * len` slots, keeping slack for growth.
    /// Never grows the buffer; an empty container releases its allocation entirely.
    ///
    /// ```
    /// use growvec::GrowVec;
    /// let mut v: GrowVec<u8> = GrowVec::with_capacity(64);
    /// v.extend([1, 2, 3]);
    /// v.shrink_to_fit();
    /// assert_eq!(v.capacity(), 6);
    /// v.shrink_to_fit();
    /// assert_eq!(v.capacity(), 6);
    ///
    /// v.clear();
    /// v.reserve(8);
    /// v.shrink_to_fit();
    /// assert_eq!(v.capacity(), 0);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        let target = self.len.saturating_mul(GROWTH_FACTOR);
        if target >= self.capacity() {
            return;
        }
        if self.len == 0 {
            log::debug!("shrink_to_fit released {} empty slots", self.capacity());
            self.buf.release();
            self.invalidate();
        } else {
            self.relocate(target);
        }
    }

    /// Resizes to `new_len`, dropping surplus elements or appending clones of `value`.
    ///
    /// ```
    /// use growvec::growvec;
    /// let mut v = growvec![1];
    /// v.resize(5, 100);
    /// assert_eq!(v, [1, 100, 100, 100, 100]);
    /// v.resize(2, 0);
    /// assert_eq!(v, [1, 100]);
    /// ```
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        if new_len <= self.len {
            self.truncate(new_len);
        } else {
            self.append_with(new_len - self.len, FillWith(&value));
        }
    }

    /// Resizes to `new_len`, dropping surplus elements or appending default values.
    ///
    /// ```
    /// use growvec::growvec;
    /// let mut v = growvec![String::from("a")];
    /// v.resize_default(3);
    /// assert_eq!(v, ["a", "", ""]);
    /// ```
    pub fn resize_default(&mut self, new_len: usize)
    where
        T: Default,
    {
        if new_len <= self.len {
            self.truncate(new_len);
        } else {
            self.append_with(new_len - self.len, FillWithDefault);
        }
    }

    /// Drops every element past the first `len`. Does nothing if `len >= self.len()`.
    /// The capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let doomed = self.len - len;
        self.len = len;
        self.invalidate();
        // Safety: [len, len + doomed) were live and are now past the end.
        unsafe { self.buf.drop_range(len, doomed) };
    }

    /// The live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // Safety: ptr is non-null and aligned (dangling when empty), [0, len) are live.
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    /// The live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // Safety: as for `as_slice`, and we hold the unique borrow.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    /// Raw pointer to the buffer. Dangling while the capacity is zero.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.ptr()
    }

    /// Raw mutable pointer to the buffer. Dangling while the capacity is zero.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr()
    }

    /// Bounds-checked access.
    ///
    /// ```
    /// use growvec::{growvec, Error};
    /// let v = growvec![7, 8, 9];
    /// assert_eq!(v.at(2), Ok(&9));
    /// assert_eq!(v.at(3), Err(Error::OutOfRange { index: 3, len: 3 }));
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// Bounds-checked mutable access.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// The first element, or `None` if empty.
    ///
    /// ```
    /// use growvec::{growvec, GrowVec};
    /// assert_eq!(growvec![7, 8, 9].front(), Some(&7));
    /// assert_eq!(GrowVec::<u8>::new().front(), None);
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Mutable access to the first element, or `None` if empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// The last element, or `None` if empty.
    ///
    /// ```
    /// use growvec::growvec;
    /// assert_eq!(growvec![7, 8, 9].back(), Some(&9));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Mutable access to the last element, or `None` if empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// The element a cursor refers to, or `None` if it is at or past the end.
    ///
    /// Panics in debug builds if the cursor is stale.
    #[inline]
    pub fn get_at(&self, cursor: Cursor) -> Option<&T> {
        let index = self.check(cursor);
        self.as_slice().get(index)
    }

    /// Mutable access to the element a cursor refers to.
    #[inline]
    pub fn get_at_mut(&mut self, cursor: Cursor) -> Option<&mut T> {
        let index = self.check(cursor);
        self.as_mut_slice().get_mut(index)
    }

    /// The elements in `[first, last)`.
    ///
    /// ```
    /// use growvec::growvec;
    /// let v = growvec![1, 2, 3, 4, 5];
    /// assert_eq!(v.slice_between(v.begin() + 1, v.end() - 1), [2, 3, 4]);
    /// ```
    pub fn slice_between(&self, first: Cursor, last: Cursor) -> &[T] {
        let (start, end) = self.checked_range(first, last);
        &self.as_slice()[start..end]
    }

    /// Cursor to the first element (equal to [`end`][Self::end] when empty).
    #[inline]
    pub fn begin(&self) -> Cursor {
        self.cursor_at(0)
    }

    /// Cursor one past the last element.
    #[inline]
    pub fn end(&self) -> Cursor {
        self.cursor_at(self.len)
    }

    /// Same as [`begin`][Self::begin]; cursors never grant mutable access by themselves.
    ///
    /// ```
    /// use growvec::growvec;
    /// let v = growvec![1, 2];
    /// assert_eq!(v.cbegin(), v.begin());
    /// assert_eq!(v[v.cbegin()], 1);
    /// ```
    #[inline]
    pub fn cbegin(&self) -> Cursor {
        self.begin()
    }

    /// Same as [`end`][Self::end].
    ///
    /// ```
    /// use growvec::growvec;
    /// let v = growvec![1, 2];
    /// assert_eq!(v.cend() - v.cbegin(), 2);
    /// ```
    #[inline]
    pub fn cend(&self) -> Cursor {
        self.end()
    }

    /// Reverse cursor to the last element.
    #[inline]
    pub fn rbegin(&self) -> ReverseCursor {
        ReverseCursor::new(self.end())
    }

    /// Reverse cursor one before the first element.
    #[inline]
    pub fn rend(&self) -> ReverseCursor {
        ReverseCursor::new(self.begin())
    }

    /// Same as [`rbegin`][Self::rbegin].
    ///
    /// ```
    /// use growvec::growvec;
    /// let v = growvec![1, 2];
    /// assert_eq!(v.crbegin(), v.rbegin());
    /// assert_eq!(v[v.crbegin()], 2);
    /// ```
    #[inline]
    pub fn crbegin(&self) -> ReverseCursor {
        self.rbegin()
    }

    /// Same as [`rend`][Self::rend].
    ///
    /// ```
    /// use growvec::growvec;
    /// let v = growvec![1, 2];
    /// assert_eq!(v.crend(), v.rend());
    /// assert_eq!(v.crend() - v.crbegin(), 2);
    /// ```
    #[inline]
    pub fn crend(&self) -> ReverseCursor {
        self.rend()
    }

    /// Replaces the contents with `count` clones of `value`.
    ///
    /// ```
    /// use growvec::growvec;
    /// let mut v = growvec![1, 2, 3, 4];
    /// v.assign(2, 0);
    /// assert_eq!(v, [0, 0]);
    /// ```
    pub fn assign(&mut self, count: usize, value: T)
    where
        T: Clone,
    {
        self.assign_iter(core::iter::repeat(value).take(count))
    }

    /// Replaces the contents with the items of an iterator. Live slots are assigned
    /// over, further items are appended, and surplus elements are dropped.
    ///
    /// ```
    /// use growvec::growvec;
    /// let mut v = growvec!["a".to_string()];
    /// v.assign_iter(["x", "y", "z"].map(String::from));
    /// assert_eq!(v, ["x", "y", "z"]);
    /// ```
    pub fn assign_iter<I: IntoIterator<Item = T>>(&mut self, items: I) {
        let mut items = items.into_iter();
        let (lower, _) = items.size_hint();
        self.reserve(lower);
        let mut assigned = 0;
        for slot in self.as_mut_slice() {
            match items.next() {
                Some(item) => {
                    *slot = item;
                    assigned += 1;
                }
                None => break,
            }
        }
        self.truncate(assigned);
        self.extend(items);
        self.invalidate();
    }

    /// Replaces the contents with clones of the elements of `items`.
    ///
    /// ```
    /// use growvec::growvec;
    /// let mut v = growvec![9, 9, 9];
    /// v.assign_slice(&[4, 5]);
    /// assert_eq!(v, [4, 5]);
    /// ```
    pub fn assign_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        self.assign_iter(items.iter().cloned())
    }

    /// Appends an element, growing the buffer if it is full.
    ///
    /// ```
    /// use growvec::GrowVec;
    /// let mut v = GrowVec::new();
    /// v.push_back(1);
    /// assert_eq!(v.capacity(), 4);
    /// ```
    pub fn push_back(&mut self, value: T) {
        self.emplace_back(Value(value));
    }

    /// Appends an element constructed in place, and returns a reference to it.
    ///
    /// ```
    /// use growvec::prelude::*;
    /// let mut v: GrowVec<(i32, String)> = GrowVec::new();
    /// let pair = v.emplace_back(With(|| (42, "answer".to_string())));
    /// pair.0 += 1;
    /// assert_eq!(v[0], (43, "answer".to_string()));
    /// ```
    pub fn emplace_back(&mut self, init: impl Initializer<T>) -> &mut T {
        let index = self.len;
        let required = index.checked_add(1).unwrap_or_else(|| capacity_overflow());
        self.grow_for(required);
        // Safety: index < capacity after grow_for, and the slot is vacant.
        unsafe {
            init.initialize(&mut self.buf.vacant_mut(index, 1)[0]);
        }
        self.len = required;
        self.invalidate();
        // Safety: just initialized.
        unsafe { &mut *self.buf.slot(index) }
    }

    /// Removes the last element and returns it, or `None` if empty. The element is
    /// dropped when the caller drops it.
    ///
    /// ```
    /// use growvec::growvec;
    /// let mut v = growvec![1, 2];
    /// assert_eq!(v.pop_back(), Some(2));
    /// assert_eq!(v.back(), Some(&1));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        self.invalidate();
        // Safety: the slot was live and is now past the end, so it is read exactly once.
        Some(unsafe { ptr::read(self.buf.slot(self.len)) })
    }

    /// Inserts `value` before `pos` and returns a cursor to it.
    ///
    /// Panics if `pos` is past [`end`][Self::end].
    ///
    /// ```
    /// use growvec::growvec;
    /// let mut v = growvec![1, 2, 3];
    /// let c = v.insert(v.begin() + 1, 99);
    /// assert_eq!(v, [1, 99, 2, 3]);
    /// assert_eq!(c.position(), 1);
    /// ```
    pub fn insert(&mut self, pos: Cursor, value: T) -> Cursor {
        self.emplace(pos, Value(value))
    }

    /// Constructs an element in place before `pos` and returns a cursor to it.
    pub fn emplace(&mut self, pos: Cursor, init: impl Initializer<T>) -> Cursor {
        let index = self.insert_position(pos);
        self.fill_gap(index, 1, |gap| init.initialize(&mut gap[0]));
        self.cursor_at(index)
    }

    /// Inserts `count` clones of `value` before `pos`. Returns a cursor to the first
    /// inserted element, or `pos` if `count` is zero.
    ///
    /// ```
    /// use growvec::growvec;
    /// let mut v = growvec![1, 2];
    /// v.insert_n(v.end(), 3, &0);
    /// assert_eq!(v, [1, 2, 0, 0, 0]);
    /// ```
    pub fn insert_n(&mut self, pos: Cursor, count: usize, value: &T) -> Cursor
    where
        T: Clone,
    {
        self.insert_with(pos, count, FillWith(value))
    }

    /// Inserts `count` elements constructed in place by `init` before `pos`. Returns a
    /// cursor to the first inserted element, or `pos` if `count` is zero.
    ///
    /// The tail `[pos, end)` moves right by `count` slots. If the buffer is too small it
    /// grows geometrically, or to exactly `len + count` if that is larger.
    pub fn insert_with(
        &mut self,
        pos: Cursor,
        count: usize,
        init: impl RangeInitializer<T>,
    ) -> Cursor {
        let index = self.insert_position(pos);
        if count == 0 {
            return pos;
        }
        self.fill_gap(index, count, |gap| init.initialize(gap));
        self.cursor_at(index)
    }

    /// Inserts the items of an exact-size iterator before `pos`.
    ///
    /// ```
    /// use growvec::growvec;
    /// let mut v = growvec![1, 2, 3];
    /// let range = growvec![5, 6];
    /// let first = v.insert_range(v.begin(), range.iter().copied());
    /// assert_eq!(v, [5, 6, 1, 2, 3]);
    /// assert_eq!(v[first], 5);
    /// ```
    pub fn insert_range<I>(&mut self, pos: Cursor, items: I) -> Cursor
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let items = items.into_iter();
        let count = items.len();
        self.insert_with(pos, count, FromIterPrefix(items))
    }

    /// Inserts clones of the elements of `items` before `pos`.
    pub fn insert_slice(&mut self, pos: Cursor, items: &[T]) -> Cursor
    where
        T: Clone,
    {
        self.insert_with(pos, items.len(), CloneFrom(items))
    }

    /// Removes and drops the element at `pos`. Returns a cursor to the element that
    /// followed it, which is [`end`][Self::end] if the last element was erased.
    ///
    /// ```
    /// use growvec::{growvec, Error};
    /// let mut v = growvec![1, 2, 3];
    /// let next = v.erase(v.begin() + 1).unwrap();
    /// assert_eq!(v[next], 3);
    /// assert_eq!(v.erase(v.end()), Err(Error::OutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn erase(&mut self, pos: Cursor) -> Result<Cursor> {
        let index = self.check(pos);
        if index >= self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        // Safety: index is live; after the read it is refilled by the shifted tail.
        let removed = unsafe {
            let removed = ptr::read(self.buf.slot(index));
            self.buf.shift(index + 1, index, self.len - index - 1);
            removed
        };
        self.len -= 1;
        self.invalidate();
        drop(removed);
        Ok(self.cursor_at(index))
    }

    /// Removes and drops the elements in `[first, last)`. Returns a cursor to the
    /// element that followed the range.
    ///
    /// Panics if the range is inverted or extends past the end.
    ///
    /// ```
    /// use growvec::growvec;
    /// let mut v = growvec![5, 6, 1, 2, 3];
    /// let next = v.erase_range(v.begin(), v.begin() + 2);
    /// assert_eq!(v, [1, 2, 3]);
    /// assert_eq!(next, v.begin());
    /// ```
    pub fn erase_range(&mut self, first: Cursor, last: Cursor) -> Cursor {
        if first == last {
            return first;
        }
        let (start, end) = self.checked_range(first, last);
        let old_len = self.len;
        // Elements past `start` are in flight until the tail is shifted back.
        self.len = start;
        self.invalidate();
        // Safety: [start, end) are live and dropped once; [end, old_len) are live and
        // moved into the vacated slots.
        unsafe {
            self.buf.drop_range(start, end - start);
            self.buf.shift(end, start, old_len - end);
        }
        self.len = old_len - (end - start);
        self.cursor_at(start)
    }

    /// Drops every element and frees the buffer, leaving the container in the same
    /// state as [`GrowVec::new`].
    ///
    /// ```
    /// use growvec::growvec;
    /// let mut v = growvec![1, 2, 3];
    /// v.clear();
    /// assert!(v.is_empty());
    /// assert_eq!(v.capacity(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.truncate(0);
        if self.capacity() > 0 {
            log::debug!("clear released {} slots", self.capacity());
        }
        self.buf.release();
        self.invalidate();
    }

    /// Exchanges the contents of two containers without moving any element. Cursors
    /// into either container are invalidated.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.buf, &mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
        self.invalidate();
        other.invalidate();
    }

    /// Grows the buffer if `additional` more elements would not fit.
    pub(crate) fn reserve_for(&mut self, additional: usize) {
        let required = self
            .len
            .checked_add(additional)
            .unwrap_or_else(|| capacity_overflow());
        self.grow_for(required);
    }

    /// Index of a cursor, after checking in debug builds that it is not stale.
    #[inline]
    pub(crate) fn check(&self, cursor: Cursor) -> usize {
        if cfg!(debug_assertions) && cursor.generation() != self.generation {
            stale_cursor()
        }
        cursor.position()
    }

    #[inline]
    pub(crate) fn check_reverse(&self, cursor: ReverseCursor) -> usize {
        let base = self.check(cursor.base());
        match base.checked_sub(1) {
            Some(index) => index,
            None => cursor_out_of_bounds(base, self.len),
        }
    }

    pub(crate) fn into_raw_parts(self) -> (RawBuf<T>, usize) {
        let me = ManuallyDrop::new(self);
        // Safety: `me` is never used or dropped again, so the buffer moves out once.
        let buf = unsafe { ptr::read(&me.buf) };
        (buf, me.len)
    }

    #[inline]
    fn cursor_at(&self, index: usize) -> Cursor {
        Cursor::new(index, self.generation)
    }

    #[inline]
    fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    fn insert_position(&self, pos: Cursor) -> usize {
        let index = self.check(pos);
        if index > self.len {
            cursor_out_of_bounds(index, self.len)
        }
        index
    }

    fn checked_range(&self, first: Cursor, last: Cursor) -> (usize, usize) {
        let start = self.check(first);
        let end = self.check(last);
        if start > end || end > self.len {
            invalid_range(start, end, self.len)
        }
        (start, end)
    }

    fn relocate(&mut self, new_cap: usize) {
        // Safety: [0, len) are live, and every caller passes new_cap >= len.
        unsafe { self.buf.relocate(new_cap, self.len) };
        self.invalidate();
    }

    fn grow_for(&mut self, required: usize) {
        if required > self.capacity() {
            self.relocate(grown_capacity(self.capacity(), required));
        }
    }

    fn append_with(&mut self, count: usize, init: impl RangeInitializer<T>) {
        if count == 0 {
            return;
        }
        self.reserve_for(count);
        // Safety: [len, len + count) is within capacity and vacant.
        unsafe { init.initialize(self.buf.vacant_mut(self.len, count)) };
        self.len += count;
        self.invalidate();
    }

    /// Opens a gap of `count` vacant slots at `index`, lets `fill` construct into it,
    /// and closes the container over it.
    fn fill_gap(&mut self, index: usize, count: usize, fill: impl FnOnce(&mut [MaybeUninit<T>])) {
        debug_assert!(index <= self.len);
        self.reserve_for(count);
        let old_len = self.len;
        // While the gap is open the tail is owned by nobody: a panic in `fill` leaks
        // it instead of dropping moved-from slots.
        self.len = index;
        self.invalidate();
        // Safety: capacity covers old_len + count; the tail moves into vacant slots and
        // the gap it leaves is handed out as uninitialized.
        unsafe {
            self.buf.shift(index, index + count, old_len - index);
            fill(self.buf.vacant_mut(index, count));
        }
        self.len = old_len + count;
    }
}

impl<T> Drop for GrowVec<T> {
    fn drop(&mut self) {
        // Safety: [0, len) are live; RawBuf frees the allocation afterwards.
        unsafe { self.buf.drop_range(0, self.len) }
    }
}
