#![warn(missing_docs)]

//! Random-access positions into a [`GrowVec`][crate::GrowVec].
//!
//! A [`Cursor`] is a plain position, not a borrow: it can be stored, copied, compared
//! and moved around with arithmetic while the container is mutated elsewhere.
//! Reading through a cursor goes back through the container
//! (`v[cursor]`, [`get_at`][crate::GrowVec::get_at]), which bounds-checks it.
//!
//! Any operation that changes a container's length or storage invalidates all of
//! that container's cursors. In debug builds every cursor remembers the container
//! generation it was issued at, and using an invalidated one panics:
//!
//! ```should_panic
//! use growvec::growvec;
//!
//! let mut v = growvec![1, 2, 3];
//! let second = v.begin() + 1;
//! v.push_back(4);
//! # if !cfg!(debug_assertions) { panic!("stale cursor") }
//! let _ = v[second]; // stale cursor
//! ```
//!
//! Release builds skip the generation check; a stale cursor then reads whatever
//! element currently sits at its position, or panics if that is out of bounds.
//!
//! # Examples
//!
//! ```
//! use growvec::growvec;
//!
//! let v = growvec![10, 20, 30, 40];
//! let mut c = v.begin();
//! c += 2;
//! assert_eq!(v[c], 30);
//! assert_eq!(v.end() - c, 2);
//! assert!(v.begin() < c && c < v.end());
//!
//! let r = v.rbegin();
//! assert_eq!(v[r], 40);
//! assert_eq!(v[r + 3], 10);
//! assert_eq!(r + 4, v.rend());
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign, Sub, SubAssign};

#[inline(never)]
#[cold]
fn cursor_underflow() -> ! {
    panic!("Cursor moved before the start of its container")
}

#[inline(never)]
#[cold]
fn cursor_overflow() -> ! {
    panic!("Cursor moved past the largest representable position")
}

/// A position within a [`GrowVec`][crate::GrowVec].
///
/// Equality, ordering and hashing only look at the position.
#[derive(Clone, Copy)]
pub struct Cursor {
    pos: usize,
    generation: usize,
}

impl Cursor {
    #[inline]
    pub(crate) const fn new(pos: usize, generation: usize) -> Self {
        Cursor { pos, generation }
    }

    #[inline]
    pub(crate) fn generation(self) -> usize {
        self.generation
    }

    /// Offset of this cursor from the start of its container.
    ///
    /// ```
    /// use growvec::growvec;
    /// let v = growvec!['a', 'b', 'c'];
    /// assert_eq!((v.begin() + 2).position(), 2);
    /// assert_eq!(v.end().position(), v.len());
    /// ```
    #[inline]
    pub fn position(self) -> usize {
        self.pos
    }

    /// Moves the cursor by a signed distance.
    ///
    /// Panics if the result would be before the start of the container.
    ///
    /// ```
    /// use growvec::growvec;
    /// let v = growvec![1, 2, 3];
    /// let last = v.end().offset(-1);
    /// assert_eq!(v[last], 3);
    /// assert_eq!(last.offset(-2), v.begin());
    /// ```
    #[inline]
    pub fn offset(self, delta: isize) -> Self {
        match self.pos.checked_add_signed(delta) {
            Some(pos) => Cursor { pos, ..self },
            None if delta < 0 => cursor_underflow(),
            None => cursor_overflow(),
        }
    }
}

impl PartialEq for Cursor {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Cursor {}

impl PartialOrd for Cursor {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cursor {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.pos.cmp(&other.pos)
    }
}

impl Hash for Cursor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state)
    }
}

impl fmt::Debug for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.pos).finish()
    }
}

impl Add<usize> for Cursor {
    type Output = Cursor;
    #[inline]
    fn add(self, rhs: usize) -> Cursor {
        match self.pos.checked_add(rhs) {
            Some(pos) => Cursor { pos, ..self },
            None => cursor_overflow(),
        }
    }
}

impl Add<Cursor> for usize {
    type Output = Cursor;
    #[inline]
    fn add(self, rhs: Cursor) -> Cursor {
        rhs + self
    }
}

impl Sub<usize> for Cursor {
    type Output = Cursor;
    #[inline]
    fn sub(self, rhs: usize) -> Cursor {
        match self.pos.checked_sub(rhs) {
            Some(pos) => Cursor { pos, ..self },
            None => cursor_underflow(),
        }
    }
}

/// Signed distance between two cursors.
impl Sub for Cursor {
    type Output = isize;
    #[inline]
    fn sub(self, rhs: Cursor) -> isize {
        self.pos.wrapping_sub(rhs.pos) as isize
    }
}

impl AddAssign<usize> for Cursor {
    #[inline]
    fn add_assign(&mut self, rhs: usize) {
        *self = *self + rhs;
    }
}

impl SubAssign<usize> for Cursor {
    #[inline]
    fn sub_assign(&mut self, rhs: usize) {
        *self = *self - rhs;
    }
}

/// A position walking a [`GrowVec`][crate::GrowVec] from back to front.
///
/// A reverse cursor wraps a forward [`base`][ReverseCursor::base] cursor and refers
/// to the element just before it, so `rbegin()` wraps `end()` and refers to the last
/// element, and `rend()` wraps `begin()`. Adding moves toward the front, and the
/// ordering is reversed accordingly.
///
/// ```
/// use growvec::growvec;
/// let v = growvec![10, 20, 30];
/// let mut seen = Vec::new();
/// let mut r = v.rbegin();
/// while r != v.rend() {
///     seen.push(v[r]);
///     r += 1;
/// }
/// assert_eq!(seen, [30, 20, 10]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReverseCursor {
    base: Cursor,
}

impl ReverseCursor {
    /// Wraps a forward cursor.
    #[inline]
    pub fn new(base: Cursor) -> Self {
        ReverseCursor { base }
    }

    /// The forward cursor one past the element this cursor refers to.
    ///
    /// ```
    /// use growvec::growvec;
    /// let v = growvec![1, 2];
    /// assert_eq!(v.rbegin().base(), v.end());
    /// assert_eq!(v.rend().base(), v.begin());
    /// ```
    #[inline]
    pub fn base(self) -> Cursor {
        self.base
    }

    /// Offset of the referred element from the start of the container, or `None` for
    /// `rend()`.
    #[inline]
    pub fn position(self) -> Option<usize> {
        self.base.pos.checked_sub(1)
    }
}

impl PartialOrd for ReverseCursor {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ReverseCursor {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        other.base.cmp(&self.base)
    }
}

impl fmt::Debug for ReverseCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ReverseCursor").field(&self.base.pos).finish()
    }
}

impl Add<usize> for ReverseCursor {
    type Output = ReverseCursor;
    #[inline]
    fn add(self, rhs: usize) -> ReverseCursor {
        ReverseCursor {
            base: self.base - rhs,
        }
    }
}

impl Sub<usize> for ReverseCursor {
    type Output = ReverseCursor;
    #[inline]
    fn sub(self, rhs: usize) -> ReverseCursor {
        ReverseCursor {
            base: self.base + rhs,
        }
    }
}

impl Sub for ReverseCursor {
    type Output = isize;
    #[inline]
    fn sub(self, rhs: ReverseCursor) -> isize {
        rhs.base - self.base
    }
}

impl AddAssign<usize> for ReverseCursor {
    #[inline]
    fn add_assign(&mut self, rhs: usize) {
        *self = *self + rhs;
    }
}

impl SubAssign<usize> for ReverseCursor {
    #[inline]
    fn sub_assign(&mut self, rhs: usize) {
        *self = *self - rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_is_consistent() {
        let begin = Cursor::new(0, 7);
        let c = begin + 5;
        assert_eq!(c.position(), 5);
        assert_eq!(c - begin, 5);
        assert_eq!(begin - c, -5);
        assert_eq!(3 + begin, begin + 3);
        assert_eq!(c - 2, begin + 3);
        assert_eq!(c.offset(-5), begin);
        assert_eq!(c.offset(2).position(), 7);

        let mut m = begin;
        m += 4;
        m -= 1;
        assert_eq!(m.position(), 3);
        assert_eq!(m.generation(), 7);
    }

    #[test]
    fn ordering_ignores_generation() {
        let a = Cursor::new(2, 1);
        let b = Cursor::new(2, 9);
        assert_eq!(a, b);
        assert!(Cursor::new(1, 9) < a);
        assert!(Cursor::new(3, 0) > b);
    }

    #[test]
    #[should_panic(expected = "before the start")]
    fn stepping_before_start_panics() {
        let _ = Cursor::new(1, 0) - 2;
    }

    #[test]
    #[should_panic(expected = "largest representable position")]
    fn stepping_past_usize_max_panics() {
        let _ = Cursor::new(usize::MAX - 1, 0) + 2;
    }

    #[test]
    #[should_panic(expected = "largest representable position")]
    fn signed_offset_past_usize_max_panics() {
        let _ = Cursor::new(usize::MAX, 0).offset(1);
    }

    #[test]
    fn reverse_cursor_mirrors_forward_motion() {
        let end = Cursor::new(3, 0);
        let rbegin = ReverseCursor::new(end);
        let rend = ReverseCursor::new(Cursor::new(0, 0));
        assert_eq!(rbegin.position(), Some(2));
        assert_eq!(rend.position(), None);
        assert_eq!(rend - rbegin, 3);
        assert!(rbegin < rend);
        assert_eq!(rbegin + 3, rend);
        assert_eq!(rend - 3, rbegin);

        let mut r = rbegin;
        r += 2;
        assert_eq!(r.position(), Some(0));
        r -= 1;
        assert_eq!(r.base().position(), 2);
    }
}
