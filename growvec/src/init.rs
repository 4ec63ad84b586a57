#![warn(missing_docs)]

//! Construction of elements directly into vacant slots.
//!
//! Every operation that adds elements to a [`GrowVec`][crate::GrowVec] opens a run of
//! vacant (uninitialized) slots and hands them to an initializer. Vacant slots are
//! typed as [`MaybeUninit<T>`], so an initializer can only *write* them; there is no
//! way to assign over a slot that does not hold a live value.
//!
//! * An [`Initializer<T>`] fills exactly one slot. It is what
//!   [`emplace_back`][crate::GrowVec::emplace_back] and
//!   [`emplace`][crate::GrowVec::emplace] take.
//! * A [`RangeInitializer<T>`] fills a whole run of slots. It is what
//!   [`from_init`][crate::GrowVec::from_init] and
//!   [`insert_with`][crate::GrowVec::insert_with] take.
//!
//! # Examples
//!
//! ```
//! use growvec::prelude::*;
//!
//! let mut v: GrowVec<String> = GrowVec::from_init(3, FillSequentially(|i: usize| i.to_string()));
//! v.emplace_back(With(|| "tail".to_string()));
//! v.insert_with(v.begin(), 2, FillWithDefault);
//! assert_eq!(v, ["", "", "0", "1", "2", "tail"]);
//! ```

use core::mem::MaybeUninit;

/// An object that is able to initialize a single vacant `T` slot.
///
/// # Examples
///
/// An initializer that builds a pair in place:
///
/// ```
/// use growvec::prelude::*;
/// use std::mem::MaybeUninit;
///
/// struct Answer;
/// unsafe impl Initializer<(i32, String)> for Answer {
///     fn initialize(self, slot: &mut MaybeUninit<(i32, String)>) {
///         slot.write((42, "answer".to_string()));
///     }
/// }
///
/// let mut v: GrowVec<(i32, String)> = GrowVec::new();
/// let pair = v.emplace_back(Answer);
/// assert_eq!(pair.0, 42);
/// ```
///
/// # Safety
///
/// When `initialize` returns, `slot` must hold a valid `T`. The container treats the
/// slot as live from then on.
pub unsafe trait Initializer<T> {
    /// Writes the slot.
    fn initialize(self, slot: &mut MaybeUninit<T>);
}

/// Moves an existing value into the slot.
///
/// ```
/// use growvec::prelude::*;
/// let mut v = GrowVec::new();
/// assert_eq!(*v.emplace_back(Value(5u8)), 5);
/// ```
pub struct Value<T>(pub T);

unsafe impl<T> Initializer<T> for Value<T> {
    #[inline]
    fn initialize(self, slot: &mut MaybeUninit<T>) {
        slot.write(self.0);
    }
}

/// Runs a constructor closure and writes its result into the slot.
///
/// ```
/// use growvec::prelude::*;
/// let mut v: GrowVec<Vec<u8>> = GrowVec::new();
/// v.emplace_back(With(|| vec![1, 2, 3]));
/// assert_eq!(v[0], [1, 2, 3]);
/// ```
pub struct With<F>(pub F);

unsafe impl<T, F: FnOnce() -> T> Initializer<T> for With<F> {
    #[inline]
    fn initialize(self, slot: &mut MaybeUninit<T>) {
        slot.write(self.0());
    }
}

/// Clones a borrowed value into the slot.
///
/// ```
/// use growvec::prelude::*;
/// let name = String::from("ada");
/// let mut v = GrowVec::new();
/// v.emplace_back(CloneOf(&name));
/// assert_eq!(v[0], name);
/// ```
pub struct CloneOf<'a, T>(pub &'a T);

unsafe impl<'a, T: Clone> Initializer<T> for CloneOf<'a, T> {
    #[inline]
    fn initialize(self, slot: &mut MaybeUninit<T>) {
        slot.write(self.0.clone());
    }
}

/// Writes `T::default()` into the slot.
///
/// ```
/// use growvec::prelude::*;
/// let mut v: GrowVec<u32> = GrowVec::new();
/// v.emplace_back(DefaultValue);
/// assert_eq!(v, [0]);
/// ```
pub struct DefaultValue;

unsafe impl<T: Default> Initializer<T> for DefaultValue {
    #[inline]
    fn initialize(self, slot: &mut MaybeUninit<T>) {
        slot.write(T::default());
    }
}

/// An object that is able to initialize a run of vacant `T` slots.
///
/// # Examples
///
/// An initializer that fills slots from back to front:
///
/// ```
/// use growvec::prelude::*;
/// use std::mem::MaybeUninit;
///
/// struct WriteBackwardsPowersOf3;
/// unsafe impl RangeInitializer<u64> for WriteBackwardsPowersOf3 {
///     fn initialize(self, dst: &mut [MaybeUninit<u64>]) {
///         let mut v = 1;
///         for slot in dst.iter_mut().rev() {
///             slot.write(v);
///             v *= 3;
///         }
///     }
/// }
///
/// let v: GrowVec<u64> = GrowVec::from_init(5, WriteBackwardsPowersOf3);
/// assert_eq!(v, [81, 27, 9, 3, 1]);
/// ```
///
/// # Safety
///
/// When `initialize` returns, every slot of `dst` must hold a valid `T`. If it panics
/// instead, the slots it already wrote are leaked, never dropped twice.
pub unsafe trait RangeInitializer<T> {
    /// Fills the slice.
    fn initialize(self, dst: &mut [MaybeUninit<T>]);
}

#[inline(never)]
#[cold]
fn source_len_mismatch(wanted: usize, got: usize) -> ! {
    panic!("Initializer source yielded {} elements, expected {}", got, wanted)
}

#[inline]
fn check_source_len(wanted: usize, got: usize) {
    if wanted != got {
        source_len_mismatch(wanted, got)
    }
}

/// Takes the first `dst.len()` items of an iterator. Panics if the iterator runs dry.
pub struct FromIterPrefix<Iter>(pub Iter);

unsafe impl<T, Iter: Iterator<Item = T>> RangeInitializer<T> for FromIterPrefix<Iter> {
    fn initialize(mut self, dst: &mut [MaybeUninit<T>]) {
        let wanted = dst.len();
        for (i, slot) in dst.iter_mut().enumerate() {
            match self.0.next() {
                Some(item) => {
                    slot.write(item);
                }
                None => source_len_mismatch(wanted, i),
            }
        }
    }
}

/// Calls the closure with each slot's offset within the run.
pub struct FillSequentially<Lambda>(pub Lambda);

unsafe impl<T, Lambda: FnMut(usize) -> T> RangeInitializer<T> for FillSequentially<Lambda> {
    fn initialize(self, dst: &mut [MaybeUninit<T>]) {
        let FillSequentially(mut make) = self;
        for (offset, slot) in dst.iter_mut().enumerate() {
            slot.write(make(offset));
        }
    }
}

/// Fills every slot with `T::default()`.
pub struct FillWithDefault;

unsafe impl<T: Default> RangeInitializer<T> for FillWithDefault {
    fn initialize(self, dst: &mut [MaybeUninit<T>]) {
        for slot in dst {
            slot.write(T::default());
        }
    }
}

/// Fills every slot with a clone of the borrowed value.
///
/// ```
/// use growvec::prelude::*;
/// let v = GrowVec::from_init(3, FillWith(&"x"));
/// assert_eq!(v, ["x", "x", "x"]);
/// ```
pub struct FillWith<'a, T>(pub &'a T);

unsafe impl<'a, T: Clone> RangeInitializer<T> for FillWith<'a, T> {
    fn initialize(self, dst: &mut [MaybeUninit<T>]) {
        for slot in dst.iter_mut() {
            slot.write(self.0.clone());
        }
    }
}

/// Bitwise copies a slice of the same length.
pub struct CopyFrom<'a, T>(pub &'a [T]);

unsafe impl<'a, T: Copy> RangeInitializer<T> for CopyFrom<'a, T> {
    fn initialize(self, dst: &mut [MaybeUninit<T>]) {
        check_source_len(dst.len(), self.0.len());
        // Safety: MaybeUninit<T> and T have the same layout, and T: Copy.
        let src: &[MaybeUninit<T>] =
            unsafe { core::slice::from_raw_parts(self.0.as_ptr().cast(), self.0.len()) };
        dst.copy_from_slice(src)
    }
}

/// Clones a slice of the same length, element by element.
pub struct CloneFrom<'a, T>(pub &'a [T]);

unsafe impl<'a, T: Clone> RangeInitializer<T> for CloneFrom<'a, T> {
    fn initialize(self, dst: &mut [MaybeUninit<T>]) {
        check_source_len(dst.len(), self.0.len());
        for (slot, item) in dst.iter_mut().zip(self.0) {
            slot.write(item.clone());
        }
    }
}

/// Moves the elements of an array of the same length.
pub struct MoveFrom<T, const N: usize>(pub [T; N]);

unsafe impl<T, const N: usize> RangeInitializer<T> for MoveFrom<T, N> {
    fn initialize(self, dst: &mut [MaybeUninit<T>]) {
        check_source_len(dst.len(), N);
        for (slot, item) in dst.iter_mut().zip(self.0) {
            slot.write(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    fn run<T, I: RangeInitializer<T>>(n: usize, init: I) -> Vec<T> {
        let mut out: Vec<T> = Vec::with_capacity(n);
        init.initialize(&mut out.spare_capacity_mut()[..n]);
        // Safety: the initializer wrote all `n` slots.
        unsafe { out.set_len(n) };
        out
    }

    #[test]
    fn range_initializers_fill_every_slot() {
        assert_eq!(run(3, FillSequentially(|i| i * 10)), [0, 10, 20]);
        assert_eq!(run::<u8, _>(2, FillWithDefault), [0, 0]);
        assert_eq!(run(2, FillWith(&'z')), ['z', 'z']);
        assert_eq!(run(3, CopyFrom(&[7u16, 8, 9])), [7, 8, 9]);
        assert_eq!(run(2, MoveFrom(["a".to_string(), "b".to_string()])), ["a", "b"]);
        assert_eq!(run(2, FromIterPrefix(5..)), [5, 6]);
    }

    #[test]
    fn clone_from_leaves_source_intact() {
        let src = ["x".to_string(), "y".to_string()];
        let out: Vec<String> = run(2, CloneFrom(&src));
        assert_eq!(out, src);
    }

    #[test]
    #[should_panic(expected = "yielded 1 elements, expected 3")]
    fn short_iterator_panics() {
        let _ = run(3, FromIterPrefix(core::iter::once(1u8)));
    }

    #[test]
    #[should_panic(expected = "yielded 3 elements, expected 2")]
    fn clone_from_rejects_longer_source() {
        let _: Vec<u8> = run(2, CloneFrom(&[1, 2, 3]));
    }

    #[test]
    #[should_panic(expected = "yielded 2 elements, expected 4")]
    fn move_from_rejects_shorter_array() {
        let _: Vec<String> = run(4, MoveFrom(["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn single_slot_initializers() {
        let mut slot = MaybeUninit::<String>::uninit();
        With(|| "built".to_string()).initialize(&mut slot);
        assert_eq!(unsafe { slot.assume_init() }, "built");

        let mut slot = MaybeUninit::<u64>::uninit();
        DefaultValue.initialize(&mut slot);
        assert_eq!(unsafe { slot.assume_init() }, 0);
    }
}
