#![doc = crate::doc_macro::svgbob_doc!(
//! Owned storage for a run of possibly-uninitialized slots.
//!
//! [`RawBuf<T>`] knows how many slots it owns but not how many of them hold a
//! live `T`. That count lives in [`GrowVec`][crate::GrowVec], which is the only
//! place that constructs into, destroys, or reads from the slots:
//!
//! ```svgbob
//! "GrowVec"
//! +----------+
//! | ptr      |---.
//! | len: 3   |   |
//! | cap: 8   |   |
//! +----------+   |
//!                v
//!      +-----+-----+-----+-----+-----+-----+-----+-----+
//!      | "a" | "b" | "c" |  ?  |  ?  |  ?  |  ?  |  ?  |
//!      +-----+-----+-----+-----+-----+-----+-----+-----+
//!      |<------ live --->|<------- uninitialized ----->|
//! ```
//!
//! Relocation moves the live prefix into a fresh allocation and frees the old
//! one. Dropping a `RawBuf` frees the allocation without touching the slots.
)]

use crate::error::{Error, Result};

use alloc::alloc::{alloc, dealloc, handle_alloc_error, Layout};
use core::marker::PhantomData;
use core::mem::{self, MaybeUninit};
use core::ptr::{self, NonNull};

#[inline(never)]
#[cold]
pub(crate) fn capacity_overflow() -> ! {
    panic!("Capacity overflow")
}

#[inline]
fn array_layout<T>(cap: usize) -> Result<Layout> {
    Layout::array::<T>(cap).map_err(|_| Error::CapacityOverflow { requested: cap })
}

pub(crate) struct RawBuf<T> {
    // Dangling whenever `cap == 0` or `T` is zero-sized.
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// Safety: RawBuf uniquely owns its allocation, exactly like Box<[T]>.
unsafe impl<T: Send> Send for RawBuf<T> {}
// Safety: shared access to RawBuf only hands out shared access to the slots.
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    #[inline]
    pub(crate) const fn new() -> Self {
        RawBuf {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    pub(crate) fn with_capacity(cap: usize) -> Self {
        let mut buf = Self::new();
        if cap > 0 {
            // Safety: no slots are live.
            unsafe { buf.relocate(cap, 0) };
        }
        buf
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    fn try_allocate(cap: usize) -> Result<NonNull<T>> {
        let layout = array_layout::<T>(cap)?;
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }
        // Safety: layout has non-zero size.
        let ptr = unsafe { alloc(layout) } as *mut T;
        NonNull::new(ptr).ok_or(Error::AllocFailed {
            size: layout.size(),
            align: layout.align(),
        })
    }

    /// Moves the first `live` slots into a fresh allocation of `new_cap` slots, then
    /// frees the old allocation. On error nothing has moved.
    ///
    /// # Safety
    ///
    /// * `live <= self.capacity()` and `live <= new_cap`.
    /// * slots `[0, live)` hold initialized values.
    pub(crate) unsafe fn try_relocate(&mut self, new_cap: usize, live: usize) -> Result<()> {
        debug_assert!(live <= self.cap && live <= new_cap);
        let new_ptr = Self::try_allocate(new_cap)?;
        log::trace!(
            "relocating {} of {} slots into a buffer of {}",
            live,
            self.cap,
            new_cap
        );
        ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), live);
        self.free();
        self.ptr = new_ptr;
        self.cap = new_cap;
        Ok(())
    }

    /// Infallible [`Self::try_relocate`]: overflow panics, allocator failure aborts
    /// through [`handle_alloc_error`].
    ///
    /// # Safety
    ///
    /// Same as [`Self::try_relocate`].
    pub(crate) unsafe fn relocate(&mut self, new_cap: usize, live: usize) {
        match self.try_relocate(new_cap, live) {
            Ok(()) => {}
            Err(Error::AllocFailed { size, align }) => {
                log::error!("failed allocation of {} bytes for {} slots", size, new_cap);
                match Layout::from_size_align(size, align) {
                    Ok(layout) => handle_alloc_error(layout),
                    Err(_) => capacity_overflow(),
                }
            }
            Err(_) => capacity_overflow(),
        }
    }

    /// Frees the allocation and returns to the zero-capacity state. Live slots, if
    /// any, must already have been dropped or moved out.
    pub(crate) fn release(&mut self) {
        self.free();
        self.ptr = NonNull::dangling();
        self.cap = 0;
    }

    fn free(&mut self) {
        if self.cap == 0 || Self::IS_ZST {
            return;
        }
        unsafe {
            // Safety: this exact layout was accepted by `try_allocate`.
            let layout =
                Layout::from_size_align_unchecked(mem::size_of::<T>() * self.cap, mem::align_of::<T>());
            dealloc(self.ptr.as_ptr() as *mut u8, layout);
        }
    }

    /// # Safety
    ///
    /// `index <= self.capacity()`.
    #[inline(always)]
    pub(crate) unsafe fn slot(&self, index: usize) -> *mut T {
        debug_assert!(index <= self.cap);
        self.ptr.as_ptr().add(index)
    }

    /// Moves `count` slots from `from` to `to`. The ranges may overlap; the source
    /// slots are left logically uninitialized.
    ///
    /// # Safety
    ///
    /// Both ranges must be within capacity.
    #[inline]
    pub(crate) unsafe fn shift(&mut self, from: usize, to: usize, count: usize) {
        debug_assert!(from + count <= self.cap && to + count <= self.cap);
        ptr::copy(self.slot(from), self.slot(to), count);
    }

    /// # Safety
    ///
    /// `[start, start + count)` must be within capacity and hold no live values.
    #[inline]
    pub(crate) unsafe fn vacant_mut(&mut self, start: usize, count: usize) -> &mut [MaybeUninit<T>] {
        debug_assert!(start + count <= self.cap);
        core::slice::from_raw_parts_mut(self.slot(start) as *mut MaybeUninit<T>, count)
    }

    /// # Safety
    ///
    /// `[start, start + count)` must hold live values, which are dead afterwards.
    #[inline]
    pub(crate) unsafe fn drop_range(&mut self, start: usize, count: usize) {
        ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.slot(start), count));
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        self.free();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};

    #[test]
    fn empty_buffer_owns_nothing() {
        let buf = RawBuf::<u64>::new();
        assert_eq!(buf.capacity(), 0);
        assert_eq!(buf.ptr(), NonNull::<u64>::dangling().as_ptr());
    }

    #[test]
    fn relocation_keeps_live_prefix() {
        let mut buf = RawBuf::<String>::with_capacity(2);
        unsafe {
            buf.slot(0).write("a".to_string());
            buf.slot(1).write("b".to_string());
            buf.relocate(5, 2);
            assert_eq!(buf.capacity(), 5);
            assert_eq!(&*buf.slot(0), "a");
            assert_eq!(&*buf.slot(1), "b");
            buf.drop_range(0, 2);
        }
    }

    #[test]
    fn shift_handles_overlap() {
        let mut buf = RawBuf::<u32>::with_capacity(6);
        unsafe {
            for i in 0..4 {
                buf.slot(i).write(i as u32 + 1);
            }
            buf.shift(1, 3, 3);
            assert_eq!(*buf.slot(3), 2);
            assert_eq!(*buf.slot(4), 3);
            assert_eq!(*buf.slot(5), 4);
        }
    }

    #[test]
    fn release_resets_to_zero_capacity() {
        let mut buf = RawBuf::<u8>::with_capacity(16);
        buf.release();
        assert_eq!(buf.capacity(), 0);
        buf.release();
    }

    #[test]
    fn zero_sized_slots_never_allocate() {
        let mut buf = RawBuf::<()>::with_capacity(usize::MAX / 4);
        assert_eq!(buf.capacity(), usize::MAX / 4);
        assert_eq!(buf.ptr(), NonNull::<()>::dangling().as_ptr());
        unsafe { buf.relocate(usize::MAX / 2, 0) };
        assert_eq!(buf.capacity(), usize::MAX / 2);
    }

    #[test]
    fn oversized_request_is_reported() {
        let mut buf = RawBuf::<u64>::new();
        let err = unsafe { buf.try_relocate(usize::MAX, 0) };
        assert_eq!(err, Err(Error::CapacityOverflow { requested: usize::MAX }));
        assert_eq!(buf.capacity(), 0);
    }
}
