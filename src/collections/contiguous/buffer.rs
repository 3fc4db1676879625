use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// An uninitialized heap allocation with room for `cap` values of `T`. A Buffer never reads,
/// writes or drops the values it holds, that is left to its owner. Dropping a Buffer only
/// deallocates its memory.
///
/// Zero-sized layouts (including any capacity of a zero-sized type) are never allocated, the
/// pointer is left dangling instead.
pub(crate) struct Buffer<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Buffer<T> {
    /// Creates a Buffer with capacity 0, without allocating.
    pub(crate) const fn new() -> Buffer<T> {
        Buffer {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a Buffer with exactly `cap` slots.
    ///
    /// # Panics
    /// Fails fast if the memory layout size exceeds [`isize::MAX`].
    #[track_caller]
    pub(crate) fn with_cap(cap: usize) -> Buffer<T> {
        let mut buf = Buffer::new();
        buf.realloc(cap);
        buf
    }

    /// Returns a pointer to the slot at `index`.
    ///
    /// # Safety
    /// `index` must be `<= cap`, so that the resulting pointer is within or one past the end of
    /// the allocation.
    pub(crate) const unsafe fn slot(&self, index: usize) -> *mut T {
        // SAFETY: The caller guarantees that the offset stays within the allocation.
        unsafe { self.ptr.as_ptr().add(index) }
    }

    /// Resizes the allocation to hold exactly `new_cap` slots, moving its contents if required.
    /// The contents of any slots beyond `new_cap` are discarded without being dropped.
    ///
    /// # Panics
    /// Fails fast if the memory layout size exceeds [`isize::MAX`].
    #[track_caller]
    pub(crate) fn realloc(&mut self, new_cap: usize) {
        if new_cap == self.cap {
            return;
        }

        let old_layout = Buffer::<T>::make_layout(self.cap);
        let new_layout = Buffer::<T>::make_layout(new_cap);

        let new_ptr = match (old_layout.size(), new_layout.size()) {
            (0, 0) => NonNull::dangling(),
            (_, 0) => {
                // SAFETY: The allocation was made with old_layout by the global allocator.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), old_layout) };
                NonNull::dangling()
            },
            (0, _) => {
                // SAFETY: new_layout has a non-zero size.
                let raw_ptr = unsafe { alloc::alloc(new_layout) };
                NonNull::new(raw_ptr.cast()).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
            (_, new_size) => {
                // SAFETY: The allocation was made with old_layout by the global allocator and the
                // new size is non-zero and doesn't exceed isize::MAX once aligned.
                let raw_ptr = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_size)
                };
                NonNull::new(raw_ptr.cast()).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };

        self.ptr = new_ptr;
        self.cap = new_cap;
    }

    /// Creates the [`Layout`] of an allocation holding `cap` values of `T`.
    ///
    /// # Panics
    /// Fails fast if the layout size exceeds [`isize::MAX`].
    #[track_caller]
    pub(crate) fn make_layout(cap: usize) -> Layout {
        Layout::array::<T>(cap).map_err(|_| CapacityOverflow).throw()
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        let layout = Buffer::<T>::make_layout(self.cap);

        if layout.size() != 0 {
            // SAFETY: Non-zero layouts are always allocated by the global allocator, using the
            // layout for the current capacity.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}
