use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Bound, Deref, DerefMut, RangeBounds};
use std::ptr;
use std::slice;

use crate::collections::contiguous::Buffer;
use crate::fail::Violation;
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 1;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection.
///
/// Elements are stored in index order in a single allocation. Indexing (with `[]`), slicing,
/// sorting and borrowed iteration are all provided by the slice that a Vector dereferences to.
///
/// # Time Complexity
/// With `n` elements in the Vector, `i` the index being accessed and `m` elements in another
/// Vector:
///
/// | Method | Complexity |
/// |-|-|
/// | `len`, `get`, `pop` | `O(1)` |
/// | `push` | amortized `O(1)`* |
/// | `insert`, `remove` | `O(n-i)` |
/// | `erase` | `O(n)` |
/// | `replace` | `O(1)` |
/// | `reserve` | `O(n)`* |
/// | `shrink_to_fit` | `O(n)` |
/// | `append` | `O(n+m)` |
/// | `contains` | `O(n)` |
///
/// \* Only when the buffer has to be reallocated, otherwise `O(1)`.
pub struct Vector<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates an empty Vector without allocating. The first allocation happens on the first
    /// push or reservation.
    ///
    /// # Examples
    /// ```
    /// # use toolkit::collections::contiguous::Vector;
    /// let empty: Vector<char> = Vector::new();
    /// assert!(empty.is_empty());
    /// assert_eq!(empty.cap(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            buf: Buffer::new(),
            len: 0,
        }
    }

    /// Creates an empty Vector which allocates room for exactly `cap` elements up front.
    ///
    /// # Panics
    /// Fails fast if the memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use toolkit::collections::contiguous::Vector;
    /// let mut squares: Vector<u32> = Vector::with_cap(4);
    /// squares.extend((1..=4).map(|n| n * n));
    /// assert_eq!(squares.cap(), 4, "no reallocation was needed");
    /// ```
    #[track_caller]
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            buf: Buffer::with_cap(cap),
            len: 0,
        }
    }

    /// Returns the number of elements in the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the length is 0.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the current allocation can hold. The capacity only ever
    /// changes by the amounts documented on each method, never by an allocator's rounding.
    pub const fn cap(&self) -> usize {
        self.buf.cap
    }

    /// Appends `value` to the end, doubling the capacity first if it is exhausted.
    ///
    /// # Panics
    /// Fails fast if the memory layout of the Vector would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use toolkit::collections::contiguous::Vector;
    /// let mut words = Vector::new();
    /// words.push("alpha");
    /// words.push("beta");
    /// assert_eq!(&*words, &["alpha", "beta"]);
    /// ```
    #[track_caller]
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }
        // SAFETY: After growing, len < cap.
        unsafe { self.push_unchecked(value) }
    }

    /// Appends `value` to the end without checking the capacity.
    ///
    /// # Safety
    /// `len` must be less than `cap`, for example after a call to [`reserve`](Vector::reserve).
    pub const unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: The caller guarantees a free slot at len.
        unsafe { self.buf.slot(self.len).write(value); }
        self.len += 1;
    }

    /// Removes the last element and returns it, or [`None`] if the Vector is empty.
    ///
    /// # Examples
    /// ```
    /// # use toolkit::collections::contiguous::Vector;
    /// let mut stack: Vector<_> = ['a', 'b'].into();
    /// assert_eq!(stack.pop(), Some('b'));
    /// assert_eq!(stack.pop(), Some('a'));
    /// assert_eq!(stack.pop(), None);
    /// ```
    pub const fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;

            // SAFETY: The slot at the new len is initialized and is no longer counted, so the value
            // is moved out exactly once.
            Some(unsafe { self.buf.slot(self.len).read() })
        }
    }

    /// An alias of [`push`](Vector::push).
    #[track_caller]
    pub fn push_back(&mut self, value: T) {
        self.push(value);
    }

    /// An alias of [`pop`](Vector::pop).
    pub const fn pop_back(&mut self) -> Option<T> {
        self.pop()
    }

    /// Returns a reference to the element at `index`. Indexing with `[]` goes through the slice
    /// and behaves the same way.
    ///
    /// # Panics
    /// Fails fast if `index` is out of bounds of the Vector.
    #[track_caller]
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Like [`get`](Vector::get), but reports an out of bounds `index` as an [`Err`].
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index has just been checked to be less than len.
        Ok(unsafe { self.get_unchecked(index) })
    }

    /// Returns a mutable reference to the element at the provided `index`.
    ///
    /// # Panics
    /// Fails fast if `index` is out of bounds of the Vector.
    #[track_caller]
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Like [`get_mut`](Vector::get_mut), but reports an out of bounds `index` as an [`Err`].
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index has just been checked to be less than len.
        Ok(unsafe { self.get_unchecked_mut(index) })
    }

    /// Returns a reference to the element at the provided `index` without checking its bounds.
    ///
    /// # Safety
    /// `index` must be less than [`len`](Vector::len).
    pub const unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: The caller guarantees that index < len, so the slot is initialized.
        unsafe { &*self.buf.slot(index) }
    }

    /// Returns a mutable reference to the element at the provided `index` without checking its
    /// bounds.
    ///
    /// # Safety
    /// `index` must be less than [`len`](Vector::len).
    pub const unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: The caller guarantees that index < len, so the slot is initialized.
        unsafe { &mut *self.buf.slot(index) }
    }

    /// Returns a reference to the first element, if there is one.
    pub fn front(&self) -> Option<&T> {
        self.first()
    }

    /// Returns a mutable reference to the first element, if there is one.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.first_mut()
    }

    /// Returns a reference to the last element, if there is one.
    pub fn back(&self) -> Option<&T> {
        self.last()
    }

    /// Returns a mutable reference to the last element, if there is one.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.last_mut()
    }

    /// Places `value` at `index`, shifting every later element back by one. An `index` equal to
    /// the length appends, like [`push`](Vector::push).
    ///
    /// # Panics
    /// Fails fast if `index` is greater than the length of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use toolkit::collections::contiguous::Vector;
    /// let mut letters: Vector<_> = ['b', 'd'].into();
    /// letters.insert(0, 'a');
    /// letters.insert(2, 'c');
    /// letters.insert(4, 'e');
    /// assert_eq!(&*letters, &['a', 'b', 'c', 'd', 'e']);
    /// ```
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Like [`insert`](Vector::insert), but reports an `index` past the end as an [`Err`].
    #[track_caller]
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        if self.len == self.cap() {
            self.grow();
        }

        // SAFETY: index <= len < cap, so both ranges lie within the allocation. Everything from
        // index onwards is shifted back one slot before the value is written into the gap.
        unsafe {
            let slot = self.buf.slot(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            slot.write(value);
        }
        self.len += 1;

        Ok(())
    }

    /// Takes the element at `index` out of the Vector, shifting every later element forward by
    /// one.
    ///
    /// # Panics
    /// Fails fast if `index` is out of bounds of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use toolkit::collections::contiguous::Vector;
    /// let mut primes: Vector<_> = [2, 3, 4, 5].into();
    /// assert_eq!(primes.remove(2), 4);
    /// assert_eq!(&*primes, &[2, 3, 5]);
    /// ```
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Like [`remove`](Vector::remove), but reports an out of bounds `index` as an [`Err`].
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        // SAFETY: index < len, so the value is initialized. Once it has been read out, the
        // following values are shifted forward to fill the gap.
        let value = unsafe {
            let slot = self.buf.slot(index);
            let value = slot.read();
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            value
        };
        self.len -= 1;

        Ok(value)
    }

    /// Removes and drops all elements within `range`, moving the following values to fill in the
    /// gap.
    ///
    /// # Panics
    /// Fails fast if the range is decreasing or extends past the end of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use toolkit::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..8).collect();
    /// vec.erase(2..5);
    /// assert_eq!(&*vec, &[0, 1, 5, 6, 7]);
    /// vec.erase(3..);
    /// assert_eq!(&*vec, &[0, 1, 5]);
    /// ```
    #[track_caller]
    pub fn erase<R: RangeBounds<usize>>(&mut self, range: R) {
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => self.len,
        };

        if end > self.len {
            IndexOutOfBounds {
                index: end - 1,
                len: self.len,
            }.crash()
        }
        crate::verify!(start <= end, "erased range {}..{} is decreasing", start, end);

        let old_len = self.len;
        // Shorten first, so that a panicking drop leaks the tail rather than double dropping.
        self.len = start;

        // SAFETY: [start, end) is within the initialized part of the Vector and no longer counted
        // by len. The tail is then moved forward over the erased slots.
        unsafe {
            let slot = self.buf.slot(start);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(slot, end - start));
            ptr::copy(self.buf.slot(end), slot, old_len - end);
        }
        self.len = old_len - (end - start);
    }

    /// Swaps `new_value` into the slot at `index`, handing back the value it held.
    ///
    /// # Panics
    /// Fails fast if `index` is out of bounds of the Vector.
    #[track_caller]
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        std::mem::replace(self.get_mut(index), new_value)
    }

    /// Makes room for at least `extra` more elements. If reallocation is needed, the new capacity
    /// is exactly `len + extra`.
    ///
    /// # Panics
    /// Fails fast if the required allocation would be larger than [`isize::MAX`] bytes.
    #[track_caller]
    pub fn reserve(&mut self, extra: usize) {
        let new_cap = self.len.checked_add(extra).ok_or(CapacityOverflow).throw();

        if new_cap <= self.cap() { return; }

        self.buf.realloc(new_cap);
    }

    /// Reallocates so that the capacity matches the length, freeing the buffer entirely when the
    /// Vector is empty.
    pub fn shrink_to_fit(&mut self) {
        self.buf.realloc(self.len);
    }

    /// Shortens the Vector to `len` elements, dropping the rest. Does nothing if the Vector is
    /// already no longer than `len`. The capacity is unaffected.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len { return; }

        let old_len = self.len;
        self.len = len;

        // SAFETY: [len, old_len) is initialized and no longer counted by self.len.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.slot(len), old_len - len));
        }
    }

    /// Drops all elements, leaving the capacity unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Resizes the Vector to `new_len`, filling any new slots with values produced by `f`.
    #[track_caller]
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, mut f: F) {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }

        self.reserve(new_len - self.len);
        while self.len < new_len {
            // SAFETY: Enough capacity for new_len elements has just been reserved.
            unsafe { self.push_unchecked(f()); }
        }
    }

    /// Appends all elements from `other` to self, leaving `other` to deallocate its empty buffer.
    ///
    /// # Panics
    /// Fails fast if the memory layout of the Vector would have a size that exceeds
    /// [`isize::MAX`].
    #[track_caller]
    pub fn append(&mut self, mut other: Vector<T>) {
        self.grow_for(other.len);

        // SAFETY: self has room from len to len + other.len and other is initialized from 0 to
        // other.len. The two allocations can't overlap.
        unsafe {
            ptr::copy_nonoverlapping(
                other.buf.slot(0).cast_const(),
                self.buf.slot(self.len),
                other.len,
            );
        }

        self.len += other.len;
        // The values have been moved, so other must no longer drop them.
        other.len = 0;
    }

    /// Exchanges the contents of two Vectors.
    pub const fn swap(&mut self, other: &mut Vector<T>) {
        std::mem::swap(self, other);
    }

    /// Doubles the capacity, starting from [`MIN_CAP`].
    ///
    /// # Panics
    /// Fails fast on capacity overflow.
    #[track_caller]
    pub(crate) fn grow(&mut self) {
        let new_cap = self.cap().checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw();
        self.buf.realloc(cmp::max(new_cap, MIN_CAP));
    }

    /// Makes room for `extra` more elements. Unlike [`reserve`](Vector::reserve), the capacity is
    /// at least doubled whenever it has to change, so repeated calls stay amortized `O(1)` per
    /// element.
    ///
    /// # Panics
    /// Fails fast on capacity overflow.
    #[track_caller]
    pub(crate) fn grow_for(&mut self, extra: usize) {
        let required = self.len.checked_add(extra).ok_or(CapacityOverflow).throw();

        if required <= self.cap() { return; }

        let doubled = self.cap().saturating_mul(GROWTH_FACTOR);
        self.buf.realloc(cmp::max(cmp::max(required, doubled), MIN_CAP));
    }

    /// Returns an [`Err`] unless `index` refers to an element.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }
}

impl<T: Default> Vector<T> {
    /// Creates a new Vector containing `count` default values.
    #[track_caller]
    pub fn repeat_default(count: usize) -> Vector<T> {
        let mut vec = Vector::new();
        vec.resize(count);
        vec
    }

    /// Resizes the Vector to `new_len`, filling any new slots with the default value of `T`.
    #[track_caller]
    pub fn resize(&mut self, new_len: usize) {
        self.resize_with(new_len, T::default);
    }
}

impl<T: Clone> Vector<T> {
    /// Creates a new Vector containing `count` clones of `item`.
    ///
    /// # Examples
    /// ```
    /// # use toolkit::collections::contiguous::Vector;
    /// let vec = Vector::repeat_item('a', 3);
    /// assert_eq!(&*vec, &['a', 'a', 'a']);
    /// assert_eq!(vec.cap(), 3);
    /// ```
    #[track_caller]
    pub fn repeat_item(item: T, count: usize) -> Vector<T> {
        let mut vec = Vector::new();
        vec.resize_with_value(count, item);
        vec
    }

    /// Resizes the Vector to `new_len`, filling any new slots with clones of `value`.
    #[track_caller]
    pub fn resize_with_value(&mut self, new_len: usize, value: T) {
        self.resize_with(new_len, || value.clone());
    }
}

impl<T: PartialEq> Vector<T> {
    /// Returns true if the Vector contains an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Returns the index of the first element equal to `item`, if there is one.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.grow_for(iter.size_hint().0);

        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Vector<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Vector::new();
        vec.extend(iter);
        vec
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // Drop all initialized values in place, the buffer then deallocates itself.
        self.clear();
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The first len slots are initialized, properly aligned and contained within one
        // allocation, which is no larger than isize::MAX bytes.
        unsafe { slice::from_raw_parts(self.buf.ptr.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, with the mutable borrow of self preventing any other access.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr.as_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

// SAFETY: A Vector uniquely owns its buffer, so it is safe to Send when T: Send.
unsafe impl<T: Send> Send for Vector<T> {}
// SAFETY: &Vector only ever exposes &T, with no interior mutability of its own.
unsafe impl<T: Sync> Sync for Vector<T> {}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Vector::with_cap(self.len);

        for value in self.iter() {
            // SAFETY: vec has been created with enough capacity for every element.
            unsafe { vec.push_unchecked(value.clone()); }
        }

        vec
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Display> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, value) in self.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
