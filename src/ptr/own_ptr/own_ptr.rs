use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Formatter, Pointer};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};

use crate::fail::{EmptyOwnPtr, Violation};

/// A pointer which is the sole owner of a heap-allocated value. Similar to a [`Box<T>`], except
/// that an OwnPtr can be empty.
///
/// An OwnPtr can't be cloned: ownership is transferred by moving it. Rather than leaving a
/// moved-from value behind, the methods which give up ownership ([`take`](OwnPtr::take),
/// [`release`](OwnPtr::release)) leave the OwnPtr empty, and any attempt to access the value of an
/// empty OwnPtr fails fast.
///
/// There is deliberately no [`PartialEq`] implementation. An object only has one exclusive owner,
/// so two OwnPtrs can only ever be equal when both are empty.
///
/// # Examples
/// ```
/// # use toolkit::ptr::OwnPtr;
/// let mut a = OwnPtr::new(String::from("owned"));
/// a.push('!');
///
/// let b = a.take();
/// assert!(a.is_null());
/// assert_eq!(&*b, "owned!");
/// ```
pub struct OwnPtr<T: ?Sized> {
    pub(crate) ptr: Option<NonNull<T>>,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> OwnPtr<T> {
    /// Allocates `value` on the heap and takes ownership of it.
    pub fn new(value: T) -> OwnPtr<T> {
        OwnPtr::from_box(Box::new(value))
    }
}

impl<T: ?Sized> OwnPtr<T> {
    /// Creates an OwnPtr which doesn't own anything.
    pub const fn null() -> OwnPtr<T> {
        OwnPtr {
            ptr: None,
            _phantom: PhantomData,
        }
    }

    /// Takes ownership of the value held by a [`Box`]. This is also the way to create an OwnPtr to
    /// an unsized type, by letting the Box coerce first.
    ///
    /// # Examples
    /// ```
    /// # use toolkit::ptr::OwnPtr;
    /// # use std::fmt::Display;
    /// let boxed: Box<dyn Display> = Box::new(5_u8);
    /// let ptr = OwnPtr::from_box(boxed);
    /// assert_eq!(ptr.to_string(), "5");
    /// ```
    pub fn from_box(value: Box<T>) -> OwnPtr<T> {
        OwnPtr {
            ptr: Some(NonNull::from(Box::leak(value))),
            _phantom: PhantomData,
        }
    }

    /// Takes ownership of a raw allocation. A null `ptr` creates an empty OwnPtr.
    ///
    /// # Safety
    /// If non-null, `ptr` must have been allocated by the global allocator in the way [`Box`]
    /// allocates, for example by [`Box::into_raw`], and must not be owned by anything else.
    pub unsafe fn from_raw(ptr: *mut T) -> OwnPtr<T> {
        OwnPtr {
            ptr: NonNull::new(ptr),
            _phantom: PhantomData,
        }
    }

    /// Returns true if the OwnPtr doesn't own a value.
    pub const fn is_null(&self) -> bool {
        self.ptr.is_none()
    }

    /// Returns the pointer to the owned value, if there is one. Ownership is retained.
    pub const fn as_ptr(&self) -> Option<NonNull<T>> {
        self.ptr
    }

    /// Returns true if the OwnPtr owns the value located at `other`, or if both are null.
    pub fn points_to(&self, other: *const T) -> bool {
        match self.ptr {
            Some(owned) => ptr::addr_eq(owned.as_ptr(), other),
            None => other.is_null(),
        }
    }

    /// Returns a reference to the owned value, if there is one.
    pub fn get(&self) -> Option<&T> {
        // SAFETY: The pointer is uniquely owned by self and valid for the lifetime of the borrow.
        self.ptr.map(|ptr| unsafe { ptr.as_ref() })
    }

    /// Returns a mutable reference to the owned value, if there is one.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        // SAFETY: The pointer is uniquely owned by self, which is mutably borrowed.
        self.ptr.map(|mut ptr| unsafe { ptr.as_mut() })
    }

    /// Gives up ownership of the held value without dropping it, leaving the OwnPtr empty. The
    /// caller becomes responsible for freeing the returned allocation, which can be done by
    /// passing it back to [`OwnPtr::from_raw`] or [`Box::from_raw`].
    #[must_use = "the released allocation is leaked unless it is freed"]
    pub const fn release(&mut self) -> Option<NonNull<T>> {
        self.ptr.take()
    }

    /// Converts the OwnPtr into a [`Box`], which is never empty.
    ///
    /// # Panics
    /// Fails fast if the OwnPtr is empty.
    #[track_caller]
    pub fn into_box(mut self) -> Box<T> {
        match self.release() {
            // SAFETY: Every held pointer was allocated as a Box and is exclusively owned by self.
            Some(ptr) => unsafe { Box::from_raw(ptr.as_ptr()) },
            None => EmptyOwnPtr.crash(),
        }
    }

    /// Moves the owned value out into a new OwnPtr, leaving this one empty.
    pub const fn take(&mut self) -> OwnPtr<T> {
        OwnPtr {
            ptr: self.release(),
            _phantom: PhantomData,
        }
    }

    /// Replaces the owned value with the one owned by `other`, dropping the previous value.
    ///
    /// The new value is moved into a temporary which is then swapped with self, so assigning an
    /// OwnPtr never leaves self in a partially updated state.
    pub fn assign(&mut self, other: OwnPtr<T>) {
        let mut temp = other;
        self.swap(&mut temp);
    }

    /// Drops the owned value, if any, leaving the OwnPtr empty.
    pub fn clear(&mut self) {
        self.assign(OwnPtr::null());
    }

    /// Exchanges the values owned by two OwnPtrs.
    pub fn swap(&mut self, other: &mut OwnPtr<T>) {
        mem::swap(&mut self.ptr, &mut other.ptr);
    }
}

impl<T: ?Sized> Deref for OwnPtr<T> {
    type Target = T;

    #[track_caller]
    fn deref(&self) -> &Self::Target {
        match self.get() {
            Some(value) => value,
            None => EmptyOwnPtr.crash(),
        }
    }
}

impl<T: ?Sized> DerefMut for OwnPtr<T> {
    #[track_caller]
    fn deref_mut(&mut self) -> &mut Self::Target {
        match self.get_mut() {
            Some(value) => value,
            None => EmptyOwnPtr.crash(),
        }
    }
}

impl<T: ?Sized> AsRef<T> for OwnPtr<T> {
    fn as_ref(&self) -> &T {
        self
    }
}

impl<T: ?Sized> AsMut<T> for OwnPtr<T> {
    fn as_mut(&mut self) -> &mut T {
        self
    }
}

impl<T: ?Sized> Borrow<T> for OwnPtr<T> {
    fn borrow(&self) -> &T {
        self
    }
}

impl<T: ?Sized> BorrowMut<T> for OwnPtr<T> {
    fn borrow_mut(&mut self) -> &mut T {
        self
    }
}

impl<T: ?Sized> Drop for OwnPtr<T> {
    fn drop(&mut self) {
        if let Some(ptr) = self.release() {
            // SAFETY: Every held pointer was allocated as a Box and is exclusively owned by self.
            drop(unsafe { Box::from_raw(ptr.as_ptr()) });
        }
    }
}

impl<T: ?Sized> Default for OwnPtr<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: ?Sized> From<Box<T>> for OwnPtr<T> {
    fn from(value: Box<T>) -> Self {
        OwnPtr::from_box(value)
    }
}

// SAFETY: An OwnPtr uniquely owns its value, exactly like a Box, so it is Send when T: Send.
unsafe impl<T: ?Sized + Send> Send for OwnPtr<T> {}
// SAFETY: OwnPtr only hands out shared references through &self, so it is Sync when T: Sync.
unsafe impl<T: ?Sized + Sync> Sync for OwnPtr<T> {}

impl<T: ?Sized + Debug> Debug for OwnPtr<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => f.debug_tuple("OwnPtr").field(&value).finish(),
            None => write!(f, "OwnPtr(null)"),
        }
    }
}

impl<T: ?Sized> Pointer for OwnPtr<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.ptr {
            Some(ptr) => Pointer::fmt(&ptr, f),
            None => write!(f, "null"),
        }
    }
}
