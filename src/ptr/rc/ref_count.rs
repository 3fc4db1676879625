use std::any::Any;
use std::cell::Cell;
use std::fmt::{self, Debug, Formatter};
use std::ptr::{self, NonNull};

use crate::fail::{CountOverflow, CountUnderflow, Violation};

/// The counter embedded in every [`RefCounted`] object, recording how many strong handles
/// currently point to it.
///
/// A RefCount always starts at zero and is only ever changed by the strong handles, [`Ref`] and
/// [`RefPtr`]. It can't be cloned: copying an object doesn't copy its owners.
///
/// Alongside the count, a RefCount remembers the pointer that the first strong handle was created
/// from. A handle rebuilt from a plain `&T` (see [`Ref::from_object`]) reuses that pointer, because
/// a pointer derived from a shared reference may never be used to drop or free the object.
///
/// [`Ref`]: super::Ref
/// [`Ref::from_object`]: super::Ref::from_object
/// [`RefPtr`]: super::RefPtr
pub struct RefCount {
    count: Cell<u32>,
    owner: Cell<Option<NonNull<()>>>,
}

impl RefCount {
    /// Creates a new RefCount with a count of 0.
    pub const fn new() -> RefCount {
        RefCount {
            count: Cell::new(0),
            owner: Cell::new(None),
        }
    }

    /// Returns the number of strong handles currently sharing the object.
    pub fn get(&self) -> u32 {
        self.count.get()
    }

    /// Increments the count.
    ///
    /// # Panics
    /// Fails fast if the count would overflow.
    #[track_caller]
    pub(crate) fn increment(&self) {
        match self.count.get().checked_add(1) {
            Some(count) => self.count.set(count),
            None => CountOverflow.crash(),
        }
    }

    /// Decrements the count, returning true if the last owner has just been released.
    ///
    /// # Panics
    /// Fails fast if the count is already 0.
    #[track_caller]
    pub(crate) fn decrement(&self) -> bool {
        match self.count.get().checked_sub(1) {
            Some(count) => {
                self.count.set(count);
                count == 0
            },
            None => CountUnderflow.crash(),
        }
    }

    /// Records the pointer through which the strong handles manage the object. Only the first
    /// pointer is kept, later calls have no effect.
    pub(crate) fn set_owner(&self, owner: NonNull<()>) {
        if self.owner.get().is_none() {
            self.owner.set(Some(owner));
        }
    }

    /// Returns the pointer through which the strong handles manage `object`, or [`None`] if no
    /// strong handle currently owns it.
    pub(crate) fn managed<T: RefCounted>(object: &T) -> Option<NonNull<T>> {
        let count = object.ref_count();
        let owner = count.owner.get()?;

        if count.get() == 0 || !ptr::addr_eq(owner.as_ptr(), object) {
            return None;
        }
        Some(owner.cast())
    }
}

impl Default for RefCount {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for RefCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RefCount").field(&self.get()).finish()
    }
}

/// The capability of being shared through reference counting. Implementing this trait is what
/// allows a type to be held by a [`Ref`](super::Ref) or [`RefPtr`](super::RefPtr).
///
/// Most types can use [`impl_ref_counted!`](crate::impl_ref_counted) rather than implementing this
/// by hand.
///
/// # Safety
/// [`ref_count`](RefCounted::ref_count) must always return the same [`RefCount`], which has to be
/// embedded in the object itself and must not be returned by any other object, including objects
/// that contain or are contained by this one. The strong handles rely on a non-zero count to mean
/// that the object occupies a whole allocation which they manage.
pub unsafe trait RefCounted {
    fn ref_count(&self) -> &RefCount;
}

/// Implements [`RefCounted`] for a type by naming its [`RefCount`] field.
///
/// # Examples
/// ```
/// # use toolkit::impl_ref_counted;
/// # use toolkit::ptr::{Ref, RefCount};
/// struct Node {
///     count: RefCount,
///     value: u32,
/// }
///
/// impl_ref_counted!(Node, count);
///
/// let node = Ref::new(Node { count: RefCount::new(), value: 5 });
/// assert_eq!(node.value, 5);
/// assert_eq!(Ref::strong_count(&node), 1);
/// ```
#[macro_export]
macro_rules! impl_ref_counted {
    ($ty:ty, $field:ident) => {
        // SAFETY: The RefCount is a field of the object itself and can't belong to anything else.
        unsafe impl $crate::ptr::RefCounted for $ty {
            fn ref_count(&self) -> &$crate::ptr::RefCount {
                &self.$field
            }
        }
    };
}

/// Increments the count of `object` on behalf of a new strong owner.
///
/// # Safety
/// `object` must be the entire contents of an allocation created as a [`Box`], which is managed by
/// the strong handles, and every call must eventually be balanced by a call to [`dec_ref`] with a
/// pointer that is allowed to free that allocation.
#[track_caller]
pub unsafe fn inc_ref<T: ?Sized + RefCounted>(object: &T) {
    object.ref_count().increment();
}

/// Decrements the count of the object behind `object`, dropping and deallocating it if this was the
/// last strong owner.
///
/// # Safety
/// `object` must point to a live object upholding the requirements of [`inc_ref`], and the caller
/// must be giving up one previously counted ownership claim, after which it must not access the
/// object through that claim again.
///
/// # Panics
/// Fails fast if the count is already 0.
#[track_caller]
pub unsafe fn dec_ref<T: ?Sized + RefCounted>(object: NonNull<T>) {
    // SAFETY: The caller guarantees that the object is still alive.
    let last = unsafe { object.as_ref() }.ref_count().decrement();

    if last {
        // SAFETY: The object was allocated as a Box and no owner remains to observe it.
        drop(unsafe { Box::from_raw(object.as_ptr()) });
    }
}

/// Runtime type information for reference counted objects which are held through a trait object.
/// Implemented for every `'static` type, so it only needs to be named as a supertrait.
///
/// # Examples
/// ```
/// # use toolkit::{coerce, impl_ref_counted};
/// # use toolkit::ptr::{Downcast, RefCount, RefCounted, RefPtr};
/// trait Shape: RefCounted + Downcast {}
///
/// struct Square {
///     count: RefCount,
/// }
///
/// impl_ref_counted!(Square, count);
/// impl Shape for Square {}
///
/// let square = RefPtr::new(Square { count: RefCount::new() });
/// let shape: RefPtr<dyn Shape> = square.static_cast(coerce!(dyn Shape));
/// assert!(!shape.dynamic_cast::<Square>().is_null());
/// ```
pub trait Downcast: Any {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> Downcast for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}
