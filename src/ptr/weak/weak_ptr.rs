use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use super::{WeakFlag, Weakable};
use crate::fail::{InvalidWeakPtr, Violation};
use crate::ptr::{Ref, RefCounted, RefPtr};

/// A weak reference to a [`Weakable`] object. A WeakPtr never keeps its object alive; once the
/// object is destroyed every WeakPtr to it becomes invalid.
///
/// The object can only be accessed by promoting the WeakPtr to a strong reference, either with
/// [`upgrade`](WeakPtr::upgrade), which reports absence as [`None`], or with
/// [`strong_ref`](WeakPtr::strong_ref), which fails fast. There is no atomicity between checking
/// validity and promoting, which is only sound because nothing here is shared between threads.
///
/// # Examples
/// ```
/// # use toolkit::{impl_ref_counted, impl_weakable};
/// # use toolkit::ptr::{Ref, RefCount, WeakPtr, WeakableBase};
/// struct Window {
///     count: RefCount,
///     weak: WeakableBase,
/// }
///
/// impl_ref_counted!(Window, count);
/// impl_weakable!(Window, weak);
///
/// let window = Ref::new(Window { count: RefCount::new(), weak: WeakableBase::new() });
/// let observer = WeakPtr::from(&window);
/// assert!(observer.is_valid());
/// assert!(observer.upgrade().is_some());
///
/// drop(window);
/// assert!(!observer.is_valid());
/// assert!(observer.upgrade().is_none());
/// ```
pub struct WeakPtr<T: RefCounted> {
    pub(crate) flag: RefPtr<WeakFlag>,
    pub(crate) _phantom: PhantomData<*const T>,
}

impl<T: RefCounted> WeakPtr<T> {
    /// Creates an empty WeakPtr, which is never valid.
    pub const fn new() -> WeakPtr<T> {
        WeakPtr::from_flag(RefPtr::null())
    }

    pub(crate) const fn from_flag(flag: RefPtr<WeakFlag>) -> WeakPtr<T> {
        WeakPtr {
            flag,
            _phantom: PhantomData,
        }
    }

    /// Returns true if the WeakPtr observes an object which is still alive.
    pub fn is_valid(&self) -> bool {
        self.flag.get().is_some_and(WeakFlag::is_valid)
    }

    /// Returns a pointer to the observed object if it is still alive. The pointer doesn't carry a
    /// share of the count.
    pub fn as_ptr(&self) -> Option<NonNull<T>> {
        // SAFETY: A WeakPtr<T> is only ever created from a flag that was created for a T.
        self.flag.get().and_then(|flag| unsafe { flag.target() })
    }

    /// Promotes the WeakPtr to a strong reference, or returns [`None`] if the object no longer
    /// exists. An object whose last strong reference has been dropped is never revived, even while
    /// it is still being destroyed.
    pub fn upgrade(&self) -> Option<Ref<T>> {
        let ptr = self.as_ptr()?;

        // SAFETY: The flag is still valid, so the object hasn't been deallocated.
        if unsafe { ptr.as_ref() }.ref_count().get() == 0 {
            return None;
        }

        // SAFETY: The object is alive and managed by strong references, which is a precondition of
        // creating its flag.
        Some(unsafe { Ref::from_raw(ptr) })
    }

    /// Promotes the WeakPtr to a strong reference.
    ///
    /// # Panics
    /// Fails fast if the observed object no longer exists, or if the WeakPtr is empty.
    #[track_caller]
    pub fn strong_ref(&self) -> RefPtr<T> {
        match self.upgrade() {
            Some(strong) => strong.into(),
            None => InvalidWeakPtr.crash(),
        }
    }

    /// Returns the number of references to the shared flag, which includes the one held by the
    /// object while it is alive. Returns 0 for an empty WeakPtr.
    pub fn weak_count(&self) -> u32 {
        self.flag.strong_count()
    }

    /// Stops observing the object, leaving the WeakPtr empty.
    pub fn clear(&mut self) {
        self.flag.clear();
    }

    /// Exchanges the objects observed by two WeakPtrs.
    pub fn swap(&mut self, other: &mut WeakPtr<T>) {
        self.flag.swap(&mut other.flag);
    }

    /// Returns true if both WeakPtrs share the same flag, meaning that they were obtained from the
    /// same object.
    pub fn ptr_eq(&self, other: &WeakPtr<T>) -> bool {
        !self.flag.is_null() && self.flag.ptr_eq(&other.flag)
    }
}

impl<T: RefCounted> Clone for WeakPtr<T> {
    fn clone(&self) -> Self {
        WeakPtr::from_flag(self.flag.clone())
    }
}

impl<T: RefCounted> Default for WeakPtr<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Weakable> From<&Ref<T>> for WeakPtr<T> {
    fn from(value: &Ref<T>) -> Self {
        value.weak_from_this()
    }
}

impl<T: Weakable> From<&RefPtr<T>> for WeakPtr<T> {
    fn from(value: &RefPtr<T>) -> Self {
        match value.get() {
            Some(object) => object.weak_from_this(),
            None => WeakPtr::new(),
        }
    }
}

impl<T: RefCounted> PartialEq for WeakPtr<T> {
    /// WeakPtrs are equal if they observe the same live object, or if neither observes a live
    /// object.
    fn eq(&self, other: &Self) -> bool {
        self.as_ptr() == other.as_ptr()
    }
}

impl<T: RefCounted> Eq for WeakPtr<T> {}

impl<T: RefCounted> Debug for WeakPtr<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakPtr")
            .field("valid", &self.is_valid())
            .field("weak_count", &self.weak_count())
            .finish()
    }
}
