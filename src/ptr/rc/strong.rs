use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter, Pointer};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::Deref;
use std::ptr::{self, NonNull};

use super::{RefCount, RefCounted, RefPtr, dec_ref, inc_ref};
use crate::fail::{Unowned, Violation};

/// A non-null strong reference to a [`RefCounted`] object.
///
/// Every Ref holds one share of the object's count. Cloning a Ref increments the count, dropping
/// it decrements the count and the object is dropped along with the last strong reference. A Ref
/// can't be empty, see [`RefPtr`] for a nullable equivalent which shares the same count.
///
/// Like [`Rc`](std::rc::Rc), the methods of Ref are associated functions, so that they don't
/// shadow the methods of the referenced object.
///
/// Two Refs are equal if they reference the same object, regardless of its value.
///
/// # Examples
/// ```
/// # use toolkit::impl_ref_counted;
/// # use toolkit::ptr::{Ref, RefCount};
/// # use std::cell::Cell;
/// struct Counter {
///     count: RefCount,
///     hits: Cell<u32>,
/// }
///
/// impl_ref_counted!(Counter, count);
///
/// let a = Ref::new(Counter { count: RefCount::new(), hits: Cell::new(0) });
/// let b = a.clone();
/// b.hits.set(b.hits.get() + 1);
///
/// assert_eq!(a.hits.get(), 1);
/// assert_eq!(Ref::strong_count(&a), 2);
/// assert!(a == b);
/// ```
pub struct Ref<T: ?Sized + RefCounted> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T: RefCounted> Ref<T> {
    /// Moves `value` to the heap and creates the first strong reference to it.
    pub fn new(value: T) -> Ref<T> {
        Ref::from_box(Box::new(value))
    }

    /// Creates another strong reference to an object which is already shared by strong
    /// references, such as `self` inside one of its methods.
    ///
    /// The new Ref uses the pointer recorded when the object was first shared, never one derived
    /// from `object`. That pointer is thin, so this is only available for sized types: a trait
    /// object has to be shared by cloning or casting an existing handle.
    ///
    /// # Panics
    /// Fails fast if no strong reference currently owns `object`, because then it can't be known
    /// to live on the heap.
    #[track_caller]
    pub fn from_object(object: &T) -> Ref<T> {
        match RefCount::managed(object) {
            // SAFETY: The pointer is the one the strong references manage the object through.
            Some(ptr) => unsafe { Ref::from_raw(ptr) },
            None => Unowned.crash(),
        }
    }
}

impl<T: ?Sized + RefCounted> Ref<T> {
    /// Takes ownership of a boxed object, creating the first strong reference to it. This is also
    /// the way to create a Ref to an unsized type, by letting the Box coerce first.
    #[track_caller]
    pub fn from_box(value: Box<T>) -> Ref<T> {
        let ptr = NonNull::from(Box::leak(value));
        // SAFETY: The object occupies an entire Box allocation, which is now managed by this Ref.
        unsafe { Ref::from_raw(ptr) }
    }

    /// Creates a strong reference from a raw pointer, incrementing the count.
    ///
    /// # Safety
    /// `ptr` must point to a live object allocated as a [`Box`], which is either already managed by
    /// the strong references or isn't owned by anything else. It must be derived from the Box or
    /// from another strong handle's pointer, not from a reference to the object.
    #[track_caller]
    pub unsafe fn from_raw(ptr: NonNull<T>) -> Ref<T> {
        // SAFETY: The caller guarantees that ptr is valid.
        let object = unsafe { ptr.as_ref() };
        object.ref_count().set_owner(ptr.cast());
        // SAFETY: The object is managed by the strong references from here on.
        unsafe { inc_ref(object); }
        Ref {
            ptr,
            _phantom: PhantomData,
        }
    }

    /// Creates a strong reference from a raw pointer without changing the count, taking over a
    /// share previously given up by [`Ref::leak`] or [`RefPtr::release`].
    ///
    /// # Safety
    /// `ptr` must carry a counted share which isn't claimed by anything else.
    pub const unsafe fn adopt(ptr: NonNull<T>) -> Ref<T> {
        Ref {
            ptr,
            _phantom: PhantomData,
        }
    }

    /// Consumes the Ref without decrementing the count, returning the pointer it held. The share of
    /// the count is leaked unless it is later reclaimed with [`Ref::adopt`].
    #[must_use = "the share of the count is leaked unless it is adopted again"]
    pub fn leak(this: Ref<T>) -> NonNull<T> {
        let ptr = this.ptr;
        mem::forget(this);
        ptr
    }

    /// Returns the pointer to the referenced object, without affecting the count.
    pub const fn as_ptr(this: &Ref<T>) -> NonNull<T> {
        this.ptr
    }

    /// Returns the number of strong references to the object, including this one.
    pub fn strong_count(this: &Ref<T>) -> u32 {
        this.ref_count().get()
    }

    /// Exchanges the objects referenced by two Refs.
    pub const fn swap(this: &mut Ref<T>, other: &mut Ref<T>) {
        mem::swap(&mut this.ptr, &mut other.ptr);
    }

    /// Returns true if both Refs reference the same object.
    pub fn ptr_eq<U: ?Sized + RefCounted>(this: &Ref<T>, other: &Ref<U>) -> bool {
        ptr::addr_eq(this.ptr.as_ptr(), other.ptr.as_ptr())
    }
}

impl<T: ?Sized + RefCounted> Clone for Ref<T> {
    #[track_caller]
    fn clone(&self) -> Self {
        // SAFETY: self holds a share of the count, so the object is alive and managed.
        unsafe { Ref::from_raw(self.ptr) }
    }
}

impl<T: ?Sized + RefCounted> Drop for Ref<T> {
    fn drop(&mut self) {
        // SAFETY: self holds a share of the count, which is given up here.
        unsafe { dec_ref(self.ptr); }
    }
}

impl<T: ?Sized + RefCounted> Deref for Ref<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        // SAFETY: self holds a share of the count, so the object is alive. Only shared references
        // are ever handed out.
        unsafe { self.ptr.as_ref() }
    }
}

impl<T: ?Sized + RefCounted> AsRef<T> for Ref<T> {
    fn as_ref(&self) -> &T {
        self
    }
}

impl<T: ?Sized + RefCounted> Borrow<T> for Ref<T> {
    fn borrow(&self) -> &T {
        self
    }
}

impl<T: ?Sized + RefCounted, U: ?Sized + RefCounted> PartialEq<Ref<U>> for Ref<T> {
    fn eq(&self, other: &Ref<U>) -> bool {
        Ref::ptr_eq(self, other)
    }
}

impl<T: ?Sized + RefCounted, U: ?Sized + RefCounted> PartialEq<RefPtr<U>> for Ref<T> {
    fn eq(&self, other: &RefPtr<U>) -> bool {
        match other.ptr {
            Some(ptr) => ptr::addr_eq(self.ptr.as_ptr(), ptr.as_ptr()),
            None => false,
        }
    }
}

impl<T: ?Sized + RefCounted> Eq for Ref<T> {}

impl<T: ?Sized + RefCounted> Hash for Ref<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ptr.as_ptr().cast::<()>().hash(state);
    }
}

impl<T: ?Sized + RefCounted + Debug> Debug for Ref<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&**self, f)
    }
}

impl<T: ?Sized + RefCounted + Display> Display for Ref<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&**self, f)
    }
}

impl<T: ?Sized + RefCounted> Pointer for Ref<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Pointer::fmt(&self.ptr, f)
    }
}
