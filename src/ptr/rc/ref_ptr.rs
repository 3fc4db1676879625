use std::fmt::{self, Debug, Formatter, Pointer};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::Deref;
use std::ptr::{self, NonNull};

use super::{Coercion, Downcast, Ref, RefCounted, dec_ref};
use crate::fail::{EmptyRefPtr, Violation};

/// A nullable strong reference to a [`RefCounted`] object.
///
/// A RefPtr follows the same counting rules as a [`Ref`] when it holds an object, and holds
/// neither an object nor a share of any count when it is empty. Converting between the two
/// transfers the share of the count rather than counting again.
///
/// Dereferencing an empty RefPtr fails fast. Use [`get`](RefPtr::get) to check for absence first.
///
/// # Examples
/// ```
/// # use toolkit::impl_ref_counted;
/// # use toolkit::ptr::{Ref, RefCount, RefPtr};
/// struct Texture {
///     count: RefCount,
///     id: u32,
/// }
///
/// impl_ref_counted!(Texture, count);
///
/// let mut slot: RefPtr<Texture> = RefPtr::null();
/// assert!(slot.get().is_none());
///
/// let texture = Ref::new(Texture { count: RefCount::new(), id: 7 });
/// slot.assign(&texture);
/// assert_eq!(slot.id, 7);
/// assert_eq!(Ref::strong_count(&texture), 2);
///
/// slot.clear();
/// assert_eq!(Ref::strong_count(&texture), 1);
/// ```
pub struct RefPtr<T: ?Sized + RefCounted> {
    pub(crate) ptr: Option<NonNull<T>>,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T: RefCounted> RefPtr<T> {
    /// Moves `value` to the heap and creates the first strong reference to it.
    pub fn new(value: T) -> RefPtr<T> {
        Ref::new(value).into()
    }

    /// Creates another strong reference to an object which is already shared by strong
    /// references. See [`Ref::from_object`].
    ///
    /// # Panics
    /// Fails fast if no strong reference currently owns `object`.
    #[track_caller]
    pub fn from_object(object: &T) -> RefPtr<T> {
        Ref::from_object(object).into()
    }
}

impl<T: ?Sized + RefCounted> RefPtr<T> {
    /// Creates an empty RefPtr.
    pub const fn null() -> RefPtr<T> {
        RefPtr {
            ptr: None,
            _phantom: PhantomData,
        }
    }

    /// Takes ownership of a boxed object, creating the first strong reference to it.
    pub fn from_box(value: Box<T>) -> RefPtr<T> {
        Ref::from_box(value).into()
    }

    /// Creates a RefPtr from a nullable raw pointer, incrementing the count if it isn't null.
    ///
    /// # Safety
    /// The same requirements as [`Ref::from_raw`] apply to `ptr` if it is [`Some`].
    pub unsafe fn from_raw(ptr: Option<NonNull<T>>) -> RefPtr<T> {
        match ptr {
            // SAFETY: Upheld by the caller.
            Some(ptr) => unsafe { Ref::from_raw(ptr) }.into(),
            None => RefPtr::null(),
        }
    }

    /// Returns true if the RefPtr is empty.
    pub const fn is_null(&self) -> bool {
        self.ptr.is_none()
    }

    /// Returns a reference to the object, if there is one.
    pub fn get(&self) -> Option<&T> {
        // SAFETY: A held pointer always carries a share of the count, keeping the object alive.
        self.ptr.map(|ptr| unsafe { ptr.as_ref() })
    }

    /// Returns the pointer to the referenced object, if there is one, without affecting the count.
    pub const fn as_ptr(&self) -> Option<NonNull<T>> {
        self.ptr
    }

    /// Returns the number of strong references to the object, or 0 if the RefPtr is empty.
    pub fn strong_count(&self) -> u32 {
        self.get().map_or(0, |object| object.ref_count().get())
    }

    /// Gives up the held pointer without decrementing the count, leaving the RefPtr empty. The
    /// share of the count is leaked unless it is later reclaimed with [`Ref::adopt`].
    #[must_use = "the share of the count is leaked unless it is adopted again"]
    pub const fn release(&mut self) -> Option<NonNull<T>> {
        self.ptr.take()
    }

    /// Converts into a [`Ref`], transferring the share of the count. Returns [`None`] if the
    /// RefPtr is empty.
    pub fn into_ref(mut self) -> Option<Ref<T>> {
        // SAFETY: The released pointer carries a share of the count, which the Ref takes over.
        self.release().map(|ptr| unsafe { Ref::adopt(ptr) })
    }

    /// Converts into a [`Ref`], transferring the share of the count.
    ///
    /// # Panics
    /// Fails fast if the RefPtr is empty.
    #[track_caller]
    pub fn release_nonnull(self) -> Ref<T> {
        match self.into_ref() {
            Some(strong) => strong,
            None => EmptyRefPtr.crash(),
        }
    }

    /// Replaces the referenced object with `other`, releasing the previous one.
    ///
    /// The new reference is moved into a temporary which is then swapped with self, so assigning
    /// a RefPtr to itself (or to another reference to the same object) is always safe.
    pub fn assign<P: Into<RefPtr<T>>>(&mut self, other: P) {
        let mut temp = other.into();
        self.swap(&mut temp);
    }

    /// Releases the referenced object, if any, leaving the RefPtr empty.
    pub fn clear(&mut self) {
        self.assign(RefPtr::null());
    }

    /// Moves the reference out into a new RefPtr, leaving this one empty. The count is unchanged.
    pub const fn take(&mut self) -> RefPtr<T> {
        RefPtr {
            ptr: self.release(),
            _phantom: PhantomData,
        }
    }

    /// Exchanges the objects referenced by two RefPtrs.
    pub fn swap(&mut self, other: &mut RefPtr<T>) {
        mem::swap(&mut self.ptr, &mut other.ptr);
    }

    /// Returns true if both RefPtrs reference the same object, or are both empty.
    pub fn ptr_eq<U: ?Sized + RefCounted>(&self, other: &RefPtr<U>) -> bool {
        match (self.ptr, other.ptr) {
            (Some(a), Some(b)) => ptr::addr_eq(a.as_ptr(), b.as_ptr()),
            (None, None) => true,
            _ => false,
        }
    }

    /// Creates a new strong reference to the same object, viewed as a `U` through `coercion`.
    /// Typically used to upcast to a trait object. An empty RefPtr produces an empty RefPtr.
    ///
    /// # Examples
    /// ```
    /// # use toolkit::{coerce, impl_ref_counted};
    /// # use toolkit::ptr::{RefCount, RefCounted, RefPtr};
    /// trait Named: RefCounted {
    ///     fn name(&self) -> &str;
    /// }
    ///
    /// struct Dog {
    ///     count: RefCount,
    /// }
    ///
    /// impl_ref_counted!(Dog, count);
    ///
    /// impl Named for Dog {
    ///     fn name(&self) -> &str {
    ///         "dog"
    ///     }
    /// }
    ///
    /// let dog = RefPtr::new(Dog { count: RefCount::new() });
    /// let named: RefPtr<dyn Named> = dog.static_cast(coerce!(dyn Named));
    /// assert_eq!(named.name(), "dog");
    /// assert_eq!(dog.strong_count(), 2);
    /// ```
    pub fn static_cast<U: ?Sized + RefCounted>(&self, coercion: Coercion<T, U>) -> RefPtr<U> {
        // SAFETY: The coercion keeps pointing at the object that self holds a share of, and the
        // pointer is still the one it is managed through.
        unsafe { RefPtr::from_raw(self.ptr.map(|ptr| coercion.apply(ptr))) }
    }

    /// Creates a new strong reference to the same object. Strong references only ever provide
    /// shared access, so there is no constness to cast away. This is equivalent to
    /// [`clone`](Clone::clone) and is provided for symmetry with the other casts.
    pub fn const_cast(&self) -> RefPtr<T> {
        self.clone()
    }

    /// Creates a new strong reference to the same object if its concrete type is `U`, or an empty
    /// RefPtr otherwise. Absence is reported as a value, never by failing.
    pub fn dynamic_cast<U: RefCounted + Downcast>(&self) -> RefPtr<U>
    where
        T: Downcast,
    {
        if !self.get().is_some_and(|object| object.as_any().is::<U>()) {
            return RefPtr::null();
        }
        // SAFETY: The object's concrete type is U, so the data pointer of self is a pointer to a U.
        unsafe { RefPtr::from_raw(self.ptr.map(NonNull::cast)) }
    }

    /// Creates a new strong reference which reinterprets the object as a `U`.
    ///
    /// # Safety
    /// The object must be valid as a `U` in every respect, including its [`RefCount`](super::RefCount)
    /// and the layout it was allocated with.
    pub unsafe fn reinterpret_cast<U: RefCounted>(&self) -> RefPtr<U> {
        // SAFETY: Upheld by the caller.
        unsafe { RefPtr::from_raw(self.ptr.map(NonNull::cast)) }
    }
}

impl<T: ?Sized + RefCounted> Clone for RefPtr<T> {
    fn clone(&self) -> Self {
        // SAFETY: A held pointer always carries a share of the count, keeping the object alive.
        unsafe { RefPtr::from_raw(self.ptr) }
    }
}

impl<T: ?Sized + RefCounted> Drop for RefPtr<T> {
    fn drop(&mut self) {
        if let Some(ptr) = self.release() {
            // SAFETY: A held pointer always carries a share of the count, which is given up here.
            unsafe { dec_ref(ptr); }
        }
    }
}

impl<T: ?Sized + RefCounted> Deref for RefPtr<T> {
    type Target = T;

    #[track_caller]
    fn deref(&self) -> &Self::Target {
        match self.get() {
            Some(object) => object,
            None => EmptyRefPtr.crash(),
        }
    }
}

impl<T: ?Sized + RefCounted> Default for RefPtr<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: ?Sized + RefCounted> From<Ref<T>> for RefPtr<T> {
    fn from(value: Ref<T>) -> Self {
        RefPtr {
            ptr: Some(Ref::leak(value)),
            _phantom: PhantomData,
        }
    }
}

impl<T: ?Sized + RefCounted> From<&Ref<T>> for RefPtr<T> {
    fn from(value: &Ref<T>) -> Self {
        value.clone().into()
    }
}

impl<T: ?Sized + RefCounted> From<Option<Ref<T>>> for RefPtr<T> {
    fn from(value: Option<Ref<T>>) -> Self {
        match value {
            Some(strong) => strong.into(),
            None => RefPtr::null(),
        }
    }
}

impl<T: ?Sized + RefCounted, U: ?Sized + RefCounted> PartialEq<RefPtr<U>> for RefPtr<T> {
    fn eq(&self, other: &RefPtr<U>) -> bool {
        self.ptr_eq(other)
    }
}

impl<T: ?Sized + RefCounted, U: ?Sized + RefCounted> PartialEq<Ref<U>> for RefPtr<T> {
    fn eq(&self, other: &Ref<U>) -> bool {
        other == self
    }
}

impl<T: ?Sized + RefCounted> Eq for RefPtr<T> {}

impl<T: ?Sized + RefCounted> Hash for RefPtr<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ptr.map(|ptr| ptr.as_ptr().cast::<()>()).hash(state);
    }
}

impl<T: ?Sized + RefCounted + Debug> Debug for RefPtr<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(object) => f.debug_tuple("RefPtr").field(&object).finish(),
            None => write!(f, "RefPtr(null)"),
        }
    }
}

impl<T: ?Sized + RefCounted> Pointer for RefPtr<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.ptr {
            Some(ptr) => Pointer::fmt(&ptr, f),
            None => write!(f, "null"),
        }
    }
}
