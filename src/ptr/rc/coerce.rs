use std::fmt::{self, Debug, Formatter};
use std::ptr::NonNull;

/// A conversion from a pointer to `T` into a pointer to `U` which keeps pointing at the same
/// object, only changing the type it is viewed as. Used by
/// [`RefPtr::static_cast`](super::RefPtr::static_cast), usually to view a concrete object as a
/// trait object.
///
/// The conversion is applied to the pointer a strong handle already holds, so the new handle may
/// free the object just like the original could.
///
/// Create one with [`coerce!`](crate::coerce), which only accepts the conversions that the compiler
/// performs implicitly.
pub struct Coercion<T: ?Sized, U: ?Sized> {
    convert: fn(NonNull<T>) -> NonNull<U>,
}

impl<T: ?Sized, U: ?Sized> Coercion<T, U> {
    /// Creates a Coercion from a conversion function.
    ///
    /// # Safety
    /// `convert` must return a pointer to the same object as its argument, derived from it without
    /// dereferencing, which is valid as a `U` in every respect.
    pub const unsafe fn new(convert: fn(NonNull<T>) -> NonNull<U>) -> Coercion<T, U> {
        Coercion { convert }
    }

    pub(crate) fn apply(self, ptr: NonNull<T>) -> NonNull<U> {
        (self.convert)(ptr)
    }
}

impl<T: ?Sized, U: ?Sized> Clone for Coercion<T, U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized, U: ?Sized> Copy for Coercion<T, U> {}

impl<T: ?Sized, U: ?Sized> Debug for Coercion<T, U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Coercion<{}, {}>",
            std::any::type_name::<T>(),
            std::any::type_name::<U>()
        )
    }
}

/// Creates a [`Coercion`] to the given type, which has to be reachable through an implicit pointer
/// coercion such as unsizing to a trait object.
///
/// # Examples
/// ```
/// # use toolkit::{coerce, impl_ref_counted};
/// # use toolkit::ptr::{RefCount, RefCounted, RefPtr};
/// trait Area: RefCounted {
///     fn area(&self) -> u32;
/// }
///
/// struct Square {
///     count: RefCount,
///     side: u32,
/// }
///
/// impl_ref_counted!(Square, count);
///
/// impl Area for Square {
///     fn area(&self) -> u32 {
///         self.side * self.side
///     }
/// }
///
/// let square = RefPtr::new(Square { count: RefCount::new(), side: 3 });
/// let area: RefPtr<dyn Area> = square.static_cast(coerce!(dyn Area));
/// assert_eq!(area.area(), 9);
/// ```
#[macro_export]
macro_rules! coerce {
    ($ty:ty) => {
        // SAFETY: The only conversion applied is the compiler's implicit coercion of the pointer.
        unsafe { $crate::ptr::Coercion::new(|ptr| -> ::std::ptr::NonNull<$ty> { ptr }) }
    };
}
