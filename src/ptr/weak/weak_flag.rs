use std::cell::Cell;
use std::fmt::{self, Debug, Formatter};
use std::ptr::NonNull;

use crate::impl_ref_counted;
use crate::ptr::RefCount;

/// The validity flag shared between a weakable object and all of its [`WeakPtr`]s. The flag is
/// itself reference counted, so it outlives the object for as long as any weak reference remains.
///
/// The back-pointer is untyped: the flag doesn't know the type of the object it describes, only
/// whether that object is still alive.
///
/// [`WeakPtr`]: super::WeakPtr
pub struct WeakFlag {
    count: RefCount,
    target: Cell<Option<NonNull<()>>>,
}

impl_ref_counted!(WeakFlag, count);

impl WeakFlag {
    pub(crate) const fn new(target: NonNull<()>) -> WeakFlag {
        WeakFlag {
            count: RefCount::new(),
            target: Cell::new(Some(target)),
        }
    }

    /// Returns true if the object described by this flag is still alive.
    pub fn is_valid(&self) -> bool {
        self.target.get().is_some()
    }

    /// Marks the object as destroyed. Called exactly once, by the object's
    /// [`WeakableBase`](super::WeakableBase), before the object's storage is released.
    pub(crate) fn invalidate(&self) {
        self.target.set(None);
    }

    /// Returns the back-pointer, reinterpreted as a pointer to `T`, if the object is still alive.
    ///
    /// # Safety
    /// `T` must be the type of the object that the flag was created for.
    pub(crate) unsafe fn target<T>(&self) -> Option<NonNull<T>> {
        self.target.get().map(NonNull::cast)
    }
}

impl Debug for WeakFlag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakFlag")
            .field("valid", &self.is_valid())
            .field("count", &self.count.get())
            .finish()
    }
}
