use std::cell::OnceCell;
use std::fmt::{self, Debug, Formatter};
use std::ptr::NonNull;

use super::{WeakFlag, WeakPtr};
use crate::fail::{Unowned, Violation};
use crate::ptr::{Ref, RefCount, RefCounted, RefPtr};

/// The part of a weakable object which owns its [`WeakFlag`]. The flag is only allocated once a
/// weak reference is first requested, and is invalidated when the WeakableBase is dropped along with
/// the object.
#[derive(Default)]
pub struct WeakableBase {
    flag: OnceCell<Ref<WeakFlag>>,
}

impl WeakableBase {
    pub const fn new() -> WeakableBase {
        WeakableBase {
            flag: OnceCell::new(),
        }
    }

    /// Returns true if a weak reference to the object has ever been requested.
    pub fn has_flag(&self) -> bool {
        self.flag.get().is_some()
    }

    /// Returns the flag, creating it for `target` if it doesn't exist yet.
    pub(crate) fn flag(&self, target: NonNull<()>) -> &Ref<WeakFlag> {
        self.flag.get_or_init(|| Ref::new(WeakFlag::new(target)))
    }
}

impl Drop for WeakableBase {
    fn drop(&mut self) {
        if let Some(flag) = self.flag.get() {
            flag.invalidate();
        }
    }
}

impl Debug for WeakableBase {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakableBase")
            .field("flag", &self.flag.get())
            .finish()
    }
}

/// The capability of being observed through [`WeakPtr`]s, on top of being [`RefCounted`].
///
/// Most types can use [`impl_weakable!`](crate::impl_weakable) rather than implementing this by
/// hand.
///
/// # Safety
/// [`weakable`](Weakable::weakable) must always return the same [`WeakableBase`], which has to be
/// embedded in the object itself and must not be returned by any other object.
pub unsafe trait Weakable: RefCounted + Sized {
    fn weakable(&self) -> &WeakableBase;

    /// Returns a weak reference to this object. The first call allocates the object's
    /// [`WeakFlag`], every later call shares it.
    ///
    /// # Panics
    /// Fails fast if no strong reference currently owns the object.
    #[track_caller]
    fn weak_from_this(&self) -> WeakPtr<Self> {
        let Some(this) = RefCount::managed(self) else {
            Unowned.crash()
        };

        // Promoted WeakPtrs reuse this pointer, so it must be the managing one.
        let flag = self.weakable().flag(this.cast());
        WeakPtr::from_flag(RefPtr::from(flag))
    }
}

/// Implements [`Weakable`] for a [`RefCounted`] type by naming its [`WeakableBase`] field.
#[macro_export]
macro_rules! impl_weakable {
    ($ty:ty, $field:ident) => {
        // SAFETY: The WeakableBase is a field of the object itself and can't belong to anything
        // else.
        unsafe impl $crate::ptr::Weakable for $ty {
            fn weakable(&self) -> &$crate::ptr::WeakableBase {
                &self.$field
            }
        }
    };
}
