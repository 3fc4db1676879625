//! Weak references to reference counted objects.
//!
//! A [`WeakPtr`] observes an object without keeping it alive. Rather than sharing the object's
//! count, it shares a small [`WeakFlag`], allocated the first time a weak reference to the object
//! is requested. The object owns that flag through its [`WeakableBase`] and invalidates it as it is
//! destroyed, so every weak reference learns of the object's death without ever touching the freed
//! object.

mod weak_flag;
mod weak_ptr;
mod weakable;

pub use weak_flag::*;
pub use weak_ptr::*;
pub use weakable::*;
