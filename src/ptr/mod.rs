//! Ownership and lifetime primitives.
//!
//! # Ownership Disciplines
//! Two disciplines are provided and are never mixed on the same allocation:
//! - Exclusive: an [`OwnPtr`] is the one and only owner of its value.
//! - Reference counted: objects embed a [`RefCount`] (by implementing [`RefCounted`]) and are
//!   shared between any number of [`Ref`]s and [`RefPtr`]s. Objects which also embed a
//!   [`WeakableBase`] (by implementing [`Weakable`]) can be observed through [`WeakPtr`]s, which
//!   don't keep them alive.
//!
//! # Threading
//! Counts and weak flags are plain [`Cell`](std::cell::Cell)s, none of the reference counted
//! handles are [`Send`] or [`Sync`]. Sharing them across threads is prevented by the compiler
//! rather than documented as misuse.

pub mod own_ptr;
pub mod rc;
pub mod weak;

#[doc(inline)]
pub use own_ptr::OwnPtr;
#[doc(inline)]
pub use rc::{Coercion, Downcast, Ref, RefCount, RefCounted, RefPtr};
#[doc(inline)]
pub use weak::{WeakPtr, Weakable, WeakableBase};
