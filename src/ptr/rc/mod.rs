//! Intrusive reference counting. Revolves around the [`RefCounted`] capability and the two strong
//! handles which share it: [`Ref`], which is never empty, and [`RefPtr`], which may be.
//!
//! The count lives inside the object itself, so sharing an object costs no allocation beyond the
//! object's own. In return, every shared type has to opt in by embedding a [`RefCount`].

mod coerce;
mod ref_count;
mod ref_ptr;
mod strong;
mod tests;

pub use coerce::*;
pub use ref_count::*;
pub use ref_ptr::*;
pub use strong::*;
