//! A module containing [`OwnPtr`], the exclusive-ownership pointer.
//!
//! [`OwnPtr`] is also re-exported under the parent module.

mod own_ptr;

pub use own_ptr::*;
