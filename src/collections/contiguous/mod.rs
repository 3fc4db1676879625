//! Contiguous collection types. Currently this is only [`Vector`], which stores its elements in a
//! single heap allocation managed by a crate-internal buffer.

mod buffer;
pub mod vector;

pub(crate) use buffer::*;
#[doc(inline)]
pub use vector::Vector;
