//! Traits describing the operations that collections share, so that adapters can be written once
//! over any container providing them.

mod sequence;

pub use sequence::*;
