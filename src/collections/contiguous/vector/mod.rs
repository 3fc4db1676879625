//! A module containing [`Vector`] and its owned iterator, [`IntoIter`]. [`Iter`](std::slice::Iter)
//! and [`IterMut`](std::slice::IterMut) from [`std::slice`] are used for borrowed iteration.
//!
//! [`Vector`] is also re-exported under the parent module.

mod iter;
mod tests;
mod vector;

pub use iter::*;
pub use vector::*;
