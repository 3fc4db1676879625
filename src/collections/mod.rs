//! General-purpose collection types.
//!
//! # Structure
//! [`Vector`](contiguous::Vector) and [`LinkedList`](linked::LinkedList) are the two leaf
//! collections, which own their elements directly. The [`adapters`] are built on top of them,
//! through the operations described by the [`traits`] module, rather than managing any memory of
//! their own.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! provides slicing, sorting and borrowed iteration without repeating them.

#[cfg(feature = "adapters")]
pub mod adapters;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "traits")]
pub mod traits;
