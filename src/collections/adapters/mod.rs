//! Collections which restrict an underlying container to a single access pattern.
//!
//! [`Deque`], [`Stack`] and [`Queue`] delegate every operation to their container, so each
//! operation has the complexity of the container's equivalent. The container can be swapped for
//! any type implementing the [`traits`](crate::collections::traits) an adapter requires.
//! [`PriorityQueue`] is a binary heap stored in a [`Vector`](crate::collections::contiguous::Vector).

mod deque;
mod priority_queue;
mod queue;
mod stack;
mod tests;

pub use deque::Deque;
pub use priority_queue::PriorityQueue;
pub use queue::Queue;
pub use stack::Stack;
