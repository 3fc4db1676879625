use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem;

use crate::collections::contiguous::Vector;
use crate::collections::traits::{BackSequence, Container, FrontSequence};

/// A first-in, first-out collection, backed by a [`Vector`] by default. Elements are pushed onto
/// the back of the container and popped from its front.
///
/// Popping has the complexity of the container's `pop_front`, which is `O(n)` for a Vector. A
/// Queue over a [`LinkedList`](crate::collections::linked::LinkedList) pops in `O(1)`.
///
/// # Examples
/// ```
/// # use toolkit::collections::adapters::Queue;
/// let mut queue: Queue<_> = (1..=3).collect();
/// queue.push(4);
///
/// assert_eq!(queue.pop(), Some(1));
/// assert_eq!(queue.front(), Some(&2));
/// assert_eq!(queue.back(), Some(&4));
/// ```
pub struct Queue<T, C = Vector<T>> {
    container: C,
    _phantom: PhantomData<T>,
}

impl<T> Queue<T> {
    pub const fn new() -> Queue<T> {
        Queue::with_container(Vector::new())
    }
}

impl<T, C> Queue<T, C> {
    pub const fn with_container(container: C) -> Queue<T, C> {
        Queue {
            container,
            _phantom: PhantomData,
        }
    }
}

impl<T, C: FrontSequence<T> + BackSequence<T>> Queue<T, C> {
    pub fn len(&self) -> usize {
        Container::len(&self.container)
    }

    pub fn is_empty(&self) -> bool {
        Container::is_empty(&self.container)
    }

    /// Returns a reference to the element which will be popped next.
    pub fn front(&self) -> Option<&T> {
        self.container.front()
    }

    /// Returns a reference to the most recently pushed element.
    pub fn back(&self) -> Option<&T> {
        self.container.back()
    }

    pub fn push(&mut self, value: T) {
        self.container.push_back(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.container.pop_front()
    }

    pub fn clear(&mut self) {
        Container::clear(&mut self.container);
    }

    pub const fn swap(&mut self, other: &mut Queue<T, C>) {
        mem::swap(&mut self.container, &mut other.container);
    }
}

impl<T, C: Default> Default for Queue<T, C> {
    fn default() -> Self {
        Queue::with_container(C::default())
    }
}

impl<T, C: FromIterator<T>> FromIterator<T> for Queue<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue::with_container(iter.into_iter().collect())
    }
}

impl<T, C: Extend<T>> Extend<T> for Queue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.container.extend(iter);
    }
}

impl<T, C: Clone> Clone for Queue<T, C> {
    fn clone(&self) -> Self {
        Queue::with_container(self.container.clone())
    }
}

impl<T, C: PartialEq> PartialEq for Queue<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.container == other.container
    }
}

impl<T, C: Eq> Eq for Queue<T, C> {}

impl<T, C: Debug> Debug for Queue<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Queue").field(&self.container).finish()
    }
}
