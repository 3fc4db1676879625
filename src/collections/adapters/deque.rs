use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use crate::collections::linked::LinkedList;
use crate::collections::traits::{BackSequence, Container, FrontSequence, IndexedSequence};

/// A double-ended queue, backed by a [`LinkedList`] by default.
///
/// # Examples
/// ```
/// # use toolkit::collections::adapters::Deque;
/// let mut deque = Deque::new();
/// deque.push_back(2);
/// deque.push_front(1);
/// deque.insert(2, 3);
///
/// assert_eq!(deque.front(), Some(&1));
/// assert_eq!(deque.pop_back(), Some(3));
/// assert_eq!(deque.len(), 2);
/// ```
pub struct Deque<T, C = LinkedList<T>> {
    container: C,
    _phantom: PhantomData<T>,
}

impl<T> Deque<T> {
    pub fn new() -> Deque<T> {
        Deque::with_container(LinkedList::new())
    }
}

impl<T, C: FrontSequence<T> + BackSequence<T> + IndexedSequence<T>> Deque<T, C> {
    /// Creates a Deque over an existing container, whose front becomes the front of the Deque.
    pub const fn with_container(container: C) -> Deque<T, C> {
        Deque {
            container,
            _phantom: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        Container::len(&self.container)
    }

    pub fn is_empty(&self) -> bool {
        Container::is_empty(&self.container)
    }

    pub fn front(&self) -> Option<&T> {
        FrontSequence::front(&self.container)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        FrontSequence::front_mut(&mut self.container)
    }

    pub fn back(&self) -> Option<&T> {
        BackSequence::back(&self.container)
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        BackSequence::back_mut(&mut self.container)
    }

    pub fn push_front(&mut self, value: T) {
        FrontSequence::push_front(&mut self.container, value);
    }

    pub fn push_back(&mut self, value: T) {
        BackSequence::push_back(&mut self.container, value);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        FrontSequence::pop_front(&mut self.container)
    }

    pub fn pop_back(&mut self) -> Option<T> {
        BackSequence::pop_back(&mut self.container)
    }

    /// Returns a reference to the element at `index`, counting from the front.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.container.get_at(index)
    }

    /// Inserts `value` at `index`, counting from the front.
    ///
    /// # Panics
    /// Fails fast if `index` is greater than the length of the Deque.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) {
        self.container.insert_at(index, value);
    }

    /// Removes and returns the element at `index`, counting from the front.
    ///
    /// # Panics
    /// Fails fast if `index` is out of bounds of the Deque.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        self.container.remove_at(index)
    }

    pub fn clear(&mut self) {
        Container::clear(&mut self.container);
    }

    /// Exchanges the contents of two Deques.
    pub const fn swap(&mut self, other: &mut Deque<T, C>) {
        std::mem::swap(&mut self.container, &mut other.container);
    }

    /// Consumes the Deque, returning the underlying container.
    pub fn into_inner(self) -> C {
        self.container
    }
}

impl<T, C: Default> Default for Deque<T, C> {
    fn default() -> Self {
        Deque {
            container: C::default(),
            _phantom: PhantomData,
        }
    }
}

impl<T, C: FromIterator<T>> FromIterator<T> for Deque<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Deque {
            container: iter.into_iter().collect(),
            _phantom: PhantomData,
        }
    }
}

impl<T, C: Extend<T>> Extend<T> for Deque<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.container.extend(iter);
    }
}

impl<T, C: Clone> Clone for Deque<T, C> {
    fn clone(&self) -> Self {
        Deque {
            container: self.container.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T, C: PartialEq> PartialEq for Deque<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.container == other.container
    }
}

impl<T, C: Eq> Eq for Deque<T, C> {}

impl<T, C: Debug> Debug for Deque<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Deque").field(&self.container).finish()
    }
}
