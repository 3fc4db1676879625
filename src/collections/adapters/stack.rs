use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem;

use crate::collections::contiguous::Vector;
use crate::collections::traits::BackSequence;

/// A last-in, first-out collection, backed by a [`Vector`] by default. The top of the Stack is the
/// back of its container.
pub struct Stack<T, C = Vector<T>> {
    container: C,
    _phantom: PhantomData<T>,
}

impl<T> Stack<T> {
    pub const fn new() -> Stack<T> {
        Stack::with_container(Vector::new())
    }
}

impl<T, C> Stack<T, C> {
    pub const fn with_container(container: C) -> Stack<T, C> {
        Stack {
            container,
            _phantom: PhantomData,
        }
    }
}

impl<T, C: BackSequence<T>> Stack<T, C> {
    pub fn len(&self) -> usize {
        self.container.len()
    }

    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    /// Returns a reference to the most recently pushed element, if there is one.
    pub fn top(&self) -> Option<&T> {
        self.container.back()
    }

    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.container.back_mut()
    }

    pub fn push(&mut self, value: T) {
        self.container.push_back(value);
    }

    /// Removes the most recently pushed element and returns it, if there is one.
    pub fn pop(&mut self) -> Option<T> {
        self.container.pop_back()
    }

    pub fn clear(&mut self) {
        self.container.clear();
    }

    pub const fn swap(&mut self, other: &mut Stack<T, C>) {
        mem::swap(&mut self.container, &mut other.container);
    }
}

impl<T, C: Default> Default for Stack<T, C> {
    fn default() -> Self {
        Stack::with_container(C::default())
    }
}

impl<T, C: FromIterator<T>> FromIterator<T> for Stack<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack::with_container(iter.into_iter().collect())
    }
}

impl<T, C: Extend<T>> Extend<T> for Stack<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.container.extend(iter);
    }
}

impl<T, C: Clone> Clone for Stack<T, C> {
    fn clone(&self) -> Self {
        Stack::with_container(self.container.clone())
    }
}

impl<T, C: PartialEq> PartialEq for Stack<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.container == other.container
    }
}

impl<T, C: Eq> Eq for Stack<T, C> {}

impl<T, C: Debug> Debug for Stack<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Stack").field(&self.container).finish()
    }
}
