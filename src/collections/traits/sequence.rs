use crate::collections::contiguous::Vector;
use crate::collections::linked::LinkedList;

/// A collection holding a number of elements, which can be emptied.
pub trait Container {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes and drops every element.
    fn clear(&mut self);
}

/// A sequence which can be added to and removed from at the back.
pub trait BackSequence<T>: Container {
    fn back(&self) -> Option<&T>;

    fn back_mut(&mut self) -> Option<&mut T>;

    fn push_back(&mut self, value: T);

    fn pop_back(&mut self) -> Option<T>;
}

/// A sequence which can be added to and removed from at the front. Implementors are free to do
/// so in `O(n)`, as [`Vector`] does.
pub trait FrontSequence<T>: Container {
    fn front(&self) -> Option<&T>;

    fn front_mut(&mut self) -> Option<&mut T>;

    fn push_front(&mut self, value: T);

    fn pop_front(&mut self) -> Option<T>;
}

/// A sequence which can be accessed and edited by index.
pub trait IndexedSequence<T>: Container {
    /// Returns a reference to the element at `index`, if it is in bounds.
    fn get_at(&self, index: usize) -> Option<&T>;

    /// Inserts `value` at `index`.
    ///
    /// # Panics
    /// Fails fast if `index` is greater than the length of the sequence.
    fn insert_at(&mut self, index: usize, value: T);

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    /// Fails fast if `index` is out of bounds of the sequence.
    fn remove_at(&mut self, index: usize) -> T;
}

impl<T> Container for Vector<T> {
    fn len(&self) -> usize {
        Vector::len(self)
    }

    fn clear(&mut self) {
        Vector::clear(self);
    }
}

impl<T> BackSequence<T> for Vector<T> {
    fn back(&self) -> Option<&T> {
        Vector::back(self)
    }

    fn back_mut(&mut self) -> Option<&mut T> {
        Vector::back_mut(self)
    }

    fn push_back(&mut self, value: T) {
        self.push(value);
    }

    fn pop_back(&mut self) -> Option<T> {
        self.pop()
    }
}

impl<T> FrontSequence<T> for Vector<T> {
    fn front(&self) -> Option<&T> {
        Vector::front(self)
    }

    fn front_mut(&mut self) -> Option<&mut T> {
        Vector::front_mut(self)
    }

    #[track_caller]
    fn push_front(&mut self, value: T) {
        self.insert(0, value);
    }

    fn pop_front(&mut self) -> Option<T> {
        self.try_remove(0).ok()
    }
}

impl<T> IndexedSequence<T> for Vector<T> {
    fn get_at(&self, index: usize) -> Option<&T> {
        self.try_get(index).ok()
    }

    #[track_caller]
    fn insert_at(&mut self, index: usize, value: T) {
        self.insert(index, value);
    }

    #[track_caller]
    fn remove_at(&mut self, index: usize) -> T {
        self.remove(index)
    }
}

impl<T> Container for LinkedList<T> {
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn is_empty(&self) -> bool {
        LinkedList::is_empty(self)
    }

    fn clear(&mut self) {
        LinkedList::clear(self);
    }
}

impl<T> BackSequence<T> for LinkedList<T> {
    fn back(&self) -> Option<&T> {
        LinkedList::back(self)
    }

    fn back_mut(&mut self) -> Option<&mut T> {
        LinkedList::back_mut(self)
    }

    fn push_back(&mut self, value: T) {
        LinkedList::push_back(self, value);
    }

    fn pop_back(&mut self) -> Option<T> {
        LinkedList::pop_back(self)
    }
}

impl<T> FrontSequence<T> for LinkedList<T> {
    fn front(&self) -> Option<&T> {
        LinkedList::front(self)
    }

    fn front_mut(&mut self) -> Option<&mut T> {
        LinkedList::front_mut(self)
    }

    fn push_front(&mut self, value: T) {
        LinkedList::push_front(self, value);
    }

    fn pop_front(&mut self) -> Option<T> {
        LinkedList::pop_front(self)
    }
}

impl<T> IndexedSequence<T> for LinkedList<T> {
    fn get_at(&self, index: usize) -> Option<&T> {
        self.try_get(index).ok()
    }

    #[track_caller]
    fn insert_at(&mut self, index: usize, value: T) {
        self.insert(index, value);
    }

    #[track_caller]
    fn remove_at(&mut self, index: usize) -> T {
        self.remove(index)
    }
}
