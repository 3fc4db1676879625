use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{LinkedList, NodeRef};

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

/// An owned iterator over the elements of a [`LinkedList`]. Values which haven't been yielded are
/// dropped along with the iterator.
pub struct IntoIter<T> {
    // Holding the list and popping from either end is all an owned iterator needs.
    pub(crate) list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            front: self.head.next(),
            back: self.tail.prev(),
            len: self.len,
            _phantom: PhantomData,
        }
    }
}

/// A borrowed iterator over the elements of a [`LinkedList`]. See [`LinkedList::iter`].
///
/// `front` and `back` are the next nodes to be yielded from each end, and `len` counts the nodes
/// between them, which is what stops the two ends from crossing.
pub struct Iter<'a, T> {
    pub(crate) front: NodeRef<T>,
    pub(crate) back: NodeRef<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 { return None; }

        let node = self.front;
        self.front = node.next();
        self.len -= 1;
        // SAFETY: The node is one of the remaining elements, borrowed from the list for 'a.
        Some(unsafe { node.value() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 { return None; }

        let node = self.back;
        self.back = node.prev();
        self.len -= 1;
        // SAFETY: The node is one of the remaining elements, borrowed from the list for 'a.
        Some(unsafe { node.value() })
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            front: self.front,
            back: self.back,
            len: self.len,
            _phantom: PhantomData,
        }
    }
}

impl<'a, T: Debug> Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            front: self.head.next(),
            back: self.tail.prev(),
            len: self.len,
            _phantom: PhantomData,
        }
    }
}

/// A mutable borrowed iterator over the elements of a [`LinkedList`]. See
/// [`LinkedList::iter_mut`].
pub struct IterMut<'a, T> {
    pub(crate) front: NodeRef<T>,
    pub(crate) back: NodeRef<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 { return None; }

        let node = self.front;
        self.front = node.next();
        self.len -= 1;
        // SAFETY: Each element is yielded at most once, so no two mutable references alias.
        Some(unsafe { node.value_mut() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 { return None; }

        let node = self.back;
        self.back = node.prev();
        self.len -= 1;
        // SAFETY: Each element is yielded at most once, so no two mutable references alias.
        Some(unsafe { node.value_mut() })
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

// SAFETY: An Iter only provides shared references to the elements.
unsafe impl<'a, T: Sync> Send for Iter<'a, T> {}
// SAFETY: As above.
unsafe impl<'a, T: Sync> Sync for Iter<'a, T> {}
// SAFETY: An IterMut provides exclusive references to each element, like &mut T.
unsafe impl<'a, T: Send> Send for IterMut<'a, T> {}
// SAFETY: Shared access to an IterMut provides no access to the elements.
unsafe impl<'a, T: Sync> Sync for IterMut<'a, T> {}
