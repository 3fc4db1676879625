use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};

use super::{Iter, IterMut, Node, NodeRef};
use crate::collections::contiguous::Vector;
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// A list with links in both directions, guarded by two sentinel nodes. See also: [`CursorMut`]
/// for `O(1)` insertion and removal at any position.
///
/// The sentinels are allocated along with the list and live as long as it does, so every element
/// always has both a previous and a next node. The list is empty exactly when the front sentinel
/// links directly to the back sentinel.
///
/// # Time Complexity
/// With `n` elements in the list and `i` the index being accessed:
///
/// | Method | Complexity |
/// |-|-|
/// | `len`, `front`, `back` | `O(1)` |
/// | `push_*`, `pop_*` | `O(1)` |
/// | `get`, `insert`, `remove` | `O(min(i, n-i))` |
/// | `append` | `O(1)` |
/// | `reverse`, `contains` | `O(n)` |
/// | `sort` | `O(n log n)` |
///
/// Walking a list is mostly cache misses, so a [`Vector`] is usually the better choice unless the
/// `O(1)` splicing of `append` and [`CursorMut`] is actually needed.
///
/// [`CursorMut`]: super::CursorMut
pub struct LinkedList<T> {
    pub(crate) head: NodeRef<T>,
    pub(crate) tail: NodeRef<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<Box<Node<T>>>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements, allocating its two sentinels.
    pub fn new() -> LinkedList<T> {
        let head = NodeRef::sentinel();
        let tail = NodeRef::sentinel();
        head.set_next(tail);
        tail.set_prev(head);

        LinkedList {
            head,
            tail,
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of elements, which is tracked rather than counted.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the sentinels are linked directly to each other.
    pub fn is_empty(&self) -> bool {
        self.head.next() == self.tail
    }

    /// Returns the first element, or [`None`] for an empty list.
    pub fn front(&self) -> Option<&T> {
        // SAFETY: The node is an element, borrowed for the lifetime of &self.
        self.first_node().map(|node| unsafe { node.value() })
    }

    /// Mutable version of [`front`](LinkedList::front).
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: The node is an element, borrowed for the lifetime of &mut self.
        self.first_node().map(|node| unsafe { node.value_mut() })
    }

    /// Returns the last element, or [`None`] for an empty list.
    pub fn back(&self) -> Option<&T> {
        // SAFETY: The node is an element, borrowed for the lifetime of &self.
        self.last_node().map(|node| unsafe { node.value() })
    }

    /// Mutable version of [`back`](LinkedList::back).
    pub fn back_mut(&mut self) -> Option<&mut T> {
        // SAFETY: The node is an element, borrowed for the lifetime of &mut self.
        self.last_node().map(|node| unsafe { node.value_mut() })
    }

    /// Links a new node holding `value` directly after the front sentinel.
    pub fn push_front(&mut self, value: T) {
        self.link_before(self.head.next(), value);
    }

    /// Links a new node holding `value` directly before the back sentinel.
    pub fn push_back(&mut self, value: T) {
        self.link_before(self.tail, value);
    }

    /// Unlinks the first node and returns its value.
    pub fn pop_front(&mut self) -> Option<T> {
        // SAFETY: The node is an element of this list.
        self.first_node().map(|node| unsafe { self.unlink(node) })
    }

    /// Unlinks the last node and returns its value.
    pub fn pop_back(&mut self) -> Option<T> {
        // SAFETY: The node is an element of this list.
        self.last_node().map(|node| unsafe { self.unlink(node) })
    }

    /// Returns the element at `index`, walking from whichever end is closer. Also available through
    /// the [`Index`] operator.
    ///
    /// # Panics
    /// Fails fast if `index` is out of bounds of the LinkedList.
    #[track_caller]
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Like [`get`](LinkedList::get), but reports an out of bounds `index` as an [`Err`].
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        // SAFETY: checked_seek only returns elements.
        Ok(unsafe { self.checked_seek(index)?.value() })
    }

    /// Mutable version of [`get`](LinkedList::get), also available through [`IndexMut`].
    ///
    /// # Panics
    /// Fails fast if `index` is out of bounds of the LinkedList.
    #[track_caller]
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Like [`get_mut`](LinkedList::get_mut), but reports an out of bounds `index` as an [`Err`].
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        // SAFETY: checked_seek only returns elements.
        Ok(unsafe { self.checked_seek(index)?.value_mut() })
    }

    /// Inserts `value` so that it ends up at `index`. Inserting at `len` is equivalent to
    /// [`push_back`](LinkedList::push_back).
    ///
    /// # Panics
    /// Fails fast if `index` is greater than the length of the LinkedList.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` so that it ends up at `index`, returning an [`Err`] rather than failing
    /// fast if `index` is greater than the length of the LinkedList.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        let at = if index == self.len {
            self.tail
        } else {
            self.checked_seek(index)?
        };
        self.link_before(at, value);
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    /// Fails fast if `index` is out of bounds of the LinkedList.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes and returns the element at `index`, returning an [`Err`] rather than failing fast if
    /// it is out of bounds.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let node = self.checked_seek(index)?;
        // SAFETY: checked_seek only returns elements of this list.
        Ok(unsafe { self.unlink(node) })
    }

    /// Replaces the element at `index` with `new_value`, returning the old value.
    ///
    /// # Panics
    /// Fails fast if `index` is out of bounds of the LinkedList.
    #[track_caller]
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        mem::replace(self.get_mut(index), new_value)
    }

    /// Removes and drops every element.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Moves every element of `other` onto the end of self in `O(1)`, leaving `other` empty.
    ///
    /// # Examples
    /// ```
    /// # use toolkit::collections::linked::LinkedList;
    /// let mut a: LinkedList<_> = (0..3).collect();
    /// let mut b: LinkedList<_> = (3..5).collect();
    /// a.append(&mut b);
    /// assert!(b.is_empty());
    /// assert!(a.iter().copied().eq(0..5));
    /// ```
    pub fn append(&mut self, other: &mut LinkedList<T>) {
        let (Some(first), Some(last)) = (other.first_node(), other.last_node()) else {
            return;
        };

        let before = self.tail.prev();
        before.set_next(first);
        first.set_prev(before);
        last.set_next(self.tail);
        self.tail.set_prev(last);
        self.len += other.len;

        other.head.set_next(other.tail);
        other.tail.set_prev(other.head);
        other.len = 0;
    }

    /// Exchanges the contents of two LinkedLists.
    pub const fn swap(&mut self, other: &mut LinkedList<T>) {
        mem::swap(self, other);
    }

    /// Removes every element for which `predicate` returns true, returning the number removed.
    pub fn remove_if<F: FnMut(&T) -> bool>(&mut self, mut predicate: F) -> usize {
        let mut removed = 0;
        let mut node = self.head.next();

        while node != self.tail {
            let next = node.next();
            // SAFETY: node is an element of this list, which isn't otherwise borrowed.
            if predicate(unsafe { node.value() }) {
                // SAFETY: As above, and node isn't used again after being unlinked.
                drop(unsafe { self.unlink(node) });
                removed += 1;
            }
            node = next;
        }

        removed
    }

    /// Reverses the order of the elements in place, without moving any of them.
    pub fn reverse(&mut self) {
        // Swapping the links of every node, including both sentinels, reverses the chain. The
        // sentinels then swap roles.
        let mut node = self.head;
        loop {
            let next = node.next();
            node.set_next(node.prev());
            node.set_prev(next);

            if node == self.tail { break; }
            node = next;
        }

        mem::swap(&mut self.head, &mut self.tail);
    }

    /// Sorts the list with the provided comparison function. The sort is stable and works by
    /// relinking nodes, so no element is moved.
    pub fn sort_by<F: FnMut(&T, &T) -> Ordering>(&mut self, mut compare: F) {
        if self.len < 2 { return; }

        let mut nodes = Vector::with_cap(self.len);
        let mut node = self.head.next();
        while node != self.tail {
            nodes.push(node);
            node = node.next();
        }

        // SAFETY: Every collected node is an element of this list, which isn't otherwise borrowed.
        nodes.sort_by(|a: &NodeRef<T>, b: &NodeRef<T>| unsafe { compare(a.value(), b.value()) });

        let mut prev = self.head;
        for &node in nodes.iter() {
            prev.set_next(node);
            node.set_prev(prev);
            prev = node;
        }
        prev.set_next(self.tail);
        self.tail.set_prev(prev);
    }

    /// Merges `other` into self by relinking nodes, leaving `other` empty. If both lists are
    /// sorted according to `compare`, the result is too. Where elements compare equal, those from
    /// self come first.
    pub fn merge_by<F: FnMut(&T, &T) -> Ordering>(
        &mut self,
        other: &mut LinkedList<T>,
        mut compare: F,
    ) {
        let mut at = self.head.next();

        while let Some(incoming) = other.first_node() {
            // SAFETY: at and incoming are elements of two different lists, neither of which is
            // otherwise borrowed.
            let goes_before = at == self.tail
                || unsafe { compare(incoming.value(), at.value()) } == Ordering::Less;

            if goes_before {
                other.detach(incoming);
                self.attach_before(at, incoming);
            } else {
                at = at.next();
            }
        }
    }

    /// Returns an iterator over references to the elements, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over mutable references to the elements, from front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns the index of the first element equal to `item`, if there is one.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    /// Returns true if the list contains an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Removes every element equal to `item`, returning the number removed.
    pub fn remove_value(&mut self, item: &T) -> usize {
        self.remove_if(|element| element == item)
    }
}

impl<T: Ord> LinkedList<T> {
    /// Sorts the list into ascending order. The sort is stable.
    ///
    /// # Examples
    /// ```
    /// # use toolkit::collections::linked::LinkedList;
    /// let mut list: LinkedList<_> = [4, 1, 3, 2].into_iter().collect();
    /// list.sort();
    /// assert!(list.iter().copied().eq(1..=4));
    /// ```
    pub fn sort(&mut self) {
        self.sort_by(Ord::cmp);
    }

    /// Merges the sorted list `other` into this sorted list, leaving `other` empty.
    pub fn merge(&mut self, other: &mut LinkedList<T>) {
        self.merge_by(other, Ord::cmp);
    }
}

impl<T> LinkedList<T> {
    pub(crate) fn first_node(&self) -> Option<NodeRef<T>> {
        let node = self.head.next();
        (node != self.tail).then_some(node)
    }

    pub(crate) fn last_node(&self) -> Option<NodeRef<T>> {
        let node = self.tail.prev();
        (node != self.head).then_some(node)
    }

    /// Returns the element node at `index`, walking from whichever end is closer.
    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodeRef<T>, IndexOutOfBounds> {
        if index >= self.len {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        let mut node;
        if index < self.len / 2 {
            node = self.head.next();
            for _ in 0..index {
                node = node.next();
            }
        } else {
            node = self.tail.prev();
            for _ in index + 1..self.len {
                node = node.prev();
            }
        }
        Ok(node)
    }

    /// Allocates a node for `value` and links it before `at`, which may be the back sentinel.
    pub(crate) fn link_before(&mut self, at: NodeRef<T>, value: T) -> NodeRef<T> {
        let node = NodeRef::from_value(value, at.prev(), at);
        at.prev().set_next(node);
        at.set_prev(node);
        self.len += 1;
        node
    }

    /// Unlinks an element node and frees it, returning its value.
    ///
    /// # Safety
    /// `node` must be an element of this list, which isn't used again afterwards.
    pub(crate) unsafe fn unlink(&mut self, node: NodeRef<T>) -> T {
        self.detach(node);
        // SAFETY: The node is an element which has just been made unreachable.
        unsafe { node.take_value() }
    }

    /// Unlinks an element node without freeing it.
    pub(crate) fn detach(&mut self, node: NodeRef<T>) {
        node.prev().set_next(node.next());
        node.next().set_prev(node.prev());
        self.len -= 1;
    }

    /// Links a detached element node before `at`.
    pub(crate) fn attach_before(&mut self, at: NodeRef<T>, node: NodeRef<T>) {
        node.set_prev(at.prev());
        node.set_next(at);
        at.prev().set_next(node);
        at.set_prev(node);
        self.len += 1;
    }

    /// Checks that every link has a matching link in the opposite direction, and that the length
    /// is correct.
    #[cfg(test)]
    pub(crate) fn verify_double_links(&self) {
        let mut count = 0;
        let mut node = self.head;
        while node != self.tail {
            let next = node.next();
            assert!(next.prev() == node, "Every next node should link back to its previous.");
            node = next;
            count += 1;
        }
        assert_eq!(count - 1, self.len, "The length should match the number of linked elements.");
        assert!(self.is_empty() == (self.len == 0));
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: The sentinels belong to this list alone, and are never used again.
        unsafe {
            self.head.drop_sentinel();
            self.tail.drop_sentinel();
        }
    }
}

// SAFETY: A LinkedList uniquely owns all of its nodes, so it is safe to Send when T: Send.
unsafe impl<T: Send> Send for LinkedList<T> {}
// SAFETY: Shared access to a LinkedList only ever produces shared references to its elements.
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (index, value) in self.iter().enumerate() {
            if index != 0 {
                write!(f, ") -> (")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, ")")
    }
}
