use std::fmt::{self, Debug, Formatter};

use super::{LinkedList, NodeRef};

impl<T> LinkedList<T> {
    /// Returns a [`CursorMut`] positioned at the first element, or at the ghost position if the
    /// list is empty.
    pub fn cursor_front(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            current: self.head.next(),
            index: 0,
            list: self,
        }
    }

    /// Returns a [`CursorMut`] positioned at the last element, or at the ghost position if the
    /// list is empty.
    pub fn cursor_back(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            current: self.last_node().unwrap_or(self.tail),
            index: self.len.saturating_sub(1),
            list: self,
        }
    }
}

/// A position within a [`LinkedList`], from which elements can be inserted and removed in `O(1)`.
///
/// Besides pointing at an element, a cursor can point at the "ghost" position, which sits past the
/// last element and before the first. The ghost has the index `len` and no value. Moving forwards
/// from the ghost reaches the front of the list, and moving backwards reaches the back.
///
/// # Examples
/// ```
/// # use toolkit::collections::linked::LinkedList;
/// let mut list: LinkedList<_> = [1, 2, 4].into_iter().collect();
///
/// let mut cursor = list.cursor_front();
/// cursor.move_next();
/// cursor.insert_after(3);
/// assert_eq!(cursor.remove_current(), Some(2));
/// assert_eq!(cursor.current(), Some(&mut 3));
///
/// assert!(list.iter().copied().eq([1, 3, 4]));
/// ```
pub struct CursorMut<'a, T> {
    pub(crate) list: &'a mut LinkedList<T>,
    // The back sentinel represents the ghost position.
    pub(crate) current: NodeRef<T>,
    pub(crate) index: usize,
}

impl<'a, T> CursorMut<'a, T> {
    /// Returns the index of the current element, or the length of the list at the ghost position.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns true if the cursor is at the ghost position.
    pub fn is_ghost(&self) -> bool {
        self.current == self.list.tail
    }

    /// Returns a mutable reference to the current element, or [`None`] at the ghost position.
    pub fn current(&mut self) -> Option<&mut T> {
        if self.is_ghost() { return None; }
        // SAFETY: The node is an element of the list, which the cursor borrows mutably.
        Some(unsafe { self.current.value_mut() })
    }

    /// Returns a reference to the element after the current one, which is the front of the list
    /// at the ghost position.
    pub fn peek_next(&self) -> Option<&T> {
        let next = self.forward(self.current);
        // SAFETY: As for current, and forward never returns a sentinel.
        next.map(|node| unsafe { node.value() })
    }

    /// Returns a reference to the element before the current one, which is the back of the list
    /// at the ghost position.
    pub fn peek_prev(&self) -> Option<&T> {
        let prev = self.backward(self.current);
        // SAFETY: As for current, and backward never returns a sentinel.
        prev.map(|node| unsafe { node.value() })
    }

    /// Moves to the next element, or to the ghost position from the last element.
    pub fn move_next(&mut self) {
        match self.forward(self.current) {
            Some(node) => {
                self.current = node;
                self.index = if self.index == self.list.len { 0 } else { self.index + 1 };
            },
            None => {
                self.current = self.list.tail;
                self.index = self.list.len;
            },
        }
    }

    /// Moves to the previous element, or to the ghost position from the first element.
    pub fn move_prev(&mut self) {
        match self.backward(self.current) {
            Some(node) => {
                self.current = node;
                self.index -= 1;
            },
            None => {
                self.current = self.list.tail;
                self.index = self.list.len;
            },
        }
    }

    /// Inserts `value` after the current element. At the ghost position, `value` becomes the new
    /// front of the list.
    pub fn insert_after(&mut self, value: T) {
        let at = if self.is_ghost() {
            self.list.head.next()
        } else {
            self.current.next()
        };
        self.list.link_before(at, value);

        if self.is_ghost() {
            self.index += 1;
        }
    }

    /// Inserts `value` before the current element. At the ghost position, `value` becomes the new
    /// back of the list.
    pub fn insert_before(&mut self, value: T) {
        self.list.link_before(self.current, value);
        self.index += 1;
    }

    /// Removes the current element and returns it, moving the cursor to the element which
    /// followed it. Nothing is removed at the ghost position.
    pub fn remove_current(&mut self) -> Option<T> {
        if self.is_ghost() { return None; }

        let node = self.current;
        self.current = node.next();
        // SAFETY: The node is an element of the list, and the cursor has moved on from it.
        Some(unsafe { self.list.unlink(node) })
    }

    /// Returns a shared view of the list.
    pub fn as_list(&self) -> &LinkedList<T> {
        &*self.list
    }

    fn forward(&self, node: NodeRef<T>) -> Option<NodeRef<T>> {
        let next = if node == self.list.tail { self.list.head.next() } else { node.next() };
        (next != self.list.tail).then_some(next)
    }

    fn backward(&self, node: NodeRef<T>) -> Option<NodeRef<T>> {
        let prev = if node == self.list.tail { self.list.tail.prev() } else { node.prev() };
        (prev != self.list.head).then_some(prev)
    }
}

impl<'a, T: Debug> Debug for CursorMut<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("list", &self.list)
            .field("index", &self.index)
            .finish()
    }
}
