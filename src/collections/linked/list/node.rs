use std::marker::PhantomData;
use std::ptr::NonNull;

/// The links shared by every node of a list. A sentinel is allocated as a bare `Links`, while an
/// element is allocated as a whole [`Node`] beginning with its `Links`.
pub(crate) struct Links<T> {
    pub prev: NodeRef<T>,
    pub next: NodeRef<T>,
    pub _phantom: PhantomData<T>,
}

#[repr(C)]
pub(crate) struct Node<T> {
    pub links: Links<T>,
    pub value: T,
}

/// An unowned pointer to the links of a node. The accessors for the links are safe to call as
/// long as the node is alive, which every NodeRef stored in a live list is. The accessors for the
/// value are only valid for element nodes, never for sentinels.
pub(crate) struct NodeRef<T>(pub NonNull<Links<T>>);

impl<T> NodeRef<T> {
    /// Allocates a sentinel whose links both point to itself.
    pub fn sentinel() -> NodeRef<T> {
        let node = NodeRef(NonNull::from(Box::leak(Box::new(Links {
            prev: NodeRef(NonNull::dangling()),
            next: NodeRef(NonNull::dangling()),
            _phantom: PhantomData,
        }))));
        node.set_prev(node);
        node.set_next(node);
        node
    }

    /// Allocates an element node holding `value`, between `prev` and `next`. The neighbours
    /// themselves aren't updated.
    pub fn from_value(value: T, prev: NodeRef<T>, next: NodeRef<T>) -> NodeRef<T> {
        let node = Box::leak(Box::new(Node {
            links: Links {
                prev,
                next,
                _phantom: PhantomData,
            },
            value,
        }));
        // Node is repr(C) with its links first, so a pointer to the node is a pointer to them.
        NodeRef(NonNull::from(node).cast())
    }

    pub fn prev(self) -> NodeRef<T> {
        // SAFETY: The node is alive and nothing holds a reference to its links.
        unsafe { (*self.0.as_ptr()).prev }
    }

    pub fn next(self) -> NodeRef<T> {
        // SAFETY: The node is alive and nothing holds a reference to its links.
        unsafe { (*self.0.as_ptr()).next }
    }

    pub fn set_prev(self, prev: NodeRef<T>) {
        // SAFETY: The node is alive and nothing holds a reference to its links.
        unsafe { (*self.0.as_ptr()).prev = prev; }
    }

    pub fn set_next(self, next: NodeRef<T>) {
        // SAFETY: The node is alive and nothing holds a reference to its links.
        unsafe { (*self.0.as_ptr()).next = next; }
    }

    /// Returns a reference to the value of an element node.
    ///
    /// # Safety
    /// The node must be an element, not a sentinel, and must outlive `'a` without its value
    /// being mutably borrowed.
    pub unsafe fn value<'a>(self) -> &'a T {
        // SAFETY: The caller guarantees that this is an element, allocated as a whole Node.
        unsafe { &(*self.0.as_ptr().cast::<Node<T>>()).value }
    }

    /// Returns a mutable reference to the value of an element node.
    ///
    /// # Safety
    /// The node must be an element, not a sentinel, and must outlive `'a` without its value
    /// being borrowed elsewhere.
    pub unsafe fn value_mut<'a>(self) -> &'a mut T {
        // SAFETY: The caller guarantees that this is an element, allocated as a whole Node.
        unsafe { &mut (*self.0.as_ptr().cast::<Node<T>>()).value }
    }

    /// Frees an element node, returning its value. The neighbours aren't updated.
    ///
    /// # Safety
    /// The node must be an element which is no longer reachable from any list.
    pub unsafe fn take_value(self) -> T {
        // SAFETY: The caller guarantees that this is an unlinked element, allocated as a Box<Node>.
        let node = unsafe { Box::from_raw(self.0.as_ptr().cast::<Node<T>>()) };
        node.value
    }

    /// Frees a sentinel.
    ///
    /// # Safety
    /// The node must be a sentinel which is no longer used by any list.
    pub unsafe fn drop_sentinel(self) {
        // SAFETY: The caller guarantees that this is an unused sentinel, allocated as Box<Links>.
        drop(unsafe { Box::from_raw(self.0.as_ptr()) });
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodeRef<T> {}
