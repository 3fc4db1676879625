use std::fmt::{self, Debug, Formatter};

use crate::collections::contiguous::Vector;

/// A collection which always provides access to its greatest element, implemented as a binary
/// max-heap stored in a [`Vector`].
///
/// The heap is stored level by level, so the children of the element at `i` are found at
/// `2i + 1` and `2i + 2`, and its parent at `(i - 1) / 2`. Every element is greater than or equal to
/// both of its children, which puts the greatest element at index 0.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `top` | `O(1)` |
/// | `push` | `O(log n)` |
/// | `pop` | `O(log n)` |
/// | `from_iter` | `O(n)` |
/// | `into_sorted_vector` | `O(n log n)` |
///
/// # Examples
/// ```
/// # use toolkit::collections::adapters::PriorityQueue;
/// let mut queue = PriorityQueue::new();
/// queue.push(5);
/// queue.push(3);
/// queue.push(8);
/// queue.push(1);
///
/// assert_eq!(queue.top(), Some(&8));
/// assert_eq!(queue.pop(), Some(8));
/// assert_eq!(queue.top(), Some(&5));
/// ```
pub struct PriorityQueue<T: Ord> {
    data: Vector<T>,
}

impl<T: Ord> PriorityQueue<T> {
    pub const fn new() -> PriorityQueue<T> {
        PriorityQueue {
            data: Vector::new(),
        }
    }

    /// Creates a new PriorityQueue with space for `cap` elements.
    pub fn with_cap(cap: usize) -> PriorityQueue<T> {
        PriorityQueue {
            data: Vector::with_cap(cap),
        }
    }

    pub const fn len(&self) -> usize {
        self.data.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a reference to the greatest element, if there is one.
    pub fn top(&self) -> Option<&T> {
        self.data.front()
    }

    /// Adds `value` to the queue, moving it up the heap until its parent isn't less than it.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes the greatest element and returns it, if there is one.
    ///
    /// The root is swapped with the last element, which is then removed, and the new root is
    /// moved down the heap.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.data.len().checked_sub(1)?;
        self.data[..].swap(0, last);
        let top = self.data.pop();
        self.sift_down(0, last);
        top
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the queue, returning its elements in ascending order.
    ///
    /// # Examples
    /// ```
    /// # use toolkit::collections::adapters::PriorityQueue;
    /// let queue: PriorityQueue<_> = [4, 1, 5, 2, 3].into_iter().collect();
    /// assert_eq!(&*queue.into_sorted_vector(), &[1, 2, 3, 4, 5]);
    /// ```
    pub fn into_sorted_vector(mut self) -> Vector<T> {
        // Repeatedly move the root behind the shrinking heap.
        let mut end = self.data.len();
        while end > 1 {
            end -= 1;
            self.data[..].swap(0, end);
            self.sift_down(0, end);
        }
        self.data
    }

    /// Consumes the queue, returning the underlying Vector in heap order.
    pub fn into_vector(self) -> Vector<T> {
        self.data
    }

    /// Returns the elements as a slice, in heap order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index] <= self.data[parent] { break; }

            self.data[..].swap(index, parent);
            index = parent;
        }
    }

    /// Moves the element at `index` down the heap formed by the elements before `end`.
    fn sift_down(&mut self, mut index: usize, end: usize) {
        loop {
            let mut largest = index;
            for child in [2 * index + 1, 2 * index + 2] {
                if child < end && self.data[child] > self.data[largest] {
                    largest = child;
                }
            }

            if largest == index { break; }

            self.data[..].swap(index, largest);
            index = largest;
        }
    }

    fn heapify(&mut self) {
        let len = self.data.len();
        for index in (0..len / 2).rev() {
            self.sift_down(index, len);
        }
    }

    #[cfg(test)]
    pub(crate) fn verify_heap_order(&self) {
        for index in 1..self.data.len() {
            assert!(
                self.data[(index - 1) / 2] >= self.data[index],
                "Every element should be no greater than its parent."
            );
        }
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vector<T>> for PriorityQueue<T> {
    fn from(value: Vector<T>) -> Self {
        let mut queue = PriorityQueue { data: value };
        queue.heapify();
        queue
    }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Vector<T>>().into()
    }
}

impl<T: Ord> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Ord + Clone> Clone for PriorityQueue<T> {
    fn clone(&self) -> Self {
        PriorityQueue {
            data: self.data.clone(),
        }
    }
}

impl<T: Ord + Debug> Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("top", &self.top())
            .field("len", &self.len())
            .finish()
    }
}
