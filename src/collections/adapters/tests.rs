#![cfg(test)]

use std::iter;

use super::*;
use crate::collections::contiguous::Vector;
use crate::collections::linked::LinkedList;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_deque() {
    let mut deque = Deque::new();
    assert!(deque.is_empty());
    assert_eq!(deque.pop_front(), None);

    deque.push_back(2);
    deque.push_front(1);
    deque.push_back(4);
    deque.insert(2, 3);
    assert_eq!(deque.len(), 4);
    assert_eq!(deque.get(2), Some(&3));
    assert_eq!(deque.front(), Some(&1));
    assert_eq!(deque.back(), Some(&4));

    *deque.back_mut().unwrap() = 40;
    assert_eq!(deque.remove(1), 2);
    assert_eq!(deque.pop_back(), Some(40));
    assert_eq!(deque.pop_front(), Some(1));
    assert_eq!(deque.into_inner(), [3].into_iter().collect::<LinkedList<_>>());

    assert_panics!({
        let mut deque: Deque<u8> = Deque::new();
        deque.remove(0);
    });
}

#[test]
fn test_deque_over_vector() {
    let mut a: Deque<_, Vector<_>> = (1..4).collect();
    a.push_front(0);
    assert_eq!(a.front(), Some(&0), "Any container with both ends should work.");

    let mut b = Deque::with_container(Vector::from([7]));
    a.swap(&mut b);
    assert_eq!(a.len(), 1);
    assert_eq!(b.into_inner(), Vector::from([0, 1, 2, 3]));

    a.clear();
    assert!(a.is_empty());
    assert_eq!(a, Deque::default());
}

#[test]
fn test_stack() {
    let mut stack = Stack::new();
    assert_eq!(stack.top(), None);

    stack.push(1);
    stack.push(2);
    stack.push(3);
    assert_eq!(stack.len(), 3);
    assert_eq!(stack.top(), Some(&3), "The top should be the last element pushed.");

    *stack.top_mut().unwrap() = 30;
    assert_eq!(stack.pop(), Some(30));
    assert_eq!(stack.pop(), Some(2));

    let mut other: Stack<_> = (5..8).collect();
    stack.swap(&mut other);
    assert_eq!(stack.top(), Some(&7));
    assert_eq!(other.top(), Some(&1));

    let mut listed: Stack<_, LinkedList<_>> = Stack::default();
    listed.extend([1, 2]);
    assert_eq!(listed.pop(), Some(2), "A list should work as the container too.");
}

#[test]
fn test_queue() {
    let mut queue = Queue::new();
    assert_eq!(queue.pop(), None);

    queue.push(1);
    queue.push(2);
    queue.push(3);
    assert_eq!(queue.front(), Some(&1));
    assert_eq!(queue.back(), Some(&3));
    assert_eq!(queue.pop(), Some(1), "The first element pushed should be popped first.");
    assert_eq!(queue.pop(), Some(2));
    assert_eq!(queue.len(), 1);

    let mut listed: Queue<_, LinkedList<_>> = (0..3).collect();
    listed.push(3);
    assert!(iter::from_fn(|| listed.pop()).eq(0..4));
    assert!(listed.is_empty());
}

#[test]
fn test_priority_queue() {
    let mut queue = PriorityQueue::new();
    for value in [5, 3, 8, 1] {
        queue.push(value);
        queue.verify_heap_order();
    }

    assert_eq!(queue.top(), Some(&8));
    assert_eq!(queue.pop(), Some(8));
    assert_eq!(queue.top(), Some(&5));
    assert_eq!(queue.pop(), Some(5));
    assert_eq!(queue.top(), Some(&3));
    queue.verify_heap_order();

    assert_eq!(queue.pop(), Some(3));
    assert_eq!(queue.pop(), Some(1));
    assert_eq!(queue.pop(), None, "Popping an empty queue should return None.");
    assert_eq!(queue.top(), None);
}

#[test]
fn test_priority_queue_order() {
    let values = [9, 4, 7, 1, 8, 2, 2, 6, 3, 5, 0, 7];
    let mut queue: PriorityQueue<_> = values.into_iter().collect();
    queue.verify_heap_order();
    assert_eq!(queue.len(), values.len());

    queue.extend([10, -1]);
    queue.verify_heap_order();

    let mut popped = Vector::new();
    while let Some(value) = queue.pop() {
        queue.verify_heap_order();
        popped.push(value);
    }
    assert!(
        popped.windows(2).all(|pair| pair[0] >= pair[1]),
        "Elements should be popped in descending order."
    );

    let queue: PriorityQueue<_> = values.into_iter().collect();
    let sorted = queue.into_sorted_vector();
    assert!(sorted.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(sorted.len(), values.len());
}

#[test]
fn test_priority_queue_drop() {
    #[derive(Debug)]
    struct Entry(u8, CountedDrop);

    impl PartialEq for Entry {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    impl Eq for Entry {}

    impl PartialOrd for Entry {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Entry {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }

    let counter = CountedDrop::new(0);
    let mut queue: PriorityQueue<_> = (0..6).map(|i| Entry(i, counter.clone())).collect();
    drop(queue.pop());
    assert_eq!(counter.take(), 1);
    queue.clear();
    assert_eq!(counter.take(), 5, "Clearing should drop every element.");
}
