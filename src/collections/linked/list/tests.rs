#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

fn list_of<I: IntoIterator<Item = i32>>(items: I) -> LinkedList<i32> {
    items.into_iter().collect()
}

#[test]
fn test_push_and_pop() {
    let mut list = LinkedList::new();
    assert!(list.is_empty());
    assert_eq!(list.front(), None);
    assert_eq!(list.pop_back(), None, "Popping an empty list should return None.");

    list.push_back(2);
    list.push_front(1);
    list.push_back(3);
    list.verify_double_links();

    assert_eq!(list.len(), 3);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&3));

    *list.front_mut().unwrap() = 10;
    *list.back_mut().unwrap() = 30;
    assert_eq!(list.pop_front(), Some(10));
    assert_eq!(list.pop_back(), Some(30));
    assert_eq!(list.pop_back(), Some(2));
    assert!(list.is_empty());
    list.verify_double_links();
}

#[test]
fn test_zst_support() {
    let mut list: LinkedList<_> = iter::repeat_n(ZeroSizedType, 4).collect();
    assert_eq!(list.len(), 4);
    assert_eq!(list.remove(2), ZeroSizedType);
    assert_eq!(list.into_iter().count(), 3, "Should iterate over the right number of ZSTs.");
}

#[test]
fn test_indexing() {
    let mut list = list_of(0..7);

    for i in 0..7 {
        assert_eq!(*list.get(i), i as i32, "Seeking from either end should find index {i}.");
    }
    list[5] = 50;
    assert_eq!(list[5], 50);
    assert_eq!(list.replace(1, 11), 1);
    assert_eq!(list[1], 11);

    assert_eq!(list.try_get(7), Err(IndexOutOfBounds { index: 7, len: 7 }));
    assert_eq!(list.try_get_mut(9).err(), Some(IndexOutOfBounds { index: 9, len: 7 }));
    assert_eq!(list.try_insert(8, 0), Err(IndexOutOfBounds { index: 8, len: 7 }));
    assert_eq!(list.try_remove(7), Err(IndexOutOfBounds { index: 7, len: 7 }));

    assert_panics!({
        let list: LinkedList<u8> = LinkedList::new();
        list.get(0);
    });
    assert_panics!({
        let list = list_of(0..3);
        let _value = list[3];
    });
    assert_panics!({
        let mut list = list_of(0..3);
        list.insert(4, 0);
    });
}

#[test]
fn test_insert_and_remove() {
    let mut list = list_of([1, 3]);

    list.insert(1, 2);
    list.insert(0, 0);
    list.insert(4, 4);
    list.verify_double_links();
    assert!(list.iter().copied().eq(0..5), "Inserted elements should end up at their index.");

    assert_eq!(list.remove(4), 4);
    assert_eq!(list.remove(0), 0);
    assert_eq!(list.remove(1), 2);
    list.verify_double_links();
    assert_eq!(list, list_of([1, 3]));
}

#[test]
fn test_append() {
    let mut a = list_of(0..3);
    let mut b = list_of(3..6);

    a.append(&mut b);
    a.verify_double_links();
    b.verify_double_links();
    assert!(b.is_empty(), "The appended list should be left empty.");
    assert_eq!(a, list_of(0..6));

    b.append(&mut a);
    assert_eq!(b.len(), 6, "Appending to an empty list should move everything.");
    a.append(&mut LinkedList::new());
    assert!(a.is_empty());

    b.push_back(6);
    assert_eq!(b.back(), Some(&6), "The appended list should still be usable.");
}

#[test]
fn test_removal_by_value() {
    let mut list = list_of([1, 2, 1, 3, 1]);

    assert!(list.contains(&3));
    assert_eq!(list.index_of(&3), Some(3));
    assert_eq!(list.index_of(&4), None);

    assert_eq!(list.remove_value(&1), 3);
    list.verify_double_links();
    assert_eq!(list, list_of([2, 3]));

    let mut list = list_of(0..10);
    assert_eq!(list.remove_if(|value| value % 2 == 0), 5);
    assert_eq!(list, list_of([1, 3, 5, 7, 9]));

    let counter = CountedDrop::new(0);
    let mut list: LinkedList<_> = iter::repeat_with(|| counter.clone()).take(4).collect();
    list.remove_if(|_| true);
    assert_eq!(counter.take(), 4, "Removed elements should be dropped.");
}

#[test]
fn test_reverse() {
    let mut list = list_of(0..5);
    list.reverse();
    list.verify_double_links();
    assert!(list.iter().copied().eq((0..5).rev()));

    list.push_back(-1);
    list.push_front(5);
    assert_eq!(list, list_of((-1..=5).rev()), "The ends should swap roles.");

    let mut list: LinkedList<i32> = LinkedList::new();
    list.reverse();
    list.verify_double_links();
    assert!(list.is_empty());
}

#[test]
fn test_sort_and_merge() {
    let mut list = list_of([5, 2, 8, 1, 9, 3]);
    list.sort();
    list.verify_double_links();
    assert_eq!(list, list_of([1, 2, 3, 5, 8, 9]));

    let mut pairs: LinkedList<_> = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')].into_iter().collect();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    assert!(
        pairs.iter().map(|pair| pair.1).eq(['b', 'd', 'a', 'c']),
        "Sorting should be stable."
    );

    let mut a = list_of([1, 3, 5, 7]);
    let mut b = list_of([0, 3, 4, 8, 9]);
    a.merge(&mut b);
    a.verify_double_links();
    assert!(b.is_empty());
    assert_eq!(a, list_of([0, 1, 3, 3, 4, 5, 7, 8, 9]));

    let mut a: LinkedList<_> = [(1, 'a'), (2, 'a')].into_iter().collect();
    let mut b: LinkedList<_> = [(1, 'b'), (2, 'b')].into_iter().collect();
    a.merge_by(&mut b, |x, y| x.0.cmp(&y.0));
    assert!(
        a.iter().map(|pair| pair.1).eq(['a', 'b', 'a', 'b']),
        "Equal elements of self should come first."
    );
}

#[test]
fn test_cursor() {
    let mut list = list_of([1, 2, 3]);
    let mut cursor = list.cursor_front();

    assert_eq!(cursor.current(), Some(&mut 1));
    cursor.move_prev();
    assert!(cursor.is_ghost(), "Moving before the front should reach the ghost.");
    assert_eq!(cursor.index(), 3);
    assert_eq!(cursor.current(), None);
    assert_eq!(cursor.peek_next(), Some(&1));
    assert_eq!(cursor.peek_prev(), Some(&3));

    cursor.insert_after(0);
    cursor.insert_before(4);
    assert_eq!(cursor.index(), 5);
    assert_eq!(cursor.remove_current(), None, "Nothing should be removed at the ghost.");

    cursor.move_next();
    assert_eq!(cursor.index(), 0);
    assert_eq!(cursor.current(), Some(&mut 0));
    cursor.move_next();
    cursor.move_next();
    assert_eq!(cursor.remove_current(), Some(2));
    assert_eq!(cursor.index(), 2);
    assert_eq!(cursor.current(), Some(&mut 3), "Removing should move to the next element.");

    cursor.insert_after(10);
    cursor.insert_before(20);
    assert_eq!(cursor.index(), 3);
    cursor.as_list().verify_double_links();

    assert!(list.iter().copied().eq([0, 1, 20, 3, 10, 4]));

    let mut list = list_of([1, 2]);
    let mut cursor = list.cursor_back();
    assert_eq!(cursor.remove_current(), Some(2));
    assert!(cursor.is_ghost(), "Removing the last element should reach the ghost.");
    assert_eq!(cursor.index(), 1);

    let mut list: LinkedList<i32> = LinkedList::new();
    let mut cursor = list.cursor_back();
    assert!(cursor.is_ghost());
    cursor.move_next();
    assert!(cursor.is_ghost(), "An empty list should only have the ghost position.");
    cursor.insert_before(1);
    assert_eq!(list, list_of([1]));
}

#[test]
fn test_iter() {
    let mut list = list_of(0..6);

    let mut iter = list.iter();
    assert_eq!(iter.len(), 6);
    assert_eq!(iter.next(), Some(&0));
    assert_eq!(iter.next_back(), Some(&5));
    assert!(iter.clone().copied().eq(1..5));
    assert_eq!(iter.by_ref().rev().count(), 4);
    assert_eq!(iter.next(), None, "The ends of the iterator shouldn't cross.");

    for value in list.iter_mut().rev().take(3) {
        *value *= 10;
    }
    assert_eq!(list, list_of([0, 1, 2, 30, 40, 50]));

    let mut iter = list.into_iter();
    assert_eq!(iter.next_back(), Some(50));
    assert_eq!(iter.collect::<LinkedList<_>>(), list_of([0, 1, 2, 30, 40]));
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let list: LinkedList<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    drop(list);
    assert_eq!(counter.take(), 10, "10 elements should have been dropped.");

    let list: LinkedList<_> = iter::repeat_with(|| counter.clone()).take(5).collect();
    let mut iter = list.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(counter.take(), 5, "Unyielded values should be dropped with the iterator.");
}

#[test]
fn test_clone_and_equality() {
    let list = list_of(0..4);
    let clone = list.clone();
    assert_eq!(list, clone);

    let hasher = RandomState::new();
    assert_eq!(hasher.hash_one(&list), hasher.hash_one(&clone));

    assert_ne!(list, list_of(0..3), "Lists of different lengths shouldn't be equal.");
    assert_ne!(list, list_of([0, 1, 2, 4]));
}

#[test]
fn test_formatting() {
    let list = list_of(1..4);
    assert_eq!(list.to_string(), "(1) -> (2) -> (3)");
    assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    assert_eq!(LinkedList::<i32>::new().to_string(), "()");
}
