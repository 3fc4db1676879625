#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_growth() {
    let mut vec = Vector::new();
    assert_eq!(vec.cap(), 0, "A new Vector shouldn't allocate.");

    vec.push(0);
    assert_eq!(vec.cap(), 1, "The first push should allocate the minimum capacity.");
    vec.push(1);
    assert_eq!(vec.cap(), 2);
    vec.push(2);
    assert_eq!(vec.cap(), 4, "Capacity should double when exhausted.");

    assert_eq!(vec.len(), 3);
    assert_eq!(&*vec, &[0, 1, 2], "Elements should keep their order across reallocation.");

    assert_eq!(vec.pop(), Some(2));
    assert_eq!(vec.len(), 2);
    assert_eq!(vec[1], 1, "Popping shouldn't disturb the remaining elements.");
    vec.push(2);

    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 3);
    vec.reserve(2);
    assert_eq!(vec.cap(), 5, "Reserve should allocate exactly the required capacity.");
    vec.reserve(1);
    assert_eq!(vec.cap(), 5, "Reserve shouldn't reallocate when there is enough capacity.");
}

#[test]
fn test_extend_growth() {
    let mut vec = Vector::new();
    let mut reallocations = 0;

    for i in 0..100 {
        let cap = vec.cap();
        vec.extend([i]);
        if vec.cap() != cap {
            reallocations += 1;
        }
    }

    assert_eq!(vec.len(), 100);
    assert_eq!(vec.cap(), 128, "Extending one element at a time should grow like pushing.");
    assert_eq!(reallocations, 8, "Capacity should only change when it doubles.");

    vec.extend(100..300);
    assert_eq!(vec.cap(), 300, "A large extend should allocate at least what it needs.");
    assert_eq!(vec[299], 299);

    let mut other = Vector::new();
    for i in 0..10 {
        other.append(Vector::from([i]));
    }
    assert_eq!(other.cap(), 16, "Repeated appends should also grow geometrically.");
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::<ZeroSizedType>::repeat_default(5);
    assert_eq!(vec.len(), 5);
    assert_eq!(vec[4], ZeroSizedType, "Indexing a ZST Vector should work.");

    vec.push(ZeroSizedType);
    assert_eq!(vec.pop(), Some(ZeroSizedType));
    assert_eq!(vec.into_iter().count(), 5, "Should iterate over the right number of ZSTs.");
}

#[test]
fn test_bounds_checks() {
    let mut vec: Vector<_> = (0..3).collect();

    assert_eq!(*vec.get(2), 2);
    assert_eq!(vec.try_get(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(vec.try_get_mut(7).err(), Some(IndexOutOfBounds { index: 7, len: 3 }));
    *vec.get_mut(0) = 10;
    assert_eq!(vec[0], 10);

    assert_eq!(vec.try_insert(4, 0), Err(IndexOutOfBounds { index: 4, len: 3 }));
    assert_eq!(vec.try_remove(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(vec.len(), 3, "Failed operations shouldn't change the Vector.");

    assert_panics!({
        let vec: Vector<u8> = Vector::new();
        vec.get(0);
    });
    assert_panics!({
        let vec: Vector<_> = (0..3).collect();
        let _value = vec[3];
    });
    assert_panics!({
        let mut vec: Vector<_> = (0..3).collect();
        vec.remove(3);
    });
    assert_panics!({
        let mut vec: Vector<_> = (0..3).collect();
        vec.erase(1..4);
    });
}

#[test]
fn test_insert_and_remove() {
    let mut vec: Vector<_> = (0..5).collect();

    vec.insert(0, 10);
    vec.insert(3, 11);
    vec.insert(vec.len(), 12);
    assert_eq!(&*vec, &[10, 0, 1, 11, 2, 3, 4, 12]);

    assert_eq!(vec.remove(0), 10);
    assert_eq!(vec.remove(2), 11);
    assert_eq!(vec.remove(vec.len() - 1), 12);
    assert_eq!(&*vec, &[0, 1, 2, 3, 4], "Removal should undo insertion.");

    assert_eq!(vec.replace(1, 9), 1);
    assert_eq!(vec.front(), Some(&0));
    assert_eq!(vec.back(), Some(&4));
    if let Some(back) = vec.back_mut() {
        *back = 8;
    }
    assert_eq!(&*vec, &[0, 9, 2, 3, 8]);
}

#[test]
fn test_erase() {
    let counter = CountedDrop::new(0);
    let mut vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    vec.erase(2..5);
    assert_eq!(counter.take(), 3, "Erasing should drop every element in the range.");
    assert_eq!(vec.len(), 7);

    vec.erase(..=1);
    assert_eq!(counter.take(), 2);
    vec.erase(3..3);
    assert_eq!(counter.take(), 0, "Erasing an empty range should do nothing.");
    vec.erase(..);
    assert_eq!(counter.take(), 5);
    assert!(vec.is_empty());

    let mut vec: Vector<_> = (0..6).collect();
    vec.erase(1..3);
    assert_eq!(&*vec, &[0, 3, 4, 5], "Following elements should fill the gap in order.");
}

#[test]
fn test_resize_and_truncate() {
    let mut vec: Vector<u8> = Vector::new();
    vec.resize(3);
    assert_eq!(&*vec, &[0, 0, 0]);

    vec.resize_with_value(5, 7);
    assert_eq!(&*vec, &[0, 0, 0, 7, 7]);

    vec.resize(2);
    assert_eq!(&*vec, &[0, 0]);

    let counter = CountedDrop::new(0);
    let mut vec = Vector::repeat_item(counter.clone(), 6);
    assert_eq!(counter.take(), 1, "Only the original item should be dropped after cloning.");
    assert_eq!(vec.cap(), 6);

    vec.truncate(8);
    assert_eq!(vec.len(), 6, "Truncating to a longer length should do nothing.");
    vec.truncate(2);
    assert_eq!(counter.take(), 4);
    assert_eq!(vec.cap(), 6, "Truncation shouldn't affect the capacity.");

    vec.clear();
    assert_eq!(counter.take(), 2);
    assert!(vec.is_empty());
}

#[test]
fn test_append_and_swap() {
    let mut a: Vector<_> = (0..3).collect();
    let b: Vector<_> = (3..6).collect();

    a.append(b);
    assert_eq!(&*a, &[0, 1, 2, 3, 4, 5]);

    let counter = CountedDrop::new(0);
    let mut c: Vector<_> = iter::repeat_with(|| counter.clone()).take(2).collect();
    c.append(iter::repeat_with(|| counter.clone()).take(3).collect());
    assert_eq!(counter.take(), 0, "Appended values should be moved, not dropped.");
    drop(c);
    assert_eq!(counter.take(), 5);

    let mut d = Vector::from([9]);
    a.swap(&mut d);
    assert_eq!(&*a, &[9]);
    assert_eq!(d.len(), 6);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(vec);

    assert_eq!(counter.take(), 10, "10 elements should have been dropped.");
}

#[test]
fn test_into_iter() {
    let vec: Vector<_> = (0..5).collect();
    let mut iter = vec.into_iter();

    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.as_slice(), &[1, 2, 3]);
    assert_eq!(iter.collect::<Vector<_>>(), Vector::from([1, 2, 3]));

    let counter = CountedDrop::new(0);
    let vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(6).collect();
    let mut iter = vec.into_iter();
    drop(iter.next());
    drop(iter.next_back());
    assert_eq!(counter.take(), 2);

    drop(iter);
    assert_eq!(counter.take(), 4, "Dropping the iterator should drop the remaining values.");

    let vec: Vector<_> = (0..4).collect();
    assert_eq!((&vec).into_iter().rev().copied().collect::<Vector<_>>(), Vector::from([3, 2, 1, 0]));
}

#[test]
fn test_clone_and_equality() {
    let vec: Vector<_> = (0..5).collect();
    let copy = vec.clone();

    assert_eq!(vec, copy, "A clone should be equal to the original.");
    assert_ne!(vec.as_ptr(), copy.as_ptr(), "A clone should have its own allocation.");
    assert_ne!(vec, Vector::from([0, 1, 2, 3]));

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&vec),
        state.hash_one(&copy),
        "Equal Vectors should have the same hash."
    );

    assert!(vec.contains(&3));
    assert!(!vec.contains(&5));
    assert_eq!(vec.index_of(&2), Some(2));
    assert_eq!(vec.index_of(&7), None);
}

#[test]
fn test_sort_through_slice() {
    let mut vec = Vector::from([5, 3, 8, 1, 9, 2]);
    vec.sort();
    assert_eq!(&*vec, &[1, 2, 3, 5, 8, 9]);

    vec.sort_by(|a, b| b.cmp(a));
    assert_eq!(&*vec, &[9, 8, 5, 3, 2, 1]);
}

#[test]
fn test_formatting() {
    let vec = Vector::from([1, 2, 3]);
    assert_eq!(vec.to_string(), "[1, 2, 3]");
    assert_eq!(Vector::<u8>::new().to_string(), "[]");
    assert_eq!(
        format!("{vec:?}"),
        "Vector { contents: [1, 2, 3], len: 3, cap: 3 }"
    );
}
