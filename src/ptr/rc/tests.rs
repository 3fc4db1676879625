#![cfg(test)]

use std::collections::HashSet;
use std::fmt::Display;

use super::*;
use crate::{coerce, impl_ref_counted};
use crate::util::alloc::{CountedDrop, Tracked};
use crate::util::panic::assert_panics;

trait Shape: RefCounted + Downcast {
    fn area(&self) -> u32;
}

struct Square {
    count: RefCount,
    side: u32,
}

impl_ref_counted!(Square, count);

impl Shape for Square {
    fn area(&self) -> u32 {
        self.side * self.side
    }
}

struct Circle {
    count: RefCount,
}

impl_ref_counted!(Circle, count);

impl Shape for Circle {
    fn area(&self) -> u32 {
        3
    }
}

struct Label {
    count: RefCount,
    text: &'static str,
}

impl_ref_counted!(Label, count);

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

trait Named: RefCounted + Downcast {
    fn name(&self) -> i32;
}

impl Named for Tracked {
    fn name(&self) -> i32 {
        self.value.get()
    }
}

fn square(side: u32) -> Square {
    Square {
        count: RefCount::new(),
        side,
    }
}

#[test]
fn test_freed_once_after_all_refs() {
    let counter = CountedDrop::new(0);
    let first = Ref::new(Tracked::new(1, &counter));

    let handles: [Ref<Tracked>; 5] = std::array::from_fn(|_| first.clone());
    assert_eq!(Ref::strong_count(&first), 6);

    let nullable: [RefPtr<Tracked>; 5] = handles.each_ref().map(RefPtr::from);
    assert_eq!(Ref::strong_count(&first), 11);

    drop(handles);
    drop(first);
    assert_eq!(counter.take(), 0, "Object shouldn't be dropped while a RefPtr remains.");

    let last = nullable[0].clone();
    drop(nullable);
    assert_eq!(last.strong_count(), 1);
    assert_eq!(counter.take(), 0);

    drop(last);
    assert_eq!(counter.take(), 1, "Object should be dropped exactly once with the last owner.");
}

#[test]
fn test_clone_outlives_original() {
    let counter = CountedDrop::new(0);
    let original = RefPtr::new(Tracked::new(1, &counter));
    let copy = original.clone();

    drop(original);
    assert_eq!(counter.take(), 0);
    assert_eq!(copy.value.get(), 1, "The copy should still reach the object.");

    drop(copy);
    assert_eq!(counter.take(), 1, "The copy should drop the object once, as its last owner.");
}

#[test]
fn test_shared_mutation() {
    let counter = CountedDrop::new(0);
    let a = Ref::new(Tracked::new(0, &counter));
    let b = a.clone();

    b.value.set(10);
    assert_eq!(a.value.get(), 10, "Both handles should observe the same object.");
    assert!(a == b);
    assert!(Ref::ptr_eq(&a, &b));
}

#[test]
fn test_ref_ptr_assignment() {
    let counter = CountedDrop::new(0);
    let a = Ref::new(Tracked::new(1, &counter));
    let b = Ref::new(Tracked::new(2, &counter));

    let mut ptr = RefPtr::from(&a);
    assert_eq!(Ref::strong_count(&a), 2);

    ptr.assign(&b);
    assert_eq!(Ref::strong_count(&a), 1, "Assignment should release the previous object.");
    assert_eq!(Ref::strong_count(&b), 2);

    let same = ptr.clone();
    ptr.assign(same);
    assert_eq!(Ref::strong_count(&b), 2, "Self assignment shouldn't change the count.");
    assert_eq!(ptr.value.get(), 2);

    let moved = ptr.take();
    assert!(ptr.is_null());
    assert_eq!(moved.strong_count(), 2, "Taking shouldn't change the count.");

    ptr.clear();
    drop(moved);
    drop(a);
    drop(b);
    assert_eq!(counter.take(), 2);
}

#[test]
fn test_conversions_transfer_count() {
    let counter = CountedDrop::new(0);
    let strong = Ref::new(Tracked::new(1, &counter));
    let observer = strong.clone();

    let ptr = RefPtr::from(strong);
    assert_eq!(ptr.strong_count(), 2, "Converting a Ref should transfer its share.");

    let strong = ptr.into_ref().expect("RefPtr wasn't empty");
    assert_eq!(Ref::strong_count(&strong), 2);

    let leaked = Ref::leak(strong);
    assert_eq!(Ref::strong_count(&observer), 2);
    // SAFETY: leaked carries the share given up by Ref::leak.
    let strong = unsafe { Ref::adopt(leaked) };
    assert_eq!(Ref::strong_count(&strong), 2);

    let empty: RefPtr<Tracked> = RefPtr::from(None);
    assert!(empty.into_ref().is_none());
}

#[test]
fn test_from_object() {
    let counter = CountedDrop::new(0);
    let strong = Ref::new(Tracked::new(1, &counter));

    let again = Ref::from_object(&*strong);
    assert_eq!(Ref::strong_count(&strong), 2);
    assert!(again == strong);

    drop(strong);
    assert_eq!(counter.take(), 0);
    assert_eq!(again.value.get(), 1);
    drop(again);
    assert_eq!(counter.take(), 1, "A Ref from a plain reference should free the object normally.");

    assert_panics!({
        let local = Tracked::new(2, &counter);
        let _strong = Ref::from_object(&local);
    });
}

#[test]
fn test_equality_and_hash() {
    let a = Ref::new(square(2));
    let b = Ref::new(square(2));
    let a_ptr = RefPtr::from(&a);

    assert!(a != b, "Refs to equal values should compare by identity.");
    assert!(a == a_ptr);
    assert!(a_ptr == a);
    assert!(RefPtr::<Square>::null() == RefPtr::<Square>::null());
    assert!(a_ptr != RefPtr::<Square>::null());

    let set: HashSet<Ref<Square>> = [a.clone(), a.clone(), b.clone()].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_static_cast() {
    let concrete = RefPtr::new(square(3));
    let shape: RefPtr<dyn Shape> = concrete.static_cast(coerce!(dyn Shape));

    assert_eq!(shape.area(), 9);
    assert_eq!(concrete.strong_count(), 2);
    assert!(shape == concrete);

    let empty: RefPtr<Square> = RefPtr::null();
    let cast: RefPtr<dyn Shape> = empty.static_cast(coerce!(dyn Shape));
    assert!(cast.is_null());

    let same: RefPtr<Square> = concrete.static_cast(coerce!(Square));
    assert_eq!(same.side, 3);
    assert_eq!(concrete.strong_count(), 3);
}

#[test]
fn test_cast_outlives_source() {
    let counter = CountedDrop::new(0);
    let concrete = RefPtr::new(Tracked::new(5, &counter));
    let shape: RefPtr<dyn Named> = concrete.static_cast(coerce!(dyn Named));

    drop(concrete);
    assert_eq!(counter.take(), 0, "The cast reference should keep the object alive.");
    assert_eq!(shape.name(), 5);

    let back = shape.dynamic_cast::<Tracked>();
    drop(shape);
    assert_eq!(back.value.get(), 5);
    assert_eq!(back.strong_count(), 1);

    drop(back);
    assert_eq!(counter.take(), 1, "The last cast reference should drop the object once.");
}

#[test]
fn test_dynamic_cast() {
    let boxed: Box<dyn Shape> = Box::new(square(4));
    let shape = RefPtr::from_box(boxed);

    let as_square = shape.dynamic_cast::<Square>();
    assert!(!as_square.is_null());
    assert_eq!(as_square.side, 4);
    assert_eq!(shape.strong_count(), 2);

    let as_circle = shape.dynamic_cast::<Circle>();
    assert!(as_circle.is_null(), "Casting to the wrong type should produce an empty RefPtr.");
    assert_eq!(shape.strong_count(), 2);

    let empty: RefPtr<dyn Shape> = RefPtr::null();
    assert!(empty.dynamic_cast::<Square>().is_null());

    let boxed: Box<dyn Shape> = Box::new(Circle { count: RefCount::new() });
    let circle = RefPtr::from_box(boxed);
    assert_eq!(circle.area(), 3);
    assert!(circle.dynamic_cast::<Square>().is_null());
}

#[test]
fn test_const_and_reinterpret_cast() {
    let label = RefPtr::new(Label {
        count: RefCount::new(),
        text: "label",
    });

    let copy = label.const_cast();
    assert!(copy == label);
    assert_eq!(label.strong_count(), 2);

    // SAFETY: The cast is to the object's own type.
    let same = unsafe { label.reinterpret_cast::<Label>() };
    assert_eq!(same.to_string(), "label");
    assert_eq!(label.strong_count(), 3);
}

#[test]
fn test_empty_ref_ptr_fails() {
    assert_panics!({
        let ptr: RefPtr<Square> = RefPtr::null();
        let _side = ptr.side;
    });

    assert_panics!({
        let ptr: RefPtr<Square> = RefPtr::default();
        let _strong = ptr.release_nonnull();
    });

    let ptr: RefPtr<Square> = RefPtr::null();
    assert!(ptr.get().is_none());
    assert_eq!(ptr.strong_count(), 0);
}

#[test]
fn test_count_underflow_fails() {
    let count = RefCount::new();
    count.increment();
    assert!(count.decrement(), "Decrementing to zero should report the last release.");

    assert_panics!({
        count.decrement();
    });
}

#[test]
fn test_display_forwarding() {
    let label: Ref<Label> = Ref::new(Label {
        count: RefCount::new(),
        text: "text",
    });
    assert_eq!(format!("{label}"), "text");
}

#[test]
fn test_ref_swap() {
    let mut a = Ref::new(square(1));
    let mut b = Ref::new(square(2));

    Ref::swap(&mut a, &mut b);
    assert_eq!((a.side, b.side), (2, 1));
    assert_eq!(Ref::strong_count(&a), 1, "Swapping shouldn't change either count.");
}
