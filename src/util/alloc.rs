use std::cell::{Cell, RefCell};
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

use crate::ptr::{RefCount, WeakableBase};
use crate::{impl_ref_counted, impl_weakable};

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZeroSizedType;

#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(value)))
    }
}

impl Deref for CountedDrop {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for CountedDrop {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}

/// A reference counted, weakable object for tests, carrying a value and a [`CountedDrop`] which
/// records its destruction.
#[derive(Debug)]
pub struct Tracked {
    pub value: Cell<i32>,
    pub drops: CountedDrop,
    count: RefCount,
    weak: WeakableBase,
}

impl Tracked {
    pub fn new(value: i32, drops: &CountedDrop) -> Tracked {
        Tracked {
            value: Cell::new(value),
            drops: drops.clone(),
            count: RefCount::new(),
            weak: WeakableBase::new(),
        }
    }
}

impl_ref_counted!(Tracked, count);
impl_weakable!(Tracked, weak);
