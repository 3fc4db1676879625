use derive_more::{Display, Error};

use crate::fail::Violation;

#[derive(Debug, Display, Error, PartialEq, Eq, Clone, Copy)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Violation for IndexOutOfBounds {}

#[derive(Debug, Display, Error, PartialEq, Eq, Clone, Copy)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

impl Violation for CapacityOverflow {}
