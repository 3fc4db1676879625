//! This crate is a small foundation library: its own vocabulary for memory ownership and data
//! structures, rather than relying on the host standard library for them.
//!
//! # Purpose
//! The core of the crate is [`ptr`], the ownership and reference counting primitives. Exclusive
//! ownership, intrusive reference counting and weak observation are where lifetime bugs hide, so
//! those types are written to make misuse either impossible to express or loud when it happens.
//! [`func`] builds on them, and [`collections`] provides the containers used alongside them.
//!
//! # Method
//! Most of the types here are modelled on their counterparts in [`std`], taking a lot of
//! inspiration from its APIs without copying it. Where a type overlaps with something in `std`
//! ([`OwnPtr`](ptr::OwnPtr) and [`Box`], [`Ref`](ptr::Ref) and [`Rc`](std::rc::Rc)), the
//! difference is intentional and documented on the type.
//!
//! # Error Handling
//! There are two kinds of failure in this crate. Conditions that a caller can reasonably expect,
//! such as an index being out of bounds, are available as strongly typed [`Result`]s from the
//! `try_` variant of a method, using structs that implement [`Error`](std::error::Error).
//!
//! Everything else is a broken invariant, which is reported through [`fail`] and never returns.
//! The non-`try_` variants use the same path, because users don't want to be forced to handle an
//! error every time they index into a Vector.
//!
//! # Dependencies
//! This crate uses `std`, but doesn't use [`Vec`] to write
//! [`Vector`](collections::contiguous::Vector) or anything else. In fact, this library doesn't use
//! [`Vec`] at all.
//!
//! This crate also depends on some derive macros because they're helpful and remove the need for
//! some very repetitive programming.
//!
//! # Features
//! - `collections-all` (default): every collection module.
//! - `contiguous`, `linked`, `traits`, `adapters`: individual collection modules, each enabling
//!   the modules it is built on.
//! - `exit-on-crash`: report broken invariants on stderr and exit with status 1, instead of
//!   panicking.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
pub mod fail;
pub mod func;
pub mod ptr;

pub(crate) mod util;
