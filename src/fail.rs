//! The fail-fast primitive shared by every other module.
//!
//! Nothing in this crate recovers from a broken invariant. Dereferencing an empty owning pointer,
//! decrementing a reference count that is already zero or promoting a dead weak handle are all
//! programmer errors, and all of them end up in [`crash`], which reports a single diagnostic line
//! and never returns.
//!
//! By default the diagnostic becomes the payload of a panic. Built with `panic = "abort"` that
//! terminates the process, while a test harness can still intercept it with
//! [`catch_unwind`](std::panic::catch_unwind). With the `exit-on-crash` feature enabled the
//! diagnostic is written to stderr and the process exits with status 1 instead.

use std::error::Error;
use std::fmt::Arguments;
use std::panic::Location;

use derive_more::{Display, Error};

/// Reports `args` together with the caller's source location and terminates.
///
/// # Panics
/// Always panics, unless the `exit-on-crash` feature is enabled, in which case the process exits.
#[cold]
#[track_caller]
pub fn crash(args: Arguments<'_>) -> ! {
    let location = Location::caller();

    if cfg!(feature = "exit-on-crash") {
        eprintln!("{}:{} {}", location.file(), location.line(), args);
        std::process::exit(1)
    } else {
        panic!("{}:{} {}", location.file(), location.line(), args)
    }
}

/// Fails fast with a formatted message.
#[macro_export]
macro_rules! crash {
    ($($arg:tt)+) => {
        $crate::fail::crash(::std::format_args!($($arg)+))
    };
}

/// Fails fast if the provided condition doesn't hold, naming the condition in the diagnostic.
///
/// # Examples
/// ```
/// # use toolkit::verify;
/// let len = 3;
/// verify!(len > 0);
/// verify!(len < 4, "length {} is too large", len);
/// ```
#[macro_export]
macro_rules! verify {
    ($cond:expr $(,)?) => {
        if !$cond {
            $crate::fail::crash(::std::format_args!(
                "[Verify] {}",
                ::std::stringify!($cond)
            ))
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::fail::crash(::std::format_args!(
                "[Verify] {}\n{}",
                ::std::stringify!($cond),
                ::std::format_args!($($arg)+)
            ))
        }
    };
}

/// An [`Error`] which represents a broken invariant rather than a recoverable condition. Invoking
/// [`Violation::crash`] reports it through the fail-fast primitive.
pub trait Violation: Error {
    #[track_caller]
    fn crash(&self) -> ! {
        crash(format_args!("[Violation] {}", self))
    }
}

#[derive(Debug, Display, Error)]
#[display("dereferenced an empty owning pointer")]
pub struct EmptyOwnPtr;
impl Violation for EmptyOwnPtr {}

#[derive(Debug, Display, Error)]
#[display("dereferenced an empty reference-counted pointer")]
pub struct EmptyRefPtr;
impl Violation for EmptyRefPtr {}

#[derive(Debug, Display, Error)]
#[display("decremented a reference count which was already zero")]
pub struct CountUnderflow;
impl Violation for CountUnderflow {}

#[derive(Debug, Display, Error)]
#[display("reference count overflowed")]
pub struct CountOverflow;
impl Violation for CountOverflow {}

#[derive(Debug, Display, Error)]
#[display("object isn't owned by any strong reference")]
pub struct Unowned;
impl Violation for Unowned {}

#[derive(Debug, Display, Error)]
#[display("promoted a weak pointer to an object that no longer exists")]
pub struct InvalidWeakPtr;
impl Violation for InvalidWeakPtr {}

#[derive(Debug, Display, Error)]
#[display("called an empty function")]
pub struct EmptyFunction;
impl Violation for EmptyFunction {}
