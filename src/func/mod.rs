//! Callables: an owning, type-erased [`Function`] and a [`ScopeGuard`] which runs a callback when
//! it goes out of scope.

mod function;
mod scope_guard;

pub use function::*;
pub use scope_guard::*;
