/// Runs a callback exactly once, when the guard goes out of scope. The callback also runs while
/// unwinding, which makes a ScopeGuard suitable for restoring state on every exit path.
///
/// # Examples
/// ```
/// # use toolkit::func::ScopeGuard;
/// # use std::cell::Cell;
/// let depth = Cell::new(0);
/// {
///     depth.set(depth.get() + 1);
///     let _guard = ScopeGuard::new(|| depth.set(depth.get() - 1));
///     assert_eq!(depth.get(), 1);
/// }
/// assert_eq!(depth.get(), 0);
/// ```
#[must_use = "the callback runs immediately if the guard isn't bound to a variable"]
pub struct ScopeGuard<F: FnOnce()> {
    callback: Option<F>,
}

impl<F: FnOnce()> ScopeGuard<F> {
    pub const fn new(callback: F) -> ScopeGuard<F> {
        ScopeGuard {
            callback: Some(callback),
        }
    }
}

impl<F: FnOnce()> Drop for ScopeGuard<F> {
    fn drop(&mut self) {
        if let Some(callback) = self.callback.take() {
            callback();
        }
    }
}
