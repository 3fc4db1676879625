use std::fmt::{self, Debug, Formatter};

use crate::fail::EmptyFunction;
use crate::ptr::OwnPtr;
use crate::util::result::ResultExtension;

/// A callable which accepts its arguments as a tuple. Implemented for every [`FnMut`] taking up to
/// six arguments, so it rarely needs to be named outside of bounds.
pub trait Invoke<Args, R> {
    fn invoke(&mut self, args: Args) -> R;
}

macro_rules! impl_invoke {
    ($($arg:ident),*) => {
        impl<F, R, $($arg),*> Invoke<($($arg,)*), R> for F
        where
            F: FnMut($($arg),*) -> R,
        {
            #[allow(non_snake_case)]
            fn invoke(&mut self, ($($arg,)*): ($($arg,)*)) -> R {
                self($($arg),*)
            }
        }
    };
}

impl_invoke!();
impl_invoke!(A);
impl_invoke!(A, B);
impl_invoke!(A, B, C);
impl_invoke!(A, B, C, D);
impl_invoke!(A, B, C, D, E);
impl_invoke!(A, B, C, D, E, G);

/// An owning, type-erased callable taking the arguments `Args` (as a tuple) and returning `R`.
///
/// The callable is moved onto the heap and owned through an [`OwnPtr`], so a Function can hold
/// any closure with a matching signature, including ones which capture state. A Function can be
/// empty, in which case calling it fails fast. Like its [`OwnPtr`], a Function can't be cloned.
///
/// # Examples
/// ```
/// # use toolkit::func::Function;
/// let mut total = 0;
/// let mut add: Function<(i32, i32), i32> = Function::new(move |a: i32, b: i32| {
///     total += a + b;
///     total
/// });
///
/// assert_eq!(add.call((1, 2)), 3);
/// assert_eq!(add.call((3, 4)), 10);
///
/// add.clear();
/// assert!(add.is_null());
/// assert!(add.try_call((1, 1)).is_err());
/// ```
pub struct Function<Args, R = ()> {
    callable: OwnPtr<dyn Invoke<Args, R>>,
}

impl<Args, R> Function<Args, R> {
    /// Wraps `callable` in a new Function.
    pub fn new<F: Invoke<Args, R> + 'static>(callable: F) -> Function<Args, R> {
        Function {
            callable: Function::erase(callable),
        }
    }

    /// Creates an empty Function.
    pub const fn null() -> Function<Args, R> {
        Function {
            callable: OwnPtr::null(),
        }
    }

    /// Replaces the held callable with `callable`, dropping the previous one.
    pub fn set<F: Invoke<Args, R> + 'static>(&mut self, callable: F) {
        self.callable.assign(Function::erase(callable));
    }

    /// Drops the held callable, leaving the Function empty.
    pub fn clear(&mut self) {
        self.callable.clear();
    }

    /// Returns true if the Function doesn't hold a callable.
    pub const fn is_null(&self) -> bool {
        self.callable.is_null()
    }

    /// Invokes the held callable, or returns [`EmptyFunction`] if there is none.
    pub fn try_call(&mut self, args: Args) -> Result<R, EmptyFunction> {
        match self.callable.get_mut() {
            Some(callable) => Ok(callable.invoke(args)),
            None => Err(EmptyFunction),
        }
    }

    /// Invokes the held callable.
    ///
    /// # Panics
    /// Fails fast if the Function is empty.
    #[track_caller]
    pub fn call(&mut self, args: Args) -> R {
        self.try_call(args).throw()
    }

    fn erase<F: Invoke<Args, R> + 'static>(callable: F) -> OwnPtr<dyn Invoke<Args, R>> {
        OwnPtr::from_box(Box::new(callable))
    }
}

impl<Args, R> Default for Function<Args, R> {
    fn default() -> Self {
        Self::null()
    }
}

impl<Args, R> Debug for Function<Args, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "Function(null)")
        } else {
            write!(f, "Function(..)")
        }
    }
}
