use crate::fail::Violation;

pub(crate) trait ResultExtension<T, E: Violation> {
    /// A method similar to [`Result::unwrap`], except that it applies only to [`Violation`]s and
    /// reports the error itself through the fail-fast primitive.
    ///
    /// # Panics
    /// Fails fast if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Violation> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => error.crash(),
        }
    }
}
