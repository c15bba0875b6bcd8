//! Error types for bounded recursion.

/// The recursion condition still held when the depth limit was reached.
///
/// Returned by
/// [`UnaryOperator::try_recurse_while_bounded`](super::UnaryOperator::try_recurse_while_bounded).
/// The value reached after the last permitted application is kept, so the
/// caller can still use or inspect it.
///
/// # Examples
///
/// ```rust
/// use fn_contracts::operator::DepthExceededError;
///
/// let error = DepthExceededError { max_depth: 3, value: 42 };
/// assert_eq!(
///     format!("{error}"),
///     "recursion condition still held after 3 applications (last value: 42)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthExceededError<T> {
    /// The number of applications that were permitted.
    pub max_depth: usize,
    /// The value after the last application.
    pub value: T,
}

impl<T> DepthExceededError<T> {
    /// Consumes the error and returns the last value reached.
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T: std::fmt::Debug> std::fmt::Display for DepthExceededError<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "recursion condition still held after {} applications (last value: {:?})",
            self.max_depth, self.value
        )
    }
}

impl<T: std::fmt::Debug> std::error::Error for DepthExceededError<T> {}
