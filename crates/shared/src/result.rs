//! Bridges from standard `Result` values into outcomes.

use crate::errors::ErrorInfo;
use crate::outcome::Outcome;
use std::error::Error;

/// Extension helpers lifting a standard `Result` into an [`Outcome`].
///
/// The error always becomes a chained cause. A `Result<T, ErrorInfo>` coming
/// from [`Outcome::into_result`] goes back through [`Outcome::from_result`]
/// instead, which keeps the descriptor unchanged.
pub trait IntoOutcome<T> {
    /// Lift the result; the error's own text becomes the failure message.
    fn into_outcome(self) -> Outcome<T>;

    /// Lift the result with a context message; the error becomes the cause.
    fn into_outcome_with(self, message: impl Into<String>) -> Outcome<T>;
}

impl<T, E> IntoOutcome<T> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    fn into_outcome(self) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::success(value),
            Err(error) => Outcome::from_error(ErrorInfo::from_cause(error)),
        }
    }

    fn into_outcome_with(self, message: impl Into<String>) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::success(value),
            Err(error) => Outcome::failure_with_cause(message, error),
        }
    }
}
