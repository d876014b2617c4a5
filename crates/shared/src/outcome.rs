//! Closed success/failure outcome with panic-safe combinators.
//!
//! [`Outcome`] is the value returned at the boundary of a fallible operation.
//! Exactly one of two variants holds:
//!
//! - [`Outcome::Success`] carries a payload that is always present. Operations
//!   with nothing to return use `Outcome<()>`.
//! - [`Outcome::Failure`] carries an [`ErrorInfo`] and never a payload.
//!
//! Failures flow through [`Outcome::map`] and [`Outcome::flat_map`] chains
//! untouched; the first failing step decides the result. A panic inside a
//! transformation is captured and becomes a failure instead of unwinding into
//! the caller.
//!
//! ```
//! use outcome_shared::Outcome;
//!
//! let label = Outcome::success(500)
//!     .flat_map(|id| if id > 0 { Outcome::success(10) } else { Outcome::failure("bad id") })
//!     .map(|discount| format!("Discount: {discount}%"));
//!
//! match label {
//!     Outcome::Success(text) => assert_eq!(text, "Discount: 10%"),
//!     Outcome::Failure(error) => unreachable!("{error}"),
//! }
//! ```

use crate::errors::{ErrorInfo, OutcomeError, TransformationPanic};
use serde::Serialize;
use std::error::Error;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// Outcome of an operation that can fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "lowercase")]
#[must_use]
pub enum Outcome<T> {
    /// The operation produced a value.
    Success(T),
    /// The operation failed.
    Failure(ErrorInfo),
}

impl<T> Outcome<T> {
    /// Construct a success holding `value`.
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Construct a success from an optional payload.
    ///
    /// An absent payload is rejected: a success always holds a meaningful
    /// value.
    pub fn try_success(value: Option<T>) -> Result<Self, OutcomeError> {
        value.map(Self::Success).ok_or(OutcomeError::absent_value())
    }

    /// Construct a failure with no chained cause.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(ErrorInfo::new(message))
    }

    /// Construct a failure chaining `cause` for diagnostics.
    pub fn failure_with_cause<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Failure(ErrorInfo::with_cause(message, cause))
    }

    /// Construct a failure from an existing error descriptor.
    pub const fn from_error(error: ErrorInfo) -> Self {
        Self::Failure(error)
    }

    /// Returns true for [`Outcome::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns true for [`Outcome::Failure`].
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrow the payload.
    ///
    /// Calling this on a failure is a misuse and returns
    /// [`OutcomeError::InvalidState`].
    pub const fn value(&self) -> Result<&T, OutcomeError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(OutcomeError::failure_has_no_value()),
        }
    }

    /// Consume the outcome and return the payload.
    pub fn into_value(self) -> Result<T, OutcomeError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(OutcomeError::failure_has_no_value()),
        }
    }

    /// Borrow the error descriptor.
    ///
    /// Calling this on a success is a misuse and returns
    /// [`OutcomeError::InvalidState`].
    pub const fn error(&self) -> Result<&ErrorInfo, OutcomeError> {
        match self {
            Self::Success(_) => Err(OutcomeError::success_has_no_error()),
            Self::Failure(error) => Ok(error),
        }
    }

    /// Consume the outcome and return the error descriptor.
    pub fn into_error(self) -> Result<ErrorInfo, OutcomeError> {
        match self {
            Self::Success(_) => Err(OutcomeError::success_has_no_error()),
            Self::Failure(error) => Ok(error),
        }
    }

    /// Transform the payload of a success.
    ///
    /// A failure is returned unchanged and `op` is never called. A panic in
    /// `op` yields a failure whose cause is a [`TransformationPanic`]; the
    /// process panic hook still runs, so the default hook prints the panic to
    /// stderr.
    pub fn map<U, F>(self, op: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => match contain(|| op(value)) {
                Ok(mapped) => Outcome::Success(mapped),
                Err(error) => Outcome::Failure(error),
            },
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transform the payload with an operation that reports errors as `Err`.
    ///
    /// `Err(e)` becomes a failure carrying `e`'s message with `e` as the
    /// cause. Panics are contained as in [`Outcome::map`].
    pub fn try_map<U, E, F>(self, op: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Result<U, E>,
        E: Error + Send + Sync + 'static,
    {
        match self {
            Self::Success(value) => match contain(|| op(value)) {
                Ok(Ok(mapped)) => Outcome::Success(mapped),
                Ok(Err(cause)) => Outcome::Failure(ErrorInfo::from_cause(cause)),
                Err(error) => Outcome::Failure(error),
            },
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chain another fallible operation on the payload of a success.
    ///
    /// The outcome returned by `op` is returned as is. A failure short
    /// circuits and `op` is never called. Panics in `op` are contained as in
    /// [`Outcome::map`].
    pub fn flat_map<U, F>(self, op: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success(value) => contain(|| op(value)).unwrap_or_else(Outcome::Failure),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Recover from a failure by producing a fresh outcome.
    ///
    /// `alternative` is only evaluated for a failure.
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Success(_) => self,
            Self::Failure(_) => alternative(),
        }
    }

    /// Dispatch to exactly one handler per variant.
    pub fn fold<R, S, E>(self, on_success: S, on_failure: E) -> R
    where
        S: FnOnce(T) -> R,
        E: FnOnce(ErrorInfo) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Convert into a standard `Result`.
    pub fn into_result(self) -> Result<T, ErrorInfo> {
        self.fold(Ok, Err)
    }

    /// Convert back from a standard `Result` whose error is already an
    /// [`ErrorInfo`]; the descriptor is kept as is rather than chained.
    pub fn from_result(result: Result<T, ErrorInfo>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, ErrorInfo> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl<T> From<Result<T, ErrorInfo>> for Outcome<T> {
    fn from(result: Result<T, ErrorInfo>) -> Self {
        Self::from_result(result)
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "success: {value}"),
            Self::Failure(error) => write!(formatter, "failure: {error}"),
        }
    }
}

fn contain<R, F>(op: F) -> Result<R, ErrorInfo>
where
    F: FnOnce() -> R,
{
    panic::catch_unwind(AssertUnwindSafe(op)).map_err(|payload| {
        let cause = TransformationPanic::from_payload(payload.as_ref());
        tracing::debug!(panic = %cause, "transformation panicked; converted to failure");
        ErrorInfo::from_cause(cause)
    })
}
