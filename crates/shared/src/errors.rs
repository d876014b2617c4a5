//! Error descriptor and fault types for outcomes.

use serde::{Serialize, Serializer};
use std::any::Any;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Chained underlying cause attached to a failure.
pub type Cause = Arc<dyn Error + Send + Sync + 'static>;

/// Error descriptor carried by a failed outcome.
///
/// Holds a human-readable message and an optional chained cause. The cause is
/// exposed through [`Error::source`], so the whole chain can be walked with
/// standard tooling.
#[derive(Clone)]
pub struct ErrorInfo {
    message: String,
    cause: Option<Cause>,
}

impl ErrorInfo {
    /// Create an error descriptor without a cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Create an error descriptor chaining the provided cause.
    pub fn with_cause<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            message: message.into(),
            cause: Some(Arc::new(cause)),
        }
    }

    /// Create an error descriptor whose message is the cause's own text.
    pub fn from_cause<E>(cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        let message = cause.to_string();
        Self::with_cause(message, cause)
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the directly chained cause, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Returns true when a cause is attached.
    #[must_use]
    pub const fn has_cause(&self) -> bool {
        self.cause.is_some()
    }

    /// Iterate the cause chain, nearest cause first.
    pub fn causes(&self) -> impl Iterator<Item = &(dyn Error + 'static)> {
        let mut current = self.source();
        std::iter::from_fn(move || {
            let next = current?;
            current = next.source();
            Some(next)
        })
    }

    fn rendered_causes(&self) -> Vec<String> {
        self.causes().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl fmt::Debug for ErrorInfo {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ErrorInfo")
            .field("message", &self.message)
            .field("causes", &self.rendered_causes())
            .finish()
    }
}

impl Error for ErrorInfo {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        let cause: &(dyn Error + 'static) = self.cause.as_deref()?;
        Some(cause)
    }
}

// Causes are opaque trait objects, so equality is structural over what they render.
impl PartialEq for ErrorInfo {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message && self.rendered_causes() == other.rendered_causes()
    }
}

impl Eq for ErrorInfo {}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorInfoView<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    causes: Vec<String>,
}

impl Serialize for ErrorInfo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        ErrorInfoView {
            message: &self.message,
            causes: self.rendered_causes(),
        }
        .serialize(serializer)
    }
}

/// Faults raised by misuse of the outcome API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OutcomeError {
    /// A constructor received an argument it rejects.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Why the argument was rejected.
        reason: &'static str,
    },
    /// An accessor was called for the variant the outcome does not hold.
    #[error("invalid state: {reason}")]
    InvalidState {
        /// Which accessor was misused.
        reason: &'static str,
    },
}

impl OutcomeError {
    /// Success was constructed without a payload.
    pub const fn absent_value() -> Self {
        Self::InvalidArgument {
            reason: "Success value must be present",
        }
    }

    /// A value was requested from a failure.
    pub const fn failure_has_no_value() -> Self {
        Self::InvalidState {
            reason: "Failure has no value",
        }
    }

    /// An error was requested from a success.
    pub const fn success_has_no_error() -> Self {
        Self::InvalidState {
            reason: "Success has no error",
        }
    }
}

/// Cause recorded when a transformation panics inside a combinator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TransformationPanic {
    message: String,
}

impl TransformationPanic {
    /// Build a panic cause from an unwinding payload.
    pub fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "transformation panicked".to_owned());
        Self { message }
    }

    /// Returns the panic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn error_info_without_cause() {
        let error = ErrorInfo::new("boom");
        assert_eq!(error.message(), "boom");
        assert!(!error.has_cause());
        assert!(error.source().is_none());
        assert_eq!(error.to_string(), "boom");
    }

    #[test]
    fn error_info_exposes_cause_chain() {
        let inner = ErrorInfo::with_cause("disk unavailable", io::Error::other("eio"));
        let outer = ErrorInfo::with_cause("lookup failed", inner);

        let chain: Vec<String> = outer.causes().map(ToString::to_string).collect();
        assert_eq!(chain, vec!["disk unavailable".to_owned(), "eio".to_owned()]);
        assert_eq!(
            outer.cause().map(ToString::to_string),
            Some("disk unavailable".to_owned())
        );
    }

    #[test]
    fn from_cause_reuses_cause_text() {
        let error = ErrorInfo::from_cause(io::Error::other("timeout"));
        assert_eq!(error.message(), "timeout");
        assert!(error.has_cause());
    }

    #[test]
    fn equality_compares_message_and_rendered_causes() {
        let left = ErrorInfo::with_cause("bad", io::Error::other("x"));
        let right = ErrorInfo::with_cause("bad", io::Error::other("x"));
        let other_cause = ErrorInfo::with_cause("bad", io::Error::other("y"));

        assert_eq!(left, right);
        assert_ne!(left, other_cause);
        assert_ne!(left, ErrorInfo::new("bad"));
    }

    #[test]
    fn error_info_serializes_message_and_causes() -> Result<(), serde_json::Error> {
        let plain = serde_json::to_value(ErrorInfo::new("boom"))?;
        assert_eq!(plain, serde_json::json!({ "message": "boom" }));

        let chained = serde_json::to_value(ErrorInfo::with_cause("boom", io::Error::other("eio")))?;
        assert_eq!(
            chained,
            serde_json::json!({ "message": "boom", "causes": ["eio"] })
        );
        Ok(())
    }

    #[test]
    fn outcome_error_messages() {
        assert_eq!(
            OutcomeError::failure_has_no_value().to_string(),
            "invalid state: Failure has no value"
        );
        assert_eq!(
            OutcomeError::success_has_no_error().to_string(),
            "invalid state: Success has no error"
        );
        assert!(matches!(
            OutcomeError::absent_value(),
            OutcomeError::InvalidArgument { .. }
        ));
    }

    #[test]
    fn transformation_panic_reads_str_and_string_payloads() {
        let from_str = TransformationPanic::from_payload(&"static message");
        assert_eq!(from_str.message(), "static message");

        let from_string = TransformationPanic::from_payload(&String::from("owned message"));
        assert_eq!(from_string.message(), "owned message");

        let opaque = TransformationPanic::from_payload(&42_u8);
        assert_eq!(opaque.message(), "transformation panicked");
    }
}
