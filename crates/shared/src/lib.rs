//! # outcome-shared
//!
//! Closed success/failure outcome type and its error descriptors.
//!
//! This crate provides the value every fallible operation in the workspace
//! returns:
//!
//! - [`Outcome`] - `Success(T)` or `Failure(ErrorInfo)`, with `map`,
//!   `try_map`, `flat_map`, `or_else` and `fold`
//! - [`ErrorInfo`] - message plus optional chained cause
//! - [`OutcomeError`] - misuse faults raised by the accessors
//! - [`IntoOutcome`] - lifting standard `Result` values
//!
//! ## Design Principles
//!
//! 1. **No workspace dependencies** - This crate only depends on external crates
//! 2. **Immutable values** - Combinators consume and build, never mutate
//! 3. **Serde-compatible** - Outcomes serialize for reporting

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod errors;
pub mod outcome;
pub mod result;

pub use errors::{Cause, ErrorInfo, OutcomeError, TransformationPanic};
pub use outcome::Outcome;
pub use result::IntoOutcome;

/// Returns the shared crate version.
#[must_use]
pub const fn shared_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
