//! # outcome-domain
//!
//! User directory rules expressed as outcome-returning operations.
//!
//! - **Config** - `DirectoryConfig` with its validation
//! - **Users** - `UserDirectory` lookups, discounts and customer resolution
//!
//! ## Dependency Rules
//!
//! - Depends only on `shared` crate
//! - No infrastructure or adapter dependencies
//! - Pure domain logic with no I/O

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

// Re-export shared types for convenience
pub use outcome_shared::{ErrorInfo, Outcome, shared_crate_version};

pub mod config;
pub mod users;

pub use config::DirectoryConfig;
pub use users::{USER_PREFIX, UserDirectory};

/// Returns the domain crate version.
#[must_use]
pub const fn domain_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
