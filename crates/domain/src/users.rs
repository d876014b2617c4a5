//! User lookup and discount rules.
//!
//! Every operation validates at its boundary and answers with an [`Outcome`];
//! the composite operations are plain combinator chains over the primitive
//! lookups.

use crate::config::DirectoryConfig;
use outcome_shared::{IntoOutcome, Outcome};

/// Prefix of every user name the directory hands out.
pub const USER_PREFIX: &str = "User";

/// In-memory user directory governed by a [`DirectoryConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDirectory {
    config: DirectoryConfig,
}

impl UserDirectory {
    /// Build a directory from a configuration that passes validation.
    pub fn new(config: DirectoryConfig) -> Outcome<Self> {
        config.validate().map(|()| Self { config })
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    /// Look up the user name for `id`.
    ///
    /// Non-positive ids are invalid; ids above `max_user_id` do not exist.
    pub fn find_user_by_id(&self, id: i64) -> Outcome<String> {
        if id <= 0 {
            tracing::debug!(user_id = id, "rejected non-positive user id");
            return Outcome::failure(format!("Invalid user ID: {id}"));
        }
        if id > i64::from(self.config.max_user_id) {
            tracing::debug!(
                user_id = id,
                max_user_id = self.config.max_user_id,
                "user id out of range"
            );
            return Outcome::failure(format!("User not found: {id}"));
        }
        Outcome::success(format!("{USER_PREFIX}{id}"))
    }

    /// Discount percentage for a user name handed out by this directory.
    ///
    /// The name must be the prefix followed by ASCII digits only; signs and
    /// whitespace are rejected.
    pub fn calculate_discount(&self, user: &str) -> Outcome<u8> {
        let Some(digits) = user.strip_prefix(USER_PREFIX) else {
            tracing::debug!(user, "user name without directory prefix");
            return Outcome::failure(format!("Unrecognized user name: {user}"));
        };
        if !digits.bytes().all(|byte| byte.is_ascii_digit()) {
            tracing::debug!(user, "user number with non-digit characters");
            return Outcome::failure(format!("Malformed user number in {user}"));
        }

        digits
            .parse::<u32>()
            .into_outcome_with(format!("Malformed user number in {user}"))
            .map(|number| {
                if number >= self.config.loyalty_threshold {
                    self.config.loyalty_discount
                } else {
                    self.config.standard_discount
                }
            })
    }

    /// Human-readable discount for the user behind `id`.
    pub fn discount_label(&self, id: i64) -> Outcome<String> {
        self.find_user_by_id(id)
            .flat_map(|user| self.calculate_discount(&user))
            .map(|discount| format!("Discount: {discount}%"))
    }

    /// Resolve the customer name for `id`, falling back to the guest name.
    ///
    /// A user only resolves when a discount can be computed for them.
    pub fn resolve_customer(&self, id: i64) -> Outcome<String> {
        self.find_user_by_id(id)
            .flat_map(|user| self.calculate_discount(&user).map(|_| user))
            .or_else(|| Outcome::success(self.config.guest_name.clone()))
    }
}
