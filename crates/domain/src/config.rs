//! Directory configuration.

use outcome_shared::Outcome;
use serde::Deserialize;

/// Rules the user directory applies to lookups and discounts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct DirectoryConfig {
    /// Largest user id that exists.
    pub max_user_id: u32,
    /// User numbers at or above this receive the loyalty discount.
    pub loyalty_threshold: u32,
    /// Loyalty discount in percent.
    pub loyalty_discount: u8,
    /// Discount in percent for everyone else.
    pub standard_discount: u8,
    /// Customer name used when a lookup cannot be resolved.
    pub guest_name: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            max_user_id: 1000,
            loyalty_threshold: 100,
            loyalty_discount: 10,
            standard_discount: 5,
            guest_name: "GuestUser".to_owned(),
        }
    }
}

impl DirectoryConfig {
    /// Upper bound for any discount, in percent.
    pub const MAX_DISCOUNT: u8 = 100;

    /// Check the configuration invariants.
    pub fn validate(&self) -> Outcome<()> {
        if self.loyalty_discount > Self::MAX_DISCOUNT {
            return Outcome::failure(format!(
                "loyaltyDiscount {} exceeds {}%",
                self.loyalty_discount,
                Self::MAX_DISCOUNT
            ));
        }
        if self.standard_discount > Self::MAX_DISCOUNT {
            return Outcome::failure(format!(
                "standardDiscount {} exceeds {}%",
                self.standard_discount,
                Self::MAX_DISCOUNT
            ));
        }
        if self.loyalty_threshold > self.max_user_id {
            return Outcome::failure(format!(
                "loyaltyThreshold {} is above maxUserId {}",
                self.loyalty_threshold, self.max_user_id
            ));
        }
        if self.guest_name.trim().is_empty() {
            return Outcome::failure("guestName must not be blank");
        }
        Outcome::success(())
    }
}
