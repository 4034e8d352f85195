//! Placeholder and fallback texts the calculator emits when nobody (or only
//! one participant) liked anything.

use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// Placeholder substituted with the liked item's text in one-sided templates.
pub const ITEM_PLACEHOLDER: &str = "{item}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackMessages {
    /// Host favorite when the host liked nothing.
    pub host_chose_nothing: String,
    /// Guest favorite when the guest liked nothing.
    pub guest_chose_nothing: String,
    /// Shared item when neither participant liked anything.
    pub both_chose_nothing: String,
    /// Shared item when only the host liked something. Contains `{item}`.
    pub only_host_chose: String,
    /// Shared item when only the guest liked something. Contains `{item}`.
    pub only_guest_chose: String,
    /// Shared item when both liked something but never the same thing.
    pub different_preferences: String,
}

impl Default for FallbackMessages {
    fn default() -> Self {
        Self {
            host_chose_nothing: "Host chose nothing".to_string(),
            guest_chose_nothing: "Guest chose nothing".to_string(),
            both_chose_nothing: "You both chose nothing".to_string(),
            only_host_chose: "Only your partner chose: {item}".to_string(),
            only_guest_chose: "Only your partner chose: {item}".to_string(),
            different_preferences: "Different preferences, that makes you interesting!"
                .to_string(),
        }
    }
}

impl FallbackMessages {
    /// Favorite text for a participant who liked nothing.
    #[must_use]
    pub fn chose_nothing(&self, role: Role) -> &str {
        match role {
            Role::Host => &self.host_chose_nothing,
            Role::Guest => &self.guest_chose_nothing,
        }
    }

    /// Raw one-sided template for `role`.
    #[must_use]
    pub fn only_chose_template(&self, role: Role) -> &str {
        match role {
            Role::Host => &self.only_host_chose,
            Role::Guest => &self.only_guest_chose,
        }
    }

    /// Shared-item text when only `role` liked something; `item` is their first like.
    #[must_use]
    pub fn only_chose(&self, role: Role, item: &str) -> String {
        self.only_chose_template(role).replace(ITEM_PLACEHOLDER, item)
    }

    /// Names of one-sided templates that do not contain [`ITEM_PLACEHOLDER`].
    #[must_use]
    pub fn templates_missing_item(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.only_host_chose.contains(ITEM_PLACEHOLDER) {
            missing.push("only_host_chose");
        }
        if !self.only_guest_chose.contains(ITEM_PLACEHOLDER) {
            missing.push("only_guest_chose");
        }
        missing
    }
}
