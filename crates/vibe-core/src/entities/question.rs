use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const fn default_active() -> bool {
    true
}

/// One swipeable prompt. Reference data; the engine never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Display position. Lower values come first.
    pub order_index: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory_id: Option<String>,
}

impl Question {
    /// An active question with no image or category, as used in tests and fixtures.
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>, order_index: i32) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            image_url: None,
            order_index,
            is_active: true,
            category_id: None,
            subcategory_id: None,
        }
    }
}
