//! Readiness gate configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ValidationConfig {
    /// Responses each participant must submit before a session is scored.
    /// Unset means "every active question in the catalog".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_questions: Option<usize>,
}
