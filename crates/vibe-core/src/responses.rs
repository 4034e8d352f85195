//! CLI response types returned as JSON by `vibe` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::MatchResult;
use crate::enums::EvaluationStatus;
use crate::readiness::ReadinessReport;

/// Response from `vibe validate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ValidationResponse {
    pub session_id: String,
    pub valid: bool,
    pub expected_questions: usize,
    pub host_answered: usize,
    pub guest_answered: usize,
    pub message: Option<String>,
}

/// Response from `vibe evaluate`. Exactly one of `readiness` and `result` is
/// set; `message` explains a pending session.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EvaluationResponse {
    pub session_id: String,
    pub status: EvaluationStatus,
    pub readiness: Option<ReadinessReport>,
    pub message: Option<String>,
    pub result: Option<MatchResult>,
}
