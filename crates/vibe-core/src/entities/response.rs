use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Answer, Role};

/// A single (question, answer) pair: the calculator's unit of input.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Response {
    pub question_id: String,
    #[schemars(with = "u8")]
    pub answer: Answer,
}

impl Response {
    #[must_use]
    pub fn new(question_id: impl Into<String>, answer: Answer) -> Self {
        Self {
            question_id: question_id.into(),
            answer,
        }
    }
}

/// A stored response row. At most one exists per
/// (session, participant, question); later submissions overwrite earlier ones
/// upstream, so the engine only ever sees the final set.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResponseRecord {
    pub session_id: String,
    pub participant_id: String,
    pub participant_role: Role,
    pub question_id: String,
    #[schemars(with = "u8")]
    pub answer: Answer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answered_at: Option<DateTime<Utc>>,
}

impl ResponseRecord {
    #[must_use]
    pub fn to_response(&self) -> Response {
        Response::new(self.question_id.clone(), self.answer)
    }
}
