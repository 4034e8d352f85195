use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Question, Response, ResponseRecord};
use crate::enums::Role;

/// Everything needed to evaluate one session: its question catalog and every
/// response row submitted by either participant.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SessionInput {
    pub session_id: String,
    pub catalog: Vec<Question>,
    #[serde(default)]
    pub responses: Vec<ResponseRecord>,
}

impl SessionInput {
    /// Responses submitted under `role`, in submission order.
    #[must_use]
    pub fn responses_for(&self, role: Role) -> Vec<Response> {
        self.responses
            .iter()
            .filter(|record| record.participant_role == role)
            .map(ResponseRecord::to_response)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Answer;

    fn record(role: Role, question_id: &str, answer: Answer) -> ResponseRecord {
        ResponseRecord {
            session_id: "room-1".into(),
            participant_id: format!("{role}-user"),
            participant_role: role,
            question_id: question_id.into(),
            answer,
            answered_at: None,
        }
    }

    #[test]
    fn splits_responses_by_role() {
        let session = SessionInput {
            session_id: "room-1".into(),
            catalog: vec![Question::new("q1", "Pizza", 0)],
            responses: vec![
                record(Role::Host, "q1", Answer::Like),
                record(Role::Guest, "q1", Answer::Dislike),
                record(Role::Host, "q2", Answer::Dislike),
            ],
        };

        let host = session.responses_for(Role::Host);
        assert_eq!(host.len(), 2);
        assert_eq!(host[0], Response::new("q1", Answer::Like));
        assert_eq!(session.responses_for(Role::Guest).len(), 1);
    }

    #[test]
    fn missing_responses_default_to_empty() {
        let session: SessionInput = serde_json::from_str(
            r#"{"session_id": "room-2", "catalog": [{"id": "q1", "text": "Sushi", "order_index": 1}]}"#,
        )
        .unwrap();
        assert!(session.responses.is_empty());
        assert!(session.catalog[0].is_active);
    }
}
