//! Session evaluation: catalog preparation, the readiness gate, and the
//! calculator composed in the order an orchestrating service runs them.

use crate::calculator::MatchCalculator;
use crate::catalog::prepare_catalog;
use crate::entities::{MatchResult, SessionInput};
use crate::enums::{EvaluationStatus, Role};
use crate::errors::CoreError;
use crate::readiness::ReadinessReport;
use crate::responses::{EvaluationResponse, ValidationResponse};
use crate::validator::{ValidationVerdict, validate_responses};

/// Outcome of [`evaluate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// At least one participant is still answering. Callers poll again later.
    Pending {
        readiness: ReadinessReport,
        verdict: ValidationVerdict,
    },
    Ready(MatchResult),
}

impl Evaluation {
    #[must_use]
    pub const fn status(&self) -> EvaluationStatus {
        match self {
            Self::Pending { .. } => EvaluationStatus::Pending,
            Self::Ready(_) => EvaluationStatus::Ready,
        }
    }

    #[must_use]
    pub fn into_response(self, session_id: impl Into<String>) -> EvaluationResponse {
        let status = self.status();
        let (readiness, message, result) = match self {
            Self::Pending { readiness, verdict } => (Some(readiness), verdict.message(), None),
            Self::Ready(result) => (None, None, Some(result)),
        };
        EvaluationResponse {
            session_id: session_id.into(),
            status,
            readiness,
            message,
            result,
        }
    }
}

/// Expected response count: the explicit override, or the size of the
/// prepared (active) catalog.
#[must_use]
pub fn expected_questions(session: &SessionInput, expected: Option<usize>) -> usize {
    expected.unwrap_or_else(|| {
        session
            .catalog
            .iter()
            .filter(|question| question.is_active)
            .count()
    })
}

/// Run the readiness gate for `session` without calculating anything.
#[must_use]
pub fn check_session(session: &SessionInput, expected: Option<usize>) -> ValidationResponse {
    let expected_questions = expected_questions(session, expected);
    let host = session.responses_for(Role::Host);
    let guest = session.responses_for(Role::Guest);
    let verdict = validate_responses(&host, &guest, expected_questions);

    ValidationResponse {
        session_id: session.session_id.clone(),
        valid: verdict.is_valid(),
        expected_questions,
        host_answered: host.len(),
        guest_answered: guest.len(),
        message: verdict.message(),
    }
}

/// Validate, then calculate if both participants are done.
///
/// # Errors
///
/// Propagates [`CoreError::InsufficientInput`] from the calculator, which
/// happens when validation passes trivially (`expected == 0`) on empty input.
pub fn evaluate(
    session: &SessionInput,
    expected: Option<usize>,
    calculator: &MatchCalculator,
) -> Result<Evaluation, CoreError> {
    let catalog = prepare_catalog(session.catalog.iter().cloned());
    let expected = expected.unwrap_or(catalog.len());
    let host = session.responses_for(Role::Host);
    let guest = session.responses_for(Role::Guest);

    let verdict = validate_responses(&host, &guest, expected);
    if !verdict.is_valid() {
        let reason = verdict.message().unwrap_or_default();
        tracing::debug!(session_id = %session.session_id, %reason, "session not ready");
        return Ok(Evaluation::Pending {
            readiness: ReadinessReport::new(host.len(), guest.len(), expected),
            verdict,
        });
    }

    calculator
        .calculate(&host, &guest, &catalog)
        .map(Evaluation::Ready)
}
