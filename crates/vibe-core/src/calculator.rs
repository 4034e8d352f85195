//! Match calculation.
//!
//! Aligns both participants' answers against the ordered catalog in a single
//! pass, counts agreements, and picks favorites and the shared item. "First"
//! always means earliest in catalog order; the catalog is never re-sorted here
//! (see [`crate::catalog::prepare_catalog`]).

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::entities::{MatchResult, Question, Response};
use crate::enums::{Answer, Role, SharedItemKind};
use crate::errors::CoreError;
use crate::messages::FallbackMessages;

/// Computes [`MatchResult`]s. Holds only the fallback texts, so one instance
/// can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct MatchCalculator {
    messages: FallbackMessages,
}

/// Liked questions per participant, in catalog order.
#[derive(Debug, Default)]
struct Likes<'a> {
    host: Vec<&'a Question>,
    guest: Vec<&'a Question>,
    shared: Vec<&'a Question>,
}

impl<'a> Likes<'a> {
    fn of(&self, role: Role) -> &[&'a Question] {
        match role {
            Role::Host => &self.host,
            Role::Guest => &self.guest,
        }
    }
}

impl MatchCalculator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_messages(messages: FallbackMessages) -> Self {
        Self { messages }
    }

    /// Score `host` against `guest` over `catalog`.
    ///
    /// Questions missing an answer from either side are skipped, as are
    /// repeated catalog ids after their first occurrence. The
    /// percentage denominator is `min(host.len(), guest.len())`, i.e. raw
    /// submission counts rather than the number of aligned questions.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InsufficientInput`] if either response list or the
    /// catalog is empty. Callers are expected to run
    /// [`validate_responses`](crate::validate_responses) first.
    pub fn calculate(
        &self,
        host: &[Response],
        guest: &[Response],
        catalog: &[Question],
    ) -> Result<MatchResult, CoreError> {
        if host.is_empty() || guest.is_empty() {
            return Err(CoreError::InsufficientInput(
                "both players must have responses".to_string(),
            ));
        }
        if catalog.is_empty() {
            return Err(CoreError::InsufficientInput(
                "question catalog must not be empty".to_string(),
            ));
        }

        let host_answers = answer_lookup(host);
        let guest_answers = answer_lookup(guest);

        let mut matched_questions = 0usize;
        let mut likes = Likes::default();
        let mut seen = HashSet::new();

        for question in catalog {
            if !seen.insert(question.id.as_str()) {
                trace!(question_id = %question.id, "skipping repeated catalog entry");
                continue;
            }
            let (Some(&host_answer), Some(&guest_answer)) = (
                host_answers.get(question.id.as_str()),
                guest_answers.get(question.id.as_str()),
            ) else {
                trace!(question_id = %question.id, "skipping question without both answers");
                continue;
            };

            if host_answer == guest_answer {
                matched_questions += 1;
            }
            if host_answer.is_like() {
                likes.host.push(question);
            }
            if guest_answer.is_like() {
                likes.guest.push(question);
            }
            if host_answer.is_like() && guest_answer.is_like() {
                likes.shared.push(question);
            }
        }

        let total_questions = host.len().min(guest.len());
        let match_percentage = round_percentage(matched_questions, total_questions);
        let (shared_item, shared_item_kind) = self.shared_item(&likes);

        debug!(
            total_questions,
            matched_questions,
            match_percentage,
            host_likes = likes.host.len(),
            guest_likes = likes.guest.len(),
            shared_item_kind = %shared_item_kind,
            "match calculated"
        );

        Ok(MatchResult {
            match_percentage,
            host_favorite: self.favorite(&likes, Role::Host),
            guest_favorite: self.favorite(&likes, Role::Guest),
            shared_item,
            shared_item_kind,
            total_questions,
            matched_questions,
            host_likes: likes.host.len(),
            guest_likes: likes.guest.len(),
        })
    }

    fn favorite(&self, likes: &Likes<'_>, role: Role) -> String {
        likes.of(role).first().map_or_else(
            || self.messages.chose_nothing(role).to_string(),
            |question| question.text.clone(),
        )
    }

    fn shared_item(&self, likes: &Likes<'_>) -> (String, SharedItemKind) {
        if let Some(question) = likes.shared.first() {
            return (question.text.clone(), SharedItemKind::Mutual);
        }

        match (likes.host.first(), likes.guest.first()) {
            (None, None) => (
                self.messages.both_chose_nothing.clone(),
                SharedItemKind::NobodyLiked,
            ),
            (Some(first), None) => (
                self.messages.only_chose(Role::Host, &first.text),
                SharedItemKind::only(Role::Host),
            ),
            (None, Some(first)) => (
                self.messages.only_chose(Role::Guest, &first.text),
                SharedItemKind::only(Role::Guest),
            ),
            (Some(_), Some(_)) => (
                self.messages.different_preferences.clone(),
                SharedItemKind::DifferentPreferences,
            ),
        }
    }
}

/// Score with the default fallback messages.
///
/// # Errors
///
/// See [`MatchCalculator::calculate`].
pub fn calculate_match(
    host: &[Response],
    guest: &[Response],
    catalog: &[Question],
) -> Result<MatchResult, CoreError> {
    MatchCalculator::new().calculate(host, guest, catalog)
}

/// Question id to answer. Later entries for the same id win.
fn answer_lookup(responses: &[Response]) -> HashMap<&str, Answer> {
    responses
        .iter()
        .map(|response| (response.question_id.as_str(), response.answer))
        .collect()
}

/// `round(part / whole * 100)` with halves rounded up, capped at 100.
/// Returns 0 when `whole` is 0.
pub(crate) fn round_percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let scaled = part.saturating_mul(200).saturating_add(whole) / whole.saturating_mul(2);
    u8::try_from(scaled.min(100)).unwrap_or(100)
}
