use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::SharedItemKind;

/// Outcome of a match calculation.
///
/// Favorites and the shared item are text snapshots, not question references,
/// so later edits to question content do not rewrite past results.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MatchResult {
    /// `round(matched_questions / total_questions * 100)`, or 0 when `total_questions` is 0.
    pub match_percentage: u8,
    pub host_favorite: String,
    pub guest_favorite: String,
    /// First mutually liked item, or the fallback message named by `shared_item_kind`.
    pub shared_item: String,
    pub shared_item_kind: SharedItemKind,
    /// `min(host responses, guest responses)`, counted before catalog alignment.
    pub total_questions: usize,
    pub matched_questions: usize,
    pub host_likes: usize,
    pub guest_likes: usize,
}
