//! Roles, answers, and result discriminators for MatchVibe.
//!
//! String-valued enums use `snake_case` serialization via
//! `#[serde(rename_all = "snake_case")]`. [`Answer`] is the exception: it is
//! stored and transmitted as the integer `0` or `1`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// The two fixed participant roles in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Host,
    Guest,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Host => "host",
            Self::Guest => "guest",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Answer
// ---------------------------------------------------------------------------

/// A binary swipe. Serialized as `1` (like) or `0` (dislike).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Answer {
    Dislike,
    Like,
}

impl Answer {
    #[must_use]
    pub const fn is_like(self) -> bool {
        matches!(self, Self::Like)
    }

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Dislike => 0,
            Self::Like => 1,
        }
    }
}

impl From<bool> for Answer {
    fn from(liked: bool) -> Self {
        if liked { Self::Like } else { Self::Dislike }
    }
}

impl From<Answer> for u8 {
    fn from(answer: Answer) -> Self {
        answer.as_u8()
    }
}

impl TryFrom<u8> for Answer {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Dislike),
            1 => Ok(Self::Like),
            other => Err(CoreError::Validation(format!(
                "answer must be 0 or 1, got {other}"
            ))),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dislike => "dislike",
            Self::Like => "like",
        })
    }
}

// ---------------------------------------------------------------------------
// SharedItemKind
// ---------------------------------------------------------------------------

/// Which branch of the shared-item precedence produced `MatchResult::shared_item`.
///
/// ```text
/// mutual like exists          → mutual
/// nobody liked anything       → nobody_liked
/// only the host liked things  → only_host
/// only the guest liked things → only_guest
/// both liked, no overlap      → different_preferences
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SharedItemKind {
    Mutual,
    NobodyLiked,
    OnlyHost,
    OnlyGuest,
    DifferentPreferences,
}

impl SharedItemKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mutual => "mutual",
            Self::NobodyLiked => "nobody_liked",
            Self::OnlyHost => "only_host",
            Self::OnlyGuest => "only_guest",
            Self::DifferentPreferences => "different_preferences",
        }
    }

    /// One-sided outcome for the given role.
    #[must_use]
    pub const fn only(role: Role) -> Self {
        match role {
            Role::Host => Self::OnlyHost,
            Role::Guest => Self::OnlyGuest,
        }
    }
}

impl fmt::Display for SharedItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EvaluationStatus
// ---------------------------------------------------------------------------

/// Outcome of evaluating a session: still collecting answers, or scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationStatus {
    Pending,
    Ready,
}

impl EvaluationStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Ready => "ready",
        }
    }
}

impl fmt::Display for EvaluationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_json:expr) => {
            #[test]
            fn $name() {
                let val: $ty = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_json));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(role_host, Role, Role::Host, "host");
    test_serde_roundtrip!(role_guest, Role, Role::Guest, "guest");
    test_serde_roundtrip!(
        shared_kind_different,
        SharedItemKind,
        SharedItemKind::DifferentPreferences,
        "different_preferences"
    );
    test_serde_roundtrip!(
        shared_kind_only_guest,
        SharedItemKind,
        SharedItemKind::OnlyGuest,
        "only_guest"
    );
    test_serde_roundtrip!(
        evaluation_pending,
        EvaluationStatus,
        EvaluationStatus::Pending,
        "pending"
    );

    #[test]
    fn answer_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Answer::Like).unwrap(), "1");
        assert_eq!(serde_json::to_string(&Answer::Dislike).unwrap(), "0");
        let like: Answer = serde_json::from_str("1").unwrap();
        assert_eq!(like, Answer::Like);
    }

    #[test]
    fn answer_rejects_out_of_range() {
        let err = serde_json::from_str::<Answer>("2").unwrap_err();
        assert!(err.to_string().contains("answer must be 0 or 1, got 2"));
        assert!(Answer::try_from(7).is_err());
    }

    #[test]
    fn answer_from_bool() {
        assert_eq!(Answer::from(true), Answer::Like);
        assert_eq!(Answer::from(false), Answer::Dislike);
        assert!(Answer::Like.is_like());
        assert!(!Answer::Dislike.is_like());
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", Role::Host), "host");
        assert_eq!(format!("{}", Answer::Like), "like");
        assert_eq!(format!("{}", SharedItemKind::NobodyLiked), "nobody_liked");
        assert_eq!(format!("{}", SharedItemKind::only(Role::Host)), "only_host");
        assert_eq!(format!("{}", EvaluationStatus::Ready), "ready");
    }
}
