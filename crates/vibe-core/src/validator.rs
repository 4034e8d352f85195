//! Readiness gate in front of the calculator.
//!
//! A session is ready once both participants have submitted at least the
//! expected number of responses. Surplus is fine: the calculator only looks
//! at questions that are still in the catalog.

use std::fmt;

use crate::enums::Role;

/// One participant who has not answered enough questions yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortfall {
    pub role: Role,
    pub answered: usize,
    pub expected: usize,
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} has answered {}/{} questions",
            self.role, self.answered, self.expected
        )
    }
}

/// Result of [`validate_responses`]. `Invalid` is the normal "not ready yet"
/// state during live play, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationVerdict {
    Valid,
    /// Host shortfall first when both participants are short.
    Invalid { shortfalls: Vec<Shortfall> },
}

impl ValidationVerdict {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    #[must_use]
    pub fn shortfalls(&self) -> &[Shortfall] {
        match self {
            Self::Valid => &[],
            Self::Invalid { shortfalls } => shortfalls,
        }
    }

    /// Human-readable explanation, `None` when valid.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        if self.is_valid() {
            return None;
        }
        Some(
            self.shortfalls()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}

/// Check that both response lists hold at least `expected` entries.
///
/// Only counts are inspected, so any response representation works.
#[must_use]
pub fn validate_responses<H, G>(host: &[H], guest: &[G], expected: usize) -> ValidationVerdict {
    let shortfalls: Vec<Shortfall> = [(Role::Host, host.len()), (Role::Guest, guest.len())]
        .into_iter()
        .filter(|&(_, answered)| answered < expected)
        .map(|(role, answered)| Shortfall {
            role,
            answered,
            expected,
        })
        .collect();

    if shortfalls.is_empty() {
        ValidationVerdict::Valid
    } else {
        tracing::debug!(expected, host = host.len(), guest = guest.len(), "responses not ready");
        ValidationVerdict::Invalid { shortfalls }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(12, 12, 12)]
    #[case(13, 12, 12)]
    #[case(0, 0, 0)]
    #[case(5, 9, 4)]
    fn valid_when_both_meet_expected(
        #[case] host: usize,
        #[case] guest: usize,
        #[case] expected: usize,
    ) {
        let verdict = validate_responses(&vec![(); host], &vec![(); guest], expected);
        assert!(verdict.is_valid());
        assert_eq!(verdict.message(), None);
    }

    #[test]
    fn host_short_is_named_with_counts() {
        let verdict = validate_responses(&[(); 8], &[(); 12], 12);
        assert!(!verdict.is_valid());

        let message = verdict.message().expect("invalid verdict has a message");
        assert!(message.contains("host"));
        assert!(message.contains("8/12"));
        assert!(!message.contains("guest"));
        assert_eq!(verdict.shortfalls()[0].role, Role::Host);
    }

    #[test]
    fn both_short_lists_host_first() {
        let verdict = validate_responses(&[(); 1], &[(); 3], 5);
        assert_eq!(
            verdict,
            ValidationVerdict::Invalid {
                shortfalls: vec![
                    Shortfall {
                        role: Role::Host,
                        answered: 1,
                        expected: 5,
                    },
                    Shortfall {
                        role: Role::Guest,
                        answered: 3,
                        expected: 5,
                    },
                ],
            }
        );
        assert_eq!(
            verdict.message().unwrap(),
            "host has answered 1/5 questions; guest has answered 3/5 questions"
        );
    }
}
