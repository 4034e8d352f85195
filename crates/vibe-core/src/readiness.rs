//! Progress payload surfaced while a session is still collecting answers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::calculator::round_percentage;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ParticipantProgress {
    pub completed: bool,
    pub answered: usize,
    /// Share of the expected total answered so far, capped at 100.
    pub percentage: u8,
}

impl ParticipantProgress {
    #[must_use]
    pub fn new(answered: usize, expected: usize) -> Self {
        let percentage = if expected == 0 {
            100
        } else {
            round_percentage(answered.min(expected), expected)
        };
        Self {
            completed: answered >= expected,
            answered,
            percentage,
        }
    }
}

/// Per-participant progress towards the expected question count.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReadinessReport {
    pub host: ParticipantProgress,
    pub guest: ParticipantProgress,
    pub total_expected: usize,
}

impl ReadinessReport {
    #[must_use]
    pub fn new(host_answered: usize, guest_answered: usize, expected: usize) -> Self {
        Self {
            host: ParticipantProgress::new(host_answered, expected),
            guest: ParticipantProgress::new(guest_answered, expected),
            total_expected: expected,
        }
    }
}
