use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle of a scheduled heat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundStatus {
    Scheduled,
    InProgress,
    Finished,
    Cancelled,
}

/// One scheduled or contested heat within a discipline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    pub round_id: Uuid,
    pub discipline_id: Uuid,
    /// Free-text stage label as entered by organizers ("Round 1",
    /// "Semifinal", "Final", ...). Only the exact labels "Final" and
    /// "Grand Final" mean anything to the final-round detector.
    pub stage: String,
    pub created_at: NaiveDateTime,
    pub status: RoundStatus,
}

impl Round {
    /// Ordering key within a discipline: creation time, round id as
    /// tie-breaker.
    pub fn chronological_key(&self) -> (NaiveDateTime, Uuid) {
        (self.created_at, self.round_id)
    }
}
