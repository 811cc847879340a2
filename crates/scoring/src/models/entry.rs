use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::status::ResultStatus;

/// Result state of one crew in one round.
///
/// A crew registered for a round but not yet timed is `Registered`, not a
/// row of nulls; only entries that received a timing update carry result
/// fields at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum EntryResult {
    Registered,
    Recorded {
        time_ms: Option<u64>,
        status: Option<ResultStatus>,
        position: Option<u32>,
    },
}

/// A timing update for one crew in one round.
///
/// Time and status are replaced wholesale on every update; a field the
/// update omits is cleared, never inherited from the previous update.
/// Lane is the one exception: it persists unless the update carries one.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ResultUpdate {
    pub time_ms: Option<u64>,
    pub status: Option<ResultStatus>,
    pub lane: Option<i16>,
}

/// One competing unit (crew) within a round. `crew_id` is stable across
/// the rounds of a discipline and is what the cumulative scorer keys on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub round_id: Uuid,
    pub crew_id: Uuid,
    pub lane: Option<i16>,
    pub result: EntryResult,
}

impl Entry {
    pub fn registered(round_id: Uuid, crew_id: Uuid) -> Self {
        Self {
            round_id,
            crew_id,
            lane: None,
            result: EntryResult::Registered,
        }
    }

    /// Applies a timing update. An update carrying neither time nor status
    /// clears the entry back to `Registered`. The position is reset on
    /// every update; only the position calculator ever writes one.
    pub fn apply(&mut self, update: &ResultUpdate) {
        if let Some(lane) = update.lane {
            self.lane = Some(lane);
        }
        self.result = if update.time_ms.is_none() && update.status.is_none() {
            EntryResult::Registered
        } else {
            EntryResult::Recorded {
                time_ms: update.time_ms,
                status: update.status,
                position: None,
            }
        };
    }

    /// The outcome the cumulative scorer combines: `None` until a status
    /// is recorded.
    pub fn outcome(&self) -> Option<(ResultStatus, Option<u64>)> {
        match self.result {
            EntryResult::Recorded {
                status: Some(status),
                time_ms,
                ..
            } => Some((status, time_ms)),
            _ => None,
        }
    }

    /// Finishing time eligible for ranking: status exactly `FINISHED` and
    /// a strictly positive time.
    pub fn ranked_time(&self) -> Option<u64> {
        match self.result {
            EntryResult::Recorded {
                status: Some(ResultStatus::Finished),
                time_ms: Some(time),
                ..
            } if time > 0 => Some(time),
            _ => None,
        }
    }

    pub fn position(&self) -> Option<u32> {
        match self.result {
            EntryResult::Recorded { position, .. } => position,
            EntryResult::Registered => None,
        }
    }

    /// Writes a computed position. A no-op for entries without a recorded
    /// result; those can never hold one.
    pub fn set_position(&mut self, new_position: Option<u32>) {
        if let EntryResult::Recorded { position, .. } = &mut self.result {
            *position = new_position;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> Entry {
        Entry::registered(Uuid::new_v4(), Uuid::new_v4())
    }

    #[test]
    fn test_apply_replaces_time_and_status_wholesale() {
        let mut entry = entry();
        entry.apply(&ResultUpdate {
            time_ms: Some(65_300),
            status: Some(ResultStatus::Finished),
            lane: None,
        });

        // A later update carrying only a time clears the status.
        entry.apply(&ResultUpdate {
            time_ms: Some(66_000),
            status: None,
            lane: None,
        });
        assert_eq!(
            entry.result,
            EntryResult::Recorded {
                time_ms: Some(66_000),
                status: None,
                position: None,
            }
        );
        assert_eq!(entry.outcome(), None);
    }

    #[test]
    fn test_apply_empty_update_resets_to_registered() {
        let mut entry = entry();
        entry.apply(&ResultUpdate {
            time_ms: Some(65_300),
            status: Some(ResultStatus::Finished),
            lane: None,
        });
        entry.apply(&ResultUpdate::default());
        assert_eq!(entry.result, EntryResult::Registered);
    }

    #[test]
    fn test_lane_persists_unless_updated() {
        let mut entry = entry();
        entry.apply(&ResultUpdate {
            time_ms: Some(65_300),
            status: Some(ResultStatus::Finished),
            lane: Some(4),
        });
        entry.apply(&ResultUpdate {
            time_ms: Some(66_000),
            status: Some(ResultStatus::Finished),
            lane: None,
        });
        assert_eq!(entry.lane, Some(4));

        entry.apply(&ResultUpdate {
            lane: Some(5),
            ..ResultUpdate::default()
        });
        assert_eq!(entry.lane, Some(5));
    }

    #[test]
    fn test_position_reset_on_every_update() {
        let mut entry = entry();
        entry.apply(&ResultUpdate {
            time_ms: Some(65_300),
            status: Some(ResultStatus::Finished),
            lane: None,
        });
        entry.set_position(Some(1));
        assert_eq!(entry.position(), Some(1));

        entry.apply(&ResultUpdate {
            time_ms: Some(65_300),
            status: Some(ResultStatus::Finished),
            lane: None,
        });
        assert_eq!(entry.position(), None);
    }

    #[test]
    fn test_set_position_is_noop_for_registered() {
        let mut entry = entry();
        entry.set_position(Some(1));
        assert_eq!(entry.position(), None);
        assert_eq!(entry.result, EntryResult::Registered);
    }

    #[test]
    fn test_ranked_time_requires_finished_and_positive_time() {
        let mut entry = entry();
        assert_eq!(entry.ranked_time(), None);

        entry.apply(&ResultUpdate {
            time_ms: Some(65_300),
            status: Some(ResultStatus::Finished),
            lane: None,
        });
        assert_eq!(entry.ranked_time(), Some(65_300));

        for status in [ResultStatus::Dns, ResultStatus::Dnf, ResultStatus::Dsq] {
            entry.apply(&ResultUpdate {
                time_ms: Some(65_300),
                status: Some(status),
                lane: None,
            });
            assert_eq!(entry.ranked_time(), None);
        }

        entry.apply(&ResultUpdate {
            time_ms: Some(0),
            status: Some(ResultStatus::Finished),
            lane: None,
        });
        assert_eq!(entry.ranked_time(), None);

        entry.apply(&ResultUpdate {
            time_ms: None,
            status: Some(ResultStatus::Finished),
            lane: None,
        });
        assert_eq!(entry.ranked_time(), None);
    }
}
