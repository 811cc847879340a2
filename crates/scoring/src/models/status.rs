use serde::{Deserialize, Serialize};

/// Outcome recorded for one crew in one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultStatus {
    Finished,
    Dns,
    Dnf,
    Dsq,
}

/// Aggregate of one crew's outcomes across every scoring round of a
/// discipline. Never persisted; derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombinedResult {
    /// Every round finished with a recorded time; `total_ms` is their sum.
    Finished { total_ms: u64 },
    /// Disqualified in at least one round. Time undefined.
    Disqualified,
    /// Missing at least one round's result. Not rankable yet.
    Pending,
}

impl CombinedResult {
    /// Combines one crew's per-round outcomes, one item per scoring round.
    /// `None` means the crew has no usable result for that round (never
    /// registered, or registered without a status yet).
    ///
    /// A DSQ anywhere dominates. Short of a full set of finished times the
    /// crew is pending, not penalized.
    pub fn combine<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = Option<(ResultStatus, Option<u64>)>>,
    {
        let mut total: u64 = 0;
        let mut complete = true;

        for outcome in outcomes {
            match outcome {
                Some((ResultStatus::Dsq, _)) => return Self::Disqualified,
                Some((ResultStatus::Finished, Some(time))) if time > 0 => total += time,
                _ => complete = false,
            }
        }

        if complete {
            Self::Finished { total_ms: total }
        } else {
            Self::Pending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(time: u64) -> Option<(ResultStatus, Option<u64>)> {
        Some((ResultStatus::Finished, Some(time)))
    }

    #[test]
    fn test_combine_all_finished_sums_times() {
        let combined =
            CombinedResult::combine([finished(120_000), finished(125_000), finished(118_000)]);
        assert_eq!(combined, CombinedResult::Finished { total_ms: 363_000 });
    }

    #[test]
    fn test_combine_dsq_dominates() {
        let combined =
            CombinedResult::combine([finished(120_000), Some((ResultStatus::Dsq, None))]);
        assert_eq!(combined, CombinedResult::Disqualified);
    }

    #[test]
    fn test_combine_dsq_after_missing_round_still_disqualifies() {
        let combined = CombinedResult::combine([None, Some((ResultStatus::Dsq, Some(90_000)))]);
        assert_eq!(combined, CombinedResult::Disqualified);
    }

    #[test]
    fn test_combine_missing_round_is_pending() {
        let combined = CombinedResult::combine([finished(120_000), None]);
        assert_eq!(combined, CombinedResult::Pending);
    }

    #[test]
    fn test_combine_dns_and_dnf_are_pending_not_penalized() {
        for status in [ResultStatus::Dns, ResultStatus::Dnf] {
            let combined = CombinedResult::combine([finished(120_000), Some((status, None))]);
            assert_eq!(combined, CombinedResult::Pending);
        }
    }

    #[test]
    fn test_combine_finished_without_time_is_pending() {
        let combined =
            CombinedResult::combine([finished(120_000), Some((ResultStatus::Finished, None))]);
        assert_eq!(combined, CombinedResult::Pending);

        let combined =
            CombinedResult::combine([finished(120_000), Some((ResultStatus::Finished, Some(0)))]);
        assert_eq!(combined, CombinedResult::Pending);
    }

    #[test]
    fn test_status_wire_spelling() {
        assert_eq!(serde_json::to_string(&ResultStatus::Finished).unwrap(), "\"FINISHED\"");
        assert_eq!(serde_json::to_string(&ResultStatus::Dsq).unwrap(), "\"DSQ\"");
        assert_eq!(
            serde_json::from_str::<ResultStatus>("\"DNS\"").unwrap(),
            ResultStatus::Dns
        );
    }
}
