use serde::{Serialize, Serializer};
use uuid::Uuid;

use crate::models::ResultStatus;

/// Final rank of a crew in the discipline standings. Disqualified crews
/// carry the literal `"DSQ"` sentinel instead of a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalRank {
    Placed(u32),
    Disqualified,
}

impl Serialize for FinalRank {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FinalRank::Placed(rank) => serializer.serialize_u32(*rank),
            FinalRank::Disqualified => serializer.serialize_str("DSQ"),
        }
    }
}

/// One crew's line in the discipline standings.
///
/// `status` is `FINISHED` or `DSQ` once the aggregate is defined and
/// absent while the crew still misses a round's result. Times carry both
/// the raw millisecond count and the `MM:SS.mmm` display form.
#[derive(Debug, Clone, Serialize)]
pub struct CrewStanding {
    pub crew_id: Uuid,
    pub status: Option<ResultStatus>,
    pub total_time_ms: Option<u64>,
    pub total_time: Option<String>,
    pub rank: Option<FinalRank>,
}

/// Standings of one discipline, attached to its detected final round.
#[derive(Debug, Clone, Serialize)]
pub struct DisciplineStandings {
    pub discipline_id: Uuid,
    pub final_round_id: Option<Uuid>,
    pub standings: Vec<CrewStanding>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_serializes_as_number_or_sentinel() {
        assert_eq!(serde_json::to_value(FinalRank::Placed(3)).unwrap(), serde_json::json!(3));
        assert_eq!(
            serde_json::to_value(FinalRank::Disqualified).unwrap(),
            serde_json::json!("DSQ")
        );
    }

    #[test]
    fn test_standing_wire_shape() {
        let standing = CrewStanding {
            crew_id: Uuid::nil(),
            status: Some(ResultStatus::Finished),
            total_time_ms: Some(363_000),
            total_time: Some("06:03.000".to_string()),
            rank: Some(FinalRank::Placed(1)),
        };
        let value = serde_json::to_value(&standing).unwrap();
        assert_eq!(value["status"], "FINISHED");
        assert_eq!(value["total_time_ms"], 363_000);
        assert_eq!(value["total_time"], "06:03.000");
        assert_eq!(value["rank"], 1);
    }
}
