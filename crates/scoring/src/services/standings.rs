use std::sync::Arc;

use uuid::Uuid;

use crate::dto::{CrewStanding, DisciplineStandings, FinalRank};
use crate::error::Result;
use crate::models::{CombinedResult, Entry, RaceTime, ResultStatus, Round, RoundStatus};
use crate::repository::ResultStore;
use crate::services::final_round::final_round;

/// Cross-round standings for one discipline, from a snapshot of its
/// rounds and their entries.
///
/// A crew's times only add up once it holds a finished result in every
/// scoring round; a DSQ anywhere disqualifies the crew outright; anything
/// in between stays pending and unranked. Cancelled rounds are not
/// scoring rounds. Output order: ranked crews by ascending total time
/// (crew id breaking ties), then disqualified crews, then pending crews,
/// the latter two by crew id.
pub fn compute_standings(rounds: &[(Round, Vec<Entry>)]) -> Vec<CrewStanding> {
    let scoring: Vec<&(Round, Vec<Entry>)> = rounds
        .iter()
        .filter(|(round, _)| round.status != RoundStatus::Cancelled)
        .collect();

    // every crew with at least one entry anywhere in the discipline
    let mut crews: Vec<Uuid> = rounds
        .iter()
        .flat_map(|(_, entries)| entries.iter().map(|e| e.crew_id))
        .collect();
    crews.sort_unstable();
    crews.dedup();

    let mut finished: Vec<(u64, Uuid)> = Vec::new();
    let mut disqualified: Vec<Uuid> = Vec::new();
    let mut pending: Vec<Uuid> = Vec::new();

    for crew_id in crews {
        let combined = if scoring.is_empty() {
            CombinedResult::Pending
        } else {
            CombinedResult::combine(scoring.iter().map(|(_, entries)| {
                entries
                    .iter()
                    .find(|e| e.crew_id == crew_id)
                    .and_then(Entry::outcome)
            }))
        };
        match combined {
            CombinedResult::Finished { total_ms } => finished.push((total_ms, crew_id)),
            CombinedResult::Disqualified => disqualified.push(crew_id),
            CombinedResult::Pending => pending.push(crew_id),
        }
    }

    finished.sort_unstable();

    let mut standings: Vec<CrewStanding> = finished
        .into_iter()
        .enumerate()
        .map(|(i, (total_ms, crew_id))| CrewStanding {
            crew_id,
            status: Some(ResultStatus::Finished),
            total_time_ms: Some(total_ms),
            total_time: RaceTime::display_millis(Some(total_ms)),
            rank: Some(FinalRank::Placed(i as u32 + 1)),
        })
        .collect();

    standings.extend(disqualified.into_iter().map(|crew_id| CrewStanding {
        crew_id,
        status: Some(ResultStatus::Dsq),
        total_time_ms: None,
        total_time: None,
        rank: Some(FinalRank::Disqualified),
    }));

    standings.extend(pending.into_iter().map(|crew_id| CrewStanding {
        crew_id,
        status: None,
        total_time_ms: None,
        total_time: None,
        rank: None,
    }));

    standings
}

/// Loads a discipline snapshot through a [`ResultStore`], detects the
/// final round and computes the standings it carries. A discipline with
/// no rounds yields empty standings, never an error.
pub struct StandingsService<S> {
    store: Arc<S>,
}

impl<S: ResultStore> StandingsService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn standings_for_discipline(
        &self,
        discipline_id: Uuid,
    ) -> Result<DisciplineStandings> {
        let rounds = self.store.rounds_for_discipline(discipline_id).await?;
        let final_round_id = final_round(&rounds).map(|r| r.round_id);

        let mut snapshot = Vec::with_capacity(rounds.len());
        for round in rounds {
            let entries = self.store.entries_for_round(round.round_id).await?;
            snapshot.push((round, entries));
        }

        let standings = compute_standings(&snapshot);
        tracing::debug!(
            %discipline_id,
            rounds = snapshot.len(),
            crews = standings.len(),
            ?final_round_id,
            "computed discipline standings"
        );

        Ok(DisciplineStandings {
            discipline_id,
            final_round_id,
            standings,
        })
    }
}
