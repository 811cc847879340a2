use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::ResultStore;
use crate::dto::PositionUpdate;
use crate::error::{Result, ScoringError};
use crate::models::{Entry, ResultUpdate, Round};

/// In-process [`ResultStore`] backed by plain maps.
///
/// Carries the entry write path (`register_crew`, `record_result`) on top
/// of the read seam, so the test suites and embedding callers without a
/// database can drive a whole competition through it.
#[derive(Default)]
pub struct MemoryResultStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    rounds: HashMap<Uuid, Round>,
    // entries keyed by round, in registration order
    entries: HashMap<Uuid, Vec<Entry>>,
}

impl MemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_round(&self, round: Round) {
        let mut inner = self.inner.write().await;
        inner.entries.entry(round.round_id).or_default();
        inner.rounds.insert(round.round_id, round);
    }

    /// Registers a crew for a round without a result. Registering twice is
    /// a no-op.
    pub async fn register_crew(&self, round_id: Uuid, crew_id: Uuid) -> Result<()> {
        let mut inner = self.inner.write().await;
        if !inner.rounds.contains_key(&round_id) {
            return Err(ScoringError::UnknownRound(round_id));
        }
        let entries = inner.entries.entry(round_id).or_default();
        if !entries.iter().any(|e| e.crew_id == crew_id) {
            entries.push(Entry::registered(round_id, crew_id));
        }
        Ok(())
    }

    /// Applies a timing update to a crew's entry, registering the crew
    /// first if needed. Positions are not touched here; callers go through
    /// [`PositionService::recompute_round`](crate::services::PositionService::recompute_round)
    /// afterwards.
    pub async fn record_result(
        &self,
        round_id: Uuid,
        crew_id: Uuid,
        update: &ResultUpdate,
    ) -> Result<()> {
        let mut inner = self.inner.write().await;
        if !inner.rounds.contains_key(&round_id) {
            return Err(ScoringError::UnknownRound(round_id));
        }
        let entries = inner.entries.entry(round_id).or_default();
        match entries.iter_mut().find(|e| e.crew_id == crew_id) {
            Some(entry) => entry.apply(update),
            None => {
                let mut entry = Entry::registered(round_id, crew_id);
                entry.apply(update);
                entries.push(entry);
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ResultStore for MemoryResultStore {
    async fn rounds_for_discipline(&self, discipline_id: Uuid) -> Result<Vec<Round>> {
        let inner = self.inner.read().await;
        let mut rounds: Vec<Round> = inner
            .rounds
            .values()
            .filter(|r| r.discipline_id == discipline_id)
            .cloned()
            .collect();
        rounds.sort_by_key(Round::chronological_key);
        Ok(rounds)
    }

    async fn entries_for_round(&self, round_id: Uuid) -> Result<Vec<Entry>> {
        let inner = self.inner.read().await;
        Ok(inner.entries.get(&round_id).cloned().unwrap_or_default())
    }

    async fn write_positions(&self, round_id: Uuid, positions: &[PositionUpdate]) -> Result<()> {
        let mut inner = self.inner.write().await;
        let entries = inner
            .entries
            .get_mut(&round_id)
            .ok_or(ScoringError::UnknownRound(round_id))?;
        for update in positions {
            if let Some(entry) = entries.iter_mut().find(|e| e.crew_id == update.crew_id) {
                entry.set_position(update.position);
            }
        }
        Ok(())
    }
}
