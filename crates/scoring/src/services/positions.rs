use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::Mutex as AsyncMutex;
use uuid::Uuid;

use crate::dto::PositionUpdate;
use crate::error::Result;
use crate::models::Entry;
use crate::repository::ResultStore;

/// Computes finishing positions for one round from scratch.
///
/// Entries with status `FINISHED` and a strictly positive time are ranked
/// 1..K by ascending time, crew id breaking ties; every other entry has
/// its position cleared. The recompute is total and idempotent — partial
/// updates are never attempted.
pub fn assign_positions(entries: &[Entry]) -> Vec<PositionUpdate> {
    let mut ranked: Vec<(u64, Uuid)> = entries
        .iter()
        .filter_map(|e| e.ranked_time().map(|time| (time, e.crew_id)))
        .collect();
    ranked.sort_unstable();

    let position_of: HashMap<Uuid, u32> = ranked
        .into_iter()
        .enumerate()
        .map(|(i, (_, crew_id))| (crew_id, i as u32 + 1))
        .collect();

    entries
        .iter()
        .map(|e| PositionUpdate {
            crew_id: e.crew_id,
            position: position_of.get(&e.crew_id).copied(),
        })
        .collect()
}

/// Recomputes a round's positions through a [`ResultStore`], serialized
/// per round: the read-compute-write cycle of one round never interleaves
/// with another writer of the same round. Rounds are independent of each
/// other.
pub struct PositionService<S> {
    store: Arc<S>,
    round_locks: Mutex<HashMap<Uuid, Arc<AsyncMutex<()>>>>,
}

impl<S: ResultStore> PositionService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            round_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Recomputes and writes back every position of `round_id`. Invoked
    /// after each write to any entry's time or status within the round.
    pub async fn recompute_round(&self, round_id: Uuid) -> Result<()> {
        let lock = self.round_lock(round_id);
        let _guard = lock.lock().await;

        let entries = self.store.entries_for_round(round_id).await?;
        let positions = assign_positions(&entries);
        tracing::debug!(%round_id, entries = entries.len(), "recomputed round positions");
        self.store.write_positions(round_id, &positions).await
    }

    fn round_lock(&self, round_id: Uuid) -> Arc<AsyncMutex<()>> {
        let mut locks = self
            .round_locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(locks.entry(round_id).or_default())
    }
}
