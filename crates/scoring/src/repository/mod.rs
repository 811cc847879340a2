use async_trait::async_trait;
use uuid::Uuid;

use crate::dto::PositionUpdate;
use crate::error::Result;
use crate::models::{Entry, Round};

pub mod memory;

pub use memory::MemoryResultStore;

/// Read/write seam to whatever owns the round and entry records. The
/// kernel reads snapshots through it and writes nothing but computed
/// positions.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// All rounds of one discipline, ordered by creation time with round
    /// id as tie-breaker.
    async fn rounds_for_discipline(&self, discipline_id: Uuid) -> Result<Vec<Round>>;

    /// All entries of one round, registered or not.
    async fn entries_for_round(&self, round_id: Uuid) -> Result<Vec<Entry>>;

    /// Writes one round's recomputed positions as a batch.
    async fn write_positions(&self, round_id: Uuid, positions: &[PositionUpdate]) -> Result<()>;
}
