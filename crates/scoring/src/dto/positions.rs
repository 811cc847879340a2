use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of a per-round position recompute, written back as a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionUpdate {
    pub crew_id: Uuid,
    pub position: Option<u32>,
}
