pub mod final_round;
pub mod positions;
pub mod standings;

pub use final_round::{FINAL_STAGES, final_round, is_final_round};
pub use positions::{PositionService, assign_positions};
pub use standings::{StandingsService, compute_standings};
