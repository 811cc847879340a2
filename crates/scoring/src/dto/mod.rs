pub mod positions;
pub mod standings;

pub use positions::PositionUpdate;
pub use standings::{CrewStanding, DisciplineStandings, FinalRank};
