pub mod entry;
pub mod race_time;
pub mod round;
pub mod status;

pub use entry::{Entry, EntryResult, ResultUpdate};
pub use race_time::RaceTime;
pub use round::{Round, RoundStatus};
pub use status::{CombinedResult, ResultStatus};
