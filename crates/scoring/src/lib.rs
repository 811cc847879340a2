pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use error::{Result, ScoringError};
pub use models::{
    CombinedResult, Entry, EntryResult, RaceTime, ResultStatus, ResultUpdate, Round, RoundStatus,
};
pub use repository::{MemoryResultStore, ResultStore};
pub use services::{PositionService, StandingsService};
