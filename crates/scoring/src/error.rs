use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScoringError>;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("Malformed race time: {0:?}")]
    MalformedTime(String),

    #[error("Unknown round: {0}")]
    UnknownRound(uuid::Uuid),

    #[error("Store error: {0}")]
    Store(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl ScoringError {
    pub fn store(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        ScoringError::Store(Box::new(source))
    }
}
