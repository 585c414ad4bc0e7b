use survivor_common::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Caught locally; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Could not reach leaderboard: {0}")]
    Transport(String),
    #[error("Leaderboard rejected request: {0}")]
    Rejected(String),
}
