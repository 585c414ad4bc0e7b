use serde::Deserialize;

pub use survivor_common::models::{
    ApiResponse, LeaderboardEntry, ScoreSubmission, SubmitResult, UNKNOWN_CHARACTER,
};

/// `limit` stays raw text so a non-numeric value gets a validation message
/// rather than a query decode error.
#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardQuery {
    pub limit: Option<String>,
}
