use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel stored when a run is submitted without a character.
pub const UNKNOWN_CHARACTER: &str = "Unknown";

/// A finished run as reported by the game.
///
/// `score` stays a raw JSON number so that fractional or oversized values
/// reach validation and get a precise reason instead of a decode failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSubmission {
    pub player_name: String,
    pub score: serde_json::Number,
    pub survival_time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
}

impl ScoreSubmission {
    pub fn new(
        player_name: impl Into<String>,
        score: i64,
        survival_time: f64,
        character: Option<String>,
    ) -> Self {
        ScoreSubmission {
            player_name: player_name.into(),
            score: score.into(),
            survival_time,
            character,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub id: i64,
    pub player_name: String,
    pub score: i64,
    pub survival_time: f64,
    pub character: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResult {
    pub id: i64,
    pub rank: i64,
}

/// Response envelope used by every leaderboard endpoint:
/// `{success: true, data}` or `{success: false, error}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        ApiResponse {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    /// Collapses the envelope into a `Result`, treating a success without
    /// data as malformed.
    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err("Response is missing data".to_string()),
            (false, _) => Err(self
                .error
                .unwrap_or_else(|| "Request failed".to_string())),
        }
    }
}
