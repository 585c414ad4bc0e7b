use crate::config::ClientConfig;
use crate::error::ClientError;
use ntex::http::client::Client;
use ntex::time::Millis;
use survivor_common::validation::validate_submission;
use survivor_common::{ApiResponse, LeaderboardEntry, Limit, ScoreSubmission, SubmitResult};
use tracing::{debug, warn};

/// Talks to the leaderboard server on behalf of the game.
pub struct LeaderboardClient {
    http: Client,
    config: ClientConfig,
}

impl LeaderboardClient {
    /// Must be called from within a running ntex runtime.
    pub fn new(config: ClientConfig) -> Self {
        let http = Client::build().timeout(Millis(config.timeout_ms)).finish();
        LeaderboardClient { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn try_fetch_leaderboard(&self, limit: Limit) -> Result<Vec<LeaderboardEntry>, ClientError> {
        let url = self.config.url(&format!("/api/leaderboard?limit={}", limit.get()));
        debug!(%url, "fetching leaderboard");

        let mut response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let envelope: ApiResponse<Vec<LeaderboardEntry>> = response
            .json()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        interpret(envelope)
    }

    /// Board for display. Any failure leaves the board empty rather than
    /// interrupting the menu.
    pub async fn fetch_leaderboard(&self, limit: Limit) -> Vec<LeaderboardEntry> {
        match self.try_fetch_leaderboard(limit).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "leaderboard unavailable");
                Vec::new()
            }
        }
    }

    /// Validates locally, then submits. An invalid run never leaves the
    /// client. No retry; the caller decides whether to resubmit.
    pub async fn submit_score(&self, submission: &ScoreSubmission) -> Result<SubmitResult, ClientError> {
        validate_submission(submission)?;

        let url = self.config.url("/api/leaderboard");
        let mut response = self
            .http
            .post(url)
            .send_json(submission)
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let status = response.status();
        let envelope: ApiResponse<SubmitResult> = response
            .json()
            .await
            .map_err(|e| ClientError::Transport(format!("{} (status {})", e, status)))?;

        let result = interpret(envelope)?;
        debug!(id = result.id, rank = result.rank, "score accepted");
        Ok(result)
    }
}

fn interpret<T>(envelope: ApiResponse<T>) -> Result<T, ClientError> {
    envelope.into_result().map_err(ClientError::Rejected)
}
