use clap::Args;
use std::time::Duration;

#[derive(Args, Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the leaderboard server
    #[arg(long, env = "SURVIVOR_API_URL", default_value = "http://localhost:3001")]
    pub base_url: String,
    /// Per-request timeout in milliseconds
    #[arg(long, env = "SURVIVOR_TIMEOUT_MS", default_value_t = 5000)]
    pub timeout_ms: u32,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        ClientConfig {
            base_url: base_url.into(),
            timeout_ms: u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig::new("http://localhost:3001", Duration::from_secs(5))
    }
}
