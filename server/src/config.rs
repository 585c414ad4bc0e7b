use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Leaderboard server settings. Every flag falls back to an environment
/// variable, then to its default.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Office Survivor leaderboard server")]
pub struct ServerConfig {
    /// Address to bind to
    #[arg(short = 'H', long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3001)]
    pub port: u16,
    /// SQLite database file
    #[arg(long, env = "DATABASE_PATH", default_value = "office-survivor.db")]
    pub database_path: PathBuf,
    /// How long a statement waits on a locked database before failing
    #[arg(long, env = "DB_BUSY_TIMEOUT_MS", default_value_t = 5000)]
    pub db_busy_timeout_ms: u64,
    /// Origin allowed by CORS
    #[arg(long, env = "CORS_ORIGIN", default_value = "*")]
    pub cors_origin: String,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.db_busy_timeout_ms)
    }
}
