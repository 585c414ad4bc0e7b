//! Score submission client for Office Survivor.
//!
//! Sends finished runs to the leaderboard server and fetches the ranked board
//! for the menu screen.

pub mod board;
pub mod client;
pub mod config;
pub mod error;

pub use client::LeaderboardClient;
pub use config::ClientConfig;
pub use error::ClientError;
