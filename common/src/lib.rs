//! Office Survivor leaderboard: wire models and the validation rules shared
//! by the game client and the leaderboard server.
//!
//! Nothing in this crate touches the network or the database, so both sides
//! run exactly the same checks.

pub mod models;
pub mod validation;

pub use models::{ApiResponse, LeaderboardEntry, ScoreSubmission, SubmitResult};
pub use validation::{Limit, ValidatedSubmission, ValidationError};
