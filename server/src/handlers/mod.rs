pub mod health;
pub mod leaderboard;
