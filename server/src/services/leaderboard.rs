use crate::db::Db;
use crate::error::AppError;
use crate::models::leaderboard::*;
use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Row};
use survivor_common::{Limit, ValidatedSubmission};

const ENTRY_COLUMNS: &str = "id, player_name, score, survival_time, character, created_at";

fn entry_from_row(row: &Row<'_>) -> Result<LeaderboardEntry, rusqlite::Error> {
    let created_at: String = row.get(5)?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e)))?;

    Ok(LeaderboardEntry {
        id: row.get(0)?,
        player_name: row.get(1)?,
        score: row.get(2)?,
        survival_time: row.get(3)?,
        character: row.get(4)?,
        created_at,
    })
}

/// Appends one run and reports where it landed.
///
/// Every row already stored with a score at least as high ranks ahead of the
/// new one, since equal scores keep insertion order. Count and insert share a
/// transaction under the connection lock, and the insert is the last
/// statement before commit, so a failure at any step leaves no row behind.
pub fn submit_score(db: &Db, entry: ValidatedSubmission) -> Result<SubmitResult, AppError> {
    let character = entry
        .character()
        .filter(|c| !c.is_empty())
        .unwrap_or(UNKNOWN_CHARACTER);

    let result = db.with_conn(|conn| {
        let tx = conn.unchecked_transaction()?;

        let ahead: i64 = tx.query_row(
            "SELECT COUNT(*) FROM leaderboard WHERE score >= ?1",
            params![entry.score()],
            |row| row.get(0),
        )?;

        let id: i64 = tx.query_row(
            "INSERT INTO leaderboard (player_name, score, survival_time, character)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id",
            params![entry.player_name(), entry.score(), entry.survival_time(), character],
            |row| row.get(0),
        )?;

        tx.commit()?;
        Ok(SubmitResult {
            id,
            rank: ahead + 1,
        })
    })?;

    tracing::info!(
        id = result.id,
        rank = result.rank,
        score = entry.score(),
        player = entry.player_name(),
        "score submitted"
    );
    Ok(result)
}

pub fn try_get_top(db: &Db, limit: Limit) -> Result<Vec<LeaderboardEntry>, AppError> {
    Ok(db.with_conn(|conn| {
        let mut stmt = conn.prepare(&format!(
            "SELECT {ENTRY_COLUMNS} FROM leaderboard
             ORDER BY score DESC, id ASC
             LIMIT ?1"
        ))?;
        let rows = stmt.query_map(params![limit.get()], entry_from_row)?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    })?)
}

/// Top `limit` entries. A failing store yields an empty board; the board is
/// display-only, so the failure is logged instead of returned.
pub fn get_top(db: &Db, limit: Limit) -> Vec<LeaderboardEntry> {
    match try_get_top(db, limit) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(error = %e, limit = limit.get(), "leaderboard read failed, serving empty board");
            Vec::new()
        }
    }
}

pub fn count_entries(db: &Db) -> Result<i64, AppError> {
    Ok(db.with_conn(|conn| {
        conn.query_row("SELECT COUNT(*) FROM leaderboard", [], |row| row.get(0))
    })?)
}
