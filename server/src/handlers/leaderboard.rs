use crate::db::Db;
use crate::error::AppError;
use crate::models::leaderboard::*;
use crate::services::leaderboard as service;
use ntex::util::Bytes;
use ntex::web::{self, HttpRequest, HttpResponse};
use std::sync::Arc;
use survivor_common::validation;

/// Decodes the query string here rather than through the `Query` extractor,
/// so a bad query still gets the `{success: false, error}` envelope.
pub async fn get_leaderboard(
    db: web::types::State<Arc<Db>>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let query: LeaderboardQuery = serde_urlencoded::from_str(req.query_string())?;
    let limit = validation::parse_limit(query.limit.as_deref())?;
    let entries = service::get_top(&db, limit);
    Ok(HttpResponse::Ok().json(&ApiResponse::ok(entries)))
}

/// Takes the raw body so that undecodable JSON still gets the
/// `{success: false, error}` envelope.
pub async fn submit_score(
    db: web::types::State<Arc<Db>>,
    body: Bytes,
) -> Result<HttpResponse, AppError> {
    let submission: ScoreSubmission = serde_json::from_slice(&body)?;
    let validated = match validation::validate_submission(&submission) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!(reason = %e, "submission rejected");
            return Err(e.into());
        }
    };
    let result = service::submit_score(&db, validated)?;
    Ok(HttpResponse::Ok().json(&ApiResponse::ok(result)))
}
