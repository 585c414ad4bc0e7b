use crate::db::Db;
use crate::services::leaderboard as service;
use ntex::web::{self, HttpResponse};
use std::sync::Arc;

pub async fn health(db: web::types::State<Arc<Db>>) -> HttpResponse {
    let timestamp = chrono::Utc::now().to_rfc3339();
    match service::count_entries(&db) {
        Ok(entries) => HttpResponse::Ok().json(&serde_json::json!({
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": timestamp,
            "entries": entries,
        })),
        Err(e) => {
            tracing::warn!(error = %e, "health check could not reach the store");
            HttpResponse::ServiceUnavailable().json(&serde_json::json!({
                "status": "degraded",
                "version": env!("CARGO_PKG_VERSION"),
                "timestamp": timestamp,
            }))
        }
    }
}
