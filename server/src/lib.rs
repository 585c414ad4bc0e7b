//! Office Survivor leaderboard server.
//!
//! Accepts finished runs, stores them append-only in SQLite, and serves the
//! ranked board over HTTP. The same two operations are exposed under a REST
//! path and under RPC-style procedure names.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use ntex::web;

/// Registers every route. Shared by the binary and the HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health::health))
        .service(
            web::resource("/api/leaderboard")
                .route(web::get().to(handlers::leaderboard::get_leaderboard))
                .route(web::post().to(handlers::leaderboard::submit_score)),
        )
        .service(
            web::scope("/api/rpc")
                .route("/leaderboard.getTop", web::get().to(handlers::leaderboard::get_leaderboard))
                .route(
                    "/leaderboard.submitScore",
                    web::post().to(handlers::leaderboard::submit_score),
                ),
        );
}
