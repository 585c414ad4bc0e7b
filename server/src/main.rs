use clap::Parser;
use ntex::web;
use ntex_cors::Cors;
use std::sync::Arc;
use survivor_server::config::ServerConfig;
use survivor_server::db::Db;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[ntex::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::parse();

    let db = match Db::open(&config.database_path, config.busy_timeout()) {
        Ok(db) => Arc::new(db),
        Err(e) => {
            tracing::error!(path = %config.database_path.display(), error = %e, "failed to open database");
            return Err(std::io::Error::other(e));
        }
    };

    info!("Office Survivor leaderboard v{} starting on {}", env!("CARGO_PKG_VERSION"), config.bind_addr());
    info!("   GET  /api/leaderboard?limit=N");
    info!("   POST /api/leaderboard");

    let cors_origin = config.cors_origin.clone();
    web::HttpServer::new(move || {
        web::App::new()
            .state(db.clone())
            .wrap(
                Cors::new()
                    .allowed_origin(&cors_origin)
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec!["Content-Type"])
                    .max_age(3600)
                    .finish(),
            )
            .configure(survivor_server::configure)
    })
    .bind(config.bind_addr())?
    .run()
    .await
}
