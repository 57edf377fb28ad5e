//! Summarizer HTTP server
//!
//! Actix-web REST API: chat webhook, direct and quick summaries, metadata, history

pub mod history;
pub mod routes;
pub mod state;
pub mod types;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use summarizer_common::{AppConfig, Result};
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

pub use history::HistoryManager;
pub use state::AppState;

/// Build state and serve until shutdown
pub async fn start_server(config: AppConfig) -> Result<()> {
    if !config.has_api_key() {
        warn!("OPENAI_API_KEY is not set; AI summaries will fail until it is configured");
    }

    let bind_addr = config.server_bind_address();
    let state = Arc::new(AppState::new(config)?);

    info!(
        "Starting server on http://{} (model: {}, history: {})",
        bind_addr,
        state.summarizer.model(),
        state.config.history_path().display()
    );

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    info!("Server stopped");
    Ok(())
}
