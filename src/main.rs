use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use stetica::config::AppConfig;
use stetica::db;
use stetica::handlers;
use stetica::services::ledger::{Ledger, SqliteStore};
use stetica::services::messaging::whatsapp::WhatsAppLinkProvider;
use stetica::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let conn = db::init_db(&config.database_url)?;
    let store = SqliteStore::new(Arc::new(Mutex::new(conn)));
    let ledger = Ledger::new(
        Arc::new(store),
        Duration::from_millis(config.submit_delay_ms),
    );

    let notifier = WhatsAppLinkProvider::new(
        config.business_name.clone(),
        config.whatsapp_number.clone(),
    );

    let state = Arc::new(AppState {
        config: config.clone(),
        ledger,
        notifier: Box::new(notifier),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/services", get(handlers::catalog::get_services))
        .route("/api/products", get(handlers::catalog::get_products))
        .route("/api/hours", get(handlers::catalog::get_hours))
        .route("/api/contact", get(handlers::catalog::get_contact))
        .route(
            "/api/bookings",
            post(handlers::bookings::submit_booking).get(handlers::bookings::find_bookings),
        )
        .route(
            "/api/admin/bookings/:id/status",
            post(handlers::bookings::update_status),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
