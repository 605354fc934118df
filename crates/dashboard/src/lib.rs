pub mod config;
pub mod database;
pub mod errors;
pub mod handlers;
pub mod models;

use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use seed_data::db::Seeder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    database::Database,
    handlers::{
        get_card_data, get_latest_invoices, get_revenue, health_check, seed_database,
    },
    models::{CardData, ErrorResponse, LatestInvoice, Revenue, SeedResponse},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health_check,
        handlers::seed_database,
        handlers::get_card_data,
        handlers::get_revenue,
        handlers::get_latest_invoices,
    ),
    components(schemas(SeedResponse, ErrorResponse, CardData, Revenue, LatestInvoice)),
    tags(
        (name = "stats", description = "Service health"),
        (name = "seed", description = "Fixture seeding"),
        (name = "dashboard", description = "Dashboard data")
    )
)]
pub struct ApiDoc;

pub fn create_router(db: Database, seeder: Seeder) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/seed", get(seed_database))
        // Dashboard data
        .route("/dashboard/cards", get(get_card_data))
        .route("/dashboard/revenue", get(get_revenue))
        .route("/dashboard/latest-invoices", get(get_latest_invoices))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(Extension(db))
        .layer(Extension(seeder))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
}

pub async fn run_server(db: Database, seeder: Seeder, port: u16) -> anyhow::Result<()> {
    let app = create_router(db, seeder);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    tracing::info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
