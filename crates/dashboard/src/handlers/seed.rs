//! Database seeding handler.

use axum::{Extension, response::Json};
use seed_data::db::Seeder;
use tracing::info;

use crate::{
    database::Database,
    errors::AppError,
    models::{ErrorResponse, SeedResponse},
};

/// Create the dashboard tables and insert the fixture dataset.
///
/// Runs in a single transaction: on failure nothing is written. Safe to call
/// repeatedly, rows whose key already exists are skipped.
#[utoipa::path(
    get,
    path = "/seed",
    tag = "seed",
    responses(
        (status = 200, description = "Database seeded", body = SeedResponse),
        (status = 500, description = "Seeding failed and was rolled back", body = ErrorResponse)
    )
)]
pub async fn seed_database(
    Extension(db): Extension<Database>,
    Extension(seeder): Extension<Seeder>,
) -> Result<Json<SeedResponse>, AppError> {
    let summary = seeder.seed(db.pool()).await?;
    info!("Database seeded, {} rows inserted", summary.total());
    Ok(Json(SeedResponse::seeded()))
}
