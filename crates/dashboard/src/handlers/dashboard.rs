//! Read-only data behind the dashboard page.

use axum::{Extension, response::Json};

use crate::{
    database::Database,
    errors::AppError,
    models::{CardData, ErrorResponse, LatestInvoice, Revenue},
};

/// Get the summary card figures.
#[utoipa::path(
    get,
    path = "/dashboard/cards",
    tag = "dashboard",
    responses(
        (status = 200, description = "Invoice and customer totals", body = CardData),
        (status = 500, description = "Database unavailable", body = ErrorResponse)
    )
)]
pub async fn get_card_data(Extension(db): Extension<Database>) -> Result<Json<CardData>, AppError> {
    let cards = db.fetch_card_data().await?;
    Ok(Json(cards))
}

/// Get monthly revenue.
#[utoipa::path(
    get,
    path = "/dashboard/revenue",
    tag = "dashboard",
    responses(
        (status = 200, description = "Revenue per month", body = Vec<Revenue>),
        (status = 500, description = "Database unavailable", body = ErrorResponse)
    )
)]
pub async fn get_revenue(Extension(db): Extension<Database>) -> Result<Json<Vec<Revenue>>, AppError> {
    let revenue = db.fetch_revenue().await?;
    Ok(Json(revenue))
}

/// Get the most recent invoices with their customers.
#[utoipa::path(
    get,
    path = "/dashboard/latest-invoices",
    tag = "dashboard",
    responses(
        (status = 200, description = "Latest invoices, newest first", body = Vec<LatestInvoice>),
        (status = 500, description = "Database unavailable", body = ErrorResponse)
    )
)]
pub async fn get_latest_invoices(
    Extension(db): Extension<Database>,
) -> Result<Json<Vec<LatestInvoice>>, AppError> {
    let invoices = db.fetch_latest_invoices().await?;
    Ok(Json(invoices))
}
