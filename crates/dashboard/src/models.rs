use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

pub const SEED_SUCCESS_MESSAGE: &str = "Database seeded successfully";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SeedResponse {
    pub message: String,
}

impl SeedResponse {
    pub fn seeded() -> Self {
        Self {
            message: SEED_SUCCESS_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Figures shown on the dashboard summary cards.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CardData {
    pub number_of_invoices: i64,
    pub number_of_customers: i64,
    pub total_paid_invoices: String,
    pub total_pending_invoices: String,
    pub paid_cents: i64,
    pub pending_cents: i64,
}

impl CardData {
    pub fn new(
        number_of_invoices: i64,
        number_of_customers: i64,
        paid_cents: i64,
        pending_cents: i64,
    ) -> Self {
        Self {
            number_of_invoices,
            number_of_customers,
            total_paid_invoices: format_currency(paid_cents),
            total_pending_invoices: format_currency(pending_cents),
            paid_cents,
            pending_cents,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Revenue {
    pub month: String,
    pub revenue: i32,
}

/// Row shape of the latest-invoices query.
#[derive(Debug, FromRow)]
pub struct LatestInvoiceRow {
    pub id: Uuid,
    pub amount: i32,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LatestInvoice {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub amount: String,
}

impl From<LatestInvoiceRow> for LatestInvoice {
    fn from(row: LatestInvoiceRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            image_url: row.image_url,
            amount: format_currency(row.amount.into()),
        }
    }
}

/// Formats an amount in cents as US dollars, e.g. `$1,234.56`.
pub fn format_currency(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let digits = (cents / 100).to_string();

    let mut dollars = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            dollars.push(',');
        }
        dollars.push(ch);
    }

    format!("{sign}${dollars}.{:02}", cents % 100)
}
