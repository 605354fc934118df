use seed_data::config::DatabaseConfig;
use sqlx::PgPool;
use tracing::info;

use crate::errors::AppError;
use crate::models::{CardData, LatestInvoice, LatestInvoiceRow, Revenue};

/// Number of rows returned by [`Database::fetch_latest_invoices`].
pub const LATEST_INVOICES_LIMIT: i64 = 5;

/// Process-wide handle on the connection pool.
///
/// Created once at startup and closed explicitly at shutdown; cloning shares
/// the same pool.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Builds the pool without opening a connection. Connection errors
    /// surface on first use, so the server can start while the database is
    /// unreachable.
    pub fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let options = config.connect_options()?;
        info!(
            "Using database at {}:{} (ssl: {:?})",
            options.get_host(),
            options.get_port(),
            config.ssl
        );
        let pool = config.pool_options().connect_lazy_with(options);
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Waits for checked-out connections to return, then closes the pool.
    pub async fn close(&self) {
        info!("Closing database pool");
        self.pool.close().await;
    }

    pub async fn fetch_card_data(&self) -> Result<CardData, AppError> {
        let invoice_count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM invoices")
            .fetch_one(&self.pool);
        let customer_count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool);
        let status_totals = sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT
                COALESCE(SUM(CASE WHEN status = 'paid' THEN amount ELSE 0 END), 0)::BIGINT,
                COALESCE(SUM(CASE WHEN status = 'pending' THEN amount ELSE 0 END), 0)::BIGINT
            FROM invoices
            "#,
        )
        .fetch_one(&self.pool);

        let (number_of_invoices, number_of_customers, (paid, pending)) =
            tokio::try_join!(invoice_count, customer_count, status_totals)?;

        Ok(CardData::new(
            number_of_invoices,
            number_of_customers,
            paid,
            pending,
        ))
    }

    pub async fn fetch_revenue(&self) -> Result<Vec<Revenue>, AppError> {
        let revenue = sqlx::query_as::<_, Revenue>("SELECT month, revenue FROM revenue")
            .fetch_all(&self.pool)
            .await?;

        Ok(revenue)
    }

    pub async fn fetch_latest_invoices(&self) -> Result<Vec<LatestInvoice>, AppError> {
        let rows: Vec<LatestInvoiceRow> = sqlx::query_as(
            r#"
            SELECT invoices.id, invoices.amount, customers.name, customers.email,
                   customers.image_url
            FROM invoices
            JOIN customers ON invoices.customer_id = customers.id
            ORDER BY invoices.date DESC
            LIMIT $1
            "#,
        )
        .bind(LATEST_INVOICES_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(LatestInvoice::from).collect())
    }
}
