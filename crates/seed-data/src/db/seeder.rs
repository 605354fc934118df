//! Transactional seeding of the dashboard tables.

use std::sync::Arc;

use serde::Serialize;
use sqlx::{PgConnection, PgPool};
use thiserror::Error;
use tokio::task::{JoinError, JoinSet};
use tracing::{error, info, warn};

use super::schema;
use crate::fixtures::{FixtureError, Fixtures, UserFixture};
use crate::password::hash_password;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Password hashing error: {0}")]
    PasswordHash(String),
    #[error("Seed task failed: {0}")]
    Task(#[from] JoinError),
}

/// Rows inserted by one seed run, per table. Rows skipped on a key conflict
/// are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub users: u64,
    pub customers: u64,
    pub invoices: u64,
    pub revenue: u64,
}

impl SeedSummary {
    pub fn total(&self) -> u64 {
        self.users + self.customers + self.invoices + self.revenue
    }
}

/// Writes a fixture dataset into the database.
#[derive(Debug, Clone)]
pub struct Seeder {
    fixtures: Arc<Fixtures>,
}

impl Seeder {
    /// Creates a seeder for `fixtures` without validating them.
    pub fn new(fixtures: Fixtures) -> Self {
        Self {
            fixtures: Arc::new(fixtures),
        }
    }

    /// Creates a seeder after checking the fixtures fit the schema.
    pub fn try_new(fixtures: Fixtures) -> Result<Self, FixtureError> {
        fixtures.validate()?;
        Ok(Self::new(fixtures))
    }

    pub fn fixtures(&self) -> &Fixtures {
        &self.fixtures
    }

    /// Seeds all four tables in one transaction.
    ///
    /// Either every statement commits or none does. Existing rows with the
    /// same key are left untouched.
    pub async fn seed(&self, pool: &PgPool) -> Result<SeedSummary, SeedError> {
        let mut tx = pool.begin().await?;

        match self.seed_in(&mut tx).await {
            Ok(summary) => {
                tx.commit().await?;
                info!(
                    users = summary.users,
                    customers = summary.customers,
                    invoices = summary.invoices,
                    revenue = summary.revenue,
                    "Seed committed"
                );
                Ok(summary)
            }
            Err(e) => {
                warn!("Seed failed, rolling back: {e}");
                if let Err(rollback_error) = tx.rollback().await {
                    error!("Rollback failed: {rollback_error}");
                }
                Err(e)
            }
        }
    }

    /// Runs every seed step on `conn` without managing a transaction.
    ///
    /// Callers that need atomicity pass an open transaction.
    pub async fn seed_in(&self, conn: &mut PgConnection) -> Result<SeedSummary, SeedError> {
        sqlx::query(schema::CREATE_PGCRYPTO)
            .execute(&mut *conn)
            .await?;

        let users = self.seed_users(conn).await?;
        let customers = self.seed_customers(conn).await?;
        let invoices = self.seed_invoices(conn).await?;
        let revenue = self.seed_revenue(conn).await?;

        Ok(SeedSummary {
            users,
            customers,
            invoices,
            revenue,
        })
    }

    /// Seeds users, hashing their passwords first.
    async fn seed_users(&self, conn: &mut PgConnection) -> Result<u64, SeedError> {
        let users = &self.fixtures.users;
        info!("Seeding {} users...", users.len());

        sqlx::query(schema::CREATE_USERS)
            .execute(&mut *conn)
            .await?;

        let hashes = hash_passwords(users).await?;

        let mut inserted = 0;
        for (user, password_hash) in users.iter().zip(&hashes) {
            let result = sqlx::query(
                r#"
                INSERT INTO users (id, name, email, password)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(user.id)
            .bind(&user.name)
            .bind(&user.email)
            .bind(password_hash)
            .execute(&mut *conn)
            .await?;
            inserted += result.rows_affected();
        }

        info!("Seeded {inserted} users");
        Ok(inserted)
    }

    /// Seeds customers.
    async fn seed_customers(&self, conn: &mut PgConnection) -> Result<u64, SeedError> {
        let customers = &self.fixtures.customers;
        info!("Seeding {} customers...", customers.len());

        sqlx::query(schema::CREATE_CUSTOMERS)
            .execute(&mut *conn)
            .await?;

        let mut inserted = 0;
        for customer in customers {
            let result = sqlx::query(
                r#"
                INSERT INTO customers (id, name, email, image_url)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(customer.id)
            .bind(&customer.name)
            .bind(&customer.email)
            .bind(&customer.image_url)
            .execute(&mut *conn)
            .await?;
            inserted += result.rows_affected();
        }

        info!("Seeded {inserted} customers");
        Ok(inserted)
    }

    /// Seeds invoices.
    ///
    /// Invoice fixtures have no id, so every run inserts a fresh copy; the
    /// conflict clause only guards against generated-id collisions.
    async fn seed_invoices(&self, conn: &mut PgConnection) -> Result<u64, SeedError> {
        let invoices = &self.fixtures.invoices;
        info!("Seeding {} invoices...", invoices.len());

        let orphans = self.fixtures.orphan_invoices().len();
        if orphans > 0 {
            warn!("{orphans} invoices reference customers outside the fixture set");
        }

        sqlx::query(schema::CREATE_INVOICES)
            .execute(&mut *conn)
            .await?;

        let mut inserted = 0;
        for invoice in invoices {
            let result = sqlx::query(
                r#"
                INSERT INTO invoices (customer_id, amount, status, date)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(invoice.customer_id)
            .bind(invoice.amount)
            .bind(invoice.status.as_str())
            .bind(invoice.date)
            .execute(&mut *conn)
            .await?;
            inserted += result.rows_affected();
        }

        info!("Seeded {inserted} invoices");
        Ok(inserted)
    }

    /// Seeds monthly revenue.
    async fn seed_revenue(&self, conn: &mut PgConnection) -> Result<u64, SeedError> {
        let revenue = &self.fixtures.revenue;
        info!("Seeding {} revenue months...", revenue.len());

        sqlx::query(schema::CREATE_REVENUE)
            .execute(&mut *conn)
            .await?;

        let mut inserted = 0;
        for row in revenue {
            let result = sqlx::query(
                r#"
                INSERT INTO revenue (month, revenue)
                VALUES ($1, $2)
                ON CONFLICT (month) DO NOTHING
                "#,
            )
            .bind(&row.month)
            .bind(row.revenue)
            .execute(&mut *conn)
            .await?;
            inserted += result.rows_affected();
        }

        info!("Seeded {inserted} revenue months");
        Ok(inserted)
    }
}

/// Hashes every user's password on the blocking pool.
///
/// Results come back in fixture order. The first failure is returned and the
/// remaining tasks are aborted when the set is dropped.
async fn hash_passwords(users: &[UserFixture]) -> Result<Vec<String>, SeedError> {
    let mut tasks = JoinSet::new();
    for (index, user) in users.iter().enumerate() {
        let password = user.password.clone();
        tasks.spawn_blocking(move || hash_password(&password).map(|hash| (index, hash)));
    }

    let mut hashes = vec![String::new(); users.len()];
    while let Some(joined) = tasks.join_next().await {
        let (index, hash) = joined??;
        hashes[index] = hash;
    }

    Ok(hashes)
}
