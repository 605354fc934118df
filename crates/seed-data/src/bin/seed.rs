//! Seeds the dashboard database once and exits.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed
//! ```
//!
//! Set `SEED_FIXTURES_PATH` to seed a JSON dataset instead of the built-in one.

use seed_data::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = DatabaseConfig::from_env();

    let fixtures = match std::env::var("SEED_FIXTURES_PATH") {
        Ok(path) => {
            tracing::info!("Loading fixtures from {}", path);
            Fixtures::from_json_file(&path)?
        }
        Err(_) => Fixtures::placeholder(),
    };
    let seeder = Seeder::try_new(fixtures)?;

    let pool = config
        .pool_options()
        .connect_with(config.connect_options()?)
        .await?;

    tracing::info!("Connected to database");

    let summary = seeder.seed(&pool).await?;

    tracing::info!("Seed completed!");
    tracing::info!("  Users: {}", summary.users);
    tracing::info!("  Customers: {}", summary.customers);
    tracing::info!("  Invoices: {}", summary.invoices);
    tracing::info!("  Revenue: {}", summary.revenue);

    pool.close().await;

    Ok(())
}
