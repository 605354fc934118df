use dashboard::{config::AppConfig, database::Database, run_server};
use seed_data::{db::Seeder, fixtures::Fixtures};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let config = AppConfig::from_env();

    let fixtures = match &config.fixtures_path {
        Some(path) => {
            tracing::info!("Loading seed fixtures from {}", path.display());
            Fixtures::from_json_file(path)?
        }
        None => Fixtures::placeholder(),
    };
    let seeder = Seeder::try_new(fixtures)?;

    let db = Database::connect(&config.database)?;

    let result = run_server(db.clone(), seeder, config.port).await;
    db.close().await;

    result
}
