//! Startup binary: prepares the orderdesk store.
//!
//! Initializes tracing, loads configuration, connects to the database,
//! creates the tables, and seeds the initial catalog. The presentation layer
//! (HTTP or CLI) drives the library crate separately.

use dotenvy::dotenv;
use orderdesk::config::{database, settings};
use orderdesk::core::catalog;
use orderdesk::errors::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing as early as possible
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load .env; non-fatal, env vars can be set externally
    dotenv().ok();

    let app_config = settings::load_default_config()
        .inspect_err(|e| error!("Failed to load application configuration: {e}"))?;

    let database_url = database::resolve_database_url(app_config.database_url.as_deref());
    let db = database::create_connection(&database_url)
        .await
        .inspect(|_| info!("Connected to {database_url}"))
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;

    database::create_tables(&db)
        .await
        .inspect(|()| info!("Database tables created."))
        .inspect_err(|e| error!("Failed to create tables: {e}"))?;

    catalog::seed_catalog(&db, &app_config.catalog)
        .await
        .inspect(|()| info!("Initial catalog seeded."))
        .inspect_err(|e| error!("Failed to seed catalog: {e}"))?;

    info!("orderdesk store is ready.");
    Ok(())
}
