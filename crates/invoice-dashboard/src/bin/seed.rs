//! Invoice Dashboard seeder.
//!
//! Creates the dashboard tables if needed and loads placeholder data.
//! Safe to rerun: rows that already exist are skipped.
//!
//! Run with: `cargo run --bin invoice-seed`

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use invoice_dashboard::{
    config::DatabaseConfig,
    db::{
        create_pool,
        seed::{seed, Fixtures, SeedTable},
    },
};

#[derive(Parser, Debug)]
#[command(name = "invoice-seed")]
#[command(version, about = "Create the dashboard tables and load placeholder data", long_about = None)]
struct Cli {
    /// Seed only this table (repeatable); all tables by default
    #[arg(long = "only", value_enum, value_name = "TABLE")]
    only: Vec<SeedTable>,

    /// Load fixtures from a JSON file instead of the bundled placeholder data
    #[arg(long, value_name = "PATH")]
    fixtures: Option<PathBuf>,
}

impl Cli {
    fn tables(&self) -> Vec<SeedTable> {
        if self.only.is_empty() {
            SeedTable::ALL.to_vec()
        } else {
            self.only.clone()
        }
    }

    fn load_fixtures(&self) -> Result<Fixtures> {
        match &self.fixtures {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read fixtures from {}", path.display()))?;
                Ok(Fixtures::from_json(&json)?)
            }
            None => Ok(Fixtures::placeholder()?),
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,invoice_dashboard=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let db_config = DatabaseConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load database config, using defaults");
        DatabaseConfig::default()
    });

    let fixtures = cli.load_fixtures()?;
    let tables = cli.tables();

    let pool = create_pool(&DatabaseConfig {
        max_connections: 1,
        min_connections: 0,
        ..db_config
    })
    .await?;
    let mut conn = pool.acquire().await?;

    let reports = seed(&mut conn, &fixtures, &tables).await?;

    for report in &reports {
        tracing::info!(
            table = report.table.name(),
            offered = report.offered,
            inserted = report.inserted,
            skipped = report.offered as u64 - report.inserted,
            "Table ready"
        );
    }

    drop(conn);
    pool.close().await;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "An error occurred while attempting to seed the database");
        return Err(e);
    }

    tracing::info!("Seeding complete");
    Ok(())
}
