use crate::error::CliError;
use clap::Parser;
use commands::Commands;
use connectors::sql::postgres::adapter::PgAdapter;
use pipeline::{
    config::PgConfig,
    load::{LoadArgs, run_load},
    scripts::{SQL_SCRIPTS, run_scripts},
};
use std::path::PathBuf;
use tracing::Level;

mod commands;
mod error;

#[derive(Parser)]
#[command(name = "tripload", version = "0.1.0", about = "Curated trip loading pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Initialize logger
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Load {
            source_path,
            pg_url,
            pg_user,
            pg_password,
            table,
        } => {
            let mut config = pg_url
                .parse::<tokio_postgres::Config>()
                .map_err(|err| CliError::InvalidUrl(err.to_string()))?;
            config.user(&pg_user).password(&pg_password);

            let adapter = PgAdapter::connect(config).await?;
            let args = LoadArgs {
                source_path: PathBuf::from(source_path),
                target_table: table,
            };
            let summary = run_load(&adapter, &args).await?;

            println!(
                "Loaded {} rows into {} from {}",
                summary.rows_loaded,
                summary.target_table,
                summary.source_path.display()
            );
        }
        Commands::RunSql => {
            let config = PgConfig::from_env()?;
            let adapter = PgAdapter::connect(config.to_pg_config()).await?;
            run_scripts(&adapter, &SQL_SCRIPTS).await?;

            println!("SQL pipeline completed successfully");
        }
    }

    Ok(())
}
