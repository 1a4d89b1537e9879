use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Load the curated trip dataset into the target table
    Load {
        #[arg(long, help = "Path to the curated Parquet dataset")]
        source_path: String,

        #[arg(long, help = "Target database connection URL (postgresql://...)")]
        pg_url: String,

        #[arg(long, help = "Target database user")]
        pg_user: String,

        #[arg(long, help = "Target database password")]
        pg_password: String,

        #[arg(long, help = "Destination table, optionally schema-qualified")]
        table: String,
    },
    /// Run the SQL transformation and validation scripts, in fixed order.
    /// Connection parameters come from PG_HOST, PG_PORT, PG_DB, PG_USER
    /// and PG_PASSWORD.
    RunSql,
}
