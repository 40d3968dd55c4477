use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use employee_dms::config::{DEFAULT_COLLECTION, DEFAULT_DATABASE, DEFAULT_TIMEOUT_SECS, DEFAULT_URI};
use employee_dms::{serve, Invocation, MemoryStore, MongoStore, StoreConfig};

/// List and insert employee records in MongoDB.
///
/// With no arguments, reads commands from stdin: `1` lists every employee,
/// `2` prompts for name, age and gender and inserts one.
/// `0 <name> <age> <gender>` inserts a single employee and exits.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// MongoDB connection string
    #[arg(long, env = "EMPLOYEE_DMS_URI", default_value = DEFAULT_URI)]
    uri: String,

    /// Database name
    #[arg(long, env = "EMPLOYEE_DMS_DATABASE", default_value = DEFAULT_DATABASE)]
    database: String,

    /// Collection name
    #[arg(long, env = "EMPLOYEE_DMS_COLLECTION", default_value = DEFAULT_COLLECTION)]
    collection: String,

    /// Deadline for each database operation, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Keep records in process memory instead of MongoDB; nothing survives exit
    #[arg(long, conflicts_with = "uri")]
    memory: bool,

    /// `0 <name> <age> <gender>` for a single non-interactive insert
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

impl Cli {
    fn store_config(&self) -> StoreConfig {
        StoreConfig {
            uri: self.uri.clone(),
            database: self.database.clone(),
            collection: self.collection.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let invocation = Invocation::from_positionals(&cli.args)?;
    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let output = tokio::io::stdout();

    let result = if cli.memory {
        warn!("using in-memory store, records are lost on exit");
        serve(&MemoryStore::new(), invocation, input, output).await
    } else {
        let store = MongoStore::connect(&cli.store_config())
            .await
            .context("can't connect to mongo")?;
        serve(&store, invocation, input, output).await
    };
    result.context("employee loop stopped")
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
