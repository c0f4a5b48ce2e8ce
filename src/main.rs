mod cli;

use std::sync::Arc;

use chrono::Utc;
use clap::Parser;
use cli::{Cli, Commands};
use logbox::config::Config;
use logbox::logger::Logger;
use logbox::observability::init_tracing;
use tracing::{info, warn};

type AnyError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[tokio::main]
async fn main() -> Result<(), AnyError> {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    init_tracing(&config.telemetry.log_filter);
    match &config.source {
        Some(path) => info!("Loaded configuration from: {}", path.display()),
        None => warn!("No configuration file found, using defaults and environment overrides"),
    }

    match cli.command {
        Commands::Serve(args) => {
            if let Some(address) = args.address {
                config.server.bind_addr = address;
            }
            let log = Arc::new(Logger::local(&config.store.options())?);
            logbox::api::run(config, log).await?;
        }
        Commands::Query(args) => {
            let mut options = config.store.options();
            options.print_to_stdout = false;
            let log = Logger::local(&options)?;

            let before = args.before.unwrap_or_else(Utc::now);
            for entry in log.get(before, args.level, args.limit)? {
                println!("{}", serde_json::to_string(&entry)?);
            }
        }
        Commands::Show(args) => {
            let mut options = config.store.options();
            options.print_to_stdout = false;
            let log = Logger::local(&options)?;

            let entry = log.get_by_id(&args.log_id)?;
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
    }

    Ok(())
}
