use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use logbox::entry::Level;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "logbox")]
#[command(about = "Local development log store", long_about = None)]
pub struct Cli {
    /// Configuration file (overrides LOGBOX_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the public directory and the log query API
    Serve(ServeArgs),
    /// Print stored entries, most recent first
    Query(QueryArgs),
    /// Print one stored entry
    Show(ShowArgs),
}

#[derive(clap::Args, Debug)]
pub struct ServeArgs {
    /// Address to bind the HTTP server to (overrides server.bind_addr)
    #[arg(long)]
    pub address: Option<SocketAddr>,
}

#[derive(clap::Args, Debug)]
pub struct QueryArgs {
    /// Only entries strictly older than this RFC 3339 time
    #[arg(long)]
    pub before: Option<DateTime<Utc>>,

    /// ANY, INFO, WARNING, ERROR or CRITICAL
    #[arg(long, default_value = "ANY")]
    pub level: Level,

    #[arg(long, default_value_t = 20)]
    pub limit: usize,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    pub log_id: String,
}
