use std::path::PathBuf;

use clap::Parser;

/// Notes CRUD API server.
#[derive(Debug, Parser)]
#[command(name = "scrawld", version, about)]
pub struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Listen host, overriding the configured value.
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port, overriding the configured value.
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Document store connection string, overriding the configured value.
    #[arg(long)]
    pub database_url: Option<String>,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}
